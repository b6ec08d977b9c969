use std::collections::HashMap;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Deserialize;

use crate::error::{Result, SeatAdvisorError};
use crate::types::{
    Explanation, Language, MessageId, RecommendationEntry, SeatSuggestion, SuggestionOutput,
    TimeCategory,
};

const EN_TABLE_JSON: &str = include_str!("../assets/i18n/en.json");
const AR_TABLE_JSON: &str = include_str!("../assets/i18n/ar.json");

static BUILTIN_CATALOG: LazyLock<StringCatalog> = LazyLock::new(|| {
    let mut catalog = StringCatalog::default();
    for (language, json) in [(Language::En, EN_TABLE_JSON), (Language::Ar, AR_TABLE_JSON)] {
        if let Err(err) = catalog.insert_json(language, json) {
            log::error!("built-in `{}` string table is unusable: {}", language.tag(), err);
        }
    }
    catalog
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    SeatSuggestions,
    SeatExplanations,
    TravelTimeMap,
    Messages,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StringTable {
    pub seat_suggestions: HashMap<String, String>,
    pub seat_explanations: HashMap<String, String>,
    pub travel_time_map: HashMap<String, String>,
    pub messages: HashMap<String, String>,
}

impl StringTable {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn section(&self, section: Section) -> &HashMap<String, String> {
        match section {
            Section::SeatSuggestions => &self.seat_suggestions,
            Section::SeatExplanations => &self.seat_explanations,
            Section::TravelTimeMap => &self.travel_time_map,
            Section::Messages => &self.messages,
        }
    }

    // empty strings count as missing
    pub fn get(&self, section: Section, key: &str) -> Option<&str> {
        self.section(section)
            .get(key)
            .map(String::as_str)
            .filter(|text| !text.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringCatalog {
    tables: HashMap<Language, StringTable>,
}

impl StringCatalog {
    pub fn builtin() -> &'static StringCatalog {
        &BUILTIN_CATALOG
    }

    pub fn insert(&mut self, language: Language, table: StringTable) -> Option<StringTable> {
        self.tables.insert(language, table)
    }

    pub fn insert_json(&mut self, language: Language, json: &str) -> Result<()> {
        let table = StringTable::from_json(json)?;
        self.insert(language, table);
        Ok(())
    }

    pub fn with_table(mut self, language: Language, table: StringTable) -> Self {
        self.insert(language, table);
        self
    }

    pub fn table(&self, language: Language) -> Option<&StringTable> {
        self.tables.get(&language)
    }

    fn lookup(&self, language: Language, section: Section, key: &str) -> Option<&str> {
        self.table(language)?.get(section, key)
    }

    /// Resolves `key` in `language`, then in `fallback`, then gives back the key itself.
    pub fn resolve_with<'a>(
        &'a self,
        language: Language,
        fallback: Language,
        section: Section,
        key: &'static str,
    ) -> &'a str {
        if let Some(text) = self.lookup(language, section, key) {
            return text;
        }
        if fallback != language {
            if let Some(text) = self.lookup(fallback, section, key) {
                log::warn!(
                    "no `{}` text for `{}`, using `{}`",
                    language.tag(),
                    key,
                    fallback.tag()
                );
                return text;
            }
        }
        log::warn!("no text for `{}` in any table, using the key", key);
        key
    }

    pub fn resolve(&self, language: Language, section: Section, key: &'static str) -> &str {
        self.resolve_with(language, Language::En, section, key)
    }

    pub fn suggestion_text(&self, language: Language, suggestion: SeatSuggestion) -> &str {
        self.resolve(language, Section::SeatSuggestions, suggestion.key())
    }

    pub fn explanation_text(&self, language: Language, explanation: Explanation) -> &str {
        self.resolve(language, Section::SeatExplanations, explanation.key())
    }

    pub fn time_category_label(&self, language: Language, category: TimeCategory) -> &str {
        self.resolve(language, Section::TravelTimeMap, category.key())
    }

    pub fn message(&self, language: Language, message: MessageId) -> &str {
        self.resolve(language, Section::Messages, message.key())
    }

    pub fn localize(
        &self,
        entry: &RecommendationEntry,
        language: Language,
        fallback: Language,
    ) -> SuggestionOutput {
        SuggestionOutput {
            direct_suggestion: self
                .resolve_with(
                    language,
                    fallback,
                    Section::SeatSuggestions,
                    entry.suggestion.key(),
                )
                .to_string(),
            explanation: self
                .resolve_with(
                    language,
                    fallback,
                    Section::SeatExplanations,
                    entry.explanation.key(),
                )
                .to_string(),
        }
    }
}

impl FromStr for Language {
    type Err = SeatAdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        let primary = s
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default();
        Language::ALL
            .into_iter()
            .find(|language| language.tag().eq_ignore_ascii_case(primary))
            .ok_or_else(|| SeatAdvisorError::UnknownLanguage(s.to_string()))
    }
}
