use std::borrow::Cow;

use crate::angles;
use crate::error::{Result, SeatAdvisorError};
use crate::i18n::{Section, StringCatalog};
use crate::lookup_table;
use crate::sun;
use crate::types::{
    AdvisorConfig, GeoPoint, Language, Recommendation, SuggestionOutput, TimeCategory,
};

#[derive(Debug, Clone)]
pub struct SeatAdvisor {
    config: AdvisorConfig,
    catalog: Cow<'static, StringCatalog>,
}

impl Default for SeatAdvisor {
    fn default() -> Self {
        Self {
            config: AdvisorConfig::default(),
            catalog: Cow::Borrowed(StringCatalog::builtin()),
        }
    }
}

impl SeatAdvisor {
    pub fn new(config: AdvisorConfig) -> Result<Self> {
        config.day_periods.validate()?;
        Ok(Self {
            config,
            catalog: Cow::Borrowed(StringCatalog::builtin()),
        })
    }

    pub fn with_catalog(mut self, catalog: StringCatalog) -> Self {
        self.catalog = Cow::Owned(catalog);
        self
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    pub fn catalog(&self) -> &StringCatalog {
        &self.catalog
    }

    pub fn time_category(&self, hour: u32) -> Result<TimeCategory> {
        if hour >= sun::HOURS_PER_DAY {
            return Err(SeatAdvisorError::InvalidHour(hour));
        }
        Ok(self.config.day_periods.classify(hour))
    }

    pub fn recommend(
        &self,
        start: &GeoPoint,
        end: &GeoPoint,
        time_category: TimeCategory,
    ) -> Result<Recommendation> {
        // checked before any bearing is computed
        if start.same_location(end) {
            return Err(SeatAdvisorError::SameLocation { point: *start });
        }
        start.validate()?;
        end.validate()?;

        let bearing = angles::initial_bearing(start, end);
        let sector = angles::classify_bearing(bearing);
        let sun = sun::sun_bucket(time_category);
        let entry = lookup_table::lookup_recommendation(sector, sun);
        log::debug!(
            "{} -> {}: bearing {:.2}° ({}), sun {:?} -> {:?}",
            start,
            end,
            bearing,
            sector,
            sun,
            entry
        );

        Ok(Recommendation {
            bearing,
            sector,
            time_category,
            sun,
            entry,
        })
    }

    pub fn produce_suggestion(
        &self,
        start: &GeoPoint,
        end: &GeoPoint,
        time_category: TimeCategory,
        language: Language,
    ) -> Result<SuggestionOutput> {
        let recommendation = self.recommend(start, end, time_category)?;
        Ok(self
            .catalog
            .localize(&recommendation.entry, language, self.config.fallback_language))
    }

    pub fn suggest_for_hour(
        &self,
        start: &GeoPoint,
        end: &GeoPoint,
        hour: u32,
        language: Language,
    ) -> Result<SuggestionOutput> {
        let time_category = self.time_category(hour)?;
        self.produce_suggestion(start, end, time_category, language)
    }

    pub fn error_message(&self, error: &SeatAdvisorError, language: Option<Language>) -> String {
        let language = language.unwrap_or(self.config.default_language);
        self.catalog
            .resolve_with(
                language,
                self.config.fallback_language,
                Section::Messages,
                error.message_id().key(),
            )
            .to_string()
    }
}

pub fn produce_suggestion(
    start: &GeoPoint,
    end: &GeoPoint,
    time_category: TimeCategory,
    language: Language,
) -> Result<SuggestionOutput> {
    SeatAdvisor::default().produce_suggestion(start, end, time_category, language)
}
