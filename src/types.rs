use std::fmt;

use serde::{Deserialize, Serialize, Serializer};

use crate::error::{Result, SeatAdvisorError};

pub const MAX_LATITUDE: f64 = 90.0;
pub const MAX_LONGITUDE: f64 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        let point = Self { lat, lon };
        point.validate()?;
        Ok(point)
    }

    pub fn validate(&self) -> Result<()> {
        check_range("latitude", self.lat, MAX_LATITUDE)?;
        check_range("longitude", self.lon, MAX_LONGITUDE)
    }

    pub fn same_location(&self, other: &GeoPoint) -> bool {
        self.lat == other.lat && self.lon == other.lon
    }
}

fn check_range(field: &'static str, value: f64, limit: f64) -> Result<()> {
    if value.is_finite() && (-limit..=limit).contains(&value) {
        Ok(())
    } else {
        Err(SeatAdvisorError::InvalidCoordinate {
            field,
            value,
            min: -limit,
            max: limit,
        })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lon)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DirectionSector {
    N,
    NE,
    E,
    SE,
    S,
    SW,
    W,
    NW,
}

impl DirectionSector {
    // clockwise from north, so ALL[s.index()] == s
    pub const ALL: [DirectionSector; 8] = [
        Self::N,
        Self::NE,
        Self::E,
        Self::SE,
        Self::S,
        Self::SW,
        Self::W,
        Self::NW,
    ];

    pub const WIDTH_DEGREES: f64 = 45.0;

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn center(self) -> f64 {
        self.index() as f64 * Self::WIDTH_DEGREES
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::N => "North",
            Self::NE => "North-East",
            Self::E => "East",
            Self::SE => "South-East",
            Self::S => "South",
            Self::SW => "South-West",
            Self::W => "West",
            Self::NW => "North-West",
        }
    }
}

impl fmt::Display for DirectionSector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeCategory {
    Morning,
    Afternoon,
    Evening,
}

impl TimeCategory {
    pub const ALL: [TimeCategory; 3] = [Self::Morning, Self::Afternoon, Self::Evening];

    pub fn key(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SunBucket {
    East,
    West,
    None,
}

impl SunBucket {
    pub fn azimuth(self) -> Option<f64> {
        match self {
            Self::East => Some(90.0),
            Self::West => Some(270.0),
            Self::None => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lateral {
    Left,
    Right,
    Either,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeatSuggestion {
    SitLeft,
    SitRight,
    SitFront,
    SitBack,
    SitAnySideFront,
    SitAnySideBack,
    SitFrontLeft,
    SitFrontRight,
    SitBackLeft,
    SitBackRight,
    SitMiddle,
    SitAnywhere,
}

impl SeatSuggestion {
    pub const ALL: [SeatSuggestion; 12] = [
        Self::SitLeft,
        Self::SitRight,
        Self::SitFront,
        Self::SitBack,
        Self::SitAnySideFront,
        Self::SitAnySideBack,
        Self::SitFrontLeft,
        Self::SitFrontRight,
        Self::SitBackLeft,
        Self::SitBackRight,
        Self::SitMiddle,
        Self::SitAnywhere,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::SitLeft => "sitLeft",
            Self::SitRight => "sitRight",
            Self::SitFront => "sitFront",
            Self::SitBack => "sitBack",
            Self::SitAnySideFront => "sitAnySideFront",
            Self::SitAnySideBack => "sitAnySideBack",
            Self::SitFrontLeft => "sitFrontLeft",
            Self::SitFrontRight => "sitFrontRight",
            Self::SitBackLeft => "sitBackLeft",
            Self::SitBackRight => "sitBackRight",
            Self::SitMiddle => "sitMiddle",
            Self::SitAnywhere => "sitAnywhere",
        }
    }

    pub fn lateral(self) -> Lateral {
        match self {
            Self::SitLeft | Self::SitFrontLeft | Self::SitBackLeft => Lateral::Left,
            Self::SitRight | Self::SitFrontRight | Self::SitBackRight => Lateral::Right,
            _ => Lateral::Either,
        }
    }
}

impl Serialize for SeatSuggestion {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Explanation {
    TravelNorthSunEast,
    TravelNorthEastSunEast,
    TravelEastSunEast,
    TravelSouthEastSunEast,
    TravelSouthSunEast,
    TravelSouthWestSunEast,
    TravelWestSunEast,
    TravelNorthWestSunEast,
    TravelNorthSunWest,
    TravelNorthEastSunWest,
    TravelEastSunWest,
    TravelSouthEastSunWest,
    TravelSouthSunWest,
    TravelSouthWestSunWest,
    TravelWestSunWest,
    TravelNorthWestSunWest,
    MiddleGeneral,
    NoSun,
}

impl Explanation {
    pub const ALL: [Explanation; 18] = [
        Self::TravelNorthSunEast,
        Self::TravelNorthEastSunEast,
        Self::TravelEastSunEast,
        Self::TravelSouthEastSunEast,
        Self::TravelSouthSunEast,
        Self::TravelSouthWestSunEast,
        Self::TravelWestSunEast,
        Self::TravelNorthWestSunEast,
        Self::TravelNorthSunWest,
        Self::TravelNorthEastSunWest,
        Self::TravelEastSunWest,
        Self::TravelSouthEastSunWest,
        Self::TravelSouthSunWest,
        Self::TravelSouthWestSunWest,
        Self::TravelWestSunWest,
        Self::TravelNorthWestSunWest,
        Self::MiddleGeneral,
        Self::NoSun,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::TravelNorthSunEast => "travelN_sunE",
            Self::TravelNorthEastSunEast => "travelNE_sunE",
            Self::TravelEastSunEast => "travelE_sunE",
            Self::TravelSouthEastSunEast => "travelSE_sunE",
            Self::TravelSouthSunEast => "travelS_sunE",
            Self::TravelSouthWestSunEast => "travelSW_sunE",
            Self::TravelWestSunEast => "travelW_sunE",
            Self::TravelNorthWestSunEast => "travelNW_sunE",
            Self::TravelNorthSunWest => "travelN_sunW",
            Self::TravelNorthEastSunWest => "travelNE_sunW",
            Self::TravelEastSunWest => "travelE_sunW",
            Self::TravelSouthEastSunWest => "travelSE_sunW",
            Self::TravelSouthSunWest => "travelS_sunW",
            Self::TravelSouthWestSunWest => "travelSW_sunW",
            Self::TravelWestSunWest => "travelW_sunW",
            Self::TravelNorthWestSunWest => "travelNW_sunW",
            Self::MiddleGeneral => "middleGeneral",
            Self::NoSun => "noSun",
        }
    }
}

impl Serialize for Explanation {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    SameCoordinatesError,
    InvalidCoordinateRange,
    EnterTravelTime,
    ErrorCalculatingSuggestion,
}

impl MessageId {
    pub fn key(self) -> &'static str {
        match self {
            Self::SameCoordinatesError => "sameCoordinatesError",
            Self::InvalidCoordinateRange => "invalidCoordinateRange",
            Self::EnterTravelTime => "enterTravelTime",
            Self::ErrorCalculatingSuggestion => "errorCalculatingSuggestion",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationEntry {
    pub suggestion: SeatSuggestion,
    pub explanation: Explanation,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub bearing: f64,
    pub sector: DirectionSector,
    pub time_category: TimeCategory,
    pub sun: SunBucket,
    pub entry: RecommendationEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionOutput {
    pub direct_suggestion: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Ar,
}

impl Language {
    pub const ALL: [Language; 2] = [Self::En, Self::Ar];

    pub fn tag(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }

    pub fn is_rtl(self) -> bool {
        matches!(self, Self::Ar)
    }
}

// anything outside [morning_start, evening_start), night included, is evening
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayPeriodBounds {
    pub morning_start: u32,
    pub afternoon_start: u32,
    pub evening_start: u32,
}

impl Default for DayPeriodBounds {
    fn default() -> Self {
        Self {
            morning_start: 4,
            afternoon_start: 12,
            evening_start: 18,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    pub default_language: Language,
    pub fallback_language: Language,
    pub day_periods: DayPeriodBounds,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            default_language: Language::Ar,
            fallback_language: Language::En,
            day_periods: DayPeriodBounds::default(),
        }
    }
}
