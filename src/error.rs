use thiserror::Error;

use crate::types::{GeoPoint, MessageId};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeatAdvisorError {
    #[error("start and destination are the same point {point}")]
    SameLocation { point: GeoPoint },

    #[error("{field} {value} is outside [{min}, {max}]")]
    InvalidCoordinate {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("hour {0} is not a valid 24-hour clock hour")]
    InvalidHour(u32),

    #[error("cannot parse travel time `{0}`")]
    InvalidTime(String),

    #[error("unknown time of day `{0}`")]
    UnknownTimeCategory(String),

    #[error("unknown language tag `{0}`")]
    UnknownLanguage(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid string table: {0}")]
    InvalidStringTable(String),
}

impl SeatAdvisorError {
    pub fn message_id(&self) -> MessageId {
        match self {
            Self::SameLocation { .. } => MessageId::SameCoordinatesError,
            Self::InvalidCoordinate { .. } => MessageId::InvalidCoordinateRange,
            Self::InvalidHour(_) | Self::InvalidTime(_) | Self::UnknownTimeCategory(_) => {
                MessageId::EnterTravelTime
            }
            Self::UnknownLanguage(_) | Self::InvalidConfig(_) | Self::InvalidStringTable(_) => {
                MessageId::ErrorCalculatingSuggestion
            }
        }
    }
}

impl From<serde_json::Error> for SeatAdvisorError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidStringTable(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SeatAdvisorError>;
