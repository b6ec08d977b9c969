pub mod advisor;
pub mod angles;
pub mod error;
pub mod i18n;
pub mod lookup_table;
pub mod sun;
pub mod types;

pub use advisor::{produce_suggestion, SeatAdvisor};

pub use angles::{
    classify_bearing, deg_to_rad, initial_bearing, normalize_angle, rad_to_deg,
    FULL_CIRCLE, SECTOR_HALF_WIDTH,
};

pub use error::{Result, SeatAdvisorError};

pub use i18n::{Section, StringCatalog, StringTable};

pub use lookup_table::{
    all_entries, lookup_recommendation, table_for, FALLBACK_ENTRY, NO_SUN_ENTRY,
    SUN_EAST_TABLE, SUN_WEST_TABLE,
};

pub use sun::{
    checked_time_category, parse_clock_time, sun_bucket, time_category_at,
    time_category_from_hour, HOURS_PER_DAY,
};

pub use types::{
    AdvisorConfig, DayPeriodBounds, DirectionSector, Explanation, GeoPoint, Language, Lateral,
    MessageId, Recommendation, RecommendationEntry, SeatSuggestion,
    SuggestionOutput, SunBucket, TimeCategory, MAX_LATITUDE, MAX_LONGITUDE,
};
