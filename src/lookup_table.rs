use crate::types::{
    DirectionSector, Explanation, RecommendationEntry, SeatSuggestion, SunBucket,
};

const fn entry(suggestion: SeatSuggestion, explanation: Explanation) -> RecommendationEntry {
    RecommendationEntry {
        suggestion,
        explanation,
    }
}

pub const NO_SUN_ENTRY: RecommendationEntry =
    entry(SeatSuggestion::SitAnywhere, Explanation::NoSun);

pub const FALLBACK_ENTRY: RecommendationEntry =
    entry(SeatSuggestion::SitMiddle, Explanation::MiddleGeneral);

// indexed by DirectionSector::index()
pub static SUN_EAST_TABLE: [RecommendationEntry; 8] = [
    entry(SeatSuggestion::SitLeft, Explanation::TravelNorthSunEast),
    entry(SeatSuggestion::SitBackLeft, Explanation::TravelNorthEastSunEast),
    entry(SeatSuggestion::SitAnySideBack, Explanation::TravelEastSunEast),
    entry(SeatSuggestion::SitBackRight, Explanation::TravelSouthEastSunEast),
    entry(SeatSuggestion::SitRight, Explanation::TravelSouthSunEast),
    entry(SeatSuggestion::SitFrontRight, Explanation::TravelSouthWestSunEast),
    entry(SeatSuggestion::SitAnySideFront, Explanation::TravelWestSunEast),
    entry(SeatSuggestion::SitFrontLeft, Explanation::TravelNorthWestSunEast),
];

pub static SUN_WEST_TABLE: [RecommendationEntry; 8] = [
    entry(SeatSuggestion::SitRight, Explanation::TravelNorthSunWest),
    entry(SeatSuggestion::SitBackRight, Explanation::TravelNorthEastSunWest),
    entry(SeatSuggestion::SitAnySideFront, Explanation::TravelEastSunWest),
    entry(SeatSuggestion::SitBackLeft, Explanation::TravelSouthEastSunWest),
    entry(SeatSuggestion::SitLeft, Explanation::TravelSouthSunWest),
    entry(SeatSuggestion::SitBackLeft, Explanation::TravelSouthWestSunWest),
    entry(SeatSuggestion::SitAnySideBack, Explanation::TravelWestSunWest),
    entry(SeatSuggestion::SitFrontRight, Explanation::TravelNorthWestSunWest),
];

pub fn table_for(bucket: SunBucket) -> Option<&'static [RecommendationEntry; 8]> {
    match bucket {
        SunBucket::East => Some(&SUN_EAST_TABLE),
        SunBucket::West => Some(&SUN_WEST_TABLE),
        SunBucket::None => None,
    }
}

pub fn lookup_recommendation(sector: DirectionSector, bucket: SunBucket) -> RecommendationEntry {
    match table_for(bucket) {
        None => NO_SUN_ENTRY,
        Some(table) => table
            .get(sector.index())
            .copied()
            .unwrap_or(FALLBACK_ENTRY),
    }
}

pub fn all_entries() -> impl Iterator<Item = RecommendationEntry> {
    SUN_EAST_TABLE
        .iter()
        .chain(SUN_WEST_TABLE.iter())
        .copied()
        .chain(std::iter::once(NO_SUN_ENTRY))
}
