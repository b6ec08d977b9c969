use crate::types::{DirectionSector, GeoPoint};

pub const FULL_CIRCLE: f64 = 360.0;
pub const SECTOR_HALF_WIDTH: f64 = DirectionSector::WIDTH_DEGREES / 2.0;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Folds any finite angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let folded = angle.rem_euclid(FULL_CIRCLE);
    // rem_euclid rounds up to exactly 360.0 for tiny negative inputs
    if folded >= FULL_CIRCLE {
        0.0
    } else {
        folded
    }
}

// start == end has no direction; callers reject it first
pub fn initial_bearing(start: &GeoPoint, end: &GeoPoint) -> f64 {
    let lat1 = deg_to_rad(start.lat);
    let lat2 = deg_to_rad(end.lat);
    let delta_lon = deg_to_rad(end.lon - start.lon);

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
    normalize_angle(rad_to_deg(y.atan2(x)))
}

/// Buckets a bearing into 45° sectors centred on the compass points.
///
/// Sector bounds are lower-inclusive. Anything outside `[0, 360)`, NaN
/// included, is treated as north.
pub fn classify_bearing(bearing: f64) -> DirectionSector {
    DirectionSector::ALL[1..]
        .iter()
        .copied()
        .find(|sector| {
            let center = sector.center();
            bearing >= center - SECTOR_HALF_WIDTH && bearing < center + SECTOR_HALF_WIDTH
        })
        .unwrap_or(DirectionSector::N)
}
