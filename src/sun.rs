use std::str::FromStr;

use chrono::{NaiveTime, Timelike};

use crate::error::{Result, SeatAdvisorError};
use crate::types::{DayPeriodBounds, SunBucket, TimeCategory};

pub const HOURS_PER_DAY: u32 = 24;

pub fn sun_bucket(category: TimeCategory) -> SunBucket {
    match category {
        TimeCategory::Morning => SunBucket::East,
        TimeCategory::Afternoon => SunBucket::West,
        TimeCategory::Evening => SunBucket::None,
    }
}

pub fn time_category_from_hour(hour: u32) -> TimeCategory {
    DayPeriodBounds::default().classify(hour)
}

pub fn time_category_at<T: Timelike>(time: &T) -> TimeCategory {
    time_category_from_hour(time.hour())
}

pub fn checked_time_category(hour: u32) -> Result<TimeCategory> {
    if hour >= HOURS_PER_DAY {
        return Err(SeatAdvisorError::InvalidHour(hour));
    }
    Ok(time_category_from_hour(hour))
}

pub fn parse_clock_time(input: &str) -> Result<NaiveTime> {
    let trimmed = input.trim();
    NaiveTime::parse_from_str(trimmed, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| SeatAdvisorError::InvalidTime(input.to_string()))
}

impl DayPeriodBounds {
    pub fn validate(&self) -> Result<()> {
        let ordered = self.morning_start < self.afternoon_start
            && self.afternoon_start < self.evening_start
            && self.evening_start <= HOURS_PER_DAY;
        if ordered {
            Ok(())
        } else {
            Err(SeatAdvisorError::InvalidConfig(format!(
                "day periods must satisfy morning_start < afternoon_start < evening_start <= 24, got {} / {} / {}",
                self.morning_start, self.afternoon_start, self.evening_start
            )))
        }
    }

    pub fn classify(&self, hour: u32) -> TimeCategory {
        if (self.morning_start..self.afternoon_start).contains(&hour) {
            TimeCategory::Morning
        } else if (self.afternoon_start..self.evening_start).contains(&hour) {
            TimeCategory::Afternoon
        } else {
            TimeCategory::Evening
        }
    }
}

// category name (any case), bare hour, "HH:MM" or "HH:MM:SS"
impl FromStr for TimeCategory {
    type Err = SeatAdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if let Some(category) = TimeCategory::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(trimmed))
        {
            return Ok(category);
        }
        if let Ok(hour) = trimmed.parse::<u32>() {
            return checked_time_category(hour);
        }
        if trimmed.contains(':') {
            return parse_clock_time(trimmed).map(|t| time_category_at(&t));
        }
        Err(SeatAdvisorError::UnknownTimeCategory(s.to_string()))
    }
}
