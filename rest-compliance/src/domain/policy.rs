use serde::{Deserialize, Serialize};
use time::{Duration, Weekday};

use super::WeeklySchedule;

pub const WORKING_DAY_REST_HOURS: i64 = 10;
pub const DAY_OFF_REST_HOURS: i64 = 36;

const SECONDS_PER_HOUR: i64 = 3_600;

/// Minimum off-duty time before a new shift may begin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestPolicy {
    pub working_day_rest_hours: i64,
    pub day_off_rest_hours: i64,
}

impl Default for RestPolicy {
    fn default() -> Self {
        Self {
            working_day_rest_hours: WORKING_DAY_REST_HOURS,
            day_off_rest_hours: DAY_OFF_REST_HOURS,
        }
    }
}

impl RestPolicy {
    pub fn new(working_day_rest_hours: i64, day_off_rest_hours: i64) -> Self {
        Self {
            working_day_rest_hours,
            day_off_rest_hours,
        }
    }

    /// Rest hours required when evaluated on `today`.
    ///
    /// Uses today's schedule entry, not the one of the day the rest began.
    pub fn required_rest_hours(&self, schedule: &WeeklySchedule, today: Weekday) -> i64 {
        if schedule.is_day_off(today) {
            self.day_off_rest_hours
        } else {
            self.working_day_rest_hours
        }
    }

    /// Saturates for hour counts beyond what a [`Duration`] can hold.
    pub fn required_rest(&self, schedule: &WeeklySchedule, today: Weekday) -> Duration {
        Duration::seconds(
            self.required_rest_hours(schedule, today)
                .saturating_mul(SECONDS_PER_HOUR),
        )
    }
}
