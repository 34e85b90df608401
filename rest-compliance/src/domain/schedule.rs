use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use time::Weekday;

/// Weekday key used by the back office schedule (`sun`..`sat`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleDay {
    Sun,
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
}

impl From<Weekday> for ScheduleDay {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sunday => ScheduleDay::Sun,
            Weekday::Monday => ScheduleDay::Mon,
            Weekday::Tuesday => ScheduleDay::Tue,
            Weekday::Wednesday => ScheduleDay::Wed,
            Weekday::Thursday => ScheduleDay::Thu,
            Weekday::Friday => ScheduleDay::Fri,
            Weekday::Saturday => ScheduleDay::Sat,
        }
    }
}

impl std::fmt::Display for ScheduleDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = match self {
            ScheduleDay::Sun => "sun",
            ScheduleDay::Mon => "mon",
            ScheduleDay::Tue => "tue",
            ScheduleDay::Wed => "wed",
            ScheduleDay::Thu => "thu",
            ScheduleDay::Fri => "fri",
            ScheduleDay::Sat => "sat",
        };
        write!(f, "{}", key)
    }
}

/// Per-weekday schedule flags as stored by the back office.
///
/// Only an explicit `false` marks a scheduled day off; `true` and missing
/// entries are working days.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeeklySchedule(BTreeMap<ScheduleDay, bool>);

impl WeeklySchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, day: ScheduleDay, flag: bool) -> Self {
        self.0.insert(day, flag);
        self
    }

    pub fn entry(&self, day: ScheduleDay) -> Option<bool> {
        self.0.get(&day).copied()
    }

    pub fn is_day_off(&self, day: impl Into<ScheduleDay>) -> bool {
        self.entry(day.into()) == Some(false)
    }
}

impl FromIterator<(ScheduleDay, bool)> for WeeklySchedule {
    fn from_iter<T: IntoIterator<Item = (ScheduleDay, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_back_office_keys() {
        let schedule: WeeklySchedule =
            serde_json::from_str(r#"{"sun": false, "mon": true, "sat": false}"#).unwrap();

        assert!(schedule.is_day_off(ScheduleDay::Sun));
        assert!(schedule.is_day_off(Weekday::Saturday));
        assert!(!schedule.is_day_off(ScheduleDay::Mon));
        // Missing keys are working days
        assert!(!schedule.is_day_off(ScheduleDay::Wed));
        assert_eq!(schedule.entry(ScheduleDay::Wed), None);
    }

    #[test]
    fn unknown_weekday_key_is_rejected() {
        let result = serde_json::from_str::<WeeklySchedule>(r#"{"funday": false}"#);
        assert!(result.is_err());
    }

    #[test]
    fn weekday_keys_display_lowercase() {
        assert_eq!(ScheduleDay::from(Weekday::Thursday).to_string(), "thu");
        assert_eq!(ScheduleDay::Sun.to_string(), "sun");
    }

    #[test]
    fn builds_from_pairs() {
        let schedule: WeeklySchedule = [(ScheduleDay::Fri, false), (ScheduleDay::Mon, true)]
            .into_iter()
            .collect();
        let built = WeeklySchedule::new()
            .with_day(ScheduleDay::Fri, false)
            .with_day(ScheduleDay::Mon, true);
        assert_eq!(schedule, built);
        assert!(schedule.is_day_off(ScheduleDay::Fri));
    }
}
