use serde::Serialize;
use time::{Date, OffsetDateTime, UtcOffset};

use crate::datetime::iso_date;

/// How an activity interval ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityEnd {
    /// Open-ended, runs until now.
    Ongoing,
    At(OffsetDateTime),
    /// No end recorded. Only accepted on deleted intervals.
    Unknown,
}

/// A continuous period of recorded engagement or employment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityInterval {
    pub start: OffsetDateTime,
    pub end: ActivityEnd,
    pub deleted: bool,
}

impl ActivityInterval {
    pub fn closed(start: OffsetDateTime, end: OffsetDateTime) -> Self {
        Self {
            start,
            end: ActivityEnd::At(end),
            deleted: false,
        }
    }

    pub fn ongoing(start: OffsetDateTime) -> Self {
        Self {
            start,
            end: ActivityEnd::Ongoing,
            deleted: false,
        }
    }

    pub fn mark_deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    /// End of the interval as seen at `now`.
    pub fn effective_end(&self, now: OffsetDateTime) -> OffsetDateTime {
        match self.end {
            ActivityEnd::Ongoing => now,
            ActivityEnd::At(end) => end,
            ActivityEnd::Unknown => self.start,
        }
    }
}

/// A span of the lookback window not covered by any activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityGap {
    #[serde(with = "iso_date")]
    pub start: Date,
    #[serde(with = "iso_date")]
    pub end: Date,
}

impl ActivityGap {
    pub fn new(start: Date, end: Date) -> Self {
        Self { start, end }
    }

    /// Gap between two instants, truncated to calendar dates in `offset`.
    pub fn between(start: OffsetDateTime, end: OffsetDateTime, offset: UtcOffset) -> Self {
        Self {
            start: start.to_offset(offset).date(),
            end: end.to_offset(offset).date(),
        }
    }
}
