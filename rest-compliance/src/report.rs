//! Serialized results shared by the HTTP service and the command line.

use serde::Serialize;
use time::{Date, OffsetDateTime};

use crate::{iso_date, ActivityGap, DutyStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DutyState {
    NoHistory,
    OnDuty,
    Resting,
    Available,
}

impl From<&DutyStatus> for DutyState {
    fn from(status: &DutyStatus) -> Self {
        match status {
            DutyStatus::NoHistory => DutyState::NoHistory,
            DutyStatus::OnDuty { .. } => DutyState::OnDuty,
            DutyStatus::Resting { .. } => DutyState::Resting,
            DutyStatus::Available { .. } => DutyState::Available,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RestTimerReport {
    pub status: DutyState,
    /// Elapsed duty while on shift, remaining rest while resting, negative
    /// once the driver is eligible again.
    pub offset_ms: i64,
    /// Check-in of the open shift.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub since: Option<OffsetDateTime>,
    /// When the mandatory rest ends.
    #[serde(
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub available_at: Option<OffsetDateTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_rest_hours: Option<i64>,
}

impl From<DutyStatus> for RestTimerReport {
    fn from(status: DutyStatus) -> Self {
        let since = match status {
            DutyStatus::OnDuty { since, .. } => Some(since),
            _ => None,
        };

        Self {
            status: DutyState::from(&status),
            offset_ms: status.offset_ms(),
            since,
            available_at: status.available_at(),
            required_rest_hours: status.required_rest().map(|rest| rest.whole_hours()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGapsReport {
    #[serde(with = "iso_date")]
    pub window_start: Date,
    pub gaps: Vec<ActivityGap>,
}

impl ActivityGapsReport {
    pub fn new(window_start: Date, gaps: Vec<ActivityGap>) -> Self {
        Self { window_start, gaps }
    }
}
