use time::{Duration, OffsetDateTime};
use tracing::instrument;

use crate::{whole_millis, ComplianceError, RestPolicy, ShiftRecord, WeeklySchedule};

/// Where a driver stands relative to their last shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DutyStatus {
    /// No shift has ever been recorded.
    NoHistory,
    OnDuty {
        since: OffsetDateTime,
        elapsed: Duration,
    },
    /// Off duty, mandatory rest not yet over.
    Resting {
        available_at: OffsetDateTime,
        remaining: Duration,
        required_rest: Duration,
    },
    /// Off duty and allowed to start a new shift.
    Available {
        available_at: OffsetDateTime,
        since_available: Duration,
        required_rest: Duration,
    },
}

impl DutyStatus {
    /// Signed offset: elapsed duty while on shift, remaining rest while
    /// resting, and minus the time spent eligible once rest is over.
    pub fn offset(&self) -> Duration {
        match self {
            DutyStatus::NoHistory => Duration::ZERO,
            DutyStatus::OnDuty { elapsed, .. } => *elapsed,
            DutyStatus::Resting { remaining, .. } => *remaining,
            DutyStatus::Available {
                since_available, ..
            } => -*since_available,
        }
    }

    pub fn offset_ms(&self) -> i64 {
        whole_millis(self.offset())
    }

    pub fn available_at(&self) -> Option<OffsetDateTime> {
        match self {
            DutyStatus::Resting { available_at, .. }
            | DutyStatus::Available { available_at, .. } => Some(*available_at),
            DutyStatus::NoHistory | DutyStatus::OnDuty { .. } => None,
        }
    }

    pub fn required_rest(&self) -> Option<Duration> {
        match self {
            DutyStatus::Resting { required_rest, .. }
            | DutyStatus::Available { required_rest, .. } => Some(*required_rest),
            DutyStatus::NoHistory | DutyStatus::OnDuty { .. } => None,
        }
    }
}

/// Classify `last_shift` at `now` under `policy`.
///
/// The rest requirement is picked from the schedule entry of `now`'s weekday,
/// evaluated in `now`'s own offset. Fails only when the end of the rest
/// cannot be represented, i.e. a check-out at the very end of year 9999.
#[instrument(level = "debug", skip(schedule, policy))]
pub fn duty_status(
    last_shift: Option<&ShiftRecord>,
    schedule: &WeeklySchedule,
    policy: &RestPolicy,
    now: OffsetDateTime,
) -> Result<DutyStatus, ComplianceError> {
    let Some(shift) = last_shift else {
        return Ok(DutyStatus::NoHistory);
    };

    let Some(check_out) = shift.check_out_time else {
        return Ok(DutyStatus::OnDuty {
            since: shift.check_in_time,
            elapsed: now - shift.check_in_time,
        });
    };

    let required_rest = policy.required_rest(schedule, now.weekday());
    let available_at = check_out
        .checked_add(required_rest)
        .ok_or(ComplianceError::RestOutOfRange { check_out })?;
    let remaining = available_at - now;

    Ok(if remaining.is_positive() {
        DutyStatus::Resting {
            available_at,
            remaining,
            required_rest,
        }
    } else {
        DutyStatus::Available {
            available_at,
            since_available: -remaining,
            required_rest,
        }
    })
}

/// Milliseconds on duty (open shift) or until rest ends (closed shift),
/// using the default 10h/36h rest policy. Zero without a shift.
pub fn rest_or_duty_offset_ms(
    last_shift: Option<&ShiftRecord>,
    schedule: &WeeklySchedule,
    now: OffsetDateTime,
) -> Result<i64, ComplianceError> {
    duty_status(last_shift, schedule, &RestPolicy::default(), now)
        .map(|status| status.offset_ms())
}
