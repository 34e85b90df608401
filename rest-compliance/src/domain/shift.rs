use time::OffsetDateTime;

/// A single duty period bounded by check-in and check-out.
///
/// A shift without a check-out is still open: the driver is on duty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftRecord {
    pub check_in_time: OffsetDateTime,
    pub check_out_time: Option<OffsetDateTime>,
}

impl ShiftRecord {
    pub fn open(check_in_time: OffsetDateTime) -> Self {
        Self {
            check_in_time,
            check_out_time: None,
        }
    }

    pub fn closed(check_in_time: OffsetDateTime, check_out_time: OffsetDateTime) -> Self {
        Self {
            check_in_time,
            check_out_time: Some(check_out_time),
        }
    }

    pub fn is_open(&self) -> bool {
        self.check_out_time.is_none()
    }
}

/// The most recently opened shift of a history, in any order.
pub fn latest_shift(shifts: &[ShiftRecord]) -> Option<&ShiftRecord> {
    shifts.iter().max_by_key(|shift| shift.check_in_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn latest_shift_is_picked_by_check_in() {
        let shifts = vec![
            ShiftRecord::closed(
                datetime!(2024-06-03 8:00 UTC),
                datetime!(2024-06-03 17:00 UTC),
            ),
            ShiftRecord::open(datetime!(2024-06-05 7:30 UTC)),
            ShiftRecord::closed(
                datetime!(2024-06-04 8:00 UTC),
                datetime!(2024-06-04 18:00 UTC),
            ),
        ];

        let latest = latest_shift(&shifts).unwrap();
        assert!(latest.is_open());
        assert_eq!(latest.check_in_time, datetime!(2024-06-05 7:30 UTC));
    }

    #[test]
    fn empty_history_has_no_latest_shift() {
        assert!(latest_shift(&[]).is_none());
    }
}
