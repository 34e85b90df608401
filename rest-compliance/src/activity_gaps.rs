use time::{Date, Duration, OffsetDateTime};
use tracing::{debug, instrument};

use crate::{ActivityGap, ActivityInterval};

pub const DEFAULT_LOOKBACK_YEARS: u32 = 10;

// Fixed-length years. The window drifts by the leap days it spans.
const DAYS_PER_YEAR: i64 = 365;

/// Start of the lookback window ending at `now`.
pub fn lookback_window(now: OffsetDateTime, lookback_years: u32) -> OffsetDateTime {
    let span = Duration::days(DAYS_PER_YEAR * i64::from(lookback_years));
    now.checked_sub(span)
        .unwrap_or_else(|| Date::MIN.midnight().assume_offset(now.offset()))
}

/// Spans of `[now - lookback_years, now]` not covered by any non-deleted
/// interval. Gaps of one day or less are tolerated.
///
/// Input order does not matter. Gap boundaries are calendar dates in `now`'s
/// offset.
#[instrument(level = "debug", skip(intervals), fields(interval_count = intervals.len()))]
pub fn find_activity_gaps(
    intervals: &[ActivityInterval],
    lookback_years: u32,
    now: OffsetDateTime,
) -> Vec<ActivityGap> {
    let window_start = lookback_window(now, lookback_years);
    let tolerance = Duration::days(1);

    let mut relevant: Vec<&ActivityInterval> = intervals
        .iter()
        .filter(|interval| !interval.deleted)
        .filter(|interval| {
            interval.start >= window_start || interval.effective_end(now) > window_start
        })
        .collect();
    relevant.sort_by_key(|interval| interval.start);

    let mut gaps = Vec::new();
    let mut last_end = window_start;

    for interval in relevant {
        let beyond_tolerance = last_end
            .checked_add(tolerance)
            .is_some_and(|limit| interval.start > limit);

        if beyond_tolerance {
            let gap = ActivityGap::between(last_end, interval.start, now.offset());
            debug!(start = %gap.start, end = %gap.end, "activity gap");
            gaps.push(gap);
        }

        last_end = last_end.max(interval.effective_end(now));
    }

    if last_end < now {
        let gap = ActivityGap::between(last_end, now, now.offset());
        debug!(start = %gap.start, end = %gap.end, "trailing activity gap");
        gaps.push(gap);
    }

    gaps
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, datetime};

    fn closed(start: OffsetDateTime, end: OffsetDateTime) -> ActivityInterval {
        ActivityInterval::closed(start, end)
    }

    fn gap(start: Date, end: Date) -> ActivityGap {
        ActivityGap::new(start, end)
    }

    #[test]
    fn window_uses_fixed_length_years() {
        // 2024 is a leap year, so 365 days back lands on June 2nd.
        assert_eq!(
            lookback_window(datetime!(2024-06-01 0:00 UTC), 1),
            datetime!(2023-06-02 0:00 UTC)
        );
        assert_eq!(
            lookback_window(datetime!(2024-01-01 0:00 UTC), 10),
            datetime!(2014-01-03 0:00 UTC)
        );
    }

    #[test]
    fn short_break_between_engagements() {
        let now = datetime!(2024-06-01 0:00 UTC);
        let intervals = vec![
            closed(datetime!(2024-01-01 0:00 UTC), datetime!(2024-03-01 0:00 UTC)),
            ActivityInterval::ongoing(datetime!(2024-03-05 0:00 UTC)),
        ];

        let gaps = find_activity_gaps(&intervals, 1, now);

        assert_eq!(
            gaps,
            vec![
                gap(date!(2023-06-02), date!(2024-01-01)),
                gap(date!(2024-03-01), date!(2024-03-05)),
            ]
        );
    }

    #[test]
    fn ongoing_interval_covering_window_has_no_gaps() {
        let now = datetime!(2024-01-01 0:00 UTC);
        let intervals = vec![ActivityInterval::ongoing(datetime!(2020-01-01 0:00 UTC))];

        assert!(find_activity_gaps(&intervals, 3, now).is_empty());
    }

    #[test]
    fn ongoing_interval_starting_inside_window_leaves_only_leading_gap() {
        let now = datetime!(2024-01-01 0:00 UTC);
        let intervals = vec![ActivityInterval::ongoing(datetime!(2020-01-01 0:00 UTC))];

        assert_eq!(
            find_activity_gaps(&intervals, DEFAULT_LOOKBACK_YEARS, now),
            vec![gap(date!(2014-01-03), date!(2020-01-01))]
        );
    }

    #[test]
    fn covered_timeline_has_no_gaps() {
        let now = datetime!(2024-06-01 0:00 UTC);
        let intervals = vec![
            closed(datetime!(2023-06-01 0:00 UTC), datetime!(2023-12-31 0:00 UTC)),
            closed(datetime!(2024-01-01 0:00 UTC), datetime!(2024-03-01 0:00 UTC)),
            ActivityInterval::ongoing(datetime!(2024-02-15 0:00 UTC)),
        ];

        assert!(find_activity_gaps(&intervals, 1, now).is_empty());
    }

    #[test]
    fn one_day_is_tolerated_but_not_more() {
        let now = datetime!(2024-06-01 0:00 UTC);
        let first = closed(datetime!(2023-01-01 0:00 UTC), datetime!(2024-03-01 0:00 UTC));

        let exactly_one_day = vec![
            first,
            ActivityInterval::ongoing(datetime!(2024-03-02 0:00 UTC)),
        ];
        assert!(find_activity_gaps(&exactly_one_day, 1, now).is_empty());

        let just_over = vec![
            first,
            ActivityInterval::ongoing(datetime!(2024-03-02 0:00:00.001 UTC)),
        ];
        assert_eq!(
            find_activity_gaps(&just_over, 1, now),
            vec![gap(date!(2024-03-01), date!(2024-03-02))]
        );
    }

    #[test]
    fn deleted_interval_does_not_close_a_gap() {
        let now = datetime!(2024-06-01 0:00 UTC);
        let intervals = vec![
            closed(datetime!(2023-01-01 0:00 UTC), datetime!(2024-03-01 0:00 UTC)),
            ActivityInterval::ongoing(datetime!(2024-02-01 0:00 UTC)).mark_deleted(),
            ActivityInterval::ongoing(datetime!(2024-04-01 0:00 UTC)),
        ];

        assert_eq!(
            find_activity_gaps(&intervals, 1, now),
            vec![gap(date!(2024-03-01), date!(2024-04-01))]
        );
    }

    #[test]
    fn contained_interval_does_not_move_end_backwards() {
        let now = datetime!(2024-06-01 0:00 UTC);
        let intervals = vec![
            closed(datetime!(2023-01-01 0:00 UTC), datetime!(2024-05-01 0:00 UTC)),
            closed(datetime!(2024-02-01 0:00 UTC), datetime!(2024-02-10 0:00 UTC)),
            ActivityInterval::ongoing(datetime!(2024-05-01 0:00 UTC)),
        ];

        assert!(find_activity_gaps(&intervals, 1, now).is_empty());
    }

    #[test]
    fn input_order_does_not_matter() {
        let now = datetime!(2024-06-01 0:00 UTC);
        let mut intervals = vec![
            closed(datetime!(2024-01-01 0:00 UTC), datetime!(2024-03-01 0:00 UTC)),
            ActivityInterval::ongoing(datetime!(2024-03-05 0:00 UTC)),
            closed(datetime!(2023-05-01 0:00 UTC), datetime!(2023-09-01 0:00 UTC)),
        ];
        let sorted = find_activity_gaps(&intervals, 1, now);

        intervals.reverse();
        assert_eq!(find_activity_gaps(&intervals, 1, now), sorted);
        assert_eq!(
            sorted,
            vec![
                gap(date!(2023-09-01), date!(2024-01-01)),
                gap(date!(2024-03-01), date!(2024-03-05)),
            ]
        );
    }

    #[test]
    fn activity_ending_before_now_leaves_trailing_gap() {
        let now = datetime!(2024-06-01 0:00 UTC);
        let intervals = vec![closed(
            datetime!(2023-01-01 0:00 UTC),
            datetime!(2024-05-01 0:00 UTC),
        )];

        assert_eq!(
            find_activity_gaps(&intervals, 1, now),
            vec![gap(date!(2024-05-01), date!(2024-06-01))]
        );
    }

    #[test]
    fn intervals_before_window_are_ignored() {
        let now = datetime!(2024-06-01 0:00 UTC);
        let intervals = vec![closed(
            datetime!(2010-01-01 0:00 UTC),
            datetime!(2012-01-01 0:00 UTC),
        )];

        assert_eq!(
            find_activity_gaps(&intervals, 1, now),
            vec![gap(date!(2023-06-02), date!(2024-06-01))]
        );
    }

    #[test]
    fn no_activity_is_one_window_wide_gap() {
        let now = datetime!(2024-06-01 0:00 UTC);
        assert_eq!(
            find_activity_gaps(&[], 1, now),
            vec![gap(date!(2023-06-02), date!(2024-06-01))]
        );
    }

    #[test]
    fn gap_dates_are_taken_in_the_offset_of_now() {
        let now = datetime!(2024-06-01 0:30 +2);
        let intervals = vec![closed(
            datetime!(2023-01-01 0:00 UTC),
            datetime!(2024-05-01 23:00 UTC),
        )];

        assert_eq!(
            find_activity_gaps(&intervals, 1, now),
            vec![gap(date!(2024-05-02), date!(2024-06-01))]
        );
    }
}
