use time::{
    format_description::well_known::Rfc3339, macros::format_description, Date, Duration,
    OffsetDateTime, PrimitiveDateTime,
};

use crate::ComplianceError;

/// Parse a date or timestamp as delivered by the back office.
///
/// Accepts RFC 3339 timestamps, offset-less ISO date-times (taken as UTC) and
/// plain `YYYY-MM-DD` dates (midnight UTC). `field` names the offending input
/// in the returned error.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<OffsetDateTime, ComplianceError> {
    let trimmed = value.trim();

    OffsetDateTime::parse(trimmed, &Rfc3339)
        .or_else(|_| {
            PrimitiveDateTime::parse(
                trimmed,
                format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
            )
            .map(PrimitiveDateTime::assume_utc)
        })
        .or_else(|_| {
            PrimitiveDateTime::parse(
                trimmed,
                format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
            )
            .map(PrimitiveDateTime::assume_utc)
        })
        .or_else(|_| {
            Date::parse(trimmed, format_description!("[year]-[month]-[day]"))
                .map(|date| date.midnight().assume_utc())
        })
        .map_err(|_| ComplianceError::malformed(field, value))
}

// Calendar dates on the wire, `YYYY-MM-DD`.
time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Whole milliseconds of `duration`, saturating at the `i64` bounds.
pub fn whole_millis(duration: Duration) -> i64 {
    let millis = duration.whole_milliseconds();
    i64::try_from(millis).unwrap_or(if millis.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}
