use time::{OffsetDateTime, UtcOffset};

/// Current time in the process's local offset, UTC if the offset is unknown.
///
/// `time` refuses to read the local offset once more than one thread is
/// running (on Linux and other Unix targets). Under the multi-threaded tokio
/// runtime this therefore always returns UTC, and "today" for the rest rule is
/// the UTC weekday. Callers that need another zone pass an explicit `now`.
///
/// Sample once per calculation so every comparison sees the same instant.
pub fn now_local() -> OffsetDateTime {
    let now = OffsetDateTime::now_utc();
    match UtcOffset::current_local_offset() {
        Ok(local_offset) => now.to_offset(local_offset),
        Err(_) => now,
    }
}
