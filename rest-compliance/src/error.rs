use thiserror::Error;
use time::{Date, OffsetDateTime};

/// Errors raised while turning raw records into engine input, or while
/// evaluating records whose dates sit at the edge of the supported range.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComplianceError {
    #[error("malformed {field}: '{value}' is not a valid date or timestamp")]
    MalformedInput { field: &'static str, value: String },
    #[error("activity interval starting {start} has no end date and is not ongoing")]
    MissingEndDate { start: Date },
    #[error("rest after check-out at {check_out} ends beyond the supported date range")]
    RestOutOfRange { check_out: OffsetDateTime },
}

impl ComplianceError {
    pub fn malformed(field: &'static str, value: impl Into<String>) -> Self {
        Self::MalformedInput {
            field,
            value: value.into(),
        }
    }
}
