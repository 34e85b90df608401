//! Records as delivered by the upstream back office, before validation.
//!
//! Dates arrive as strings and check-outs may be empty strings. Converting
//! into the domain types is where malformed input is rejected.

use serde::{Deserialize, Serialize};

use crate::{parse_timestamp, ActivityEnd, ActivityInterval, ComplianceError, ShiftRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawShiftRecord {
    pub check_in_time: String,
    #[serde(default)]
    pub check_out_time: Option<String>,
}

impl TryFrom<&RawShiftRecord> for ShiftRecord {
    type Error = ComplianceError;

    fn try_from(raw: &RawShiftRecord) -> Result<Self, Self::Error> {
        let check_in_time = parse_timestamp("check_in_time", &raw.check_in_time)?;
        let check_out_time = non_empty(raw.check_out_time.as_deref())
            .map(|value| parse_timestamp("check_out_time", value))
            .transpose()?;

        Ok(Self {
            check_in_time,
            check_out_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawActivityInterval {
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub till_now: bool,
    #[serde(default)]
    pub delete: bool,
}

impl TryFrom<&RawActivityInterval> for ActivityInterval {
    type Error = ComplianceError;

    fn try_from(raw: &RawActivityInterval) -> Result<Self, Self::Error> {
        let start = parse_timestamp("start_date", &raw.start_date)?;

        let end = if raw.till_now {
            ActivityEnd::Ongoing
        } else {
            match non_empty(raw.end_date.as_deref()) {
                Some(value) => ActivityEnd::At(parse_timestamp("end_date", value)?),
                None if raw.delete => ActivityEnd::Unknown,
                None => {
                    return Err(ComplianceError::MissingEndDate {
                        start: start.date(),
                    })
                }
            }
        };

        Ok(Self {
            start,
            end,
            deleted: raw.delete,
        })
    }
}

pub fn parse_shifts(raw: &[RawShiftRecord]) -> Result<Vec<ShiftRecord>, ComplianceError> {
    raw.iter().map(ShiftRecord::try_from).collect()
}

pub fn parse_intervals(
    raw: &[RawActivityInterval],
) -> Result<Vec<ActivityInterval>, ComplianceError> {
    raw.iter().map(ActivityInterval::try_from).collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
