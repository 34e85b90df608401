//! Rest-compliance and activity-continuity calculations for drivers and
//! employees.
//!
//! Every calculation is a pure function of its inputs plus an injected `now`
//! ([`now_local`] samples one). Raw records coming from the upstream back
//! office are validated through the [`raw`] conversions before they reach the
//! engine, and results are serialized through the [`report`] types.

mod activity_gaps;
mod clock;
mod datetime;
mod domain;
mod error;
pub mod raw;
pub mod report;
mod rest_timer;

pub use activity_gaps::*;
pub use clock::*;
pub use datetime::*;
pub use domain::*;
pub use error::*;
pub use rest_timer::*;
