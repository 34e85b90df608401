use axum::{extract::State, routing::post, Json, Router};
use rest_compliance::{
    find_activity_gaps, lookback_window, now_local, raw::RawActivityInterval,
    report::ActivityGapsReport,
};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::instrument;

use super::ApiError;
use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/activity-gaps", post(activity_gaps))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityGapsPayload {
    #[serde(default)]
    intervals: Vec<RawActivityInterval>,
    lookback_years: Option<u32>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    now: Option<OffsetDateTime>,
}

#[instrument(
    name = "activity_gaps",
    skip(app_state, body),
    fields(intervals = body.intervals.len())
)]
pub async fn activity_gaps(
    State(app_state): State<AppState>,
    Json(body): Json<ActivityGapsPayload>,
) -> Result<Json<ActivityGapsReport>, ApiError> {
    let now = body.now.unwrap_or_else(now_local);
    let lookback_years = body.lookback_years.unwrap_or(app_state.lookback_years);
    let intervals = rest_compliance::raw::parse_intervals(&body.intervals)?;

    let gaps = find_activity_gaps(&intervals, lookback_years, now);
    let window_start = lookback_window(now, lookback_years).date();

    Ok(Json(ActivityGapsReport::new(window_start, gaps)))
}
