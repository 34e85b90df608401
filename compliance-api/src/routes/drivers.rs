use axum::{extract::State, routing::post, Json, Router};
use rest_compliance::{
    duty_status, latest_shift, now_local, raw::RawShiftRecord, report::RestTimerReport,
    WeeklySchedule,
};
use serde::Deserialize;
use time::OffsetDateTime;
use tracing::instrument;

use super::ApiError;
use crate::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/rest-timer", post(rest_timer))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestTimerPayload {
    #[serde(default)]
    shifts: Vec<RawShiftRecord>,
    #[serde(default)]
    weekly_schedule: WeeklySchedule,
    #[serde(default, with = "time::serde::rfc3339::option")]
    now: Option<OffsetDateTime>,
}

#[instrument(name = "rest_timer", skip(app_state, body), fields(shifts = body.shifts.len()))]
pub async fn rest_timer(
    State(app_state): State<AppState>,
    Json(body): Json<RestTimerPayload>,
) -> Result<Json<RestTimerReport>, ApiError> {
    let now = body.now.unwrap_or_else(now_local);
    let shifts = rest_compliance::raw::parse_shifts(&body.shifts)?;

    let status = duty_status(
        latest_shift(&shifts),
        &body.weekly_schedule,
        &app_state.rest_policy,
        now,
    )?;

    Ok(Json(RestTimerReport::from(status)))
}
