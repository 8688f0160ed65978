use axum::{extract::Query, http::StatusCode, Json};
use chrono::NaiveDate;
use contracts::domain::schedule::aggregate::{Schedule, ShellDuty, ShellFlyingLine};
use serde::Deserialize;

use crate::domain::schedule;

#[derive(Debug, Deserialize)]
pub struct ShellQuery {
    /// Day the shell is scoped to, YYYY-MM-DD
    pub date: NaiveDate,
}

/// GET /api/schedules
pub async fn list_schedules() -> Result<Json<Vec<Schedule>>, StatusCode> {
    match schedule::service::list_schedules().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("schedule list failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/flying_shell?date=YYYY-MM-DD
pub async fn flying_shell(
    Query(query): Query<ShellQuery>,
) -> Result<Json<Vec<ShellFlyingLine>>, StatusCode> {
    match schedule::service::flying_shell(query.date).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!(date = %query.date, "flying shell fetch failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/duty_shell?date=YYYY-MM-DD
pub async fn duty_shell(
    Query(query): Query<ShellQuery>,
) -> Result<Json<Vec<ShellDuty>>, StatusCode> {
    match schedule::service::duty_shell(query.date).await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!(date = %query.date, "duty shell fetch failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
