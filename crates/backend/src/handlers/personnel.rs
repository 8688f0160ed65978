use axum::{extract::Path, http::StatusCode, Json};
use contracts::domain::personnel::aggregate::{Person, PersonUpdate};

use crate::domain::personnel;

/// GET /api/personnel
pub async fn list_all() -> Result<Json<Vec<Person>>, StatusCode> {
    match personnel::service::list_all().await {
        Ok(v) => Ok(Json(v)),
        Err(e) => {
            tracing::error!("personnel list failed: {e:#}");
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// PUT /api/personnel/:id
pub async fn update(Path(id): Path<i32>, Json(dto): Json<PersonUpdate>) -> StatusCode {
    if dto.id != id {
        return StatusCode::BAD_REQUEST;
    }
    match personnel::service::update(dto).await {
        Ok(true) => StatusCode::NO_CONTENT,
        Ok(false) => StatusCode::NOT_FOUND,
        Err(e) => {
            tracing::error!(person_id = id, "personnel update failed: {e:#}");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
