use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{
    api::dtos::requests::CreateUniversityRequest, domain::models::university::University,
    error::AppError, state::AppState,
};

pub async fn create_university(
    State(state): State<AppState>,
    Json(payload): Json<CreateUniversityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let university = University::new(payload.name);
    let created = state.university_repo.create(&university).await?;
    info!(university_id = %created.id, "university created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_universities(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let universities = state.university_repo.list().await?;
    Ok(Json(universities))
}

pub async fn get_university(
    State(state): State<AppState>,
    Path(university_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let university = state
        .university_repo
        .find_by_id(&university_id)
        .await?
        .ok_or_else(|| AppError::NotFound("University not found".to_string()))?;
    Ok(Json(university))
}
