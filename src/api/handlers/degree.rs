use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tracing::info;

use crate::{
    api::dtos::requests::{CreateDegreeRequest, EnrollDegreeRequest},
    domain::models::degree::{Degree, StudentDegree},
    error::AppError,
    state::AppState,
};

pub async fn create_degree(
    State(state): State<AppState>,
    Path(university_id): Path<String>,
    Json(payload): Json<CreateDegreeRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .university_repo
        .find_by_id(&university_id)
        .await?
        .ok_or_else(|| AppError::NotFound("University not found".to_string()))?;

    let degree = Degree::new(university_id, payload.name, payload.ects_goal);
    let created = state.degree_repo.create(&degree).await?;
    info!(degree_id = %created.id, "degree created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_degrees(
    State(state): State<AppState>,
    Path(university_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let degrees = state.degree_repo.list_by_university(&university_id).await?;
    Ok(Json(degrees))
}

pub async fn enroll_student(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(payload): Json<EnrollDegreeRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .student_repo
        .find_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    state
        .degree_repo
        .find_by_id(&payload.degree_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Degree not found".to_string()))?;

    if payload.start_date >= payload.end_date {
        return Err(AppError::Validation(
            "start date must be before end date".to_string(),
        ));
    }

    let enrolment = StudentDegree::new(
        student_id,
        payload.degree_id,
        payload.start_date,
        payload.end_date,
    );
    let created = state.degree_repo.enroll(&enrolment).await?;
    info!(student_degree_id = %created.id, "student enrolled");
    Ok((StatusCode::CREATED, Json(created)))
}
