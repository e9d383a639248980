use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::info;

use crate::{
    api::dtos::{requests::CreateStudentRequest, responses::StudentDetailsResponse},
    domain::{models::student::Student, services::progress},
    error::AppError,
    state::AppState,
};

pub async fn create_student(
    State(state): State<AppState>,
    Path(university_id): Path<String>,
    Json(payload): Json<CreateStudentRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .university_repo
        .find_by_id(&university_id)
        .await?
        .ok_or_else(|| AppError::NotFound("University not found".to_string()))?;

    let student = Student::new(university_id, payload.first_name, payload.last_name);
    let created = state.student_repo.create(&student).await?;
    info!(student_id = %created.id, "student created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_students(
    State(state): State<AppState>,
    Path(university_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let students = state.student_repo.list_by_university(&university_id).await?;
    Ok(Json(students))
}

/// Dashboard header data: who the student is, where they study and how far
/// along their active degree they are.
pub async fn get_student_details(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student = state
        .student_repo
        .find_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    let university = state
        .university_repo
        .find_by_id(&student.university_id)
        .await?
        .ok_or_else(|| AppError::NotFound("University not found".to_string()))?;

    let today = Utc::now().date_naive();
    let enrolment = state
        .degree_repo
        .find_active_for_student(&student.id, today)
        .await?
        .ok_or_else(|| AppError::NotFound("Student has no active degree".to_string()))?;

    let degree = state
        .degree_repo
        .find_by_id(&enrolment.degree_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Degree not found".to_string()))?;

    let passed = state
        .registration_repo
        .list_passed_outcomes_for_student(&student.id)
        .await?;

    Ok(Json(StudentDetailsResponse {
        student_id: student.id.clone(),
        student_name: student.full_name(),
        university_name: university.name,
        degree_name: degree.name,
        ects_collected: enrolment.ects_collected,
        ects_goal: degree.ects_goal,
        grade_average: progress::grade_average(&passed),
    }))
}
