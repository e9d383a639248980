use std::cmp::Ordering;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::info;

use crate::{
    api::dtos::{
        requests::{
            AssignSemesterRequest, CourseListQuery, CreateCourseRequest, CreateSemesterRequest,
            SaveGradeRequest,
        },
        responses::CourseProgressResponse,
    },
    domain::{
        models::{
            course::{Course, CourseSemester, NewCourseParams, Semester},
            registration::ExamOutcome,
        },
        services::progress,
    },
    error::AppError,
    state::AppState,
};

pub async fn create_course(
    State(state): State<AppState>,
    Path(degree_id): Path<String>,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, AppError> {
    let degree = state
        .degree_repo
        .find_by_id(&degree_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Degree not found".to_string()))?;

    let course = Course::new(NewCourseParams {
        university_id: degree.university_id,
        degree_id,
        name: payload.name,
        ects_points: payload.ects_points,
        expected_hours: payload.expected_hours,
        bg_color: payload.bg_color,
        fg_color: payload.fg_color,
    });
    let created = state.course_repo.create(&course).await?;
    info!(course_id = %created.id, "course created");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_degree_courses(
    State(state): State<AppState>,
    Path(degree_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let courses = state.course_repo.list_by_degree(&degree_id).await?;
    Ok(Json(courses))
}

pub async fn create_semester(
    State(state): State<AppState>,
    Path(degree_id): Path<String>,
    Json(payload): Json<CreateSemesterRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .degree_repo
        .find_by_id(&degree_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Degree not found".to_string()))?;

    let semester = Semester::new(degree_id, payload.name, payload.number);
    let created = state.course_repo.create_semester(&semester).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_semesters(
    State(state): State<AppState>,
    Path(degree_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .degree_repo
        .find_by_id(&degree_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Degree not found".to_string()))?;

    let semesters = state.course_repo.list_semesters(&degree_id).await?;
    Ok(Json(semesters))
}

pub async fn assign_course_to_semester(
    State(state): State<AppState>,
    Path(semester_id): Path<String>,
    Json(payload): Json<AssignSemesterRequest>,
) -> Result<impl IntoResponse, AppError> {
    state
        .course_repo
        .find_semester_by_id(&semester_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Semester not found".to_string()))?;

    state
        .course_repo
        .find_by_id(&payload.course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    let assignment = CourseSemester::new(payload.course_id, semester_id);
    let created = state.course_repo.assign_semester(&assignment).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_semester_courses(
    State(state): State<AppState>,
    Path(semester_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .course_repo
        .find_semester_by_id(&semester_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Semester not found".to_string()))?;

    let courses = state.course_repo.list_by_semester(&semester_id).await?;
    Ok(Json(courses))
}

/// Stores the exam grade for a course, creating the registration on the fly
/// when the student never tracked time for it. A grade of 0 clears the
/// previous result. Completion and the collected ECTS of the active degree
/// are updated in the same request.
pub async fn save_grade(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(payload): Json<SaveGradeRequest>,
) -> Result<impl IntoResponse, AppError> {
    if payload.grade < 0.0 || payload.grade > 6.0 || (payload.grade > 0.0 && payload.grade < 1.0) {
        return Err(AppError::Validation(
            "grade is not valid, only 0 or 1-6 are allowed".to_string(),
        ));
    }

    state
        .student_repo
        .find_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    state
        .course_repo
        .find_by_id(&payload.course_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Course not found".to_string()))?;

    let registration = progress::ensure_registration(
        state.registration_repo.as_ref(),
        &student_id,
        &payload.course_id,
    )
    .await?;

    let passed = progress::is_passing_grade(payload.grade);
    let outcome = match state.registration_repo.find_exam_outcome(&registration.id).await? {
        Some(mut existing) => {
            existing.grade = payload.grade;
            existing.passed = passed;
            existing
        }
        None => ExamOutcome::new(registration.id.clone(), payload.grade, passed),
    };
    let saved = state.registration_repo.save_exam_outcome(&outcome).await?;
    state
        .registration_repo
        .update_completed(&registration.id, passed)
        .await?;

    let today = Utc::now().date_naive();
    let enrolment = state
        .degree_repo
        .find_active_for_student(&student_id, today)
        .await?
        .ok_or_else(|| AppError::NotFound("Student has no active degree".to_string()))?;

    let total = state
        .registration_repo
        .sum_completed_ects(&student_id, &enrolment.degree_id)
        .await?;
    state
        .degree_repo
        .update_ects_collected(&enrolment.id, total)
        .await?;

    info!(
        student_id = %student_id,
        course_id = %payload.course_id,
        grade = payload.grade,
        "grade saved"
    );
    Ok(Json(saved))
}

/// All courses of the student's active degree with spent hours, grade and
/// progress. Sorting happens here since the set is small and progress is a
/// derived value.
pub async fn list_student_courses(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Query(query): Query<CourseListQuery>,
) -> Result<impl IntoResponse, AppError> {
    state
        .student_repo
        .find_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    let today = Utc::now().date_naive();
    let enrolment = state
        .degree_repo
        .find_active_for_student(&student_id, today)
        .await?
        .ok_or_else(|| AppError::NotFound("Student has no active degree".to_string()))?;

    let courses = state.course_repo.list_by_degree(&enrolment.degree_id).await?;

    let mut rows = Vec::with_capacity(courses.len());
    for course in courses {
        let mut grade = 0.0;
        let mut spent_hours = 0.0;
        if let Some(registration) = state
            .registration_repo
            .find_for_student_course(&student_id, &course.id)
            .await?
        {
            spent_hours = registration.spent_hours;
            if let Some(outcome) = state
                .registration_repo
                .find_exam_outcome(&registration.id)
                .await?
            {
                grade = outcome.grade;
            }
        }

        let ratio = progress::course_progress(spent_hours, course.expected_hours, grade);
        rows.push(CourseProgressResponse {
            course_id: course.id,
            name: course.name,
            progress: ratio,
            formatted_progress: progress::format_progress(ratio),
            expected_hours: course.expected_hours,
            spent_hours,
            grade,
        });
    }

    match query.sort.as_deref() {
        Some("progress") => {
            rows.sort_by(|a, b| a.progress.partial_cmp(&b.progress).unwrap_or(Ordering::Equal))
        }
        Some("grade") => {
            rows.sort_by(|a, b| a.grade.partial_cmp(&b.grade).unwrap_or(Ordering::Equal))
        }
        _ => rows.sort_by(|a, b| a.name.cmp(&b.name)),
    }
    if query.direction.as_deref() == Some("desc") {
        rows.reverse();
    }

    Ok(Json(rows))
}
