use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::{Duration, NaiveDate, NaiveTime, Utc};
use tracing::info;

use crate::{
    api::dtos::requests::{CalendarQuery, CreateBookingRequest},
    domain::{
        models::time_plan::TimePlanBooking,
        services::{calendar, progress},
    },
    error::AppError,
    state::AppState,
};

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("invalid date, expected YYYY-MM-DD".to_string()))
}

fn parse_time(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::Validation("invalid time, expected HH:MM".to_string()))
}

/// Books a study session. Times are validated as submitted, then snapped
/// down to the 15 minute grid before the booking is stored. The spent hours
/// of the registration are recomputed from its full booking set afterwards.
pub async fn create_booking(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Json(payload): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
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

    let from_date = parse_date(&payload.from_date)?;
    let until_date = parse_date(&payload.until_date)?;
    let from_time = parse_time(&payload.from_time)?;
    let until_time = parse_time(&payload.until_time)?;

    if from_date != until_date {
        return Err(AppError::Validation(
            "currently only bookings on the same day are allowed".to_string(),
        ));
    }
    if from_time >= until_time {
        return Err(AppError::Validation(
            "from time must be before until time".to_string(),
        ));
    }

    let existing = state
        .time_plan_repo
        .list_for_student_on_date(&student_id, from_date)
        .await?;
    if existing.iter().any(|b| b.overlaps(from_time, until_time)) {
        return Err(AppError::Conflict(
            "Bookings are conflicting, please choose another date or time".to_string(),
        ));
    }

    let from_time = calendar::quantize_to_slot(from_time);
    let until_time = calendar::quantize_to_slot(until_time);
    // Both ends snap down, so a sub-slot interval can collapse to nothing.
    if from_time >= until_time {
        return Err(AppError::Validation(
            "booking must cover at least one 15 minute slot".to_string(),
        ));
    }

    let registration = progress::ensure_registration(
        state.registration_repo.as_ref(),
        &student_id,
        &payload.course_id,
    )
    .await?;

    let booking = TimePlanBooking::new(
        registration.id.clone(),
        from_date,
        from_time,
        until_date,
        until_time,
    );
    let created = state.time_plan_repo.create(&booking).await?;

    let bookings = state
        .time_plan_repo
        .list_for_registration(&registration.id)
        .await?;
    let spent_hours = progress::total_spent_hours(&bookings);
    state
        .registration_repo
        .update_spent_hours(&registration.id, spent_hours)
        .await?;

    info!(
        student_id = %student_id,
        booking_id = %created.id,
        spent_hours,
        "booking created"
    );
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn list_bookings(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    state
        .student_repo
        .find_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    let bookings = state.time_plan_repo.list_for_student(&student_id).await?;
    Ok(Json(bookings))
}

/// One calendar week as a 7x24x4 grid of 15 minute slots. `offset` shifts
/// the week relative to the current one.
pub async fn get_calendar(
    State(state): State<AppState>,
    Path(student_id): Path<String>,
    Query(query): Query<CalendarQuery>,
) -> Result<impl IntoResponse, AppError> {
    state
        .student_repo
        .find_by_id(&student_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

    let offset = query.offset.unwrap_or(0);
    let (week_number, monday) = calendar::week_anchor(Utc::now().date_naive(), offset)
        .ok_or_else(|| AppError::Validation("week offset is out of range".to_string()))?;

    let bookings = state
        .time_plan_repo
        .list_for_student_between(&student_id, monday, monday + Duration::days(6))
        .await?;

    let week = calendar::build_week(week_number, monday, &bookings);
    Ok(Json(week))
}
