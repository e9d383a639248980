use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::time::Duration;

use crate::api::handlers::{calendar, course, degree, health, student, university};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Universities
        .route("/api/v1/universities", post(university::create_university).get(university::list_universities))
        .route("/api/v1/universities/{university_id}", get(university::get_university))
        .route("/api/v1/universities/{university_id}/students", post(student::create_student).get(student::list_students))
        .route("/api/v1/universities/{university_id}/degrees", post(degree::create_degree).get(degree::list_degrees))

        // Degrees & Semesters
        .route("/api/v1/degrees/{degree_id}/courses", post(course::create_course).get(course::list_degree_courses))
        .route("/api/v1/degrees/{degree_id}/semesters", post(course::create_semester).get(course::list_semesters))
        .route("/api/v1/semesters/{semester_id}/courses", post(course::assign_course_to_semester).get(course::list_semester_courses))

        // Student Dashboard
        .route("/api/v1/students/{student_id}", get(student::get_student_details))
        .route("/api/v1/students/{student_id}/degrees", post(degree::enroll_student))
        .route("/api/v1/students/{student_id}/courses", get(course::list_student_courses))
        .route("/api/v1/students/{student_id}/grades", post(course::save_grade))

        // Time Planning
        .route("/api/v1/students/{student_id}/bookings", post(calendar::create_booking).get(calendar::list_bookings))
        .route("/api/v1/students/{student_id}/calendar", get(calendar::get_calendar))

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
