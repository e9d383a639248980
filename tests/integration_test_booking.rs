mod common;

use axum::http::StatusCode;
use common::{parse_body, seed_course, seed_enrolled_student, TestApp};
use serde_json::json;

fn booking_payload(course_id: &str, date: &str, from: &str, until: &str) -> serde_json::Value {
    json!({
        "course_id": course_id,
        "from_date": date,
        "from_time": from,
        "until_date": date,
        "until_time": until
    })
}

#[tokio::test]
async fn booking_times_snap_down_to_quarter_hours() {
    let app = TestApp::new().await;
    let (student_id, degree_id) = seed_enrolled_student(&app, 180).await;
    let course_id = seed_course(&app, &degree_id, "Algorithms", 5, 60.0).await;

    let res = app
        .post(
            &format!("/api/v1/students/{}/bookings", student_id),
            booking_payload(&course_id, "2024-03-04", "10:07", "11:22"),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let body = parse_body(res).await;
    assert_eq!(body["from_time"], "10:00:00");
    assert_eq!(body["until_time"], "11:15:00");
    assert_eq!(body["from_date"], "2024-03-04");
}

#[tokio::test]
async fn overlapping_booking_is_rejected() {
    let app = TestApp::new().await;
    let (student_id, degree_id) = seed_enrolled_student(&app, 180).await;
    let course_id = seed_course(&app, &degree_id, "Algorithms", 5, 60.0).await;
    let uri = format!("/api/v1/students/{}/bookings", student_id);

    let first = app
        .post(&uri, booking_payload(&course_id, "2024-03-04", "10:00", "11:00"))
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let clash = app
        .post(&uri, booking_payload(&course_id, "2024-03-04", "10:30", "11:30"))
        .await;
    assert_eq!(clash.status(), StatusCode::CONFLICT);

    // Adjacent interval is fine.
    let adjacent = app
        .post(&uri, booking_payload(&course_id, "2024-03-04", "11:00", "12:00"))
        .await;
    assert_eq!(adjacent.status(), StatusCode::CREATED);

    // Same times on another day are fine too.
    let other_day = app
        .post(&uri, booking_payload(&course_id, "2024-03-05", "10:30", "11:30"))
        .await;
    assert_eq!(other_day.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn overlap_applies_across_courses_of_the_same_student() {
    let app = TestApp::new().await;
    let (student_id, degree_id) = seed_enrolled_student(&app, 180).await;
    let algorithms = seed_course(&app, &degree_id, "Algorithms", 5, 60.0).await;
    let databases = seed_course(&app, &degree_id, "Databases", 5, 60.0).await;
    let uri = format!("/api/v1/students/{}/bookings", student_id);

    let first = app
        .post(&uri, booking_payload(&algorithms, "2024-03-04", "09:00", "10:00"))
        .await;
    assert_eq!(first.status(), StatusCode::CREATED);

    let clash = app
        .post(&uri, booking_payload(&databases, "2024-03-04", "09:30", "10:30"))
        .await;
    assert_eq!(clash.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn invalid_booking_payloads_are_rejected() {
    let app = TestApp::new().await;
    let (student_id, degree_id) = seed_enrolled_student(&app, 180).await;
    let course_id = seed_course(&app, &degree_id, "Algorithms", 5, 60.0).await;
    let uri = format!("/api/v1/students/{}/bookings", student_id);

    // Cross-day bookings are not supported.
    let cross_day = app
        .post(
            &uri,
            json!({
                "course_id": course_id,
                "from_date": "2024-03-04",
                "from_time": "23:00",
                "until_date": "2024-03-05",
                "until_time": "01:00"
            }),
        )
        .await;
    assert_eq!(cross_day.status(), StatusCode::BAD_REQUEST);

    let inverted = app
        .post(&uri, booking_payload(&course_id, "2024-03-04", "11:00", "10:00"))
        .await;
    assert_eq!(inverted.status(), StatusCode::BAD_REQUEST);

    let zero_length = app
        .post(&uri, booking_payload(&course_id, "2024-03-04", "10:00", "10:00"))
        .await;
    assert_eq!(zero_length.status(), StatusCode::BAD_REQUEST);

    // Ordered as submitted, but both ends snap down to 10:00.
    let sub_slot = app
        .post(&uri, booking_payload(&course_id, "2024-03-04", "10:01", "10:07"))
        .await;
    assert_eq!(sub_slot.status(), StatusCode::BAD_REQUEST);

    let bad_time = app
        .post(&uri, booking_payload(&course_id, "2024-03-04", "25:00", "26:00"))
        .await;
    assert_eq!(bad_time.status(), StatusCode::BAD_REQUEST);

    let unknown_course = app
        .post(&uri, booking_payload("missing-course", "2024-03-04", "10:00", "11:00"))
        .await;
    assert_eq!(unknown_course.status(), StatusCode::NOT_FOUND);

    let unknown_student = app
        .post(
            "/api/v1/students/missing-student/bookings",
            booking_payload(&course_id, "2024-03-04", "10:00", "11:00"),
        )
        .await;
    assert_eq!(unknown_student.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn booking_creates_registration_and_tracks_spent_hours() {
    let app = TestApp::new().await;
    let (student_id, degree_id) = seed_enrolled_student(&app, 180).await;
    let course_id = seed_course(&app, &degree_id, "Algorithms", 5, 4.0).await;
    let uri = format!("/api/v1/students/{}/bookings", student_id);

    // No registration exists yet; the first booking creates it.
    app.post(&uri, booking_payload(&course_id, "2024-03-04", "09:00", "10:00"))
        .await;
    app.post(&uri, booking_payload(&course_id, "2024-03-05", "12:00", "14:15"))
        .await;

    let res = app
        .get(&format!("/api/v1/students/{}/courses", student_id))
        .await;
    assert_eq!(res.status(), StatusCode::OK);
    let courses = parse_body(res).await;
    assert_eq!(courses[0]["name"], "Algorithms");
    assert_eq!(courses[0]["spent_hours"], 3.25);
    // 3.25 of 4.0 expected hours, ratio rounded to two decimals.
    assert_eq!(courses[0]["formatted_progress"], "81.00%");
}

#[tokio::test]
async fn bookings_are_listed_per_student() {
    let app = TestApp::new().await;
    let (student_id, degree_id) = seed_enrolled_student(&app, 180).await;
    let course_id = seed_course(&app, &degree_id, "Algorithms", 5, 60.0).await;
    let uri = format!("/api/v1/students/{}/bookings", student_id);

    app.post(&uri, booking_payload(&course_id, "2024-03-04", "09:00", "10:00"))
        .await;
    app.post(&uri, booking_payload(&course_id, "2024-03-06", "09:00", "10:00"))
        .await;

    let res = app.get(&uri).await;
    assert_eq!(res.status(), StatusCode::OK);
    let list = parse_body(res).await;
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["from_date"], "2024-03-04");
    assert_eq!(list[1]["from_date"], "2024-03-06");
}
