mod common;

use axum::http::StatusCode;
use common::{parse_body, seed_course, seed_enrolled_student, TestApp};
use serde_json::json;

#[tokio::test]
async fn universities_can_be_created_listed_and_fetched() {
    let app = TestApp::new().await;

    let res = app.post("/api/v1/universities", json!({"name": "TU Graz"})).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created = parse_body(res).await;
    let id = created["id"].as_str().unwrap();
    assert_eq!(created["name"], "TU Graz");

    let fetched = parse_body(app.get(&format!("/api/v1/universities/{}", id)).await).await;
    assert_eq!(fetched["name"], "TU Graz");

    app.post("/api/v1/universities", json!({"name": "TU Wien"})).await;
    let list = parse_body(app.get("/api/v1/universities").await).await;
    assert_eq!(list.as_array().unwrap().len(), 2);

    let missing = app.get("/api/v1/universities/nope").await;
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn students_are_scoped_to_their_university() {
    let app = TestApp::new().await;
    let uni = parse_body(app.post("/api/v1/universities", json!({"name": "TU Test"})).await).await;
    let uni_id = uni["id"].as_str().unwrap();

    let res = app
        .post(
            &format!("/api/v1/universities/{}/students", uni_id),
            json!({"first_name": "Grace", "last_name": "Hopper"}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let list = parse_body(app.get(&format!("/api/v1/universities/{}/students", uni_id)).await).await;
    assert_eq!(list.as_array().unwrap().len(), 1);
    assert_eq!(list[0]["first_name"], "Grace");

    let missing_uni = app
        .post(
            "/api/v1/universities/nope/students",
            json!({"first_name": "X", "last_name": "Y"}),
        )
        .await;
    assert_eq!(missing_uni.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn student_details_summarize_the_active_degree() {
    let app = TestApp::new().await;
    let (student_id, _) = seed_enrolled_student(&app, 180).await;

    let details = parse_body(app.get(&format!("/api/v1/students/{}", student_id)).await).await;
    assert_eq!(details["student_name"], "Ada Lovelace");
    assert_eq!(details["university_name"], "TU Test");
    assert_eq!(details["degree_name"], "Computer Science BSc");
    assert_eq!(details["ects_collected"], 0);
    assert_eq!(details["ects_goal"], 180);
    assert_eq!(details["grade_average"], 0.0);
}

#[tokio::test]
async fn student_without_enrolment_has_no_details() {
    let app = TestApp::new().await;
    let uni = parse_body(app.post("/api/v1/universities", json!({"name": "TU Test"})).await).await;
    let uni_id = uni["id"].as_str().unwrap();
    let student = parse_body(
        app.post(
            &format!("/api/v1/universities/{}/students", uni_id),
            json!({"first_name": "Alan", "last_name": "Turing"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_str().unwrap();

    let res = app.get(&format!("/api/v1/students/{}", student_id)).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn expired_enrolment_does_not_count_as_active() {
    let app = TestApp::new().await;
    let uni = parse_body(app.post("/api/v1/universities", json!({"name": "TU Test"})).await).await;
    let uni_id = uni["id"].as_str().unwrap().to_string();
    let student = parse_body(
        app.post(
            &format!("/api/v1/universities/{}/students", uni_id),
            json!({"first_name": "Alan", "last_name": "Turing"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_str().unwrap().to_string();
    let degree = parse_body(
        app.post(
            &format!("/api/v1/universities/{}/degrees", uni_id),
            json!({"name": "Mathematics BSc", "ects_goal": 180}),
        )
        .await,
    )
    .await;

    let res = app
        .post(
            &format!("/api/v1/students/{}/degrees", student_id),
            json!({
                "degree_id": degree["id"].as_str().unwrap(),
                "start_date": "2015-10-01",
                "end_date": "2019-09-30"
            }),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);

    let details = app.get(&format!("/api/v1/students/{}", student_id)).await;
    assert_eq!(details.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn course_list_sorts_by_name_progress_and_grade() {
    let app = TestApp::new().await;
    let (student_id, degree_id) = seed_enrolled_student(&app, 180).await;
    let algorithms = seed_course(&app, &degree_id, "Algorithms", 5, 10.0).await;
    let databases = seed_course(&app, &degree_id, "Databases", 5, 10.0).await;
    let _logic = seed_course(&app, &degree_id, "Logic", 5, 10.0).await;

    // Databases gets 5 of 10 hours, Algorithms gets a grade.
    app.post(
        &format!("/api/v1/students/{}/bookings", student_id),
        json!({
            "course_id": databases,
            "from_date": "2024-03-04",
            "from_time": "09:00",
            "until_date": "2024-03-04",
            "until_time": "14:00"
        }),
    )
    .await;
    app.post(
        &format!("/api/v1/students/{}/grades", student_id),
        json!({"course_id": algorithms, "grade": 2.0}),
    )
    .await;

    let by_name = parse_body(app.get(&format!("/api/v1/students/{}/courses", student_id)).await).await;
    assert_eq!(by_name[0]["name"], "Algorithms");
    assert_eq!(by_name[1]["name"], "Databases");
    assert_eq!(by_name[2]["name"], "Logic");

    let by_name_desc = parse_body(
        app.get(&format!("/api/v1/students/{}/courses?sort=name&direction=desc", student_id))
            .await,
    )
    .await;
    assert_eq!(by_name_desc[0]["name"], "Logic");

    // Logic 0%, Databases 50%, Algorithms 100% (graded).
    let by_progress = parse_body(
        app.get(&format!("/api/v1/students/{}/courses?sort=progress", student_id))
            .await,
    )
    .await;
    assert_eq!(by_progress[0]["name"], "Logic");
    assert_eq!(by_progress[0]["formatted_progress"], "0.00%");
    assert_eq!(by_progress[1]["name"], "Databases");
    assert_eq!(by_progress[1]["formatted_progress"], "50.00%");
    assert_eq!(by_progress[2]["name"], "Algorithms");
    assert_eq!(by_progress[2]["formatted_progress"], "100.00%");

    let by_grade_desc = parse_body(
        app.get(&format!("/api/v1/students/{}/courses?sort=grade&direction=desc", student_id))
            .await,
    )
    .await;
    assert_eq!(by_grade_desc[0]["grade"], 2.0);
}

#[tokio::test]
async fn overrun_progress_is_shown_as_negative_remainder() {
    let app = TestApp::new().await;
    let (student_id, degree_id) = seed_enrolled_student(&app, 180).await;
    let course_id = seed_course(&app, &degree_id, "Algorithms", 5, 2.0).await;

    // 2.5 hours booked against 2.0 expected.
    app.post(
        &format!("/api/v1/students/{}/bookings", student_id),
        json!({
            "course_id": course_id,
            "from_date": "2024-03-04",
            "from_time": "09:00",
            "until_date": "2024-03-04",
            "until_time": "11:30"
        }),
    )
    .await;

    let courses = parse_body(app.get(&format!("/api/v1/students/{}/courses", student_id)).await).await;
    assert_eq!(courses[0]["progress"], 1.25);
    assert_eq!(courses[0]["formatted_progress"], "-25.00%");
}

#[tokio::test]
async fn semesters_group_courses_within_a_degree() {
    let app = TestApp::new().await;
    let (_, degree_id) = seed_enrolled_student(&app, 180).await;
    let algorithms = seed_course(&app, &degree_id, "Algorithms", 5, 60.0).await;
    let _databases = seed_course(&app, &degree_id, "Databases", 5, 60.0).await;

    let res = app
        .post(
            &format!("/api/v1/degrees/{}/semesters", degree_id),
            json!({"name": "Winter 2024", "number": 1}),
        )
        .await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let semester = parse_body(res).await;
    let semester_id = semester["id"].as_str().unwrap();

    let assign = app
        .post(
            &format!("/api/v1/semesters/{}/courses", semester_id),
            json!({"course_id": algorithms}),
        )
        .await;
    assert_eq!(assign.status(), StatusCode::CREATED);

    let courses = parse_body(app.get(&format!("/api/v1/semesters/{}/courses", semester_id)).await).await;
    assert_eq!(courses.as_array().unwrap().len(), 1);
    assert_eq!(courses[0]["name"], "Algorithms");

    let semesters = parse_body(app.get(&format!("/api/v1/degrees/{}/semesters", degree_id)).await).await;
    assert_eq!(semesters.as_array().unwrap().len(), 1);
    assert_eq!(semesters[0]["name"], "Winter 2024");
    assert_eq!(semesters[0]["number"], 1);
}

#[tokio::test]
async fn health_endpoint_responds() {
    let app = TestApp::new().await;
    let res = app.get("/health").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "ok");
}
