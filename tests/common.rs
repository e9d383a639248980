use unidash_backend::{
    api::router::create_router,
    config::Config,
    infra::repositories::{
        sqlite_course_repo::SqliteCourseRepo, sqlite_degree_repo::SqliteDegreeRepo,
        sqlite_registration_repo::SqliteRegistrationRepo, sqlite_student_repo::SqliteStudentRepo,
        sqlite_time_plan_repo::SqliteTimePlanRepo, sqlite_university_repo::SqliteUniversityRepo,
    },
    state::AppState,
};

use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use serde_json::Value;
use sqlx::{
    sqlite::{SqliteConnectOptions, SqlitePoolOptions},
    Pool, Sqlite,
};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let config = Config {
            database_url: db_url.clone(),
            port: 0,
        };

        let state = AppState {
            config,
            university_repo: Arc::new(SqliteUniversityRepo::new(pool.clone())),
            student_repo: Arc::new(SqliteStudentRepo::new(pool.clone())),
            degree_repo: Arc::new(SqliteDegreeRepo::new(pool.clone())),
            course_repo: Arc::new(SqliteCourseRepo::new(pool.clone())),
            registration_repo: Arc::new(SqliteRegistrationRepo::new(pool.clone())),
            time_plan_repo: Arc::new(SqliteTimePlanRepo::new(pool.clone())),
        };

        let router = create_router(state);

        Self {
            router,
            pool,
            db_filename,
        }
    }

    pub async fn post(&self, uri: &str, payload: Value) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    pub async fn get(&self, uri: &str) -> axum::response::Response {
        self.router
            .clone()
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// University + student + degree + active enrolment. Returns
/// (student_id, degree_id).
#[allow(dead_code)]
pub async fn seed_enrolled_student(app: &TestApp, ects_goal: i32) -> (String, String) {
    let uni = parse_body(app.post("/api/v1/universities", serde_json::json!({"name": "TU Test"})).await).await;
    let uni_id = uni["id"].as_str().unwrap().to_string();

    let student = parse_body(
        app.post(
            &format!("/api/v1/universities/{}/students", uni_id),
            serde_json::json!({"first_name": "Ada", "last_name": "Lovelace"}),
        )
        .await,
    )
    .await;
    let student_id = student["id"].as_str().unwrap().to_string();

    let degree = parse_body(
        app.post(
            &format!("/api/v1/universities/{}/degrees", uni_id),
            serde_json::json!({"name": "Computer Science BSc", "ects_goal": ects_goal}),
        )
        .await,
    )
    .await;
    let degree_id = degree["id"].as_str().unwrap().to_string();

    let enroll = app
        .post(
            &format!("/api/v1/students/{}/degrees", student_id),
            serde_json::json!({
                "degree_id": degree_id,
                "start_date": "2020-01-01",
                "end_date": "2099-12-31"
            }),
        )
        .await;
    assert!(enroll.status().is_success());

    (student_id, degree_id)
}

/// A course within the degree. Returns its id.
#[allow(dead_code)]
pub async fn seed_course(
    app: &TestApp,
    degree_id: &str,
    name: &str,
    ects_points: i32,
    expected_hours: f64,
) -> String {
    let course = parse_body(
        app.post(
            &format!("/api/v1/degrees/{}/courses", degree_id),
            serde_json::json!({
                "name": name,
                "ects_points": ects_points,
                "expected_hours": expected_hours,
                "bg_color": "#112233",
                "fg_color": "#ffffff"
            }),
        )
        .await,
    )
    .await;
    course["id"].as_str().unwrap().to_string()
}
