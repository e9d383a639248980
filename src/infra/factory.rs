use std::str::FromStr;
use std::time::Duration;
use sqlx::{
    postgres::{PgConnectOptions, PgPoolOptions},
    sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions},
};
use sqlx::{ConnectOptions, PgPool, SqlitePool};
use std::sync::Arc;
use tracing::info;
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::infra::repositories::{
    postgres_course_repo::PostgresCourseRepo, postgres_degree_repo::PostgresDegreeRepo,
    postgres_registration_repo::PostgresRegistrationRepo, postgres_student_repo::PostgresStudentRepo,
    postgres_time_plan_repo::PostgresTimePlanRepo, postgres_university_repo::PostgresUniversityRepo,
    sqlite_course_repo::SqliteCourseRepo, sqlite_degree_repo::SqliteDegreeRepo,
    sqlite_registration_repo::SqliteRegistrationRepo, sqlite_student_repo::SqliteStudentRepo,
    sqlite_time_plan_repo::SqliteTimePlanRepo, sqlite_university_repo::SqliteUniversityRepo,
};
use crate::state::AppState;

pub async fn bootstrap_state(config: &Config) -> AppState {
    let database_url = &config.database_url;

    if database_url.starts_with("postgres://") || database_url.starts_with("postgresql://") {
        info!("Initializing PostgreSQL connection...");

        let mut opts: PgConnectOptions = database_url.parse().expect("Invalid Postgres URL");
        opts = opts
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect_with(opts)
            .await
            .expect("Failed to connect to Postgres");

        run_postgres_migrations(&pool).await;

        AppState {
            config: config.clone(),
            university_repo: Arc::new(PostgresUniversityRepo::new(pool.clone())),
            student_repo: Arc::new(PostgresStudentRepo::new(pool.clone())),
            degree_repo: Arc::new(PostgresDegreeRepo::new(pool.clone())),
            course_repo: Arc::new(PostgresCourseRepo::new(pool.clone())),
            registration_repo: Arc::new(PostgresRegistrationRepo::new(pool.clone())),
            time_plan_repo: Arc::new(PostgresTimePlanRepo::new(pool.clone())),
        }
    } else {
        info!("Initializing SQLite connection with WAL Mode...");

        let opts = SqliteConnectOptions::from_str(database_url)
            .expect("Invalid SQLite connection string")
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(Duration::from_secs(5))
            .log_statements(LevelFilter::Debug)
            .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(opts)
            .await
            .expect("Failed to connect to SQLite");

        run_sqlite_migrations(&pool).await;

        AppState {
            config: config.clone(),
            university_repo: Arc::new(SqliteUniversityRepo::new(pool.clone())),
            student_repo: Arc::new(SqliteStudentRepo::new(pool.clone())),
            degree_repo: Arc::new(SqliteDegreeRepo::new(pool.clone())),
            course_repo: Arc::new(SqliteCourseRepo::new(pool.clone())),
            registration_repo: Arc::new(SqliteRegistrationRepo::new(pool.clone())),
            time_plan_repo: Arc::new(SqliteTimePlanRepo::new(pool.clone())),
        }
    }
}

async fn run_postgres_migrations(pool: &PgPool) {
    sqlx::migrate!("./migrations/postgres")
        .run(pool)
        .await
        .expect("Failed to run Postgres migrations");
}

async fn run_sqlite_migrations(pool: &SqlitePool) {
    sqlx::migrate!("./migrations/sqlite")
        .run(pool)
        .await
        .expect("Failed to run SQLite migrations");
}
