use crate::domain::models::registration::{CourseRegistration, ExamOutcome};
use crate::domain::ports::RegistrationRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{PgPool, Row};

pub struct PostgresRegistrationRepo {
    pool: PgPool,
}

impl PostgresRegistrationRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationRepository for PostgresRegistrationRepo {
    async fn create(&self, registration: &CourseRegistration) -> Result<CourseRegistration, AppError> {
        sqlx::query_as::<_, CourseRegistration>(
            "INSERT INTO course_registrations (id, student_id, course_id, spent_hours, completed)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING *",
        )
        .bind(&registration.id)
        .bind(&registration.student_id)
        .bind(&registration.course_id)
        .bind(registration.spent_hours)
        .bind(registration.completed)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn find_for_student_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<Option<CourseRegistration>, AppError> {
        sqlx::query_as::<_, CourseRegistration>(
            "SELECT * FROM course_registrations WHERE student_id = $1 AND course_id = $2",
        )
        .bind(student_id)
        .bind(course_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn update_spent_hours(&self, registration_id: &str, spent_hours: f64) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE course_registrations SET spent_hours = $1 WHERE id = $2")
            .bind(spent_hours)
            .bind(registration_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Course registration not found".into()));
        }
        Ok(())
    }
    async fn update_completed(&self, registration_id: &str, completed: bool) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE course_registrations SET completed = $1 WHERE id = $2")
            .bind(completed)
            .bind(registration_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Course registration not found".into()));
        }
        Ok(())
    }
    async fn sum_completed_ects(&self, student_id: &str, degree_id: &str) -> Result<i32, AppError> {
        let row = sqlx::query(
            "SELECT CAST(COALESCE(SUM(c.ects_points), 0) AS INTEGER) AS total
             FROM course_registrations r
             JOIN courses c ON c.id = r.course_id
             WHERE r.student_id = $1 AND c.degree_id = $2 AND r.completed = TRUE",
        )
        .bind(student_id)
        .bind(degree_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)?;
        Ok(row.get::<i32, _>("total"))
    }

    async fn save_exam_outcome(&self, outcome: &ExamOutcome) -> Result<ExamOutcome, AppError> {
        sqlx::query_as::<_, ExamOutcome>(
            "INSERT INTO exam_outcomes (id, course_registration_id, grade, passed)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO UPDATE SET grade = EXCLUDED.grade, passed = EXCLUDED.passed
             RETURNING *",
        )
        .bind(&outcome.id)
        .bind(&outcome.course_registration_id)
        .bind(outcome.grade)
        .bind(outcome.passed)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn find_exam_outcome(&self, registration_id: &str) -> Result<Option<ExamOutcome>, AppError> {
        sqlx::query_as::<_, ExamOutcome>(
            "SELECT * FROM exam_outcomes WHERE course_registration_id = $1 LIMIT 1",
        )
        .bind(registration_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn list_passed_outcomes_for_student(&self, student_id: &str) -> Result<Vec<ExamOutcome>, AppError> {
        sqlx::query_as::<_, ExamOutcome>(
            "SELECT o.* FROM exam_outcomes o
             JOIN course_registrations r ON r.id = o.course_registration_id
             WHERE r.student_id = $1 AND o.passed = TRUE",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
