use crate::domain::models::degree::{Degree, StudentDegree};
use crate::domain::ports::DegreeRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

pub struct SqliteDegreeRepo {
    pool: SqlitePool,
}

impl SqliteDegreeRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DegreeRepository for SqliteDegreeRepo {
    async fn create(&self, degree: &Degree) -> Result<Degree, AppError> {
        sqlx::query_as::<_, Degree>(
            "INSERT INTO degrees (id, university_id, name, ects_goal) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&degree.id)
        .bind(&degree.university_id)
        .bind(&degree.name)
        .bind(degree.ects_goal)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Degree>, AppError> {
        sqlx::query_as::<_, Degree>("SELECT * FROM degrees WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
    async fn list_by_university(&self, university_id: &str) -> Result<Vec<Degree>, AppError> {
        sqlx::query_as::<_, Degree>("SELECT * FROM degrees WHERE university_id = ? ORDER BY name ASC")
            .bind(university_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn enroll(&self, enrolment: &StudentDegree) -> Result<StudentDegree, AppError> {
        sqlx::query_as::<_, StudentDegree>(
            "INSERT INTO student_degrees (id, student_id, degree_id, start_date, end_date, ects_collected)
             VALUES (?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&enrolment.id)
        .bind(&enrolment.student_id)
        .bind(&enrolment.degree_id)
        .bind(enrolment.start_date)
        .bind(enrolment.end_date)
        .bind(enrolment.ects_collected)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn find_active_for_student(
        &self,
        student_id: &str,
        today: NaiveDate,
    ) -> Result<Option<StudentDegree>, AppError> {
        sqlx::query_as::<_, StudentDegree>(
            "SELECT * FROM student_degrees WHERE student_id = ? AND end_date >= ? ORDER BY end_date ASC LIMIT 1",
        )
        .bind(student_id)
        .bind(today)
        .fetch_optional(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn update_ects_collected(&self, enrolment_id: &str, ects_collected: i32) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE student_degrees SET ects_collected = ? WHERE id = ?")
            .bind(ects_collected)
            .bind(enrolment_id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Degree enrolment not found".into()));
        }
        Ok(())
    }
}
