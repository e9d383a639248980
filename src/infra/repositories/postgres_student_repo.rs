use crate::domain::models::student::Student;
use crate::domain::ports::StudentRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresStudentRepo {
    pool: PgPool,
}

impl PostgresStudentRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for PostgresStudentRepo {
    async fn create(&self, student: &Student) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (id, university_id, first_name, last_name) VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&student.id)
        .bind(&student.university_id)
        .bind(&student.first_name)
        .bind(&student.last_name)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, AppError> {
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
    async fn list_by_university(&self, university_id: &str) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE university_id = $1 ORDER BY last_name ASC, first_name ASC",
        )
        .bind(university_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
