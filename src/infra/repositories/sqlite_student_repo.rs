use crate::domain::models::student::Student;
use crate::domain::ports::StudentRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteStudentRepo {
    pool: SqlitePool,
}

impl SqliteStudentRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepo {
    async fn create(&self, student: &Student) -> Result<Student, AppError> {
        sqlx::query_as::<_, Student>(
            "INSERT INTO students (id, university_id, first_name, last_name) VALUES (?, ?, ?, ?) RETURNING *",
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
        sqlx::query_as::<_, Student>("SELECT * FROM students WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
    async fn list_by_university(&self, university_id: &str) -> Result<Vec<Student>, AppError> {
        sqlx::query_as::<_, Student>(
            "SELECT * FROM students WHERE university_id = ? ORDER BY last_name ASC, first_name ASC",
        )
        .bind(university_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
