use crate::domain::models::university::University;
use crate::domain::ports::UniversityRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteUniversityRepo {
    pool: SqlitePool,
}

impl SqliteUniversityRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UniversityRepository for SqliteUniversityRepo {
    async fn create(&self, university: &University) -> Result<University, AppError> {
        sqlx::query_as::<_, University>("INSERT INTO universities (id, name) VALUES (?, ?) RETURNING *")
            .bind(&university.id)
            .bind(&university.name)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<University>, AppError> {
        sqlx::query_as::<_, University>("SELECT * FROM universities WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
    async fn list(&self) -> Result<Vec<University>, AppError> {
        sqlx::query_as::<_, University>("SELECT * FROM universities ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
