use crate::domain::models::university::University;
use crate::domain::ports::UniversityRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::PgPool;

pub struct PostgresUniversityRepo {
    pool: PgPool,
}

impl PostgresUniversityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UniversityRepository for PostgresUniversityRepo {
    async fn create(&self, university: &University) -> Result<University, AppError> {
        sqlx::query_as::<_, University>("INSERT INTO universities (id, name) VALUES ($1, $2) RETURNING *")
            .bind(&university.id)
            .bind(&university.name)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<University>, AppError> {
        sqlx::query_as::<_, University>("SELECT * FROM universities WHERE id = $1")
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
