use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Student {
    pub id: String,
    pub university_id: String,
    pub first_name: String,
    pub last_name: String,
}

impl Student {
    pub fn new(university_id: String, first_name: String, last_name: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            university_id,
            first_name,
            last_name,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
