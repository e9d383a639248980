use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A program of study with a target ECTS total.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Degree {
    pub id: String,
    pub university_id: String,
    pub name: String,
    pub ects_goal: i32,
}

impl Degree {
    pub fn new(university_id: String, name: String, ects_goal: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            university_id,
            name,
            ects_goal,
        }
    }
}

/// Enrolment of a student into a degree. The degree must be finished by
/// `end_date`; the enrolment with an end date in the future is the active one.
/// `ects_collected` is derived and re-summed on every grade save.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct StudentDegree {
    pub id: String,
    pub student_id: String,
    pub degree_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub ects_collected: i32,
}

impl StudentDegree {
    pub fn new(student_id: String, degree_id: String, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            student_id,
            degree_id,
            start_date,
            end_date,
            ects_collected: 0,
        }
    }
}
