use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Links a student to one course of their degree. `spent_hours` is derived
/// from the time plan bookings, `completed` from the latest passing grade.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CourseRegistration {
    pub id: String,
    pub student_id: String,
    pub course_id: String,
    pub spent_hours: f64,
    pub completed: bool,
}

impl CourseRegistration {
    pub fn new(student_id: String, course_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            student_id,
            course_id,
            spent_hours: 0.0,
            completed: false,
        }
    }
}

/// One recorded grade for a course registration. There is a single outcome
/// per registration that gets overwritten when the grade is corrected.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct ExamOutcome {
    pub id: String,
    pub course_registration_id: String,
    pub grade: f64,
    pub passed: bool,
}

impl ExamOutcome {
    pub fn new(course_registration_id: String, grade: f64, passed: bool) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            course_registration_id,
            grade,
            passed,
        }
    }
}
