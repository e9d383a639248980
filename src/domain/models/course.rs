use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

pub const DEFAULT_BG_COLOR: &str = "#000000";
pub const DEFAULT_FG_COLOR: &str = "#ffffff";

/// A course grants its ECTS points once passed. The colors are what the
/// calendar uses to paint slots occupied by this course.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Course {
    pub id: String,
    pub university_id: String,
    pub degree_id: String,
    pub name: String,
    pub ects_points: i32,
    pub expected_hours: f64,
    pub bg_color: String,
    pub fg_color: String,
}

pub struct NewCourseParams {
    pub university_id: String,
    pub degree_id: String,
    pub name: String,
    pub ects_points: i32,
    pub expected_hours: f64,
    pub bg_color: Option<String>,
    pub fg_color: Option<String>,
}

impl Course {
    pub fn new(params: NewCourseParams) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            university_id: params.university_id,
            degree_id: params.degree_id,
            name: params.name,
            ects_points: params.ects_points,
            expected_hours: params.expected_hours,
            bg_color: params.bg_color.unwrap_or_else(|| DEFAULT_BG_COLOR.to_string()),
            fg_color: params.fg_color.unwrap_or_else(|| DEFAULT_FG_COLOR.to_string()),
        }
    }
}

/// Groups courses within a degree so they can be filtered later on.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Semester {
    pub id: String,
    pub degree_id: String,
    pub name: String,
    pub number: i32,
}

impl Semester {
    pub fn new(degree_id: String, name: String, number: i32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            degree_id,
            name,
            number,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct CourseSemester {
    pub id: String,
    pub course_id: String,
    pub semester_id: String,
}

impl CourseSemester {
    pub fn new(course_id: String, semester_id: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            course_id,
            semester_id,
        }
    }
}
