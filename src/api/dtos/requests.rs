use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct CreateUniversityRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct CreateStudentRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Deserialize)]
pub struct CreateDegreeRequest {
    pub name: String,
    pub ects_goal: i32,
}

#[derive(Deserialize)]
pub struct EnrollDegreeRequest {
    pub degree_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    pub ects_points: i32,
    pub expected_hours: f64,
    pub bg_color: Option<String>,
    pub fg_color: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateSemesterRequest {
    pub name: String,
    pub number: i32,
}

#[derive(Deserialize)]
pub struct AssignSemesterRequest {
    pub course_id: String,
}

#[derive(Deserialize)]
pub struct SaveGradeRequest {
    pub course_id: String,
    pub grade: f64,
}

/// Dates and times arrive as form-style strings ("2024-03-04", "10:15") and
/// are parsed in the handler so a bad value maps to a validation error.
#[derive(Deserialize)]
pub struct CreateBookingRequest {
    pub course_id: String,
    pub from_date: String,
    pub from_time: String,
    pub until_date: String,
    pub until_time: String,
}

#[derive(Deserialize)]
pub struct CourseListQuery {
    pub sort: Option<String>,
    pub direction: Option<String>,
}

#[derive(Deserialize)]
pub struct CalendarQuery {
    pub offset: Option<i64>,
}
