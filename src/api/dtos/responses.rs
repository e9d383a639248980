use serde::Serialize;

#[derive(Serialize)]
pub struct StudentDetailsResponse {
    pub student_id: String,
    pub student_name: String,
    pub university_name: String,
    pub degree_name: String,
    pub ects_collected: i32,
    pub ects_goal: i32,
    pub grade_average: f64,
}

#[derive(Serialize)]
pub struct CourseProgressResponse {
    pub course_id: String,
    pub name: String,
    pub progress: f64,
    pub formatted_progress: String,
    pub expected_hours: f64,
    pub spent_hours: f64,
    pub grade: f64,
}
