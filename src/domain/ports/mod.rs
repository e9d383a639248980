use crate::domain::models::{
    course::{Course, CourseSemester, Semester},
    degree::{Degree, StudentDegree},
    registration::{CourseRegistration, ExamOutcome},
    student::Student,
    time_plan::{CalendarBooking, TimePlanBooking},
    university::University,
};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;

#[async_trait]
pub trait UniversityRepository: Send + Sync {
    async fn create(&self, university: &University) -> Result<University, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<University>, AppError>;
    async fn list(&self) -> Result<Vec<University>, AppError>;
}

#[async_trait]
pub trait StudentRepository: Send + Sync {
    async fn create(&self, student: &Student) -> Result<Student, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Student>, AppError>;
    async fn list_by_university(&self, university_id: &str) -> Result<Vec<Student>, AppError>;
}

#[async_trait]
pub trait DegreeRepository: Send + Sync {
    async fn create(&self, degree: &Degree) -> Result<Degree, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Degree>, AppError>;
    async fn list_by_university(&self, university_id: &str) -> Result<Vec<Degree>, AppError>;

    async fn enroll(&self, enrolment: &StudentDegree) -> Result<StudentDegree, AppError>;
    /// The enrolment whose end date lies on or after `today`, if any.
    async fn find_active_for_student(
        &self,
        student_id: &str,
        today: NaiveDate,
    ) -> Result<Option<StudentDegree>, AppError>;
    async fn update_ects_collected(&self, enrolment_id: &str, ects_collected: i32) -> Result<(), AppError>;
}

#[async_trait]
pub trait CourseRepository: Send + Sync {
    async fn create(&self, course: &Course) -> Result<Course, AppError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, AppError>;
    async fn list_by_degree(&self, degree_id: &str) -> Result<Vec<Course>, AppError>;

    async fn create_semester(&self, semester: &Semester) -> Result<Semester, AppError>;
    async fn find_semester_by_id(&self, id: &str) -> Result<Option<Semester>, AppError>;
    async fn list_semesters(&self, degree_id: &str) -> Result<Vec<Semester>, AppError>;
    async fn assign_semester(&self, assignment: &CourseSemester) -> Result<CourseSemester, AppError>;
    async fn list_by_semester(&self, semester_id: &str) -> Result<Vec<Course>, AppError>;
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn create(&self, registration: &CourseRegistration) -> Result<CourseRegistration, AppError>;
    async fn find_for_student_course(
        &self,
        student_id: &str,
        course_id: &str,
    ) -> Result<Option<CourseRegistration>, AppError>;
    async fn update_spent_hours(&self, registration_id: &str, spent_hours: f64) -> Result<(), AppError>;
    async fn update_completed(&self, registration_id: &str, completed: bool) -> Result<(), AppError>;
    /// Sum of ECTS points over the student's completed registrations that
    /// belong to courses of the given degree.
    async fn sum_completed_ects(&self, student_id: &str, degree_id: &str) -> Result<i32, AppError>;

    async fn save_exam_outcome(&self, outcome: &ExamOutcome) -> Result<ExamOutcome, AppError>;
    async fn find_exam_outcome(&self, registration_id: &str) -> Result<Option<ExamOutcome>, AppError>;
    async fn list_passed_outcomes_for_student(&self, student_id: &str) -> Result<Vec<ExamOutcome>, AppError>;
}

#[async_trait]
pub trait TimePlanRepository: Send + Sync {
    /// Inserts the booking, re-running the overlap check against the owning
    /// student's bookings inside the same transaction. Racing submissions
    /// for the same student cannot both commit.
    async fn create(&self, booking: &TimePlanBooking) -> Result<TimePlanBooking, AppError>;
    async fn list_for_student(&self, student_id: &str) -> Result<Vec<TimePlanBooking>, AppError>;
    async fn list_for_student_on_date(
        &self,
        student_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimePlanBooking>, AppError>;
    async fn list_for_registration(&self, registration_id: &str) -> Result<Vec<TimePlanBooking>, AppError>;
    /// Bookings of one student within an inclusive date range, joined with
    /// the course display fields. One query feeds a whole calendar week.
    async fn list_for_student_between(
        &self,
        student_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<CalendarBooking>, AppError>;
}
