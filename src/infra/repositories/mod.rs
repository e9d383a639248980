pub mod sqlite_university_repo;
pub mod sqlite_student_repo;
pub mod sqlite_degree_repo;
pub mod sqlite_course_repo;
pub mod sqlite_registration_repo;
pub mod sqlite_time_plan_repo;

pub mod postgres_university_repo;
pub mod postgres_student_repo;
pub mod postgres_degree_repo;
pub mod postgres_course_repo;
pub mod postgres_registration_repo;
pub mod postgres_time_plan_repo;
