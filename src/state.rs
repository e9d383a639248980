use crate::config::Config;
use crate::domain::ports::{
    CourseRepository, DegreeRepository, RegistrationRepository, StudentRepository,
    TimePlanRepository, UniversityRepository,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub university_repo: Arc<dyn UniversityRepository>,
    pub student_repo: Arc<dyn StudentRepository>,
    pub degree_repo: Arc<dyn DegreeRepository>,
    pub course_repo: Arc<dyn CourseRepository>,
    pub registration_repo: Arc<dyn RegistrationRepository>,
    pub time_plan_repo: Arc<dyn TimePlanRepository>,
}
