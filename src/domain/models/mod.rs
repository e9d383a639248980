pub mod calendar;
pub mod course;
pub mod degree;
pub mod registration;
pub mod student;
pub mod time_plan;
pub mod university;
