pub mod calendar;
pub mod course;
pub mod degree;
pub mod health;
pub mod student;
pub mod university;
