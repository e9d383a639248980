use crate::domain::models::course::{Course, CourseSemester, Semester};
use crate::domain::ports::CourseRepository;
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteCourseRepo {
    pool: SqlitePool,
}

impl SqliteCourseRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CourseRepository for SqliteCourseRepo {
    async fn create(&self, course: &Course) -> Result<Course, AppError> {
        sqlx::query_as::<_, Course>(
            "INSERT INTO courses (id, university_id, degree_id, name, ects_points, expected_hours, bg_color, fg_color)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&course.id)
        .bind(&course.university_id)
        .bind(&course.degree_id)
        .bind(&course.name)
        .bind(course.ects_points)
        .bind(course.expected_hours)
        .bind(&course.bg_color)
        .bind(&course.fg_color)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
    async fn list_by_degree(&self, degree_id: &str) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE degree_id = ? ORDER BY name ASC")
            .bind(degree_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn create_semester(&self, semester: &Semester) -> Result<Semester, AppError> {
        sqlx::query_as::<_, Semester>(
            "INSERT INTO semesters (id, degree_id, name, number) VALUES (?, ?, ?, ?) RETURNING *",
        )
        .bind(&semester.id)
        .bind(&semester.degree_id)
        .bind(&semester.name)
        .bind(semester.number)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn find_semester_by_id(&self, id: &str) -> Result<Option<Semester>, AppError> {
        sqlx::query_as::<_, Semester>("SELECT * FROM semesters WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }
    async fn list_semesters(&self, degree_id: &str) -> Result<Vec<Semester>, AppError> {
        sqlx::query_as::<_, Semester>(
            "SELECT * FROM semesters WHERE degree_id = ? ORDER BY number ASC",
        )
        .bind(degree_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn assign_semester(&self, assignment: &CourseSemester) -> Result<CourseSemester, AppError> {
        sqlx::query_as::<_, CourseSemester>(
            "INSERT INTO course_semesters (id, course_id, semester_id) VALUES (?, ?, ?) RETURNING *",
        )
        .bind(&assignment.id)
        .bind(&assignment.course_id)
        .bind(&assignment.semester_id)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn list_by_semester(&self, semester_id: &str) -> Result<Vec<Course>, AppError> {
        sqlx::query_as::<_, Course>(
            "SELECT c.* FROM courses c
             JOIN course_semesters cs ON cs.course_id = c.id
             WHERE cs.semester_id = ?
             ORDER BY c.name ASC",
        )
        .bind(semester_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
