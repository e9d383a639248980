use crate::domain::models::time_plan::{CalendarBooking, TimePlanBooking};
use crate::domain::ports::TimePlanRepository;
use crate::error::AppError;
use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{Row, SqlitePool};

pub struct SqliteTimePlanRepo {
    pool: SqlitePool,
}

impl SqliteTimePlanRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TimePlanRepository for SqliteTimePlanRepo {
    async fn create(&self, booking: &TimePlanBooking) -> Result<TimePlanBooking, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        // The handler already checked for conflicts, but that read ran
        // outside this transaction. Re-check here so two racing submissions
        // for the same student cannot both commit.
        let guard = sqlx::query(
            "SELECT COUNT(*) AS count
             FROM time_plan_bookings t
             JOIN course_registrations r ON r.id = t.course_registration_id
             WHERE r.student_id = (SELECT student_id FROM course_registrations WHERE id = ?)
               AND t.from_date = ? AND t.from_time < ? AND t.until_time > ?",
        )
        .bind(&booking.course_registration_id)
        .bind(booking.from_date)
        .bind(booking.until_time)
        .bind(booking.from_time)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;
        if guard.get::<i64, _>("count") > 0 {
            return Err(AppError::Conflict(
                "Bookings are conflicting, please choose another date or time".into(),
            ));
        }

        let created = sqlx::query_as::<_, TimePlanBooking>(
            "INSERT INTO time_plan_bookings (id, course_registration_id, from_date, from_time, until_date, until_time, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING *",
        )
        .bind(&booking.id)
        .bind(&booking.course_registration_id)
        .bind(booking.from_date)
        .bind(booking.from_time)
        .bind(booking.until_date)
        .bind(booking.until_time)
        .bind(booking.created_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::Database)?;

        tx.commit().await.map_err(AppError::Database)?;
        Ok(created)
    }
    async fn list_for_student(&self, student_id: &str) -> Result<Vec<TimePlanBooking>, AppError> {
        sqlx::query_as::<_, TimePlanBooking>(
            "SELECT t.* FROM time_plan_bookings t
             JOIN course_registrations r ON r.id = t.course_registration_id
             WHERE r.student_id = ?
             ORDER BY t.from_date ASC, t.from_time ASC",
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn list_for_student_on_date(
        &self,
        student_id: &str,
        date: NaiveDate,
    ) -> Result<Vec<TimePlanBooking>, AppError> {
        sqlx::query_as::<_, TimePlanBooking>(
            "SELECT t.* FROM time_plan_bookings t
             JOIN course_registrations r ON r.id = t.course_registration_id
             WHERE r.student_id = ? AND t.from_date = ?
             ORDER BY t.from_time ASC",
        )
        .bind(student_id)
        .bind(date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn list_for_registration(&self, registration_id: &str) -> Result<Vec<TimePlanBooking>, AppError> {
        sqlx::query_as::<_, TimePlanBooking>(
            "SELECT * FROM time_plan_bookings WHERE course_registration_id = ? ORDER BY from_date ASC, from_time ASC",
        )
        .bind(registration_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
    async fn list_for_student_between(
        &self,
        student_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Vec<CalendarBooking>, AppError> {
        sqlx::query_as::<_, CalendarBooking>(
            "SELECT t.from_date, t.from_time, t.until_time, c.name AS course_name, c.bg_color, c.fg_color
             FROM time_plan_bookings t
             JOIN course_registrations r ON r.id = t.course_registration_id
             JOIN courses c ON c.id = r.course_id
             WHERE r.student_id = ? AND t.from_date BETWEEN ? AND ?
             ORDER BY t.from_date ASC, t.from_time ASC",
        )
        .bind(student_id)
        .bind(start_date)
        .bind(end_date)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::Database)
    }
}
