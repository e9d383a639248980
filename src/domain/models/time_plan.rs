use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One contiguous study session of a course registration. Bookings span a
/// single calendar date and are never updated in place; they disappear only
/// when their registration is deleted.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct TimePlanBooking {
    pub id: String,
    pub course_registration_id: String,
    pub from_date: NaiveDate,
    pub from_time: NaiveTime,
    pub until_date: NaiveDate,
    pub until_time: NaiveTime,
    pub created_at: DateTime<Utc>,
}

impl TimePlanBooking {
    pub fn new(
        course_registration_id: String,
        from_date: NaiveDate,
        from_time: NaiveTime,
        until_date: NaiveDate,
        until_time: NaiveTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            course_registration_id,
            from_date,
            from_time,
            until_date,
            until_time,
            created_at: Utc::now(),
        }
    }

    /// Open-interval overlap test against a candidate [from, until) on the
    /// same date. Compares time-of-day only; adjacent intervals do not clash.
    pub fn overlaps(&self, from_time: NaiveTime, until_time: NaiveTime) -> bool {
        self.from_time < until_time && self.until_time > from_time
    }

    /// Booking duration in hours, across the full date+time span.
    pub fn duration_hours(&self) -> f64 {
        let from = self.from_date.and_time(self.from_time);
        let until = self.until_date.and_time(self.until_time);
        (until - from).num_seconds() as f64 / 3600.0
    }
}

/// A booking joined with the display fields of its course, fetched once per
/// week so the calendar grid can be built without further queries.
#[derive(Debug, FromRow, Clone)]
pub struct CalendarBooking {
    pub from_date: NaiveDate,
    pub from_time: NaiveTime,
    pub until_time: NaiveTime,
    pub course_name: String,
    pub bg_color: String,
    pub fg_color: String,
}
