use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Transient view models for the weekly calendar grid. These are rebuilt on
/// every request and never persisted.

#[derive(Debug, Serialize, Clone)]
pub struct TimeSlot {
    pub slot_time: NaiveTime,
    pub entry_name: String,
    pub bg_color: String,
    pub fg_color: String,
    pub booked: bool,
}

impl TimeSlot {
    pub fn free(slot_time: NaiveTime) -> Self {
        Self {
            slot_time,
            entry_name: String::new(),
            bg_color: String::new(),
            fg_color: String::new(),
            booked: false,
        }
    }

    pub fn booked(slot_time: NaiveTime, entry_name: String, bg_color: String, fg_color: String) -> Self {
        Self {
            slot_time,
            entry_name,
            bg_color,
            fg_color,
            booked: true,
        }
    }
}

#[derive(Debug, Serialize, Clone)]
pub struct HourBlock {
    pub hour: u32,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Serialize, Clone)]
pub struct CalendarDay {
    pub day: u32,
    pub date: NaiveDate,
    pub hours: Vec<HourBlock>,
}

#[derive(Debug, Serialize, Clone)]
pub struct CalendarWeek {
    pub week_number: u32,
    pub days: Vec<CalendarDay>,
}
