use crate::domain::models::calendar::{CalendarDay, CalendarWeek, HourBlock, TimeSlot};
use crate::domain::models::time_plan::CalendarBooking;
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike};
use std::collections::HashMap;

pub const SLOT_MINUTES: u32 = 15;
pub const SLOTS_PER_HOUR: u32 = 4;
pub const HOURS_PER_DAY: u32 = 24;
pub const DAYS_PER_WEEK: u32 = 7;

/// Snaps a clock time down to the previous quarter-hour boundary. The hour is
/// preserved, seconds are dropped.
pub fn quantize_to_slot(t: NaiveTime) -> NaiveTime {
    NaiveTime::from_hms_opt(t.hour(), t.minute() - t.minute() % SLOT_MINUTES, 0).unwrap()
}

/// Resolves a week offset (0 = current week) into the ISO week number and the
/// Monday of that week. `None` when the offset shifts past the representable
/// date range; the caller rejects such offsets.
pub fn week_anchor(today: NaiveDate, week_offset: i64) -> Option<(u32, NaiveDate)> {
    let anchor = today.checked_add_signed(Duration::try_weeks(week_offset)?)?;
    let monday =
        anchor.checked_sub_signed(Duration::days(anchor.weekday().num_days_from_monday() as i64))?;
    Some((anchor.iso_week().week(), monday))
}

/// Builds the 7-day x 24-hour x 4-slot grid for one week starting at
/// `monday`. The caller fetches the whole week's bookings once; they are
/// indexed by date here so every slot lookup is in memory.
///
/// A slot counts as booked only when a booking fully encloses it
/// (`from_time <= slot_start && until_time >= slot_end`). This is looser
/// than the conflict test on purpose: it drives highlighting, not rejection.
pub fn build_week(week_number: u32, monday: NaiveDate, bookings: &[CalendarBooking]) -> CalendarWeek {
    let mut by_date: HashMap<NaiveDate, Vec<&CalendarBooking>> = HashMap::new();
    for booking in bookings {
        by_date.entry(booking.from_date).or_default().push(booking);
    }

    let mut days = Vec::with_capacity(DAYS_PER_WEEK as usize);
    for day in 0..DAYS_PER_WEEK {
        let date = monday + Duration::days(day as i64);
        let day_bookings = by_date.get(&date);

        let mut hours = Vec::with_capacity(HOURS_PER_DAY as usize);
        for hour in 0..HOURS_PER_DAY {
            let mut slots = Vec::with_capacity(SLOTS_PER_HOUR as usize);
            for block in 0..SLOTS_PER_HOUR {
                let minute = block * SLOT_MINUTES;
                let slot_start = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();

                // The last block of the hour ends at :59 instead of rolling
                // over into the next hour.
                let end_minute = if minute + SLOT_MINUTES < 60 { minute + SLOT_MINUTES } else { 59 };
                let slot_end = NaiveTime::from_hms_opt(hour, end_minute, 0).unwrap();

                let occupied = day_bookings.and_then(|list| {
                    list.iter()
                        .find(|b| b.from_time <= slot_start && b.until_time >= slot_end)
                });

                let slot = match occupied {
                    Some(b) => TimeSlot::booked(
                        slot_start,
                        b.course_name.clone(),
                        b.bg_color.clone(),
                        b.fg_color.clone(),
                    ),
                    None => TimeSlot::free(slot_start),
                };
                slots.push(slot);
            }
            hours.push(HourBlock { hour, slots });
        }
        days.push(CalendarDay { day, date, hours });
    }

    CalendarWeek { week_number, days }
}
