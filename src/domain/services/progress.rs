use crate::domain::models::registration::{CourseRegistration, ExamOutcome};
use crate::domain::models::time_plan::TimePlanBooking;
use crate::domain::ports::RegistrationRepository;
use crate::error::AppError;

/// Grading scale where lower is better: 1.0 to 4.0 passes, 5 and 6 fail.
/// A grade of 0 means "ungraded/cleared" and is neither passing nor failing.
pub fn is_passing_grade(grade: f64) -> bool {
    (1.0..=4.0).contains(&grade)
}

/// Recomputes total spent hours from the full booking set of a registration.
/// Always derived from scratch so the total stays correct if bookings are
/// ever removed.
pub fn total_spent_hours(bookings: &[TimePlanBooking]) -> f64 {
    bookings.iter().map(|b| b.duration_hours()).sum()
}

/// Mean grade over the given outcomes, rounded to two decimals. The caller
/// passes passed outcomes only; no outcomes yields 0.0.
pub fn grade_average(outcomes: &[ExamOutcome]) -> f64 {
    if outcomes.is_empty() {
        return 0.0;
    }
    let sum: f64 = outcomes.iter().map(|o| o.grade).sum();
    round2(sum / outcomes.len() as f64)
}

/// Share of expected hours already spent. Any recorded grade forces the
/// course to count as fully worked through.
pub fn course_progress(spent_hours: f64, expected_hours: f64, grade: f64) -> f64 {
    if grade > 0.0 {
        return 1.0;
    }
    if expected_hours <= 0.0 {
        return 0.0;
    }
    round2(spent_hours / expected_hours)
}

/// Formats a progress ratio as a percentage; overrun beyond 100% is shown as
/// a negative remainder ("-25.00%" for a ratio of 1.25).
pub fn format_progress(progress: f64) -> String {
    if progress > 1.0 {
        format!("-{:.2}%", (progress - 1.0) * 100.0)
    } else {
        format!("{:.2}%", progress * 100.0)
    }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Returns the registration for (student, course), creating it when absent.
/// Both the grade and the booking flow go through here, so the first write
/// for a course heals the missing registration instead of erroring.
pub async fn ensure_registration(
    repo: &dyn RegistrationRepository,
    student_id: &str,
    course_id: &str,
) -> Result<CourseRegistration, AppError> {
    if let Some(existing) = repo.find_for_student_course(student_id, course_id).await? {
        return Ok(existing);
    }
    let registration = CourseRegistration::new(student_id.to_string(), course_id.to_string());
    repo.create(&registration).await
}
