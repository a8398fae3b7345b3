// src/domain/calendar.rs
use chrono::{DateTime, Datelike, NaiveDate, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

fn midnight_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Whole days from `now` until midnight UTC of `date`, rounded up.
/// Negative once the date has passed.
pub fn days_until(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let diff = midnight_millis(date) - now.timestamp_millis();
    -(-diff).div_euclid(MILLIS_PER_DAY)
}

/// Whole days elapsed since midnight UTC of `date`, rounded down.
pub fn days_since(date: NaiveDate, now: DateTime<Utc>) -> i64 {
    (now.timestamp_millis() - midnight_millis(date)).div_euclid(MILLIS_PER_DAY)
}

/// Rent is always due on the 1st of the following month.
pub fn next_due_date(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
}

/// Short human label for the dashboard's due-date banner.
pub fn due_label(due_date: NaiveDate, now: DateTime<Utc>) -> String {
    match days_until(due_date, now) {
        0 => "Due Today".to_string(),
        1 => "Due Tomorrow".to_string(),
        d if d < 0 => format!("{} days overdue", d.abs()),
        d => format!("Due in {d} days"),
    }
}

/// "June 1, 2025"
pub fn long_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
