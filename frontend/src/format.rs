use chrono::{DateTime, Datelike};

const MONTHS_RU: [&str; 12] = [
    "января",
    "февраля",
    "марта",
    "апреля",
    "мая",
    "июня",
    "июля",
    "августа",
    "сентября",
    "октября",
    "ноября",
    "декабря",
];

/// Formats a unix start timestamp the way the contest list displays dates,
/// e.g. "23 декабря 2023"
pub fn format_start_date(start_time_seconds: i64) -> String {
    match DateTime::from_timestamp(start_time_seconds, 0) {
        Some(dt) => {
            let month = MONTHS_RU[dt.month0() as usize];
            format!("{} {} {}", dt.day(), month, dt.year())
        }
        None => String::new(),
    }
}

/// Renders a contribution score with its explicit sign, absent as "0"
pub fn format_contribution(contribution: Option<i32>) -> String {
    match contribution {
        Some(c) if c > 0 => format!("+{}", c),
        Some(c) => c.to_string(),
        None => "0".to_string(),
    }
}

/// Green for positive, red for negative, gray for zero or absent
pub fn contribution_color(contribution: Option<i32>) -> &'static str {
    match contribution {
        Some(c) if c > 0 => "#10b981",
        Some(c) if c < 0 => "#ef4444",
        _ => "#808080",
    }
}
