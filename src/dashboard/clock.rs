//! Wall-clock display

use chrono::{DateTime, Local, Timelike};

/// Format a timestamp as 24-hour HH:MM:SS
pub fn format_time(time: DateTime<Local>) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// Current local time as HH:MM:SS
pub fn current_time_string() -> String {
    format_time(Local::now())
}
