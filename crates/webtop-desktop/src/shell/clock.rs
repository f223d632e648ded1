//! Taskbar clock

use chrono::{Local, NaiveTime};

/// Formats the current time for the taskbar
///
/// Twelve-hour time without a leading zero, e.g. `3:07 PM`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TaskbarClock;

impl TaskbarClock {
    /// Create a clock
    pub fn new() -> Self {
        Self
    }

    /// Label for the current local time
    pub fn now_label(&self) -> String {
        Self::label_at(Local::now().time())
    }

    /// Label for an arbitrary time of day
    pub fn label_at(time: NaiveTime) -> String {
        time.format("%-I:%M %p").to_string()
    }
}
