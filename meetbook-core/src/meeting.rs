//! Meeting types.

use std::fmt;

/// The slot a meeting occupies.
///
/// Ordering is lexicographic by month, then day, then hour, which is the
/// order meetings are kept in by [`MeetingStore`](crate::store::MeetingStore).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeetingKey {
    pub month: i32,
    pub day: i32,
    pub hour: i32,
}

impl MeetingKey {
    pub fn new(month: i32, day: i32, hour: i32) -> Self {
        MeetingKey { month, day, hour }
    }
}

impl fmt::Display for MeetingKey {
    /// Renders as `DD.MM at HH`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}.{:02} at {:02}", self.day, self.month, self.hour)
    }
}

/// A scheduled meeting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    /// Single whitespace-free token
    pub description: String,
    pub key: MeetingKey,
}

impl Meeting {
    pub fn new(description: impl Into<String>, key: MeetingKey) -> Self {
        Meeting {
            description: description.into(),
            key,
        }
    }

    pub fn month(&self) -> i32 {
        self.key.month
    }

    pub fn day(&self) -> i32 {
        self.key.day
    }

    pub fn hour(&self) -> i32 {
        self.key.hour
    }
}

impl fmt::Display for Meeting {
    /// Renders as `description DD.MM at HH`, the line format used by both
    /// the list command and schedule files.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.description, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_pads_day_month_hour() {
        let meeting = Meeting::new("Standup", MeetingKey::new(3, 5, 9));
        assert_eq!(meeting.to_string(), "Standup 05.03 at 09");
    }

    #[test]
    fn display_keeps_two_digit_fields() {
        let meeting = Meeting::new("Review", MeetingKey::new(12, 31, 23));
        assert_eq!(meeting.to_string(), "Review 31.12 at 23");
    }

    #[test]
    fn keys_order_by_month_then_day_then_hour() {
        let a = MeetingKey::new(1, 31, 23);
        let b = MeetingKey::new(2, 1, 0);
        let c = MeetingKey::new(2, 1, 5);
        let d = MeetingKey::new(2, 2, 0);

        assert!(a < b);
        assert!(b < c);
        assert!(c < d);
    }
}
