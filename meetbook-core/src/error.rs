//! Error types for meetbook.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while processing a command.
///
/// The `Display` text of each variant is the diagnostic shown to the user.
#[derive(Error, Debug)]
pub enum MeetbookError {
    #[error("{letter} should be followed by exactly {expected} {}.", arguments(.expected))]
    Arity { letter: char, expected: usize },

    #[error("Date-time parts must be numeric.")]
    InvalidFormat,

    #[error("{field} cannot be less than {min} or greater than {max}.")]
    OutOfRange { field: TimeField, min: i32, max: i32 },

    #[error("There is another meeting at this time.")]
    DuplicateSlot,

    #[error("The time slot {day:02}.{month:02} at {hour:02} is not in the calendar.")]
    NotFound { month: i32, day: i32, hour: i32 },

    #[error("Cannot open file {path} for {mode}.")]
    Open {
        path: PathBuf,
        mode: IoMode,
        #[source]
        source: std::io::Error,
    },

    #[error("Error occurred while {mode} {path}: {source}")]
    Io {
        path: PathBuf,
        mode: IoMode,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed line {line} in {path}: \"{content}\"")]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    #[error("Invalid command")]
    UnknownCommand,

    #[error("Command line is longer than {max} characters.")]
    InputTooLong { max: usize },

    #[error("Configuration error: {0}")]
    Config(String),
}

/// The time field a range check failed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeField {
    Month,
    Day,
    Hour,
}

impl fmt::Display for TimeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TimeField::Month => "Month",
            TimeField::Day => "Day",
            TimeField::Hour => "Hour",
        };
        f.write_str(label)
    }
}

/// Whether a file was being read or written when an I/O error occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoMode {
    Read,
    Write,
}

impl fmt::Display for IoMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IoMode::Read => f.write_str("reading"),
            IoMode::Write => f.write_str("writing"),
        }
    }
}

fn arguments(count: &usize) -> &'static str {
    if *count == 1 { "argument" } else { "arguments" }
}

/// Result type alias for meetbook operations.
pub type MeetbookResult<T> = Result<T, MeetbookError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_message_pluralizes() {
        let err = MeetbookError::Arity { letter: 'A', expected: 4 };
        assert_eq!(err.to_string(), "A should be followed by exactly 4 arguments.");

        let err = MeetbookError::Arity { letter: 'W', expected: 1 };
        assert_eq!(err.to_string(), "W should be followed by exactly 1 argument.");

        let err = MeetbookError::Arity { letter: 'L', expected: 0 };
        assert_eq!(err.to_string(), "L should be followed by exactly 0 arguments.");
    }

    #[test]
    fn not_found_reports_day_before_month() {
        let err = MeetbookError::NotFound { month: 3, day: 5, hour: 9 };
        assert_eq!(
            err.to_string(),
            "The time slot 05.03 at 09 is not in the calendar."
        );
    }

    #[test]
    fn out_of_range_names_the_field() {
        let err = MeetbookError::OutOfRange { field: TimeField::Hour, min: 0, max: 23 };
        assert_eq!(err.to_string(), "Hour cannot be less than 0 or greater than 23.");
    }
}
