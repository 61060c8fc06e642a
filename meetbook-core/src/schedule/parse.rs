//! Schedule file parsing.

use std::path::Path;

use crate::error::{IoMode, MeetbookError, MeetbookResult};
use crate::meeting::{Meeting, MeetingKey};

/// Parse a single schedule line.
///
/// Returns `None` unless the line is exactly a description, a `DD.MM` date,
/// the word `at` and an hour, separated by whitespace.
pub fn parse_line(line: &str) -> Option<Meeting> {
    let mut fields = line.split_whitespace();

    let description = fields.next()?;
    let (day, month) = fields.next()?.split_once('.')?;
    if fields.next()? != "at" {
        return None;
    }
    let hour = fields.next()?;

    if fields.next().is_some() {
        return None;
    }

    let key = MeetingKey::new(month.parse().ok()?, day.parse().ok()?, hour.parse().ok()?);
    Some(Meeting::new(description, key))
}

/// Parse schedule file content into meetings, keeping file order.
///
/// `path` is only used for error reporting. The first malformed line fails
/// the whole parse.
pub fn parse_schedule(content: &str, path: &Path) -> MeetbookResult<Vec<Meeting>> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| {
            parse_line(line).ok_or_else(|| MeetbookError::Parse {
                path: path.to_path_buf(),
                line: i + 1,
                content: line.to_string(),
            })
        })
        .collect()
}

/// Read and parse a schedule file.
///
/// Descriptions are opaque bytes on disk; invalid UTF-8 is replaced with
/// U+FFFD rather than failing the load.
pub fn read_schedule(path: &Path) -> MeetbookResult<Vec<Meeting>> {
    let bytes = std::fs::read(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            MeetbookError::Open {
                path: path.to_path_buf(),
                mode: IoMode::Read,
                source,
            }
        }
        _ => MeetbookError::Io {
            path: path.to_path_buf(),
            mode: IoMode::Read,
            source,
        },
    })?;

    parse_schedule(&String::from_utf8_lossy(&bytes), path)
}
