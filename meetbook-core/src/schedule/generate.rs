//! Schedule file generation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{IoMode, MeetbookError, MeetbookResult};
use crate::meeting::Meeting;

/// Write meetings to `path`, replacing any existing file.
///
/// Lines are written one at a time. If a write fails partway, the lines
/// already written stay in the file.
pub fn write_schedule<'a>(
    path: &Path,
    meetings: impl IntoIterator<Item = &'a Meeting>,
) -> MeetbookResult<usize> {
    let file = File::create(path).map_err(|source| MeetbookError::Open {
        path: path.to_path_buf(),
        mode: IoMode::Write,
        source,
    })?;

    let io_error = |source: std::io::Error| MeetbookError::Io {
        path: path.to_path_buf(),
        mode: IoMode::Write,
        source,
    };

    let mut writer = BufWriter::new(file);
    let mut written = 0;

    for meeting in meetings {
        writeln!(writer, "{}", meeting).map_err(io_error)?;
        written += 1;
    }

    writer.flush().map_err(io_error)?;

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::meeting::MeetingKey;

    #[test]
    fn write_one_line_per_meeting() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.txt");
        let meetings = vec![
            Meeting::new("Standup", MeetingKey::new(3, 5, 9)),
            Meeting::new("Retro", MeetingKey::new(11, 28, 16)),
        ];

        assert_eq!(write_schedule(&path, &meetings).unwrap(), 2);
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Standup 05.03 at 09\nRetro 28.11 at 16\n"
        );
    }

    #[test]
    fn write_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schedule.txt");
        std::fs::write(&path, "Old 01.01 at 01\nOlder 02.02 at 02\n").unwrap();

        let meetings = vec![Meeting::new("New", MeetingKey::new(4, 7, 13))];
        let written = write_schedule(&path, &meetings).unwrap();

        assert_eq!(written, 1);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "New 07.04 at 13\n");
    }

    #[test]
    fn write_to_missing_directory_fails_to_open() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("schedule.txt");

        let result = write_schedule(&path, &Vec::<Meeting>::new());
        assert!(matches!(
            result,
            Err(MeetbookError::Open { mode: IoMode::Write, .. })
        ));
    }
}
