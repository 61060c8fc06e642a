//! Command parsing and dispatch.
//!
//! A command line is a single letter followed by whitespace-separated
//! arguments, e.g. `A Standup 3 5 9`. The letter is matched
//! case-insensitively; arguments are taken literally.

use std::path::{Path, PathBuf};

use crate::error::{MeetbookError, MeetbookResult};
use crate::meeting::Meeting;
use crate::schedule::{read_schedule, write_schedule};
use crate::store::MeetingStore;
use crate::validate::validate_time_fields;

/// The action selected by a command letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Add,
    Delete,
    List,
    Write,
    Load,
    Quit,
}

impl CommandKind {
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(CommandKind::Add),
            'D' => Some(CommandKind::Delete),
            'L' => Some(CommandKind::List),
            'W' => Some(CommandKind::Write),
            'O' => Some(CommandKind::Load),
            'Q' => Some(CommandKind::Quit),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            CommandKind::Add => 'A',
            CommandKind::Delete => 'D',
            CommandKind::List => 'L',
            CommandKind::Write => 'W',
            CommandKind::Load => 'O',
            CommandKind::Quit => 'Q',
        }
    }

    /// Number of arguments the command takes.
    pub fn arity(&self) -> usize {
        match self {
            CommandKind::Add => 4,
            CommandKind::Delete => 3,
            CommandKind::Write | CommandKind::Load => 1,
            CommandKind::List | CommandKind::Quit => 0,
        }
    }
}

/// A parsed command with the right number of arguments.
///
/// Time arguments are kept as text; they are validated when the command runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add {
        description: String,
        month: String,
        day: String,
        hour: String,
    },
    Delete {
        month: String,
        day: String,
        hour: String,
    },
    List,
    Write(PathBuf),
    Load(PathBuf),
    Quit,
}

impl Command {
    /// Parse a command line.
    ///
    /// The first character selects the command; arguments start after the
    /// second character (the separator), so `L` and `L ` both have none.
    pub fn parse(input: &str) -> MeetbookResult<Self> {
        let letter = input.chars().next().ok_or(MeetbookError::UnknownCommand)?;
        let kind = CommandKind::from_letter(letter).ok_or(MeetbookError::UnknownCommand)?;

        let args = input
            .char_indices()
            .nth(2)
            .map(|(i, _)| &input[i..])
            .unwrap_or("");
        let tokens: Vec<&str> = args.split_whitespace().collect();

        let command = match (kind, tokens.as_slice()) {
            (CommandKind::Add, [description, month, day, hour]) => Command::Add {
                description: description.to_string(),
                month: month.to_string(),
                day: day.to_string(),
                hour: hour.to_string(),
            },
            (CommandKind::Delete, [month, day, hour]) => Command::Delete {
                month: month.to_string(),
                day: day.to_string(),
                hour: hour.to_string(),
            },
            (CommandKind::Write, [file]) => Command::Write(PathBuf::from(file)),
            (CommandKind::Load, [file]) => Command::Load(PathBuf::from(file)),
            (CommandKind::List, []) => Command::List,
            (CommandKind::Quit, []) => Command::Quit,
            _ => {
                return Err(MeetbookError::Arity {
                    letter: kind.letter(),
                    expected: kind.arity(),
                });
            }
        };

        Ok(command)
    }

    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add { .. } => CommandKind::Add,
            Command::Delete { .. } => CommandKind::Delete,
            Command::List => CommandKind::List,
            Command::Write(_) => CommandKind::Write,
            Command::Load(_) => CommandKind::Load,
            Command::Quit => CommandKind::Quit,
        }
    }
}

/// Result of a command that did not fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The list command succeeded; one rendered line per meeting.
    Listed(Vec<String>),
    /// Stop reading commands.
    Terminate,
}

/// Runs commands against a meeting store it owns.
#[derive(Debug, Default)]
pub struct Dispatcher {
    store: MeetingStore,
    max_line_length: Option<usize>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_store(store: MeetingStore) -> Self {
        Dispatcher {
            store,
            max_line_length: None,
        }
    }

    /// Reject command lines longer than `max` characters.
    pub fn with_max_line_length(mut self, max: usize) -> Self {
        self.max_line_length = Some(max);
        self
    }

    pub fn store(&self) -> &MeetingStore {
        &self.store
    }

    /// Parse and run one command line.
    ///
    /// On any error the store is left as it was, except that a failed write
    /// may leave a partially written file behind.
    pub fn dispatch(&mut self, input: &str) -> MeetbookResult<Outcome> {
        if let Some(max) = self.max_line_length
            && input.chars().count() > max
        {
            return Err(MeetbookError::InputTooLong { max });
        }

        let command = Command::parse(input)?;
        log::debug!("Dispatching {:?}", command.kind());

        self.run(command)
    }

    /// Run an already parsed command.
    pub fn run(&mut self, command: Command) -> MeetbookResult<Outcome> {
        match command {
            Command::Add {
                description,
                month,
                day,
                hour,
            } => self.add(description, &month, &day, &hour),
            Command::Delete { month, day, hour } => self.delete(&month, &day, &hour),
            Command::List => Ok(Outcome::Listed(self.list())),
            Command::Write(path) => self.write(&path),
            Command::Load(path) => self.load(&path),
            Command::Quit => Ok(Outcome::Terminate),
        }
    }

    fn add(&mut self, description: String, month: &str, day: &str, hour: &str) -> MeetbookResult<Outcome> {
        let key = validate_time_fields(month, day, hour)?;

        if self.store.find(&key).is_some() {
            return Err(MeetbookError::DuplicateSlot);
        }

        let pos = self.store.insert(Meeting::new(description, key))?;
        log::info!("Added meeting at {} (position {})", key, pos);

        Ok(Outcome::Success)
    }

    fn delete(&mut self, month: &str, day: &str, hour: &str) -> MeetbookResult<Outcome> {
        let key = validate_time_fields(month, day, hour)?;

        let removed = self.store.remove(&key)?;
        log::info!("Deleted meeting '{}' at {}", removed.description, key);

        Ok(Outcome::Success)
    }

    fn list(&self) -> Vec<String> {
        self.store.iter().map(|m| m.to_string()).collect()
    }

    fn write(&self, path: &Path) -> MeetbookResult<Outcome> {
        let written = write_schedule(path, &self.store).inspect_err(|e| log::warn!("{}", e))?;
        log::info!("Wrote {} meetings to {}", written, path.display());

        Ok(Outcome::Success)
    }

    fn load(&mut self, path: &Path) -> MeetbookResult<Outcome> {
        let meetings = read_schedule(path).inspect_err(|e| log::warn!("{}", e))?;
        log::info!("Loaded {} meetings from {}", meetings.len(), path.display());

        self.store.replace(meetings);

        Ok(Outcome::Success)
    }
}
