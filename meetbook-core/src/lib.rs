//! Core of the meetbook meeting scheduler.
//!
//! - `store` keeps meetings ordered by slot and free of duplicate slots
//! - `validate` checks date-time arguments
//! - `schedule` reads and writes schedule files
//! - `command` parses command lines and runs them against a store

pub mod command;
pub mod error;
pub mod meetbook_config;
pub mod meeting;
pub mod schedule;
pub mod store;
pub mod validate;

pub use command::{Command, CommandKind, Dispatcher, Outcome};
pub use error::{MeetbookError, MeetbookResult};
pub use meeting::{Meeting, MeetingKey};
pub use store::MeetingStore;
