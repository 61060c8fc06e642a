//! Schedule file reading and writing.
//!
//! A schedule file holds one meeting per line in the form
//! `<description> <DD>.<MM> at <HH>`, e.g. `Standup 05.03 at 09`.

mod generate;
mod parse;

pub use generate::write_schedule;
pub use parse::{parse_line, parse_schedule, read_schedule};
