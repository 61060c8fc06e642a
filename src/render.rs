//! Terminal rendering for command results.
//!
//! Extension trait that adds optional colors to meetbook-core types using
//! owo_colors.

use meetbook_core::{MeetbookError, Outcome};
use owo_colors::OwoColorize;

const SUCCESS: &str = "SUCCESS";

pub trait Render {
    fn render(&self, color: bool) -> String;
}

impl Render for Outcome {
    /// Listed meetings (if any) followed by the success marker.
    fn render(&self, color: bool) -> String {
        let mut lines = match self {
            Outcome::Listed(lines) => lines.clone(),
            Outcome::Success | Outcome::Terminate => Vec::new(),
        };

        if color {
            lines.push(SUCCESS.green().to_string());
        } else {
            lines.push(SUCCESS.to_string());
        }

        lines.join("\n")
    }
}

impl Render for MeetbookError {
    fn render(&self, color: bool) -> String {
        if color {
            self.to_string().red().to_string()
        } else {
            self.to_string()
        }
    }
}
