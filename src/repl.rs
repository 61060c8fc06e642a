//! The interactive command loop.

use std::io::{self, BufRead, Write};

use meetbook_core::{Dispatcher, Outcome};

use crate::render::Render;

#[derive(Debug, Clone, Copy, Default)]
pub struct ReplOptions {
    /// Color results written to `out`
    pub color: bool,
    /// Color diagnostics written to `err`
    pub error_color: bool,
    /// Suppress the success marker
    pub quiet: bool,
}

/// Feed input lines to the dispatcher until `Q` or end of input.
///
/// Results go to `out`; diagnostics for failed commands go to `err`. A failed
/// command never stops the loop. Lines are read as raw bytes, and invalid
/// UTF-8 is replaced with U+FFFD instead of ending the session.
pub fn run<R, O, E>(
    dispatcher: &mut Dispatcher,
    mut input: R,
    out: &mut O,
    err: &mut E,
    options: ReplOptions,
) -> io::Result<()>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(strip_line_ending(&buf));

        match dispatcher.dispatch(&line) {
            Ok(outcome) => {
                report(&outcome, out, options)?;
                if outcome == Outcome::Terminate {
                    return Ok(());
                }
            }
            Err(e) => {
                log::debug!("Command failed: {:?}", e);
                writeln!(err, "{}", e.render(options.error_color))?;
            }
        }
    }

    log::debug!("End of input");
    Ok(())
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn report<O: Write>(outcome: &Outcome, out: &mut O, options: ReplOptions) -> io::Result<()> {
    if options.quiet {
        if let Outcome::Listed(lines) = outcome {
            for line in lines {
                writeln!(out, "{}", line)?;
            }
        }
        return out.flush();
    }

    writeln!(out, "{}\n", outcome.render(options.color))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(script: &str, options: ReplOptions) -> (Dispatcher, String, String) {
        session_bytes(script.as_bytes(), options)
    }

    fn session_bytes(script: &[u8], options: ReplOptions) -> (Dispatcher, String, String) {
        let mut dispatcher = Dispatcher::new();
        let mut out = Vec::new();
        let mut err = Vec::new();

        run(&mut dispatcher, script, &mut out, &mut err, options).unwrap();

        (
            dispatcher,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn prints_success_after_each_command() {
        let (_, out, err) = session("A Standup 3 5 9\nL\nQ\n", ReplOptions::default());

        assert_eq!(out, "SUCCESS\n\nStandup 05.03 at 09\nSUCCESS\n\nSUCCESS\n\n");
        assert_eq!(err, "");
    }

    #[test]
    fn failures_go_to_error_stream_only() {
        let (dispatcher, out, err) = session(
            "A Standup 3 5 9\nA Sync 3 5 9\nA Kickoff 13 1 9\n",
            ReplOptions::default(),
        );

        assert_eq!(out, "SUCCESS\n\n");
        assert_eq!(
            err,
            "There is another meeting at this time.\n\
             Month cannot be less than 1 or greater than 12.\n"
        );
        assert_eq!(dispatcher.store().len(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (dispatcher, _, _) = session("Q\nA Standup 3 5 9\n", ReplOptions::default());
        assert!(dispatcher.store().is_empty());
    }

    #[test]
    fn end_of_input_stops_without_quit() {
        let (dispatcher, out, _) = session("A Standup 3 5 9", ReplOptions::default());
        assert_eq!(out, "SUCCESS\n\n");
        assert_eq!(dispatcher.store().len(), 1);
    }

    #[test]
    fn crlf_line_endings_are_stripped() {
        let (_, out, _) = session("A Standup 3 5 9\r\nL\r\n", ReplOptions::default());
        assert!(out.contains("Standup 05.03 at 09\n"));
    }

    #[test]
    fn empty_line_is_invalid_command() {
        let (_, out, err) = session("\n", ReplOptions::default());
        assert_eq!(out, "");
        assert_eq!(err, "Invalid command\n");
    }

    #[test]
    fn quiet_prints_listing_only() {
        let options = ReplOptions {
            quiet: true,
            ..Default::default()
        };
        let (_, out, _) = session("A Standup 3 5 9\nL\nQ\n", options);

        assert_eq!(out, "Standup 05.03 at 09\n");
    }

    #[test]
    fn invalid_utf8_line_does_not_end_session() {
        let (dispatcher, out, err) = session_bytes(
            b"A Standup 3 5 9\nA Caf\xe9 3 5 10\nA Sync 3 5 11\nL\nQ\n",
            ReplOptions::default(),
        );

        assert_eq!(dispatcher.store().len(), 3);
        assert_eq!(err, "");
        assert_eq!(
            out,
            "SUCCESS\n\nSUCCESS\n\nSUCCESS\n\n\
             Standup 05.03 at 09\nCaf\u{FFFD} 05.03 at 10\nSync 05.03 at 11\nSUCCESS\n\n\
             SUCCESS\n\n"
        );
    }

    #[test]
    fn invalid_utf8_in_bad_command_is_reported_and_skipped() {
        let (dispatcher, _, err) = session_bytes(
            b"\xff\xfe\nA Standup 3 5 9\n",
            ReplOptions::default(),
        );

        assert_eq!(err, "Invalid command\n");
        assert_eq!(dispatcher.store().len(), 1);
    }

    #[test]
    fn error_color_applies_only_to_diagnostics() {
        let options = ReplOptions {
            error_color: true,
            ..Default::default()
        };
        let (_, out, err) = session("A Standup 3 5 9\nA Sync 3 5 9\n", options);

        assert_eq!(out, "SUCCESS\n\n");
        assert!(err.contains('\u{1b}'));
        assert!(err.contains("There is another meeting at this time."));
    }
}
