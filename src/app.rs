//! Token dispatch and the interactive loop
//!
//! Thin glue between the command line and the [`HoursMinutes`] core: resolve
//! the reference time, parse the duration, add, print. The interactive loop
//! keeps the last printed result so a `+`-prefixed duration can chain off it.

use std::io::{BufRead, Write};

use anyhow::{bail, Result};
use tracing::debug;

use crate::clock::Clock;
use crate::hours_minutes::HoursMinutes;

/// Usage text for positional help tokens and CLI usage errors.
pub const USAGE: &str = "\
Usage: timecal [<HH>:<MM>] [[<HH>:]MM]
Calculates the time after a specified duration, with an optional
reference time. The default reference time is now, and durations
that cross a day boundary wrap around midnight.
With no parameters, timecal enters interactive mode: each line is
interpreted as one or two parameters, and a duration starting with
'+' is added to the previous result. Quit with 'q' or 'quit'.

  [<HH>:<MM>]   Reference time in 24-hour format instead of the current time.
  [<HH>:]MM     Duration to add to the reference time. The optional HH is the
                number of hours, with a literal ':' as separator; MM is the
                number of minutes.

Examples:
  timecal 09:34 1:48   # prints 11:22
  timecal 23:12 2:54   # prints 02:06
";

/// Tokens that ask for the usage text, on the command line or in the loop.
pub fn is_help_token(token: &str) -> bool {
    matches!(token, "-h" | "--help" | "-?" | "help" | "?")
}

/// Add a duration token to a reference time, defaulting to the clock's now.
pub fn run_once(
    clock: &dyn Clock,
    reference: Option<&str>,
    duration: &str,
) -> Result<HoursMinutes> {
    let reference = match reference {
        Some(token) => token.parse()?,
        None => clock.now()?,
    };
    let duration: HoursMinutes = duration.parse()?;
    debug!("adding {duration} to {reference}");
    Ok(reference + duration)
}

/// Evaluate one interactive line against the previous result.
///
/// The line splits at the first space into an optional reference token and a
/// duration token. A `+`-prefixed duration takes `last` as its reference; it
/// cannot be combined with an explicit reference token since both would name
/// one.
pub fn evaluate_line(clock: &dyn Clock, last: HoursMinutes, line: &str) -> Result<HoursMinutes> {
    let (reference, duration) = match line.split_once(' ') {
        Some((reference, duration)) => (Some(reference.trim()), duration.trim()),
        None => (None, line),
    };

    if let Some(stripped) = duration.strip_prefix('+') {
        if reference.is_some() {
            bail!("a '+' duration already uses the previous result as reference; drop the reference time");
        }
        let duration: HoursMinutes = stripped.parse()?;
        debug!("adding {duration} to previous result {last}");
        return Ok(last + duration);
    }

    run_once(clock, reference, duration)
}

/// Read-eval-print loop over `input`, printing results to `output`.
///
/// Exits on `q`, `quit` or end-of-input. Errors are printed to stderr and
/// the loop continues; each successful result becomes the reference for the
/// next `+`-prefixed duration. The previous result starts out as the current
/// time, so a leading `+30` on the first line adds to now.
pub fn run_interactive(
    clock: &dyn Clock,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<()> {
    let mut last = clock.now()?;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() {
            continue;
        }
        if matches!(line, "q" | "quit") {
            break;
        }
        if is_help_token(line) {
            eprint!("{USAGE}");
            continue;
        }

        match evaluate_line(clock, last, line) {
            Ok(result) => {
                writeln!(output, "{result}")?;
                last = result;
            }
            Err(e) => eprintln!("Error: {e}"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn hm(hours: u8, minutes: u8) -> HoursMinutes {
        HoursMinutes::new(hours, minutes).unwrap()
    }

    fn noon() -> FixedClock {
        FixedClock(hm(12, 0))
    }

    #[test]
    fn run_once_with_explicit_reference() {
        let result = run_once(&noon(), Some("09:34"), "1:48").unwrap();
        assert_eq!(result, hm(11, 22));

        let result = run_once(&noon(), Some("23:12"), "2:54").unwrap();
        assert_eq!(result, hm(2, 6));
    }

    #[test]
    fn run_once_defaults_reference_to_now() {
        assert_eq!(run_once(&noon(), None, "45").unwrap(), hm(12, 45));
        assert_eq!(run_once(&noon(), None, "13:30").unwrap(), hm(1, 30));
    }

    #[test]
    fn run_once_rejects_bad_tokens() {
        assert!(run_once(&noon(), Some("25:00"), "10").is_err());
        assert!(run_once(&noon(), None, "abc").is_err());
    }

    #[test]
    fn line_with_one_token_is_a_duration() {
        let result = evaluate_line(&noon(), hm(0, 0), "30").unwrap();
        assert_eq!(result, hm(12, 30));
    }

    #[test]
    fn line_with_two_tokens_is_reference_and_duration() {
        let result = evaluate_line(&noon(), hm(0, 0), "9:34 1:48").unwrap();
        assert_eq!(result, hm(11, 22));
    }

    #[test]
    fn plus_duration_chains_off_the_previous_result() {
        let result = evaluate_line(&noon(), hm(11, 22), "+38").unwrap();
        assert_eq!(result, hm(12, 0));

        let result = evaluate_line(&noon(), hm(23, 30), "+1:45").unwrap();
        assert_eq!(result, hm(1, 15));
    }

    #[test]
    fn plus_duration_rejects_an_explicit_reference() {
        assert!(evaluate_line(&noon(), hm(0, 0), "9:00 +30").is_err());
    }

    #[test]
    fn interactive_loop_prints_and_chains_results() {
        let input = b"9:34 1:48\n+38\nq\nignored\n" as &[u8];
        let mut output = Vec::new();

        run_interactive(&noon(), input, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "11:22\n12:00\n");
    }

    #[test]
    fn interactive_loop_survives_bad_lines() {
        let input = b"garbage\n28:92 5\n\n15\nquit\n" as &[u8];
        let mut output = Vec::new();

        run_interactive(&noon(), input, &mut output).unwrap();

        // Only the one good line produces output; errors go to stderr.
        assert_eq!(String::from_utf8(output).unwrap(), "12:15\n");
    }

    #[test]
    fn interactive_loop_exits_on_end_of_input() {
        let mut output = Vec::new();
        run_interactive(&noon(), b"5\n" as &[u8], &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), "12:05\n");
    }
}
