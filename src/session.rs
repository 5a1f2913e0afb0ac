//! Interactive form session over a line-oriented stream.
//!
//! Each line is one UI event. The form is re-evaluated and re-rendered
//! after every event that changes it.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::clock::Clock;
use crate::error::Result;
use crate::form::FormState;
use crate::render::render_text;
use crate::validate::Field;

const HELP: &str = "\
commands:
  day <DD>      set the day (no value clears it)
  month <MM>    set the month
  year <YYYY>   set the year
  submit        show errors and the result
  clear         start over
  show          print the form again
  help          this text
  quit          leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Submit,
    Clear,
    Show,
    Help,
    Quit,
}

/// Parse one input line. `None` for blank or unrecognised lines.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    if let Some(field) = Field::parse(head) {
        return Some(Command::Set(field, rest.to_string()));
    }

    match head.to_ascii_lowercase().as_str() {
        "submit" | "s" => Some(Command::Submit),
        "clear" | "reset" => Some(Command::Clear),
        "show" => Some(Command::Show),
        "help" | "?" => Some(Command::Help),
        "quit" | "exit" | "q" => Some(Command::Quit),
        _ => None,
    }
}

/// Run the form from `form` until `quit` or end of input. Returns the final
/// state.
pub async fn run<R, W>(
    reader: R,
    mut writer: W,
    clock: &dyn Clock,
    mut form: FormState,
) -> Result<FormState>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(mode = ?form.mode(), "session started");

    writer.write_all(HELP.as_bytes()).await?;
    writer.write_all(render_text(&form).as_bytes()).await?;
    writer.flush().await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let Some(command) = parse_command(&line) else {
            if !line.trim().is_empty() {
                debug!(line = %line.trim(), "unrecognised command");
                writer
                    .write_all(b"unknown command, type `help`\n")
                    .await?;
                writer.flush().await?;
            }
            continue;
        };
        debug!(?command, "event");

        let today = clock.today();
        form = match command {
            Command::Quit => break,
            Command::Help => {
                writer.write_all(HELP.as_bytes()).await?;
                writer.flush().await?;
                continue;
            }
            Command::Show => form,
            Command::Set(field, value) => form.set_field(field, value, today),
            Command::Submit => form.submit(today),
            Command::Clear => form.clear(today),
        };

        writer.write_all(render_text(&form).as_bytes()).await?;
        writer.flush().await?;
    }

    info!(submitted = form.submitted, "session ended");
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::{AgeBreakdown, BreakdownMode};
    use crate::clock::FixedClock;
    use crate::evaluate::RawInput;
    use chrono::NaiveDate;
    use tokio::io::BufReader;

    fn clock() -> FixedClock {
        FixedClock(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("day 14"),
            Some(Command::Set(Field::Day, "14".to_string()))
        );
        assert_eq!(
            parse_command("  YEAR   1992 "),
            Some(Command::Set(Field::Year, "1992".to_string()))
        );
        assert_eq!(
            parse_command("month"),
            Some(Command::Set(Field::Month, String::new()))
        );
        assert_eq!(parse_command("submit"), Some(Command::Submit));
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(parse_command("dance"), None);
        assert_eq!(parse_command(""), None);
    }

    #[tokio::test]
    async fn test_session_computes_and_submits() {
        let input = b"day 1\nmonth 1\nyear 2000\nsubmit\nquit\nday 5\n";
        let mut out = Vec::new();
        let form = run(
            BufReader::new(&input[..]),
            &mut out,
            &clock(),
            FormState::new(clock().today(), BreakdownMode::Approximate),
        )
        .await
        .unwrap();

        assert!(form.submitted);
        assert_eq!(form.input.day, "1");
        assert_eq!(form.evaluation.age, AgeBreakdown::new(24, 0, 6));

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("24 years\n0 months\n6 days\n"));
    }

    #[tokio::test]
    async fn test_session_unknown_and_eof() {
        let input = b"bogus\n\nday 40\n";
        let mut out = Vec::new();
        let form = run(
            BufReader::new(&input[..]),
            &mut out,
            &clock(),
            FormState::new(clock().today(), BreakdownMode::Approximate),
        )
        .await
        .unwrap();

        assert!(!form.submitted);
        assert_eq!(form.visible_error(Field::Day), None);
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("unknown command"));
    }

    #[tokio::test]
    async fn test_session_starts_from_seeded_form() {
        let seeded = FormState::from_input(
            RawInput::new("29", "2", "2021"),
            false,
            clock().today(),
            BreakdownMode::Calendar,
        );
        let mut out = Vec::new();
        let form = run(BufReader::new(&b"year 2020\ns\n"[..]), &mut out, &clock(), seeded)
            .await
            .unwrap();

        assert_eq!(form.mode(), BreakdownMode::Calendar);
        assert_eq!(form.visible_error(Field::Day), None);
        assert_eq!(form.evaluation.age, AgeBreakdown::new(3, 10, 3));
    }
}
