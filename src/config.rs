//! Command-line configuration.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::age::BreakdownMode;
use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::{AppError, Result};
use crate::evaluate::RawInput;
use crate::form::FormState;
use crate::svg::Theme;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Age calculator: how old is someone born on DD/MM/YYYY?
#[derive(Debug, Parser)]
#[command(name = "agecalc", version, about)]
pub struct Cli {
    /// Day of birth (DD)
    #[arg(long, allow_hyphen_values = true)]
    pub day: Option<String>,

    /// Month of birth (MM)
    #[arg(long, allow_hyphen_values = true)]
    pub month: Option<String>,

    /// Year of birth (YYYY)
    #[arg(long, allow_hyphen_values = true)]
    pub year: Option<String>,

    /// Measure age against this date instead of today (YYYY-MM-DD)
    #[arg(long, env = "AGECALC_TODAY")]
    pub today: Option<String>,

    /// How elapsed days are folded into years/months/days
    #[arg(long, value_enum, env = "AGECALC_MODE", default_value_t = BreakdownMode::Approximate)]
    pub mode: BreakdownMode,

    /// Output format for stdout
    #[arg(long, value_enum, env = "AGECALC_FORMAT", default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also write the result card as SVG to this path
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Colour theme of the SVG card
    #[arg(long, value_enum, env = "AGECALC_THEME", default_value_t = Theme::Dark)]
    pub theme: Theme,

    /// Run the interactive form even if field values were given
    #[arg(short, long)]
    pub interactive: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Field values given on the command line, if any were.
    pub fn one_shot_input(&self) -> Option<RawInput> {
        if self.day.is_none() && self.month.is_none() && self.year.is_none() {
            return None;
        }
        Some(RawInput::new(
            self.day.clone().unwrap_or_default(),
            self.month.clone().unwrap_or_default(),
            self.year.clone().unwrap_or_default(),
        ))
    }

    /// Starting form and whether it should be handed to the interactive
    /// session. Field flags alone act as an immediate submission; with
    /// `--interactive` they only seed the session.
    pub fn initial_form(&self, today: NaiveDate) -> (FormState, bool) {
        match self.one_shot_input() {
            Some(input) if !self.interactive => {
                (FormState::from_input(input, true, today, self.mode), false)
            }
            seed => (
                FormState::from_input(seed.unwrap_or_default(), false, today, self.mode),
                true,
            ),
        }
    }

    /// Clock to measure against: fixed if `--today` was given.
    pub fn clock(&self) -> Result<Box<dyn Clock>> {
        match &self.today {
            Some(value) => Ok(Box::new(FixedClock(parse_today(value)?))),
            None => Ok(Box::new(SystemClock)),
        }
    }
}

pub fn parse_today(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::invalid_today(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::age::AgeBreakdown;
    use crate::validate::{Field, FieldError};

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["agecalc"]).unwrap();
        assert_eq!(cli.mode, BreakdownMode::Approximate);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.theme, Theme::Dark);
        assert!(cli.one_shot_input().is_none());
    }

    #[test]
    fn test_one_shot_fills_missing_fields_with_empty() {
        let cli = Cli::try_parse_from(["agecalc", "--day", "14", "--year", "1992"]).unwrap();
        assert_eq!(cli.one_shot_input(), Some(RawInput::new("14", "", "1992")));
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "agecalc",
            "--mode",
            "calendar",
            "--format",
            "json",
            "--theme",
            "light",
            "--today",
            "2024-01-01",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.mode, BreakdownMode::Calendar);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.theme, Theme::Light);
        assert!(cli.verbose);
        assert_eq!(
            cli.clock().unwrap().today(),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
        );
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_initial_form_flags_submit_immediately() {
        let cli = Cli::try_parse_from(["agecalc", "--day", "29", "--month", "2", "--year", "2021"])
            .unwrap();
        let (form, interactive) = cli.initial_form(today());
        assert!(!interactive);
        assert!(form.submitted);
        assert_eq!(form.input, RawInput::new("29", "2", "2021"));
        assert_eq!(form.visible_error(Field::Day), Some(FieldError::InvalidDayValue));
    }

    #[test]
    fn test_initial_form_flags_seed_interactive_session() {
        let cli = Cli::try_parse_from(["agecalc", "-i", "--day", "1", "--month", "1", "--year", "2000"])
            .unwrap();
        let (form, interactive) = cli.initial_form(today());
        assert!(interactive);
        assert!(!form.submitted);
        assert_eq!(form.input, RawInput::new("1", "1", "2000"));
        assert_eq!(form.evaluation.age, AgeBreakdown::new(24, 0, 6));
    }

    #[test]
    fn test_initial_form_without_flags_is_empty_session() {
        let cli = Cli::try_parse_from(["agecalc", "--mode", "calendar"]).unwrap();
        let (form, interactive) = cli.initial_form(today());
        assert!(interactive);
        assert!(!form.submitted);
        assert_eq!(form.input, RawInput::default());
        assert_eq!(form.mode(), BreakdownMode::Calendar);
        assert_eq!(form.evaluation.age, AgeBreakdown::NOT_COMPUTED);
    }

    #[test]
    fn test_bad_today() {
        assert!(matches!(
            parse_today("01/01/2024"),
            Err(AppError::InvalidToday { .. })
        ));
    }
}
