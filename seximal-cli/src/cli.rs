// seximal-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use seximal_core::time::{Convention, TimeSystem};
use seximal_core::units::Dimension;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Seximal: base-6 conversion toolkit",
    long_about = "Converts decimal numbers, durations, times of day, physical quantities, \
                  and calendar dates into seximal (base-6) representations."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Converts a decimal number to seximal (or back with --reverse)
    Convert(ConvertArgs),
    /// Decomposes a duration in standard seconds into seximal time
    Timer(TimerArgs),
    /// Shows the current local time on the seximal wall clock
    Clock(ClockArgs),
    /// Converts a Gregorian date to the seximal calendar
    Date(DateArgs),
    /// Converts a quantity between units, including the seximal system
    Units(UnitsArgs),
}

#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Decimal value to convert (or a seximal numeral with --reverse)
    #[arg(required = true, value_name = "VALUE", allow_hyphen_values = true)]
    pub value: String,

    /// Interpret VALUE as a seximal numeral and convert it to decimal
    #[arg(long)]
    pub reverse: bool,

    /// Seximal magnitude prefix to apply to the value (e.g. "duse", "undo")
    #[arg(long, value_name = "PREFIX")]
    pub prefix: Option<String>,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct TimerArgs {
    /// Duration in standard seconds
    #[arg(
        value_name = "SECONDS",
        required_unless_present = "compose",
        conflicts_with = "compose"
    )]
    pub seconds: Option<f64>,

    /// Scale policy relating standard seconds to seximal time units
    #[arg(long, value_enum, default_value_t = ConventionArg::SecondBased)]
    pub convention: ConventionArg,

    /// Compose clock fields into standard seconds instead of decomposing
    #[arg(long, value_names = ["HOURS", "MINUTES", "SECONDS"], num_args = 3)]
    pub compose: Option<Vec<u64>>,

    /// Time system the composed fields are expressed in
    #[arg(long, value_enum, default_value_t = TimeSystemArg::Standard)]
    pub system: TimeSystemArg,

    /// Emit the decomposed components as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ClockArgs {
    /// Hide the trailing sixths digit
    #[arg(long)]
    pub no_sixths: bool,

    /// Emit the clock reading as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct DateArgs {
    /// Gregorian date to convert (YYYY-MM-DD, defaults to today)
    #[arg(value_name = "DATE")]
    pub date: Option<NaiveDate>,

    /// Emit the seximal date as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct UnitsArgs {
    /// Quantity to convert
    #[arg(required = true, value_name = "VALUE", allow_hyphen_values = true)]
    pub value: f64,

    /// Source unit key (e.g. "min", "km", "tujo")
    #[arg(required = true, value_name = "FROM")]
    pub from: String,

    /// Target unit key
    #[arg(required = true, value_name = "TO")]
    pub to: String,

    /// Physical dimension the units belong to
    #[arg(short, long, value_enum)]
    pub dimension: DimensionArg,

    /// Significant figures for the formatted result
    #[arg(long, value_name = "N", default_value_t = seximal_core::config::DEFAULT_SIG_FIGS)]
    pub sig_figs: usize,

    /// Emit the conversion as JSON
    #[arg(long)]
    pub json: bool,
}

// --- Value Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ConventionArg {
    /// One seximal minute = 100 standard seconds
    MinuteBased,
    /// One seximal second = 25/9 standard seconds
    SecondBased,
}

impl From<ConventionArg> for Convention {
    fn from(arg: ConventionArg) -> Self {
        match arg {
            ConventionArg::MinuteBased => Convention::MinuteBased,
            ConventionArg::SecondBased => Convention::SecondBased,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TimeSystemArg {
    Standard,
    Seximal,
}

impl From<TimeSystemArg> for TimeSystem {
    fn from(arg: TimeSystemArg) -> Self {
        match arg {
            TimeSystemArg::Standard => TimeSystem::Standard,
            TimeSystemArg::Seximal => TimeSystem::Seximal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DimensionArg {
    Length,
    Mass,
    Area,
    Volume,
    Temperature,
    Pressure,
    Time,
    Speed,
    Acceleration,
    Force,
    Energy,
    Frequency,
    Power,
}

impl From<DimensionArg> for Dimension {
    fn from(arg: DimensionArg) -> Self {
        match arg {
            DimensionArg::Length => Dimension::Length,
            DimensionArg::Mass => Dimension::Mass,
            DimensionArg::Area => Dimension::Area,
            DimensionArg::Volume => Dimension::Volume,
            DimensionArg::Temperature => Dimension::Temperature,
            DimensionArg::Pressure => Dimension::Pressure,
            DimensionArg::Time => Dimension::Time,
            DimensionArg::Speed => Dimension::Speed,
            DimensionArg::Acceleration => Dimension::Acceleration,
            DimensionArg::Force => Dimension::Force,
            DimensionArg::Energy => Dimension::Energy,
            DimensionArg::Frequency => Dimension::Frequency,
            DimensionArg::Power => Dimension::Power,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_convert_basic_args() {
        let cli = Cli::parse_from(["seximal", "convert", "100"]);
        match cli.command {
            Commands::Convert(args) => {
                assert_eq!(args.value, "100");
                assert!(!args.reverse);
                assert!(args.prefix.is_none());
                assert!(!args.json);
            }
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_parse_convert_negative_value() {
        let cli = Cli::parse_from(["seximal", "convert", "-7.5"]);
        match cli.command {
            Commands::Convert(args) => assert_eq!(args.value, "-7.5"),
            _ => panic!("Expected Convert command"),
        }
    }

    #[test]
    fn test_parse_timer_with_convention() {
        let cli = Cli::parse_from(["seximal", "timer", "3600", "--convention", "minute-based"]);
        match cli.command {
            Commands::Timer(args) => {
                assert_eq!(args.seconds, Some(3600.0));
                assert_eq!(args.convention, ConventionArg::MinuteBased);
                assert!(args.compose.is_none());
            }
            _ => panic!("Expected Timer command"),
        }
    }

    #[test]
    fn test_parse_timer_compose() {
        let cli = Cli::parse_from([
            "seximal", "timer", "--compose", "1", "0", "0", "--system", "seximal",
        ]);
        match cli.command {
            Commands::Timer(args) => {
                assert_eq!(args.compose, Some(vec![1, 0, 0]));
                assert_eq!(args.system, TimeSystemArg::Seximal);
                assert!(args.seconds.is_none());
            }
            _ => panic!("Expected Timer command"),
        }
    }

    #[test]
    fn test_timer_requires_seconds_or_compose() {
        assert!(Cli::try_parse_from(["seximal", "timer"]).is_err());
    }

    #[test]
    fn test_parse_units() {
        let cli = Cli::parse_from([
            "seximal", "units", "1", "min", "s", "--dimension", "time",
        ]);
        match cli.command {
            Commands::Units(args) => {
                assert_eq!(args.value, 1.0);
                assert_eq!(args.from, "min");
                assert_eq!(args.to, "s");
                assert_eq!(args.dimension, DimensionArg::Time);
                assert_eq!(args.sig_figs, 6);
            }
            _ => panic!("Expected Units command"),
        }
    }
}
