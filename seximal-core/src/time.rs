//! Seximal time decomposition and display.
//!
//! A count of standard seconds is scaled into seximal time units, split
//! into hours/minutes/seconds in decimal arithmetic, then each component is
//! re-expressed as a base-6 digit string. One seximal second lasts 25/9
//! standard seconds; under the minute-based convention one seximal minute
//! lasts exactly 100 standard seconds.

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::Serialize;

use crate::error::CoreError;
use crate::numeral::to_seximal;

/// Standard seconds per seximal minute under the minute-based convention.
pub const SECONDS_PER_SEXIMAL_MINUTE: f64 = 100.0;

/// Seximal seconds per seximal minute.
pub const SEXIMAL_SECONDS_PER_MINUTE: u64 = 36;

/// Seximal seconds per seximal hour.
pub const SEXIMAL_SECONDS_PER_HOUR: u64 = 216;

/// Seximal minutes per seximal hour.
pub const SEXIMAL_MINUTES_PER_HOUR: u64 = 36;

/// Policy relating standard seconds to seximal time units.
///
/// The scale factor between standard and seximal time is a convention, not
/// a law of nature, and the two defensible choices produce different
/// outputs for the same input. Both are kept selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Convention {
    /// One seximal minute lasts exactly 100 standard seconds; hours carry
    /// 36 seximal minutes. 3600 standard seconds display as `01:00:00.0`.
    MinuteBased,
    /// One seximal second lasts exactly 25/9 standard seconds; hours carry
    /// 216 seximal seconds. 3600 standard seconds display as `10:00:00.0`.
    #[default]
    SecondBased,
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::MinuteBased => write!(f, "minute-based"),
            Convention::SecondBased => write!(f, "second-based"),
        }
    }
}

impl FromStr for Convention {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minute-based" | "minute" => Ok(Convention::MinuteBased),
            "second-based" | "second" => Ok(Convention::SecondBased),
            other => Err(CoreError::Config(format!("unknown convention: {other}"))),
        }
    }
}

/// Time system for clock-field composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSystem {
    Standard,
    Seximal,
}

/// A count of standard seconds decomposed into seximal display components.
///
/// Each field is a base-6 digit string. Minutes and seconds stay below 36
/// decimal before conversion (one or two seximal digits after padding);
/// hours is unbounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeximalTime {
    pub hours: String,
    pub minutes: String,
    pub seconds: String,
    pub sixths: String,
}

impl SeximalTime {
    /// Decomposes a count of standard seconds under the given convention.
    ///
    /// Negative and non-finite inputs are treated as an expired countdown
    /// and clamped to zero.
    #[must_use]
    pub fn from_standard_seconds(seconds: f64, convention: Convention) -> Self {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        debug!("decomposing {seconds}s under the {convention} convention");
        match convention {
            Convention::MinuteBased => Self::from_minute_based(seconds),
            Convention::SecondBased => Self::from_second_based(seconds),
        }
    }

    /// Minute-based decomposition: 1 seximal minute = 100 standard seconds,
    /// 36 seximal minutes per hour, 36 seximal seconds per minute.
    fn from_minute_based(seconds: f64) -> Self {
        let total_minutes = seconds / SECONDS_PER_SEXIMAL_MINUTE;
        let whole_minutes = total_minutes.floor();
        let fractional_minutes = total_minutes - whole_minutes;

        let whole_minutes = whole_minutes as u64;
        let hours = whole_minutes / SEXIMAL_MINUTES_PER_HOUR;
        let minutes = whole_minutes % SEXIMAL_MINUTES_PER_HOUR;

        let seconds_with_fraction = fractional_minutes * SEXIMAL_SECONDS_PER_MINUTE as f64;
        let whole_seconds = seconds_with_fraction.floor();
        let sixths = (((seconds_with_fraction - whole_seconds) * 6.0).floor() as u64) % 6;

        Self {
            hours: to_seximal(hours as f64),
            minutes: to_seximal(minutes as f64),
            seconds: to_seximal(whole_seconds),
            sixths: to_seximal(sixths as f64),
        }
    }

    /// Second-based decomposition: 1 seximal second = 25/9 standard
    /// seconds, 216 seximal seconds per hour, 36 per minute.
    fn from_second_based(seconds: f64) -> Self {
        // Multiply before dividing so exact inputs stay exact.
        let total_seconds = seconds * 9.0 / 25.0;
        let whole = total_seconds.floor();
        let fraction = total_seconds - whole;

        let whole = whole as u64;
        let hours = whole / SEXIMAL_SECONDS_PER_HOUR;
        let remaining = whole % SEXIMAL_SECONDS_PER_HOUR;
        let minutes = remaining / SEXIMAL_SECONDS_PER_MINUTE;
        let whole_seconds = remaining % SEXIMAL_SECONDS_PER_MINUTE;
        let sixths = ((fraction * 6.0).floor() as u64) % 6;

        Self {
            hours: to_seximal(hours as f64),
            minutes: to_seximal(minutes as f64),
            seconds: to_seximal(whole_seconds as f64),
            sixths: to_seximal(sixths as f64),
        }
    }

    /// Projects a time of day (seconds since local midnight) onto the
    /// seximal wall clock: hours advance every 3600 standard seconds,
    /// minutes every 100, seconds every 25/9, plus the sixths digit.
    #[must_use]
    pub fn from_seconds_since_midnight(total_seconds: f64) -> Self {
        let total_seconds = if total_seconds.is_finite() {
            total_seconds.max(0.0)
        } else {
            0.0
        };

        let hours = (total_seconds / 3600.0).floor();
        let remaining_after_hours = total_seconds % 3600.0;

        let minutes = (remaining_after_hours / SECONDS_PER_SEXIMAL_MINUTE).floor();
        let remaining_after_minutes = remaining_after_hours % SECONDS_PER_SEXIMAL_MINUTE;

        let seconds_with_fraction = remaining_after_minutes * 9.0 / 25.0;
        let seconds = seconds_with_fraction.floor();
        let sixths = (((seconds_with_fraction - seconds) * 6.0).floor() as u64) % 6;

        Self {
            hours: to_seximal(hours),
            minutes: to_seximal(minutes),
            seconds: to_seximal(seconds),
            sixths: to_seximal(sixths as f64),
        }
    }

    /// Formats the clock components, optionally without the sixths digit.
    #[must_use]
    pub fn clock_display(&self, show_sixths: bool) -> String {
        if show_sixths {
            self.to_string()
        } else {
            format!("{:0>2}:{:0>2}:{:0>2}", self.hours, self.minutes, self.seconds)
        }
    }
}

impl fmt::Display for SeximalTime {
    /// Zero-pads hours/minutes/seconds to width 2 (never truncating wider
    /// values) and appends the single sixths digit.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:0>2}:{:0>2}:{:0>2}.{}",
            self.hours, self.minutes, self.seconds, self.sixths
        )
    }
}

/// Converts clock-field values to a count of standard seconds.
///
/// Seximal fields are counts of seximal hours/minutes/seconds (216, 36 and
/// 1 seximal seconds respectively, at 25/9 standard seconds each).
#[must_use]
pub fn compose_standard_seconds(hours: u64, minutes: u64, seconds: u64, system: TimeSystem) -> f64 {
    match system {
        TimeSystem::Seximal => {
            let total = hours * SEXIMAL_SECONDS_PER_HOUR
                + minutes * SEXIMAL_SECONDS_PER_MINUTE
                + seconds;
            total as f64 * 25.0 / 9.0
        }
        TimeSystem::Standard => (hours * 3600 + minutes * 60 + seconds) as f64,
    }
}
