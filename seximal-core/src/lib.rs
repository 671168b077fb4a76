//! Core library for seximal (base-6) conversion tasks.
//!
//! This crate converts decimal values, durations, times of day, physical
//! quantities, and calendar dates into their seximal representations.
//!
//! ## Usage Example
//!
//! ```rust
//! use seximal_core::{Convention, SeximalTime, to_seximal};
//!
//! assert_eq!(to_seximal(100.0), "244");
//!
//! let time = SeximalTime::from_standard_seconds(3600.0, Convention::MinuteBased);
//! assert_eq!(time.to_string(), "01:00:00.0");
//!
//! let time = SeximalTime::from_standard_seconds(3600.0, Convention::SecondBased);
//! assert_eq!(time.to_string(), "10:00:00.0");
//! ```

pub mod calendar;
pub mod config;
pub mod error;
pub mod numeral;
pub mod time;
pub mod units;

// Re-exports for public API
pub use calendar::SeximalDate;
pub use config::CoreConfig;
pub use error::{CoreError, CoreResult};
pub use numeral::{from_seximal, is_valid_seximal, to_seximal};
pub use time::{Convention, SeximalTime, TimeSystem, compose_standard_seconds};
pub use units::{Dimension, System, Unit, convert, find_unit, format_quantity};
