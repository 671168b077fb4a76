// seximal-cli/src/commands/date.rs
//
// Implementation of the `date` command: converts a Gregorian date to the
// seximal calendar (six sixty-day twomoons plus festival days).

use chrono::Local;
use serde_json::json;

use seximal_core::CoreResult;
use seximal_core::calendar::{SeximalDate, is_leap_year};

use crate::cli::DateArgs;
use crate::output;

pub fn run(args: &DateArgs) -> CoreResult<()> {
    let gregorian = args.date.unwrap_or_else(|| Local::now().date_naive());
    let date = SeximalDate::from_gregorian(gregorian)?;

    if args.json {
        println!(
            "{}",
            json!({
                "gregorian": gregorian.to_string(),
                "seximal": date,
                "display": date.to_string(),
                "leap_year": is_leap_year(date.year),
            })
        );
        return Ok(());
    }

    output::print_info("Gregorian", gregorian);
    output::print_info("Seximal", &date);
    if date.is_intercalary() {
        output::print_info("Intercalary", "yes");
    }
    if is_leap_year(date.year) {
        output::print_info("Leap year", "yes");
    }

    Ok(())
}
