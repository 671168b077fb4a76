// seximal-cli/src/commands/clock.rs
//
// Implementation of the `clock` command: shows the current local time both
// as a standard 12-hour reading and on the seximal wall clock, where hours
// tick every 3600 standard seconds, minutes every 100, and seconds every
// 25/9.

use chrono::{Local, Timelike};
use serde_json::json;

use seximal_core::time::SeximalTime;
use seximal_core::{CoreConfig, CoreResult};

use crate::cli::ClockArgs;
use crate::output;

pub fn run(args: &ClockArgs) -> CoreResult<()> {
    let config = CoreConfig::builder().show_sixths(!args.no_sixths).build();
    config.validate()?;

    let now = Local::now();
    let seconds_since_midnight =
        f64::from(now.num_seconds_from_midnight()) + f64::from(now.nanosecond()) / 1e9;

    let seximal = SeximalTime::from_seconds_since_midnight(seconds_since_midnight);

    let (is_pm, hour12) = now.hour12();
    let meridiem = if is_pm { "PM" } else { "AM" };
    let standard = format!(
        "{:02}:{:02}:{:02} {}",
        hour12,
        now.minute(),
        now.second(),
        meridiem
    );

    if args.json {
        println!(
            "{}",
            json!({
                "standard": standard,
                "seximal": seximal.clock_display(config.show_sixths),
            })
        );
    } else {
        output::print_heading("Current Time");
        output::print_info("Standard", &standard);
        output::print_info("Seximal", seximal.clock_display(config.show_sixths));
    }

    Ok(())
}
