// seximal-cli/src/commands/timer.rs
//
// Implementation of the `timer` command: decomposes a duration in standard
// seconds into seximal hours:minutes:seconds.sixths, or composes clock
// fields back into standard seconds with --compose.

use serde_json::json;

use seximal_core::time::{SeximalTime, compose_standard_seconds};
use seximal_core::{CoreConfig, CoreError, CoreResult};

use crate::cli::TimerArgs;
use crate::output;

pub fn run(args: &TimerArgs) -> CoreResult<()> {
    let config = CoreConfig::builder().convention(args.convention.into()).build();
    config.validate()?;

    if let Some(fields) = &args.compose {
        let seconds = compose_standard_seconds(fields[0], fields[1], fields[2], args.system.into());
        if args.json {
            println!("{}", json!({ "standard_seconds": seconds }));
        } else {
            output::print_info("Standard seconds", seconds);
        }
        return Ok(());
    }

    let seconds = args
        .seconds
        .ok_or_else(|| CoreError::InvalidInput("either SECONDS or --compose is required".into()))?;

    let time = SeximalTime::from_standard_seconds(seconds, config.convention);
    if args.json {
        println!(
            "{}",
            json!({
                "convention": config.convention.to_string(),
                "time": time,
                "display": time.to_string(),
            })
        );
    } else {
        output::print_info("Convention", config.convention);
        output::print_info("Seximal time", &time);
    }

    Ok(())
}
