// seximal-cli/src/commands/convert.rs
//
// Implementation of the `convert` command: decimal to seximal numeral
// conversion and back, with optional magnitude prefixes.

use log::debug;
use serde_json::json;

use seximal_core::{CoreError, CoreResult, from_seximal, numeral, to_seximal};

use crate::cli::ConvertArgs;
use crate::output;

pub fn run(args: &ConvertArgs) -> CoreResult<()> {
    let multiplier = match args.prefix.as_deref() {
        Some(prefix) => numeral::prefix_multiplier(prefix)
            .ok_or_else(|| CoreError::InvalidInput(format!("unknown seximal prefix: {prefix}")))?,
        None => 1.0,
    };

    if args.reverse {
        let decimal = from_seximal(&args.value)? * multiplier;
        debug!("parsed seximal {} as {decimal}", args.value);
        if args.json {
            println!(
                "{}",
                json!({ "seximal": args.value, "decimal": decimal })
            );
        } else {
            output::print_info("Decimal", decimal);
        }
    } else {
        let value: f64 = args
            .value
            .parse()
            .map_err(|_| CoreError::InvalidInput(format!("not a decimal number: {}", args.value)))?;
        let seximal = to_seximal(value * multiplier);
        if args.json {
            println!("{}", json!({ "decimal": value, "seximal": seximal }));
        } else {
            output::print_info("Seximal", &seximal);
        }
    }

    Ok(())
}
