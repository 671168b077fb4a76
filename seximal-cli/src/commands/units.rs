// seximal-cli/src/commands/units.rs
//
// Implementation of the `units` command: converts a quantity between two
// units of a dimension, with significant-figure formatting of the result.

use log::debug;
use serde_json::json;

use seximal_core::units::{self, Dimension, convert, format_quantity};
use seximal_core::{CoreConfig, CoreResult};

use crate::cli::UnitsArgs;
use crate::output;

pub fn run(args: &UnitsArgs) -> CoreResult<()> {
    let config = CoreConfig::builder().sig_figs(args.sig_figs).build();
    config.validate()?;

    let dimension: Dimension = args.dimension.into();
    let from = units::find_unit(dimension, &args.from)?;
    let to = units::find_unit(dimension, &args.to)?;

    let converted = convert(args.value, from, to, dimension);
    let formatted = format_quantity(converted, config.sig_figs);
    debug!("{} {} -> {converted} {}", args.value, from.key, to.key);

    if args.json {
        println!(
            "{}",
            json!({
                "dimension": dimension,
                "value": args.value,
                "from": from.key,
                "to": to.key,
                "result": converted,
                "formatted": formatted,
            })
        );
    } else {
        output::print_info(
            "Conversion",
            format!("{} {} = {} {}", args.value, from.symbol, formatted, to.symbol),
        );
    }

    Ok(())
}
