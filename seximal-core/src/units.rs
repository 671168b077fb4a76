//! Unit definitions and conversion across SI, US customary, and seximal
//! systems.
//!
//! Every dimension converts through a base unit (meters, kilograms,
//! seconds, ...). Seximal units are generated from a base unit factor and
//! the power-of-six prefix ladder; temperature is the one dimension that
//! needs offset arithmetic instead of a plain factor.

use std::fmt;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// Physical dimensions covered by the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
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

impl Dimension {
    pub const ALL: [Dimension; 13] = [
        Dimension::Length,
        Dimension::Mass,
        Dimension::Area,
        Dimension::Volume,
        Dimension::Temperature,
        Dimension::Pressure,
        Dimension::Time,
        Dimension::Speed,
        Dimension::Acceleration,
        Dimension::Force,
        Dimension::Energy,
        Dimension::Frequency,
        Dimension::Power,
    ];

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Dimension::Length => "length",
            Dimension::Mass => "mass",
            Dimension::Area => "area",
            Dimension::Volume => "volume",
            Dimension::Temperature => "temperature",
            Dimension::Pressure => "pressure",
            Dimension::Time => "time",
            Dimension::Speed => "speed",
            Dimension::Acceleration => "acceleration",
            Dimension::Force => "force",
            Dimension::Energy => "energy",
            Dimension::Frequency => "frequency",
            Dimension::Power => "power",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit systems known to the converter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum System {
    Si,
    Us,
    Seximal,
}

impl System {
    pub const ALL: [System; 3] = [System::Si, System::Us, System::Seximal];
}

/// A named unit with its factor to the dimension's base unit.
#[derive(Debug, Clone, Serialize)]
pub struct Unit {
    pub key: String,
    pub name: String,
    pub symbol: String,
    pub to_base: f64,
}

fn unit(key: &str, name: &str, symbol: &str, to_base: f64) -> Unit {
    Unit {
        key: key.to_string(),
        name: name.to_string(),
        symbol: symbol.to_string(),
        to_base,
    }
}

/// Base conversion factors for the seximal unit system, in SI base-unit
/// terms (one tujo in seconds, one tumbo in meters, ...).
const SEXIMAL_BASE_UNITS: &[(Dimension, &str, f64)] = &[
    (Dimension::Time, "tujo", 0.077_16),
    (Dimension::Length, "tumbo", 0.058_352),
    (Dimension::Area, "surfao", 0.003_405),
    (Dimension::Volume, "voluo", 0.000_199_034_5),
    (Dimension::Speed, "pido", 0.756_68),
    (Dimension::Acceleration, "gravito", 9.806_64),
    (Dimension::Mass, "mazo", 0.199_034_5),
    (Dimension::Force, "forso", 1.951_86),
    (Dimension::Pressure, "premuo", 572.75),
    (Dimension::Energy, "nergo", 0.113_96),
    (Dimension::Frequency, "freko", 12.96),
    (Dimension::Power, "paŭo", 1.476_94),
];

/// Power-of-six prefix ladder for seximal units, largest first.
const SEXIMAL_UNIT_PREFIXES: &[(&str, i32)] = &[
    ("exa", 24),
    ("peta", 20),
    ("tera", 16),
    ("giga", 12),
    ("mega", 8),
    ("larga", 6),
    ("kila", 4),
    ("nifa", 2),
    ("unse", 1),
    ("", 0),
    ("nivi", -2),
    ("milli", -4),
    ("tini", -6),
    ("micro", -8),
    ("nano", -12),
    ("pico", -16),
];

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn seximal_units_for(base_name: &str, base_factor: f64) -> Vec<Unit> {
    SEXIMAL_UNIT_PREFIXES
        .iter()
        .map(|(prefix, power)| {
            let key = format!("{prefix}{base_name}");
            Unit {
                name: capitalize(&key),
                symbol: key.clone(),
                key,
                to_base: base_factor * 6f64.powi(*power),
            }
        })
        .collect()
}

fn si_units_for(dimension: Dimension) -> Vec<Unit> {
    match dimension {
        Dimension::Length => vec![
            unit("km", "Kilometers", "km", 1000.0),
            unit("m", "Meters", "m", 1.0),
            unit("cm", "Centimeters", "cm", 0.01),
            unit("mm", "Millimeters", "mm", 0.001),
            unit("μm", "Micrometers", "μm", 1e-6),
            unit("nm", "Nanometers", "nm", 1e-9),
        ],
        Dimension::Mass => vec![
            unit("t", "Metric Tons", "t", 1000.0),
            unit("kg", "Kilograms", "kg", 1.0),
            unit("g", "Grams", "g", 0.001),
            unit("mg", "Milligrams", "mg", 1e-6),
        ],
        Dimension::Area => vec![
            unit("km²", "Square Kilometers", "km²", 1_000_000.0),
            unit("ha", "Hectares", "ha", 10_000.0),
            unit("m²", "Square Meters", "m²", 1.0),
            unit("cm²", "Square Centimeters", "cm²", 0.0001),
            unit("mm²", "Square Millimeters", "mm²", 0.000_001),
        ],
        Dimension::Volume => vec![
            unit("m³", "Cubic Meters", "m³", 1.0),
            unit("L", "Liters", "L", 0.001),
            unit("mL", "Milliliters", "mL", 0.000_001),
            unit("cm³", "Cubic Centimeters", "cm³", 0.000_001),
        ],
        Dimension::Temperature => vec![
            unit("°C", "Celsius", "°C", 1.0),
            unit("K", "Kelvin", "K", 1.0),
        ],
        Dimension::Pressure => vec![
            unit("MPa", "Megapascals", "MPa", 1e6),
            unit("kPa", "Kilopascals", "kPa", 1000.0),
            unit("Pa", "Pascals", "Pa", 1.0),
            unit("bar", "Bars", "bar", 100_000.0),
            unit("atm", "Atmospheres", "atm", 101_325.0),
            unit("Torr", "Torr", "Torr", 133.322),
        ],
        Dimension::Time => vec![
            unit("yr", "Years", "yr", 31_557_600.0),
            unit("d", "Days", "d", 86_400.0),
            unit("h", "Hours", "h", 3600.0),
            unit("min", "Minutes", "min", 60.0),
            unit("s", "Seconds", "s", 1.0),
            unit("ms", "Milliseconds", "ms", 0.001),
        ],
        Dimension::Speed => vec![
            unit("km/s", "Kilometers per Second", "km/s", 1000.0),
            unit("m/s", "Meters per Second", "m/s", 1.0),
            unit("km/h", "Kilometers per Hour", "km/h", 0.277_777_777_777_777_8),
        ],
        Dimension::Acceleration => vec![
            unit("m/s²", "Meters per Second²", "m/s²", 1.0),
            unit("g", "Standard Gravity", "g", 9.806_65),
        ],
        Dimension::Force => vec![
            unit("kN", "Kilonewtons", "kN", 1000.0),
            unit("N", "Newtons", "N", 1.0),
            unit("mN", "Millinewtons", "mN", 0.001),
            unit("dyn", "Dynes", "dyn", 1e-5),
        ],
        Dimension::Energy => vec![
            unit("MJ", "Megajoules", "MJ", 1e6),
            unit("kJ", "Kilojoules", "kJ", 1000.0),
            unit("J", "Joules", "J", 1.0),
            unit("kWh", "Kilowatt-hours", "kWh", 3.6e6),
            unit("Wh", "Watt-hours", "Wh", 3600.0),
            unit("eV", "Electron Volts", "eV", 1.602_176_634e-19),
        ],
        Dimension::Frequency => vec![
            unit("GHz", "Gigahertz", "GHz", 1e9),
            unit("MHz", "Megahertz", "MHz", 1e6),
            unit("kHz", "Kilohertz", "kHz", 1000.0),
            unit("Hz", "Hertz", "Hz", 1.0),
            unit("rpm", "Revolutions per Minute", "rpm", 1.0 / 60.0),
        ],
        Dimension::Power => vec![
            unit("MW", "Megawatts", "MW", 1e6),
            unit("kW", "Kilowatts", "kW", 1000.0),
            unit("W", "Watts", "W", 1.0),
            unit("mW", "Milliwatts", "mW", 0.001),
            unit("hp", "Metric Horsepower", "hp", 735.499),
        ],
    }
}

fn us_units_for(dimension: Dimension) -> Vec<Unit> {
    match dimension {
        Dimension::Length => vec![
            unit("mi", "Miles", "mi", 1609.344),
            unit("yd", "Yards", "yd", 0.9144),
            unit("ft", "Feet", "ft", 0.3048),
            unit("in", "Inches", "in", 0.0254),
        ],
        Dimension::Mass => vec![
            unit("ton", "US Tons", "ton", 907.185),
            unit("st", "Stones", "st", 6.350_29),
            unit("lb", "Pounds", "lb", 0.453_592),
            unit("oz", "Ounces", "oz", 0.028_349_5),
        ],
        Dimension::Area => vec![
            unit("mi²", "Square Miles", "mi²", 2_589_988.0),
            unit("ac", "Acres", "ac", 4046.86),
            unit("yd²", "Square Yards", "yd²", 0.836_127),
            unit("ft²", "Square Feet", "ft²", 0.092_903),
            unit("in²", "Square Inches", "in²", 0.000_645_16),
        ],
        Dimension::Volume => vec![
            unit("gal", "Gallons", "gal", 0.003_785_41),
            unit("qt", "Quarts", "qt", 0.000_946_353),
            unit("pt", "Pints", "pt", 0.000_473_176),
            unit("cup", "Cups", "cup", 0.000_236_588),
            unit("fl oz", "Fluid Ounces", "fl oz", 0.000_029_573_5),
            unit("ft³", "Cubic Feet", "ft³", 0.028_316_8),
            unit("in³", "Cubic Inches", "in³", 0.000_016_387_1),
        ],
        Dimension::Temperature => vec![
            unit("°F", "Fahrenheit", "°F", 1.0),
            unit("°R", "Rankine", "°R", 1.0),
        ],
        Dimension::Pressure => vec![
            unit("psi", "PSI", "psi", 6894.757_293_168_361),
            unit("inHg", "Inches of Mercury", "inHg", 3386.39),
        ],
        Dimension::Time => vec![
            unit("wk", "Weeks", "wk", 604_800.0),
            unit("d", "Days", "d", 86_400.0),
            unit("h", "Hours", "h", 3600.0),
            unit("min", "Minutes", "min", 60.0),
            unit("s", "Seconds", "s", 1.0),
        ],
        Dimension::Speed => vec![
            unit("c", "Speed of Light", "c", 299_792_458.0),
            unit("Mach", "Mach (at sea level)", "Mach", 343.0),
            unit("mph", "Miles per Hour", "mph", 0.447_04),
            unit("ft/s", "Feet per Second", "ft/s", 0.3048),
            unit("kn", "Knots", "kn", 0.514_444),
        ],
        Dimension::Acceleration => vec![
            unit("ft/s²", "Feet per Second²", "ft/s²", 0.3048),
            unit("in/s²", "Inches per Second²", "in/s²", 0.0254),
            unit("g", "Standard Gravity", "g", 9.806_65),
        ],
        Dimension::Force => vec![
            unit("lbf", "Pound-force", "lbf", 4.448_22),
            unit("ozf", "Ounce-force", "ozf", 0.278_014),
            unit("kip", "Kip-force", "kip", 4448.22),
        ],
        Dimension::Energy => vec![
            unit("BTU", "British Thermal Units", "BTU", 1055.06),
            unit("kcal", "Kilocalories", "kcal", 4184.0),
            unit("cal", "Calories", "cal", 4.184),
            unit("ft·lbf", "Foot-pounds", "ft·lbf", 1.355_82),
        ],
        Dimension::Frequency => vec![
            unit("Hz", "Hertz", "Hz", 1.0),
            unit("rpm", "Revolutions per Minute", "rpm", 1.0 / 60.0),
            unit("cps", "Cycles per Second", "cps", 1.0),
        ],
        Dimension::Power => vec![
            unit("hp", "Horsepower", "hp", 745.7),
            unit("BTU/h", "BTU per Hour", "BTU/h", 0.293_071),
            unit("ton", "Tons of Refrigeration", "ton", 3516.85),
        ],
    }
}

fn seximal_system_for(dimension: Dimension) -> Vec<Unit> {
    if dimension == Dimension::Temperature {
        return vec![unit("grado", "Grado Celsia", "grado", 1.0)];
    }
    SEXIMAL_BASE_UNITS
        .iter()
        .find(|(d, _, _)| *d == dimension)
        .map(|(_, base_name, base_factor)| seximal_units_for(base_name, *base_factor))
        .unwrap_or_default()
}

static REGISTRY: Lazy<Vec<(Dimension, System, Vec<Unit>)>> = Lazy::new(|| {
    let mut registry = Vec::new();
    for dimension in Dimension::ALL {
        registry.push((dimension, System::Si, si_units_for(dimension)));
        registry.push((dimension, System::Us, us_units_for(dimension)));
        registry.push((dimension, System::Seximal, seximal_system_for(dimension)));
    }
    registry
});

/// Returns the units known for a dimension within one system.
#[must_use]
pub fn units(dimension: Dimension, system: System) -> &'static [Unit] {
    REGISTRY
        .iter()
        .find(|(d, s, _)| *d == dimension && *s == system)
        .map(|(_, _, units)| units.as_slice())
        .unwrap_or(&[])
}

/// Looks a unit up by key across all systems of a dimension.
pub fn find_unit(dimension: Dimension, key: &str) -> CoreResult<&'static Unit> {
    System::ALL
        .iter()
        .flat_map(|system| units(dimension, *system))
        .find(|unit| unit.key == key)
        .ok_or_else(|| CoreError::UnknownUnit(format!("{key} ({dimension})")))
}

/// Converts a value between two units of the same dimension.
#[must_use]
pub fn convert(value: f64, from: &Unit, to: &Unit, dimension: Dimension) -> f64 {
    if dimension == Dimension::Temperature {
        return convert_temperature(value, &from.key, &to.key);
    }
    value * from.to_base / to.to_base
}

/// Temperature converts through Celsius rather than a linear factor.
fn convert_temperature(value: f64, from_key: &str, to_key: &str) -> f64 {
    let celsius = match from_key {
        "°F" => (value - 32.0) * 5.0 / 9.0,
        "K" => value - 273.15,
        "°R" => (value - 491.67) * 5.0 / 9.0,
        // grado celsia and °C share the Celsius scale
        _ => value,
    };

    match to_key {
        "°F" => celsius * 9.0 / 5.0 + 32.0,
        "K" => celsius + 273.15,
        "°R" => (celsius + 273.15) * 9.0 / 5.0,
        _ => celsius,
    }
}

/// Formats a converted quantity to a number of significant figures,
/// switching to scientific notation outside [0.001, 1e6) and trimming
/// trailing fractional zeros.
#[must_use]
pub fn format_quantity(value: f64, sig_figs: usize) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let sig_figs = sig_figs.max(1);
    let magnitude = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if magnitude >= 1_000_000.0 || magnitude < 0.001 {
        let precision = sig_figs - 1;
        return format!("{sign}{magnitude:.precision$e}");
    }

    let exponent = magnitude.log10().floor() as i64;
    let decimal_places = (sig_figs as i64 - exponent - 1).max(0) as usize;
    let fixed = format!("{magnitude:.decimal_places$}");
    let trimmed = if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.')
    } else {
        fixed.as_str()
    };
    format!("{sign}{trimmed}")
}
