use clap::Parser;

use crate::{cli::parse_finite, core::capacity::Charger};

#[must_use]
#[derive(Copy, Clone, Parser)]
pub struct ChargerArgs {
    /// Maximum charging current in amperes.
    #[clap(
        long = "charger-current-amps",
        default_value = "32",
        env = "CHARGER_CURRENT_AMPS",
        value_parser = parse_finite::<f64>,
    )]
    current_amps: f64,

    /// Mains voltage.
    #[clap(
        long = "mains-voltage",
        default_value = "230",
        env = "MAINS_VOLTAGE",
        value_parser = parse_finite::<f64>,
    )]
    voltage: f64,
}

impl From<ChargerArgs> for Charger {
    fn from(args: ChargerArgs) -> Self {
        Self { current_amps: args.current_amps, voltage: args.voltage }
    }
}
