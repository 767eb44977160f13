mod charger;
mod compare;
mod export;
mod rows;
mod tariff;

use clap::{Parser, Subcommand};

use crate::cli::{compare::CompareArgs, rows::RowsArgs};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: compare the current and the proposed tariff against a consumption export.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Development tools: print every row of an export with its peak or off-peak classification.
    #[clap(name = "rows")]
    Rows(Box<RowsArgs>),
}

/// Parse a number, rejecting `NaN` and infinities.
fn parse_finite<T: From<f64>>(text: &str) -> Result<T, String> {
    let value = text.parse::<f64>().map_err(|error| error.to_string())?;
    if value.is_finite() {
        Ok(T::from(value))
    } else {
        Err(format!("`{text}` is not a finite number"))
    }
}

impl Command {
    pub fn run(self) -> crate::prelude::Result {
        match self {
            Self::Compare(args) => args.run(),
            Self::Rows(args) => args.run(),
        }
    }
}
