use std::path::{Path, PathBuf};

use clap::Parser;

use crate::{core::row::Anchor, error::PipelineError, export::ConsumptionExport, prelude::*};

#[derive(Parser)]
pub struct ExportArgs {
    /// Consumption export from the Octopus Energy dashboard. Exactly one file is expected.
    #[clap(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Interval timestamp that decides whether the interval is peak or off-peak.
    #[clap(long, env = "ANCHOR", value_enum, default_value_t)]
    pub anchor: Anchor,
}

impl ExportArgs {
    pub fn path(&self) -> Result<&Path, PipelineError> {
        match self.files.as_slice() {
            [path] => Ok(path),
            files => Err(PipelineError::FileSelection(files.len())),
        }
    }

    pub fn read(&self) -> Result<ConsumptionExport> {
        ConsumptionExport::read(self.path()?)
    }
}
