use chrono::NaiveTime;
use clap::Parser;

use crate::{
    cli::export::ExportArgs,
    core::{
        aggregator::Aggregator,
        window::{OffPeakWindow, parse_time_of_day},
    },
    prelude::*,
    tables::{build_aggregation_table, build_rows_table},
};

#[derive(Parser)]
pub struct RowsArgs {
    #[clap(flatten)]
    export: ExportArgs,

    #[clap(
        long = "off-peak-start",
        env = "OFF_PEAK_START",
        default_value = "23:30",
        value_parser = parse_time_of_day,
    )]
    off_peak_start: NaiveTime,

    #[clap(
        long = "off-peak-end",
        env = "OFF_PEAK_END",
        default_value = "05:30",
        value_parser = parse_time_of_day,
    )]
    off_peak_end: NaiveTime,
}

impl RowsArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let window = OffPeakWindow::new(self.off_peak_start, self.off_peak_end);
        let export = self.export.read()?;

        let mut aggregator = Aggregator::new(window, self.export.anchor);
        let classified: Vec<_> =
            export.rows.iter().map(|row| (*row, aggregator.push(row))).collect();
        println!("{}", build_rows_table(&classified));

        let aggregation = aggregator.finish()?;
        println!("{}", build_aggregation_table(&aggregation, window, export.n_malformed_rows));
        Ok(())
    }
}
