use comfy_table::Table;

use crate::{
    core::report::{ChartData, Report},
    prelude::*,
    tables::{build_capacity_table, build_chart_table, build_price_table},
};

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored status cards and the ratio chart.
    #[default]
    Table,

    /// Single JSON document.
    Json,
}

/// Rendered peak to off-peak ratio chart.
struct Chart {
    data: ChartData,
    table: Table,
}

impl Chart {
    fn new(data: ChartData) -> Self {
        Self { data, table: build_chart_table(data) }
    }
}

#[must_use]
pub struct Presenter {
    format: OutputFormat,

    /// At most one chart exists at a time.
    chart: Option<Chart>,
}

impl Presenter {
    pub const fn new(format: OutputFormat) -> Self {
        Self { format, chart: None }
    }

    pub fn present(&mut self, report: &Report) -> Result {
        println!("{}", self.render(report)?);
        Ok(())
    }

    fn render(&mut self, report: &Report) -> Result<String> {
        match self.format {
            OutputFormat::Table => {
                let chart = self.replace_chart(report.chart);
                Ok(format!(
                    "{}\n{}\n{}",
                    build_price_table(&report.price),
                    build_capacity_table(&report.capacity),
                    chart.table,
                ))
            }
            OutputFormat::Json => {
                serde_json::to_string_pretty(report).context("failed to serialize the report")
            }
        }
    }

    /// Release the previous chart, if any, and render a new one in its place.
    fn replace_chart(&mut self, data: ChartData) -> &Chart {
        if let Some(previous) = self.chart.take() {
            debug!(
                off_peak = ?previous.data.off_peak,
                peak = ?previous.data.peak,
                "releasing the previous chart",
            );
        }
        self.chart.insert(Chart::new(data))
    }
}
