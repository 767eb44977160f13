use bon::Builder;
use offpeak_quantities::energy::KilowattHours;
use serde::Serialize;

use crate::{
    core::{
        aggregator::{Aggregation, Aggregator},
        capacity::{CapacityCheck, Charger},
        price::PriceCheck,
        row::{Anchor, ConsumptionRow},
        tariff::Tariff,
    },
    error::PipelineError,
    prelude::*,
};

/// Everything needed to evaluate one consumption export.
#[must_use]
#[derive(Builder)]
pub struct Comparison {
    /// Its off-peak window classifies the observed consumption.
    current: Tariff,

    /// Its off-peak window is checked against the heaviest off-peak run.
    proposed: Tariff,

    #[builder(default)]
    charger: Charger,

    #[builder(default)]
    anchor: Anchor,
}

impl Comparison {
    #[instrument(skip_all, fields(n_rows = rows.len(), anchor = %self.anchor))]
    pub fn run(
        &self,
        rows: &[ConsumptionRow],
        n_malformed_rows: usize,
    ) -> Result<Report, PipelineError> {
        let mut aggregator = Aggregator::new(self.current.off_peak, self.anchor);
        aggregator.extend(rows.iter().copied());
        let aggregation = aggregator.finish()?;
        info!(
            peak = ?aggregation.peak,
            off_peak = ?aggregation.off_peak,
            highest_off_peak_run = ?aggregation.highest_off_peak_run,
            n_days = aggregation.n_days,
            "aggregated",
        );

        let price = PriceCheck::evaluate(&aggregation, &self.current, &self.proposed);
        let capacity = CapacityCheck::evaluate(&aggregation, self.proposed.off_peak, self.charger);

        Ok(Report::builder()
            .price(price)
            .capacity(capacity)
            .chart(ChartData::from(&aggregation))
            .n_rows(rows.len())
            .n_malformed_rows(n_malformed_rows)
            .n_days(aggregation.n_days)
            .build())
    }
}

/// Outcome of a single run, ready to be presented.
#[must_use]
#[derive(Clone, Debug, Builder, Serialize)]
pub struct Report {
    pub price: PriceCheck,
    pub capacity: CapacityCheck,
    pub chart: ChartData,
    pub n_rows: usize,
    pub n_malformed_rows: usize,
    pub n_days: i64,
}

/// Off-peak versus peak proportion.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct ChartData {
    pub off_peak: KilowattHours,
    pub peak: KilowattHours,
}

impl From<&Aggregation> for ChartData {
    fn from(aggregation: &Aggregation) -> Self {
        Self { off_peak: aggregation.off_peak, peak: aggregation.peak }
    }
}

impl ChartData {
    /// Off-peak share of the total, `None` when nothing was consumed.
    #[must_use]
    pub fn off_peak_share(self) -> Option<f64> {
        let total = self.off_peak + self.peak;
        (!total.is_zero()).then(|| (self.off_peak / total).0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use chrono::{NaiveDate, NaiveTime, TimeDelta};
    use offpeak_quantities::rate::{DailyRate, KilowattHourRate};

    use super::*;
    use crate::{
        core::{capacity::CapacityStatus, price::PriceStatus, window::OffPeakWindow},
        export::ConsumptionExport,
    };

    fn tariff(peak_rate: f64, off_peak_rate: f64, off_peak: (u32, u32)) -> Tariff {
        Tariff::builder()
            .standing_charge(DailyRate::from(50.0))
            .peak_rate(KilowattHourRate::from(peak_rate))
            .off_peak_rate(KilowattHourRate::from(off_peak_rate))
            .off_peak(OffPeakWindow::new(
                NaiveTime::from_hms_opt(off_peak.0, 30, 0).unwrap(),
                NaiveTime::from_hms_opt(off_peak.1, 30, 0).unwrap(),
            ))
            .build()
    }

    /// Two days of half-hourly 1 kWh rows since midnight.
    fn rows() -> Vec<ConsumptionRow> {
        let since = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
        (0..96)
            .map(|i| {
                let start = since + TimeDelta::minutes(30 * i);
                ConsumptionRow {
                    consumption: KilowattHours::from(1.0),
                    start,
                    end: start + TimeDelta::minutes(30),
                }
            })
            .collect()
    }

    #[test]
    fn test_run() {
        let report = Comparison::builder()
            .current(tariff(30.0, 10.0, (23, 5)))
            .proposed(tariff(30.0, 7.0, (23, 5)))
            .build()
            .run(&rows(), 2)
            .unwrap();

        // 00:00 to 05:00 (11 rows) and 23:30 (1 row) are off-peak every day:
        assert_abs_diff_eq!(report.chart.off_peak.0.0, 24.0);
        assert_abs_diff_eq!(report.chart.peak.0.0, 72.0);
        assert_eq!(report.n_days, 2);
        assert_eq!(report.n_malformed_rows, 2);
        assert_eq!(report.price.status, PriceStatus::Better);

        // The first night is seeded at 00:00, the second one at 23:30 of the first day:
        assert_abs_diff_eq!(report.capacity.highest_off_peak_run.0.0, 11.0);
        assert_eq!(report.capacity.status, CapacityStatus::Sufficient);
        assert_abs_diff_eq!(report.chart.off_peak_share().unwrap(), 0.25);
    }

    #[test]
    fn test_incomplete_row_inside_off_peak_run() {
        let export = ConsumptionExport::from_reader(
            "Consumption (kwh), Estimated Cost Inc. Tax (p), Start, End\n\
             1.0, 0, 2024-03-01T23:00:00Z, 2024-03-01T23:30:00Z\n\
             2.0, 0, 2024-03-01T23:30:00Z, 2024-03-02T00:00:00Z\n\
             3.0, 0, 2024-03-02T00:00:00Z, 2024-03-02T00:30:00Z\n\
             5.0, 0, 2024-03-02T00:30:00Z\n\
             4.0, 0, 2024-03-02T01:00:00Z, 2024-03-02T01:30:00Z\n\
             1.0, 0, 2024-03-02T05:30:00Z, 2024-03-02T06:00:00Z\n"
                .as_bytes(),
        )
        .unwrap();
        let report = Comparison::builder()
            .current(tariff(30.0, 10.0, (23, 5)))
            .proposed(tariff(30.0, 7.0, (23, 5)))
            .build()
            .run(&export.rows, export.n_malformed_rows)
            .unwrap();

        assert_eq!(report.n_rows, 5);
        assert_eq!(report.n_malformed_rows, 1);
        assert_eq!(report.n_days, 1);

        // The incomplete row neither ends the run nor adds to it:
        assert_abs_diff_eq!(report.capacity.highest_off_peak_run.0.0, 7.0);

        assert_abs_diff_eq!(report.chart.off_peak.0.0, 9.0);
        assert_abs_diff_eq!(report.chart.peak.0.0, 2.0);
        let valid_total: f64 = export.rows.iter().map(|row| row.consumption.0.0).sum();
        assert_abs_diff_eq!((report.chart.off_peak + report.chart.peak).0.0, valid_total);
        assert_abs_diff_eq!(valid_total, 11.0);
    }

    #[test]
    fn test_no_rows() {
        let result = Comparison::builder()
            .current(tariff(30.0, 10.0, (23, 5)))
            .proposed(tariff(30.0, 7.0, (23, 5)))
            .build()
            .run(&[], 3);
        assert!(matches!(result, Err(PipelineError::NoData)));
    }

    #[test]
    fn test_json_shape() {
        let report = Comparison::builder()
            .current(tariff(30.0, 10.0, (23, 5)))
            .proposed(tariff(30.0, 10.0, (23, 5)))
            .build()
            .run(&rows(), 0)
            .unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["price"]["status"], "equal");
        assert_eq!(json["capacity"]["status"], "sufficient");
        assert!(json["price"]["current_pence"].is_number());
        assert_eq!(json["price"]["saving_pence"], 0.0);
        assert!(json["chart"]["off_peak"].is_number());
    }
}
