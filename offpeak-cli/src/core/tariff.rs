use bon::Builder;
use chrono::TimeDelta;
use offpeak_quantities::{
    cost::Cost,
    rate::{DailyRate, KilowattHourRate},
};
use serde::Serialize;

use crate::core::{aggregator::Aggregation, window::OffPeakWindow};

/// Flat two-rate tariff. All the prices are in pence.
#[must_use]
#[derive(Copy, Clone, Debug, Builder, Serialize)]
pub struct Tariff {
    pub standing_charge: DailyRate,
    pub peak_rate: KilowattHourRate,
    pub off_peak_rate: KilowattHourRate,
    pub off_peak: OffPeakWindow,
}

impl Tariff {
    /// Price of the aggregated consumption over its day span, standing charge included.
    pub fn total_cost(&self, aggregation: &Aggregation) -> Cost {
        aggregation.peak * self.peak_rate
            + aggregation.off_peak * self.off_peak_rate
            + self.standing_charge * TimeDelta::days(aggregation.n_days)
    }
}
