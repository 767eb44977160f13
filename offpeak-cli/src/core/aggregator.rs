use chrono::NaiveDateTime;
use offpeak_quantities::energy::KilowattHours;
use serde::Serialize;

use crate::{
    core::{
        row::{Anchor, ConsumptionRow},
        window::OffPeakWindow,
    },
    error::PipelineError,
    prelude::*,
};

/// Consumption totals of the whole export.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Aggregation {
    pub peak: KilowattHours,
    pub off_peak: KilowattHours,

    /// Heaviest contiguous off-peak block, excluding its first interval.
    pub highest_off_peak_run: KilowattHours,

    /// Whole days between the first and the last row, rounded up.
    pub n_days: i64,
}

impl Aggregation {
    pub fn total(&self) -> KilowattHours {
        self.peak + self.off_peak
    }

    /// `None` when all the rows fall onto the same instant.
    #[must_use]
    #[expect(clippy::cast_precision_loss)]
    pub fn average_off_peak_per_day(&self) -> Option<KilowattHours> {
        (self.n_days != 0).then(|| self.off_peak / self.n_days as f64)
    }
}

/// Single-pass peak and off-peak accumulator.
#[must_use]
pub struct Aggregator {
    window: OffPeakWindow,
    anchor: Anchor,

    peak: KilowattHours,
    off_peak: KilowattHours,

    /// Open off-peak run, `None` while in a peak block.
    run: Option<KilowattHours>,
    highest_run: KilowattHours,

    first_timestamp: Option<NaiveDateTime>,
    last_timestamp: Option<NaiveDateTime>,
}

impl Aggregator {
    pub const fn new(window: OffPeakWindow, anchor: Anchor) -> Self {
        Self {
            window,
            anchor,
            peak: KilowattHours::ZERO,
            off_peak: KilowattHours::ZERO,
            run: None,
            highest_run: KilowattHours::ZERO,
            first_timestamp: None,
            last_timestamp: None,
        }
    }

    /// Account for the next row and return whether it is off-peak.
    pub fn push(&mut self, row: &ConsumptionRow) -> bool {
        let timestamp = row.timestamp(self.anchor);
        self.first_timestamp = self.first_timestamp.or(Some(timestamp));
        self.last_timestamp = Some(timestamp);

        let is_off_peak = self.window.contains(timestamp.time());
        if is_off_peak {
            self.off_peak += row.consumption;
            // The first interval only opens the run:
            self.run = Some(self.run.map_or(KilowattHours::ZERO, |run| run + row.consumption));
        } else {
            self.peak += row.consumption;
            if let Some(run) = self.run.take() {
                self.highest_run = self.highest_run.max(run);
            }
        }
        is_off_peak
    }

    /// Finish the aggregation. A run still open at the end is left out.
    pub fn finish(self) -> Result<Aggregation, PipelineError> {
        let (Some(first), Some(last)) = (self.first_timestamp, self.last_timestamp) else {
            return Err(PipelineError::NoData);
        };
        if last < first {
            warn!(%first, %last, "rows are not in chronological order");
        }
        Ok(Aggregation {
            peak: self.peak,
            off_peak: self.off_peak,
            highest_off_peak_run: self.highest_run,
            n_days: n_days_between(first, last),
        })
    }
}

impl Extend<ConsumptionRow> for Aggregator {
    fn extend<T: IntoIterator<Item = ConsumptionRow>>(&mut self, rows: T) {
        for row in rows {
            self.push(&row);
        }
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn n_days_between(first: NaiveDateTime, last: NaiveDateTime) -> i64 {
    const MILLIS_PER_DAY: f64 = 86_400_000.0;
    ((last - first).num_milliseconds() as f64 / MILLIS_PER_DAY).ceil() as i64
}
