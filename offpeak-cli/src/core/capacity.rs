use std::fmt::{Display, Formatter};

use comfy_table::Color;
use offpeak_quantities::{energy::KilowattHours, power::Kilowatts};
use serde::Serialize;

use crate::{
    core::{aggregator::Aggregation, window::OffPeakWindow},
    error::PipelineError,
    prelude::*,
};

/// Single-phase home charger.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct Charger {
    pub current_amps: f64,
    pub voltage: f64,
}

impl Default for Charger {
    /// UK single-phase maximum: 32 A at 230 V.
    fn default() -> Self {
        Self { current_amps: 32.0, voltage: 230.0 }
    }
}

impl Charger {
    pub fn max_power(self) -> Kilowatts {
        Kilowatts::from_amps_and_volts(self.current_amps, self.voltage)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CapacityStatus {
    Sufficient,
    Insufficient,
}

impl Display for CapacityStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sufficient => write!(f, "Sufficient"),
            Self::Insufficient => write!(f, "Insufficient"),
        }
    }
}

impl CapacityStatus {
    pub const fn color(self) -> Color {
        match self {
            Self::Sufficient => Color::Green,
            Self::Insufficient => Color::DarkYellow,
        }
    }
}

/// Whether the proposed off-peak window could have delivered the heaviest observed off-peak run.
#[must_use]
#[derive(Clone, Debug, Serialize)]
pub struct CapacityCheck {
    pub status: CapacityStatus,

    /// Charging power needed to fit the run into the window, `None` for a zero-length window.
    pub required_power: Option<Kilowatts>,

    pub max_power: Kilowatts,

    /// Proposed off-peak window and its floored length.
    pub window: OffPeakWindow,
    pub off_peak_hours: f64,

    pub average_off_peak_per_day: Option<KilowattHours>,
    pub highest_off_peak_run: KilowattHours,
    pub rationale: String,
}

impl CapacityCheck {
    #[instrument(skip_all, fields(window = %window))]
    pub fn evaluate(aggregation: &Aggregation, window: OffPeakWindow, charger: Charger) -> Self {
        let max_power = charger.max_power();
        let required_power = required_power(aggregation.highest_off_peak_run, window);
        let (status, rationale) = match required_power {
            Ok(required_power) if required_power > max_power => (
                CapacityStatus::Insufficient,
                format!(
                    "The new off-peak duration may not be sufficient to cover your off-peak \
                     consumption (assuming a {:.0} A charger).",
                    charger.current_amps,
                ),
            ),
            Ok(_) => (
                CapacityStatus::Sufficient,
                format!(
                    "The new off-peak duration is sufficient to cover your highest off-peak \
                     consumption (assuming a {:.0} A charger).",
                    charger.current_amps,
                ),
            ),
            Err(ref error) => {
                warn!(%error, "cannot check the capacity");
                (
                    CapacityStatus::Insufficient,
                    format!(
                        "The new off-peak window has zero duration ({window}), so no charger \
                         could cover your off-peak consumption within it."
                    ),
                )
            }
        };
        debug!(?required_power, ?max_power, %status);
        Self {
            status,
            required_power: required_power.ok(),
            max_power,
            window,
            off_peak_hours: window.hours(),
            average_off_peak_per_day: aggregation.average_off_peak_per_day(),
            highest_off_peak_run: aggregation.highest_off_peak_run,
            rationale,
        }
    }
}

/// Average power needed to deliver the energy within the window.
///
/// Fails with [`PipelineError::DegenerateWindow`] when the floored window is empty.
pub fn required_power(
    energy: KilowattHours,
    window: OffPeakWindow,
) -> Result<Kilowatts, PipelineError> {
    let duration = window.duration();
    if duration.is_zero() {
        return Err(PipelineError::DegenerateWindow(window));
    }
    Ok(energy / duration)
}
