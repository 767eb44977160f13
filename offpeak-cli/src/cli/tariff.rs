//! Tariff arguments. Prices are entered in pence, as they appear on the bill.

use chrono::NaiveTime;
use clap::Parser;
use offpeak_quantities::rate::{DailyRate, KilowattHourRate};

use crate::{
    cli::parse_finite,
    core::{
        tariff::Tariff,
        window::{OffPeakWindow, parse_time_of_day},
    },
    prelude::*,
};

#[derive(Parser)]
pub struct CurrentTariffArgs {
    /// Current standing charge in pence per day.
    #[clap(
        id = "current_standing_charge",
        long = "current-standing-charge",
        env = "CURRENT_STANDING_CHARGE",
        value_parser = parse_finite::<DailyRate>,
    )]
    standing_charge: DailyRate,

    /// Current peak rate in pence per kilowatt-hour.
    #[clap(
        id = "current_peak_rate",
        long = "current-peak-rate",
        env = "CURRENT_PEAK_RATE",
        value_parser = parse_finite::<KilowattHourRate>,
    )]
    peak_rate: KilowattHourRate,

    /// Current off-peak rate in pence per kilowatt-hour.
    #[clap(
        id = "current_off_peak_rate",
        long = "current-off-peak-rate",
        env = "CURRENT_OFF_PEAK_RATE",
        value_parser = parse_finite::<KilowattHourRate>,
    )]
    off_peak_rate: KilowattHourRate,

    /// Current off-peak start time, for example `23:30`.
    #[clap(
        id = "current_off_peak_start",
        long = "current-off-peak-start",
        env = "CURRENT_OFF_PEAK_START",
        value_parser = parse_time_of_day,
    )]
    off_peak_start: NaiveTime,

    /// Current off-peak end time, for example `05:30`.
    #[clap(
        id = "current_off_peak_end",
        long = "current-off-peak-end",
        env = "CURRENT_OFF_PEAK_END",
        value_parser = parse_time_of_day,
    )]
    off_peak_end: NaiveTime,
}

impl CurrentTariffArgs {
    pub fn tariff(&self) -> Tariff {
        build_tariff(
            "current",
            self.standing_charge,
            self.peak_rate,
            self.off_peak_rate,
            OffPeakWindow::new(self.off_peak_start, self.off_peak_end),
        )
    }
}

#[derive(Parser)]
pub struct ProposedTariffArgs {
    /// Proposed standing charge in pence per day.
    #[clap(
        id = "proposed_standing_charge",
        long = "proposed-standing-charge",
        env = "PROPOSED_STANDING_CHARGE",
        value_parser = parse_finite::<DailyRate>,
    )]
    standing_charge: DailyRate,

    /// Proposed peak rate in pence per kilowatt-hour.
    #[clap(
        id = "proposed_peak_rate",
        long = "proposed-peak-rate",
        env = "PROPOSED_PEAK_RATE",
        value_parser = parse_finite::<KilowattHourRate>,
    )]
    peak_rate: KilowattHourRate,

    /// Proposed off-peak rate in pence per kilowatt-hour.
    #[clap(
        id = "proposed_off_peak_rate",
        long = "proposed-off-peak-rate",
        env = "PROPOSED_OFF_PEAK_RATE",
        value_parser = parse_finite::<KilowattHourRate>,
    )]
    off_peak_rate: KilowattHourRate,

    /// Proposed off-peak start time.
    #[clap(
        id = "proposed_off_peak_start",
        long = "proposed-off-peak-start",
        env = "PROPOSED_OFF_PEAK_START",
        value_parser = parse_time_of_day,
    )]
    off_peak_start: NaiveTime,

    /// Proposed off-peak end time.
    #[clap(
        id = "proposed_off_peak_end",
        long = "proposed-off-peak-end",
        env = "PROPOSED_OFF_PEAK_END",
        value_parser = parse_time_of_day,
    )]
    off_peak_end: NaiveTime,
}

impl ProposedTariffArgs {
    pub fn tariff(&self) -> Tariff {
        build_tariff(
            "proposed",
            self.standing_charge,
            self.peak_rate,
            self.off_peak_rate,
            OffPeakWindow::new(self.off_peak_start, self.off_peak_end),
        )
    }
}

fn build_tariff(
    name: &str,
    standing_charge: DailyRate,
    peak_rate: KilowattHourRate,
    off_peak_rate: KilowattHourRate,
    off_peak: OffPeakWindow,
) -> Tariff {
    if !off_peak.is_aligned() {
        warn!(name, %off_peak, "off-peak window is not aligned to half-hours");
    }
    let tariff = Tariff::builder()
        .standing_charge(standing_charge)
        .peak_rate(peak_rate)
        .off_peak_rate(off_peak_rate)
        .off_peak(off_peak)
        .build();
    debug!(name, ?tariff);
    tariff
}
