use clap::Parser;

use crate::{
    cli::{
        charger::ChargerArgs,
        export::ExportArgs,
        tariff::{CurrentTariffArgs, ProposedTariffArgs},
    },
    core::report::Comparison,
    prelude::*,
    presenter::{OutputFormat, Presenter},
};

#[derive(Parser)]
pub struct CompareArgs {
    #[clap(flatten)]
    export: ExportArgs,

    #[clap(flatten)]
    current: CurrentTariffArgs,

    #[clap(flatten)]
    proposed: ProposedTariffArgs,

    #[clap(flatten)]
    charger: ChargerArgs,

    #[clap(long, env = "OUTPUT_FORMAT", value_enum, default_value_t)]
    format: OutputFormat,
}

impl CompareArgs {
    #[instrument(skip_all)]
    pub fn run(self) -> Result {
        let comparison = Comparison::builder()
            .current(self.current.tariff())
            .proposed(self.proposed.tariff())
            .charger(self.charger.into())
            .anchor(self.export.anchor)
            .build();
        let export = self.export.read()?;
        let report = comparison.run(&export.rows, export.n_malformed_rows)?;
        Presenter::new(self.format).present(&report)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::core::capacity::Charger;

    #[test]
    fn test_parse_ok() {
        let args = CompareArgs::try_parse_from([
            "compare",
            "--current-standing-charge=61.64",
            "--current-peak-rate=28.62",
            "--current-off-peak-rate=7.5",
            "--current-off-peak-start=23:30",
            "--current-off-peak-end=05:30",
            "--proposed-standing-charge=61.64",
            "--proposed-peak-rate=30.0",
            "--proposed-off-peak-rate=7.0",
            "--proposed-off-peak-start=00:30",
            "--proposed-off-peak-end=04:30",
            "--format=json",
            "consumption.csv",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Json);
        assert!(args.export.path().is_ok());

        let current = args.current.tariff();
        let proposed = args.proposed.tariff();
        assert_abs_diff_eq!(current.peak_rate.0.0, 28.62);
        assert_abs_diff_eq!(proposed.peak_rate.0.0, 30.0);
        assert_abs_diff_eq!(current.off_peak_rate.0.0, 7.5);
        assert_abs_diff_eq!(proposed.off_peak_rate.0.0, 7.0);
        assert_eq!(current.off_peak.to_string(), "23:30–05:30");
        assert_eq!(proposed.off_peak.to_string(), "00:30–04:30");
    }

    #[test]
    fn test_charger_defaults() {
        let args = CompareArgs::try_parse_from([
            "compare",
            "--current-standing-charge=61.64",
            "--current-peak-rate=28.62",
            "--current-off-peak-rate=7.5",
            "--current-off-peak-start=23:30",
            "--current-off-peak-end=05:30",
            "--proposed-standing-charge=50",
            "--proposed-peak-rate=30.0",
            "--proposed-off-peak-rate=7.0",
            "--proposed-off-peak-start=00:30",
            "--proposed-off-peak-end=04:30",
            "consumption.csv",
        ])
        .unwrap();
        assert_eq!(args.format, OutputFormat::Table);
        assert_abs_diff_eq!(args.proposed.tariff().standing_charge.0.0, 50.0);
        assert_abs_diff_eq!(Charger::from(args.charger).max_power().0.0, 7.36);
    }

    #[test]
    fn test_missing_tariff() {
        let result = CompareArgs::try_parse_from(["compare", "consumption.csv"]);
        assert!(result.is_err());
    }
}
