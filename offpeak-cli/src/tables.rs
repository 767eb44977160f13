use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use offpeak_quantities::cost::Cost;

use crate::{
    core::{
        aggregator::Aggregation,
        capacity::CapacityCheck,
        price::PriceCheck,
        report::ChartData,
        row::ConsumptionRow,
        window::OffPeakWindow,
    },
    fmt::FormattedShare,
};

const OFF_PEAK_COLOR: Color = Color::Blue;
const PEAK_COLOR: Color = Color::DarkYellow;

/// Width of the proportion bar in characters.
const BAR_WIDTH: usize = 40;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

pub fn build_price_table(price: &PriceCheck) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Price check").add_attribute(Attribute::Bold),
            Cell::new(price.status).fg(price.status.color()).add_attribute(Attribute::Bold),
        ])
        .add_row(vec![
            Cell::new("Current tariff"),
            Cell::new(price.current).set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new("New tariff"),
            Cell::new(price.proposed).set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new("Saving").add_attribute(Attribute::Dim),
            Cell::new(price.saving)
                .set_alignment(CellAlignment::Right)
                .fg(if price.saving >= Cost::ZERO { Color::Green } else { Color::Red }),
        ])
        .add_row(vec![
            Cell::new("Comment").add_attribute(Attribute::Dim),
            Cell::new(price.rationale),
        ]);
    table
}

pub fn build_capacity_table(capacity: &CapacityCheck) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Capacity check").add_attribute(Attribute::Bold),
            Cell::new(capacity.status).fg(capacity.status.color()).add_attribute(Attribute::Bold),
        ])
        .add_row(vec![
            Cell::new("New off-peak window"),
            Cell::new(format!("{} ({:.1} h)", capacity.window, capacity.off_peak_hours))
                .set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new("Average off-peak usage"),
            capacity
                .average_off_peak_per_day
                .map_or_else(|| Cell::new("n/a"), |usage| Cell::new(format!("{usage} per day")))
                .set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new("Highest single-run off-peak usage"),
            Cell::new(capacity.highest_off_peak_run).set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new("Required charging power").add_attribute(Attribute::Dim),
            capacity
                .required_power
                .map_or_else(|| Cell::new("n/a"), Cell::new)
                .set_alignment(CellAlignment::Right)
                .fg(match capacity.required_power {
                    Some(power) if power > capacity.max_power => Color::Red,
                    Some(_) => Color::Green,
                    None => Color::Reset,
                }),
        ])
        .add_row(vec![
            Cell::new("Charger limit").add_attribute(Attribute::Dim),
            Cell::new(capacity.max_power).set_alignment(CellAlignment::Right),
        ])
        .add_row(vec![
            Cell::new("Comment").add_attribute(Attribute::Dim),
            Cell::new(&capacity.rationale),
        ]);
    table
}

/// Peak to off-peak ratio as a single proportional bar.
pub fn build_chart_table(chart: ChartData) -> Table {
    let share = chart.off_peak_share();
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    let n_off_peak = share.map_or(0, |share| (share * BAR_WIDTH as f64).round() as usize);

    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Off-peak").fg(OFF_PEAK_COLOR),
            Cell::new("Peak").fg(PEAK_COLOR),
            Cell::new("Ratio of peak to off-peak consumption"),
        ])
        .add_row(vec![
            Cell::new(chart.off_peak).set_alignment(CellAlignment::Right),
            Cell::new(chart.peak).set_alignment(CellAlignment::Right),
            Cell::new(format!(
                "{}{}",
                "█".repeat(n_off_peak),
                "░".repeat(BAR_WIDTH.saturating_sub(n_off_peak)),
            )),
        ])
        .add_row(vec![
            Cell::new(FormattedShare(share))
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(FormattedShare(share).complement())
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Dim),
            Cell::new(""),
        ]);
    table
}

pub fn build_rows_table(rows: &[(ConsumptionRow, bool)]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Date", "Start", "End", "Consumption", "Period"]);
    for (row, is_off_peak) in rows {
        table.add_row(vec![
            Cell::new(row.start.format("%b %d")).add_attribute(Attribute::Dim),
            Cell::new(row.start.format("%H:%M")),
            Cell::new(row.end.format("%H:%M")).add_attribute(Attribute::Dim),
            Cell::new(row.consumption).set_alignment(CellAlignment::Right),
            if *is_off_peak {
                Cell::new("Off-peak").fg(OFF_PEAK_COLOR)
            } else {
                Cell::new("Peak").fg(PEAK_COLOR)
            },
        ]);
    }
    table
}

pub fn build_aggregation_table(
    aggregation: &Aggregation,
    window: OffPeakWindow,
    n_malformed_rows: usize,
) -> Table {
    let mut table = new_table();
    table
        .set_header(vec![
            Cell::new("Window"),
            Cell::new("Off-peak").fg(OFF_PEAK_COLOR),
            Cell::new("Peak").fg(PEAK_COLOR),
            Cell::new("Total"),
            Cell::new("Highest run"),
            Cell::new("Days"),
            Cell::new("Incomplete rows"),
        ])
        .add_row(vec![
            Cell::new(window),
            Cell::new(aggregation.off_peak).set_alignment(CellAlignment::Right),
            Cell::new(aggregation.peak).set_alignment(CellAlignment::Right),
            Cell::new(aggregation.total()).set_alignment(CellAlignment::Right),
            Cell::new(aggregation.highest_off_peak_run).set_alignment(CellAlignment::Right),
            Cell::new(aggregation.n_days).set_alignment(CellAlignment::Right),
            Cell::new(n_malformed_rows).set_alignment(CellAlignment::Right).fg(
                if n_malformed_rows == 0 { Color::Reset } else { Color::DarkYellow },
            ),
        ]);
    table
}
