use std::{
    cmp::Ordering,
    fmt::{Display, Formatter},
};

use comfy_table::Color;
use offpeak_quantities::cost::Cost;
use serde::Serialize;

use crate::core::{aggregator::Aggregation, tariff::Tariff};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PriceStatus {
    /// The proposed tariff is cheaper.
    Better,

    Equal,

    /// The proposed tariff is more expensive.
    Worse,
}

impl Display for PriceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Better => write!(f, "Better"),
            Self::Equal => write!(f, "Equal"),
            Self::Worse => write!(f, "Worse"),
        }
    }
}

impl PriceStatus {
    pub const fn color(self) -> Color {
        match self {
            Self::Better => Color::Green,
            Self::Equal => Color::DarkYellow,
            Self::Worse => Color::Red,
        }
    }

    #[must_use]
    pub const fn rationale(self) -> &'static str {
        match self {
            Self::Better => "Total cost with the new tariff is lower!",
            Self::Equal => {
                "The current and new tariff prices are the same. If you are planning to increase \
                 your off-peak usage, a saving might be possible."
            }
            Self::Worse => "Total cost with the new tariff is higher!",
        }
    }
}

/// Cost of the observed consumption under both tariffs.
#[must_use]
#[derive(Copy, Clone, Debug, Serialize)]
pub struct PriceCheck {
    pub status: PriceStatus,

    #[serde(rename = "current_pence")]
    pub current: Cost,

    #[serde(rename = "proposed_pence")]
    pub proposed: Cost,

    /// Positive when the proposed tariff is cheaper.
    #[serde(rename = "saving_pence")]
    pub saving: Cost,

    pub rationale: &'static str,
}

impl PriceCheck {
    pub fn evaluate(aggregation: &Aggregation, current: &Tariff, proposed: &Tariff) -> Self {
        Self::from_costs(current.total_cost(aggregation), proposed.total_cost(aggregation))
    }

    /// Classify by the totals in pounds.
    pub fn from_costs(current: Cost, proposed: Cost) -> Self {
        let status = match current.to_pounds().cmp(&proposed.to_pounds()) {
            Ordering::Greater => PriceStatus::Better,
            Ordering::Equal => PriceStatus::Equal,
            Ordering::Less => PriceStatus::Worse,
        };
        Self {
            status,
            current,
            proposed,
            saving: current - proposed,
            rationale: status.rationale(),
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_better() {
        let check = PriceCheck::from_costs(Cost::from(5000.0), Cost::from(4500.0));
        assert_eq!(check.status, PriceStatus::Better);
        assert_abs_diff_eq!(check.saving.to_pounds().0, 5.0);
    }

    #[test]
    fn test_equal_mentions_pattern_shift() {
        let check = PriceCheck::from_costs(Cost::from(5000.0), Cost::from(5000.0));
        assert_eq!(check.status, PriceStatus::Equal);
        assert!(check.rationale.contains("increase your off-peak usage"));
    }

    #[test]
    fn test_worse() {
        let check = PriceCheck::from_costs(Cost::from(4500.0), Cost::from(5000.0));
        assert_eq!(check.status, PriceStatus::Worse);
        assert!(check.saving < Cost::ZERO);
    }
}
