use std::fmt::{Display, Formatter};

use chrono::NaiveDateTime;
use offpeak_quantities::energy::KilowattHours;
use serde::Serialize;

/// Single metering interval from the consumption export.
#[must_use]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ConsumptionRow {
    pub consumption: KilowattHours,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl ConsumptionRow {
    #[must_use]
    pub const fn timestamp(&self, anchor: Anchor) -> NaiveDateTime {
        match anchor {
            Anchor::Start => self.start,
            Anchor::End => self.end,
        }
    }
}

/// Which end of an interval decides whether it is peak or off-peak.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    /// Interval start.
    #[default]
    Start,

    /// Interval end.
    End,
}

impl Display for Anchor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "start"),
            Self::End => write!(f, "end"),
        }
    }
}
