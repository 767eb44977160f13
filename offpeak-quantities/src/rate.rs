use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use chrono::TimeDelta;

use crate::{Quantity, cost::Cost};

/// Pence per kilowatt-hour.
pub type KilowattHourRate = Quantity<-1, -1, 1>;

impl Display for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} p/kWh", self.0)
    }
}

impl Debug for KilowattHourRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}p/kWh", self.0)
    }
}

/// Pence per day, for standing charges.
pub type DailyRate = Quantity<0, -1, 1>;

impl Display for DailyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2} p/day", self.0)
    }
}

impl Debug for DailyRate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}p/day", self.0)
    }
}

impl Mul<TimeDelta> for DailyRate {
    type Output = Cost;

    fn mul(self, rhs: TimeDelta) -> Self::Output {
        let days = rhs.as_seconds_f64() / 86400.0;
        Quantity(self.0 * days)
    }
}
