use std::fmt::{Debug, Display, Formatter};

use ordered_float::OrderedFloat;

use crate::Quantity;

/// Money in pence, the minor unit every tariff figure is quoted in.
pub type Cost = Quantity<0, 0, 1>;

impl Cost {
    /// Convert into pounds.
    #[must_use]
    pub fn to_pounds(self) -> OrderedFloat<f64> {
        self.0 / 100.0
    }
}

/// Pounds with the sign in front of the currency symbol, for example `-£5.00`.
impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let pounds = self.to_pounds().0;
        let sign = if pounds <= -0.005 { "-" } else { "" };
        write!(f, "{sign}£{:.2}", pounds.abs())
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}p", self.0)
    }
}
