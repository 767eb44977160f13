use std::fmt::{Debug, Display, Formatter};

/// Share of a whole, or `n/a` when the whole is empty.
#[derive(Copy, Clone)]
pub struct FormattedShare(pub Option<f64>);

impl FormattedShare {
    #[must_use]
    pub fn complement(self) -> Self {
        Self(self.0.map(|share| 1.0 - share))
    }
}

impl Debug for FormattedShare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}

impl Display for FormattedShare {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(share) => write!(f, "{:.1}%", share * 100.0),
            None => f.write_str("n/a"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(FormattedShare(Some(0.25)).to_string(), "25.0%");
        assert_eq!(FormattedShare(Some(0.25)).complement().to_string(), "75.0%");
        assert_eq!(FormattedShare(None).complement().to_string(), "n/a");
    }
}
