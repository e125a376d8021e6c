use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("expected digits, a '.', and exactly two decimal places")]
    Format,
}

/// Money value in dollars and cents.
///
/// Parsed from strings like `"35.35"`; whole amounts without cents (`"35"`)
/// and extra decimals (`"35.350"`) are rejected. The dollar part has no upper
/// bound, so it is kept as its digit string with leading zeros stripped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    dollars: String,
    cents: u8,
}

impl Amount {
    pub fn from_cents(cents: u64) -> Self {
        Self {
            dollars: (cents / 100).to_string(),
            cents: (cents % 100) as u8,
        }
    }

    /// Whole amount in cents, or `None` if it doesn't fit in a `u128`
    pub fn cents(&self) -> Option<u128> {
        self.dollars
            .parse::<u128>()
            .ok()?
            .checked_mul(100)?
            .checked_add(u128::from(self.cents))
    }

    /// The two digits after the decimal point, as a number (0..=99)
    pub fn cents_part(&self) -> u64 {
        u64::from(self.cents)
    }

    pub fn dollars(&self) -> &str {
        &self.dollars
    }
}

impl FromStr for Amount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (whole, frac) = s.split_once('.').ok_or(AmountError::Format)?;
        if whole.is_empty()
            || frac.len() != 2
            || !whole.bytes().all(|b| b.is_ascii_digit())
            || !frac.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(AmountError::Format);
        }

        let dollars = match whole.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };
        let cents: u8 = frac.parse().map_err(|_| AmountError::Format)?;
        Ok(Self {
            dollars: dollars.to_string(),
            cents,
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.dollars, self.cents)
    }
}
