use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of fractional decimal digits in one ether.
pub const ETHER_DECIMALS: usize = 18;

/// 1 ETH = 10^18 wei.
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// Display symbol for amounts shown in the storefront.
pub const SYMBOL: &str = "ETH";

/// An ether amount in wei. Prices and totals are always stored in wei so that
/// cart sums are exact.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Wei(pub u128);

/// Errors from parsing a decimal ether string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AmountError {
    #[error("empty amount")]
    Empty,
    #[error("invalid character in amount: {0:?}")]
    InvalidDigit(String),
    #[error("too many decimal places: {0} (at most 18)")]
    TooPrecise(usize),
    #[error("amount does not fit in 128 bits of wei")]
    Overflow,
}

impl Wei {
    pub const ZERO: Wei = Wei(0);

    pub fn checked_add(self, other: Wei) -> Option<Wei> {
        self.0.checked_add(other.0).map(Wei)
    }

    pub fn saturating_sub(self, other: Wei) -> Wei {
        Wei(self.0.saturating_sub(other.0))
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Sum a sequence of amounts; `None` on overflow.
    pub fn checked_sum<I: IntoIterator<Item = Wei>>(amounts: I) -> Option<Wei> {
        amounts
            .into_iter()
            .try_fold(Wei::ZERO, |acc, amount| acc.checked_add(amount))
    }

    /// JSON-RPC quantity encoding: `0x`-prefixed, no leading zeros.
    pub fn to_hex_quantity(self) -> String {
        format!("{:#x}", self.0)
    }
}

/// Parse a decimal ether string such as `"0.001"` or `"2"` into wei.
pub fn parse_ether(input: &str) -> Result<Wei, AmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(AmountError::Empty);
    }

    let (whole, frac) = match input.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (input, ""),
    };
    if whole.is_empty() && frac.is_empty() {
        return Err(AmountError::Empty);
    }
    if !whole.chars().all(|c| c.is_ascii_digit()) || !frac.chars().all(|c| c.is_ascii_digit()) {
        return Err(AmountError::InvalidDigit(input.to_string()));
    }
    if frac.len() > ETHER_DECIMALS {
        return Err(AmountError::TooPrecise(frac.len()));
    }

    let whole_wei = if whole.is_empty() {
        0
    } else {
        whole
            .parse::<u128>()
            .map_err(|_| AmountError::Overflow)?
            .checked_mul(WEI_PER_ETHER)
            .ok_or(AmountError::Overflow)?
    };

    let frac_wei = if frac.is_empty() {
        0
    } else {
        // Right-pad to 18 digits: "001" -> 001000000000000000
        let padded = format!("{frac:0<width$}", width = ETHER_DECIMALS);
        padded.parse::<u128>().map_err(|_| AmountError::Overflow)?
    };

    whole_wei
        .checked_add(frac_wei)
        .map(Wei)
        .ok_or(AmountError::Overflow)
}

/// Format a wei amount as ether with exactly `decimals` fractional digits,
/// rounding half up. `decimals` above 18 is clamped.
pub fn format_ether(amount: Wei, decimals: usize) -> String {
    let decimals = decimals.min(ETHER_DECIMALS);
    let unit = 10u128.pow((ETHER_DECIMALS - decimals) as u32);
    let rounded = amount.0.saturating_add(unit / 2) / unit;
    if decimals == 0 {
        return rounded.to_string();
    }
    let scale = 10u128.pow(decimals as u32);
    let whole = rounded / scale;
    let frac = rounded % scale;
    format!("{whole}.{frac:0width$}", width = decimals)
}

/// Format an amount for display, e.g. `0.003 ETH`.
pub fn format_amount(amount: Wei, decimals: usize) -> String {
    format!("{} {SYMBOL}", format_ether(amount, decimals))
}

impl fmt::Display for Wei {
    /// Full precision with trailing zeros trimmed: `0.003 ETH`, `1 ETH`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let full = format_ether(*self, ETHER_DECIMALS);
        let trimmed = full.trim_end_matches('0').trim_end_matches('.');
        write!(f, "{trimmed} {SYMBOL}")
    }
}

impl FromStr for Wei {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_ether(s)
    }
}
