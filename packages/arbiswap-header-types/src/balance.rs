use crate::Account;
use ethers::{types::U256, utils::ConversionError};
use std::collections::HashMap;

/// Decimals of the native currency.
pub const ETHER_DECIMALS: usize = 18;

/// Decimal digits of `U256::MAX`; more significant digits than this are exact.
pub const MAX_SIGNIFICANT_DIGITS: usize = 78;

/// Known native balances. An account without an entry is still loading.
pub type Balances = HashMap<Account, EthBalance>;

#[derive(thiserror::Error, Debug)]
pub enum BalanceError {
    #[error("conversion error: {0}")]
    Conversion(#[from] ConversionError),
    #[error("invalid quantity {0:?}: {1}")]
    Quantity(String, String),
}

/// A native currency amount, in wei.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct EthBalance(U256);

impl EthBalance {
    pub fn from_wei(wei: U256) -> Self {
        Self(wei)
    }

    pub fn wei(&self) -> U256 {
        self.0
    }

    /// Parses a decimal ether amount such as `"1.5"`.
    pub fn parse_ether(ether: &str) -> Result<Self, BalanceError> {
        Ok(Self(ethers::utils::parse_ether(ether)?))
    }

    /// Parses a JSON-RPC hex quantity, as returned by `eth_getBalance`.
    pub fn from_quantity(quantity: &str) -> Result<Self, BalanceError> {
        let hex = quantity.strip_prefix("0x").unwrap_or(quantity);
        if hex.is_empty() {
            return Err(BalanceError::Quantity(quantity.to_owned(), "empty".to_owned()));
        }
        U256::from_str_radix(hex, 16)
            .map(Self)
            .map_err(|err| BalanceError::Quantity(quantity.to_owned(), format!("{:?}", err)))
    }

    /// Ether amount rounded half-up to `digits` significant digits, in plain
    /// notation without trailing zeros (`1.23456` gives `"1.235"` for 4 digits).
    ///
    /// The value is rounded to `digits + 1` places first, like Uniswap SDK
    /// amounts, so `1.23449` also prints as `"1.235"`. `digits` is clamped to
    /// `1..=MAX_SIGNIFICANT_DIGITS`.
    pub fn to_significant(&self, digits: usize) -> String {
        if self.0.is_zero() {
            return "0".to_owned();
        }
        let digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
        let raw = self.0.to_string();
        let mut mantissa: Vec<u8> = raw.bytes().map(|b| b - b'0').collect();
        let mut exponent = 0;
        round_half_up(&mut mantissa, &mut exponent, digits + 1);
        round_half_up(&mut mantissa, &mut exponent, digits);

        let mut units: String = mantissa.iter().map(|d| char::from(b'0' + d)).collect();
        units.extend(std::iter::repeat('0').take(exponent));
        shift_decimals(&units, ETHER_DECIMALS)
    }
}

impl From<U256> for EthBalance {
    fn from(wei: U256) -> Self {
        Self(wei)
    }
}

/// `"1.235 ETH"`
pub fn format_balance(balance: &EthBalance, digits: usize, symbol: &str) -> String {
    format!("{} {}", balance.to_significant(digits), symbol)
}

/// Keeps the `keep` leading digits of `mantissa`, moving the dropped ones into
/// `exponent` (a count of trailing zeros).
fn round_half_up(mantissa: &mut Vec<u8>, exponent: &mut usize, keep: usize) {
    if mantissa.len() <= keep {
        return;
    }
    let round_up = mantissa[keep] >= 5;
    *exponent += mantissa.len() - keep;
    mantissa.truncate(keep);
    if !round_up {
        return;
    }
    for digit in mantissa.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return;
        }
    }
    // all nines
    mantissa.insert(0, 1);
    mantissa.pop();
    *exponent += 1;
}

/// Renders an integer amount of base units with `decimals` decimals.
fn shift_decimals(units: &str, decimals: usize) -> String {
    let (whole, fraction) = if units.len() > decimals {
        let (whole, fraction) = units.split_at(units.len() - decimals);
        (whole.to_owned(), fraction.to_owned())
    } else {
        ("0".to_owned(), format!("{}{}", "0".repeat(decimals - units.len()), units))
    };
    match fraction.trim_end_matches('0') {
        "" => whole,
        fraction => format!("{}.{}", whole, fraction),
    }
}
