//! Asset amounts
//!
//! An [`Asset`] pairs a signed subunit amount with the [`Symbol`] it is
//! denominated in. Arithmetic is checked and symbol-safe: mixing symbols or
//! leaving the representable range is an error, never a wrap.

use crate::errors::{LedgerError, Result};
use crate::types::{Symbol, SymbolCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A quantity of one symbol, held as an integer count of subunits.
///
/// The string form renders the amount at the symbol's precision, e.g.
/// `Asset { amount: 50_000, symbol: "3,NDX" }` displays as `"50.000 NDX"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Asset {
    /// Amount in subunits of `symbol`.
    pub amount: i64,
    /// The symbol the amount is denominated in.
    pub symbol: Symbol,
}

impl Asset {
    /// Largest magnitude an amount may take, leaving headroom below
    /// `i64::MAX` so sums of two in-range amounts cannot wrap.
    pub const MAX_AMOUNT: i64 = (1 << 62) - 1;

    /// Build a validated asset.
    pub fn new(amount: i64, symbol: Symbol) -> Result<Self> {
        if !symbol.is_valid() {
            return Err(LedgerError::InvalidSymbol {
                reason: format!("`{symbol}` is not a well-formed symbol"),
            });
        }
        Self::bounded(amount, symbol)
    }

    /// Zero amount of `symbol`.
    pub const fn zero(symbol: Symbol) -> Self {
        Self { amount: 0, symbol }
    }

    /// Whether the amount is in range and the symbol well-formed.
    pub fn is_valid(&self) -> bool {
        self.amount >= -Self::MAX_AMOUNT
            && self.amount <= Self::MAX_AMOUNT
            && self.symbol.is_valid()
    }

    /// Whether the amount is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.amount > 0
    }

    /// Shorthand for the symbol's ticker code.
    pub fn code(&self) -> SymbolCode {
        self.symbol.code
    }

    /// Same-symbol checked addition.
    pub fn checked_add(self, other: Asset) -> Result<Asset> {
        self.ensure_same_symbol(other)?;
        let amount = self
            .amount
            .checked_add(other.amount)
            .ok_or(LedgerError::AmountOverflow)?;
        Self::bounded(amount, self.symbol)
    }

    /// Same-symbol checked subtraction.
    pub fn checked_sub(self, other: Asset) -> Result<Asset> {
        self.ensure_same_symbol(other)?;
        let amount = self
            .amount
            .checked_sub(other.amount)
            .ok_or(LedgerError::AmountOverflow)?;
        Self::bounded(amount, self.symbol)
    }

    fn ensure_same_symbol(self, other: Asset) -> Result<()> {
        if self.symbol == other.symbol {
            Ok(())
        } else {
            Err(LedgerError::SymbolMismatch {
                expected: self.symbol,
                found: other.symbol,
            })
        }
    }

    fn bounded(amount: i64, symbol: Symbol) -> Result<Asset> {
        if (-Self::MAX_AMOUNT..=Self::MAX_AMOUNT).contains(&amount) {
            Ok(Self { amount, symbol })
        } else {
            Err(LedgerError::AmountOverflow)
        }
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.amount < 0 { "-" } else { "" };
        let magnitude = self.amount.unsigned_abs();
        if self.symbol.precision == 0 {
            return write!(f, "{sign}{magnitude} {}", self.symbol.code);
        }
        let scale = self.symbol.scale().unsigned_abs();
        write!(
            f,
            "{sign}{whole}.{frac:0width$} {code}",
            whole = magnitude / scale,
            frac = magnitude % scale,
            width = usize::from(self.symbol.precision),
            code = self.symbol.code,
        )
    }
}

impl FromStr for Asset {
    type Err = LedgerError;

    /// Parse the display form, e.g. `"50.000 NDX"`.
    ///
    /// Precision is inferred from the number of fraction digits, so
    /// `"50.000 NDX"` and `"50 NDX"` denote assets of different symbols.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split_whitespace();
        let (amount_str, code_str) = match (parts.next(), parts.next(), parts.next()) {
            (Some(amount), Some(code), None) => (amount, code),
            _ => {
                return Err(LedgerError::InvalidQuantity {
                    reason: format!("expected `<amount> <code>`, got `{s}`"),
                })
            }
        };
        let code = SymbolCode::new(code_str)?;

        let (negative, digits) = match amount_str.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, amount_str),
        };
        let (whole_str, frac_str) = match digits.split_once('.') {
            Some((_, "")) | Some(("", _)) => {
                return Err(LedgerError::InvalidQuantity {
                    reason: format!("malformed amount `{amount_str}`"),
                })
            }
            Some((whole, frac)) => (whole, frac),
            None => (digits, ""),
        };
        if whole_str.is_empty()
            || !whole_str.bytes().all(|b| b.is_ascii_digit())
            || !frac_str.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(LedgerError::InvalidQuantity {
                reason: format!("malformed amount `{amount_str}`"),
            });
        }

        let precision =
            u8::try_from(frac_str.len()).map_err(|_| LedgerError::InvalidSymbol {
                reason: format!("{} fraction digits exceed the precision limit", frac_str.len()),
            })?;
        let symbol = Symbol::new(code, precision)?;

        let whole: i64 = whole_str.parse().map_err(|_| LedgerError::AmountOverflow)?;
        let frac: i64 = if frac_str.is_empty() {
            0
        } else {
            frac_str.parse().map_err(|_| LedgerError::AmountOverflow)?
        };
        let magnitude = whole
            .checked_mul(symbol.scale())
            .and_then(|v| v.checked_add(frac))
            .ok_or(LedgerError::AmountOverflow)?;
        Self::new(if negative { -magnitude } else { magnitude }, symbol)
    }
}

impl TryFrom<String> for Asset {
    type Error = LedgerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Asset> for String {
    fn from(asset: Asset) -> Self {
        asset.to_string()
    }
}
