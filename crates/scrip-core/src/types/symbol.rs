//! Symbol codes and symbols
//!
//! A symbol is a token's type identity: a short uppercase ticker code plus a
//! fixed decimal precision. All asset arithmetic requires matching symbols,
//! so both halves are `Copy` and cheap to compare.

use crate::errors::{LedgerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ticker code of a symbol: 1 to 7 characters `A`..`Z`.
///
/// Codes are packed little-endian into a `u64`, which keeps them `Copy`,
/// totally ordered, and directly usable as the supply-table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SymbolCode(u64);

impl SymbolCode {
    /// Maximum number of characters in a code.
    pub const MAX_LEN: usize = 7;

    /// Parse and validate a code from its string form.
    pub fn new(code: &str) -> Result<Self> {
        let bytes = code.as_bytes();
        if bytes.is_empty() || bytes.len() > Self::MAX_LEN {
            return Err(LedgerError::InvalidSymbol {
                reason: format!(
                    "code must be 1..={} characters, got {}",
                    Self::MAX_LEN,
                    bytes.len()
                ),
            });
        }
        let mut raw = 0u64;
        for (i, &b) in bytes.iter().enumerate() {
            if !b.is_ascii_uppercase() {
                return Err(LedgerError::InvalidSymbol {
                    reason: format!("code may only contain A-Z, got `{code}`"),
                });
            }
            raw |= u64::from(b) << (8 * i);
        }
        Ok(Self(raw))
    }

    /// Wrap a raw packed value without validation.
    ///
    /// Host envelopes that decode codes off the wire use this; validity then
    /// surfaces through [`SymbolCode::is_valid`] at operation entry.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// The packed representation, used as the supply-table key.
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Whether the packed form is well-formed: a nonempty run of `A`..`Z`
    /// bytes followed only by zero padding.
    pub fn is_valid(&self) -> bool {
        let bytes = self.0.to_le_bytes();
        let mut i = 0;
        while i < bytes.len() && bytes[i] != 0 {
            if i >= Self::MAX_LEN || !bytes[i].is_ascii_uppercase() {
                return false;
            }
            i += 1;
        }
        i > 0 && bytes[i..].iter().all(|&b| b == 0)
    }

    /// Number of characters in the code.
    pub fn len(&self) -> usize {
        self.0.to_le_bytes().iter().take_while(|&&b| b != 0).count()
    }

    /// Whether the code holds no characters at all.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in self.0.to_le_bytes() {
            if b == 0 {
                break;
            }
            write!(f, "{}", b as char)?;
        }
        Ok(())
    }
}

impl FromStr for SymbolCode {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for SymbolCode {
    type Error = LedgerError;

    fn try_from(s: String) -> Result<Self> {
        Self::new(&s)
    }
}

impl From<SymbolCode> for String {
    fn from(code: SymbolCode) -> Self {
        code.to_string()
    }
}

/// A token's type identity: ticker code plus fixed decimal precision.
///
/// The string form is `"<precision>,<code>"`, e.g. `"3,NDX"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol {
    /// Ticker code.
    pub code: SymbolCode,
    /// Number of decimal places carried by amounts of this symbol.
    pub precision: u8,
}

impl Symbol {
    /// Largest representable precision: `10^18` is the biggest power of ten
    /// that fits in an `i64` subunit amount.
    pub const MAX_PRECISION: u8 = 18;

    /// Build a validated symbol.
    pub fn new(code: SymbolCode, precision: u8) -> Result<Self> {
        let symbol = Self { code, precision };
        if !symbol.is_valid() {
            return Err(LedgerError::InvalidSymbol {
                reason: format!("`{symbol}` is not a well-formed symbol"),
            });
        }
        Ok(symbol)
    }

    /// Whether code and precision are both well-formed.
    pub fn is_valid(&self) -> bool {
        self.code.is_valid() && self.precision <= Self::MAX_PRECISION
    }

    /// Number of subunits in one whole unit (`10^precision`).
    pub fn scale(&self) -> i64 {
        10i64.pow(u32::from(self.precision.min(Self::MAX_PRECISION)))
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.precision, self.code)
    }
}

impl FromStr for Symbol {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self> {
        let (precision_str, code_str) = s.split_once(',').ok_or_else(|| {
            LedgerError::InvalidSymbol {
                reason: format!("expected `<precision>,<code>`, got `{s}`"),
            }
        })?;
        let precision = precision_str
            .parse::<u8>()
            .map_err(|_| LedgerError::InvalidSymbol {
                reason: format!("precision `{precision_str}` is not a number"),
            })?;
        Self::new(SymbolCode::new(code_str)?, precision)
    }
}

impl TryFrom<String> for Symbol {
    type Error = LedgerError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.to_string()
    }
}
