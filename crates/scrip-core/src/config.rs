//! Deployment configuration
//!
//! One ledger deployment serves one symbol. The configuration fixes that
//! symbol, the supply cap `create` will record for it, and the administrator
//! identity allowed to run `create` in the first place.

use crate::errors::{LedgerError, Result};
use crate::types::{AccountName, Asset, Symbol, SymbolCode};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Packed form of the default ticker code, `NDX`.
const DEFAULT_CODE: u64 = u64::from_le_bytes(*b"NDX\0\0\0\0\0");

/// Ledger deployment configuration.
///
/// Loaded from TOML:
///
/// ```toml
/// symbol = "3,NDX"
/// max_supply = "100000000.000 NDX"
/// administrator = "scrip.admin"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// The symbol this deployment serves.
    pub symbol: Symbol,
    /// Supply cap `create` records; immutable afterwards.
    pub max_supply: Asset,
    /// Identity allowed to run `create`.
    pub administrator: AccountName,
}

impl LedgerConfig {
    /// Parse from TOML text and validate.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| LedgerError::Config {
            reason: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file and validate.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| LedgerError::Config {
            reason: format!("{}: {e}", path.display()),
        })?;
        Self::from_toml_str(&text)
    }

    /// Check internal consistency.
    pub fn validate(&self) -> Result<()> {
        if !self.symbol.is_valid() {
            return Err(LedgerError::Config {
                reason: format!("symbol `{}` is malformed", self.symbol),
            });
        }
        if self.max_supply.symbol != self.symbol {
            return Err(LedgerError::Config {
                reason: format!(
                    "max supply is denominated in `{}`, expected `{}`",
                    self.max_supply.symbol, self.symbol
                ),
            });
        }
        if !self.max_supply.is_valid() || !self.max_supply.is_positive() {
            return Err(LedgerError::Config {
                reason: "max supply must be a positive in-range amount".to_owned(),
            });
        }
        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        let symbol = Symbol {
            code: SymbolCode::from_raw(DEFAULT_CODE),
            precision: 3,
        };
        Self {
            symbol,
            // 100,000,000.000 NDX
            max_supply: Asset {
                amount: 100_000_000_000,
                symbol,
            },
            administrator: AccountName::from("scrip.admin"),
        }
    }
}
