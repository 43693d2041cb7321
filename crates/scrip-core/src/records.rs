//! Durable record types
//!
//! The engine reads and writes exactly two kinds of record: one
//! [`SupplyRecord`] per created symbol, and one [`BalanceRecord`] per
//! `(owner, symbol code)` pair that has ever held the token. Records are
//! plain serializable values; the tables that hold them live behind the
//! [`effects`](crate::effects) seams.

use crate::types::{AccountName, Asset, Symbol, SymbolCode};
use serde::{Deserialize, Serialize};

/// Per-symbol supply ledger entry, created once by `create` and updated by
/// `issue` and `retire`.
///
/// `supply` and `max_supply` always carry the same symbol, and
/// `0 <= supply.amount <= max_supply.amount` between operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplyRecord {
    /// Amount currently in circulation.
    pub supply: Asset,
    /// Immutable cap fixed at creation.
    pub max_supply: Asset,
    /// The only identity allowed to issue and retire this symbol.
    pub issuer: AccountName,
}

impl SupplyRecord {
    /// The symbol this record governs.
    pub fn symbol(&self) -> Symbol {
        self.supply.symbol
    }

    /// The supply-table key.
    pub fn code(&self) -> SymbolCode {
        self.supply.symbol.code
    }

    /// Headroom left under the cap, in subunits.
    pub fn available(&self) -> i64 {
        self.max_supply.amount.saturating_sub(self.supply.amount)
    }
}

/// Per-account balance entry for one symbol.
///
/// Balances never go negative, and a record once created persists even at
/// zero balance: deletion would erase the storage-payer assignment and the
/// gateway registration along with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceRecord {
    /// Owning account; together with the symbol code, the table key.
    pub owner: AccountName,
    /// Current holdings, non-negative.
    pub balance: Asset,
    /// Auxiliary identity slot filled by explicit registration, `None` for
    /// records created as a side effect of transfers.
    pub gateway: Option<AccountName>,
}

impl BalanceRecord {
    /// The symbol-code half of the table key.
    pub fn code(&self) -> SymbolCode {
        self.balance.symbol.code
    }
}
