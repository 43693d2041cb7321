//! Durable keyed-table seams
//!
//! The host owns persistence; the engine sees two keyed tables of plain
//! records. Writes are infallible at this seam: the engine only writes
//! records every precondition has already admitted, and a backend that
//! cannot apply a write must abort the whole invocation host-side rather
//! than let partial state become visible.

use crate::records::{BalanceRecord, SupplyRecord};
use crate::types::{AccountName, SymbolCode};

/// Keyed table of supply records, one per created symbol code.
pub trait SupplyStore {
    /// Fetch a copy of the record for `code`.
    fn get(&self, code: SymbolCode) -> Option<SupplyRecord>;

    /// Whether a record exists for `code`.
    fn exists(&self, code: SymbolCode) -> bool {
        self.get(code).is_some()
    }

    /// Insert a record under a key that is not yet present.
    fn insert(&mut self, record: SupplyRecord);

    /// Replace the record under a key that is present.
    fn update(&mut self, record: SupplyRecord);
}

/// Keyed table of balance records, one per `(owner, symbol code)` pair.
pub trait BalanceStore {
    /// Fetch a copy of the record for `(owner, code)`.
    fn get(&self, owner: &AccountName, code: SymbolCode) -> Option<BalanceRecord>;

    /// Whether a record exists for `(owner, code)`.
    fn exists(&self, owner: &AccountName, code: SymbolCode) -> bool {
        self.get(owner, code).is_some()
    }

    /// Insert a record under a key that is not yet present.
    fn insert(&mut self, record: BalanceRecord);

    /// Replace the record under a key that is present.
    fn update(&mut self, record: BalanceRecord);

    /// Visit every record in the table.
    ///
    /// Only the registration collision check walks the table; the hot paths
    /// are all point lookups.
    fn scan(&self) -> Box<dyn Iterator<Item = BalanceRecord> + '_>;
}
