//! In-memory table implementations
//!
//! Reference [`SupplyStore`] and [`BalanceStore`] backends over ordered maps.
//! Production hosts bring their own durable tables; these back the tests and
//! any embedding that keeps ledger state in process memory. Each instance is
//! fully isolated, so every test case constructs its own.

use scrip_core::{AccountName, BalanceRecord, BalanceStore, SupplyRecord, SupplyStore, SymbolCode};
use std::collections::BTreeMap;

/// Supply table keyed by packed symbol code.
#[derive(Debug, Clone, Default)]
pub struct MemorySupplyStore {
    records: BTreeMap<u64, SupplyRecord>,
}

impl MemorySupplyStore {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of created symbols.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no symbol has been created yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl SupplyStore for MemorySupplyStore {
    fn get(&self, code: SymbolCode) -> Option<SupplyRecord> {
        self.records.get(&code.raw()).cloned()
    }

    fn insert(&mut self, record: SupplyRecord) {
        self.records.insert(record.code().raw(), record);
    }

    fn update(&mut self, record: SupplyRecord) {
        self.records.insert(record.code().raw(), record);
    }
}

/// Balance table keyed by `(owner, packed symbol code)`.
#[derive(Debug, Clone, Default)]
pub struct MemoryBalanceStore {
    records: BTreeMap<(AccountName, u64), BalanceRecord>,
}

impl MemoryBalanceStore {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of balance records across all owners.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl BalanceStore for MemoryBalanceStore {
    fn get(&self, owner: &AccountName, code: SymbolCode) -> Option<BalanceRecord> {
        self.records.get(&(owner.clone(), code.raw())).cloned()
    }

    fn insert(&mut self, record: BalanceRecord) {
        self.records
            .insert((record.owner.clone(), record.code().raw()), record);
    }

    fn update(&mut self, record: BalanceRecord) {
        self.records
            .insert((record.owner.clone(), record.code().raw()), record);
    }

    fn scan(&self) -> Box<dyn Iterator<Item = BalanceRecord> + '_> {
        Box::new(self.records.values().cloned())
    }
}
