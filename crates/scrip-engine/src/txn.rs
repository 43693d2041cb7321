//! Staged balance mutations
//!
//! Operations validate and stage every balance write against a
//! [`BalanceTxn`] overlay before a single [`commit`](BalanceTxn::commit)
//! drains the staged records into the table. An error anywhere before the
//! commit point drops the overlay and leaves the table untouched, which is
//! what makes each operation all-or-nothing.

use scrip_core::{AccountName, Asset, BalanceRecord, BalanceStore, LedgerError, Result, SymbolCode};
use std::collections::BTreeMap;

/// Write overlay over a balance table, scoped to one symbol code.
///
/// Reads fall through to the table; staged writes shadow it, so a debit
/// sees an earlier credit staged in the same operation.
pub struct BalanceTxn<'a, B: BalanceStore> {
    store: &'a mut B,
    code: SymbolCode,
    // Staged record plus whether its key was absent from the table.
    staged: BTreeMap<AccountName, (BalanceRecord, bool)>,
}

impl<'a, B: BalanceStore> BalanceTxn<'a, B> {
    /// Open an overlay over `store` for records of `code`.
    pub fn new(store: &'a mut B, code: SymbolCode) -> Self {
        Self {
            store,
            code,
            staged: BTreeMap::new(),
        }
    }

    /// The record as this transaction currently sees it.
    pub fn effective(&self, owner: &AccountName) -> Option<BalanceRecord> {
        if let Some((record, _)) = self.staged.get(owner) {
            return Some(record.clone());
        }
        self.store.get(owner, self.code)
    }

    /// Stage a debit of `quantity` from `owner`.
    ///
    /// Fails with `NoBalanceRecord` if the owner has never held this symbol
    /// and with `Overdrawn` if the effective balance cannot cover it.
    pub fn debit(&mut self, owner: &AccountName, quantity: Asset) -> Result<()> {
        debug_assert_eq!(quantity.code(), self.code);
        let mut record = self
            .effective(owner)
            .ok_or_else(|| LedgerError::NoBalanceRecord {
                owner: owner.clone(),
                code: self.code,
            })?;
        if record.balance.amount < quantity.amount {
            return Err(LedgerError::Overdrawn {
                owner: owner.clone(),
                balance: record.balance,
                needed: quantity,
            });
        }
        record.balance = record.balance.checked_sub(quantity)?;
        let created = self.was_created(owner);
        self.staged.insert(owner.clone(), (record, created));
        Ok(())
    }

    /// Stage a credit of `quantity` to `owner`, creating the record if the
    /// owner has never held this symbol.
    ///
    /// Returns whether the record is new to the table, so the caller can
    /// account for its storage.
    pub fn credit(&mut self, owner: &AccountName, quantity: Asset) -> Result<bool> {
        debug_assert_eq!(quantity.code(), self.code);
        let (mut record, created) = match self.staged.get(owner) {
            Some(entry) => entry.clone(),
            None => match self.store.get(owner, self.code) {
                Some(record) => (record, false),
                None => (
                    BalanceRecord {
                        owner: owner.clone(),
                        balance: Asset::zero(quantity.symbol),
                        gateway: None,
                    },
                    true,
                ),
            },
        };
        record.balance = record.balance.checked_add(quantity)?;
        self.staged.insert(owner.clone(), (record, created));
        Ok(created)
    }

    /// Drain every staged record into the table.
    pub fn commit(self) {
        for (record, created) in self.staged.into_values() {
            if created {
                self.store.insert(record);
            } else {
                self.store.update(record);
            }
        }
    }

    fn was_created(&self, owner: &AccountName) -> bool {
        self.staged
            .get(owner)
            .is_some_and(|(_, created)| *created)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryBalanceStore;
    use assert_matches::assert_matches;
    use scrip_core::Symbol;

    fn ndx(amount: i64) -> Asset {
        Asset {
            amount,
            symbol: "3,NDX".parse::<Symbol>().unwrap(),
        }
    }

    fn store_with(owner: &str, amount: i64) -> MemoryBalanceStore {
        let mut store = MemoryBalanceStore::new();
        store.insert(BalanceRecord {
            owner: AccountName::from(owner),
            balance: ndx(amount),
            gateway: None,
        });
        store
    }

    #[test]
    fn staged_writes_shadow_the_table_until_commit() {
        let mut store = store_with("alice", 10_000);
        let alice = AccountName::from("alice");
        let code = ndx(0).code();

        let mut txn = BalanceTxn::new(&mut store, code);
        txn.debit(&alice, ndx(4_000)).unwrap();
        assert_eq!(txn.effective(&alice).unwrap().balance, ndx(6_000));

        // Nothing visible outside the overlay yet.
        drop(txn);
        assert_eq!(store.get(&alice, code).unwrap().balance, ndx(10_000));

        let mut txn = BalanceTxn::new(&mut store, code);
        txn.debit(&alice, ndx(4_000)).unwrap();
        txn.commit();
        assert_eq!(store.get(&alice, code).unwrap().balance, ndx(6_000));
    }

    #[test]
    fn debit_requires_an_existing_record() {
        let mut store = MemoryBalanceStore::new();
        let mut txn = BalanceTxn::new(&mut store, ndx(0).code());
        assert_matches!(
            txn.debit(&AccountName::from("ghost"), ndx(1)),
            Err(LedgerError::NoBalanceRecord { owner, .. }) if owner.as_str() == "ghost"
        );
    }

    #[test]
    fn overdraw_is_rejected_against_the_effective_balance() {
        let mut store = store_with("alice", 5_000);
        let alice = AccountName::from("alice");
        let mut txn = BalanceTxn::new(&mut store, ndx(0).code());
        txn.debit(&alice, ndx(3_000)).unwrap();
        assert_matches!(
            txn.debit(&alice, ndx(3_000)),
            Err(LedgerError::Overdrawn { balance, needed, .. })
                if balance == ndx(2_000) && needed == ndx(3_000)
        );
    }

    #[test]
    fn credit_reports_record_creation_once() {
        let mut store = MemoryBalanceStore::new();
        let bob = AccountName::from("bob");
        let code = ndx(0).code();

        let mut txn = BalanceTxn::new(&mut store, code);
        assert!(txn.credit(&bob, ndx(2_000)).unwrap());
        // A second credit in the same operation still targets a new record.
        assert!(txn.credit(&bob, ndx(1_000)).unwrap());
        // Debiting the staged record keeps the creation mark.
        txn.debit(&bob, ndx(500)).unwrap();
        txn.commit();

        assert_eq!(store.get(&bob, code).unwrap().balance, ndx(2_500));
        let mut txn = BalanceTxn::new(&mut store, code);
        assert!(!txn.credit(&bob, ndx(1)).unwrap());
    }

    #[test]
    fn credit_then_full_debit_still_creates_the_record() {
        let mut store = MemoryBalanceStore::new();
        let bob = AccountName::from("bob");
        let code = ndx(0).code();

        let mut txn = BalanceTxn::new(&mut store, code);
        txn.credit(&bob, ndx(1_000)).unwrap();
        txn.debit(&bob, ndx(1_000)).unwrap();
        txn.commit();

        // Zero balance persists as a record.
        assert_eq!(store.get(&bob, code).unwrap().balance, ndx(0));
    }
}
