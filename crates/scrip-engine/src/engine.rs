//! Ledger state transitions
//!
//! [`TokenEngine`] applies the five operations over host-provided tables:
//! `create`, `issue`, `retire`, `transfer`, and `register_account`. Every
//! operation follows the same shape: authenticate the explicit caller,
//! validate inputs, stage all writes, commit, then emit notifications. An
//! error before the commit point leaves both tables untouched.

use crate::store::{MemoryBalanceStore, MemorySupplyStore};
use crate::txn::BalanceTxn;
use scrip_core::{
    checks, AccountEffects, AccountName, Asset, BalanceRecord, BalanceStore, HostEffects,
    LedgerConfig, LedgerError, Result, SupplyRecord, SupplyStore, TransferNotice,
};
use tracing::{debug, info};

/// The accounting engine: five state transitions over two keyed tables.
///
/// Storage-generic so hosts can inject durable tables. The caller identity
/// is an explicit parameter on every operation; per-invocation host facts
/// (co-signatures, the identity registry, notice delivery) arrive through
/// the effect traits.
#[derive(Debug)]
pub struct TokenEngine<S, B> {
    config: LedgerConfig,
    supplies: S,
    balances: B,
}

impl TokenEngine<MemorySupplyStore, MemoryBalanceStore> {
    /// Engine over fresh, empty in-memory tables.
    pub fn in_memory(config: LedgerConfig) -> Result<Self> {
        Self::new(config, MemorySupplyStore::new(), MemoryBalanceStore::new())
    }
}

impl<S: SupplyStore, B: BalanceStore> TokenEngine<S, B> {
    /// Wire an engine over host-provided tables.
    ///
    /// The configuration is validated once here; operations trust it
    /// afterwards.
    pub fn new(config: LedgerConfig, supplies: S, balances: B) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            supplies,
            balances,
        })
    }

    /// The deployment configuration.
    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    // === State transitions ===

    /// Create the supply record for the configured symbol.
    ///
    /// Runs once per deployment: the caller must be the configured
    /// administrator, and a second call is rejected, not idempotent.
    pub fn create(&mut self, caller: &AccountName, issuer: &AccountName) -> Result<()> {
        checks::ensure_authorized(caller, &self.config.administrator)?;
        let symbol = self.config.symbol;
        if self.supplies.exists(symbol.code) {
            return Err(LedgerError::AlreadyExists { symbol });
        }
        let record = SupplyRecord {
            supply: Asset::zero(symbol),
            max_supply: self.config.max_supply,
            issuer: issuer.clone(),
        };
        info!(symbol = %symbol, issuer = %issuer, max_supply = %record.max_supply, "token created");
        self.supplies.insert(record);
        Ok(())
    }

    /// Mint `quantity` into circulation.
    ///
    /// The issuer is always credited first, so every unit's origin is
    /// attributable to the issuer's balance history. When `to` differs from
    /// the issuer, the same operation then moves the freshly minted amount
    /// to `to` and notifies both parties after commit; issuer authorization
    /// is not re-checked for that internal leg.
    pub fn issue(
        &mut self,
        effects: &impl HostEffects,
        caller: &AccountName,
        to: &AccountName,
        quantity: Asset,
        memo: &str,
    ) -> Result<()> {
        checks::ensure_symbol_well_formed(quantity.symbol)?;
        checks::ensure_memo(memo)?;
        let stats = self
            .supplies
            .get(quantity.code())
            .ok_or(LedgerError::TokenNotFound {
                code: quantity.code(),
            })?;
        checks::ensure_authorized(caller, &stats.issuer)?;
        checks::ensure_well_formed(quantity)?;
        checks::ensure_positive(quantity, "issue")?;
        checks::ensure_symbol(quantity, stats.symbol())?;
        if quantity.amount > stats.available() {
            return Err(LedgerError::SupplyCapExceeded {
                requested: quantity,
                available: Asset {
                    amount: stats.available(),
                    symbol: stats.symbol(),
                },
            });
        }
        let forwarded = to != &stats.issuer;
        if forwarded && !effects.account_exists(to) {
            return Err(LedgerError::UnknownAccount {
                account: to.clone(),
            });
        }

        let mut updated = stats.clone();
        updated.supply = updated.supply.checked_add(quantity)?;
        let new_supply = updated.supply;

        let mut txn = BalanceTxn::new(&mut self.balances, quantity.code());
        let issuer_record_created = txn.credit(&stats.issuer, quantity)?;
        let mut to_record_created = false;
        if forwarded {
            txn.debit(&stats.issuer, quantity)?;
            to_record_created = txn.credit(to, quantity)?;
        }
        self.supplies.update(updated);
        txn.commit();

        if issuer_record_created {
            debug!(owner = %stats.issuer, payer = %stats.issuer, "balance record created");
        }
        if forwarded {
            if to_record_created {
                let payer = storage_payer(effects, &stats.issuer, to);
                debug!(owner = %to, payer = %payer, "balance record created");
            }
            let notice = TransferNotice {
                from: stats.issuer.clone(),
                to: to.clone(),
                quantity,
                memo: memo.to_owned(),
            };
            effects.notify(&notice.from, &notice);
            effects.notify(&notice.to, &notice);
        }
        debug!(to = %to, quantity = %quantity, supply = %new_supply, "issue committed");
        Ok(())
    }

    /// Burn `quantity` out of circulation from the issuer's own balance.
    pub fn retire(&mut self, caller: &AccountName, quantity: Asset, memo: &str) -> Result<()> {
        checks::ensure_symbol_well_formed(quantity.symbol)?;
        checks::ensure_memo(memo)?;
        let stats = self
            .supplies
            .get(quantity.code())
            .ok_or(LedgerError::TokenNotFound {
                code: quantity.code(),
            })?;
        checks::ensure_authorized(caller, &stats.issuer)?;
        checks::ensure_well_formed(quantity)?;
        checks::ensure_positive(quantity, "retire")?;
        checks::ensure_symbol(quantity, stats.symbol())?;

        let mut txn = BalanceTxn::new(&mut self.balances, quantity.code());
        txn.debit(&stats.issuer, quantity)?;

        let mut updated = stats;
        updated.supply = updated.supply.checked_sub(quantity)?;
        // The issuer cannot hold more than the outstanding supply, so the
        // balance underflow check above already rules this out.
        debug_assert!(updated.supply.amount >= 0);
        let new_supply = updated.supply;
        self.supplies.update(updated);
        txn.commit();

        debug!(quantity = %quantity, supply = %new_supply, "retire committed");
        Ok(())
    }

    /// Move `quantity` from `from` to `to`, exact amount, no fees.
    ///
    /// Both parties are notified after the mutation commits. If `to` has
    /// never held the symbol its record is created, with storage charged to
    /// `to` when it co-signed the invocation and to `from` otherwise.
    pub fn transfer(
        &mut self,
        effects: &impl HostEffects,
        caller: &AccountName,
        from: &AccountName,
        to: &AccountName,
        quantity: Asset,
        memo: &str,
    ) -> Result<()> {
        if from == to {
            return Err(LedgerError::SelfTransfer {
                account: from.clone(),
            });
        }
        checks::ensure_authorized(caller, from)?;
        if !effects.account_exists(to) {
            return Err(LedgerError::UnknownAccount {
                account: to.clone(),
            });
        }
        let stats = self
            .supplies
            .get(quantity.code())
            .ok_or(LedgerError::TokenNotFound {
                code: quantity.code(),
            })?;
        checks::ensure_well_formed(quantity)?;
        checks::ensure_positive(quantity, "transfer")?;
        checks::ensure_symbol(quantity, stats.symbol())?;
        checks::ensure_memo(memo)?;

        let mut txn = BalanceTxn::new(&mut self.balances, quantity.code());
        txn.debit(from, quantity)?;
        let created = txn.credit(to, quantity)?;
        txn.commit();

        if created {
            let payer = storage_payer(effects, from, to);
            debug!(owner = %to, payer = %payer, "balance record created");
        }
        let notice = TransferNotice {
            from: from.clone(),
            to: to.clone(),
            quantity,
            memo: memo.to_owned(),
        };
        effects.notify(from, &notice);
        effects.notify(to, &notice);
        debug!(from = %from, to = %to, quantity = %quantity, "transfer committed");
        Ok(())
    }

    /// Register `user` with an auxiliary gateway identity and a fresh
    /// balance record for the configured symbol.
    ///
    /// `initial_balance` must be zero: units enter circulation only through
    /// `issue`, which keeps the sum of balances equal to the supply. Both
    /// identity slots are collision-checked against the whole table before
    /// the record is inserted.
    pub fn register_account(
        &mut self,
        caller: &AccountName,
        user: &AccountName,
        initial_balance: Asset,
        gateway: &AccountName,
    ) -> Result<()> {
        checks::ensure_authorized(caller, user)?;
        checks::ensure_symbol_well_formed(initial_balance.symbol)?;
        checks::ensure_symbol(initial_balance, self.config.symbol)?;
        if initial_balance.amount != 0 {
            return Err(LedgerError::InvalidQuantity {
                reason: "initial balance must be zero; units enter circulation through issue"
                    .to_owned(),
            });
        }
        let code = self.config.symbol.code;
        if self.balances.exists(user, code) {
            return Err(LedgerError::CollisionOnRegister {
                account: user.clone(),
            });
        }
        let gateway_taken = self.balances.scan().any(|record| {
            record.code() == code
                && (record.owner == *gateway || record.gateway.as_ref() == Some(gateway))
        });
        if gateway_taken {
            return Err(LedgerError::CollisionOnRegister {
                account: gateway.clone(),
            });
        }
        self.balances.insert(BalanceRecord {
            owner: user.clone(),
            balance: Asset::zero(self.config.symbol),
            gateway: Some(gateway.clone()),
        });
        debug!(user = %user, gateway = %gateway, "account registered");
        Ok(())
    }

    // === Read-only queries ===

    /// Supply record for the configured symbol, if created.
    pub fn stats(&self) -> Option<SupplyRecord> {
        self.supplies.get(self.config.symbol.code)
    }

    /// Current balance of `owner` in the configured symbol.
    pub fn balance_of(&self, owner: &AccountName) -> Option<Asset> {
        self.balances
            .get(owner, self.config.symbol.code)
            .map(|record| record.balance)
    }

    /// Sum of every balance of the configured symbol, widened so the sum
    /// itself cannot overflow.
    pub fn total_balances(&self) -> i128 {
        let code = self.config.symbol.code;
        self.balances
            .scan()
            .filter(|record| record.code() == code)
            .map(|record| i128::from(record.balance.amount))
            .sum()
    }

    /// Whether the issued supply equals the sum of all balances.
    pub fn conservation_holds(&self) -> bool {
        let supply = self
            .stats()
            .map_or(0, |stats| i128::from(stats.supply.amount));
        self.total_balances() == supply
    }
}

/// Who pays for a newly created destination record: `to` if it co-signed
/// the invocation, otherwise `from`.
fn storage_payer(
    effects: &impl AccountEffects,
    from: &AccountName,
    to: &AccountName,
) -> AccountName {
    if effects.is_co_signed(to) {
        to.clone()
    } else {
        from.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::CallContext;
    use assert_matches::assert_matches;

    fn admin() -> AccountName {
        LedgerConfig::default().administrator
    }

    #[test]
    fn construction_rejects_inconsistent_config() {
        let mut config = LedgerConfig::default();
        config.max_supply.amount = 0;
        assert_matches!(
            TokenEngine::in_memory(config),
            Err(LedgerError::Config { .. })
        );
    }

    #[test]
    fn create_requires_the_administrator() {
        let mut engine = TokenEngine::in_memory(LedgerConfig::default()).unwrap();
        let issuer = AccountName::from("issuer");
        assert_matches!(
            engine.create(&AccountName::from("mallory"), &issuer),
            Err(LedgerError::Unauthorized { .. })
        );
        assert!(engine.stats().is_none());
        engine.create(&admin(), &issuer).unwrap();
        assert_eq!(engine.stats().unwrap().issuer, issuer);
    }

    #[test]
    fn create_runs_exactly_once() {
        let mut engine = TokenEngine::in_memory(LedgerConfig::default()).unwrap();
        let issuer = AccountName::from("issuer");
        engine.create(&admin(), &issuer).unwrap();
        let before = engine.stats().unwrap();
        assert_matches!(
            engine.create(&admin(), &AccountName::from("other")),
            Err(LedgerError::AlreadyExists { .. })
        );
        assert_eq!(engine.stats().unwrap(), before);
    }

    #[test]
    fn storage_payer_follows_the_co_signature() {
        let ctx = CallContext::new().with_co_signer("carol");
        let alice = AccountName::from("alice");
        let bob = AccountName::from("bob");
        let carol = AccountName::from("carol");
        // The destination pays for its own record only when it co-signed.
        assert_eq!(storage_payer(&ctx, &alice, &carol), carol);
        assert_eq!(storage_payer(&ctx, &alice, &bob), alice);
    }
}
