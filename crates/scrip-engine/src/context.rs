//! Call-scoped host context
//!
//! [`CallContext`] is the engine-side implementation of the host seams for a
//! single invocation: which identities co-signed it, which accounts the
//! host's identity registry can resolve, and a buffer capturing the notices
//! an operation emits after commit.

use parking_lot::Mutex;
use scrip_core::{AccountEffects, AccountName, NotifyEffects, TransferNotice};
use std::collections::BTreeSet;

/// Host facts for one invocation, plus notice capture.
///
/// Notices land in an internal buffer rather than a callback so embeddings
/// and tests can drain and route them once the operation returns.
#[derive(Debug, Default)]
pub struct CallContext {
    co_signers: BTreeSet<AccountName>,
    known_accounts: BTreeSet<AccountName>,
    notices: Mutex<Vec<(AccountName, TransferNotice)>>,
}

impl CallContext {
    /// Context with no co-signers and an empty identity registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add resolvable accounts to the identity registry.
    pub fn with_accounts<I>(mut self, accounts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<AccountName>,
    {
        self.known_accounts
            .extend(accounts.into_iter().map(Into::into));
        self
    }

    /// Record that `account` independently co-signed this invocation.
    pub fn with_co_signer(mut self, account: impl Into<AccountName>) -> Self {
        self.co_signers.insert(account.into());
        self
    }

    /// Register one more resolvable account.
    pub fn add_account(&mut self, account: impl Into<AccountName>) {
        self.known_accounts.insert(account.into());
    }

    /// Drain the captured notices in delivery order.
    pub fn take_notices(&self) -> Vec<(AccountName, TransferNotice)> {
        std::mem::take(&mut *self.notices.lock())
    }
}

impl AccountEffects for CallContext {
    fn is_co_signed(&self, account: &AccountName) -> bool {
        self.co_signers.contains(account)
    }

    fn account_exists(&self, account: &AccountName) -> bool {
        self.known_accounts.contains(account)
    }
}

impl NotifyEffects for CallContext {
    fn notify(&self, account: &AccountName, notice: &TransferNotice) {
        self.notices.lock().push((account.clone(), notice.clone()));
    }
}
