//! Post-commit notification hook

use crate::types::{AccountName, Asset};
use serde::{Deserialize, Serialize};

/// Payload delivered to both parties of a committed transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferNotice {
    /// Debited account.
    pub from: AccountName,
    /// Credited account.
    pub to: AccountName,
    /// Amount moved.
    pub quantity: Asset,
    /// Caller-supplied memo, verbatim.
    pub memo: String,
}

/// Observer hook into the host environment.
///
/// Fired once per party, strictly after a transfer's mutations commit. A
/// failed operation emits nothing, and delivery cannot feed back into the
/// ledger state of the invocation that produced it.
pub trait NotifyEffects {
    /// Deliver `notice` addressed to `account`.
    fn notify(&self, account: &AccountName, notice: &TransferNotice);
}
