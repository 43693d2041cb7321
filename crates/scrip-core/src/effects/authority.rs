//! Identity facts from the host environment

use crate::types::AccountName;

/// Call-scoped identity facts the host authenticates out-of-band.
///
/// The caller itself reaches every operation as an explicit parameter; these
/// predicates cover the two facts that only the host can answer.
pub trait AccountEffects {
    /// Whether `account` independently co-signed the current invocation.
    ///
    /// Decides who pays for storage when a transfer creates the
    /// destination's balance record; it never affects balances.
    fn is_co_signed(&self, account: &AccountName) -> bool;

    /// Whether `account` resolves in the host's identity registry.
    fn account_exists(&self, account: &AccountName) -> bool;
}
