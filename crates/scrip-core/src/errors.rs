//! Ledger error taxonomy
//!
//! Every failure is synchronous and terminal for the current operation: the
//! engine stages all writes and commits none of them when any check fails, so
//! an error always means "state unchanged". Variants carry the data that
//! identifies which invariant was violated; nothing is retried internally.

use crate::types::{AccountName, Asset, Symbol, SymbolCode};
use serde::{Deserialize, Serialize};

/// Failure taxonomy for ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum LedgerError {
    /// Caller is not authenticated as the identity the operation requires.
    #[error("missing authority of `{required}` (caller is `{caller}`)")]
    Unauthorized {
        /// Identity the operation was invoked as.
        caller: AccountName,
        /// Identity the operation requires.
        required: AccountName,
    },

    /// A supply record for the symbol already exists; `create` runs once.
    #[error("token with symbol `{symbol}` already exists")]
    AlreadyExists {
        /// Symbol of the existing record.
        symbol: Symbol,
    },

    /// No supply record exists for the symbol code.
    #[error("token with symbol code `{code}` does not exist")]
    TokenNotFound {
        /// Code the lookup was keyed on.
        code: SymbolCode,
    },

    /// Symbol code or precision is malformed.
    #[error("invalid symbol: {reason}")]
    InvalidSymbol {
        /// What was wrong with the symbol.
        reason: String,
    },

    /// Quantity is non-positive, out of range, or otherwise malformed.
    #[error("invalid quantity: {reason}")]
    InvalidQuantity {
        /// What was wrong with the quantity.
        reason: String,
    },

    /// Quantity symbol does not match the ledger's symbol exactly.
    #[error("symbol precision mismatch: expected `{expected}`, found `{found}`")]
    SymbolMismatch {
        /// Symbol the ledger is configured for.
        expected: Symbol,
        /// Symbol the quantity carried.
        found: Symbol,
    },

    /// Issuing the quantity would push supply past the immutable cap.
    #[error("quantity exceeds available supply: requested {requested}, available {available}")]
    SupplyCapExceeded {
        /// Quantity the issuer asked for.
        requested: Asset,
        /// Headroom left under the cap.
        available: Asset,
    },

    /// Debit would drive a balance negative.
    #[error("overdrawn balance: `{owner}` holds {balance}, needs {needed}")]
    Overdrawn {
        /// Account being debited.
        owner: AccountName,
        /// Balance on record.
        balance: Asset,
        /// Amount the debit required.
        needed: Asset,
    },

    /// Transfer names the same account on both sides.
    #[error("cannot transfer to self (`{account}`)")]
    SelfTransfer {
        /// The account named twice.
        account: AccountName,
    },

    /// Destination account does not resolve in the host's identity registry.
    #[error("account `{account}` does not exist")]
    UnknownAccount {
        /// The unresolved account.
        account: AccountName,
    },

    /// Memo exceeds the 256-byte limit.
    #[error("memo has {len} bytes; limit is 256")]
    MemoTooLong {
        /// Byte length of the rejected memo.
        len: usize,
    },

    /// Debit target has no balance record for the symbol.
    #[error("no balance record found for `{owner}` with symbol code `{code}`")]
    NoBalanceRecord {
        /// Account the debit targeted.
        owner: AccountName,
        /// Symbol code of the missing record.
        code: SymbolCode,
    },

    /// Registration would reuse an identity already present in the balance
    /// table, in either the owner or the gateway slot.
    #[error("identity `{account}` collides with an existing registration")]
    CollisionOnRegister {
        /// The colliding identity.
        account: AccountName,
    },

    /// Checked amount arithmetic left the representable range.
    #[error("amount arithmetic overflow")]
    AmountOverflow,

    /// Deployment configuration is unusable.
    #[error("invalid configuration: {reason}")]
    Config {
        /// What was wrong with the configuration.
        reason: String,
    },
}

/// Standard Result type for ledger operations.
pub type Result<T> = std::result::Result<T, LedgerError>;
