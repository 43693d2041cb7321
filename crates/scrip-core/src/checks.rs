//! Pure validation predicates
//!
//! Every operation runs these before touching any table. Authorization is
//! decided over the explicit caller identity, never ambient context, so each
//! predicate here is a pure function from values to a pass/fail result.

use crate::errors::{LedgerError, Result};
use crate::types::{AccountName, Asset, Symbol};

/// Longest memo an operation accepts, in bytes.
pub const MEMO_MAX_BYTES: usize = 256;

/// Require that `caller` is exactly the `required` identity.
pub fn ensure_authorized(caller: &AccountName, required: &AccountName) -> Result<()> {
    if caller == required {
        Ok(())
    } else {
        Err(LedgerError::Unauthorized {
            caller: caller.clone(),
            required: required.clone(),
        })
    }
}

/// Require the memo to fit in [`MEMO_MAX_BYTES`].
pub fn ensure_memo(memo: &str) -> Result<()> {
    if memo.len() <= MEMO_MAX_BYTES {
        Ok(())
    } else {
        Err(LedgerError::MemoTooLong { len: memo.len() })
    }
}

/// Require a well-formed symbol.
pub fn ensure_symbol_well_formed(symbol: Symbol) -> Result<()> {
    if symbol.is_valid() {
        Ok(())
    } else {
        Err(LedgerError::InvalidSymbol {
            reason: format!("`{symbol}` is not a well-formed symbol"),
        })
    }
}

/// Require an in-range amount denominated in a well-formed symbol.
pub fn ensure_well_formed(quantity: Asset) -> Result<()> {
    if quantity.is_valid() {
        Ok(())
    } else {
        Err(LedgerError::InvalidQuantity {
            reason: "amount out of range or symbol malformed".to_owned(),
        })
    }
}

/// Require a strictly positive amount; `action` names the operation for the
/// error message, e.g. `"issue"`.
pub fn ensure_positive(quantity: Asset, action: &str) -> Result<()> {
    if quantity.is_positive() {
        Ok(())
    } else {
        Err(LedgerError::InvalidQuantity {
            reason: format!("must {action} a positive quantity"),
        })
    }
}

/// Require the quantity's symbol to match `expected` exactly, precision
/// included.
pub fn ensure_symbol(quantity: Asset, expected: Symbol) -> Result<()> {
    if quantity.symbol == expected {
        Ok(())
    } else {
        Err(LedgerError::SymbolMismatch {
            expected,
            found: quantity.symbol,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SymbolCode;
    use assert_matches::assert_matches;

    #[test]
    fn authorization_is_exact_identity_match() {
        let alice = AccountName::from("alice");
        let bob = AccountName::from("bob");
        assert!(ensure_authorized(&alice, &alice).is_ok());
        assert_matches!(
            ensure_authorized(&bob, &alice),
            Err(LedgerError::Unauthorized { caller, required })
                if caller == bob && required == alice
        );
    }

    #[test]
    fn memo_limit_counts_bytes_not_chars() {
        assert!(ensure_memo("").is_ok());
        assert!(ensure_memo(&"x".repeat(MEMO_MAX_BYTES)).is_ok());
        assert_matches!(
            ensure_memo(&"x".repeat(MEMO_MAX_BYTES + 1)),
            Err(LedgerError::MemoTooLong { len: 257 })
        );
        // 86 four-byte scalars: 86 chars but 344 bytes.
        assert_matches!(
            ensure_memo(&"\u{1F600}".repeat(86)),
            Err(LedgerError::MemoTooLong { len: 344 })
        );
    }

    #[test]
    fn quantity_predicates() {
        let symbol: Symbol = "3,NDX".parse().unwrap();
        let quantity = Asset { amount: 5_000, symbol };
        assert!(ensure_well_formed(quantity).is_ok());
        assert!(ensure_positive(quantity, "issue").is_ok());
        assert!(ensure_symbol(quantity, symbol).is_ok());

        assert_matches!(
            ensure_positive(Asset::zero(symbol), "retire"),
            Err(LedgerError::InvalidQuantity { .. })
        );
        let bad_symbol = Symbol {
            code: SymbolCode::from_raw(0),
            precision: 3,
        };
        assert_matches!(
            ensure_symbol_well_formed(bad_symbol),
            Err(LedgerError::InvalidSymbol { .. })
        );
        assert_matches!(
            ensure_well_formed(Asset { amount: 1, symbol: bad_symbol }),
            Err(LedgerError::InvalidQuantity { .. })
        );
        let wider = Symbol { code: symbol.code, precision: 4 };
        assert_matches!(
            ensure_symbol(Asset { amount: 1, symbol: wider }, symbol),
            Err(LedgerError::SymbolMismatch { expected, found })
                if expected == symbol && found == wider
        );
    }
}
