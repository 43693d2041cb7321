//! Scrip Core - Ledger Foundation
//!
//! This crate provides the foundational value types, durable record shapes,
//! failure taxonomy, and host-interface seams for the scrip token ledger. It
//! holds no engine logic and no storage: everything here is a plain value or
//! a pure trait signature.
//!
//! # Layers
//!
//! ## Value Types
//! - `SymbolCode` / `Symbol`: token type identity, packed and `Copy`
//! - `Asset`: checked, symbol-safe subunit arithmetic
//! - `AccountName`: opaque host-authenticated identity
//!
//! ## Durable Records
//! - `SupplyRecord`: one per created symbol (supply, cap, issuer)
//! - `BalanceRecord`: one per `(owner, code)` pair (balance, gateway)
//!
//! ## Host Seams (Pure Signatures)
//! - `SupplyStore` / `BalanceStore`: keyed tables owned by the host
//! - `AccountEffects`: co-signature and identity-registry facts
//! - `NotifyEffects`: post-commit transfer notices
//!
//! ## Ledger Laws
//! - Supply cap: `0 <= supply <= max_supply`, cap immutable after `create`
//! - Non-negative balances: no debit may take a balance below zero
//! - Conservation: issued supply always equals the sum of balances

#![forbid(unsafe_code)]

// === Core Modules ===

/// Pure validation predicates shared by every operation
pub mod checks;

/// Deployment configuration (symbol, cap, administrator)
pub mod config;

/// Host-interface seams (pure signatures, no implementations)
pub mod effects;

/// Unified error handling
pub mod errors;

/// Durable record types
pub mod records;

/// Fundamental value types
pub mod types;

// === Public API Re-exports ===

pub use checks::{
    ensure_authorized, ensure_memo, ensure_positive, ensure_symbol, ensure_symbol_well_formed,
    ensure_well_formed, MEMO_MAX_BYTES,
};
pub use config::LedgerConfig;
pub use effects::{
    AccountEffects, BalanceStore, HostEffects, NotifyEffects, SupplyStore, TransferNotice,
};
pub use errors::{LedgerError, Result};
pub use records::{BalanceRecord, SupplyRecord};
pub use types::{AccountName, Asset, Symbol, SymbolCode};
