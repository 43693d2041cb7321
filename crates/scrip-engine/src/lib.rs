//! Scrip Engine - Ledger Operations
//!
//! The accounting engine over the seams defined in `scrip-core`: in-memory
//! table handlers, the per-invocation call context, the staged-write balance
//! transaction, and the five state transitions (`create`, `issue`, `retire`,
//! `transfer`, `register_account`).
//!
//! The engine is storage-generic. Production hosts inject their own durable
//! [`SupplyStore`](scrip_core::SupplyStore) /
//! [`BalanceStore`](scrip_core::BalanceStore) implementations; tests and
//! in-process embeddings use the in-memory tables through
//! [`MemoryTokenEngine`].
//!
//! ```
//! use scrip_core::{AccountName, Asset, LedgerConfig};
//! use scrip_engine::{CallContext, MemoryTokenEngine};
//!
//! # fn main() -> scrip_core::Result<()> {
//! let config = LedgerConfig::default();
//! let admin = config.administrator.clone();
//! let issuer = AccountName::from("issuer");
//! let bob = AccountName::from("bob");
//!
//! let mut engine = MemoryTokenEngine::in_memory(config)?;
//! let ctx = CallContext::new().with_accounts(["issuer", "bob"]);
//!
//! engine.create(&admin, &issuer)?;
//! engine.issue(&ctx, &issuer, &bob, "50.000 NDX".parse::<Asset>()?, "grant")?;
//! assert_eq!(engine.balance_of(&bob), Some("50.000 NDX".parse()?));
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

/// Per-invocation host context handler
pub mod context;

/// The five ledger state transitions and read-only queries
pub mod engine;

/// In-memory table handlers
pub mod store;

/// Staged balance writes with all-or-nothing commit
pub mod txn;

pub use context::CallContext;
pub use engine::TokenEngine;
pub use store::{MemoryBalanceStore, MemorySupplyStore};
pub use txn::BalanceTxn;

/// Engine over the in-memory reference tables.
pub type MemoryTokenEngine = TokenEngine<MemorySupplyStore, MemoryBalanceStore>;
