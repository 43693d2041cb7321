//! Host-interface seams
//!
//! Trait signatures only; implementations live with the engine (in-memory
//! tables, call contexts) or with the embedding host. Everything is
//! synchronous: the host serializes invocations, and the accounting path has
//! no suspension points an interleaving could exploit.

mod authority;
mod notify;
mod store;

pub use authority::AccountEffects;
pub use notify::{NotifyEffects, TransferNotice};
pub use store::{BalanceStore, SupplyStore};

/// Everything an operation needs from the host environment in one bound.
pub trait HostEffects: AccountEffects + NotifyEffects {}

impl<T: AccountEffects + NotifyEffects> HostEffects for T {}
