//! Fundamental value types
//!
//! [`SymbolCode`] and [`Symbol`] identify a token type, [`Asset`] carries a
//! quantity of one, and [`AccountName`] names the parties. Everything here is
//! a plain value: validation happens at construction or at operation entry,
//! never during storage.

mod account;
mod asset;
mod symbol;

pub use account::AccountName;
pub use asset::Asset;
pub use symbol::{Symbol, SymbolCode};
