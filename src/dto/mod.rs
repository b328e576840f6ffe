//! Request bodies for the betting and account operations.
//!
//! Optional fields are left out of the serialized body entirely when unset;
//! explicit `false`, `0` and empty lists are always sent.

pub mod account;
pub mod common;
pub mod decimal_serde;
pub mod market;
pub mod order;

pub use account::*;
pub use common::*;
pub use market::*;
pub use order::*;
