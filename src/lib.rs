//! Single owner bank account ledger.
//!
//! [`account::BankAccount`] keeps a balance that never goes below zero together with append only
//! history of deposits and withdraws it was built from.

#![deny(missing_docs)]

pub mod account;
pub mod amount;
pub mod clock;
pub mod config;
pub mod csv;
pub mod errors;
pub mod logging;
