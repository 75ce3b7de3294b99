//! Account traits and structs
use rust_decimal::Decimal;
use std::{iter::Map, slice::Iter};

pub(crate) mod balance;
pub(crate) mod bank_account;
pub(crate) mod shared;
pub(crate) mod transactions;

pub use bank_account::{BankAccount, INITIAL_DEPOSIT};
pub use shared::{AccountSnapshot, SharedAccount};
pub use transactions::{MoneyTrans, TransKind, Transaction, STATEMENT_TIME_FORMAT};

/// Rendered statement lines, in order of transaction creation.
///
/// Cloning restarts it from the first transaction.
pub type Statement<'a> = Map<Iter<'a, Transaction>, fn(&Transaction) -> String>;

/// Represent basic account information, balance and its history
pub trait Account {
    /// owner of this account
    fn owner(&self) -> &str;
    /// current balance, never negative
    fn balance(&self) -> Decimal;
    /// every recorded transaction, oldest first
    fn transactions(&self) -> &[Transaction];

    /// human readable line for every transaction, oldest first
    fn statement(&self) -> Statement<'_> {
        self.transactions()
            .iter()
            .map(render_line as fn(&Transaction) -> String)
    }
}

fn render_line(trans: &Transaction) -> String {
    trans.to_string()
}
