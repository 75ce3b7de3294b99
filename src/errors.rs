//! Possible errors

use crate::amount::AmountErr;
use rust_decimal::Decimal;
use thiserror::Error;

/// Group errors for account balance
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BalanceErr {
    /// Withdraw would leave the balance below zero
    #[error("insufficient funds: requested {requested}, available {available}")]
    NotEnoughAvailableFunds {
        #[allow(missing_docs)]
        requested: Decimal,
        #[allow(missing_docs)]
        available: Decimal,
    },
    /// Result of operation does not fit into decimal range
    #[error("balance overflow")]
    Overflow,
}

/// Group all errors that can occurs within account module
#[allow(missing_docs)]
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AccountErr {
    #[error("initial balance must be non negative whole cents: {0}")]
    InvalidInitialBalance(Decimal),
    #[error("invalid amount")]
    InvalidAmount(#[from] AmountErr),
    #[error("account money change error")]
    AccMoney(#[from] BalanceErr),
}

impl AccountErr {
    /// `true` when a withdraw was rejected because of missing funds
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(
            self,
            AccountErr::AccMoney(BalanceErr::NotEnoughAvailableFunds { .. })
        )
    }
}

/// Errors of reading configuration from environment
#[derive(Debug, Error)]
pub enum ConfigErr {
    /// Variable is set but it is not a decimal number
    #[error("{var} is not a valid decimal: {value:?}")]
    InvalidDecimal {
        #[allow(missing_docs)]
        var: &'static str,
        #[allow(missing_docs)]
        value: String,
        #[source]
        #[allow(missing_docs)]
        source: rust_decimal::Error,
    },
}
