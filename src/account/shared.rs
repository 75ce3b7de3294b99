//! Account that can be used from many tasks at once.
//!
//! Every operation, reads included, goes through one [`tokio::sync::Mutex`] per account, so a
//! balance can never be observed out of sync with the transactions history.

use super::{Account, BankAccount};
use crate::{
    clock::{Clock, SystemClock},
    errors::AccountErr,
};
use rust_decimal::Decimal;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Cloneable handle to one [`BankAccount`]
#[derive(Debug)]
pub struct SharedAccount<C = SystemClock> {
    inner: Arc<Mutex<BankAccount<C>>>,
}

impl<C> Clone for SharedAccount<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Balance and statement read under single lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSnapshot {
    #[allow(missing_docs)]
    pub owner: String,
    #[allow(missing_docs)]
    pub balance: Decimal,
    /// rendered statement lines, oldest first
    pub statement: Vec<String>,
}

impl<C> From<BankAccount<C>> for SharedAccount<C> {
    fn from(acc: BankAccount<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(acc)),
        }
    }
}

impl<C: Clock> SharedAccount<C> {
    /// see [`BankAccount::deposit`]
    pub async fn deposit(
        &self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Decimal, AccountErr> {
        self.inner.lock().await.deposit(amount, description)
    }

    /// see [`BankAccount::withdraw`]
    pub async fn withdraw(
        &self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Decimal, AccountErr> {
        self.inner.lock().await.withdraw(amount, description)
    }
}

impl<C> SharedAccount<C> {
    #[allow(missing_docs)]
    pub async fn balance(&self) -> Decimal {
        self.inner.lock().await.balance()
    }

    /// rendered statement lines, oldest first
    pub async fn statement(&self) -> Vec<String> {
        self.inner.lock().await.statement().collect()
    }

    /// consistent view of balance and statement
    pub async fn snapshot(&self) -> AccountSnapshot {
        let acc = self.inner.lock().await;
        AccountSnapshot {
            owner: acc.owner().to_owned(),
            balance: acc.balance(),
            statement: acc.statement().collect(),
        }
    }

    /// run `f` with exclusive access to the account
    pub async fn with<R>(&self, f: impl FnOnce(&BankAccount<C>) -> R) -> R {
        let acc = self.inner.lock().await;
        f(&acc)
    }

    /// Take back the account if this is the last handle, otherwise return the handle.
    pub fn try_unwrap(self) -> Result<BankAccount<C>, Self> {
        Arc::try_unwrap(self.inner)
            .map(Mutex::into_inner)
            .map_err(|inner| Self { inner })
    }
}
