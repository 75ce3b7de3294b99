use super::balance::Balance;
use super::transactions::*;
use super::Account;
use crate::{
    amount::{self, Amount},
    clock::{Clock, SystemClock},
    errors::AccountErr,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;
use tracing::{debug, warn};

/// Description of the transaction recorded for a positive initial balance
pub const INITIAL_DEPOSIT: &str = "Initial deposit";

/// Owner current balance and append only transactions history
#[derive(Debug, Clone)]
pub struct BankAccount<C = SystemClock> {
    owner: String,
    trans_history: Vec<Transaction>,
    balance: Balance,
    clock: C,
}

impl BankAccount<SystemClock> {
    /// Create new account stamped with wall clock time.
    ///
    /// Positive `initial_balance` is recorded as [`INITIAL_DEPOSIT`].
    pub fn new(owner: impl Into<String>, initial_balance: Decimal) -> Result<Self, AccountErr> {
        Self::with_clock(owner, initial_balance, SystemClock)
    }
}

impl<C: Clock> BankAccount<C> {
    /// Create new account that reads transaction timestamps from `clock`
    pub fn with_clock(
        owner: impl Into<String>,
        initial_balance: Decimal,
        clock: C,
    ) -> Result<Self, AccountErr> {
        let owner = owner.into();
        if initial_balance < Decimal::ZERO || !amount::is_whole_minor_units(initial_balance) {
            warn!(%owner, %initial_balance, "rejected account with invalid initial balance");
            return Err(AccountErr::InvalidInitialBalance(initial_balance));
        }

        let mut acc = Self {
            owner,
            trans_history: Vec::new(),
            balance: Balance::default(),
            clock,
        };

        // zero initial balance leaves history empty
        if !initial_balance.is_zero() {
            let amount = Amount::try_from(initial_balance)?;
            acc.record_money_transaction(MoneyTrans::Deposit(amount), INITIAL_DEPOSIT.into())?;
        }

        debug!(owner = %acc.owner, balance = %acc.balance(), "account opened");
        Ok(acc)
    }

    #[cfg(test)]
    /// New account with balance 750.0 built from 10 deposits and 5 withdraws
    pub fn new_test_account(clock: C) -> Self {
        let mut a = BankAccount::with_clock("test", Decimal::ZERO, clock).unwrap();
        for n in 0..10 {
            a.deposit(Decimal::new(100, 0), format!("deposit {n}")).unwrap();
        }

        for n in 0..5 {
            a.withdraw(Decimal::new(50, 0), format!("withdraw {n}")).unwrap();
        }

        assert_eq!(a.balance(), Decimal::new(1000, 0) - Decimal::new(250, 0));

        a
    }

    /// try to increase balance by `amount`, returns new balance.
    ///
    /// On error nothing is recorded and balance is not changed.
    pub fn deposit(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Decimal, AccountErr> {
        let amount = self.checked_amount(amount, TransKind::Deposit)?;
        self.apply(MoneyTrans::Deposit(amount), description)
    }

    /// try to decrease balance by `amount`, returns new balance.
    ///
    /// Fails if `amount` is greater than current balance. On error nothing is recorded and
    /// balance is not changed.
    pub fn withdraw(
        &mut self,
        amount: Decimal,
        description: impl Into<String>,
    ) -> Result<Decimal, AccountErr> {
        let amount = self.checked_amount(amount, TransKind::Withdrawal)?;
        self.apply(MoneyTrans::Withdraw(amount), description)
    }

    /// apply already validated money operation, returns new balance
    pub fn apply(
        &mut self,
        money: MoneyTrans,
        description: impl Into<String>,
    ) -> Result<Decimal, AccountErr> {
        let kind = money.kind();
        let amount = *money.amount();
        let description = description.into();

        match self.record_money_transaction(money, description) {
            Ok(new_balance) => {
                debug!(owner = %self.owner, %kind, %amount, balance = %new_balance, "transaction recorded");
                Ok(new_balance)
            }
            Err(e) => {
                warn!(owner = %self.owner, %kind, %amount, balance = %self.balance(), error = %e, "transaction rejected");
                Err(e)
            }
        }
    }

    fn checked_amount(&self, amount: Decimal, kind: TransKind) -> Result<Amount, AccountErr> {
        Amount::try_from(amount).map_err(|e| {
            warn!(owner = %self.owner, %kind, %amount, "transaction rejected: amount must be positive");
            AccountErr::from(e)
        })
    }

    /// Balance is checked and changed first, so failed operation is never recorded.
    fn record_money_transaction(
        &mut self,
        money: MoneyTrans,
        description: String,
    ) -> Result<Decimal, AccountErr> {
        let new_balance = self.balance.try_apply(&money)?;
        let timestamp = self.next_timestamp();
        self.trans_history
            .push(Transaction::new(money, description, timestamp));
        Ok(new_balance)
    }

    // history must stay ordered even if clock goes backwards
    fn next_timestamp(&self) -> DateTime<Utc> {
        let now = self.clock.now();
        match self.trans_history.last() {
            Some(last) if last.timestamp() > now => last.timestamp(),
            _ => now,
        }
    }
}

impl<C> BankAccount<C> {
    /// number of recorded transactions
    pub fn len(&self) -> usize {
        self.trans_history.len()
    }

    /// `true` if nothing was recorded yet
    pub fn is_empty(&self) -> bool {
        self.trans_history.is_empty()
    }
}

impl<C> Account for BankAccount<C> {
    fn owner(&self) -> &str {
        &self.owner
    }

    fn balance(&self) -> Decimal {
        self.balance.available()
    }

    fn transactions(&self) -> &[Transaction] {
        &self.trans_history
    }
}

impl<C> fmt::Display for BankAccount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BankAccount(owner='{}', balance=${:.2})",
            self.owner,
            amount::to_minor_units(self.balance())
        )
    }
}
