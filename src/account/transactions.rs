//! Represents transactions
use crate::amount::Amount;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::fmt;

/// Format of a timestamp in a statement line
pub const STATEMENT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Represent a single recorded account transaction. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    money: MoneyTrans,
    description: String,
    timestamp: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(money: MoneyTrans, description: String, timestamp: DateTime<Utc>) -> Self {
        Self {
            money,
            description,
            timestamp,
        }
    }

    /// money movement of this transaction
    pub fn money(&self) -> &MoneyTrans {
        &self.money
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> TransKind {
        self.money.kind()
    }

    #[allow(missing_docs)]
    pub fn amount(&self) -> &Amount {
        self.money.amount()
    }

    #[allow(missing_docs)]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[allow(missing_docs)]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: ${} - {}",
            self.timestamp.format(STATEMENT_TIME_FORMAT),
            self.kind(),
            self.amount(),
            self.description
        )
    }
}

/// Money transaction represent withdraw or deposit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyTrans {
    /// increase available funds
    Deposit(Amount),
    /// decrease available funds
    Withdraw(Amount),
}

impl MoneyTrans {
    #[allow(missing_docs)]
    pub fn kind(&self) -> TransKind {
        match self {
            MoneyTrans::Deposit(_) => TransKind::Deposit,
            MoneyTrans::Withdraw(_) => TransKind::Withdrawal,
        }
    }

    #[allow(missing_docs)]
    pub fn amount(&self) -> &Amount {
        match self {
            MoneyTrans::Deposit(amount) | MoneyTrans::Withdraw(amount) => amount,
        }
    }

    /// amount with sign of its impact on balance
    pub fn signed(&self) -> Decimal {
        match self {
            MoneyTrans::Deposit(amount) => **amount,
            MoneyTrans::Withdraw(amount) => -**amount,
        }
    }
}

/// Direction of a transaction
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TransKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransKind::Deposit => f.write_str("DEPOSIT"),
            TransKind::Withdrawal => f.write_str("WITHDRAWAL"),
        }
    }
}
