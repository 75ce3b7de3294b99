use super::transactions::MoneyTrans;
use crate::errors::BalanceErr;
use rust_decimal::Decimal;

/// Represents current account balance.
///
/// Never goes below zero: every operation is checked before it is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balance {
    available: Decimal,
}

impl Balance {
    pub fn try_deposit(&mut self, amount: &Decimal) -> Result<Decimal, BalanceErr> {
        self.available = self.checked_deposit(amount)?;
        Ok(self.available)
    }

    pub fn try_withdraw(&mut self, amount: &Decimal) -> Result<Decimal, BalanceErr> {
        self.available = self.checked_withdraw(amount)?;
        Ok(self.available)
    }

    /// apply `mop` or leave balance untouched on error
    pub fn try_apply(&mut self, mop: &MoneyTrans) -> Result<Decimal, BalanceErr> {
        match mop {
            MoneyTrans::Deposit(amount) => self.try_deposit(amount),
            MoneyTrans::Withdraw(amount) => self.try_withdraw(amount),
        }
    }

    fn checked_deposit(&self, amount: &Decimal) -> Result<Decimal, BalanceErr> {
        self.available
            .checked_add(*amount)
            .ok_or(BalanceErr::Overflow)
    }

    fn checked_withdraw(&self, amount: &Decimal) -> Result<Decimal, BalanceErr> {
        if self.available < *amount {
            return Err(BalanceErr::NotEnoughAvailableFunds {
                requested: *amount,
                available: self.available,
            });
        }

        let after = self.available - amount;
        debug_assert!(after >= Decimal::ZERO);
        Ok(after)
    }
}

impl Balance {
    pub fn available(&self) -> Decimal {
        self.available
    }
}
