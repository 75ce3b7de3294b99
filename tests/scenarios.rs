use chrono::{Duration, TimeZone, Utc};
use ledger_account::{
    account::{Account, BankAccount, TransKind},
    clock::SteppingClock,
    errors::AccountErr,
};
use rust_decimal::Decimal;

fn clock() -> SteppingClock {
    let start = Utc.with_ymd_and_hms(2025, 1, 31, 23, 59, 58).unwrap();
    SteppingClock::new(start, Duration::seconds(1))
}

fn dec(num: i64) -> Decimal {
    Decimal::new(num, 2)
}

#[test]
fn john_doe_month() {
    // open
    let mut acc = BankAccount::with_clock("John Doe", dec(100000), clock()).unwrap();
    assert_eq!(acc.balance(), dec(100000));
    let statement: Vec<String> = acc.statement().collect();
    assert_eq!(
        statement,
        vec!["2025-01-31 23:59:58 - DEPOSIT: $1000.00 - Initial deposit"]
    );

    // deposit
    assert_eq!(acc.deposit(dec(50000), "Paycheck"), Ok(dec(150000)));
    assert_eq!(acc.statement().count(), 2);

    // withdraw
    assert_eq!(acc.withdraw(dec(20000), "Groceries"), Ok(dec(130000)));
    assert_eq!(acc.statement().count(), 3);

    // overdraw
    let e = acc.withdraw(dec(500000), "Rent").unwrap_err();
    assert!(e.is_insufficient_funds());
    assert_eq!(acc.balance(), dec(130000));
    assert_eq!(acc.statement().count(), 3);

    // non positive deposits
    for amount in [dec(-500), Decimal::ZERO] {
        let e = acc.deposit(amount, "bad").unwrap_err();
        assert!(matches!(e, AccountErr::InvalidAmount(_)));
    }
    assert_eq!(acc.balance(), dec(130000));

    let kinds: Vec<TransKind> = acc.transactions().iter().map(|t| t.kind()).collect();
    assert_eq!(
        kinds,
        vec![TransKind::Deposit, TransKind::Deposit, TransKind::Withdrawal]
    );
    assert_eq!(
        acc.statement().last().unwrap(),
        "2025-02-01 00:00:00 - WITHDRAWAL: $200.00 - Groceries"
    );
    assert_eq!(
        acc.to_string(),
        "BankAccount(owner='John Doe', balance=$1300.00)"
    );
}

#[test]
fn negative_initial_balance_opens_nothing() {
    let e = BankAccount::with_clock("X", Decimal::new(-10, 0), clock()).unwrap_err();
    assert_eq!(e, AccountErr::InvalidInitialBalance(Decimal::new(-10, 0)));
}

#[test]
fn wall_clock_account() {
    let before = Utc::now();
    let mut acc = BankAccount::new("Wall", Decimal::ZERO).unwrap();
    acc.deposit(Decimal::ONE, "one").unwrap();

    let stamped = acc.transactions()[0].timestamp();
    assert!(stamped >= before);
    assert!(stamped <= Utc::now());
}

#[test]
fn many_small_deposits_do_not_drift() {
    let mut acc = BankAccount::with_clock("X", Decimal::ZERO, clock()).unwrap();
    for _ in 0..1000 {
        acc.deposit(dec(10), "dime").unwrap();
    }
    assert_eq!(acc.balance(), Decimal::new(100, 0));

    for _ in 0..1000 {
        acc.withdraw(dec(10), "dime").unwrap();
    }
    assert_eq!(acc.balance(), Decimal::ZERO);
    assert_eq!(acc.len(), 2000);
}
