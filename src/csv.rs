//! csv input/output format and functions

use csv_async::{AsyncWriterBuilder, Terminator};
use rust_decimal::Decimal;

use crate::{
    account::{Account, BankAccount, SharedAccount, TransKind, Transaction, STATEMENT_TIME_FORMAT},
    amount,
    clock::Clock,
    errors::AccountErr,
};
use serde::{Deserialize, Serialize};

use tokio::{
    io::{AsyncRead, AsyncWrite},
    sync::mpsc::Sender,
};
use tokio_stream::StreamExt;

// Allowed operation types
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs)]
pub enum RawOperationType {
    Deposit,
    Withdrawal,
}

/// One requested operation on an account, as read from input
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct RawOperation {
    pub r#type: RawOperationType,
    pub amount: Decimal,
    #[serde(default)]
    pub description: String,
}

impl RawOperation {
    /// deposit or withdraw `amount` on `acc`, returns new balance
    pub fn apply<C: Clock>(self, acc: &mut BankAccount<C>) -> Result<Decimal, AccountErr> {
        match self.r#type {
            RawOperationType::Deposit => acc.deposit(self.amount, self.description),
            RawOperationType::Withdrawal => acc.withdraw(self.amount, self.description),
        }
    }

    /// same as [`RawOperation::apply`] but through lock of shared account
    pub async fn apply_shared<C: Clock>(
        self,
        acc: &SharedAccount<C>,
    ) -> Result<Decimal, AccountErr> {
        match self.r#type {
            RawOperationType::Deposit => acc.deposit(self.amount, self.description).await,
            RawOperationType::Withdrawal => acc.withdraw(self.amount, self.description).await,
        }
    }
}

/// take a reader and continuously deserialize operations from it into `sender`
pub async fn deserialize_operations_from_csv_reader<'r, R: AsyncRead + Unpin + Send + 'r>(
    input: R,
    sender: Sender<RawOperation>,
) -> anyhow::Result<()> {
    let mut builder = csv_async::AsyncReaderBuilder::new();
    builder.trim(csv_async::Trim::All);

    let mut rdr = builder.create_deserializer(input);

    let _headers = rdr.headers().await?;

    let mut records = rdr.deserialize::<RawOperation>();
    while let Some(record) = records.next().await {
        let record: RawOperation = record?;
        sender.send(record).await?;
    }

    Ok(())
}

/// single statement row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct StatementRecord {
    pub timestamp: String,
    pub r#type: String,
    pub amount: Decimal,
    pub description: String,
}

impl From<&Transaction> for StatementRecord {
    fn from(trans: &Transaction) -> Self {
        Self {
            timestamp: trans.timestamp().format(STATEMENT_TIME_FORMAT).to_string(),
            r#type: match trans.kind() {
                TransKind::Deposit => "deposit".into(),
                TransKind::Withdrawal => "withdrawal".into(),
            },
            amount: trans.amount().to_minor_units(),
            description: trans.description().to_owned(),
        }
    }
}

/// summary of account balance for an owner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[allow(missing_docs)]
pub struct AccountSummary {
    pub owner: String,
    pub balance: Decimal,
    pub transactions: usize,
}

impl<T: Account> From<&T> for AccountSummary {
    fn from(oth: &T) -> Self {
        Self {
            owner: oth.owner().to_owned(),
            balance: amount::to_minor_units(oth.balance()),
            transactions: oth.transactions().len(),
        }
    }
}

fn crlf_writer_builder() -> AsyncWriterBuilder {
    let mut builder = AsyncWriterBuilder::new();
    builder.terminator(Terminator::CRLF);
    builder
}

/// save every transaction of `acc` as [`StatementRecord`] into `wr`. Headers will be included
/// automatically. Terminator is `\r\n`.
pub async fn write_statement(acc: &impl Account, wr: impl AsyncWrite + Unpin) -> anyhow::Result<()> {
    let mut wr = crlf_writer_builder().create_serializer(wr);

    for trans in acc.transactions() {
        wr.serialize(StatementRecord::from(trans)).await?;
    }

    wr.flush().await?;
    Ok(())
}

/// save `acc` as [`AccountSummary`] into `wr`. Headers will be included automatically.
pub async fn write_summary(acc: &impl Account, wr: impl AsyncWrite + Unpin) -> anyhow::Result<()> {
    let mut wr = crlf_writer_builder().create_serializer(wr);

    wr.serialize(AccountSummary::from(acc)).await?;

    wr.flush().await?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{
        deserialize_operations_from_csv_reader, write_statement, write_summary, RawOperation,
        RawOperationType,
    };
    use crate::{
        account::{BankAccount, SharedAccount},
        amount::AmountErr,
        clock::SteppingClock,
        errors::AccountErr,
    };
    use chrono::{Duration, TimeZone, Utc};
    use rust_decimal::Decimal;
    use tokio::sync::mpsc::channel;
    use tokio_stream::{wrappers::ReceiverStream, StreamExt};

    fn test_account() -> BankAccount<SteppingClock> {
        let start = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let clock = SteppingClock::new(start, Duration::minutes(1));
        let mut a = BankAccount::with_clock("John Doe", Decimal::new(1000, 0), clock).unwrap();
        a.deposit(Decimal::new(500, 0), "Paycheck").unwrap();
        a.withdraw(Decimal::new(2005, 1), "Groceries").unwrap();
        a
    }

    #[tokio::test]
    async fn ser_statement_format() -> anyhow::Result<()> {
        let mut wr = tokio::io::BufWriter::new(Vec::with_capacity(8192));

        write_statement(&test_account(), &mut wr).await?;

        let expected = "timestamp,type,amount,description\r\n\
            2024-05-01 09:00:00,deposit,1000.00,Initial deposit\r\n\
            2024-05-01 09:01:00,deposit,500.00,Paycheck\r\n\
            2024-05-01 09:02:00,withdrawal,200.50,Groceries\r\n";

        let output_str = String::from_utf8(wr.into_inner()).unwrap();
        assert_eq!(output_str, expected);

        Ok(())
    }

    #[tokio::test]
    async fn ser_summary_format() -> anyhow::Result<()> {
        let mut wr = tokio::io::BufWriter::new(Vec::with_capacity(8192));

        write_summary(&test_account(), &mut wr).await?;

        let expected = "owner,balance,transactions\r\nJohn Doe,1299.50,3\r\n";
        let output_str = String::from_utf8(wr.into_inner()).unwrap();
        assert_eq!(output_str, expected);

        Ok(())
    }

    #[tokio::test]
    async fn des_input_format() -> anyhow::Result<()> {
        let raw_in = r#"type, amount, description
deposit, 500.00, Paycheck
withdrawal, 1.5,
deposit, 2,"Rent, part 1"
withdrawal, -3, bad"#;

        let (tx, rx) = channel(2);
        tokio::spawn(async move {
            deserialize_operations_from_csv_reader(raw_in.as_bytes(), tx).await
        });
        let ops: Vec<RawOperation> = ReceiverStream::new(rx).collect().await;

        assert_eq!(ops.len(), 4);
        assert_eq!(
            ops[0],
            RawOperation {
                r#type: RawOperationType::Deposit,
                amount: Decimal::new(500, 0),
                description: "Paycheck".into(),
            }
        );
        assert_eq!(
            ops[1],
            RawOperation {
                r#type: RawOperationType::Withdrawal,
                amount: Decimal::new(15, 1),
                description: "".into(),
            }
        );
        assert_eq!(ops[2].description, "Rent, part 1");
        assert_eq!(ops[3].amount, Decimal::new(-3, 0));

        Ok(())
    }

    #[test]
    fn apply_raw_operations() {
        let mut a = test_account();

        let deposit = RawOperation {
            r#type: RawOperationType::Deposit,
            amount: Decimal::new(50, 2),
            description: "coins".into(),
        };
        assert_eq!(deposit.apply(&mut a), Ok(Decimal::new(1300, 0)));

        let negative = RawOperation {
            r#type: RawOperationType::Withdrawal,
            amount: Decimal::new(-1, 0),
            description: "bad".into(),
        };
        assert!(negative.apply(&mut a).is_err());

        let too_much = RawOperation {
            r#type: RawOperationType::Withdrawal,
            amount: Decimal::new(5000, 0),
            description: "Rent".into(),
        };
        assert!(too_much.apply(&mut a).unwrap_err().is_insufficient_funds());

        let tiny = RawOperation {
            r#type: RawOperationType::Deposit,
            amount: Decimal::new(4, 3),
            description: "tiny".into(),
        };
        assert_eq!(
            tiny.apply(&mut a),
            Err(AccountErr::InvalidAmount(AmountErr::BelowMinorUnit))
        );
        assert_eq!(a.len(), 4);
    }

    #[tokio::test]
    async fn apply_raw_operations_on_shared_account() {
        let acc: SharedAccount<SteppingClock> = test_account().into();

        let withdraw = RawOperation {
            r#type: RawOperationType::Withdrawal,
            amount: Decimal::new(29950, 2),
            description: "Phone".into(),
        };
        assert_eq!(withdraw.apply_shared(&acc).await, Ok(Decimal::new(1000, 0)));

        let zero = RawOperation {
            r#type: RawOperationType::Deposit,
            amount: Decimal::ZERO,
            description: "nothing".into(),
        };
        assert_eq!(
            zero.apply_shared(&acc).await,
            Err(AccountErr::InvalidAmount(AmountErr::NotPositive))
        );

        let snap = acc.snapshot().await;
        assert_eq!(snap.balance, Decimal::new(1000, 0));
        assert_eq!(snap.statement.len(), 4);
    }
}
