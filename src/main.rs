//! # ledger-account
//! Application replays operations from input csv file against one account and prints its
//! statement and summary to output.
//!
//! ## Input format
//! csv with columns `type`, `amount`, `description`
//!
//! ```csv
//! type,amount,description
//! deposit,500.00,Paycheck
//! withdrawal,200.00,Groceries
//! ```
//!
//! ## Environment
//! `LEDGER_OWNER`, `LEDGER_INITIAL_BALANCE`, `LEDGER_DEBUG`, `RUST_LOG`

#![deny(missing_docs)]

use anyhow::Context;
use ledger_account::{
    account::{BankAccount, SharedAccount},
    config::Config,
    csv::{self, RawOperation},
    logging,
};
use std::env;
use tokio::{
    io::{stdout, AsyncWriteExt, BufReader},
    spawn,
    sync::mpsc::{channel, Receiver, Sender},
};
use tracing::{info, warn};

async fn read_ops_from_file(filename: String, sender: Sender<RawOperation>) -> anyhow::Result<()> {
    let f = tokio::fs::File::open(&filename)
        .await
        .with_context(|| format!("access input file {filename}"))?;

    let bf = BufReader::new(f);
    csv::deserialize_operations_from_csv_reader(bf, sender)
        .await
        .context("improper content of file")?;

    Ok(())
}

/// apply every operation in order, returns number of rejected ones
async fn apply_operations(
    input: Receiver<RawOperation>,
    account: SharedAccount,
) -> anyhow::Result<usize> {
    let mut input = input;
    let mut rejected = 0;

    let mut line = 1; // header
    while let Some(op) = input.recv().await {
        line += 1;
        if let Err(e) = op.apply_shared(&account).await {
            warn!(line, error = %e, "operation skipped");
            rejected += 1;
        }
    }

    Ok(rejected)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    logging::init(config.debug);

    // CLI handle
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        return Err(anyhow::Error::msg("expected exactly one path to csv file"));
    }

    let account: SharedAccount = BankAccount::new(config.owner.clone(), config.initial_balance)
        .context("failed to open account")?
        .into();
    info!(owner = %config.owner, balance = %config.initial_balance, "account opened");

    // read operations from csv file
    let (tx_ops, rx_ops) = channel(8192);
    let task_read_csv = spawn(read_ops_from_file(args[1].clone(), tx_ops));

    // apply operations one by one, in file order
    let task_apply = spawn(apply_operations(rx_ops, account.clone()));

    // await for each task to complete and handle it errors if occurred
    task_read_csv.await??;
    let rejected = task_apply.await??;

    let account = account
        .try_unwrap()
        .map_err(|_| anyhow::Error::msg("account is still in use"))?;
    info!(
        transactions = account.len(),
        rejected, "all operations processed"
    );

    // write statement and summary to stdout
    let mut out = stdout();
    csv::write_statement(&account, &mut out)
        .await
        .context("failed to save statement")?;
    out.write_all(b"\r\n").await?;
    csv::write_summary(&account, &mut out)
        .await
        .context("failed to save summary")?;
    out.flush().await?;

    Ok(())
}
