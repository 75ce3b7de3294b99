use ledger_account::csv::{RawOperation, RawOperationType};
use rand::Rng;
use rust_decimal::Decimal;

fn main() -> anyhow::Result<()> {
    let loop_end = 1_000_000;

    let b = csv::WriterBuilder::new();
    let mut wr = b.from_path("massive_operations.csv")?;

    let mut rng = rand::thread_rng();
    for n in 0..loop_end {
        let op_type = if rng.gen_bool(0.40) {
            RawOperationType::Withdrawal
        } else {
            RawOperationType::Deposit
        };

        let s = RawOperation {
            r#type: op_type,
            amount: Decimal::new(rng.gen_range(1..100_000), 2),
            description: format!("generated {n}"),
        };

        wr.serialize(s)?;
    }

    wr.flush()?;
    Ok(())
}
