use std::io::{stdout, BufWriter, Write};

use crate::{
    common::{error::AppError, money::Money},
    domain::ledger::Ledger,
    io::{reader, writer},
};

/// Folds the statement named by `args[1]` and writes the balance to stdout.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let stdout = stdout();
    let out = BufWriter::new(stdout.lock());
    run_with_output(args, out)
}

pub fn run_with_output<I, S, W>(args: I, out: W) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
    W: Write,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];
    tracing::info!(path = %input_path, "reading statement");

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);

    let mut ledger = Ledger::new();
    for tx in reader::read_transactions(&mut reader) {
        let tx = tx.map_err(AppError::Parse)?;
        ledger.record(tx);
    }

    let mut current = None;
    for (entry, accumulated) in ledger.entries().iter().zip(ledger.running()) {
        tracing::debug!(%entry, balance = %accumulated.amount(), "folded");
        current = Some(accumulated);
    }

    let balance = current.map(|t| t.amount()).unwrap_or(Money::ZERO);
    tracing::info!(entries = ledger.len(), %balance, "statement folded");

    writer::write_balance(out, current)?;
    Ok(())
}
