use std::io::Write;

use crate::domain::transaction::Transaction;

#[derive(serde::Serialize)]
/// Internal CSV output row. Headers written: `type,amount`.
struct OutputRow {
    #[serde(rename = "type")]
    tx_type: &'static str,
    amount: i64,
}

/// Writes the accumulated transaction as a single CSV row.
///
/// `None` (nothing was folded) is written as a zero tally so the output always
/// carries a balance.
///
/// # Errors
///
/// Returns a `csv::Error` if writing the row fails.
///
/// # Examples
///
/// ```
/// use transaction_ledger::io::writer::write_balance;
/// use transaction_ledger::Transaction;
///
/// let mut out = Vec::new();
/// write_balance(&mut out, Some(Transaction::withdraw(-3))).unwrap();
/// assert_eq!(String::from_utf8(out).unwrap(), "type,amount\nwithdraw,-3\n");
/// ```
pub fn write_balance<W: Write>(writer: W, current: Option<Transaction>) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    let current = current.unwrap_or(Transaction::tally(0));
    wtr.serialize(OutputRow {
        tx_type: current.tx_type().as_str(),
        amount: current.amount().amount(),
    })?;

    wtr.flush()?;
    Ok(())
}
