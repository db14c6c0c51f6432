use crate::{
    common::money::Money,
    domain::transaction::{Transaction, TxType},
};
use std::{io::Read, str::FromStr};

#[derive(serde::Deserialize)]
/// Internal CSV row representation matching the input headers.
struct CsvRow {
    #[serde(rename = "type")]
    tx_type: String,
    amount: Option<String>,
}

/// Reads transaction rows from a CSV statement.
///
/// Supported headers: `type,amount`. The `type` field is case-insensitive and
/// one of `deposit`, `withdraw` (or `withdrawal`) and `tally`. Every row needs
/// an integral amount; errors name the 1-based data row they came from.
///
/// # Examples
///
/// ```
/// use transaction_ledger::io::reader::read_transactions;
/// use transaction_ledger::Transaction;
/// use csv::ReaderBuilder;
///
/// let data = "type,amount\n\
/// deposit,10\n\
/// tally,100\n";
/// let mut rdr = ReaderBuilder::new().from_reader(data.as_bytes());
/// let txs: Vec<_> = read_transactions(&mut rdr).collect();
///
/// assert_eq!(txs[0], Ok(Transaction::deposit(10)));
/// assert_eq!(txs[1], Ok(Transaction::tally(100)));
/// ```
pub fn read_transactions<R: Read>(
    rdr: &mut csv::Reader<R>,
) -> impl Iterator<Item = Result<Transaction, String>> + '_ {
    rdr.deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, res)| parse_row(idx + 1, res))
}

fn parse_row(line: usize, res: Result<CsvRow, csv::Error>) -> Result<Transaction, String> {
    let row = res.map_err(|e| e.to_string())?;
    let tx_type = parse_type(&row.tx_type)
        .ok_or_else(|| format!("unknown transaction type: {} on row {line}", row.tx_type.trim()))?;

    let amt_str = row
        .amount
        .filter(|a| !a.trim().is_empty())
        .ok_or_else(|| format!("{tx_type} missing amount on row {line}"))?;
    let amount = Money::from_str(&amt_str).map_err(|e| format!("{e} on row {line}"))?;

    Ok(Transaction::new(tx_type, amount))
}

fn parse_type(raw: &str) -> Option<TxType> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "deposit" => Some(TxType::Deposit),
        "withdraw" | "withdrawal" => Some(TxType::Withdraw),
        "tally" => Some(TxType::Tally),
        _ => None,
    }
}
