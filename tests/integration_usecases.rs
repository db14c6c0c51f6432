use std::fs;
use std::io::Cursor;

use transaction_ledger::{Ledger, Money};

fn run_case(input_csv: &str) -> String {
    let rdr = Cursor::new(input_csv.as_bytes());
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(rdr);

    let ledger: Ledger = transaction_ledger::io::reader::read_transactions(&mut csv_reader)
        .map(|row| row.expect("failed to parse input row"))
        .collect();

    let mut out = Vec::<u8>::new();
    transaction_ledger::io::writer::write_balance(&mut out, ledger.current())
        .expect("failed to write output CSV");
    String::from_utf8(out).expect("output was not valid UTF-8")
}

fn normalize_csv(s: &str) -> String {
    // Normalize line endings + trim trailing whitespace lines.
    s.replace("\r\n", "\n")
        .lines()
        .map(|l| l.trim_end())
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

fn assert_case(name: &str) {
    let input = fs::read_to_string(format!("tests/fixtures/{name}_input.csv")).unwrap();
    let expected = fs::read_to_string(format!("tests/fixtures/{name}_expected.csv")).unwrap();

    let actual = run_case(&input);

    assert_eq!(normalize_csv(&actual), normalize_csv(&expected), "{name}");
}

#[test]
fn case1_deposits_and_withdrawals_fold_to_balance() {
    assert_case("case1");
}

#[test]
fn case2_tally_resets_mid_statement() {
    assert_case("case2");
}

#[test]
fn case3_overdraft_is_negative_balance() {
    assert_case("case3");
}

#[test]
fn case4_trailing_zero_tally_clears_balance() {
    assert_case("case4");
}

#[test]
fn app_writes_balance_for_fixture_file() {
    let mut out = Vec::new();
    transaction_ledger::app::run_with_output(
        ["transaction_ledger", "tests/fixtures/case2_input.csv"],
        &mut out,
    )
    .expect("app run failed");

    assert_eq!(String::from_utf8(out).unwrap(), "type,amount\ndeposit,57\n");
}

#[test]
fn app_rejects_malformed_row() {
    let result = transaction_ledger::app::run_with_output(
        ["transaction_ledger", "tests/fixtures/malformed_input.csv"],
        Vec::new(),
    );

    let err = result.expect_err("malformed amount must fail");
    assert!(err.to_string().starts_with("parse error: invalid amount"), "{err}");
}

#[test]
fn ledger_balance_matches_fold_of_fixture() {
    let input = fs::read_to_string("tests/fixtures/case1_input.csv").unwrap();
    let mut rdr = csv::ReaderBuilder::new().from_reader(input.as_bytes());
    let txs: Vec<_> = transaction_ledger::io::reader::read_transactions(&mut rdr)
        .collect::<Result<_, _>>()
        .unwrap();

    let ledger: Ledger = txs.iter().copied().collect();
    assert_eq!(ledger.balance(), Money::of(23));
    assert_eq!(transaction_ledger::domain::transaction::balance(txs), Money::of(23));
}
