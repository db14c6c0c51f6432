#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing input csv path. usage: cargo run -- <statement.csv>")]
    MissingArg,
    #[error("failed to open input file: {0}")]
    OpenInput(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Reasons a textual amount cannot become a [`Money`](crate::common::money::Money).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    #[error("empty amount")]
    Empty,
    #[error("invalid amount: {0}")]
    Invalid(String),
    #[error("amount has a fractional part: {0}")]
    Fractional(String),
    #[error("amount out of range: {0}")]
    OutOfRange(String),
}
