pub mod app;
pub mod common;
pub mod domain;
pub mod io;

pub use common::money::Money;
pub use domain::{ledger::Ledger, transaction::Transaction};
