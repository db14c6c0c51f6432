use std::fmt;

use crate::common::money::Money;

/// One ledger event. The variant is fixed at construction; composition with
/// [`Transaction::against`] yields a new value of the acting variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transaction {
    /// An increase of the balance.
    Deposit(Money),
    /// A decrease of the balance.
    Withdraw(Money),
    /// A checkpoint, e.g. a statement balance. Resets the balance when acting.
    Tally(Money),
}

/// The kind of a [`Transaction`], without its amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TxType {
    Deposit,
    Withdraw,
    Tally,
}

impl TxType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TxType::Deposit => "deposit",
            TxType::Withdraw => "withdraw",
            TxType::Tally => "tally",
        }
    }
}

impl fmt::Display for TxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The tuple variants take a [`Money`]; these constructors take raw amounts.
impl Transaction {
    pub fn deposit(amount: i64) -> Self {
        Transaction::Deposit(Money::of(amount))
    }

    pub fn withdraw(amount: i64) -> Self {
        Transaction::Withdraw(Money::of(amount))
    }

    pub fn tally(amount: i64) -> Self {
        Transaction::Tally(Money::of(amount))
    }

    pub fn new(tx_type: TxType, amount: Money) -> Self {
        match tx_type {
            TxType::Deposit => Transaction::Deposit(amount),
            TxType::Withdraw => Transaction::Withdraw(amount),
            TxType::Tally => Transaction::Tally(amount),
        }
    }

    pub fn amount(&self) -> Money {
        match *self {
            Transaction::Deposit(amount)
            | Transaction::Withdraw(amount)
            | Transaction::Tally(amount) => amount,
        }
    }

    pub fn tx_type(&self) -> TxType {
        match self {
            Transaction::Deposit(_) => TxType::Deposit,
            Transaction::Withdraw(_) => TxType::Withdraw,
            Transaction::Tally(_) => TxType::Tally,
        }
    }

    /// Applies `self` on top of the balance accumulated in `previous`.
    ///
    /// The result always has `self`'s variant. An acting `Tally` ignores
    /// `previous` entirely. A `Tally` passed as `previous` is an ordinary base
    /// amount, so deposits add to it and withdrawals subtract from it.
    ///
    /// # Examples
    /// ```
    /// use transaction_ledger::{Money, Transaction};
    ///
    /// let t = Transaction::withdraw(50).against(Transaction::tally(100));
    /// assert_eq!(t, Transaction::Withdraw(Money::of(50)));
    ///
    /// let t = Transaction::tally(100).against(Transaction::deposit(50));
    /// assert_eq!(t.amount(), Money::of(100));
    /// ```
    pub fn against(self, previous: Transaction) -> Transaction {
        let base = previous.amount();
        match self {
            Transaction::Tally(amount) => Transaction::Tally(amount),
            Transaction::Deposit(amount) => Transaction::Deposit(base.plus(amount)),
            Transaction::Withdraw(amount) => Transaction::Withdraw(base.minus(amount)),
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.tx_type(), self.amount())
    }
}

/// Left-folds `transactions`, each one acting against everything before it.
///
/// `[t1, t2, t3]` reduces to `t3.against(t2.against(t1))`. Returns `None` for
/// an empty sequence.
pub fn reduce<I>(transactions: I) -> Option<Transaction>
where
    I: IntoIterator<Item = Transaction>,
{
    transactions
        .into_iter()
        .reduce(|accumulated, next| next.against(accumulated))
}

/// The balance after folding `transactions`, [`Money::ZERO`] when empty.
pub fn balance<I>(transactions: I) -> Money
where
    I: IntoIterator<Item = Transaction>,
{
    reduce(transactions)
        .map(|t| t.amount())
        .unwrap_or(Money::ZERO)
}
