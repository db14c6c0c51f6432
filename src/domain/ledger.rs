use crate::{
    common::money::Money,
    domain::transaction::{self, Transaction},
};

/// Append-only, in-memory log of transactions in the order they happened.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, tx: Transaction) {
        self.entries.push(tx);
    }

    pub fn entries(&self) -> &[Transaction] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every entry folded onto the ones before it; `None` for an empty ledger.
    pub fn current(&self) -> Option<Transaction> {
        transaction::reduce(self.entries.iter().copied())
    }

    pub fn balance(&self) -> Money {
        transaction::balance(self.entries.iter().copied())
    }

    /// The accumulated transaction after each entry, oldest first.
    pub fn running(&self) -> impl Iterator<Item = Transaction> + '_ {
        self.entries.iter().scan(None, |acc: &mut Option<Transaction>, &tx| {
            let next = match *acc {
                Some(previous) => tx.against(previous),
                None => tx,
            };
            *acc = Some(next);
            Some(next)
        })
    }
}

impl FromIterator<Transaction> for Ledger {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Extend<Transaction> for Ledger {
    fn extend<I: IntoIterator<Item = Transaction>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_ledger_has_zero_balance() {
        let ledger = Ledger::new();
        assert!(ledger.is_empty());
        assert_eq!(ledger.current(), None);
        assert_eq!(ledger.balance(), Money::ZERO);
        assert_eq!(ledger.running().count(), 0);
    }

    #[test]
    fn record_appends_in_order() {
        let mut ledger = Ledger::new();
        ledger.record(Transaction::deposit(10));
        ledger.record(Transaction::withdraw(4));

        assert_eq!(ledger.len(), 2);
        assert_eq!(
            ledger.entries(),
            &[Transaction::deposit(10), Transaction::withdraw(4)]
        );
        assert_eq!(ledger.current(), Some(Transaction::withdraw(6)));
        assert_eq!(ledger.balance(), Money::of(6));
    }

    #[test]
    fn running_balance_tracks_each_step() {
        let ledger: Ledger = [
            Transaction::deposit(10),
            Transaction::withdraw(15),
            Transaction::tally(100),
            Transaction::deposit(1),
        ]
        .into_iter()
        .collect();

        let running: Vec<Transaction> = ledger.running().collect();
        assert_eq!(
            running,
            vec![
                Transaction::deposit(10),
                Transaction::withdraw(-5),
                Transaction::tally(100),
                Transaction::deposit(101),
            ]
        );
        assert_eq!(running.last().copied(), ledger.current());
    }

    #[test]
    fn extend_keeps_existing_entries() {
        let mut ledger = Ledger::new();
        ledger.record(Transaction::deposit(1));
        ledger.extend([Transaction::deposit(2), Transaction::deposit(3)]);

        assert_eq!(ledger.len(), 3);
        assert_eq!(ledger.balance(), Money::of(6));
        // recorded entries keep their own amounts
        assert_eq!(ledger.entries()[2], Transaction::deposit(3));
    }
}
