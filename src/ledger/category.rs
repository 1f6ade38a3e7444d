use std::fmt;

use tracing::{debug, warn};

use crate::config::LayoutConfig;

use super::transaction::Transaction;

/// A named budget bucket backed by an append-only ledger.
///
/// The balance is never stored; it is always derived from the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    name: String,
    ledger: Vec<Transaction>,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ledger: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in insertion order.
    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    pub fn len(&self) -> usize {
        self.ledger.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ledger.is_empty()
    }

    pub fn get_balance(&self) -> f64 {
        self.ledger.iter().fold(0.0, |total, txn| total + txn.amount())
    }

    /// Sum of every withdrawal in the ledger. Always zero or negative.
    pub fn total_withdrawals(&self) -> f64 {
        self.ledger
            .iter()
            .filter(|txn| txn.is_withdrawal())
            .fold(0.0, |total, txn| total + txn.amount())
    }

    /// Returns true when `amount` does not exceed the current balance.
    pub fn check_funds(&self, amount: f64) -> bool {
        amount <= self.get_balance()
    }

    /// Appends an entry unconditionally, whatever its sign.
    pub fn deposit(&mut self, amount: f64, description: impl Into<String>) {
        let txn = Transaction::new(amount, description);
        debug!(
            category = %self.name,
            amount,
            description = txn.description(),
            "ledger entry appended"
        );
        self.ledger.push(txn);
    }

    /// Records `-amount` when funds allow it.
    ///
    /// Negative and non-finite amounts are rejected rather than turned into
    /// a deposit. A rejected withdrawal leaves the ledger untouched.
    pub fn withdraw(&mut self, amount: f64, description: impl Into<String>) -> bool {
        if !self.accepts_outflow(amount) {
            return false;
        }
        self.deposit(-amount, description);
        true
    }

    /// Moves `amount` into `target`, recording both sides.
    ///
    /// Either both ledgers change or neither does.
    pub fn transfer(&mut self, amount: f64, target: &mut Category) -> bool {
        if !self.accepts_outflow(amount) {
            return false;
        }
        self.deposit(-amount, format!("Transfer to {}", target.name));
        target.deposit(amount, format!("Transfer from {}", self.name));
        true
    }

    fn accepts_outflow(&self, amount: f64) -> bool {
        if !amount.is_finite() || amount < 0.0 {
            warn!(category = %self.name, amount, "rejected outflow amount");
            return false;
        }
        if !self.check_funds(amount) {
            warn!(
                category = %self.name,
                amount,
                balance = self.get_balance(),
                "insufficient funds"
            );
            return false;
        }
        true
    }

    /// Renders the ledger with an explicit layout.
    pub fn render(&self, layout: &LayoutConfig) -> String {
        let mut lines = Vec::with_capacity(self.ledger.len() + 2);
        lines.push(self.title_line(layout));
        for txn in &self.ledger {
            lines.push(entry_line(txn, layout));
        }
        lines.push(format!("Total: {:.2}", self.get_balance()));
        lines.join("\n")
    }

    fn title_line(&self, layout: &LayoutConfig) -> String {
        let name_len = self.name.chars().count();
        let fill = layout.line_width.saturating_sub(name_len);
        let left = fill / 2;
        let right = fill - left;
        let pad = |count: usize| layout.title_fill.to_string().repeat(count);
        format!("{}{}{}", pad(left), self.name, pad(right))
    }
}

fn entry_line(txn: &Transaction, layout: &LayoutConfig) -> String {
    let description: String = txn
        .description()
        .chars()
        .take(layout.description_width)
        .collect();
    let amount = format!("{:.2}", txn.amount());
    let used = description.chars().count() + amount.len();
    let gap = layout.line_width.saturating_sub(used);
    format!("{description}{}{amount}", " ".repeat(gap))
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&LayoutConfig::default()))
    }
}
