/// A single ledger entry. Negative amounts are withdrawals.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    amount: f64,
    description: String,
}

impl Transaction {
    pub fn new(amount: f64, description: impl Into<String>) -> Self {
        Self {
            amount,
            description: description.into(),
        }
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_withdrawal(&self) -> bool {
        self.amount < 0.0
    }
}
