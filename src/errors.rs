use thiserror::Error;

/// Error type that captures failures when addressing categories.
///
/// Insufficient funds is not an error: withdrawals and transfers report it
/// through their `bool` return.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),
    #[error("Category already exists: {0}")]
    DuplicateCategory(String),
    #[error("Cannot transfer from `{0}` to itself")]
    SelfTransfer(String),
    #[error("Category lock poisoned: {0}")]
    Poisoned(String),
}

/// Error type raised while building a spend chart.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Percentages are shares of total withdrawals, so at least one category
    /// needs a withdrawal before a chart can be drawn.
    #[error("No spending data: at least one category needs a withdrawal")]
    NoSpending,
    #[error("Spending total is not a finite number")]
    NonFiniteSpending,
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
