//! Category ledgers and the collections that hold them.

pub mod budget;
pub mod category;
pub mod shared;
pub mod transaction;

pub use budget::Budget;
pub use category::Category;
pub use shared::{snapshot_all, SharedCategory};
pub use transaction::Transaction;
