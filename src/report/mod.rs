//! Read-only reports built from category ledgers.

pub mod spend_chart;

pub use spend_chart::{
    create_shared_spend_chart, create_spend_chart, spend_shares, SpendChart, SpendShare,
};
