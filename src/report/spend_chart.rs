//! Vertical bar chart of each category's share of total withdrawals.
//!
//! Shares are rounded down to the layout's step (10 by default), so the bars
//! rarely add up to 100.

use std::fmt;

use tracing::debug;

use crate::config::LayoutConfig;
use crate::errors::ChartError;
use crate::ledger::{snapshot_all, Category, SharedCategory};

const CHART_TITLE: &str = "Percentage spent by category";

/// One category's contribution to total spending.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendShare {
    pub name: String,
    /// Sum of the category's withdrawals; zero or negative.
    pub spent: f64,
    /// Share of the total, rounded down to the chart step.
    pub percent: u32,
}

/// Aggregated shares ready to render.
#[derive(Debug, Clone, PartialEq)]
pub struct SpendChart {
    shares: Vec<SpendShare>,
    levels: Vec<u32>,
}

impl SpendChart {
    /// Aggregates withdrawals across `categories`, in order.
    ///
    /// Fails with [`ChartError::NoSpending`] when nothing was withdrawn.
    pub fn from_categories<'a, I>(categories: I, layout: &LayoutConfig) -> Result<Self, ChartError>
    where
        I: IntoIterator<Item = &'a Category>,
    {
        let spent: Vec<(String, f64)> = categories
            .into_iter()
            .map(|category| (category.name().to_string(), category.total_withdrawals()))
            .collect();
        if spent.iter().any(|(_, amount)| !amount.is_finite()) {
            return Err(ChartError::NonFiniteSpending);
        }
        let total_spent = spent.iter().fold(0.0, |total, (_, amount)| total + amount);
        if total_spent >= 0.0 {
            return Err(ChartError::NoSpending);
        }

        // Totals past f64::MAX are summed relative to the largest category.
        let scale = if total_spent.is_finite() {
            1.0
        } else {
            spent
                .iter()
                .fold(0.0, |largest: f64, (_, amount)| largest.max(amount.abs()))
        };
        let scaled_total = spent
            .iter()
            .fold(0.0, |total, (_, amount)| total + amount / scale);

        let step = layout.effective_step();
        let buckets = f64::from(100 / step);
        let shares: Vec<SpendShare> = spent
            .into_iter()
            .map(|(name, spent)| {
                let percent = (buckets * (spent / scale) / scaled_total).floor() as u32 * step;
                SpendShare {
                    name,
                    spent,
                    percent,
                }
            })
            .collect();
        debug!(categories = shares.len(), total_spent, "spend chart aggregated");

        Ok(Self {
            shares,
            levels: layout.chart_levels(),
        })
    }

    pub fn shares(&self) -> &[SpendShare] {
        &self.shares
    }

    pub fn render(&self) -> String {
        let mut rows = vec![CHART_TITLE.to_string()];

        for &level in &self.levels {
            let markers: Vec<&str> = self
                .shares
                .iter()
                .map(|share| if share.percent >= level { "o" } else { " " })
                .collect();
            rows.push(format!("{level:>3}| {}  ", markers.join("  ")));
        }

        let width = rows.last().map(|row| row.chars().count()).unwrap_or(0);
        rows.push(format!("    {}", "-".repeat(width.saturating_sub(4))));

        let names: Vec<Vec<char>> = self
            .shares
            .iter()
            .map(|share| share.name.chars().collect())
            .collect();
        let height = names.iter().map(Vec::len).max().unwrap_or(0);
        for idx in 0..height {
            let letters: Vec<String> = names
                .iter()
                .map(|name| name.get(idx).copied().unwrap_or(' ').to_string())
                .collect();
            rows.push(format!("     {}  ", letters.join("  ")));
        }

        rows.join("\n")
    }
}

impl fmt::Display for SpendChart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Per-category shares of total withdrawals using the default layout.
pub fn spend_shares<'a, I>(categories: I) -> Result<Vec<SpendShare>, ChartError>
where
    I: IntoIterator<Item = &'a Category>,
{
    SpendChart::from_categories(categories, &LayoutConfig::default()).map(|chart| chart.shares)
}

/// Renders the spend chart for `categories`, in order.
///
/// At least one category needs a withdrawal; otherwise there is no total to
/// divide by and [`ChartError::NoSpending`] is returned.
pub fn create_spend_chart<'a, I>(categories: I) -> Result<String, ChartError>
where
    I: IntoIterator<Item = &'a Category>,
{
    SpendChart::from_categories(categories, &LayoutConfig::default()).map(|chart| chart.render())
}

/// Renders the chart from a consistent snapshot of shared categories.
pub fn create_shared_spend_chart(categories: &[SharedCategory]) -> Result<String, ChartError> {
    let snapshots = snapshot_all(categories)?;
    create_spend_chart(&snapshots)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spender(name: &str, spent: f64) -> Category {
        let mut category = Category::new(name);
        category.deposit(1_000.0, "deposit");
        category.withdraw(spent, "spend");
        category
    }

    fn spender_with_max(name: &str) -> Category {
        let mut category = Category::new(name);
        category.deposit(1e308, "deposit");
        assert!(category.withdraw(1e308, "spend"));
        category
    }

    #[test]
    fn percentages_round_down_to_step() {
        let categories = [
            spender("A", 10.0),
            spender("B", 20.0),
            spender("C", 70.0),
        ];
        let shares = spend_shares(&categories).unwrap();
        let percents: Vec<u32> = shares.iter().map(|share| share.percent).collect();
        assert_eq!(percents, [10, 20, 70]);
        assert_eq!(shares[2].spent, -70.0);
    }

    #[test]
    fn deposits_do_not_count_as_spending() {
        let categories = [spender("A", 50.0), Category::new("B")];
        let shares = spend_shares(&categories).unwrap();
        assert_eq!(shares[0].percent, 100);
        assert_eq!(shares[1].percent, 0);
    }

    #[test]
    fn no_withdrawals_is_an_error() {
        let mut idle = Category::new("Idle");
        idle.deposit(10.0, "deposit");
        assert_eq!(create_spend_chart([&idle]), Err(ChartError::NoSpending));
        assert_eq!(
            create_spend_chart(Vec::<&Category>::new()),
            Err(ChartError::NoSpending)
        );
    }

    #[test]
    fn totals_beyond_f64_range_still_split_evenly() {
        let categories = [spender_with_max("A"), spender_with_max("B")];
        let shares = spend_shares(&categories).unwrap();
        let percents: Vec<u32> = shares.iter().map(|share| share.percent).collect();
        assert_eq!(percents, [50, 50]);
        assert_eq!(shares[0].spent, -1e308);

        let chart = create_spend_chart(&categories).unwrap();
        assert_eq!(chart.lines().nth(6), Some(" 50| o  o  "));
        assert_eq!(chart.lines().nth(5), Some(" 60|       "));
    }

    #[test]
    fn infinite_category_spending_is_an_error() {
        let mut broken = Category::new("Broken");
        broken.deposit(-f64::MAX, "correction");
        broken.deposit(-f64::MAX, "correction");
        assert_eq!(
            create_spend_chart([&broken]),
            Err(ChartError::NonFiniteSpending)
        );
    }

    #[test]
    fn coarser_step_changes_levels() {
        let layout = LayoutConfig {
            chart_step: 25,
            ..LayoutConfig::default()
        };
        let categories = [spender("A", 30.0), spender("B", 70.0)];
        let chart = SpendChart::from_categories(&categories, &layout).unwrap();
        let percents: Vec<u32> = chart.shares().iter().map(|share| share.percent).collect();
        assert_eq!(percents, [25, 50]);
        let rendered = chart.to_string();
        assert_eq!(rendered.lines().nth(1), Some("100|       "));
        assert_eq!(rendered.lines().nth(3), Some(" 50|    o  "));
    }
}
