use tracing::debug;

use crate::errors::{ChartError, LedgerError};
use crate::report::create_spend_chart;

use super::category::Category;

/// An ordered set of categories addressed by name.
#[derive(Debug, Clone, Default)]
pub struct Budget {
    categories: Vec<Category>,
}

impl Budget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_category(&mut self, category: Category) -> Result<(), LedgerError> {
        if self.position(category.name()).is_some() {
            return Err(LedgerError::DuplicateCategory(category.name().to_string()));
        }
        debug!(category = category.name(), "category added");
        self.categories.push(category);
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|category| category.name() == name)
    }

    pub fn category_mut(&mut self, name: &str) -> Option<&mut Category> {
        self.categories
            .iter_mut()
            .find(|category| category.name() == name)
    }

    /// Transfers between two members of the budget.
    ///
    /// Returns `Ok(false)` when the source lacks funds, like
    /// [`Category::transfer`].
    pub fn transfer(&mut self, amount: f64, from: &str, to: &str) -> Result<bool, LedgerError> {
        let source = self
            .position(from)
            .ok_or_else(|| LedgerError::UnknownCategory(from.to_string()))?;
        let target = self
            .position(to)
            .ok_or_else(|| LedgerError::UnknownCategory(to.to_string()))?;
        if source == target {
            return Err(LedgerError::SelfTransfer(from.to_string()));
        }

        let (source, target) = pair_mut(&mut self.categories, source, target);
        Ok(source.transfer(amount, target))
    }

    pub fn spend_chart(&self) -> Result<String, ChartError> {
        create_spend_chart(&self.categories)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| category.name() == name)
    }
}

/// Borrows two distinct entries mutably. `a` and `b` must differ.
fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> (&mut T, &mut T) {
    if a < b {
        let (head, tail) = items.split_at_mut(b);
        (&mut head[a], &mut tail[0])
    } else {
        let (head, tail) = items.split_at_mut(a);
        (&mut tail[0], &mut head[b])
    }
}
