use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;
use uuid::Uuid;

use crate::errors::LedgerError;

use super::category::Category;

/// Thread-safe handle to a [`Category`].
///
/// Clones share the same ledger and id. Locks are always taken in ascending
/// id order so that concurrent transfers cannot deadlock.
#[derive(Debug, Clone)]
pub struct SharedCategory {
    id: Uuid,
    inner: Arc<Mutex<Category>>,
}

impl SharedCategory {
    pub fn new(name: impl Into<String>) -> Self {
        Self::from(Category::new(name))
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn deposit(
        &self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        self.lock()?.deposit(amount, description);
        Ok(())
    }

    pub fn withdraw(
        &self,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<bool, LedgerError> {
        Ok(self.lock()?.withdraw(amount, description))
    }

    pub fn get_balance(&self) -> Result<f64, LedgerError> {
        Ok(self.lock()?.get_balance())
    }

    pub fn check_funds(&self, amount: f64) -> Result<bool, LedgerError> {
        Ok(self.lock()?.check_funds(amount))
    }

    /// Moves `amount` to `target` while holding both locks.
    pub fn transfer(&self, amount: f64, target: &SharedCategory) -> Result<bool, LedgerError> {
        if self.id == target.id {
            return Err(LedgerError::SelfTransfer(self.id.to_string()));
        }

        let (mut source, mut destination) = if self.id < target.id {
            let source = self.lock()?;
            (source, target.lock()?)
        } else {
            let destination = target.lock()?;
            (self.lock()?, destination)
        };
        let moved = source.transfer(amount, &mut destination);
        debug!(source = %self.id, target = %target.id, amount, moved, "shared transfer");
        Ok(moved)
    }

    /// Point-in-time copy of the category.
    pub fn snapshot(&self) -> Result<Category, LedgerError> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Category>, LedgerError> {
        self.inner
            .lock()
            .map_err(|_| LedgerError::Poisoned(self.id.to_string()))
    }
}

impl From<Category> for SharedCategory {
    fn from(category: Category) -> Self {
        Self {
            id: Uuid::new_v4(),
            inner: Arc::new(Mutex::new(category)),
        }
    }
}

/// Copies every category while all of their locks are held at once.
///
/// The result follows the order of `categories`; a handle listed twice is
/// locked once and copied twice.
pub fn snapshot_all(categories: &[SharedCategory]) -> Result<Vec<Category>, LedgerError> {
    let mut order: Vec<&SharedCategory> = categories.iter().collect();
    order.sort_by_key(|handle| handle.id);
    order.dedup_by_key(|handle| handle.id);

    let mut guards = Vec::with_capacity(order.len());
    for handle in order {
        guards.push((handle.id, handle.lock()?));
    }
    let copies: BTreeMap<Uuid, Category> = guards
        .iter()
        .map(|(id, guard)| (*id, Category::clone(guard)))
        .collect();
    drop(guards);

    Ok(categories
        .iter()
        .filter_map(|handle| copies.get(&handle.id).cloned())
        .collect())
}
