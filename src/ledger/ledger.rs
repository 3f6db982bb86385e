use tracing::{debug, warn};

use crate::errors::StoreError;
use crate::storage::StateStore;

use super::entry::{Entry, EntryKind};

/// Store key holding the serialized entry sequence.
pub const ENTRIES_KEY: &str = "budgetEntries";
/// Store key holding the budget ceiling.
pub const CEILING_KEY: &str = "userBudget";

/// Owner of the entry sequence and budget ceiling, and sole mediator of
/// their persistence.
///
/// Every mutation writes through to the injected [`StateStore`] before the
/// in-memory copy is committed, so the two never diverge after a completed
/// operation. Mutators report invalid input as `Ok(false)` without touching
/// state; persistence failures surface as [`StoreError`].
pub struct Ledger {
    store: Box<dyn StateStore>,
    entries: Vec<Entry>,
    ceiling: f64,
}

/// Expense total and configured ceiling, carried together for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverBudget {
    pub spent: f64,
    pub ceiling: f64,
}

impl Ledger {
    /// Builds a ledger over `store`, hydrating state from the persisted
    /// records. Missing or unreadable records default to an empty sequence
    /// and an unset ceiling.
    pub fn load(store: Box<dyn StateStore>) -> Result<Self, StoreError> {
        let entries = match store.get(ENTRIES_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("discarding unreadable entry record: {err}");
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let ceiling = store
            .get(CEILING_KEY)?
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|value| value.is_finite() && *value > 0.0)
            .unwrap_or(0.0);
        Ok(Self {
            store,
            entries,
            ceiling,
        })
    }

    /// Entries in insertion order (oldest first).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Configured budget ceiling; 0 means unset.
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Replaces the budget ceiling. Only strictly positive finite values are
    /// accepted; anything else is rejected without mutation.
    pub fn set_ceiling(&mut self, value: f64) -> Result<bool, StoreError> {
        if !value.is_finite() || value <= 0.0 {
            debug!(value, "rejected budget ceiling");
            return Ok(false);
        }
        self.store.set(CEILING_KEY, &value.to_string())?;
        self.ceiling = value;
        Ok(true)
    }

    /// Appends an entry stamped with the current instant. The amount must be
    /// strictly positive and finite and the category non-empty; invalid
    /// input is rejected without mutation.
    pub fn add_entry(
        &mut self,
        amount: f64,
        category: &str,
        kind: EntryKind,
    ) -> Result<bool, StoreError> {
        let category = category.trim();
        if !amount.is_finite() || amount <= 0.0 || category.is_empty() {
            debug!(amount, category, "rejected entry");
            return Ok(false);
        }
        self.entries.push(Entry::new(amount, category, kind));
        if let Err(err) = self.persist_entries() {
            self.entries.pop();
            return Err(err);
        }
        Ok(true)
    }

    /// Removes the most recently appended entry and returns it; `None` when
    /// the ledger is empty.
    pub fn undo_last(&mut self) -> Result<Option<Entry>, StoreError> {
        let Some(entry) = self.entries.pop() else {
            return Ok(None);
        };
        if let Err(err) = self.persist_entries() {
            self.entries.push(entry);
            return Err(err);
        }
        Ok(Some(entry))
    }

    /// Clears all entries and the ceiling, removing both durable records.
    /// Callers are responsible for any prior user confirmation.
    pub fn reset_all(&mut self) -> Result<(), StoreError> {
        self.store.remove(ENTRIES_KEY)?;
        self.store.remove(CEILING_KEY)?;
        self.entries.clear();
        self.ceiling = 0.0;
        Ok(())
    }

    /// Sum of amounts over expense entries.
    pub fn total_expense(&self) -> f64 {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Expense)
            .map(|entry| entry.amount)
            .sum()
    }

    /// The over-budget pair when expenses exceed a configured ceiling. An
    /// unset ceiling (0) never alerts.
    pub fn over_budget(&self) -> Option<OverBudget> {
        if self.ceiling <= 0.0 {
            return None;
        }
        let spent = self.total_expense();
        (spent > self.ceiling).then_some(OverBudget {
            spent,
            ceiling: self.ceiling,
        })
    }

    fn persist_entries(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.entries)?;
        self.store.set(ENTRIES_KEY, &json)
    }
}
