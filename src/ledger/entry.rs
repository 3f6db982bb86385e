use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single recorded transaction. Entries are immutable once created; the
/// ledger only ever appends them or pops the most recent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub amount: f64,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub date: DateTime<Utc>,
}

impl Entry {
    /// Creates an entry stamped with the current instant.
    pub fn new(amount: f64, category: impl Into<String>, kind: EntryKind) -> Self {
        Self {
            amount,
            category: category.into(),
            kind,
            date: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "income" => Some(EntryKind::Income),
            "expense" => Some(EntryKind::Expense),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::Income => "income",
            EntryKind::Expense => "expense",
        }
    }

    /// Display sign used by the list view.
    pub fn sign(self) -> char {
        match self {
            EntryKind::Income => '+',
            EntryKind::Expense => '-',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_the_persisted_field_names() {
        let entry = Entry::new(12.5, "snacks", EntryKind::Expense);
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"type\":\"expense\""));
        assert!(json.contains("\"category\":\"snacks\""));

        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn kind_parses_case_insensitively() {
        assert_eq!(EntryKind::parse("Income"), Some(EntryKind::Income));
        assert_eq!(EntryKind::parse(" expense "), Some(EntryKind::Expense));
        assert_eq!(EntryKind::parse("transfer"), None);
    }
}
