//! List, alert, and balance views over ledger queries.

use chrono::Local;
use colored::Colorize;

use crate::ledger::{Entry, EntryKind, Ledger};

use super::output;

/// Renders the entry list, most recent first. An empty ledger renders a
/// short placeholder instead of nothing so `list` always answers.
pub fn render_list(ledger: &Ledger) {
    if ledger.entries().is_empty() {
        output::info("No entries recorded yet.");
        return;
    }
    for entry in ledger.entries().iter().rev() {
        println!("{}", entry_line(entry));
    }
}

/// One list row: signed colored amount, category, local date.
pub(crate) fn entry_line(entry: &Entry) -> String {
    let amount = format!(
        "{}{:.2} ({})",
        entry.kind.sign(),
        entry.amount,
        entry.category
    );
    let amount = match entry.kind {
        EntryKind::Income => amount.green(),
        EntryKind::Expense => amount.red(),
    };
    let date = entry.date.with_timezone(&Local).format("%d/%m/%Y");
    format!("  {amount}  {date}")
}

/// Renders the over-budget warning with both figures, or nothing when
/// within budget.
pub fn render_alert(ledger: &Ledger) {
    if let Some(alert) = ledger.over_budget() {
        output::warning(format!(
            "You are over budget! ({:.2} > {:.2})",
            alert.spent, alert.ceiling
        ));
    }
}

/// Renders the configured ceiling, or nothing when unset.
pub fn render_balance(ledger: &Ledger) {
    let ceiling = ledger.ceiling();
    if ceiling > 0.0 {
        output::info(format!("Your budget: {ceiling:.2}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_line_signs_amounts_by_kind() {
        let income = Entry::new(50.0, "gift", EntryKind::Income);
        let expense = Entry::new(30.0, "snacks", EntryKind::Expense);
        assert!(entry_line(&income).contains("+50.00 (gift)"));
        assert!(entry_line(&expense).contains("-30.00 (snacks)"));
    }
}
