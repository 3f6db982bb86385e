mod common;

use common::ledger_with_memory;
use spendwise::ledger::EntryKind;

#[test]
fn entry_count_tracks_adds_minus_undos() {
    let mut ledger = ledger_with_memory();
    let n = 8;
    let m = 5;

    for i in 1..=n {
        let kind = if i % 2 == 0 {
            EntryKind::Income
        } else {
            EntryKind::Expense
        };
        assert!(ledger
            .add_entry(i as f64, format!("cat-{i}").as_str(), kind)
            .expect("add entry"));
    }
    for _ in 0..m {
        assert!(ledger.undo_last().expect("undo").is_some());
    }

    assert_eq!(ledger.entries().len(), n - m);
}

#[test]
fn undo_removes_entries_in_reverse_insertion_order() {
    let mut ledger = ledger_with_memory();
    ledger.add_entry(1.0, "first", EntryKind::Income).unwrap();
    ledger.add_entry(2.0, "second", EntryKind::Expense).unwrap();
    ledger.add_entry(3.0, "third", EntryKind::Income).unwrap();

    let removed: Vec<String> = std::iter::from_fn(|| {
        ledger
            .undo_last()
            .expect("undo")
            .map(|entry| entry.category)
    })
    .collect();

    assert_eq!(removed, ["third", "second", "first"]);
}

#[test]
fn total_expense_is_order_independent() {
    let mut interleaved = ledger_with_memory();
    interleaved.add_entry(10.0, "a", EntryKind::Expense).unwrap();
    interleaved.add_entry(100.0, "b", EntryKind::Income).unwrap();
    interleaved.add_entry(20.0, "c", EntryKind::Expense).unwrap();

    let mut grouped = ledger_with_memory();
    grouped.add_entry(100.0, "b", EntryKind::Income).unwrap();
    grouped.add_entry(10.0, "a", EntryKind::Expense).unwrap();
    grouped.add_entry(20.0, "c", EntryKind::Expense).unwrap();

    assert_eq!(interleaved.total_expense(), 30.0);
    assert_eq!(grouped.total_expense(), interleaved.total_expense());
}

#[test]
fn budget_alert_scenario() {
    let mut ledger = ledger_with_memory();
    assert!(ledger.set_ceiling(1000.0).unwrap());
    assert_eq!(ledger.ceiling(), 1000.0);

    ledger.add_entry(1200.0, "rent", EntryKind::Expense).unwrap();
    let alert = ledger.over_budget().expect("over budget after rent");
    assert_eq!((alert.spent, alert.ceiling), (1200.0, 1000.0));

    ledger.undo_last().unwrap();
    assert!(ledger.over_budget().is_none());
    assert!(ledger.entries().is_empty());
}

#[test]
fn expenses_at_the_ceiling_do_not_alert() {
    let mut ledger = ledger_with_memory();
    ledger.set_ceiling(100.0).unwrap();
    ledger.add_entry(100.0, "exact", EntryKind::Expense).unwrap();
    assert!(ledger.over_budget().is_none(), "alert requires strictly over");
}

#[test]
fn invalid_input_leaves_everything_untouched() {
    let mut ledger = ledger_with_memory();
    ledger.set_ceiling(500.0).unwrap();
    ledger.add_entry(50.0, "gift", EntryKind::Income).unwrap();

    assert!(!ledger.add_entry(-5.0, "x", EntryKind::Expense).unwrap());
    assert!(!ledger.add_entry(5.0, "", EntryKind::Expense).unwrap());
    assert!(!ledger.set_ceiling(0.0).unwrap());

    assert_eq!(ledger.entries().len(), 1);
    assert_eq!(ledger.ceiling(), 500.0);
}
