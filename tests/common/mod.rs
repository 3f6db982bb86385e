use spendwise::ledger::Ledger;
use spendwise::storage::MemoryStore;

/// Creates an isolated ledger backed by an in-memory store.
pub fn ledger_with_memory() -> Ledger {
    Ledger::load(Box::new(MemoryStore::new())).expect("load ledger over memory store")
}
