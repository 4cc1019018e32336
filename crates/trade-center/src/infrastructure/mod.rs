// Infrastructure layer - adapters behind the ports
pub mod ledger;

pub use ledger::InMemoryLedger;
