//! In-memory, append-only store that hunters write findings into while a scan runs.

mod open;
mod models;
mod insert;
mod query;

pub use open::Collector;
