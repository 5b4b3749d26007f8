//! # Integration Tests
//!
//! Flows that cross the IPC handler, the engine, the store and the ledger.

pub mod concurrency;
pub mod fixtures;
pub mod scenarios;
