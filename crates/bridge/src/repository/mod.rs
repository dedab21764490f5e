//! Repository layer for data access.

pub mod entities;
mod data_store;

pub use data_store::{DataStore, PgStore};

#[cfg(any(test, feature = "test-utils"))]
pub use data_store::MockDataStore;
