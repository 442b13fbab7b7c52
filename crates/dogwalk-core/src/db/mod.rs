//! Database layer backing the local key-value store

mod connection;
mod migrations;
mod settings_store;

pub use connection::Database;
pub use settings_store::LibSqlSettingsStore;
