//! SQLite plumbing: connection, schema migrations, the internal operation log
//! and the raw queries behind `store::SqliteStore`.

pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod queries;
pub mod stats;
