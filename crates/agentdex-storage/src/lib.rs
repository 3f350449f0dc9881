// Storage layer for the agent catalog
// Decision: Support both a static in-memory catalog (default) and PostgreSQL
//
// - InMemoryDatabase: immutable catalog loaded from a JSON document
// - Database: PostgreSQL `agents` table via sqlx
// - StorageBackend: enum dispatch over the two

pub mod backend;
pub mod memory;
pub mod models;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::{InMemoryDatabase, BUNDLED_AGENTS};
pub use models::AgentRow;
pub use repositories::{AmbiguousMatch, Database};
