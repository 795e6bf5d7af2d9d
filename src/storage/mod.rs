// storage/mod.rs
// Trust store persistence

pub mod migrations;
pub mod pool;
pub mod trust;

// Re-export commonly used items
pub use migrations::run_migrations;
pub use pool::{init_db_pool_in_memory, init_db_pool_with_path};
pub use trust::TrustStore;
