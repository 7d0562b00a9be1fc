pub mod create_pool;
pub mod types;
