pub mod cbor;
pub mod client;
pub mod config;
pub mod errors;
pub mod fixtures;
pub mod libraries;
pub mod logs;
pub mod pair;
pub mod pool;
pub mod position;
pub mod tick;
pub mod token;

#[cfg(test)]
pub mod tests;
