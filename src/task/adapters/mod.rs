//! Adapter implementations of the task repository port.
//!
//! - [`memory`]: thread-safe in-memory storage for tests and embedding
//! - [`postgres`]: Diesel-backed `PostgreSQL` storage

pub mod memory;
pub mod postgres;
