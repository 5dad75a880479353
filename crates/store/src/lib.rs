//! In-memory repository implementations.
//!
//! Each repository stores its entities in a mapping keyed by identifier,
//! shared behind a read-write lock. Handles are cheap to clone and all
//! clones see the same data, so the composition root creates each store
//! once at process start and hands out handles.

pub mod memory;

pub use memory::{InMemoryCustomerRepository, InMemoryOrderRepository, InMemoryProductRepository};
