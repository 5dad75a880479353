//! Repository capability traits.
//!
//! One trait per entity type, decoupled from storage technology. The
//! workflow service depends only on these traits, so swapping the in-memory
//! store for a durable one requires no change to workflow logic.
//!
//! Contract shared by all implementations:
//! - `find_by_id` returns `Ok(None)` for a missing id, never an error.
//! - `save` is an idempotent upsert keyed by the entity's id.
//! - `update` writes only when the id already exists; on a missing id it is
//!   a silent no-op returning the argument unchanged. Callers must not rely
//!   on it signaling absence.
//! - `find_all` has no ordering guarantee.

use async_trait::async_trait;
use common::{CustomerId, OrderId, ProductId};
use thiserror::Error;

use crate::customer::Customer;
use crate::order::Order;
use crate::product::Product;

/// Error produced by a repository backend.
///
/// The in-memory implementations never fail; durable backends surface their
/// faults through this type. The workflow converts it into its catch-all
/// failure signal at the boundary.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The storage backend reported a fault.
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Result alias for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Persistence capability for customers.
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    async fn find_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>>;
    async fn find_all(&self) -> RepositoryResult<Vec<Customer>>;
    async fn save(&self, customer: Customer) -> RepositoryResult<Customer>;
    async fn update(&self, customer: Customer) -> RepositoryResult<Customer>;
    async fn delete(&self, id: CustomerId) -> RepositoryResult<()>;
}

/// Persistence capability for products.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;

    /// Case-insensitive substring match on the product name.
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Product>>;

    async fn find_all(&self) -> RepositoryResult<Vec<Product>>;
    async fn save(&self, product: Product) -> RepositoryResult<Product>;
    async fn update(&self, product: Product) -> RepositoryResult<Product>;
    async fn delete(&self, id: ProductId) -> RepositoryResult<()>;
}

/// Persistence capability for orders.
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn find_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>>;

    /// All orders placed by the given customer.
    async fn find_all_by_customer_id(&self, customer_id: CustomerId)
    -> RepositoryResult<Vec<Order>>;

    async fn find_all(&self) -> RepositoryResult<Vec<Order>>;
    async fn save(&self, order: Order) -> RepositoryResult<Order>;
    async fn update(&self, order: Order) -> RepositoryResult<Order>;
    async fn delete(&self, id: OrderId) -> RepositoryResult<()>;
}
