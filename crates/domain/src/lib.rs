//! Domain layer for the order management system.
//!
//! This crate provides:
//! - Entities: [`Customer`], [`Product`], [`Order`] with its [`OrderItem`]s
//! - Repository capability traits, decoupled from any storage backend
//! - Domain events and the [`EventPublisher`] abstraction
//! - [`OrderService`], the workflow orchestrating order creation, status
//!   updates, and cancellation with stock reservation
//!
//! Storage implementations live in the `store` crate and the HTTP surface in
//! the `api` crate; this crate depends on neither.

pub mod customer;
pub mod error;
pub mod money;
pub mod order;
pub mod product;
pub mod publisher;
pub mod repository;

pub use customer::Customer;
pub use error::OrderError;
pub use money::Money;
pub use order::{
    Order, OrderCancelledData, OrderEvent, OrderItem, OrderLine, OrderPlacedData, OrderService,
    OrderStatus, OrderStatusChangedData, RestockedLine,
};
pub use product::Product;
pub use publisher::{BroadcastPublisher, EventPublisher, NoopPublisher, RecordingPublisher};
pub use repository::{
    CustomerRepository, OrderRepository, ProductRepository, RepositoryError, RepositoryResult,
};
