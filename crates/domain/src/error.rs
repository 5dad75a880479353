//! Workflow error taxonomy.

use common::{CustomerId, OrderId, ProductId};
use thiserror::Error;

use crate::order::OrderStatus;
use crate::repository::RepositoryError;

/// Errors signaled by the order workflow.
///
/// Every failure surfaces through this enum; repository faults are converted
/// into [`OrderError::OperationFailed`] at the workflow boundary so no
/// storage error escapes unhandled.
#[derive(Debug, Error)]
pub enum OrderError {
    /// No customer registered under the given id.
    #[error("customer {0} not found")]
    CustomerNotFound(CustomerId),

    /// No product in the catalog under the given id.
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    /// No order under the given id.
    #[error("order {0} not found")]
    OrderNotFound(OrderId),

    /// A line requested more units than the product has in stock.
    #[error("not enough stock for product {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: u32,
        requested: u32,
    },

    /// The status string is not one of the five known statuses.
    #[error(
        "invalid status {status:?}: must be one of PENDING, CONFIRMED, SHIPPED, DELIVERED, CANCELLED"
    )]
    InvalidStatus { status: String },

    /// A line requested zero units.
    #[error("invalid quantity {quantity} for product {product_id}: must be greater than 0")]
    InvalidQuantity { product_id: ProductId, quantity: u32 },

    /// The order is past the point where cancellation is allowed.
    #[error("cannot cancel order with status {0}")]
    InvalidCancellation(OrderStatus),

    /// Catch-all for unexpected faults.
    #[error("operation failed: {0}")]
    OperationFailed(String),
}

impl From<RepositoryError> for OrderError {
    fn from(err: RepositoryError) -> Self {
        OrderError::OperationFailed(err.to_string())
    }
}
