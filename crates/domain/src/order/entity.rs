//! Order entity and its line items.

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::money::Money;

use super::OrderStatus;

/// A line in an order.
///
/// `price_per_unit` is snapshotted from the product at order-creation time;
/// later product price changes never affect past order totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: u32,
    pub price_per_unit: Money,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(product_id: ProductId, quantity: u32, price_per_unit: Money) -> Self {
        Self {
            product_id,
            quantity,
            price_per_unit,
        }
    }

    /// Returns the total price for this line (quantity × price per unit).
    pub fn total_price(&self) -> Money {
        self.price_per_unit.multiply(self.quantity)
    }
}

/// An order placed by a customer.
///
/// The order exclusively owns its items; they are only ever mutated through
/// the order's own methods. Item insertion order is preserved for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Order {
    /// Creates a new empty order in `Pending` status.
    pub fn new(customer_id: CustomerId) -> Self {
        Self {
            id: OrderId::new(),
            customer_id,
            items: Vec::new(),
            status: OrderStatus::Pending,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Appends a line item.
    pub fn add_item(&mut self, item: OrderItem) {
        self.items.push(item);
        self.updated_at = Some(Utc::now());
    }

    /// Removes all lines referencing the given product.
    pub fn remove_item(&mut self, product_id: ProductId) {
        self.items.retain(|item| item.product_id != product_id);
        self.updated_at = Some(Utc::now());
    }

    /// Assigns a new status.
    pub fn update_status(&mut self, status: OrderStatus) {
        self.status = status;
        self.updated_at = Some(Utc::now());
    }

    /// Returns the sum of the line totals.
    pub fn total_amount(&self) -> Money {
        self.items.iter().map(OrderItem::total_price).sum()
    }

    /// Returns the number of line items.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
