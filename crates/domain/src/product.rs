//! Product entity.

use chrono::{DateTime, Utc};
use common::ProductId;
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A product in the catalog.
///
/// `stock_quantity` is unsigned, so the stock non-negativity invariant is
/// structural; callers of [`Product::update_stock`] must have computed the
/// new quantity themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    pub price: Money,
    pub stock_quantity: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Creates a new product with a generated ID.
    pub fn new(name: impl Into<String>, price: Money, stock_quantity: u32) -> Self {
        Self {
            id: ProductId::new(),
            name: name.into(),
            description: None,
            price,
            stock_quantity,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Sets the description, builder style.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns a new absolute stock quantity.
    pub fn update_stock(&mut self, quantity: u32) {
        self.stock_quantity = quantity;
        self.updated_at = Some(Utc::now());
    }

    /// Assigns a new unit price. Does not affect already-placed orders,
    /// which snapshot the price per unit at creation time.
    pub fn update_price(&mut self, price: Money) {
        self.price = price;
        self.updated_at = Some(Utc::now());
    }

    /// Returns true if at least one unit is in stock.
    pub fn is_available(&self) -> bool {
        self.stock_quantity > 0
    }
}
