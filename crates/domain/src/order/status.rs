//! Order status lifecycle.

use serde::{Deserialize, Serialize};

/// The status of an order in its lifecycle.
///
/// Any status may be assigned from any other via a status update; only
/// cancellation is restricted, to orders that are still `Pending` or
/// `Confirmed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    /// Order has been placed and stock reserved.
    #[default]
    Pending,

    /// Order has been confirmed.
    Confirmed,

    /// Order has left the warehouse.
    Shipped,

    /// Order has reached the customer (terminal).
    Delivered,

    /// Order was cancelled and its stock restored (terminal).
    Cancelled,
}

impl OrderStatus {
    /// Parses the wire form (`"PENDING"`, `"CONFIRMED"`, ...).
    ///
    /// Returns `None` for anything outside the five known statuses.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "PENDING" => Some(OrderStatus::Pending),
            "CONFIRMED" => Some(OrderStatus::Confirmed),
            "SHIPPED" => Some(OrderStatus::Shipped),
            "DELIVERED" => Some(OrderStatus::Delivered),
            "CANCELLED" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Returns true if an order in this status can be cancelled.
    pub fn can_cancel(&self) -> bool {
        matches!(self, OrderStatus::Pending | OrderStatus::Confirmed)
    }

    /// Returns true if this is a terminal status.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Returns the status in its wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
            OrderStatus::Confirmed => "CONFIRMED",
            OrderStatus::Shipped => "SHIPPED",
            OrderStatus::Delivered => "DELIVERED",
            OrderStatus::Cancelled => "CANCELLED",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
