//! Order domain events.
//!
//! Events are facts, named in past tense, published by the workflow service
//! after the corresponding state change has been persisted.

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId, ProductId};
use serde::{Deserialize, Serialize};

use crate::money::Money;

use super::{OrderItem, OrderStatus};

/// Events published by the order workflow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    /// An order was created and its stock reserved.
    OrderPlaced(OrderPlacedData),

    /// An order's status was changed.
    OrderStatusChanged(OrderStatusChangedData),

    /// An order was cancelled and its stock restored.
    OrderCancelled(OrderCancelledData),
}

impl OrderEvent {
    /// Returns the event type name.
    pub fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderPlaced(_) => "OrderPlaced",
            OrderEvent::OrderStatusChanged(_) => "OrderStatusChanged",
            OrderEvent::OrderCancelled(_) => "OrderCancelled",
        }
    }

    /// Returns the ID of the order the event concerns.
    pub fn order_id(&self) -> OrderId {
        match self {
            OrderEvent::OrderPlaced(data) => data.order_id,
            OrderEvent::OrderStatusChanged(data) => data.order_id,
            OrderEvent::OrderCancelled(data) => data.order_id,
        }
    }
}

/// Data for the OrderPlaced event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderPlacedData {
    pub order_id: OrderId,
    pub customer_id: CustomerId,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
    pub placed_at: DateTime<Utc>,
}

/// Data for the OrderStatusChanged event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusChangedData {
    pub order_id: OrderId,
    pub old_status: OrderStatus,
    pub new_status: OrderStatus,
    pub changed_at: DateTime<Utc>,
}

/// A line whose stock was restored during cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestockedLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

/// Data for the OrderCancelled event.
///
/// `restocked` lists only the lines whose product still existed at
/// cancellation time; vanished products are skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCancelledData {
    pub order_id: OrderId,
    pub restocked: Vec<RestockedLine>,
    pub cancelled_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_type_names() {
        let event = OrderEvent::OrderCancelled(OrderCancelledData {
            order_id: OrderId::new(),
            restocked: vec![],
            cancelled_at: Utc::now(),
        });
        assert_eq!(event.event_type(), "OrderCancelled");
    }

    #[test]
    fn order_id_is_extracted_from_any_variant() {
        let order_id = OrderId::new();
        let event = OrderEvent::OrderStatusChanged(OrderStatusChangedData {
            order_id,
            old_status: OrderStatus::Pending,
            new_status: OrderStatus::Shipped,
            changed_at: Utc::now(),
        });
        assert_eq!(event.order_id(), order_id);
    }

    #[test]
    fn serialization_roundtrip() {
        let event = OrderEvent::OrderPlaced(OrderPlacedData {
            order_id: OrderId::new(),
            customer_id: CustomerId::new(),
            items: vec![OrderItem::new(ProductId::new(), 2, Money::from_cents(1000))],
            total_amount: Money::from_cents(2000),
            placed_at: Utc::now(),
        });

        let json = serde_json::to_string(&event).unwrap();
        let back: OrderEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back.event_type(), "OrderPlaced");
        assert_eq!(back.order_id(), event.order_id());
    }

    #[test]
    fn serialized_form_is_tagged() {
        let event = OrderEvent::OrderStatusChanged(OrderStatusChangedData {
            order_id: OrderId::new(),
            old_status: OrderStatus::Pending,
            new_status: OrderStatus::Confirmed,
            changed_at: Utc::now(),
        });

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "OrderStatusChanged");
        assert_eq!(value["data"]["old_status"], "PENDING");
        assert_eq!(value["data"]["new_status"], "CONFIRMED");
    }
}
