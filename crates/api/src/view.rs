//! Presentation layer: converts orders to their external response shape.
//!
//! Pure translation, no business logic — the workflow stays testable
//! without any formatting concerns. Identifiers render as UUID strings,
//! timestamps as RFC 3339 text (`null` when absent), money as integer
//! cents. `total_amount` is always recomputed as the sum of item totals.

use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId, ProductId};
use domain::{Money, Order, OrderItem, OrderStatus};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External shape of one order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItemView {
    pub product_id: String,
    pub quantity: u32,
    pub price_per_unit: i64,
    pub total_price: i64,
}

impl From<&OrderItem> for OrderItemView {
    fn from(item: &OrderItem) -> Self {
        Self {
            product_id: item.product_id.to_string(),
            quantity: item.quantity,
            price_per_unit: item.price_per_unit.cents(),
            total_price: item.total_price().cents(),
        }
    }
}

/// External shape of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderView {
    pub id: String,
    pub customer_id: String,
    pub items: Vec<OrderItemView>,
    pub status: String,
    pub created_at: String,
    pub updated_at: Option<String>,
    pub total_amount: i64,
}

impl From<&Order> for OrderView {
    fn from(order: &Order) -> Self {
        let items: Vec<OrderItemView> = order.items.iter().map(OrderItemView::from).collect();
        let total_amount = items.iter().map(|item| item.total_price).sum();

        Self {
            id: order.id.to_string(),
            customer_id: order.customer_id.to_string(),
            items,
            status: order.status.to_string(),
            created_at: order.created_at.to_rfc3339(),
            updated_at: order.updated_at.map(|t| t.to_rfc3339()),
            total_amount,
        }
    }
}

/// Error converting an [`OrderView`] back into an order.
#[derive(Debug, Error)]
pub enum ViewParseError {
    #[error("invalid identifier: {0}")]
    Id(#[from] uuid::Error),

    #[error("invalid timestamp: {0}")]
    Timestamp(#[from] chrono::ParseError),

    #[error("unknown status: {0}")]
    Status(String),
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, ViewParseError> {
    Ok(DateTime::parse_from_rfc3339(value)?.with_timezone(&Utc))
}

/// Reverse conversion for consumers deserializing API responses.
impl TryFrom<OrderView> for Order {
    type Error = ViewParseError;

    fn try_from(view: OrderView) -> Result<Self, Self::Error> {
        let status = OrderStatus::parse(&view.status)
            .ok_or_else(|| ViewParseError::Status(view.status.clone()))?;

        let items = view
            .items
            .iter()
            .map(|item| {
                Ok(OrderItem::new(
                    ProductId::from_uuid(uuid::Uuid::parse_str(&item.product_id)?),
                    item.quantity,
                    Money::from_cents(item.price_per_unit),
                ))
            })
            .collect::<Result<Vec<_>, ViewParseError>>()?;

        Ok(Order {
            id: OrderId::from_uuid(uuid::Uuid::parse_str(&view.id)?),
            customer_id: CustomerId::from_uuid(uuid::Uuid::parse_str(&view.customer_id)?),
            items,
            status,
            created_at: parse_timestamp(&view.created_at)?,
            updated_at: view
                .updated_at
                .as_deref()
                .map(parse_timestamp)
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_order() -> Order {
        let mut order = Order::new(CustomerId::new());
        order.add_item(OrderItem::new(ProductId::new(), 2, Money::from_cents(1000)));
        order.add_item(OrderItem::new(ProductId::new(), 1, Money::from_cents(2000)));
        order.update_status(OrderStatus::Confirmed);
        order
    }

    #[test]
    fn view_recomputes_total_amount() {
        let order = sample_order();
        let view = OrderView::from(&order);

        assert_eq!(view.total_amount, 4000);
        assert_eq!(view.items[0].total_price, 2000);
        assert_eq!(view.items[1].total_price, 2000);
        assert_eq!(view.status, "CONFIRMED");
    }

    #[test]
    fn roundtrip_is_lossless() {
        let order = sample_order();
        let view = OrderView::from(&order);
        let back = Order::try_from(view).unwrap();

        assert_eq!(back.id, order.id);
        assert_eq!(back.customer_id, order.customer_id);
        assert_eq!(back.status, order.status);
        assert_eq!(back.items, order.items);
        assert_eq!(back.total_amount(), order.total_amount());
        // RFC 3339 preserves the instant
        assert_eq!(back.created_at, order.created_at);
        assert_eq!(back.updated_at, order.updated_at);
    }

    #[test]
    fn roundtrip_preserves_absent_updated_at() {
        let order = Order::new(CustomerId::new());
        let view = OrderView::from(&order);
        assert!(view.updated_at.is_none());

        let back = Order::try_from(view).unwrap();
        assert!(back.updated_at.is_none());
    }

    #[test]
    fn json_shape_matches_contract() {
        let order = sample_order();
        let value = serde_json::to_value(OrderView::from(&order)).unwrap();

        assert_eq!(value["id"], order.id.to_string());
        assert_eq!(value["customer_id"], order.customer_id.to_string());
        assert_eq!(value["status"], "CONFIRMED");
        assert_eq!(value["total_amount"], 4000);
        assert_eq!(value["items"].as_array().unwrap().len(), 2);
        assert_eq!(value["items"][0]["price_per_unit"], 1000);
        assert!(value["updated_at"].is_string());
    }

    #[test]
    fn malformed_view_is_rejected() {
        let order = sample_order();
        let mut view = OrderView::from(&order);
        view.status = "SHIPPING".to_string();
        assert!(matches!(
            Order::try_from(view),
            Err(ViewParseError::Status(_))
        ));

        let mut view = OrderView::from(&order);
        view.id = "not-a-uuid".to_string();
        assert!(matches!(Order::try_from(view), Err(ViewParseError::Id(_))));
    }
}
