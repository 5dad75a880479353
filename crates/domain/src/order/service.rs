//! Order workflow service.
//!
//! Orchestrates create / update-status / cancel operations across the
//! order, customer, and product repositories, enforcing the stock and
//! lifecycle rules. Conversion to an external response shape is the
//! presentation layer's job; this service only ever deals in entities.

use std::sync::Arc;

use chrono::Utc;
use common::{CustomerId, OrderId, ProductId};

use crate::error::OrderError;
use crate::publisher::EventPublisher;
use crate::repository::{CustomerRepository, OrderRepository, ProductRepository};

use super::events::{
    OrderCancelledData, OrderEvent, OrderPlacedData, OrderStatusChangedData, RestockedLine,
};
use super::{Order, OrderItem, OrderStatus};

/// A requested order line: which product and how many units.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    /// Creates a new order line.
    pub fn new(product_id: ProductId, quantity: u32) -> Self {
        Self {
            product_id,
            quantity,
        }
    }
}

/// Service executing the order workflow.
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    customers: Arc<dyn CustomerRepository>,
    products: Arc<dyn ProductRepository>,
    publisher: Arc<dyn EventPublisher>,
}

impl OrderService {
    /// Creates a new order service over the given repositories and publisher.
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        customers: Arc<dyn CustomerRepository>,
        products: Arc<dyn ProductRepository>,
        publisher: Arc<dyn EventPublisher>,
    ) -> Self {
        Self {
            orders,
            customers,
            products,
            publisher,
        }
    }

    /// Creates an order for a customer, reserving stock line by line.
    ///
    /// Stock is decremented and persisted per line as each line validates.
    /// A later line failing does NOT roll back decrements already applied
    /// for earlier lines in the same call; only the order itself is never
    /// persisted partially.
    #[tracing::instrument(skip(self, lines), fields(line_count = lines.len()))]
    pub async fn create_order(
        &self,
        customer_id: CustomerId,
        lines: Vec<OrderLine>,
    ) -> Result<Order, OrderError> {
        self.customers
            .find_by_id(customer_id)
            .await?
            .ok_or(OrderError::CustomerNotFound(customer_id))?;

        let mut order = Order::new(customer_id);

        for line in &lines {
            if line.quantity == 0 {
                return Err(OrderError::InvalidQuantity {
                    product_id: line.product_id,
                    quantity: line.quantity,
                });
            }

            let mut product = self
                .products
                .find_by_id(line.product_id)
                .await?
                .ok_or(OrderError::ProductNotFound(line.product_id))?;

            if product.stock_quantity < line.quantity {
                return Err(OrderError::InsufficientStock {
                    name: product.name.clone(),
                    available: product.stock_quantity,
                    requested: line.quantity,
                });
            }

            // Snapshot the unit price before touching stock.
            order.add_item(OrderItem::new(line.product_id, line.quantity, product.price));
            product.update_stock(product.stock_quantity - line.quantity);
            self.products.update(product).await?;
        }

        let order = self.orders.save(order).await?;

        metrics::counter!("orders_created_total").increment(1);
        tracing::info!(
            order_id = %order.id,
            customer_id = %customer_id,
            total_cents = order.total_amount().cents(),
            "order placed"
        );

        self.publisher.publish(OrderEvent::OrderPlaced(OrderPlacedData {
            order_id: order.id,
            customer_id,
            items: order.items.clone(),
            total_amount: order.total_amount(),
            placed_at: Utc::now(),
        }));

        Ok(order)
    }

    /// Sets an order's status to any of the five known statuses.
    ///
    /// The transition itself is unrestricted; only the status string is
    /// validated. Cancellation has its own, stricter operation.
    #[tracing::instrument(skip(self))]
    pub async fn update_order_status(
        &self,
        order_id: OrderId,
        status: &str,
    ) -> Result<Order, OrderError> {
        let mut order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        let new_status = OrderStatus::parse(status).ok_or_else(|| OrderError::InvalidStatus {
            status: status.to_string(),
        })?;

        let old_status = order.status;
        order.update_status(new_status);
        let order = self.orders.update(order).await?;

        tracing::info!(order_id = %order_id, %old_status, %new_status, "order status updated");

        self.publisher
            .publish(OrderEvent::OrderStatusChanged(OrderStatusChangedData {
                order_id,
                old_status,
                new_status,
                changed_at: Utc::now(),
            }));

        Ok(order)
    }

    /// Cancels a `Pending` or `Confirmed` order, restoring stock for every
    /// line whose product still exists.
    #[tracing::instrument(skip(self))]
    pub async fn cancel_order(&self, order_id: OrderId) -> Result<Order, OrderError> {
        let mut order = self
            .orders
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        if !order.status.can_cancel() {
            return Err(OrderError::InvalidCancellation(order.status));
        }

        order.update_status(OrderStatus::Cancelled);

        let mut restocked = Vec::with_capacity(order.items.len());
        for item in &order.items {
            match self.products.find_by_id(item.product_id).await? {
                Some(mut product) => {
                    product.update_stock(product.stock_quantity + item.quantity);
                    self.products.update(product).await?;
                    restocked.push(RestockedLine {
                        product_id: item.product_id,
                        quantity: item.quantity,
                    });
                }
                // The product left the catalog after the order was placed;
                // there is no stock counter left to restore.
                None => {
                    tracing::warn!(
                        order_id = %order_id,
                        product_id = %item.product_id,
                        "skipping restock for missing product"
                    );
                }
            }
        }

        let order = self.orders.update(order).await?;

        metrics::counter!("orders_cancelled_total").increment(1);
        tracing::info!(order_id = %order_id, restocked = restocked.len(), "order cancelled");

        self.publisher
            .publish(OrderEvent::OrderCancelled(OrderCancelledData {
                order_id,
                restocked,
                cancelled_at: Utc::now(),
            }));

        Ok(order)
    }

    /// Loads an order by id.
    #[tracing::instrument(skip(self))]
    pub async fn get_order(&self, order_id: OrderId) -> Result<Order, OrderError> {
        self.orders
            .find_by_id(order_id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))
    }

    /// Lists all orders placed by a customer.
    #[tracing::instrument(skip(self))]
    pub async fn list_customer_orders(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Order>, OrderError> {
        Ok(self.orders.find_all_by_customer_id(customer_id).await?)
    }
}
