//! Event publishing abstraction.
//!
//! The workflow service publishes an [`OrderEvent`](crate::OrderEvent) after
//! each successful mutation; interested parties subscribe without the
//! workflow knowing who they are. Publishing never blocks and never fails
//! the operation that produced the event.

use std::sync::{Arc, Mutex};

use tokio::sync::broadcast;

use crate::order::OrderEvent;

/// Sink for domain events.
pub trait EventPublisher: Send + Sync {
    /// Publishes a single event. Must not block or fail.
    fn publish(&self, event: OrderEvent);
}

/// Fan-out publisher backed by a tokio broadcast channel.
///
/// Every subscriber receives a clone of each event. Slow or absent
/// subscribers never hold up the workflow; a lagging receiver simply misses
/// events.
#[derive(Clone)]
pub struct BroadcastPublisher {
    tx: broadcast::Sender<OrderEvent>,
}

impl BroadcastPublisher {
    /// Creates a publisher whose channel buffers up to `capacity` events
    /// per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Returns a new subscription receiving all events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.tx.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl EventPublisher for BroadcastPublisher {
    fn publish(&self, event: OrderEvent) {
        // send only errors when there are no subscribers
        if self.tx.send(event).is_err() {
            tracing::debug!("domain event dropped: no subscribers");
        }
    }
}

/// Publisher that records events for inspection in tests.
#[derive(Clone, Default)]
pub struct RecordingPublisher {
    events: Arc<Mutex<Vec<OrderEvent>>>,
}

impl RecordingPublisher {
    /// Creates a new empty recording publisher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of the events published so far.
    pub fn events(&self) -> Vec<OrderEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Returns the event type names published so far, in order.
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .map(OrderEvent::event_type)
            .collect()
    }
}

impl EventPublisher for RecordingPublisher {
    fn publish(&self, event: OrderEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Publisher that discards every event.
#[derive(Clone, Copy, Default)]
pub struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: OrderEvent) {}
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use common::OrderId;

    use crate::order::{OrderCancelledData, OrderStatus, OrderStatusChangedData};

    use super::*;

    fn status_changed(order_id: OrderId) -> OrderEvent {
        OrderEvent::OrderStatusChanged(OrderStatusChangedData {
            order_id,
            old_status: OrderStatus::Pending,
            new_status: OrderStatus::Shipped,
            changed_at: Utc::now(),
        })
    }

    #[tokio::test]
    async fn broadcast_delivers_to_subscriber() {
        let publisher = BroadcastPublisher::new(16);
        let mut rx = publisher.subscribe();

        let order_id = OrderId::new();
        publisher.publish(status_changed(order_id));

        let received = rx.recv().await.unwrap();
        assert_eq!(received.order_id(), order_id);
        assert_eq!(received.event_type(), "OrderStatusChanged");
    }

    #[tokio::test]
    async fn broadcast_without_subscribers_is_silent() {
        let publisher = BroadcastPublisher::new(16);
        assert_eq!(publisher.subscriber_count(), 0);

        // must not panic or block
        publisher.publish(status_changed(OrderId::new()));
    }

    #[test]
    fn recording_publisher_captures_in_order() {
        let publisher = RecordingPublisher::new();
        publisher.publish(status_changed(OrderId::new()));
        publisher.publish(OrderEvent::OrderCancelled(OrderCancelledData {
            order_id: OrderId::new(),
            restocked: vec![],
            cancelled_at: Utc::now(),
        }));

        assert_eq!(
            publisher.event_types(),
            vec!["OrderStatusChanged", "OrderCancelled"]
        );
    }
}
