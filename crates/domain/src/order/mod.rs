//! Order aggregate: entity, status lifecycle, events, and the workflow service.

mod entity;
mod events;
mod service;
mod status;

pub use entity::{Order, OrderItem};
pub use events::{
    OrderCancelledData, OrderEvent, OrderPlacedData, OrderStatusChangedData, RestockedLine,
};
pub use service::{OrderLine, OrderService};
pub use status::OrderStatus;
