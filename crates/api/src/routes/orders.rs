//! Order endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use common::{CustomerId, OrderId, ProductId};
use domain::OrderLine;
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;
use crate::view::OrderView;

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub customer_id: String,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Deserialize)]
pub struct OrderItemRequest {
    pub product_id: String,
    pub quantity: u32,
}

#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

// Malformed identifiers are rejected here, before the workflow runs.
fn parse_uuid(value: &str, what: &str) -> Result<uuid::Uuid, ApiError> {
    uuid::Uuid::parse_str(value).map_err(|e| ApiError::BadRequest(format!("invalid {what}: {e}")))
}

// -- Handlers --

/// POST /orders — place an order for a customer.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<OrderView>), ApiError> {
    let customer_id = CustomerId::from_uuid(parse_uuid(&req.customer_id, "customer_id")?);

    let lines = req
        .items
        .iter()
        .map(|item| {
            Ok(OrderLine::new(
                ProductId::from_uuid(parse_uuid(&item.product_id, "product_id")?),
                item.quantity,
            ))
        })
        .collect::<Result<Vec<_>, ApiError>>()?;

    let order = state.order_service.create_order(customer_id, lines).await?;

    let location = format!("/orders/{}", order.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(OrderView::from(&order)),
    ))
}

/// GET /orders/:id — load an order by ID.
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>, ApiError> {
    let order_id = OrderId::from_uuid(parse_uuid(&id, "order id")?);
    let order = state.order_service.get_order(order_id).await?;
    Ok(Json(OrderView::from(&order)))
}

/// PUT /orders/:id/status — set an order's status.
#[tracing::instrument(skip(state, req))]
pub async fn update_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Result<Json<OrderView>, ApiError> {
    let order_id = OrderId::from_uuid(parse_uuid(&id, "order id")?);
    let order = state
        .order_service
        .update_order_status(order_id, &req.status)
        .await?;
    Ok(Json(OrderView::from(&order)))
}

/// DELETE /orders/:id — cancel an order, restoring stock.
#[tracing::instrument(skip(state))]
pub async fn cancel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderView>, ApiError> {
    let order_id = OrderId::from_uuid(parse_uuid(&id, "order id")?);
    let order = state.order_service.cancel_order(order_id).await?;
    Ok(Json(OrderView::from(&order)))
}
