//! Customer endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use common::CustomerId;
use domain::Customer;
use domain::repository::CustomerRepository;
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;
use crate::view::OrderView;

#[derive(Serialize)]
pub struct CustomerView {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<&Customer> for CustomerView {
    fn from(customer: &Customer) -> Self {
        Self {
            id: customer.id.to_string(),
            name: customer.name.clone(),
            email: customer.email.clone(),
        }
    }
}

/// GET /customers — list registered customers.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<CustomerView>>, ApiError> {
    let customers = state.customers.find_all().await?;
    Ok(Json(customers.iter().map(CustomerView::from).collect()))
}

/// GET /customers/:id/orders — list a customer's orders.
#[tracing::instrument(skip(state))]
pub async fn orders(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<OrderView>>, ApiError> {
    let customer_id = uuid::Uuid::parse_str(&id)
        .map(CustomerId::from_uuid)
        .map_err(|e| ApiError::BadRequest(format!("invalid customer id: {e}")))?;

    let orders = state.order_service.list_customer_orders(customer_id).await?;
    Ok(Json(orders.iter().map(OrderView::from).collect()))
}
