//! Product catalog endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::Product;
use domain::repository::ProductRepository;
use serde::Serialize;

use crate::AppState;
use crate::error::ApiError;

#[derive(Serialize)]
pub struct ProductView {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    pub stock_quantity: u32,
}

impl From<&Product> for ProductView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price.cents(),
            stock_quantity: product.stock_quantity,
        }
    }
}

/// GET /products — list the product catalog with current stock.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<ProductView>>, ApiError> {
    let products = state.products.find_all().await?;
    Ok(Json(products.iter().map(ProductView::from).collect()))
}
