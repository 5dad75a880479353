//! Demo catalog seeding.

use domain::repository::{CustomerRepository, ProductRepository, RepositoryError};
use domain::{Customer, Money, Product};

use crate::AppState;

/// Seeds a small demo catalog: one customer and two products.
///
/// The generated ids are logged so clients of a fresh instance can place
/// orders without first querying `/customers` and `/products`.
pub async fn seed_demo_data(state: &AppState) -> Result<(), RepositoryError> {
    let customer = Customer::new("Demo Customer", "demo@example.com");
    let customer = state.customers.save(customer).await?;

    let widget = Product::new("Widget", Money::from_cents(1000), 10)
        .with_description("A standard widget");
    let widget = state.products.save(widget).await?;

    let gadget = Product::new("Gadget", Money::from_cents(2000), 5)
        .with_description("A premium gadget");
    let gadget = state.products.save(gadget).await?;

    tracing::info!(
        customer_id = %customer.id,
        widget_id = %widget.id,
        gadget_id = %gadget.id,
        "seeded demo catalog"
    );

    Ok(())
}
