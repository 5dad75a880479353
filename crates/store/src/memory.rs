use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{CustomerId, OrderId, ProductId};
use domain::repository::{
    CustomerRepository, OrderRepository, ProductRepository, RepositoryResult,
};
use domain::{Customer, Order, Product};

/// In-memory customer repository.
#[derive(Clone, Default)]
pub struct InMemoryCustomerRepository {
    customers: Arc<RwLock<HashMap<CustomerId, Customer>>>,
}

impl InMemoryCustomerRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored customers.
    pub async fn count(&self) -> usize {
        self.customers.read().await.len()
    }

    /// Removes all stored customers.
    pub async fn clear(&self) {
        self.customers.write().await.clear();
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn find_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        Ok(self.customers.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Customer>> {
        Ok(self.customers.read().await.values().cloned().collect())
    }

    async fn save(&self, customer: Customer) -> RepositoryResult<Customer> {
        self.customers
            .write()
            .await
            .insert(customer.id, customer.clone());
        Ok(customer)
    }

    async fn update(&self, customer: Customer) -> RepositoryResult<Customer> {
        let mut customers = self.customers.write().await;
        if customers.contains_key(&customer.id) {
            customers.insert(customer.id, customer.clone());
        }
        Ok(customer)
    }

    async fn delete(&self, id: CustomerId) -> RepositoryResult<()> {
        self.customers.write().await.remove(&id);
        Ok(())
    }
}

/// In-memory product repository.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<ProductId, Product>>>,
}

impl InMemoryProductRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored products.
    pub async fn count(&self) -> usize {
        self.products.read().await.len()
    }

    /// Removes all stored products.
    pub async fn clear(&self) {
        self.products.write().await.clear();
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        Ok(self.products.read().await.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Vec<Product>> {
        let needle = name.to_lowercase();
        Ok(self
            .products
            .read()
            .await
            .values()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Product>> {
        Ok(self.products.read().await.values().cloned().collect())
    }

    async fn save(&self, product: Product) -> RepositoryResult<Product> {
        self.products
            .write()
            .await
            .insert(product.id, product.clone());
        Ok(product)
    }

    async fn update(&self, product: Product) -> RepositoryResult<Product> {
        let mut products = self.products.write().await;
        if products.contains_key(&product.id) {
            products.insert(product.id, product.clone());
        }
        Ok(product)
    }

    async fn delete(&self, id: ProductId) -> RepositoryResult<()> {
        self.products.write().await.remove(&id);
        Ok(())
    }
}

/// In-memory order repository.
#[derive(Clone, Default)]
pub struct InMemoryOrderRepository {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderRepository {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub async fn count(&self) -> usize {
        self.orders.read().await.len()
    }

    /// Removes all stored orders.
    pub async fn clear(&self) {
        self.orders.write().await.clear();
    }
}

#[async_trait]
impl OrderRepository for InMemoryOrderRepository {
    async fn find_by_id(&self, id: OrderId) -> RepositoryResult<Option<Order>> {
        Ok(self.orders.read().await.get(&id).cloned())
    }

    async fn find_all_by_customer_id(
        &self,
        customer_id: CustomerId,
    ) -> RepositoryResult<Vec<Order>> {
        Ok(self
            .orders
            .read()
            .await
            .values()
            .filter(|order| order.customer_id == customer_id)
            .cloned()
            .collect())
    }

    async fn find_all(&self) -> RepositoryResult<Vec<Order>> {
        Ok(self.orders.read().await.values().cloned().collect())
    }

    async fn save(&self, order: Order) -> RepositoryResult<Order> {
        self.orders.write().await.insert(order.id, order.clone());
        Ok(order)
    }

    async fn update(&self, order: Order) -> RepositoryResult<Order> {
        let mut orders = self.orders.write().await;
        if orders.contains_key(&order.id) {
            orders.insert(order.id, order.clone());
        }
        Ok(order)
    }

    async fn delete(&self, id: OrderId) -> RepositoryResult<()> {
        self.orders.write().await.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::Money;

    use super::*;

    #[tokio::test]
    async fn save_is_an_upsert() {
        let repo = InMemoryProductRepository::new();
        let mut product = Product::new("Widget", Money::from_cents(1000), 10);
        let id = product.id;

        repo.save(product.clone()).await.unwrap();
        product.update_stock(7);
        repo.save(product).await.unwrap();

        assert_eq!(repo.count().await, 1);
        let stored = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(stored.stock_quantity, 7);
    }

    #[tokio::test]
    async fn update_on_missing_id_is_a_silent_noop() {
        let repo = InMemoryOrderRepository::new();
        let order = Order::new(CustomerId::new());

        let returned = repo.update(order.clone()).await.unwrap();

        assert_eq!(returned.id, order.id);
        assert_eq!(repo.count().await, 0);
        assert!(repo.find_by_id(order.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_on_missing_id_returns_none() {
        let repo = InMemoryCustomerRepository::new();
        assert!(repo.find_by_id(CustomerId::new()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_is_stable_without_writes() {
        let repo = InMemoryCustomerRepository::new();
        let customer = Customer::new("Alice", "alice@example.com");
        let id = customer.id;
        repo.save(customer).await.unwrap();

        let first = repo.find_by_id(id).await.unwrap().unwrap();
        let second = repo.find_by_id(id).await.unwrap().unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn find_by_name_matches_substring_case_insensitively() {
        let repo = InMemoryProductRepository::new();
        repo.save(Product::new("Blue Widget", Money::from_cents(1000), 1))
            .await
            .unwrap();
        repo.save(Product::new("Gadget", Money::from_cents(2000), 1))
            .await
            .unwrap();

        let found = repo.find_by_name("widget").await.unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Blue Widget");

        assert!(repo.find_by_name("sprocket").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn find_all_by_customer_id_scans_orders() {
        let repo = InMemoryOrderRepository::new();
        let customer_id = CustomerId::new();

        repo.save(Order::new(customer_id)).await.unwrap();
        repo.save(Order::new(customer_id)).await.unwrap();
        repo.save(Order::new(CustomerId::new())).await.unwrap();

        let orders = repo.find_all_by_customer_id(customer_id).await.unwrap();
        assert_eq!(orders.len(), 2);
        assert!(orders.iter().all(|o| o.customer_id == customer_id));
    }

    #[tokio::test]
    async fn delete_removes_entity() {
        let repo = InMemoryProductRepository::new();
        let product = Product::new("Widget", Money::from_cents(1000), 1);
        let id = product.id;
        repo.save(product).await.unwrap();

        repo.delete(id).await.unwrap();
        assert!(repo.find_by_id(id).await.unwrap().is_none());

        // deleting again is fine
        repo.delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let repo = InMemoryOrderRepository::new();
        repo.save(Order::new(CustomerId::new())).await.unwrap();
        assert_eq!(repo.count().await, 1);

        repo.clear().await;
        assert_eq!(repo.count().await, 0);
    }

    #[tokio::test]
    async fn clones_share_the_same_map() {
        let repo = InMemoryCustomerRepository::new();
        let handle = repo.clone();

        handle
            .save(Customer::new("Alice", "alice@example.com"))
            .await
            .unwrap();

        assert_eq!(repo.count().await, 1);
    }
}
