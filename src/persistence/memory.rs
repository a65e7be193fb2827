//! In-process `OrderStore` for tests, demos, and embedding without a database.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::OrderStore;
use crate::error::OrderError;
use crate::types::id::EntityId;
use crate::types::order::{Order, Product, Service, StatusRecord};

#[derive(Debug, Default)]
struct Tables {
    orders: HashMap<EntityId, Order>,
    statuses: Vec<StatusRecord>,
    products: Vec<Product>,
    services: Vec<Service>,
}

/// Cloning shares the underlying tables.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with reference rows and no orders.
    pub fn with_reference_data(
        statuses: Vec<StatusRecord>,
        services: Vec<Service>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables {
                orders: HashMap::new(),
                statuses,
                products,
                services,
            })),
        }
    }

    /// Put an order in place as-is, bypassing the create path (fixed ids and dates).
    pub async fn seed_order(&self, order: Order) {
        self.tables.write().await.orders.insert(order.id, order);
    }

    /// Add a status row after construction, as a late seed would.
    pub async fn seed_status(&self, status: StatusRecord) {
        self.tables.write().await.statuses.push(status);
    }

    pub async fn order_count(&self) -> usize {
        self.tables.read().await.orders.len()
    }

    pub async fn item_count(&self) -> usize {
        self.tables
            .read()
            .await
            .orders
            .values()
            .map(|order| order.items.len())
            .sum()
    }
}

#[async_trait]
impl OrderStore for InMemoryOrderStore {
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self.tables.read().await.orders.values().cloned().collect())
    }

    async fn find_order(&self, id: EntityId) -> Result<Option<Order>, OrderError> {
        Ok(self.tables.read().await.orders.get(&id).cloned())
    }

    async fn insert_order(&self, order: &Order) -> Result<(), OrderError> {
        // Order and items land under a single write guard.
        self.tables
            .write()
            .await
            .orders
            .insert(order.id, order.clone());
        Ok(())
    }

    async fn set_order_status(
        &self,
        order_id: EntityId,
        status_id: EntityId,
    ) -> Result<bool, OrderError> {
        let mut guard = self.tables.write().await;
        match guard.orders.get_mut(&order_id) {
            Some(order) => {
                order.status_id = status_id;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn list_statuses(&self) -> Result<Vec<StatusRecord>, OrderError> {
        Ok(self.tables.read().await.statuses.clone())
    }

    async fn list_products(&self) -> Result<Vec<Product>, OrderError> {
        Ok(self.tables.read().await.products.clone())
    }

    async fn list_services(&self) -> Result<Vec<Service>, OrderError> {
        Ok(self.tables.read().await.services.clone())
    }
}
