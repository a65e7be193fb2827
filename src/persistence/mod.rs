//! Storage layer: the `OrderStore` port, the PostgreSQL adapter, and an in-memory adapter.

mod memory;
mod orders;
mod pool;
mod reference;

use async_trait::async_trait;

use crate::error::OrderError;
use crate::types::id::EntityId;
use crate::types::order::{Order, Product, Service, StatusRecord};

pub use memory::InMemoryOrderStore;
pub use orders::{OrderItemRow, OrderRow, PgOrderStore};
pub use pool::{create_pool_and_migrate, run_migrations};
pub use reference::{ProductRow, ServiceRow, StatusRow};
pub use sqlx::PgPool;

/// Everything the order engines need from storage. Each call is its own unit of work.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// All orders with their items, in no particular order.
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError>;

    async fn find_order(&self, id: EntityId) -> Result<Option<Order>, OrderError>;

    /// Persist an order and all of its items atomically.
    async fn insert_order(&self, order: &Order) -> Result<(), OrderError>;

    /// Point an order at a new status row. Returns `false` when no order has `order_id`.
    async fn set_order_status(
        &self,
        order_id: EntityId,
        status_id: EntityId,
    ) -> Result<bool, OrderError>;

    async fn list_statuses(&self) -> Result<Vec<StatusRecord>, OrderError>;

    async fn list_products(&self) -> Result<Vec<Product>, OrderError>;

    async fn list_services(&self) -> Result<Vec<Service>, OrderError>;
}
