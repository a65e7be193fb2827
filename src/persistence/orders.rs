//! Order persistence on PostgreSQL: load with items, insert atomically, update status.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool};

use super::{OrderStore, reference};
use crate::error::OrderError;
use crate::types::id::EntityId;
use crate::types::order::{Order, OrderItem, Product, Service, StatusRecord};

#[derive(Debug, FromRow)]
pub struct OrderRow {
    pub id: Vec<u8>,
    pub reseller_id: Vec<u8>,
    pub customer_id: Vec<u8>,
    pub status_id: Vec<u8>,
    pub created_date: NaiveDateTime,
}

#[derive(Debug, FromRow)]
pub struct OrderItemRow {
    pub id: Vec<u8>,
    pub order_id: Vec<u8>,
    pub product_id: Vec<u8>,
    pub service_id: Vec<u8>,
    pub quantity: i32,
}

fn item_row_to_item(row: &OrderItemRow) -> Result<OrderItem, OrderError> {
    Ok(OrderItem {
        id: EntityId::from_slice(&row.id)?,
        order_id: EntityId::from_slice(&row.order_id)?,
        product_id: EntityId::from_slice(&row.product_id)?,
        service_id: EntityId::from_slice(&row.service_id)?,
        quantity: row.quantity,
    })
}

fn order_row_to_order(row: &OrderRow, items: Vec<OrderItem>) -> Result<Order, OrderError> {
    Ok(Order {
        id: EntityId::from_slice(&row.id)?,
        reseller_id: EntityId::from_slice(&row.reseller_id)?,
        customer_id: EntityId::from_slice(&row.customer_id)?,
        status_id: EntityId::from_slice(&row.status_id)?,
        created_date: row.created_date,
        items,
    })
}

/// `OrderStore` backed by a Postgres pool.
#[derive(Debug, Clone)]
pub struct PgOrderStore {
    pool: PgPool,
}

impl PgOrderStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for PgOrderStore {
    async fn list_orders(&self) -> Result<Vec<Order>, OrderError> {
        let order_rows = sqlx::query_as::<_, OrderRow>(
            "SELECT id, reseller_id, customer_id, status_id, created_date FROM orders",
        )
        .fetch_all(&self.pool)
        .await?;
        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT id, order_id, product_id, service_id, quantity FROM order_items",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<EntityId, Vec<OrderItem>> = HashMap::new();
        for row in &item_rows {
            let item = item_row_to_item(row)?;
            items_by_order.entry(item.order_id).or_default().push(item);
        }

        tracing::debug!(
            orders = order_rows.len(),
            items = item_rows.len(),
            "loaded orders"
        );

        order_rows
            .iter()
            .map(|row| {
                let id = EntityId::from_slice(&row.id)?;
                order_row_to_order(row, items_by_order.remove(&id).unwrap_or_default())
            })
            .collect()
    }

    async fn find_order(&self, id: EntityId) -> Result<Option<Order>, OrderError> {
        let row = sqlx::query_as::<_, OrderRow>(
            "SELECT id, reseller_id, customer_id, status_id, created_date \
             FROM orders WHERE id = $1",
        )
        .bind(id.as_bytes().as_slice())
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT id, order_id, product_id, service_id, quantity \
             FROM order_items WHERE order_id = $1",
        )
        .bind(id.as_bytes().as_slice())
        .fetch_all(&self.pool)
        .await?;
        let items = item_rows
            .iter()
            .map(item_row_to_item)
            .collect::<Result<Vec<_>, _>>()?;

        order_row_to_order(&row, items).map(Some)
    }

    async fn insert_order(&self, order: &Order) -> Result<(), OrderError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "INSERT INTO orders (id, reseller_id, customer_id, status_id, created_date) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(order.id.as_bytes().as_slice())
        .bind(order.reseller_id.as_bytes().as_slice())
        .bind(order.customer_id.as_bytes().as_slice())
        .bind(order.status_id.as_bytes().as_slice())
        .bind(order.created_date)
        .execute(&mut *tx)
        .await?;

        for item in &order.items {
            sqlx::query(
                "INSERT INTO order_items (id, order_id, product_id, service_id, quantity) \
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(item.id.as_bytes().as_slice())
            .bind(item.order_id.as_bytes().as_slice())
            .bind(item.product_id.as_bytes().as_slice())
            .bind(item.service_id.as_bytes().as_slice())
            .bind(item.quantity)
            .execute(&mut *tx)
            .await?;
        }

        // Dropping `tx` on any error above rolls the whole order back.
        tx.commit().await?;
        Ok(())
    }

    async fn set_order_status(
        &self,
        order_id: EntityId,
        status_id: EntityId,
    ) -> Result<bool, OrderError> {
        let result = sqlx::query("UPDATE orders SET status_id = $1 WHERE id = $2")
            .bind(status_id.as_bytes().as_slice())
            .bind(order_id.as_bytes().as_slice())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_statuses(&self) -> Result<Vec<StatusRecord>, OrderError> {
        reference::list_statuses(&self.pool).await
    }

    async fn list_products(&self) -> Result<Vec<Product>, OrderError> {
        reference::list_products(&self.pool).await
    }

    async fn list_services(&self) -> Result<Vec<Service>, OrderError> {
        reference::list_services(&self.pool).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn id_bytes() -> Vec<u8> {
        Uuid::new_v4().as_bytes().to_vec()
    }

    fn created() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 17)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .unwrap()
    }

    fn order_row() -> OrderRow {
        OrderRow {
            id: id_bytes(),
            reseller_id: id_bytes(),
            customer_id: id_bytes(),
            status_id: id_bytes(),
            created_date: created(),
        }
    }

    fn item_row(order_id: &[u8]) -> OrderItemRow {
        OrderItemRow {
            id: id_bytes(),
            order_id: order_id.to_vec(),
            product_id: id_bytes(),
            service_id: id_bytes(),
            quantity: 3,
        }
    }

    #[test]
    fn order_row_decodes_with_identical_id_bytes() {
        let row = order_row();
        let line = item_row(&row.id);
        let item = item_row_to_item(&line).unwrap();
        let order = order_row_to_order(&row, vec![item.clone()]).unwrap();

        assert_eq!(order.id.as_bytes().as_slice(), row.id.as_slice());
        assert_eq!(order.reseller_id.as_bytes().as_slice(), row.reseller_id.as_slice());
        assert_eq!(order.customer_id.as_bytes().as_slice(), row.customer_id.as_slice());
        assert_eq!(order.status_id.as_bytes().as_slice(), row.status_id.as_slice());
        assert_eq!(order.created_date, created());
        assert_eq!(order.items, vec![item]);
    }

    #[test]
    fn item_row_decodes_with_identical_id_bytes() {
        let order_id = id_bytes();
        let row = item_row(&order_id);
        let item = item_row_to_item(&row).unwrap();

        assert_eq!(item.id.as_bytes().as_slice(), row.id.as_slice());
        assert_eq!(item.order_id.as_bytes().as_slice(), order_id.as_slice());
        assert_eq!(item.product_id.as_bytes().as_slice(), row.product_id.as_slice());
        assert_eq!(item.service_id.as_bytes().as_slice(), row.service_id.as_slice());
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn short_status_id_is_rejected() {
        let mut row = order_row();
        row.status_id.truncate(15);
        let err = order_row_to_order(&row, Vec::new()).unwrap_err();
        assert!(matches!(err, OrderError::InvalidIdentifier(15)));
    }

    #[test]
    fn long_product_id_is_rejected() {
        let mut row = item_row(&id_bytes());
        row.product_id.push(0);
        let err = item_row_to_item(&row).unwrap_err();
        assert!(matches!(err, OrderError::InvalidIdentifier(17)));
    }
}
