//! Reference rows: statuses, services, products. Read-only here.

use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::error::OrderError;
use crate::types::id::EntityId;
use crate::types::order::{Product, Service, StatusRecord};

#[derive(Debug, FromRow)]
pub struct StatusRow {
    pub id: Vec<u8>,
    pub name: String,
}

#[derive(Debug, FromRow)]
pub struct ServiceRow {
    pub id: Vec<u8>,
    pub name: String,
}

#[derive(Debug, FromRow)]
pub struct ProductRow {
    pub id: Vec<u8>,
    pub service_id: Vec<u8>,
    pub name: String,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
}

impl TryFrom<StatusRow> for StatusRecord {
    type Error = OrderError;

    fn try_from(row: StatusRow) -> Result<Self, Self::Error> {
        Ok(StatusRecord {
            id: EntityId::from_slice(&row.id)?,
            name: row.name,
        })
    }
}

impl TryFrom<ServiceRow> for Service {
    type Error = OrderError;

    fn try_from(row: ServiceRow) -> Result<Self, Self::Error> {
        Ok(Service {
            id: EntityId::from_slice(&row.id)?,
            name: row.name,
        })
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = OrderError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        Ok(Product {
            id: EntityId::from_slice(&row.id)?,
            service_id: EntityId::from_slice(&row.service_id)?,
            name: row.name,
            unit_cost: row.unit_cost,
            unit_price: row.unit_price,
        })
    }
}

pub(super) async fn list_statuses(pool: &PgPool) -> Result<Vec<StatusRecord>, OrderError> {
    let rows = sqlx::query_as::<_, StatusRow>("SELECT id, name FROM order_statuses")
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(StatusRecord::try_from).collect()
}

pub(super) async fn list_services(pool: &PgPool) -> Result<Vec<Service>, OrderError> {
    let rows = sqlx::query_as::<_, ServiceRow>("SELECT id, name FROM services")
        .fetch_all(pool)
        .await?;
    rows.into_iter().map(Service::try_from).collect()
}

pub(super) async fn list_products(pool: &PgPool) -> Result<Vec<Product>, OrderError> {
    let rows = sqlx::query_as::<_, ProductRow>(
        "SELECT id, service_id, name, unit_cost, unit_price FROM products",
    )
    .fetch_all(pool)
    .await?;
    rows.into_iter().map(Product::try_from).collect()
}
