use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OrderError;
use crate::types::id::EntityId;

pub type Quantity = i32;

/// Persisted order together with the items it owns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: EntityId,
    pub reseller_id: EntityId,
    pub customer_id: EntityId,
    pub status_id: EntityId,
    /// Local wall-clock time, no zone. Never changes after insert.
    pub created_date: NaiveDateTime,
    pub items: Vec<OrderItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub id: EntityId,
    pub order_id: EntityId,
    pub product_id: EntityId,
    pub service_id: EntityId,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: EntityId,
    pub service_id: EntityId,
    pub name: String,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    pub id: EntityId,
    pub name: String,
}

/// Row of the `order_statuses` reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub id: EntityId,
    pub name: String,
}

/// Request to place a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrder {
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub items: Vec<CreateOrderItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItem {
    pub product_id: Uuid,
    pub service_id: Uuid,
    pub quantity: Quantity,
}

impl CreateOrder {
    /// Required-field checks: no nil ids, at least one item, no zero quantity.
    /// Negative quantities and repeated product/service lines are accepted.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.reseller_id.is_nil() {
            return Err(OrderError::InvalidRequest("resellerId is required".into()));
        }
        if self.customer_id.is_nil() {
            return Err(OrderError::InvalidRequest("customerId is required".into()));
        }
        if self.items.is_empty() {
            return Err(OrderError::InvalidRequest(
                "an order needs at least one item".into(),
            ));
        }
        for (index, item) in self.items.iter().enumerate() {
            if item.product_id.is_nil() {
                return Err(OrderError::InvalidRequest(format!(
                    "items[{index}].productId is required"
                )));
            }
            if item.service_id.is_nil() {
                return Err(OrderError::InvalidRequest(format!(
                    "items[{index}].serviceId is required"
                )));
            }
            if item.quantity == 0 {
                return Err(OrderError::InvalidRequest(format!(
                    "items[{index}].quantity is required"
                )));
            }
        }
        Ok(())
    }
}
