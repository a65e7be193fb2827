//! Read models handed to the request layer. Field names serialize in camelCase.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::order::Quantity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    pub item_count: usize,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub created_date: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetail {
    pub id: Uuid,
    pub reseller_id: Uuid,
    pub customer_id: Uuid,
    pub status_id: Uuid,
    pub status_name: String,
    pub created_date: NaiveDateTime,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub items: Vec<OrderItemDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDetail {
    pub id: Uuid,
    pub order_id: Uuid,
    pub service_id: Uuid,
    pub service_name: String,
    pub product_id: Uuid,
    pub product_name: String,
    pub unit_cost: Decimal,
    pub unit_price: Decimal,
    pub total_cost: Decimal,
    pub total_price: Decimal,
    pub quantity: Quantity,
}

/// Profit of completed orders for one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyProfit {
    pub year: i32,
    pub month: u32,
    pub profit: Decimal,
}
