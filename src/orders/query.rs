//! Read paths: list all, list by status, single order detail.

use uuid::Uuid;

use super::{OrderService, projection};
use crate::error::OrderResult;
use crate::persistence::OrderStore;
use crate::types::order::Order;
use crate::types::status::OrderStatus;
use crate::types::view::{OrderDetail, OrderSummary};

/// Stable: orders sharing a timestamp keep their relative order.
fn sort_newest_first(orders: &mut [Order]) {
    orders.sort_by(|a, b| b.created_date.cmp(&a.created_date));
}

impl<S: OrderStore> OrderService<S> {
    /// All orders, newest first.
    pub async fn list_orders(&self) -> OrderResult<Vec<OrderSummary>> {
        let reference = self.reference_data().await?;
        let mut orders = self.store.list_orders().await?;
        sort_newest_first(&mut orders);
        tracing::debug!(count = orders.len(), "listing orders");
        orders
            .iter()
            .map(|order| projection::summarize(order, &reference))
            .collect()
    }

    /// Same listing and order as [`list_orders`](Self::list_orders), filtered by status name.
    pub async fn list_orders_by_status(
        &self,
        status: OrderStatus,
    ) -> OrderResult<Vec<OrderSummary>> {
        let name = status.display_name();
        Ok(self
            .list_orders()
            .await?
            .into_iter()
            .filter(|summary| summary.status_name == name)
            .collect())
    }

    /// `Ok(None)` when no order has this id.
    pub async fn get_order(&self, order_id: Uuid) -> OrderResult<Option<OrderDetail>> {
        let Some(order) = self.store.find_order(order_id.into()).await? else {
            tracing::debug!(%order_id, "order not found");
            return Ok(None);
        };
        let reference = self.reference_data().await?;
        projection::detail(&order, &reference).map(Some)
    }
}
