//! Write paths: create an order with its items, change an order's status.

use chrono::Local;
use uuid::Uuid;

use super::{OrderService, projection};
use crate::error::{OrderError, OrderResult};
use crate::persistence::OrderStore;
use crate::types::id::EntityId;
use crate::types::order::{CreateOrder, Order, OrderItem};
use crate::types::status::OrderStatus;
use crate::types::view::OrderDetail;

impl<S: OrderStore> OrderService<S> {
    /// Validate, resolve the "Created" status, and persist order + items in one write.
    /// Nothing is written if any check fails.
    pub async fn create_order(&self, request: &CreateOrder) -> OrderResult<Uuid> {
        request.validate()?;

        let reference = self.reference_data().await?;
        let status_id = reference.status_id(OrderStatus::Created)?;

        for line in &request.items {
            if reference.product(line.product_id.into()).is_none() {
                return Err(OrderError::UnknownReference {
                    kind: "product",
                    id: line.product_id,
                });
            }
            if reference.service(line.service_id.into()).is_none() {
                return Err(OrderError::UnknownReference {
                    kind: "service",
                    id: line.service_id,
                });
            }
        }

        let order_id = EntityId::generate();
        let order = Order {
            id: order_id,
            reseller_id: request.reseller_id.into(),
            customer_id: request.customer_id.into(),
            status_id,
            created_date: Local::now().naive_local(),
            items: request
                .items
                .iter()
                .map(|line| OrderItem {
                    id: EntityId::generate(),
                    order_id,
                    product_id: line.product_id.into(),
                    service_id: line.service_id.into(),
                    quantity: line.quantity,
                })
                .collect(),
        };

        self.store.insert_order(&order).await?;
        tracing::info!(
            %order_id,
            reseller_id = %request.reseller_id,
            customer_id = %request.customer_id,
            items = order.items.len(),
            "order created"
        );
        Ok(order_id.to_uuid())
    }

    /// Any status may move to any other; there is no transition table.
    pub async fn update_order_status(
        &self,
        order_id: Uuid,
        status: OrderStatus,
    ) -> OrderResult<OrderDetail> {
        let id = EntityId::from(order_id);
        let mut order = self
            .store
            .find_order(id)
            .await?
            .ok_or(OrderError::OrderNotFound(order_id))?;

        let reference = self.reference_data().await?;
        let status_id = reference.status_id(status)?;

        if !self.store.set_order_status(id, status_id).await? {
            return Err(OrderError::OrderNotFound(order_id));
        }
        order.status_id = status_id;

        tracing::info!(%order_id, status = status.display_name(), "order status updated");
        projection::detail(&order, &reference)
    }
}
