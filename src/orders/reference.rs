use std::collections::HashMap;

use crate::error::{OrderError, OrderResult};
use crate::persistence::OrderStore;
use crate::types::id::EntityId;
use crate::types::order::{Product, Service, StatusRecord};
use crate::types::status::OrderStatus;

/// Snapshot of the status, service, and product tables keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    statuses: HashMap<EntityId, StatusRecord>,
    services: HashMap<EntityId, Service>,
    products: HashMap<EntityId, Product>,
}

impl ReferenceData {
    pub async fn load<S: OrderStore + ?Sized>(store: &S) -> OrderResult<Self> {
        let statuses = store.list_statuses().await?;
        let services = store.list_services().await?;
        let products = store.list_products().await?;
        tracing::debug!(
            statuses = statuses.len(),
            services = services.len(),
            products = products.len(),
            "loaded reference data"
        );
        Ok(Self::new(statuses, services, products))
    }

    pub fn new(
        statuses: Vec<StatusRecord>,
        services: Vec<Service>,
        products: Vec<Product>,
    ) -> Self {
        Self {
            statuses: statuses.into_iter().map(|s| (s.id, s)).collect(),
            services: services.into_iter().map(|s| (s.id, s)).collect(),
            products: products.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Id of the status row whose name is `status`'s display name.
    pub fn status_id(&self, status: OrderStatus) -> OrderResult<EntityId> {
        let name = status.display_name();
        self.statuses
            .values()
            .find(|row| row.name == name)
            .map(|row| row.id)
            .ok_or_else(|| {
                tracing::warn!(status = name, "order status row missing");
                OrderError::ReferenceDataMissing(format!("order status {name:?}"))
            })
    }

    /// Every catalog status has a row.
    pub fn has_all_statuses(&self) -> bool {
        OrderStatus::ALL.into_iter().all(|status| {
            let name = status.display_name();
            self.statuses.values().any(|row| row.name == name)
        })
    }

    pub fn status_name(&self, status_id: EntityId) -> OrderResult<&str> {
        self.statuses
            .get(&status_id)
            .map(|row| row.name.as_str())
            .ok_or_else(|| OrderError::ReferenceDataMissing(format!("order status {status_id}")))
    }

    pub fn product(&self, id: EntityId) -> Option<&Product> {
        self.products.get(&id)
    }

    pub fn service(&self, id: EntityId) -> Option<&Service> {
        self.services.get(&id)
    }
}
