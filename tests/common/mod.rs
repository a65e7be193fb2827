//! Shared fixtures: one "Email" service with a "100GB Mailbox" product (cost 0.8, price 0.9).

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use order_core::OrderService;
use order_core::persistence::InMemoryOrderStore;
use order_core::types::id::EntityId;
use order_core::types::order::{Order, OrderItem, Product, Service, StatusRecord};
use order_core::types::status::OrderStatus;
use rust_decimal_macros::dec;
use uuid::Uuid;

pub struct Fixture {
    pub store: InMemoryOrderStore,
    pub service: OrderService<InMemoryOrderStore>,
    pub email_service_id: Uuid,
    pub mailbox_product_id: Uuid,
    pub status_ids: Vec<(OrderStatus, EntityId)>,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_statuses(&OrderStatus::ALL)
    }

    /// Only the given status rows are seeded.
    pub fn with_statuses(statuses: &[OrderStatus]) -> Self {
        let email_service_id = Uuid::new_v4();
        let mailbox_product_id = Uuid::new_v4();
        let status_ids: Vec<(OrderStatus, EntityId)> = statuses
            .iter()
            .map(|&status| (status, EntityId::generate()))
            .collect();

        let store = InMemoryOrderStore::with_reference_data(
            status_ids
                .iter()
                .map(|&(status, id)| StatusRecord {
                    id,
                    name: status.display_name().to_string(),
                })
                .collect(),
            vec![Service {
                id: email_service_id.into(),
                name: "Email".to_string(),
            }],
            vec![Product {
                id: mailbox_product_id.into(),
                service_id: email_service_id.into(),
                name: "100GB Mailbox".to_string(),
                unit_cost: dec!(0.8),
                unit_price: dec!(0.9),
            }],
        );
        let service = OrderService::new(store.clone());

        Self {
            store,
            service,
            email_service_id,
            mailbox_product_id,
            status_ids,
        }
    }

    pub fn status_id(&self, status: OrderStatus) -> EntityId {
        self.status_ids
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, id)| *id)
            .expect("status seeded in fixture")
    }

    /// Seed an order with one mailbox line of `quantity` (no line when `quantity` is `None`).
    pub async fn add_order(
        &self,
        quantity: Option<i32>,
        created_date: NaiveDateTime,
        status: OrderStatus,
    ) -> Uuid {
        let order_id = EntityId::generate();
        let items = quantity
            .map(|quantity| OrderItem {
                id: EntityId::generate(),
                order_id,
                product_id: self.mailbox_product_id.into(),
                service_id: self.email_service_id.into(),
                quantity,
            })
            .into_iter()
            .collect();
        self.store
            .seed_order(Order {
                id: order_id,
                reseller_id: EntityId::generate(),
                customer_id: EntityId::generate(),
                status_id: self.status_id(status),
                created_date,
                items,
            })
            .await;
        order_id.to_uuid()
    }
}

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .expect("valid fixture date")
}
