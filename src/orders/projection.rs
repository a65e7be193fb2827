//! Stored records -> read models, with totals computed from quantity and unit values.

use rust_decimal::Decimal;

use super::ReferenceData;
use crate::error::{OrderError, OrderResult};
use crate::types::id::EntityId;
use crate::types::order::{Order, OrderItem, Product};
use crate::types::view::{OrderDetail, OrderItemDetail, OrderSummary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Totals {
    pub cost: Decimal,
    pub price: Decimal,
}

impl Totals {
    const ZERO: Totals = Totals {
        cost: Decimal::ZERO,
        price: Decimal::ZERO,
    };

    pub fn profit(self, order_id: EntityId) -> OrderResult<Decimal> {
        self.price
            .checked_sub(self.cost)
            .ok_or_else(|| overflow("profit", order_id))
    }

    fn checked_add(self, other: Totals, order_id: EntityId) -> OrderResult<Totals> {
        Ok(Totals {
            cost: self
                .cost
                .checked_add(other.cost)
                .ok_or_else(|| overflow("total cost", order_id))?,
            price: self
                .price
                .checked_add(other.price)
                .ok_or_else(|| overflow("total price", order_id))?,
        })
    }
}

fn product_of<'a>(reference: &'a ReferenceData, item: &OrderItem) -> OrderResult<&'a Product> {
    reference
        .product(item.product_id)
        .ok_or_else(|| missing("product", item.product_id))
}

fn missing(kind: &str, id: EntityId) -> OrderError {
    OrderError::ReferenceDataMissing(format!("{kind} {id}"))
}

pub(crate) fn overflow(what: &str, order_id: EntityId) -> OrderError {
    OrderError::AmountOverflow(format!("{what} of order {order_id}"))
}

fn line_totals(item: &OrderItem, product: &Product) -> OrderResult<Totals> {
    let quantity = Decimal::from(item.quantity);
    Ok(Totals {
        cost: product
            .unit_cost
            .checked_mul(quantity)
            .ok_or_else(|| overflow("line cost", item.order_id))?,
        price: product
            .unit_price
            .checked_mul(quantity)
            .ok_or_else(|| overflow("line price", item.order_id))?,
    })
}

/// Sum over the order's items; zero for an order without items.
pub(crate) fn order_totals(order: &Order, reference: &ReferenceData) -> OrderResult<Totals> {
    order.items.iter().try_fold(Totals::ZERO, |acc, item| {
        let line = line_totals(item, product_of(reference, item)?)?;
        acc.checked_add(line, order.id)
    })
}

pub(crate) fn summarize(order: &Order, reference: &ReferenceData) -> OrderResult<OrderSummary> {
    let totals = order_totals(order, reference)?;
    Ok(OrderSummary {
        id: order.id.to_uuid(),
        reseller_id: order.reseller_id.to_uuid(),
        customer_id: order.customer_id.to_uuid(),
        status_id: order.status_id.to_uuid(),
        status_name: reference.status_name(order.status_id)?.to_string(),
        item_count: order.items.len(),
        total_cost: totals.cost,
        total_price: totals.price,
        created_date: order.created_date,
    })
}

pub(crate) fn detail(order: &Order, reference: &ReferenceData) -> OrderResult<OrderDetail> {
    let totals = order_totals(order, reference)?;
    let items = order
        .items
        .iter()
        .map(|item| {
            let product = product_of(reference, item)?;
            let service = reference
                .service(item.service_id)
                .ok_or_else(|| missing("service", item.service_id))?;
            let line = line_totals(item, product)?;
            Ok(OrderItemDetail {
                id: item.id.to_uuid(),
                order_id: item.order_id.to_uuid(),
                service_id: item.service_id.to_uuid(),
                service_name: service.name.clone(),
                product_id: item.product_id.to_uuid(),
                product_name: product.name.clone(),
                unit_cost: product.unit_cost,
                unit_price: product.unit_price,
                total_cost: line.cost,
                total_price: line.price,
                quantity: item.quantity,
            })
        })
        .collect::<OrderResult<Vec<_>>>()?;

    Ok(OrderDetail {
        id: order.id.to_uuid(),
        reseller_id: order.reseller_id.to_uuid(),
        customer_id: order.customer_id.to_uuid(),
        status_id: order.status_id.to_uuid(),
        status_name: reference.status_name(order.status_id)?.to_string(),
        created_date: order.created_date,
        total_cost: totals.cost,
        total_price: totals.price,
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::order::{Service, StatusRecord};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    fn order_with(unit_cost: Decimal, quantities: &[i32]) -> (Order, ReferenceData) {
        let order_id = EntityId::generate();
        let service = Service {
            id: EntityId::generate(),
            name: "Email".to_string(),
        };
        let product = Product {
            id: EntityId::generate(),
            service_id: service.id,
            name: "100GB Mailbox".to_string(),
            unit_cost,
            unit_price: dec!(0.9),
        };
        let status = StatusRecord {
            id: EntityId::generate(),
            name: "Created".to_string(),
        };
        let order = Order {
            id: order_id,
            reseller_id: EntityId::generate(),
            customer_id: EntityId::generate(),
            status_id: status.id,
            created_date: NaiveDate::from_ymd_opt(2024, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .unwrap(),
            items: quantities
                .iter()
                .map(|&quantity| OrderItem {
                    id: EntityId::generate(),
                    order_id,
                    product_id: product.id,
                    service_id: service.id,
                    quantity,
                })
                .collect(),
        };
        (order, ReferenceData::new(vec![status], vec![service], vec![product]))
    }

    #[test]
    fn totals_multiply_and_sum() {
        let (order, reference) = order_with(dec!(0.8), &[2, 1]);
        let totals = order_totals(&order, &reference).unwrap();
        assert_eq!(totals.cost, dec!(2.4));
        assert_eq!(totals.price, dec!(2.7));
        assert_eq!(totals.profit(order.id).unwrap(), dec!(0.3));
    }

    #[test]
    fn line_overflow_is_an_error() {
        let (order, reference) = order_with(Decimal::MAX, &[2]);
        let err = order_totals(&order, &reference).unwrap_err();
        assert!(matches!(err, OrderError::AmountOverflow(_)));
        assert!(summarize(&order, &reference).is_err());
        assert!(detail(&order, &reference).is_err());
    }

    #[test]
    fn sum_overflow_is_an_error() {
        let (order, reference) = order_with(Decimal::MAX, &[1, 1]);
        let err = order_totals(&order, &reference).unwrap_err();
        assert!(matches!(err, OrderError::AmountOverflow(_)));
    }
}
