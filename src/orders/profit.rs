use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::{OrderService, projection};
use crate::error::OrderResult;
use crate::persistence::OrderStore;
use crate::types::status::OrderStatus;
use crate::types::view::MonthlyProfit;

impl<S: OrderStore> OrderService<S> {
    /// Profit (price - cost) of completed orders per calendar month of creation,
    /// latest month first. Months without completed orders are absent.
    pub async fn monthly_profit(&self) -> OrderResult<Vec<MonthlyProfit>> {
        let reference = self.reference_data().await?;
        let orders = self.store.list_orders().await?;
        let completed = OrderStatus::Completed.display_name();

        let mut by_month: BTreeMap<(i32, u32), Decimal> = BTreeMap::new();
        for order in &orders {
            if reference.status_name(order.status_id)? != completed {
                continue;
            }
            let profit = projection::order_totals(order, &reference)?.profit(order.id)?;
            let key = (order.created_date.year(), order.created_date.month());
            let month = by_month.entry(key).or_insert(Decimal::ZERO);
            *month = month
                .checked_add(profit)
                .ok_or_else(|| projection::overflow("monthly profit", order.id))?;
        }

        tracing::debug!(months = by_month.len(), "aggregated monthly profit");
        Ok(by_month
            .into_iter()
            .rev()
            .map(|((year, month), profit)| MonthlyProfit {
                year,
                month,
                profit,
            })
            .collect())
    }
}
