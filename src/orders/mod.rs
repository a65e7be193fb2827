//! Order engines over an [`OrderStore`]: queries, mutations, and profit aggregation.
//! Testable without a database via `InMemoryOrderStore`.

mod mutation;
mod profit;
mod projection;
mod query;
mod reference;

use std::borrow::Cow;

use tokio::sync::OnceCell;

use crate::error::OrderResult;
use crate::persistence::OrderStore;

pub use reference::ReferenceData;

pub struct OrderService<S> {
    store: S,
    // Reference rows never change under order flows; load them once. A snapshot
    // missing any catalog status is not kept, so reseeding takes effect without a restart.
    reference: OnceCell<ReferenceData>,
}

impl<S: OrderStore> OrderService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            reference: OnceCell::new(),
        }
    }

    pub async fn reference_data(&self) -> OrderResult<Cow<'_, ReferenceData>> {
        if let Some(cached) = self.reference.get() {
            return Ok(Cow::Borrowed(cached));
        }
        let loaded = ReferenceData::load(&self.store).await?;
        if !loaded.has_all_statuses() {
            return Ok(Cow::Owned(loaded));
        }
        Ok(Cow::Borrowed(
            self.reference.get_or_init(|| async move { loaded }).await,
        ))
    }
}
