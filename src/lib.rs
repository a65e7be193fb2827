//! Order persistence and query core: create and list orders, change status,
//! and aggregate monthly profit over a pluggable [`persistence::OrderStore`].

pub mod config;
pub mod error;
pub mod orders;
pub mod persistence;
pub mod types;

pub use error::{OrderError, OrderResult};
pub use orders::OrderService;
