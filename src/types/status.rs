//! Order status catalog: symbolic name, display name, and parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "String")]
pub enum OrderStatus {
    Created,
    InProgress,
    Completed,
    Failed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Created,
        OrderStatus::InProgress,
        OrderStatus::Completed,
        OrderStatus::Failed,
    ];

    /// Name stored in the `order_statuses` reference table.
    pub fn display_name(self) -> &'static str {
        match self {
            OrderStatus::Created => "Created",
            OrderStatus::InProgress => "In Progress",
            OrderStatus::Completed => "Completed",
            OrderStatus::Failed => "Failed",
        }
    }

    /// Symbolic name accepted by [`OrderStatus::parse`].
    pub fn symbol(self) -> &'static str {
        match self {
            OrderStatus::Created => "created",
            OrderStatus::InProgress => "inProgress",
            OrderStatus::Completed => "completed",
            OrderStatus::Failed => "failed",
        }
    }

    /// Case-insensitive match on the symbolic name. "in progress" is not a symbol.
    pub fn parse(text: &str) -> Result<Self, OrderError> {
        Self::ALL
            .into_iter()
            .find(|status| status.symbol().eq_ignore_ascii_case(text))
            .ok_or_else(|| OrderError::InvalidStatus(text.to_string()))
    }
}

impl FromStr for OrderStatus {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for OrderStatus {
    type Error = OrderError;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        Self::parse(&text)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
