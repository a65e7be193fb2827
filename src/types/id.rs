//! Fixed-width storage identifier: a UUID held as its 16 raw bytes.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::OrderError;

/// Primary/foreign key as stored. Equality is byte-for-byte.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Uuid", into = "Uuid")]
pub struct EntityId([u8; 16]);

impl EntityId {
    /// Fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    pub fn from_uuid(id: Uuid) -> Self {
        Self(*id.as_bytes())
    }

    pub fn to_uuid(self) -> Uuid {
        Uuid::from_bytes(self.0)
    }

    pub fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Decode a stored column value. Anything other than exactly 16 bytes is rejected.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, OrderError> {
        let raw: [u8; 16] = bytes
            .try_into()
            .map_err(|_| OrderError::InvalidIdentifier(bytes.len()))?;
        Ok(Self(raw))
    }
}

impl From<Uuid> for EntityId {
    fn from(id: Uuid) -> Self {
        Self::from_uuid(id)
    }
}

impl From<EntityId> for Uuid {
    fn from(id: EntityId) -> Self {
        id.to_uuid()
    }
}

impl TryFrom<&[u8]> for EntityId {
    type Error = OrderError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(bytes)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_uuid(), f)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.to_uuid())
    }
}
