use crate::coordinate::{Coordinate, RawValue};
use serde::Serialize;

/// Stable identity of a catalog entry, assigned by the catalog on admission
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for EntryId {
    fn from(id: u64) -> Self {
        EntryId(id)
    }
}

/// A school in the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: EntryId,
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

impl Entry {
    #[inline]
    #[must_use]
    pub fn new(
        id: EntryId,
        name: impl Into<String>,
        address: impl Into<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            address: address.into(),
            coordinate,
        }
    }
}

/// An admission request that has not been validated yet
#[derive(Debug, Clone, Default)]
pub struct EntryCandidate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub latitude: RawValue,
    pub longitude: RawValue,
}

/// A validated entry waiting for the catalog to assign it an identity
#[derive(Debug, Clone, PartialEq)]
pub struct NewEntry {
    pub name: String,
    pub address: String,
    pub coordinate: Coordinate,
}

impl NewEntry {
    /// Attach the identity handed out by the catalog
    #[must_use]
    pub fn with_id(self, id: EntryId) -> Entry {
        Entry {
            id,
            name: self.name,
            address: self.address,
            coordinate: self.coordinate,
        }
    }
}

/// An entry annotated with its distance from one query's reference point
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub entry: Entry,
    pub distance_km: f64,
}
