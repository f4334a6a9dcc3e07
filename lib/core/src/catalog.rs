//! Seams to the catalog store
//!
//! The core never owns storage. Ranking reads through [`CatalogSource`] and
//! admission writes through [`CatalogWriter`]; both are passed in explicitly.

use crate::entry::{Entry, NewEntry};
use crate::error::Result;

pub trait CatalogSource: Send + Sync {
    /// Every entry, read as one consistent snapshot
    ///
    /// Fails with [`crate::Error::SourceUnavailable`] when the backing store
    /// cannot be read.
    fn fetch_all(&self) -> Result<Vec<Entry>>;

    /// Cheap reachability check
    fn ping(&self) -> Result<()> {
        Ok(())
    }
}

pub trait CatalogWriter: Send + Sync {
    /// Persist a validated entry and return it with its assigned id
    ///
    /// Fails with [`crate::Error::Duplicate`] if an entry with the same name
    /// and address (ignoring case) already exists.
    fn insert(&self, entry: NewEntry) -> Result<Entry>;
}

/// A store that can be both ranked over and admitted into
pub trait Catalog: CatalogSource + CatalogWriter {}

impl<T: CatalogSource + CatalogWriter + ?Sized> Catalog for T {}
