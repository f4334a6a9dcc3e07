use crate::catalog::CatalogSource;
use crate::coordinate::Coordinate;
use crate::entry::RankedEntry;
use crate::error::Result;
use crate::page::{paginate, Page, PageRequest};
use crate::rank::rank;
use std::sync::Arc;

/// A validated proximity request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProximityQuery {
    pub reference: Coordinate,
    pub paging: PageRequest,
}

impl ProximityQuery {
    pub fn new(reference: Coordinate, paging: PageRequest) -> Self {
        Self { reference, paging }
    }
}

/// Ranks a catalog by distance from the query point and returns one page
///
/// Stateless between calls: each query fetches a fresh snapshot and ranks it
/// from scratch.
pub struct ProximitySearch<C: ?Sized> {
    catalog: Arc<C>,
}

impl<C: ?Sized> Clone for ProximitySearch<C> {
    fn clone(&self) -> Self {
        Self {
            catalog: self.catalog.clone(),
        }
    }
}

impl<C: CatalogSource + ?Sized> ProximitySearch<C> {
    pub fn new(catalog: Arc<C>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<C> {
        &self.catalog
    }

    pub fn search(&self, query: &ProximityQuery) -> Result<Page<RankedEntry>> {
        let snapshot = self.catalog.fetch_all()?;
        let ranked = rank(query.reference, &snapshot);
        Ok(paginate(ranked, query.paging.page, query.paging.limit))
    }
}
