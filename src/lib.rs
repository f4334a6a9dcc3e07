//! # schoolfinder
//!
//! A directory of schools that answers "what is near me?".
//!
//! Given the caller's coordinates, schoolfinder ranks every school in the
//! catalog by great-circle (haversine) distance and returns the result one
//! page at a time.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! schoolfinder --port 3000 --data-dir ./data
//! curl 'http://localhost:3000/listSchools?latitude=12.9716&longitude=77.5946&limit=10'
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use schoolfinder::prelude::*;
//! use std::sync::Arc;
//!
//! let catalog = Arc::new(MemoryCatalog::new());
//! seed_if_empty(catalog.as_ref()).unwrap();
//!
//! let reference = validate(&RawValue::from("12.9716"), &RawValue::from("77.5946")).unwrap();
//! let search = ProximitySearch::new(catalog);
//! let page = search.search(&ProximityQuery::new(reference, PageRequest::default())).unwrap();
//!
//! assert_eq!(page.total, 3);
//! assert_eq!(page.items[0].entry.name, "Gamma High");
//! ```
//!
//! ## Crate Structure
//!
//! - `schoolfinder-core` - Validation, haversine distance, ranking, pagination
//! - `schoolfinder-storage` - In-memory and LMDB catalogs
//! - `schoolfinder-api` - actix-web REST endpoints

// Re-export core types
pub use schoolfinder_core::{
    distance_km, paginate, rank, validate, validate_entry, validate_paging,
    Catalog, CatalogSource, CatalogWriter,
    Coordinate, RawValue,
    Entry, EntryCandidate, EntryId, NewEntry, RankedEntry,
    Page, PageRequest, ProximityQuery, ProximitySearch,
    Error, Result, ValidationError, ValidationErrorKind,
};

// Re-export storage
pub use schoolfinder_storage::{seed_if_empty, LmdbCatalog, MemoryCatalog};

// Re-export API
pub use schoolfinder_api::{RestApi, ServerConfig};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        distance_km, paginate, rank, validate, validate_entry, validate_paging,
        Catalog, CatalogSource, CatalogWriter,
        Coordinate, RawValue,
        Entry, EntryCandidate, EntryId, NewEntry, RankedEntry,
        Page, PageRequest, ProximityQuery, ProximitySearch,
        Error, Result, ValidationError, ValidationErrorKind,
        seed_if_empty, LmdbCatalog, MemoryCatalog,
        RestApi, ServerConfig,
    };
}
