//! # schoolfinder Core
//!
//! Core library for the schoolfinder directory service.
//!
//! This crate owns everything with nontrivial semantics:
//!
//! - [`Coordinate`] - A validated latitude/longitude pair
//! - [`validate`] - Coercion and range checks for raw, possibly-stringy input
//! - [`distance_km`] - Haversine great-circle distance
//! - [`rank`] - Full-scan distance ranking with a deterministic tie-break
//! - [`paginate`] - Page windows over a ranked sequence
//! - [`ProximitySearch`] - Ties the above to an injected [`CatalogSource`]
//!
//! ## Example
//!
//! ```rust
//! use schoolfinder_core::{rank, paginate, validate, Coordinate, Entry, EntryId, RawValue};
//!
//! let reference = validate(&RawValue::from("12.9716"), &RawValue::from(77.5946)).unwrap();
//! let catalog = vec![
//!     Entry::new(EntryId(1), "Alpha", "Main Street 1", Coordinate::new(28.6139, 77.2090).unwrap()),
//!     Entry::new(EntryId(3), "Gamma", "Third Road 5", Coordinate::new(13.0827, 80.2707).unwrap()),
//! ];
//!
//! let page = paginate(rank(reference, &catalog), None, None);
//! assert_eq!(page.items[0].entry.id, EntryId(3));
//! assert_eq!(page.total, 2);
//! ```

pub mod catalog;
pub mod coordinate;
pub mod distance;
pub mod entry;
pub mod error;
pub mod page;
pub mod rank;
pub mod search;
pub mod validate;

pub use catalog::{Catalog, CatalogSource, CatalogWriter};
pub use coordinate::{Coordinate, RawValue};
pub use distance::{distance_km, EARTH_RADIUS_KM};
pub use entry::{Entry, EntryCandidate, EntryId, NewEntry, RankedEntry};
pub use error::{Error, Result, ValidationError, ValidationErrorKind};
pub use page::{paginate, Page, PageRequest, DEFAULT_LIMIT, DEFAULT_PAGE, MAX_LIMIT};
pub use rank::rank;
pub use search::{ProximityQuery, ProximitySearch};
pub use validate::{validate, validate_entry, validate_paging};
