pub mod lmdb_storage;
pub mod memory;
pub mod seed;

pub use lmdb_storage::LmdbCatalog;
pub use memory::MemoryCatalog;
pub use seed::{sample_schools, seed_if_empty};

/// Uniqueness key for an entry: name and address, compared without case
pub(crate) fn unique_key(name: &str, address: &str) -> String {
    format!("{}\u{1f}{}", name.to_lowercase(), address.to_lowercase())
}
