use ahash::AHashSet;
use parking_lot::RwLock;
use crate::unique_key;
use schoolfinder_core::{CatalogSource, CatalogWriter, Entry, EntryId, Error, NewEntry, Result};

struct Inner {
    entries: Vec<Entry>,
    keys: AHashSet<String>,
    next_id: u64,
}

/// Catalog held entirely in process memory
///
/// Ids start at 1 and increase by one per admission, so insertion order and
/// id order coincide.
pub struct MemoryCatalog {
    inner: RwLock<Inner>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                entries: Vec::new(),
                keys: AHashSet::new(),
                next_id: 1,
            }),
        }
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.inner.read().entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for MemoryCatalog {
    fn fetch_all(&self) -> Result<Vec<Entry>> {
        Ok(self.inner.read().entries.clone())
    }
}

impl CatalogWriter for MemoryCatalog {
    fn insert(&self, entry: NewEntry) -> Result<Entry> {
        let mut inner = self.inner.write();

        let key = unique_key(&entry.name, &entry.address);
        if inner.keys.contains(&key) {
            return Err(Error::Duplicate {
                name: entry.name,
                address: entry.address,
            });
        }

        let id = EntryId(inner.next_id);
        inner.next_id += 1;
        inner.keys.insert(key);

        let entry = entry.with_id(id);
        inner.entries.push(entry.clone());
        Ok(entry)
    }
}
