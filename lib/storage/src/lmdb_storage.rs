// LMDB-backed catalog: one record database keyed by id, one uniqueness index
use crate::unique_key;
use anyhow::Result as AnyResult;
use heed::byteorder::BE;
use heed::types::{Bytes, Str, U64};
use heed::{Database, Env, EnvOpenOptions};
use schoolfinder_core::{CatalogSource, CatalogWriter, Coordinate, Entry, EntryId, Error, NewEntry, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;

const DB_SCHOOLS: &str = "schools";
const DB_SCHOOLS_BY_KEY: &str = "schools_by_key";

/// On-disk shape of an entry
#[derive(Debug, Serialize, Deserialize)]
struct SchoolRecord {
    name: String,
    address: String,
    latitude: f64,
    longitude: f64,
}

impl SchoolRecord {
    fn into_entry(self, id: u64) -> std::result::Result<Entry, schoolfinder_core::ValidationError> {
        let coordinate = Coordinate::new(self.latitude, self.longitude)?;
        Ok(Entry::new(EntryId(id), self.name, self.address, coordinate))
    }
}

pub struct LmdbCatalog {
    env: Arc<Env>,
    path: PathBuf,
    schools_db: Database<U64<BE>, Bytes>,
    keys_db: Database<Str, U64<BE>>,
}

impl LmdbCatalog {
    /// Open (or create) the environment at `path` and ensure both databases exist
    pub fn open<P: AsRef<Path>>(path: P) -> AnyResult<Self> {
        let path = path.as_ref().to_path_buf();
        std::fs::create_dir_all(&path)?;

        let env = Arc::new(unsafe {
            EnvOpenOptions::new()
                .map_size(1024 * 1024 * 1024) // 1GB
                .max_dbs(4)
                .open(&path)?
        });

        let mut wtxn = env.write_txn()?;
        let schools_db = env.create_database(&mut wtxn, Some(DB_SCHOOLS))?;
        let keys_db = env.create_database(&mut wtxn, Some(DB_SCHOOLS_BY_KEY))?;
        wtxn.commit()?;

        tracing::debug!(path = %path.display(), "LMDB catalog schema ensured");

        Ok(Self {
            env,
            path,
            schools_db,
            keys_db,
        })
    }

    #[inline]
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn count(&self) -> AnyResult<u64> {
        let rtxn = self.env.read_txn()?;
        Ok(self.schools_db.len(&rtxn)?)
    }

    fn load_all(&self) -> AnyResult<Vec<Entry>> {
        let rtxn = self.env.read_txn()?;
        let mut entries = Vec::new();
        for result in self.schools_db.iter(&rtxn)? {
            let (id, data) = result?;
            let record: SchoolRecord = match bincode::deserialize(data) {
                Ok(record) => record,
                Err(e) => {
                    tracing::warn!(id, error = %e, "skipping undecodable school record");
                    continue;
                }
            };
            match record.into_entry(id) {
                Ok(entry) => entries.push(entry),
                Err(e) => tracing::warn!(id, error = %e, "skipping school record with invalid coordinate"),
            }
        }
        Ok(entries)
    }

    fn store(&self, entry: NewEntry) -> AnyResult<std::result::Result<Entry, NewEntry>> {
        let mut wtxn = self.env.write_txn()?;

        let key = unique_key(&entry.name, &entry.address);
        if self.keys_db.get(&wtxn, &key)?.is_some() {
            return Ok(Err(entry));
        }

        let id = match self.schools_db.last(&wtxn)? {
            Some((last, _)) => last + 1,
            None => 1,
        };

        let record = SchoolRecord {
            name: entry.name.clone(),
            address: entry.address.clone(),
            latitude: entry.coordinate.latitude(),
            longitude: entry.coordinate.longitude(),
        };
        let data = bincode::serialize(&record)
            .map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;

        self.schools_db.put(&mut wtxn, &id, &data)?;
        self.keys_db.put(&mut wtxn, &key, &id)?;
        wtxn.commit()?;

        Ok(Ok(entry.with_id(EntryId(id))))
    }
}

fn unavailable(e: anyhow::Error) -> Error {
    tracing::error!(error = %e, "LMDB catalog failure");
    Error::SourceUnavailable(e.to_string())
}

impl CatalogSource for LmdbCatalog {
    fn fetch_all(&self) -> Result<Vec<Entry>> {
        self.load_all().map_err(unavailable)
    }

    fn ping(&self) -> Result<()> {
        self.env
            .read_txn()
            .map(drop)
            .map_err(|e| unavailable(e.into()))
    }
}

impl CatalogWriter for LmdbCatalog {
    fn insert(&self, entry: NewEntry) -> Result<Entry> {
        match self.store(entry).map_err(unavailable)? {
            Ok(entry) => Ok(entry),
            Err(entry) => Err(Error::Duplicate {
                name: entry.name,
                address: entry.address,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_entry(name: &str, address: &str, lat: f64, lon: f64) -> NewEntry {
        NewEntry {
            name: name.to_string(),
            address: address.to_string(),
            coordinate: Coordinate::new(lat, lon).unwrap(),
        }
    }

    #[test]
    fn test_insert_and_fetch() {
        let temp_dir = tempfile::tempdir().unwrap();
        let catalog = LmdbCatalog::open(temp_dir.path()).unwrap();

        let a = catalog.insert(new_entry("Alpha", "Main Street 1", 28.6139, 77.2090)).unwrap();
        let b = catalog.insert(new_entry("Beta", "Second Avenue 22", 19.0760, 72.8777)).unwrap();
        assert_eq!(a.id, EntryId(1));
        assert_eq!(b.id, EntryId(2));

        let all = catalog.fetch_all().unwrap();
        assert_eq!(all, vec![a, b]);
        assert_eq!(catalog.count().unwrap(), 2);
        assert!(catalog.ping().is_ok());
    }

    #[test]
    fn test_duplicate_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let catalog = LmdbCatalog::open(temp_dir.path()).unwrap();

        catalog.insert(new_entry("Alpha", "Main Street 1", 1.0, 1.0)).unwrap();
        let err = catalog.insert(new_entry("alpha", "MAIN STREET 1", 2.0, 2.0)).unwrap_err();
        assert!(matches!(err, Error::Duplicate { .. }));
        assert_eq!(catalog.count().unwrap(), 1);
    }

    #[test]
    fn test_reopen_keeps_entries_and_ids() {
        let temp_dir = tempfile::tempdir().unwrap();
        {
            let catalog = LmdbCatalog::open(temp_dir.path()).unwrap();
            catalog.insert(new_entry("Alpha", "Main Street 1", 1.0, 1.0)).unwrap();
        }

        let catalog = LmdbCatalog::open(temp_dir.path()).unwrap();
        let next = catalog.insert(new_entry("Beta", "Second Avenue 22", 2.0, 2.0)).unwrap();
        assert_eq!(next.id, EntryId(2));
        assert_eq!(catalog.fetch_all().unwrap().len(), 2);
    }
}
