// Integration tests for schoolfinder
use schoolfinder_core::{
    distance_km, paginate, rank, validate, validate_entry, CatalogSource, CatalogWriter,
    Coordinate, Entry, EntryCandidate, EntryId, Error, PageRequest, ProximityQuery,
    ProximitySearch, RawValue, ValidationErrorKind,
};
use schoolfinder_storage::{seed_if_empty, LmdbCatalog, MemoryCatalog};
use std::sync::Arc;

fn bangalore() -> Coordinate {
    Coordinate::new(12.9716, 77.5946).unwrap()
}

fn candidate(name: &str, address: &str, lat: f64, lon: f64) -> EntryCandidate {
    EntryCandidate {
        name: Some(name.to_string()),
        address: Some(address.to_string()),
        latitude: RawValue::from(lat),
        longitude: RawValue::from(lon),
    }
}

#[test]
fn test_end_to_end_bangalore() {
    let catalog = vec![
        Entry::new(EntryId(1), "Delhi school", "Delhi", Coordinate::new(28.6139, 77.2090).unwrap()),
        Entry::new(EntryId(2), "Mumbai school", "Mumbai", Coordinate::new(19.0760, 72.8777).unwrap()),
        Entry::new(EntryId(3), "Chennai school", "Chennai", Coordinate::new(13.0827, 80.2707).unwrap()),
    ];

    let page = paginate(rank(bangalore(), &catalog), None, None);

    let ids: Vec<EntryId> = page.items.iter().map(|r| r.entry.id).collect();
    assert_eq!(ids, vec![EntryId(3), EntryId(2), EntryId(1)]);
    assert_eq!(page.total, 3);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 50);
}

#[test]
fn test_admission_then_search() {
    let catalog = Arc::new(MemoryCatalog::new());

    for (name, address, lat, lon) in [
        ("Alpha Public School", "Main Street 1", 28.6139, 77.2090),
        ("Beta International", "Second Avenue 22", 19.0760, 72.8777),
        ("Gamma High", "Third Road 5", 13.0827, 80.2707),
    ] {
        let entry = validate_entry(&candidate(name, address, lat, lon)).unwrap();
        catalog.insert(entry).unwrap();
    }

    let reference = validate(&RawValue::from("12.9716"), &RawValue::from("77.5946")).unwrap();
    let search = ProximitySearch::new(catalog);
    let page = search
        .search(&ProximityQuery::new(reference, PageRequest::default()))
        .unwrap();

    let names: Vec<&str> = page.items.iter().map(|r| r.entry.name.as_str()).collect();
    assert_eq!(names, vec!["Gamma High", "Beta International", "Alpha Public School"]);
    assert!(page.items.iter().all(|r| r.distance_km >= 0.0));
}

#[test]
fn test_admission_rejects_invalid_latitude() {
    let err = validate_entry(&candidate("Test School", "123 Test St", 100.0, 77.5946)).unwrap_err();
    assert_eq!(err.kind, ValidationErrorKind::OutOfRange);
    assert_eq!(err.field, "latitude");
}

#[test]
fn test_pagination_covers_ranked_sequence() {
    let catalog = Arc::new(MemoryCatalog::new());
    for i in 0..37 {
        let lat = -60.0 + (i as f64) * 3.0;
        let lon = -170.0 + (i as f64) * 9.0;
        let entry = validate_entry(&candidate(&format!("School {}", i), "Somewhere", lat, lon)).unwrap();
        catalog.insert(entry).unwrap();
    }

    let reference = bangalore();
    let full = rank(reference, &catalog.fetch_all().unwrap());
    let search = ProximitySearch::new(catalog);

    let limit = 8;
    let pages = full.len().div_ceil(limit);
    let mut collected = Vec::new();
    for p in 1..=pages {
        let page = search
            .search(&ProximityQuery::new(reference, PageRequest::new(p, limit)))
            .unwrap();
        assert_eq!(page.total, full.len());
        collected.extend(page.items);
    }
    assert_eq!(collected, full);

    let past_end = search
        .search(&ProximityQuery::new(reference, PageRequest::new(pages + 1, limit)))
        .unwrap();
    assert!(past_end.items.is_empty());
    assert_eq!(past_end.total, full.len());
}

#[test]
fn test_lmdb_catalog_survives_restart() {
    // Use unique temp directory for each test to avoid LMDB conflicts
    let temp_dir = tempfile::tempdir().unwrap();

    {
        let catalog = LmdbCatalog::open(temp_dir.path()).unwrap();
        assert_eq!(seed_if_empty(&catalog).unwrap(), 3);
    }

    let catalog = Arc::new(LmdbCatalog::open(temp_dir.path()).unwrap());
    assert_eq!(seed_if_empty(catalog.as_ref()).unwrap(), 0);

    let search = ProximitySearch::new(catalog.clone());
    let page = search
        .search(&ProximityQuery::new(bangalore(), PageRequest::default()))
        .unwrap();
    let ids: Vec<u64> = page.items.iter().map(|r| r.entry.id.0).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let entry = validate_entry(&candidate("gamma high", "THIRD ROAD 5", 0.0, 0.0)).unwrap();
    assert!(matches!(catalog.insert(entry), Err(Error::Duplicate { .. })));
}

#[test]
fn test_delhi_mumbai_reference_distance() {
    let delhi = Coordinate::new(28.6139, 77.2090).unwrap();
    let mumbai = Coordinate::new(19.0760, 72.8777).unwrap();
    let d = distance_km(delhi, mumbai);
    assert!((d - 1148.09).abs() < 1.0, "got {}", d);
    assert_eq!(d, distance_km(mumbai, delhi));
}
