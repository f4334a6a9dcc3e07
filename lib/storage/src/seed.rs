use schoolfinder_core::{Catalog, Coordinate, NewEntry, Result};

/// The three schools a fresh deployment starts with
pub fn sample_schools() -> Vec<NewEntry> {
    [
        ("Alpha Public School", "Main Street 1", 28.6139, 77.2090),
        ("Beta International", "Second Avenue 22", 19.0760, 72.8777),
        ("Gamma High", "Third Road 5", 13.0827, 80.2707),
    ]
    .into_iter()
    .filter_map(|(name, address, lat, lon)| {
        Coordinate::new(lat, lon).ok().map(|coordinate| NewEntry {
            name: name.to_string(),
            address: address.to_string(),
            coordinate,
        })
    })
    .collect()
}

/// Admit the sample schools if the catalog holds nothing yet
///
/// Returns how many entries were inserted.
pub fn seed_if_empty<C: Catalog + ?Sized>(catalog: &C) -> Result<usize> {
    if !catalog.fetch_all()?.is_empty() {
        tracing::debug!("catalog already populated, skipping seed");
        return Ok(0);
    }

    let mut inserted = 0;
    for entry in sample_schools() {
        catalog.insert(entry)?;
        inserted += 1;
    }
    tracing::info!(inserted, "seeded empty catalog with sample schools");
    Ok(inserted)
}
