use crate::coordinate::Coordinate;
use crate::distance::distance_km;
use crate::entry::{Entry, RankedEntry};
use ordered_float::OrderedFloat;
use rayon::prelude::*;

/// Catalogs smaller than this are scored on the calling thread
const PARALLEL_THRESHOLD: usize = 4096;

/// Annotate every entry with its distance from `reference` and order ascending
///
/// Full scan, no index. Equal distances resolve by ascending entry id so the
/// same catalog snapshot always produces the same order. The input is left
/// untouched.
pub fn rank(reference: Coordinate, catalog: &[Entry]) -> Vec<RankedEntry> {
    let score = |entry: &Entry| RankedEntry {
        distance_km: distance_km(reference, entry.coordinate),
        entry: entry.clone(),
    };

    let mut ranked: Vec<RankedEntry> = if catalog.len() >= PARALLEL_THRESHOLD {
        catalog.par_iter().map(score).collect()
    } else {
        catalog.iter().map(score).collect()
    };

    ranked.sort_by(|a, b| {
        OrderedFloat(a.distance_km)
            .cmp(&OrderedFloat(b.distance_km))
            .then_with(|| a.entry.id.cmp(&b.entry.id))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::EntryId;

    fn entry(id: u64, lat: f64, lon: f64) -> Entry {
        Entry::new(
            EntryId(id),
            format!("School {}", id),
            format!("Address {}", id),
            Coordinate::new(lat, lon).unwrap(),
        )
    }

    fn bangalore() -> Coordinate {
        Coordinate::new(12.9716, 77.5946).unwrap()
    }

    #[test]
    fn test_rank_orders_by_distance() {
        let catalog = vec![
            entry(1, 28.6139, 77.2090),
            entry(2, 19.0760, 72.8777),
            entry(3, 13.0827, 80.2707),
        ];
        let ranked = rank(bangalore(), &catalog);
        let ids: Vec<u64> = ranked.iter().map(|r| r.entry.id.0).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert!(ranked.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
        // input untouched
        assert_eq!(catalog[0].id, EntryId(1));
    }

    #[test]
    fn test_ties_break_by_id() {
        // same position under different ids, inserted out of id order
        let catalog = vec![entry(9, 10.0, 10.0), entry(4, 10.0, 10.0), entry(7, 10.0, 10.0), entry(1, 0.0, 0.0)];
        let ranked = rank(Coordinate::new(10.0, 10.0).unwrap(), &catalog);
        let ids: Vec<u64> = ranked.iter().map(|r| r.entry.id.0).collect();
        assert_eq!(ids, vec![4, 7, 9, 1]);
    }

    #[test]
    fn test_repeated_calls_agree() {
        let catalog: Vec<Entry> = (0..50)
            .map(|i| entry(i, (i % 7) as f64, (i % 5) as f64))
            .collect();
        let first = rank(bangalore(), &catalog);
        let second = rank(bangalore(), &catalog);
        assert_eq!(first, second);
    }

    #[test]
    fn test_parallel_path_matches_order_contract() {
        let catalog: Vec<Entry> = (0..(PARALLEL_THRESHOLD as u64 + 100))
            .map(|i| entry(i, ((i * 37) % 180) as f64 - 90.0, ((i * 91) % 360) as f64 - 180.0))
            .collect();
        let ranked = rank(bangalore(), &catalog);
        assert_eq!(ranked.len(), catalog.len());
        assert!(ranked.windows(2).all(|w| {
            w[0].distance_km < w[1].distance_km
                || (w[0].distance_km == w[1].distance_km && w[0].entry.id < w[1].entry.id)
        }));
    }

    #[test]
    fn test_empty_catalog() {
        assert!(rank(bangalore(), &[]).is_empty());
    }
}
