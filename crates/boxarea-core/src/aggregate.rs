//! Per-building area aggregation

use crate::building::{building_id_with, DEFAULT_SEPARATOR};
use crate::record::BoxRecord;
use std::collections::{BTreeMap, HashMap};

/// Total signed area of `category` boxes, keyed by building id
///
/// Only boxes whose category equals `category` exactly (case-sensitive)
/// contribute. Buildings without a matching box are absent from the result.
/// Areas are summed in input order.
#[must_use]
pub fn group_by_building(boxes: &[BoxRecord], category: &str) -> HashMap<String, f64> {
    group_by_building_with(boxes, category, DEFAULT_SEPARATOR)
}

/// [`group_by_building`] with a custom building id separator
#[must_use]
pub fn group_by_building_with(
    boxes: &[BoxRecord],
    category: &str,
    separator: char,
) -> HashMap<String, f64> {
    let mut totals: HashMap<String, f64> = HashMap::new();

    for b in boxes.iter().filter(|b| b.category() == category) {
        let building = building_id_with(b.id(), separator);
        // only allocate keys for new buildings
        match totals.get_mut(building) {
            Some(total) => *total += b.area(),
            None => {
                totals.insert(building.to_owned(), b.area());
            }
        }
    }

    tracing::debug!(
        category,
        input = boxes.len(),
        buildings = totals.len(),
        "grouped boxes by building"
    );
    totals
}

/// Number of boxes per category label
#[must_use]
pub fn count_categories(boxes: &[BoxRecord]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for b in boxes {
        *counts.entry(b.category().to_owned()).or_insert(0) += 1;
    }
    counts
}
