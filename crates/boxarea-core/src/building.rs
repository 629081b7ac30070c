//! Building identifier extraction
//!
//! Box ids carry the building they belong to as a prefix, e.g.
//! `733100000003603_012` belongs to building `733100000003603`.

/// Default separator between building id and per-building sequence
pub const DEFAULT_SEPARATOR: char = '_';

/// Building id of a box id, using [`DEFAULT_SEPARATOR`]
#[inline]
#[must_use]
pub fn building_id(id: &str) -> &str {
    building_id_with(id, DEFAULT_SEPARATOR)
}

/// Building id of a box id: the text before the first `separator`
///
/// Ids without the separator are their own building id.
#[inline]
#[must_use]
pub fn building_id_with(id: &str, separator: char) -> &str {
    id.split_once(separator).map_or(id, |(building, _)| building)
}
