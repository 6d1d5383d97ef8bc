use hue_types::{Color, ColorId, NewColor};

use crate::error::StoreResult;

/// Ordered collection of color records.
///
/// All implementations must satisfy these invariants:
/// - Ids are unique; `add` always assigns a fresh one.
/// - `all` returns records in insertion order.
/// - An `Err` from a mutating method means nothing changed.
pub trait ColorStore: Send + Sync {
    /// Every record, in insertion order.
    fn all(&self) -> StoreResult<Vec<Color>>;

    /// The record with `id`, or `Ok(None)` if there is none.
    fn get(&self, id: &ColorId) -> StoreResult<Option<Color>>;

    /// Number of records.
    fn count(&self) -> StoreResult<usize>;

    /// Append a new record with a fresh id, zero rating and the current time.
    fn add(&self, new: NewColor) -> StoreResult<Color>;

    /// Set the rating of an existing record and return the updated record.
    ///
    /// Returns `StoreError::NotFound` if no record has `id`.
    fn rate(&self, id: &ColorId, rating: i32) -> StoreResult<Color>;

    /// Remove a record and return it as it was before removal.
    ///
    /// Returns `StoreError::NotFound` if no record has `id`.
    fn remove(&self, id: &ColorId) -> StoreResult<Color>;

    /// Returns `true` if a record has `id`.
    fn contains(&self, id: &ColorId) -> StoreResult<bool> {
        Ok(self.get(id)?.is_some())
    }
}
