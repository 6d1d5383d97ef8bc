use std::collections::HashSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use hue_types::{Color, ColorId, NewColor};

use crate::error::{StoreError, StoreResult};
use crate::seed::default_seed;
use crate::traits::ColorStore;

/// In-memory, copy-on-write color store.
///
/// The current sequence lives in an `Arc<Vec<Color>>` behind a `RwLock`.
/// `add` and `remove` build a new vector and swap it in under the write
/// lock, so a reader always sees either the old or the new sequence.
/// `rate` updates a single record in place under the same lock.
pub struct InMemoryColorStore {
    colors: RwLock<Arc<Vec<Color>>>,
}

impl InMemoryColorStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            colors: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Create a store holding `colors` in the given order.
    ///
    /// Fails with `StoreError::DuplicateId` if two records share an id.
    pub fn from_seed(colors: Vec<Color>) -> StoreResult<Self> {
        if let Some(id) = first_duplicate(&colors) {
            return Err(StoreError::DuplicateId(id));
        }
        tracing::debug!(count = colors.len(), "seeded color store");
        Ok(Self {
            colors: RwLock::new(Arc::new(colors)),
        })
    }

    /// Create a store from the embedded default seed data.
    pub fn with_default_seed() -> StoreResult<Self> {
        Self::from_seed(default_seed()?)
    }

    /// The current sequence. Later mutations do not affect it.
    pub fn snapshot(&self) -> StoreResult<Arc<Vec<Color>>> {
        Ok(Arc::clone(&*self.read()?))
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Arc<Vec<Color>>>> {
        self.colors.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Arc<Vec<Color>>>> {
        self.colors.write().map_err(|_| StoreError::LockPoisoned)
    }
}

fn first_duplicate(colors: &[Color]) -> Option<ColorId> {
    let mut seen = HashSet::with_capacity(colors.len());
    colors
        .iter()
        .find(|c| !seen.insert(&c.id))
        .map(|c| c.id.clone())
}

impl Default for InMemoryColorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorStore for InMemoryColorStore {
    fn all(&self) -> StoreResult<Vec<Color>> {
        Ok(self.read()?.to_vec())
    }

    fn get(&self, id: &ColorId) -> StoreResult<Option<Color>> {
        Ok(self.read()?.iter().find(|c| &c.id == id).cloned())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    fn add(&self, new: NewColor) -> StoreResult<Color> {
        let color = Color::create(new);
        let mut colors = self.write()?;
        if colors.iter().any(|c| c.id == color.id) {
            return Err(StoreError::DuplicateId(color.id));
        }

        let mut next = Vec::with_capacity(colors.len() + 1);
        next.extend(colors.iter().cloned());
        next.push(color.clone());
        *colors = Arc::new(next);

        tracing::debug!(id = %color.id, color = %color.color, "added color");
        Ok(color)
    }

    fn rate(&self, id: &ColorId, rating: i32) -> StoreResult<Color> {
        let mut colors = self.write()?;
        let Some(index) = colors.iter().position(|c| &c.id == id) else {
            tracing::warn!(%id, "rate: no such color");
            return Err(StoreError::NotFound(id.clone()));
        };

        let record = &mut Arc::make_mut(&mut colors)[index];
        record.rating = rating;

        tracing::debug!(%id, rating, "rated color");
        Ok(record.clone())
    }

    fn remove(&self, id: &ColorId) -> StoreResult<Color> {
        let mut colors = self.write()?;
        let Some(removed) = colors.iter().find(|c| &c.id == id).cloned() else {
            tracing::warn!(%id, "remove: no such color");
            return Err(StoreError::NotFound(id.clone()));
        };

        let remaining: Vec<Color> = colors.iter().filter(|c| &c.id != id).cloned().collect();
        *colors = Arc::new(remaining);

        tracing::debug!(%id, "removed color");
        Ok(removed)
    }
}

impl std::fmt::Debug for InMemoryColorStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self.read().map(|c| c.len()).unwrap_or_default();
        f.debug_struct("InMemoryColorStore")
            .field("color_count", &count)
            .finish()
    }
}
