use slotmap::SlotMap;

use crate::error::CurveError;

use super::RailCurve;

slotmap::new_key_type! {
    /// Unique identifier for a curve in the curve store.
    pub struct CurveId;
}

/// Arena that owns every curve.
///
/// Followers refer to curves through [`CurveId`]s (generational indices),
/// so a follower never owns its curve and a removed curve is detected
/// instead of dangling.
#[derive(Debug, Default)]
pub struct CurveStore {
    curves: SlotMap<CurveId, RailCurve>,
}

impl CurveStore {
    /// Creates a new, empty curve store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a curve and returns its ID.
    pub fn insert(&mut self, curve: RailCurve) -> CurveId {
        self.curves.insert(curve)
    }

    /// Removes a curve, returning it if it was present.
    pub fn remove(&mut self, id: CurveId) -> Option<RailCurve> {
        self.curves.remove(id)
    }

    /// Returns a reference to the curve, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not in the store.
    pub fn get(&self, id: CurveId) -> Result<&RailCurve, CurveError> {
        self.curves.get(id).ok_or(CurveError::NotFound)
    }

    /// Returns a mutable reference to the curve, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is not in the store.
    pub fn get_mut(&mut self, id: CurveId) -> Result<&mut RailCurve, CurveError> {
        self.curves.get_mut(id).ok_or(CurveError::NotFound)
    }

    /// Returns `true` if the store holds a curve with this ID.
    #[must_use]
    pub fn contains(&self, id: CurveId) -> bool {
        self.curves.contains_key(id)
    }

    /// Number of curves in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.curves.len()
    }

    /// Returns `true` if the store holds no curves.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }

    /// Iterates over all curves with their IDs.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &RailCurve)> {
        self.curves.iter()
    }
}
