use crate::error::{CurveError, RailkitError, Result};
use crate::math::{Point3, Vector3};

use super::catmull_rom::{calculate_position, calculate_tangent, is_valid_curve};
use super::length_table::LengthTable;

/// An editable Catmull-Rom curve with a cached arc-length table.
///
/// Every change to the control points bumps the curve's generation and drops
/// the cached table. Tables carry the generation they were built from, so a
/// table built before an edit is never mistaken for a current one.
#[derive(Debug, Clone, Default)]
pub struct RailCurve {
    points: Vec<Point3>,
    generation: u64,
    table: Option<LengthTable>,
}

impl RailCurve {
    /// Creates an empty (invalid) curve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a curve from an ordered list of control points.
    #[must_use]
    pub fn from_points(points: Vec<Point3>) -> Self {
        Self {
            points,
            ..Self::default()
        }
    }

    /// The ordered control points.
    #[must_use]
    pub fn control_points(&self) -> &[Point3] {
        &self.points
    }

    /// Replaces every control point.
    pub fn set_control_points(&mut self, points: Vec<Point3>) {
        self.points = points;
        self.invalidate();
    }

    /// Appends a control point at the end of the curve.
    pub fn push_point(&mut self, point: Point3) {
        self.points.push(point);
        self.invalidate();
    }

    /// Inserts a control point before `index` (`index == len` appends).
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is greater than the number of points.
    pub fn insert_point(&mut self, index: usize, point: Point3) -> Result<()> {
        if index > self.points.len() {
            return Err(self.out_of_range(index));
        }
        self.points.insert(index, point);
        self.invalidate();
        Ok(())
    }

    /// Removes and returns the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn remove_point(&mut self, index: usize) -> Result<Point3> {
        if index >= self.points.len() {
            return Err(self.out_of_range(index));
        }
        let removed = self.points.remove(index);
        self.invalidate();
        Ok(removed)
    }

    /// Moves the control point at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if `index` is out of range.
    pub fn set_point(&mut self, index: usize, point: Point3) -> Result<()> {
        let len = self.points.len();
        let slot = self
            .points
            .get_mut(index)
            .ok_or(CurveError::IndexOutOfRange { index, len })?;
        *slot = point;
        self.invalidate();
        Ok(())
    }

    fn out_of_range(&self, index: usize) -> RailkitError {
        CurveError::IndexOutOfRange {
            index,
            len: self.points.len(),
        }
        .into()
    }

    fn invalidate(&mut self) {
        self.generation += 1;
        self.table = None;
    }

    /// Counter bumped on every control-point change.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if the curve has enough control points to evaluate.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_valid_curve(&self.points)
    }

    /// Position at parameter `t`; the origin for an invalid curve.
    #[must_use]
    pub fn position(&self, t: f64) -> Point3 {
        calculate_position(&self.points, t)
    }

    /// Derivative at parameter `t`; zero for an invalid curve.
    #[must_use]
    pub fn tangent(&self, t: f64) -> Vector3 {
        calculate_tangent(&self.points, t)
    }

    /// Rebuilds the arc-length table for the current control points.
    pub fn build_length_table(&mut self, resolution: usize) -> &LengthTable {
        let table = LengthTable::build(&self.points, resolution).with_generation(self.generation);
        self.table.insert(table)
    }

    /// The cached table, or `None` if it was never built or the control
    /// points changed since.
    #[must_use]
    pub fn length_table(&self) -> Option<&LengthTable> {
        self.table.as_ref().filter(|t| self.is_current(t))
    }

    /// Returns the cached table, building it first if it is missing or stale.
    pub fn ensure_length_table(&mut self, resolution: usize) -> &LengthTable {
        let generation = self.generation;
        let table = match self.table.take() {
            Some(table) if table.generation() == generation => table,
            _ => LengthTable::build(&self.points, resolution).with_generation(generation),
        };
        self.table.insert(table)
    }

    /// Returns `true` if `table` was built from the current control points.
    #[must_use]
    pub fn is_current(&self, table: &LengthTable) -> bool {
        table.generation() == self.generation
    }

    /// Total arc length from the current table; zero if there is none.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.length_table().map_or(0.0, LengthTable::total_length)
    }
}
