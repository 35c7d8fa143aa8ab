use tracing::debug;

use crate::math::{distance, Point3};

use super::catmull_rom::{calculate_position, is_valid_curve};

/// Default number of sampling steps for a [`LengthTable`].
pub const DEFAULT_RESOLUTION: usize = 1000;

/// One sample of a [`LengthTable`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthTableEntry {
    /// Curve parameter of the sample.
    pub t: f64,
    /// Arc length from `t = 0` up to this sample.
    pub cumulative_length: f64,
    /// Length of the step from the previous sample to this one.
    pub segment_length: f64,
}

/// Piecewise-linear map from curve parameter to arc length.
///
/// Built by sampling the curve at `resolution + 1` evenly spaced parameters
/// and summing chord lengths. Used to invert length to parameter so that a
/// follower can move at constant speed along a curve whose parameter is not
/// proportional to distance.
///
/// The table is derived data: it describes the control points it was built
/// from and nothing else. [`RailCurve`](super::RailCurve) stamps each table
/// with its generation so stale tables can be detected.
#[derive(Debug, Clone, Default)]
pub struct LengthTable {
    entries: Vec<LengthTableEntry>,
    total_length: f64,
    resolution: usize,
    generation: u64,
}

impl LengthTable {
    /// Samples the curve through `points` into a new table.
    ///
    /// A resolution of zero is treated as one. An invalid curve yields an
    /// empty table with a total length of zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn build(points: &[Point3], resolution: usize) -> Self {
        let resolution = resolution.max(1);
        if !is_valid_curve(points) {
            return Self {
                resolution,
                ..Self::default()
            };
        }

        let mut entries = Vec::with_capacity(resolution + 1);
        entries.push(LengthTableEntry {
            t: 0.0,
            cumulative_length: 0.0,
            segment_length: 0.0,
        });

        let mut total = 0.0;
        let mut previous = calculate_position(points, 0.0);
        for i in 1..=resolution {
            let t = i as f64 / resolution as f64;
            let position = calculate_position(points, t);
            let step = distance(&previous, &position);
            total += step;
            entries.push(LengthTableEntry {
                t,
                cumulative_length: total,
                segment_length: step,
            });
            previous = position;
        }

        debug!(resolution, total_length = total, "built arc-length table");

        Self {
            entries,
            total_length: total,
            resolution,
            generation: 0,
        }
    }

    /// Stamps the table with the generation of the curve it was built from.
    #[must_use]
    pub(crate) fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    /// Curve parameter at which the arc length reaches `length`.
    ///
    /// Returns `0.0` for an empty table or a non-positive length and `1.0`
    /// once `length` reaches the total. In between, finds the first sample
    /// whose cumulative length is at least `length` and interpolates
    /// linearly from its predecessor.
    #[must_use]
    pub fn t_from_length(&self, length: f64) -> f64 {
        if self.entries.is_empty() || length.is_nan() || length <= 0.0 {
            return 0.0;
        }
        if length >= self.total_length {
            return 1.0;
        }

        let idx = self
            .entries
            .partition_point(|e| e.cumulative_length < length);
        let Some(hi) = self.entries.get(idx) else {
            return 1.0;
        };
        let Some(lo) = idx.checked_sub(1).and_then(|i| self.entries.get(i)) else {
            return hi.t;
        };

        let span = hi.cumulative_length - lo.cumulative_length;
        if span <= 0.0 {
            return hi.t;
        }
        let ratio = (length - lo.cumulative_length) / span;
        lo.t + (hi.t - lo.t) * ratio
    }

    /// Arc length from the start of the curve up to parameter `t`
    /// (clamped to `[0, 1]`), interpolated between samples.
    #[must_use]
    pub fn length_from_t(&self, t: f64) -> f64 {
        if self.entries.is_empty() || t.is_nan() || t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return self.total_length;
        }

        let idx = self.entries.partition_point(|e| e.t < t);
        let Some(hi) = self.entries.get(idx) else {
            return self.total_length;
        };
        let Some(lo) = idx.checked_sub(1).and_then(|i| self.entries.get(i)) else {
            return hi.cumulative_length;
        };

        let ratio = (t - lo.t) / (hi.t - lo.t);
        lo.cumulative_length + hi.segment_length * ratio
    }

    /// Total arc length of the curve; zero for an empty table.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.total_length
    }

    /// The samples, ordered by `t`.
    #[must_use]
    pub fn entries(&self) -> &[LengthTableEntry] {
        &self.entries
    }

    /// Number of sampling steps the table was built with.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Returns `true` if the table holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Generation of the curve this table was built from.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
