//! Follower that moves along a [`RailCurve`] one tick at a time.
//!
//! The controller never owns its curve. It holds a [`CurveId`] and borrows the
//! [`CurveStore`] on every call, so queries against a removed or not yet
//! configured curve return neutral values (origin, zero, no movement) rather
//! than errors.

use tracing::{debug, trace};

use crate::math::{look_rotation, Point3, Vector3, TOLERANCE};

use super::length_table::{LengthTable, DEFAULT_RESOLUTION};
use super::{CurveId, CurveStore, RailCurve};

/// Progress from which the look-at target is extrapolated from the end
/// direction instead of sampled ahead on the curve.
pub const LOOK_AHEAD_SATURATION: f64 = 0.99;

/// How [`TrajectoryParams::speed`] is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpeedMode {
    /// Speed is added to the curve parameter every tick.
    #[default]
    Parameter,
    /// Speed is a fraction of the curve's total length. Each tick scales the
    /// progress by the total length, adds the step, and maps the sum back to
    /// a parameter through the arc-length table.
    Uniform,
}

/// Movement state of a [`TrajectoryController`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementState {
    /// Paused or never started.
    Stopped,
    /// Advancing on every update.
    Moving,
    /// Clamped at the end of a non-looping curve.
    AtEnd,
}

/// Configuration for a [`TrajectoryController`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrajectoryParams {
    /// Step per tick, in parameter units or as a fraction of total length
    /// depending on `mode`.
    pub speed: f64,
    /// Interpretation of `speed`.
    pub mode: SpeedMode,
    /// How far ahead the look-at target is sampled, in the same units as
    /// `speed`.
    pub look_ahead: f64,
    /// Whether to wrap back to the start after reaching the end.
    pub looping: bool,
    /// Sampling steps used when the arc-length table has to be built.
    pub resolution: usize,
}

impl Default for TrajectoryParams {
    fn default() -> Self {
        Self {
            speed: 0.001,
            mode: SpeedMode::Parameter,
            look_ahead: 0.01,
            looping: false,
            resolution: DEFAULT_RESOLUTION,
        }
    }
}

/// Drives a progress parameter along a curve over time.
#[derive(Debug, Clone)]
pub struct TrajectoryController {
    curve: CurveId,
    params: TrajectoryParams,
    progress: f64,
    moving: bool,
    at_end: bool,
}

impl TrajectoryController {
    /// Creates a stopped controller at the start of `curve`.
    #[must_use]
    pub fn new(curve: CurveId, params: TrajectoryParams) -> Self {
        Self {
            curve,
            params,
            progress: 0.0,
            moving: false,
            at_end: false,
        }
    }

    /// The curve this controller follows.
    #[must_use]
    pub fn curve_id(&self) -> CurveId {
        self.curve
    }

    /// Switches to another curve and rewinds to its start.
    pub fn set_curve(&mut self, curve: CurveId) {
        self.curve = curve;
        self.reset();
    }

    /// The current configuration.
    #[must_use]
    pub fn params(&self) -> &TrajectoryParams {
        &self.params
    }

    /// Current curve parameter in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    /// Current movement state.
    #[must_use]
    pub fn state(&self) -> MovementState {
        if self.at_end {
            MovementState::AtEnd
        } else if self.moving {
            MovementState::Moving
        } else {
            MovementState::Stopped
        }
    }

    /// Returns `true` once a non-looping trajectory has clamped at the end.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.at_end
    }

    /// Starts or resumes movement.
    pub fn start(&mut self) {
        self.moving = true;
    }

    /// Pauses movement, keeping the current progress.
    pub fn stop(&mut self) {
        self.moving = false;
    }

    /// Rewinds to the start of the curve. The moving flag is left untouched.
    pub fn reset(&mut self) {
        self.progress = 0.0;
        self.at_end = false;
    }

    /// Enables or disables looping. Enabling it releases a trajectory held
    /// at the end, so the next update wraps to the start.
    pub fn set_looping(&mut self, looping: bool) {
        self.params.looping = looping;
        if looping {
            self.at_end = false;
        }
    }

    /// Sets the step per tick.
    pub fn set_speed(&mut self, speed: f64) {
        self.params.speed = speed;
    }

    /// Sets how the speed is interpreted.
    pub fn set_speed_mode(&mut self, mode: SpeedMode) {
        self.params.mode = mode;
    }

    /// Sets the look-ahead distance.
    pub fn set_look_ahead(&mut self, look_ahead: f64) {
        self.params.look_ahead = look_ahead;
    }

    /// Jumps to `progress`, clamped to `[0, 1]`.
    ///
    /// Reaching `1.0` marks the trajectory as at the end unless it loops.
    pub fn set_progress(&mut self, progress: f64) {
        let progress = if progress.is_nan() {
            0.0
        } else {
            progress.clamp(0.0, 1.0)
        };
        self.progress = progress;
        self.at_end = progress >= 1.0 && !self.params.looping;
    }

    /// Advances by one tick.
    ///
    /// Does nothing unless moving along a valid curve. In
    /// [`SpeedMode::Uniform`] the curve's arc-length table is rebuilt first
    /// if it is missing or stale.
    pub fn update(&mut self, curves: &mut CurveStore) {
        if self.state() != MovementState::Moving {
            return;
        }
        let Ok(curve) = curves.get_mut(self.curve) else {
            return;
        };
        if !curve.is_valid() {
            return;
        }

        let speed = self.params.speed;
        // `None` means the step ran past the end of the curve.
        let next = match self.params.mode {
            SpeedMode::Parameter => {
                let t = self.progress + speed;
                (t < 1.0).then_some(t)
            }
            SpeedMode::Uniform => {
                let table = curve.ensure_length_table(self.params.resolution);
                uniform_step(table, self.progress, speed)
            }
        };

        match next {
            Some(t) => self.progress = t.max(0.0),
            None if self.params.looping => {
                self.progress = 0.0;
                self.at_end = false;
                trace!("trajectory wrapped to start");
            }
            None => {
                self.progress = 1.0;
                self.at_end = true;
                trace!("trajectory reached end");
            }
        }
    }

    /// Position on the curve at the current progress.
    #[must_use]
    pub fn current_position(&self, curves: &CurveStore) -> Point3 {
        curves
            .get(self.curve)
            .map_or_else(|_| Point3::origin(), |curve| curve.position(self.progress))
    }

    /// A point slightly ahead on the curve to aim at.
    ///
    /// Near the end of the curve the sample ahead would collapse onto the
    /// current position, so the end direction is extrapolated instead.
    #[must_use]
    pub fn look_at_target(&self, curves: &CurveStore) -> Point3 {
        let Ok(curve) = curves.get(self.curve) else {
            return Point3::origin();
        };
        if !curve.is_valid() {
            return Point3::origin();
        }

        if self.progress >= LOOK_AHEAD_SATURATION {
            return curve.position(self.progress) + end_direction(curve);
        }

        let ahead = (self.progress + self.params.look_ahead).min(1.0);
        let target_t = match self.params.mode {
            SpeedMode::Parameter => ahead,
            SpeedMode::Uniform => match curve.length_table() {
                Some(table) => {
                    let total = table.total_length();
                    table.t_from_length(self.progress * total + self.params.look_ahead * total)
                }
                None => {
                    debug!("no current arc-length table, sampling look-ahead by parameter");
                    ahead
                }
            },
        };
        curve.position(target_t)
    }

    /// Euler angles (pitch, yaw, 0) facing from the current position towards
    /// the look-at target.
    #[must_use]
    pub fn current_rotation(&self, curves: &CurveStore) -> Vector3 {
        look_rotation(&self.current_position(curves), &self.look_at_target(curves))
    }

    /// Ticks needed to reach the current progress from the start at the
    /// configured speed.
    ///
    /// In [`SpeedMode::Uniform`] the ticks are replayed against the current
    /// arc-length table; without one the parameter-space count is used.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn current_frame_from_start(&self, curves: &CurveStore) -> usize {
        if !self.has_speed() {
            return 0;
        }
        let table = match self.params.mode {
            SpeedMode::Parameter => None,
            SpeedMode::Uniform => curves.get(self.curve).ok().and_then(RailCurve::length_table),
        };
        let Some(table) = table else {
            return (self.progress / self.params.speed).round() as usize;
        };

        let max = self.max_frames();
        let mut t = 0.0;
        let mut frame = 0;
        while t < self.progress - FRAME_EPSILON && frame < max {
            frame += 1;
            match uniform_step(table, t, self.params.speed) {
                Some(next) => t = next.max(0.0),
                None => break,
            }
        }
        frame
    }

    /// Ticks needed to travel the whole curve at the configured speed.
    ///
    /// At least one tick for any positive speed; `0` when the speed is not
    /// positive.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn max_frames(&self) -> usize {
        if !self.has_speed() {
            return 0;
        }
        (1.0 / self.params.speed - 1e-9).ceil().max(1.0) as usize
    }

    /// Jumps to where the trajectory would be after `frame` ticks from the
    /// start.
    ///
    /// Uniform mode replays the ticks against the arc-length table, so the
    /// result matches `frame` calls to [`update`](Self::update). Frames at or
    /// past [`max_frames`](Self::max_frames) land on the end.
    #[allow(clippy::cast_precision_loss)]
    pub fn set_progress_from_frame(&mut self, frame: usize, curves: &mut CurveStore) {
        let speed = self.params.speed;
        let fraction = (frame as f64 * speed).clamp(0.0, 1.0);
        let t = match self.params.mode {
            SpeedMode::Parameter => fraction,
            SpeedMode::Uniform => match curves.get_mut(self.curve) {
                Ok(curve) if curve.is_valid() && self.has_speed() => {
                    let table = curve.ensure_length_table(self.params.resolution);
                    if frame >= self.max_frames() {
                        1.0
                    } else {
                        replay_uniform(table, speed, frame)
                    }
                }
                _ => fraction,
            },
        };
        self.set_progress(t);
    }

    fn has_speed(&self) -> bool {
        self.params.speed > 0.0
    }
}

/// Slack when matching a replayed progress against the current one.
const FRAME_EPSILON: f64 = 1e-9;

/// One uniform-mode tick from `t`: `t` and `speed` are scaled by the total
/// length, summed, and mapped back to a parameter. `None` once the target
/// reaches the end of the curve.
fn uniform_step(table: &LengthTable, t: f64, speed: f64) -> Option<f64> {
    let total = table.total_length();
    let target = t * total + speed * total;
    (target < total).then(|| table.t_from_length(target))
}

/// Progress after `ticks` uniform-mode ticks from the start, without looping.
fn replay_uniform(table: &LengthTable, speed: f64, ticks: usize) -> f64 {
    let mut t = 0.0;
    for _ in 0..ticks {
        match uniform_step(table, t, speed) {
            Some(next) => t = next.max(0.0),
            None => return 1.0,
        }
    }
    t
}

/// Direction of travel at the very end of a curve.
fn end_direction(curve: &RailCurve) -> Vector3 {
    let tail = curve.position(1.0) - curve.position(LOOK_AHEAD_SATURATION);
    if tail.norm() >= TOLERANCE {
        return tail;
    }
    match curve.control_points() {
        [.., a, b] => b - a,
        _ => Vector3::zeros(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn p(x: f64, y: f64, z: f64) -> Point3 {
        Point3::new(x, y, z)
    }

    fn line() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(1.0, 0.0, 0.0),
            p(2.0, 0.0, 0.0),
            p(3.0, 0.0, 0.0),
        ]
    }

    /// Control points spaced unevenly so parameter and length disagree.
    fn uneven() -> Vec<Point3> {
        vec![
            p(0.0, 0.0, 0.0),
            p(0.5, 0.0, 0.0),
            p(6.0, 0.0, 1.0),
            p(7.0, 0.0, 1.0),
            p(7.0, 0.0, 9.0),
        ]
    }

    fn setup(points: Vec<Point3>, params: TrajectoryParams) -> (CurveStore, TrajectoryController) {
        let mut store = CurveStore::new();
        let id = store.insert(RailCurve::from_points(points));
        (store, TrajectoryController::new(id, params))
    }

    fn params(speed: f64) -> TrajectoryParams {
        TrajectoryParams {
            speed,
            ..TrajectoryParams::default()
        }
    }

    #[test]
    fn starts_stopped_at_zero() {
        let (mut store, mut ctrl) = setup(line(), params(0.25));
        assert_eq!(ctrl.state(), MovementState::Stopped);
        ctrl.update(&mut store);
        assert!(ctrl.progress().abs() < f64::EPSILON);
    }

    #[test]
    fn parameter_mode_clamps_at_end() {
        init_tracing();
        let (mut store, mut ctrl) = setup(line(), params(0.25));
        ctrl.start();
        for expected in [0.25, 0.5, 0.75] {
            ctrl.update(&mut store);
            assert_abs_diff_eq!(ctrl.progress(), expected);
            assert_eq!(ctrl.state(), MovementState::Moving);
        }
        ctrl.update(&mut store);
        assert_abs_diff_eq!(ctrl.progress(), 1.0);
        assert_eq!(ctrl.state(), MovementState::AtEnd);

        ctrl.update(&mut store);
        assert_abs_diff_eq!(ctrl.progress(), 1.0);
        assert!(ctrl.is_at_end());
    }

    #[test]
    fn looping_wraps_to_start() {
        let (mut store, mut ctrl) = setup(
            line(),
            TrajectoryParams {
                looping: true,
                ..params(0.25)
            },
        );
        ctrl.start();
        for _ in 0..4 {
            ctrl.update(&mut store);
        }
        assert!(ctrl.progress().abs() < f64::EPSILON);
        assert_eq!(ctrl.state(), MovementState::Moving);
        ctrl.update(&mut store);
        assert_abs_diff_eq!(ctrl.progress(), 0.25);
    }

    #[test]
    fn pause_keeps_progress() {
        let (mut store, mut ctrl) = setup(line(), params(0.25));
        ctrl.start();
        ctrl.update(&mut store);
        ctrl.stop();
        ctrl.update(&mut store);
        assert_abs_diff_eq!(ctrl.progress(), 0.25);
        assert_eq!(ctrl.state(), MovementState::Stopped);
        ctrl.start();
        ctrl.update(&mut store);
        assert_abs_diff_eq!(ctrl.progress(), 0.5);
    }

    #[test]
    fn enabling_loop_releases_end() {
        let (mut store, mut ctrl) = setup(line(), params(0.5));
        ctrl.start();
        ctrl.update(&mut store);
        ctrl.update(&mut store);
        assert!(ctrl.is_at_end());

        ctrl.set_looping(true);
        assert_eq!(ctrl.state(), MovementState::Moving);
        ctrl.update(&mut store);
        assert!(ctrl.progress().abs() < f64::EPSILON);
    }

    #[test]
    fn reset_clears_end() {
        let (mut store, mut ctrl) = setup(line(), params(1.0));
        ctrl.start();
        ctrl.update(&mut store);
        assert!(ctrl.is_at_end());
        ctrl.reset();
        assert_eq!(ctrl.state(), MovementState::Moving);
        assert!(ctrl.progress().abs() < f64::EPSILON);
    }

    #[test]
    fn invalid_curve_is_inert() {
        let (mut store, mut ctrl) = setup(line()[..3].to_vec(), params(0.25));
        ctrl.start();
        ctrl.update(&mut store);
        assert!(ctrl.progress().abs() < f64::EPSILON);
        assert_eq!(ctrl.current_position(&store), Point3::origin());
        assert_eq!(ctrl.look_at_target(&store), Point3::origin());
    }

    #[test]
    fn removed_curve_is_inert() {
        let (mut store, mut ctrl) = setup(line(), params(0.25));
        ctrl.start();
        ctrl.update(&mut store);
        store.remove(ctrl.curve_id());
        ctrl.update(&mut store);
        assert_abs_diff_eq!(ctrl.progress(), 0.25);
        assert_eq!(ctrl.current_position(&store), Point3::origin());
        assert_eq!(ctrl.look_at_target(&store), Point3::origin());
    }

    #[test]
    fn set_progress_clamps_and_flags_end() {
        let (_store, mut ctrl) = setup(line(), params(0.1));
        ctrl.set_progress(1.5);
        assert_abs_diff_eq!(ctrl.progress(), 1.0);
        assert!(ctrl.is_at_end());

        ctrl.set_progress(-0.5);
        assert!(ctrl.progress().abs() < f64::EPSILON);
        assert!(!ctrl.is_at_end());

        ctrl.set_looping(true);
        ctrl.set_progress(1.0);
        assert!(!ctrl.is_at_end());
    }

    #[test]
    fn current_position_follows_curve() {
        let (store, mut ctrl) = setup(line(), params(0.1));
        ctrl.set_progress(0.5);
        assert_abs_diff_eq!(ctrl.current_position(&store), p(1.5, 0.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn uniform_mode_scales_progress_by_total_length() {
        init_tracing();
        let (mut store, mut ctrl) = setup(
            uneven(),
            TrajectoryParams {
                mode: SpeedMode::Uniform,
                ..params(0.1)
            },
        );
        ctrl.start();

        ctrl.update(&mut store);
        let table = store.get(ctrl.curve_id()).unwrap().length_table().unwrap();
        let total = table.total_length();
        let first = table.t_from_length(0.1 * total);
        assert_abs_diff_eq!(ctrl.progress(), first, epsilon = 1e-12);

        ctrl.update(&mut store);
        let table = store.get(ctrl.curve_id()).unwrap().length_table().unwrap();
        let second = table.t_from_length(first * total + 0.1 * total);
        assert_abs_diff_eq!(ctrl.progress(), second, epsilon = 1e-12);
        // The short first span makes the parameter run ahead of the step.
        assert!(second > 0.5 && second < 0.52);
    }

    #[test]
    fn uniform_mode_reaches_end() {
        let (mut store, mut ctrl) = setup(
            uneven(),
            TrajectoryParams {
                mode: SpeedMode::Uniform,
                ..params(0.1)
            },
        );
        ctrl.start();
        for _ in 0..12 {
            ctrl.update(&mut store);
        }
        assert!(ctrl.is_at_end());
        assert_abs_diff_eq!(ctrl.progress(), 1.0);
    }

    #[test]
    fn uniform_mode_rebuilds_after_edit() {
        let (mut store, mut ctrl) = setup(
            line(),
            TrajectoryParams {
                mode: SpeedMode::Uniform,
                resolution: 100,
                ..params(0.1)
            },
        );
        ctrl.start();
        ctrl.update(&mut store);
        let id = ctrl.curve_id();
        assert_abs_diff_eq!(store.get(id).unwrap().total_length(), 3.0, epsilon = 1e-9);

        store.get_mut(id).unwrap().push_point(p(4.0, 0.0, 0.0));
        assert!(store.get(id).unwrap().length_table().is_none());
        ctrl.update(&mut store);
        assert_abs_diff_eq!(store.get(id).unwrap().total_length(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn look_ahead_in_parameter_mode() {
        let (store, mut ctrl) = setup(
            line(),
            TrajectoryParams {
                look_ahead: 0.1,
                ..params(0.1)
            },
        );
        ctrl.set_progress(0.5);
        let curve = store.get(ctrl.curve_id()).unwrap();
        assert_abs_diff_eq!(ctrl.look_at_target(&store), curve.position(0.6), epsilon = 1e-12);
    }

    #[test]
    fn look_ahead_in_uniform_mode_uses_length() {
        let (mut store, mut ctrl) = setup(
            uneven(),
            TrajectoryParams {
                mode: SpeedMode::Uniform,
                look_ahead: 0.1,
                ..params(0.01)
            },
        );
        let id = ctrl.curve_id();
        let table = store.get_mut(id).unwrap().build_length_table(1000).clone();
        ctrl.set_progress(0.2);

        let expected_t = table.t_from_length((0.2 + 0.1) * table.total_length());
        let curve = store.get(id).unwrap();
        assert_abs_diff_eq!(
            ctrl.look_at_target(&store),
            curve.position(expected_t),
            epsilon = 1e-12
        );
    }

    #[test]
    fn look_ahead_without_table_falls_back_to_parameter() {
        let (store, mut ctrl) = setup(
            uneven(),
            TrajectoryParams {
                mode: SpeedMode::Uniform,
                look_ahead: 0.1,
                ..params(0.01)
            },
        );
        ctrl.set_progress(0.3);
        let curve = store.get(ctrl.curve_id()).unwrap();
        assert_abs_diff_eq!(ctrl.look_at_target(&store), curve.position(0.4), epsilon = 1e-12);
    }

    #[test]
    fn look_at_target_extrapolates_near_end() {
        let (store, mut ctrl) = setup(line(), params(0.1));
        ctrl.set_progress(1.0);
        let target = ctrl.look_at_target(&store);
        let position = ctrl.current_position(&store);
        let dir = target - position;
        assert!(dir.norm() > TOLERANCE);
        assert!(dir.x > 0.0);
        assert_abs_diff_eq!(dir.y, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(dir.z, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_faces_travel_direction() {
        let (store, mut ctrl) = setup(line(), params(0.1));
        for progress in [0.2, 0.995] {
            ctrl.set_progress(progress);
            let rotation = ctrl.current_rotation(&store);
            assert_abs_diff_eq!(rotation.y, FRAC_PI_2, epsilon = 1e-9);
            assert_abs_diff_eq!(rotation.x, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn frames_in_parameter_mode() {
        let (mut store, mut ctrl) = setup(line(), params(0.25));
        assert_eq!(ctrl.max_frames(), 4);

        ctrl.start();
        ctrl.update(&mut store);
        ctrl.update(&mut store);
        assert_eq!(ctrl.current_frame_from_start(&store), 2);

        ctrl.set_progress_from_frame(3, &mut store);
        assert_abs_diff_eq!(ctrl.progress(), 0.75);
        assert!(!ctrl.is_at_end());

        ctrl.set_progress_from_frame(10, &mut store);
        assert!(ctrl.is_at_end());
    }

    #[test]
    fn frames_in_uniform_mode() {
        let uniform = TrajectoryParams {
            mode: SpeedMode::Uniform,
            ..params(0.1)
        };
        let (mut store, mut ctrl) = setup(uneven(), uniform);
        assert_eq!(ctrl.max_frames(), 10);

        let mut ticked = TrajectoryController::new(ctrl.curve_id(), uniform);
        ticked.start();
        for _ in 0..3 {
            ticked.update(&mut store);
        }

        ctrl.set_progress_from_frame(3, &mut store);
        assert_abs_diff_eq!(ctrl.progress(), ticked.progress(), epsilon = 1e-12);
        assert_eq!(ctrl.current_frame_from_start(&store), 3);
        assert!(!ctrl.is_at_end());
    }

    #[test]
    fn uniform_frame_past_the_end_clamps() {
        let (mut store, mut ctrl) = setup(
            uneven(),
            TrajectoryParams {
                mode: SpeedMode::Uniform,
                ..params(0.1)
            },
        );
        // Steps through the long spans overshoot well before the tenth tick.
        ctrl.set_progress_from_frame(9, &mut store);
        assert!(ctrl.is_at_end());
        assert_abs_diff_eq!(ctrl.progress(), 1.0);

        ctrl.set_progress_from_frame(usize::MAX, &mut store);
        assert!(ctrl.is_at_end());
    }

    #[test]
    fn default_speed_max_frames() {
        let (_store, ctrl) = setup(line(), TrajectoryParams::default());
        assert_eq!(ctrl.max_frames(), 1000);
    }

    #[test]
    fn non_positive_speed_has_no_frames() {
        let (store, mut ctrl) = setup(line(), params(0.0));
        assert_eq!(ctrl.max_frames(), 0);
        assert_eq!(ctrl.current_frame_from_start(&store), 0);
        ctrl.set_speed(-0.1);
        assert_eq!(ctrl.max_frames(), 0);
    }

    #[test]
    fn any_positive_speed_needs_a_frame() {
        let (_store, mut ctrl) = setup(line(), params(1.0));
        assert_eq!(ctrl.max_frames(), 1);
        ctrl.set_speed(1e10);
        assert_eq!(ctrl.max_frames(), 1);
        ctrl.set_speed(0.3);
        assert_eq!(ctrl.max_frames(), 4);
    }
}
