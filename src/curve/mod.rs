mod catmull_rom;
mod length_table;
mod rail;
mod store;
mod trajectory;

pub use catmull_rom::{
    calculate_position, calculate_tangent, catmull_rom, is_valid_curve, sample_positions,
    MIN_CONTROL_POINTS,
};
pub use length_table::{LengthTable, LengthTableEntry, DEFAULT_RESOLUTION};
pub use rail::RailCurve;
pub use store::{CurveId, CurveStore};
pub use trajectory::{
    MovementState, SpeedMode, TrajectoryController, TrajectoryParams, LOOK_AHEAD_SATURATION,
};
