mod control_points;

pub use control_points::{format_control_points, parse_control_points, ControlPoint};
