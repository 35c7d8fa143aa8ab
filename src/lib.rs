pub mod collision;
pub mod curve;
pub mod error;
pub mod geometry;
pub mod io;
pub mod math;

pub use error::{RailkitError, Result};
