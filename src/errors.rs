use std::error::Error;
use std::fmt::{Display, Formatter};

/// A parameter set which fails the mathematical preconditions of the generation
/// formulas. These are rejected outright rather than clamped, since clamping would
/// silently change the requested shape.
#[derive(Debug, PartialEq)]
pub enum InvalidAirfoil {
    /// The camber position must lie strictly between 0 and 1; both camber branches
    /// divide by `p` or `1 - p`, even when the camber itself is zero.
    InvalidCamberPosition(f64),

    /// Fewer than two stations cannot define the upper and lower surfaces.
    InvalidSampleCount(usize),
}

impl Display for InvalidAirfoil {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for InvalidAirfoil {}
