use crate::errors::InvalidAirfoil;
use itertools::multiunzip;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};

pub mod generate;
pub mod record;
pub mod xfoil;

/// The defining parameters of a four-digit airfoil section on a unit chord, fixed for
/// the lifetime of any geometry generated from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeParameters {
    /// Maximum camber as a fraction of the chord; the "2" in 2412 is 0.02
    pub m: f64,

    /// Chordwise position of the maximum camber as a fraction of the chord, strictly
    /// between 0 and 1; the "4" in 2412 is 0.4
    pub p: f64,

    /// Maximum thickness as a fraction of the chord; the "12" in 2412 is 0.12
    pub t: f64,

    /// Number of chordwise sample stations, at least 2
    pub num_points: usize,
}

impl ShapeParameters {
    pub fn new(m: f64, p: f64, t: f64, num_points: usize) -> Result<ShapeParameters, InvalidAirfoil> {
        let params = ShapeParameters { m, p, t, num_points };
        params.validate()?;
        Ok(params)
    }

    /// Checks the mathematical preconditions of the generation formulas. Physical
    /// plausibility of extreme `t` or `m` is not checked; shapes which self-intersect
    /// are left to downstream consumers to reject.
    pub fn validate(&self) -> Result<(), InvalidAirfoil> {
        if self.p <= 0.0 || self.p >= 1.0 {
            return Err(InvalidAirfoil::InvalidCamberPosition(self.p));
        }

        if self.num_points < 2 {
            return Err(InvalidAirfoil::InvalidSampleCount(self.num_points));
        }

        Ok(())
    }
}

pub struct CamberStation {
    /// The chord fraction at which this station was sampled
    pub x: f64,
    pub camber: Point2<f64>,
    pub upper: Point2<f64>,
    pub lower: Point2<f64>,
}

impl CamberStation {
    pub fn new(x: f64, camber: Point2<f64>, upper: Point2<f64>, lower: Point2<f64>) -> CamberStation {
        CamberStation {
            x,
            camber,
            upper,
            lower,
        }
    }

    /// The average of the offset surface heights at the sampled chord fraction. The
    /// normal offsets cancel in the average, so this coincides with the camber
    /// ordinate at every station; it is still exposed under its own name because
    /// downstream consumers address either output.
    pub fn midline(&self) -> Point2<f64> {
        Point2::new(self.x, (self.upper.y + self.lower.y) / 2.0)
    }
}

/// A fully generated airfoil as parallel per-station sequences, index-aligned with the
/// chord fractions in `stations`.
#[derive(Debug)]
pub struct Airfoil {
    pub stations: Vec<f64>,
    pub camber: Vec<Point2<f64>>,
    pub upper: Vec<Point2<f64>>,
    pub lower: Vec<Point2<f64>>,
    pub chord_midline: Vec<Point2<f64>>,
}

impl Airfoil {
    pub fn from_stations(stations: &[CamberStation]) -> Airfoil {
        let (stations, camber, upper, lower, chord_midline): (
            Vec<f64>,
            Vec<Point2<f64>>,
            Vec<Point2<f64>>,
            Vec<Point2<f64>>,
            Vec<Point2<f64>>,
        ) = multiunzip(
            stations
                .iter()
                .map(|s| (s.x, s.camber, s.upper, s.lower, s.midline())),
        );

        Airfoil {
            stations,
            camber,
            upper,
            lower,
            chord_midline,
        }
    }

    /// Concatenates the upper surface (leading to trailing edge) with the reversed
    /// lower surface (trailing back to leading edge) into a single closed contour of
    /// twice the station count. The near-duplicate points at the shared extremities
    /// are kept, matching the closed polygon convention of downstream consumers.
    pub fn to_outer_contour(&self) -> Vec<Point2<f64>> {
        let mut result = self.upper.to_vec();
        let mut lower = self.lower.to_vec();
        lower.reverse();
        result.append(&mut lower);
        result
    }
}
