use crate::airfoil::{Airfoil, ShapeParameters};
use crate::serialize::point2_vec;
use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// The persisted form of a generated airfoil: the originating parameters together with
/// the closed outer contour, the analytic camber line, and the chord midline. The JSON
/// field names are part of the contract with the downstream dashboard and solver
/// tooling and must not change.
#[derive(Serialize, Deserialize)]
pub struct AirfoilRecord {
    #[serde(rename = "Parameters")]
    pub parameters: ShapeParameters,

    /// The closed contour: upper surface leading to trailing edge, then the lower
    /// surface back, 2 * num_points entries
    #[serde(rename = "Airfoil_Coordinates", with = "point2_vec")]
    pub coordinates: Vec<Point2<f64>>,

    #[serde(rename = "Camber_Line", with = "point2_vec")]
    pub camber_line: Vec<Point2<f64>>,

    /// Average of the offset surface heights per station; kept separate from the
    /// camber line because consumers rely on either
    #[serde(rename = "Chord_Midline", with = "point2_vec")]
    pub chord_midline: Vec<Point2<f64>>,
}

impl AirfoilRecord {
    pub fn new(parameters: ShapeParameters, airfoil: &Airfoil) -> AirfoilRecord {
        AirfoilRecord {
            parameters,
            coordinates: airfoil.to_outer_contour(),
            camber_line: airfoil.camber.to_vec(),
            chord_midline: airfoil.chord_midline.to_vec(),
        }
    }

    /// The four-digit designation for this record's parameters, in the form used to
    /// name output files: m=0.02, p=0.4, t=0.12 becomes "Naca_2412".
    pub fn naca_name(&self) -> String {
        format!(
            "Naca_{:.0}{:.0}{:02.0}",
            self.parameters.m * 100.0,
            self.parameters.p * 10.0,
            self.parameters.t * 100.0
        )
    }

    pub fn write(&self, path: &Path) -> Result<(), Box<dyn Error>> {
        let file = File::create(path)?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)?;
        Ok(())
    }

    pub fn read(path: &Path) -> Result<AirfoilRecord, Box<dyn Error>> {
        let file = File::open(path)?;
        Ok(serde_json::from_reader(BufReader::new(file))?)
    }
}
