use ncollide2d::na::Point2;
use serde::{Deserialize, Serialize};

fn point_x(p: &Point2<f64>) -> f64 {
    p.x
}

fn point_y(p: &Point2<f64>) -> f64 {
    p.y
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Point2<f64>")]
pub struct Point2f64 {
    #[serde(getter = "point_x")]
    x: f64,

    #[serde(getter = "point_y")]
    y: f64,
}

impl From<Point2f64> for Point2<f64> {
    fn from(p: Point2f64) -> Self {
        Point2::new(p.x, p.y)
    }
}

/// Serializes a point sequence as an ordered list of `{x, y}` records through the
/// `Point2f64` proxy, for use with `#[serde(with = "point2_vec")]`.
pub mod point2_vec {
    use super::Point2f64;
    use ncollide2d::na::Point2;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Entry(#[serde(with = "Point2f64")] Point2<f64>);

    pub fn serialize<S>(points: &[Point2<f64>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(points.iter().map(|p| Entry(*p)))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Point2<f64>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries = Vec::<Entry>::deserialize(deserializer)?;
        Ok(entries.into_iter().map(|e| e.0).collect())
    }
}
