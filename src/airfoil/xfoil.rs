use ncollide2d::na::Point2;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Writes a coordinate sequence in the flat two-column format consumed by XFOIL's LOAD
/// command: one whitespace-separated pair per line, in the same point order as the
/// closed contour.
pub fn write_dat<W: Write>(writer: &mut W, points: &[Point2<f64>]) -> std::io::Result<()> {
    for p in points.iter() {
        writeln!(writer, "{:.6} {:.6}", p.x, p.y)?;
    }

    Ok(())
}

/// Reads the two-column coordinate format back. Lines that do not parse as a pair of
/// floats (name headers, blanks) are skipped rather than treated as failures.
pub fn read_dat<R: BufRead>(reader: R) -> std::io::Result<Vec<Point2<f64>>> {
    let mut points = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        if let (Some(x), Some(y)) = (fields.next(), fields.next()) {
            if let (Ok(x), Ok(y)) = (x.parse::<f64>(), y.parse::<f64>()) {
                points.push(Point2::new(x, y));
            }
        }
    }

    Ok(points)
}

/// Configuration for driving an XFOIL process through its text command interface. The
/// executable location and analysis parameters are always supplied by the caller;
/// nothing here is a process-wide default.
pub struct XfoilConfig {
    pub executable: PathBuf,
    pub reynolds: f64,
    pub alpha_start: f64,
    pub alpha_end: f64,
    pub alpha_step: f64,
    pub iter_limit: u32,
}

impl XfoilConfig {
    /// A viscous polar sweep at Re = 500k over alpha -5..15 in 1 degree steps, the
    /// usual starting point for comparing four-digit sections.
    pub fn new(executable: impl Into<PathBuf>) -> XfoilConfig {
        XfoilConfig {
            executable: executable.into(),
            reynolds: 500_000.0,
            alpha_start: -5.0,
            alpha_end: 15.0,
            alpha_step: 1.0,
            iter_limit: 100,
        }
    }

    /// Builds the command script for one run: load the coordinate file, enter the
    /// OPER menu, set the Reynolds number and iteration limit, sweep the alpha
    /// sequence, write the polar to `output_path`, and quit. The blank line after the
    /// output path answers XFOIL's overwrite prompt.
    pub fn command_script(&self, dat_path: &Path, output_path: &Path) -> String {
        format!(
            "LOAD {}\nOPER\nVISC {}\nITER {}\nASeq {} {} {}\nPWRT\n{}\n\nQUIT\n",
            dat_path.display(),
            self.reynolds,
            self.iter_limit,
            self.alpha_start,
            self.alpha_end,
            self.alpha_step,
            output_path.display(),
        )
    }

    /// Runs the solver to completion, feeding the command script over stdin, and
    /// returns the captured process output.
    pub fn run(&self, dat_path: &Path, output_path: &Path) -> std::io::Result<Output> {
        let mut child = Command::new(&self.executable)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        let script = self.command_script(dat_path, output_path);
        if let Some(stdin) = child.stdin.take().as_mut() {
            stdin.write_all(script.as_bytes())?;
        }

        child.wait_with_output()
    }
}
