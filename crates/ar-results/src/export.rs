//! CSV export of a solution, one row per (possibly decimated) sample.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use ar_sim::{Series, Solution};
use tracing::info;

use crate::ResultsResult;

pub const CSV_HEADER: &str =
    "Time,Angular Position,Angular Velocity,Angular Acceleration,Torque,Lift,Drag,Side Force";

/// Write the CSV table for `solution` with six decimal places per value.
pub fn write_csv<W: Write>(solution: &Solution, mut out: W) -> io::Result<()> {
    writeln!(out, "{CSV_HEADER}")?;
    for i in 0..solution.len() {
        let mut first = true;
        for series in Series::ALL {
            if !first {
                out.write_all(b",")?;
            }
            first = false;
            write!(out, "{:.6}", solution.series(series)[i])?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()
}

/// Write `<dir>/<name>.csv` and return its path.
pub fn export_csv(solution: &Solution, dir: &Path) -> ResultsResult<PathBuf> {
    let path = dir.join(format!("{}.csv", solution.name));
    let file = File::create(&path)?;
    write_csv(solution, BufWriter::new(file))?;
    info!(path = %path.display(), rows = solution.len(), "exported solution");
    Ok(path)
}
