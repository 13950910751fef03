//! Output writers for benchmark results.
//!
//! Persists comparison results and raw measurements to disk in JSON format
//! for downstream tooling; the human-readable report goes to stdout and is
//! rendered by [`crate::report`].

use crate::types::{ComparisonResult, Measurement};
use crate::{Error, Result};
use std::fs;
use std::path::Path;

/// Write comparison results to a JSON file.
pub fn write_comparisons(results: &[ComparisonResult], output_path: &Path) -> Result<()> {
    write_pretty_json(results, output_path)
}

/// Write the raw measurement sequence to a JSON file.
///
/// Measurements are written in the recorded order, which reproduces the
/// iteration order of each pair for debugging.
pub fn write_measurements(measurements: &[Measurement], output_path: &Path) -> Result<()> {
    write_pretty_json(measurements, output_path)
}

fn write_pretty_json<T: serde::Serialize + ?Sized>(value: &T, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        fs::create_dir_all(parent).map_err(Error::Io)?;
    }

    let json = serde_json::to_string_pretty(value)?;
    fs::write(output_path, json).map_err(Error::Io)?;

    Ok(())
}
