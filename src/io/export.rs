//! CSV export of a generated sequence for external analysis

use crate::generator::SampleValue;
use crate::io::configuration::VALUE_PRECISION;
use crate::io::error::{GeneratorError, Result, WithPath};
use std::path::Path;

/// Column headers of the exported table
pub const CSV_HEADER: [&str; 2] = ["Index", "Value"];

/// Write `values` as `Index,Value` rows with zero-based indices
///
/// Values are written with four decimal places.
///
/// # Errors
///
/// Returns an error if the parent directory or file cannot be created, or a
/// row cannot be written
pub fn export_sequence_csv<F: SampleValue>(values: &[F], output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| GeneratorError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let mut writer = csv::Writer::from_path(output_path).with_path(output_path)?;
    writer.write_record(CSV_HEADER).with_path(output_path)?;

    for (index, value) in values.iter().enumerate() {
        writer
            .write_record([index.to_string(), format!("{:.*}", VALUE_PRECISION, value)])
            .with_path(output_path)?;
    }

    writer.flush().map_err(|e| GeneratorError::FileSystem {
        path: output_path.to_path_buf(),
        operation: "flush",
        source: e,
    })
}
