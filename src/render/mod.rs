//! Response output.
//!
//! Converts an API payload into pretty-printed JSON on stdout or in a file,
//! according to the selected [`Format`].

pub mod error;

use std::fs::File;
use std::io::{BufWriter, Write};

use serde::Serialize;

use crate::core::format::Format;
use crate::error::{Result, WmtError};

/// Write a response payload according to the selected format.
///
/// - `Console`: pretty-print to stdout; never touches the filesystem.
/// - `Json`: `file_path` is mandatory; the file is created or overwritten
///   through a buffered writer and flushed before returning.
/// - Anything else reaching this point is a defect: display commands
///   validate the format before calling, so the CSV placeholder arm raises
///   an internal error rather than an argument error.
///
/// # Errors
///
/// Argument-validation error for a missing file path; I/O-class errors for
/// serialization or filesystem failures, cause preserved.
pub fn write_json<T: Serialize>(value: &T, format: Format, file_path: Option<&str>) -> Result<()> {
    match format {
        Format::Console => {
            let rendered = serde_json::to_string_pretty(value)?;
            println!("{rendered}");
            Ok(())
        }
        Format::Json => {
            let path = file_path
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .ok_or_else(|| WmtError::InvalidArgument("filepath is mandatory".to_string()))?;

            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, value)?;
            writer.flush()?;
            Ok(())
        }
        Format::Csv => Err(WmtError::Internal(format!(
            "format {format} reached the writer without being validated"
        ))),
    }
}
