//! CSV export of collected people, split into files of bounded size.

use std::fs::{self, File};
use std::ops::Range;
use std::path::{Path, PathBuf};

use crate::error::ExportError;
use crate::person::{Person, CSV_HEADER};

/// A CSV file written by [`export_people`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub path: PathBuf,
    pub rows: usize,
}

/// Row ranges for each output file, in input order.
///
/// Splits only when `max_per_file > 0` and `total > max_per_file`; otherwise a
/// single range covers every row (including the empty `0..0` range).
#[must_use]
pub fn plan_chunks(total: usize, max_per_file: usize) -> Vec<Range<usize>> {
    if max_per_file == 0 || total <= max_per_file {
        return vec![0..total];
    }
    (0..total)
        .step_by(max_per_file)
        .map(|start| start..(start + max_per_file).min(total))
        .collect()
}

/// Write `people` under `dir` as `<base_name>.csv`, or as
/// `<base_name>_part<N>.csv` files when the rows are split.
///
/// `dir` is created if it does not exist. Every file carries the header row,
/// so an empty run still produces one header-only file.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the directory or a file cannot be created,
/// and [`ExportError::Csv`] if a row cannot be serialized.
pub fn export_people(
    dir: &Path,
    base_name: &str,
    people: &[Person],
    max_per_file: usize,
) -> Result<Vec<ExportedFile>, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let chunks = plan_chunks(people.len(), max_per_file);
    let split = chunks.len() > 1;

    let mut written = Vec::with_capacity(chunks.len());
    for (index, range) in chunks.into_iter().enumerate() {
        let file_name = if split {
            format!("{base_name}_part{}.csv", index + 1)
        } else {
            format!("{base_name}.csv")
        };
        let path = dir.join(file_name);
        let rows = &people[range];
        write_csv(&path, rows)?;
        tracing::info!(rows = rows.len(), path = %path.display(), "wrote CSV export");
        written.push(ExportedFile {
            path,
            rows: rows.len(),
        });
    }
    Ok(written)
}

fn write_csv(path: &Path, rows: &[Person]) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    // Header is written by hand so header-only files still get one.
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(CSV_HEADER)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush().map_err(io_err)?;
    Ok(())
}

#[cfg(test)]
#[path = "export_test.rs"]
mod tests;
