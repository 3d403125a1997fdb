//! Loading the reference dataset from disk.

use std::io::{self, BufReader};

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use hydrosite_core::ReferenceSet;

use crate::{ARG_DATASET, CliError};

/// Open a UTF-8 file path using ambient authority.
fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Return whether a path exists and is a regular file.
fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other("dataset path should include a file name"))?;
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    dir.metadata(name).map(|meta| meta.is_file())
}

/// Check that the dataset path names an existing regular file.
pub(crate) fn require_existing(path: &Utf8Path) -> Result<(), CliError> {
    match file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field: ARG_DATASET,
            path: path.to_path_buf(),
        }),
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field: ARG_DATASET,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field: ARG_DATASET,
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a JSON dataset (`assets`, `renewables`, `demandCenters`).
///
/// Coordinates and annual demand are validated while decoding; missing
/// collections load as empty.
pub(crate) fn load_dataset(path: &Utf8Path) -> Result<ReferenceSet, CliError> {
    require_existing(path)?;
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDataset {
        path: path.to_path_buf(),
        source,
    })?;
    let references: ReferenceSet =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            CliError::ParseDataset {
                path: path.to_path_buf(),
                source,
            }
        })?;
    let summary = references.summary();
    log::info!(
        "loaded {} assets, {} renewable sources and {} demand centres from {path}",
        summary.total_assets,
        summary.total_renewables,
        summary.total_demand_centers
    );
    Ok(references)
}
