use std::{
    collections::HashSet,
    path::Path,
};

use log::{
    debug,
    info,
    warn,
};
use walkdir::WalkDir;

use crate::{
    anki::{
        media_file_name,
        MediaStore,
    },
    core::BmaError,
};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub added: Vec<String>,
    pub replaced: Vec<String>,
    pub skipped: Vec<String>,
    /// Files whose base name was already taken by an earlier file of the same walk
    pub collisions: Vec<String>,
}

/// Copy every file under `folder_path` into the flat media directory.
///
/// Entries are visited in file name order. A base name that is already in the
/// media directory is skipped unless `overwrite` is set, in which case the old
/// file is removed first. Within one walk the first file seen for a base name
/// wins. Failures stop the walk; files copied so far stay in place.
pub fn add_folder_to_media<M: MediaStore>(
    media: &mut M,
    folder_path: &Path,
    overwrite: bool,
) -> Result<SyncReport, BmaError> {
    if !folder_path.is_dir() {
        return Err(BmaError::InvalidDirectory(folder_path.to_path_buf()));
    }

    let mut report = SyncReport::default();
    let mut seen = HashSet::new();

    for entry in WalkDir::new(folder_path).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let filename = media_file_name(path)?;

        if !seen.insert(filename.clone()) {
            warn!(
                "Skipping '{}': another file named '{}' was already synced",
                path.display(),
                filename
            );
            report.collisions.push(path.display().to_string());
            continue;
        }

        if media.has_file(&filename)? {
            if !overwrite {
                debug!("'{}' already in media folder", filename);
                report.skipped.push(filename);
                continue;
            }
            media.remove_file(&filename)?;
            media.add_file(path)?;
            report.replaced.push(filename);
        } else {
            media.add_file(path)?;
            report.added.push(filename);
        }
    }

    info!(
        "Media sync from '{}': {} added, {} replaced, {} skipped, {} collisions",
        folder_path.display(),
        report.added.len(),
        report.replaced.len(),
        report.skipped.len(),
        report.collisions.len()
    );

    Ok(report)
}
