//! Folder listing

use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

/// Names of the regular files directly inside `folder`, sorted.
///
/// An unreadable or missing folder is treated as empty.
pub fn list_files_in_folder(folder: &Path) -> Vec<String> {
    if !folder.is_dir() {
        warn!("Cannot list '{}': not a readable folder", folder.display());
        return Vec::new();
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(folder)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        match entry {
            Ok(entry) if entry.path().is_file() => {
                files.push(entry.file_name().to_string_lossy().into_owned());
            }
            Ok(_) => {}
            Err(e) => {
                warn!(
                    "Error occurred while listing files in '{}': {}",
                    folder.display(),
                    e
                );
                return Vec::new();
            }
        }
    }
    files
}
