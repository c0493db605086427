//! Two-level walk over `skills/<category>/<skill>`.
//!
//! Only immediate children are listed at each level, sorted by file name.
//! Symlinks are followed so a linked directory counts like a real one.

use crate::error::{Error, Result};
use crate::validator::folder_name;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A category directory directly under the skills directory.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the categories under `skills_dir`, sorted by name.
pub fn categories(skills_dir: &Path) -> Result<Vec<Category>> {
    Ok(child_dirs(skills_dir)?
        .into_iter()
        .map(|path| Category {
            name: folder_name(&path),
            path,
        })
        .collect())
}

/// Lists the skill directories inside one category, sorted by name.
pub fn skill_dirs(category_dir: &Path) -> Result<Vec<PathBuf>> {
    child_dirs(category_dir)
}

fn child_dirs(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut dirs = Vec::new();

    let walker = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            // Dangling symlink: nothing to descend into.
            Err(e) if e.depth() == 1 && is_not_found(&e) => {
                tracing::debug!(path = ?e.path(), "skipping dangling link");
                continue;
            }
            Err(source) => {
                return Err(Error::Walk {
                    path: dir.to_path_buf(),
                    source,
                })
            }
        };

        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        } else {
            tracing::debug!(path = %entry.path().display(), "skipping non-directory entry");
        }
    }

    Ok(dirs)
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .is_some_and(|e| e.kind() == ErrorKind::NotFound)
}
