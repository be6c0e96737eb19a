//! Recreates the docset skeleton and copies the documentation tree into it.

use std::fs;
use std::io;
use std::iter;
use std::path::Path;

use walkdir::WalkDir;

use crate::config::{DocsetConfig, SOURCE_DIR};
use crate::error::{Error, Result};
use crate::models::DocsetPaths;

/// Remove any previous bundle, create `Documents/` and copy `<doc_base>/dev`
/// into it. Returns the number of files copied.
pub fn stage_documents(config: &DocsetConfig, paths: &DocsetPaths) -> Result<usize> {
    remove_existing(&paths.root)?;

    fs::create_dir_all(&paths.documents)
        .map_err(|e| Error::stage("create", &paths.documents, e))?;

    let source = config.source_dir();
    if !source.is_dir() {
        return Err(Error::MissingSource(source));
    }

    let copied = copy_tree(&source, &paths.documents.join(SOURCE_DIR))?;
    tracing::info!(
        "Copied {} files from {} to {}",
        copied,
        source.display(),
        paths.documents.display()
    );
    Ok(copied)
}

fn remove_existing(root: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(root) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(Error::stage("delete", root, e)),
    };

    tracing::info!("Removing old docset {}", root.display());
    let removed = if metadata.is_dir() {
        fs::remove_dir_all(root)
    } else {
        fs::remove_file(root)
    };
    removed.map_err(|e| Error::stage("delete", root, e))
}

/// Recursively copy `src` to `dest`, following symlinks.
///
/// A dangling symlink in `src` fails the copy. `dest` must not lie inside `src`.
pub fn copy_tree(src: &Path, dest: &Path) -> Result<usize> {
    if is_within(dest, src) {
        return Err(Error::stage(
            "copy",
            dest,
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("destination is inside the source tree {}", src.display()),
            ),
        ));
    }

    let mut copied = 0;

    for entry in WalkDir::new(src).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(src).to_path_buf();
            Error::stage("read", path, e.into())
        })?;
        let Ok(relative) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dest.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|e| Error::stage("create", &target, e))?;
        } else {
            fs::copy(entry.path(), &target).map_err(|e| Error::stage("copy", entry.path(), e))?;
            copied += 1;
        }
    }

    Ok(copied)
}

/// Whether `path`, which may not exist yet, resolves to `dir` or below it.
fn is_within(path: &Path, dir: &Path) -> bool {
    let Ok(dir) = dir.canonicalize() else {
        return false;
    };
    path.ancestors()
        .chain(iter::once(Path::new(".")))
        .find_map(|p| p.canonicalize().ok())
        .is_some_and(|existing| existing.starts_with(&dir))
}
