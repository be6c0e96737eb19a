use std::path::{Path, PathBuf};

/// Layout of a docset bundle, rooted at `<outpath>/<name>.docset`.
///
/// ```text
/// <name>.docset/
///   Contents/
///     info.plist
///     Resources/
///       docSet.dsidx
///       Documents/
///   icon.png
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsetPaths {
    pub root: PathBuf,
    pub documents: PathBuf,
    pub index: PathBuf,
    pub info_plist: PathBuf,
    pub icon: PathBuf,
}

impl DocsetPaths {
    pub fn new(outpath: &Path, name: &str) -> Self {
        let root = outpath.join(format!("{name}.docset"));
        let contents = root.join("Contents");
        let resources = contents.join("Resources");
        Self {
            documents: resources.join("Documents"),
            index: resources.join("docSet.dsidx"),
            info_plist: contents.join("info.plist"),
            icon: root.join("icon.png"),
            root,
        }
    }
}
