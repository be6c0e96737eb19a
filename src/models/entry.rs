use std::path::{Path, PathBuf};

/// An HTML page whose navigation is scanned for sections.
///
/// `base_path` is relative to the `Documents` directory and is prefixed to
/// every link found on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    pub base_path: &'static str,
    pub file: &'static str,
}

/// Pages indexed on every build.
pub const ENTRIES: &[Entry] = &[
    Entry::new("dev/api", "index.html"),
    Entry::new("dev/component", "index.html"),
    Entry::new("dev/framework", "MINA.html"),
];

impl Entry {
    pub const fn new(base_path: &'static str, file: &'static str) -> Self {
        Self { base_path, file }
    }

    /// Location of the page inside the copied documents tree.
    pub fn page_path(&self, documents: &Path) -> PathBuf {
        documents.join(self.base_path).join(self.file)
    }
}

/// A section found in an entry page's navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Trimmed anchor text.
    pub name: String,
    /// Link target joined onto the entry's base path.
    pub path: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_path_joins_base_and_file() {
        let entry = Entry::new("dev/framework", "MINA.html");
        assert_eq!(
            entry.page_path(Path::new("/tmp/Documents")),
            PathBuf::from("/tmp/Documents/dev/framework/MINA.html")
        );
    }

    #[test]
    fn test_entries_are_under_dev() {
        assert_eq!(ENTRIES.len(), 3);
        assert!(ENTRIES.iter().all(|e| e.base_path.starts_with("dev/")));
    }
}
