use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal docset build errors.
///
/// Every variant aborts the build. The caller reports it and exits.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),

    #[error("Documentation source not found: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Failed to {action} {}", path.display())]
    Stage {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Index store error")]
    Index(#[from] rusqlite::Error),

    #[error("Can't read entry page {}", path.display())]
    EntryPage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Can't write info.plist")]
    InfoPlist(#[from] plist::Error),

    #[error("Icon copy error: {}", path.display())]
    Icon {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn stage(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Stage {
            action,
            path: path.into(),
            source,
        }
    }
}
