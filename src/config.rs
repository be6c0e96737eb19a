use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::DocsetPaths;

pub const DEFAULT_DOC_BASE: &str = "./miniprogram";
pub const DEFAULT_NAME: &str = "wxapp";
pub const DEFAULT_ICON: &str = "./icon.png";
pub const DEFAULT_OUTPATH: &str = "./";

/// Subdirectory of the documentation root that is copied into the docset.
pub const SOURCE_DIR: &str = "dev";

/// Settings for one docset build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocsetConfig {
    /// Root of the downloaded documentation site.
    pub doc_base: PathBuf,
    /// Bundle identifier and name; also the stem of `<name>.docset`.
    pub name: String,
    /// Icon copied into the bundle root.
    pub icon: PathBuf,
    /// Directory the bundle is created in.
    pub outpath: PathBuf,
}

impl Default for DocsetConfig {
    fn default() -> Self {
        Self {
            doc_base: PathBuf::from(DEFAULT_DOC_BASE),
            name: DEFAULT_NAME.to_string(),
            icon: PathBuf::from(DEFAULT_ICON),
            outpath: PathBuf::from(DEFAULT_OUTPATH),
        }
    }
}

impl DocsetConfig {
    pub fn validate(&self) -> Result<()> {
        if self.doc_base.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("doc base path is empty"));
        }
        if self.name.is_empty() || self.outpath.as_os_str().is_empty() {
            return Err(Error::InvalidConfig("docset name and output path are required"));
        }
        Ok(())
    }

    pub fn paths(&self) -> DocsetPaths {
        DocsetPaths::new(&self.outpath, &self.name)
    }

    /// The `dev` tree that gets copied.
    pub fn source_dir(&self) -> PathBuf {
        self.doc_base.join(SOURCE_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = DocsetConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.paths().root, PathBuf::from("./wxapp.docset"));
        assert_eq!(config.source_dir(), PathBuf::from("./miniprogram/dev"));
    }

    #[test]
    fn test_empty_fields_are_rejected() {
        let config = DocsetConfig {
            doc_base: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = DocsetConfig {
            name: String::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));

        let config = DocsetConfig {
            outpath: PathBuf::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }
}
