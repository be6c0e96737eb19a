//! `info.plist` and icon for the docset bundle.

use std::fs;
use std::path::Path;

use plist::{Dictionary, Value};

use crate::error::{Error, Result};

/// `DocSetPlatformFamily`; Dash uses it as the default search keyword.
pub const PLATFORM_FAMILY: &str = "requests";

/// Page Dash opens when the docset is selected, relative to `Documents/`.
pub const INDEX_FILE_PATH: &str = "dev/framework/MINA.html";

/// Descriptor dictionary for a docset called `name`.
pub fn info_plist(name: &str) -> Value {
    let mut dict = Dictionary::new();
    dict.insert("CFBundleIdentifier".to_string(), name.into());
    dict.insert("CFBundleName".to_string(), name.into());
    dict.insert("DashDocSetFamily".to_string(), name.into());
    dict.insert("DocSetPlatformFamily".to_string(), PLATFORM_FAMILY.into());
    dict.insert("isDashDocset".to_string(), true.into());
    dict.insert("isJavaScriptEnabled".to_string(), true.into());
    dict.insert("dashIndexFilePath".to_string(), INDEX_FILE_PATH.into());
    Value::Dictionary(dict)
}

pub fn write_info_plist(name: &str, path: &Path) -> Result<()> {
    info_plist(name).to_file_xml(path)?;
    tracing::info!("Wrote {}", path.display());
    Ok(())
}

pub fn copy_icon(src: &Path, dest: &Path) -> Result<()> {
    fs::copy(src, dest).map_err(|source| Error::Icon {
        path: src.to_path_buf(),
        source,
    })?;
    Ok(())
}
