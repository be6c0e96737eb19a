use crate::config::DocsetConfig;
use crate::db::{Index, IndexReport};
use crate::error::Result;
use crate::models::{DocsetPaths, ENTRIES};
use crate::{info, stage};

/// Summary of a finished build.
#[derive(Debug, Clone)]
pub struct BuildReport {
    pub paths: DocsetPaths,
    pub files_copied: usize,
    pub index: IndexReport,
}

/// Build `<outpath>/<name>.docset` from scratch.
///
/// The steps run in order and the first failure aborts the build, leaving
/// whatever was already written in place.
pub fn build(config: &DocsetConfig) -> Result<BuildReport> {
    config.validate()?;
    let paths = config.paths();

    let files_copied = stage::stage_documents(config, &paths)?;

    let mut index = Index::open(&paths.index)?;
    index.migrate()?;
    let report = index.build(&paths.documents, ENTRIES)?;

    info::write_info_plist(&config.name, &paths.info_plist)?;
    info::copy_icon(&config.icon, &paths.icon)?;

    Ok(BuildReport {
        paths,
        files_copied,
        index: report,
    })
}
