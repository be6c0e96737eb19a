mod schema;

use std::path::Path;

use rusqlite::{params, Connection, Statement};

use crate::error::Result;
use crate::models::*;
use crate::nav::NavPage;

/// The docset's `docSet.dsidx` search index.
pub struct Index {
    conn: Connection,
}

/// Outcome of indexing one entry page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageReport {
    pub entry: Entry,
    /// Sections the extractor yielded.
    pub found: usize,
    /// Rows actually written.
    pub inserted: usize,
    /// Duplicates and failed inserts.
    pub skipped: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexReport {
    pub pages: Vec<PageReport>,
}

impl IndexReport {
    pub fn inserted(&self) -> usize {
        self.pages.iter().map(|p| p.inserted).sum()
    }

    pub fn skipped(&self) -> usize {
        self.pages.iter().map(|p| p.skipped).sum()
    }
}

impl Index {
    /// Open the store at `path`, creating the file if needed.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn migrate(&self) -> Result<()> {
        schema::create_schema(&self.conn)
    }

    /// Index the navigation of every entry page below `documents`.
    ///
    /// All pages share one transaction. A page that can't be read aborts the
    /// build and nothing is committed. A failed insert is logged and skipped.
    pub fn build(&mut self, documents: &Path, entries: &[Entry]) -> Result<IndexReport> {
        let tx = self.conn.transaction()?;
        let mut report = IndexReport::default();

        {
            let mut stmt = tx.prepare(schema::INSERT_ENTRY)?;
            for entry in entries {
                let page_path = entry.page_path(documents);
                tracing::info!("find for {}", page_path.display());

                let page = NavPage::load(&page_path)?;
                let page_report = insert_page(&mut stmt, entry, &page);
                tracing::info!(
                    "Indexed {}/{}: {} sections, {} inserted, {} skipped",
                    entry.base_path,
                    entry.file,
                    page_report.found,
                    page_report.inserted,
                    page_report.skipped
                );
                report.pages.push(page_report);
            }
        }

        tx.commit()?;
        Ok(report)
    }

    // ============================================================
    // Queries
    // ============================================================

    pub fn rows(&self) -> Result<Vec<IndexRow>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, type, path FROM searchIndex ORDER BY id")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(IndexRow {
                    name: row.get(0)?,
                    kind: row.get(1)?,
                    path: row.get(2)?,
                })
            })?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM searchIndex", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn insert_page(stmt: &mut Statement<'_>, entry: &Entry, page: &NavPage) -> PageReport {
    let mut report = PageReport {
        entry: *entry,
        found: 0,
        inserted: 0,
        skipped: 0,
    };

    let kind = EntryType::Section;
    for nav in page.entries(entry.base_path) {
        report.found += 1;
        match stmt.execute(params![nav.name, kind, nav.path]) {
            Ok(0) => {
                tracing::debug!("Duplicate {} {} -> {}", kind, nav.name, nav.path);
                report.skipped += 1;
            }
            Ok(_) => report.inserted += 1,
            Err(e) => {
                tracing::warn!("Failed to index {} {} -> {}: {}", kind, nav.name, nav.path, e);
                report.skipped += 1;
            }
        }
    }

    report
}
