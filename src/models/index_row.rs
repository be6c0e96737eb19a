use std::fmt;

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

/// Value of the `type` column in `searchIndex`.
///
/// Only sections are indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryType {
    Section,
}

impl EntryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryType::Section => "Section",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for EntryType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for EntryType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value.as_str()? {
            "Section" => Ok(EntryType::Section),
            other => Err(FromSqlError::Other(
                format!("unknown entry type: {other}").into(),
            )),
        }
    }
}

/// A row of the `searchIndex` table.
///
/// `(name, kind, path)` is unique; inserting a duplicate is a no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub name: String,
    pub kind: EntryType,
    pub path: String,
}

impl IndexRow {
    pub fn section(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryType::Section,
            path: path.into(),
        }
    }
}
