use rusqlite::Connection;

use crate::error::Result;

/// Table and unique index read by Dash and Zeal.
const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS searchIndex(
        id INTEGER PRIMARY KEY,
        name TEXT,
        type TEXT,
        path TEXT
    );
    CREATE UNIQUE INDEX IF NOT EXISTS anchor ON searchIndex (name, type, path);
";

/// Rows that already exist are left alone.
pub(super) const INSERT_ENTRY: &str =
    "INSERT OR IGNORE INTO searchIndex(name, type, path) VALUES (?, ?, ?)";

pub fn create_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn object_count(conn: &Connection, kind: &str, name: &str) -> i32 {
        conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = ? AND name = ?",
            [kind, name],
            |row| row.get(0),
        )
        .unwrap()
    }

    #[test]
    fn test_schema_on_fresh_db() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();

        assert_eq!(object_count(&conn, "table", "searchIndex"), 1);
        assert_eq!(object_count(&conn, "index", "anchor"), 1);
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();
        create_schema(&conn).unwrap(); // Should not fail

        assert_eq!(object_count(&conn, "table", "searchIndex"), 1);
    }

    #[test]
    fn test_insert_ignores_duplicates() {
        let conn = Connection::open_in_memory().unwrap();
        create_schema(&conn).unwrap();

        let first = conn
            .execute(INSERT_ENTRY, ["Foo", "Section", "dev/api/foo.html"])
            .unwrap();
        let second = conn
            .execute(INSERT_ENTRY, ["Foo", "Section", "dev/api/foo.html"])
            .unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 0);
    }
}
