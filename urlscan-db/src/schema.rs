use crate::error::DbError;

const SCHEMA_SQL: &str = r#"
-- Append-only scan log (one row per completed orchestration)
CREATE TABLE IF NOT EXISTS scan_results (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    url         TEXT NOT NULL,
    nmap        TEXT,
    assetfinder TEXT,
    nuclei      TEXT,
    created_at  INTEGER NOT NULL
);
"#;

pub fn initialize(conn: &rusqlite::Connection) -> Result<(), DbError> {
    // WAL before DDL for crash safety.
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}
