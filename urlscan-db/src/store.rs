use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::{params, Connection};
use tracing::debug;
use urlscan_types::ScanRecord;

use crate::error::DbError;
use crate::schema;

/// Default database file, relative to the working directory.
const DEFAULT_DB_FILE: &str = "urlscan.db";

/// Persistent scan log backed by SQLite. Opened once at startup and injected
/// into the application state; SQLite's own transaction isolation covers
/// concurrent access, the application adds a mutex around the handle.
pub struct ScanStore {
    conn: Connection,
}

impl ScanStore {
    /// Open (or create) the database at the default location.
    pub fn open_default() -> Result<Self, DbError> {
        Self::open(&PathBuf::from(DEFAULT_DB_FILE))
    }

    /// Open a database at a specific path.
    pub fn open(path: &Path) -> Result<Self, DbError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    DbError::Other(format!(
                        "failed to create db directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }
        let conn = Connection::open(path)?;
        schema::initialize(&conn)?;
        debug!(path = %path.display(), "scan database opened");
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, DbError> {
        let conn = Connection::open_in_memory()?;
        schema::initialize(&conn)?;
        Ok(Self { conn })
    }

    /// Append one scan to the log. Returns the new row id.
    pub fn record_scan(
        &self,
        url: &str,
        nmap: &str,
        assetfinder: &str,
        nuclei: &str,
    ) -> Result<i64, DbError> {
        self.conn.execute(
            "INSERT INTO scan_results (url, nmap, assetfinder, nuclei, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![url, nmap, assetfinder, nuclei, now_ms() as i64],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, url, "scan recorded");
        Ok(id)
    }

    /// All persisted records, oldest first.
    pub fn list_scans(&self) -> Result<Vec<ScanRecord>, DbError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, url, nmap, assetfinder, nuclei, created_at \
             FROM scan_results ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ScanRecord {
                id: row.get(0)?,
                url: row.get(1)?,
                nmap: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                assetfinder: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
                nuclei: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
                created_at: row.get::<_, i64>(5)? as u64,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}

/// Current timestamp in milliseconds since the UNIX epoch.
fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
