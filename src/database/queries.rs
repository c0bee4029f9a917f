use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::models::WorkoutEntry;

const ENTRIES_KEY: &str = "workoutEntries";

/// Reads the full entry sequence. `None` means the key was never written;
/// a present but malformed value is an error the caller treats as fatal.
pub fn load_entries(conn: &Connection) -> Result<Option<Vec<WorkoutEntry>>> {
    let result: Result<String, rusqlite::Error> = conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        [ENTRIES_KEY],
        |row| row.get(0),
    );

    match result {
        Ok(json) => {
            let entries: Vec<WorkoutEntry> = serde_json::from_str(&json)
                .with_context(|| format!("malformed value under key '{}'", ENTRIES_KEY))?;
            Ok(Some(entries))
        }
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Rewrites the full entry sequence under the store key.
pub fn save_entries(conn: &Connection, entries: &[WorkoutEntry]) -> Result<()> {
    let serialized = serde_json::to_string(entries)?;
    let now = chrono::Utc::now().timestamp();

    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET
             value = excluded.value,
             updated_at = excluded.updated_at",
        rusqlite::params![ENTRIES_KEY, serialized, now],
    )?;

    Ok(())
}

/// Startup read. An absent key seeds the sample entries and writes them back
/// immediately, so the second launch reads instead of reseeding.
pub fn load_or_seed_entries(conn: &Connection) -> Result<Vec<WorkoutEntry>> {
    if let Some(entries) = load_entries(conn)? {
        return Ok(entries);
    }

    let seeds = crate::models::entry::get_seed_entries();
    save_entries(conn, &seeds)?;
    Ok(seeds)
}
