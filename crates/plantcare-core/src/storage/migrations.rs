//! Database schema migrations for the garden store.
//!
//! Migrations are versioned and applied automatically when opening the database.
//! The `schema_version` table tracks the current migration version.

use rusqlite::{Connection, Result as SqliteResult};

/// Current schema version.
///
/// Increment this when adding new migrations.
pub const SCHEMA_VERSION: i32 = 2;

/// Apply all pending migrations to bring the database to the current schema version.
///
/// # Errors
/// Returns an error if migration fails.
pub fn migrate(conn: &Connection) -> SqliteResult<()> {
    create_schema_version_table(conn)?;

    let current_version = get_schema_version(conn);

    if current_version < 1 {
        migrate_v1(conn)?;
    }
    if current_version < 2 {
        migrate_v2(conn)?;
    }
    if current_version < SCHEMA_VERSION {
        tracing::info!(from = current_version, to = SCHEMA_VERSION, "migrated garden database");
    }

    Ok(())
}

fn create_schema_version_table(conn: &Connection) -> SqliteResult<()> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY
        );",
    )
}

/// Get the current schema version from the database.
///
/// Returns 0 if no version is set (initial database).
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT version FROM schema_version", [], |row| {
        row.get::<_, i32>(0)
    })
    .unwrap_or_else(|e| {
        if !matches!(e, rusqlite::Error::QueryReturnedNoRows) {
            tracing::warn!(error = %e, "failed to read schema_version");
        }
        0
    })
}

fn set_schema_version(conn: &Connection, version: i32) -> SqliteResult<()> {
    conn.execute("DELETE FROM schema_version", [])?;
    conn.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
    Ok(())
}

/// Migration v1: apartments, rooms, plants and the care log.
///
/// Rooms cascade from apartments and plants cascade from rooms. A plant
/// without a room is allowed.
fn migrate_v1(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        "CREATE TABLE IF NOT EXISTS apartments (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            address     TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS rooms (
            id               TEXT PRIMARY KEY,
            apartment_id     TEXT NOT NULL REFERENCES apartments(id) ON DELETE CASCADE,
            name             TEXT NOT NULL,
            light_level      TEXT NOT NULL,
            window_direction TEXT NOT NULL DEFAULT 'none',
            notes            TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS plants (
            id                          TEXT PRIMARY KEY,
            species_id                  TEXT NOT NULL,
            room_id                     TEXT REFERENCES rooms(id) ON DELETE CASCADE,
            nickname                    TEXT NOT NULL DEFAULT '',
            last_watered                TEXT,
            last_fertilized             TEXT,
            last_repotted               TEXT,
            water_frequency_override    INTEGER,
            fertilize_frequency_override INTEGER,
            notes                       TEXT NOT NULL DEFAULT '',
            health_status               TEXT NOT NULL DEFAULT 'good',
            created_at                  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS care_events (
            id           TEXT PRIMARY KEY,
            plant_id     TEXT NOT NULL REFERENCES plants(id) ON DELETE CASCADE,
            action       TEXT NOT NULL,
            performed_at TEXT NOT NULL,
            notes        TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_rooms_apartment ON rooms(apartment_id);
        CREATE INDEX IF NOT EXISTS idx_plants_room ON plants(room_id);
        CREATE INDEX IF NOT EXISTS idx_care_events_plant ON care_events(plant_id, performed_at);",
    )?;

    set_schema_version(&tx, 1)?;
    tx.commit()?;
    Ok(())
}

/// Migration v2: vacation plans.
///
/// Helpers and tasks are stored as JSON arrays; they are always read and
/// written with their plan.
fn migrate_v2(conn: &Connection) -> SqliteResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        "CREATE TABLE IF NOT EXISTS vacation_plans (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            start_date  TEXT NOT NULL,
            end_date    TEXT NOT NULL,
            notes       TEXT NOT NULL DEFAULT '',
            created_at  TEXT NOT NULL,
            helpers     TEXT NOT NULL DEFAULT '[]',
            tasks       TEXT NOT NULL DEFAULT '[]'
        );

        CREATE INDEX IF NOT EXISTS idx_vacation_plans_start ON vacation_plans(start_date);",
    )?;

    set_schema_version(&tx, 2)?;
    tx.commit()?;
    Ok(())
}
