//! SQLite-backed garden store.
//!
//! Provides persistent storage for:
//! - Apartments and rooms (deleting either cascades to what it contains)
//! - Plants and their append-only care log
//! - Vacation plans with their helpers and tasks

use std::path::Path;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{data_dir, migrations};
use crate::care;
use crate::date::{format_day, Timestamp};
use crate::error::{CoreError, DatabaseError, Result};
use crate::garden::Garden;
use crate::home::{Apartment, Room};
use crate::plant::{CareAction, CareEvent, Plant};
use crate::species::{LightLevel, SpeciesTable};
use crate::vacation::VacationPlan;

type BoxedError = Box<dyn std::error::Error + Send + Sync>;

fn conversion_error(idx: usize, err: impl Into<BoxedError>) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, err.into())
}

fn parse_datetime(idx: usize, raw: &str) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| conversion_error(idx, e))
}

/// Care timestamps keep the offset they were recorded with.
fn parse_timestamp(idx: usize, raw: &str) -> rusqlite::Result<Timestamp> {
    DateTime::parse_from_rfc3339(raw).map_err(|e| conversion_error(idx, e))
}

fn parse_optional_timestamp(idx: usize, raw: Option<String>) -> rusqlite::Result<Option<Timestamp>> {
    raw.map(|s| parse_timestamp(idx, &s)).transpose()
}

fn parse_date(idx: usize, raw: &str) -> rusqlite::Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|e| conversion_error(idx, e))
}

fn parse_enum<T: FromStr<Err = String>>(idx: usize, raw: &str) -> rusqlite::Result<T> {
    raw.parse::<T>().map_err(|e| conversion_error(idx, e))
}

fn parse_light_level(idx: usize, raw: &str) -> rusqlite::Result<LightLevel> {
    LightLevel::parse(raw).ok_or_else(|| conversion_error(idx, format!("unknown light level: {raw}")))
}

fn parse_json<T: serde::de::DeserializeOwned>(idx: usize, raw: &str) -> rusqlite::Result<T> {
    serde_json::from_str(raw).map_err(|e| conversion_error(idx, e))
}

const PLANT_COLUMNS: &str = "id, species_id, room_id, nickname, last_watered, last_fertilized,
    last_repotted, water_frequency_override, fertilize_frequency_override, notes,
    health_status, created_at";

fn row_to_plant(row: &Row) -> rusqlite::Result<Plant> {
    Ok(Plant {
        id: row.get(0)?,
        species_id: row.get(1)?,
        room_id: row.get(2)?,
        nickname: row.get(3)?,
        last_watered: parse_optional_timestamp(4, row.get(4)?)?,
        last_fertilized: parse_optional_timestamp(5, row.get(5)?)?,
        last_repotted: parse_optional_timestamp(6, row.get(6)?)?,
        water_frequency_override: row.get(7)?,
        fertilize_frequency_override: row.get(8)?,
        notes: row.get(9)?,
        health_status: parse_enum(10, &row.get::<_, String>(10)?)?,
        created_at: parse_timestamp(11, &row.get::<_, String>(11)?)?,
    })
}

fn row_to_room(row: &Row) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        apartment_id: row.get(1)?,
        name: row.get(2)?,
        light_level: parse_light_level(3, &row.get::<_, String>(3)?)?,
        window_direction: parse_enum(4, &row.get::<_, String>(4)?)?,
        notes: row.get(5)?,
    })
}

fn row_to_event(row: &Row) -> rusqlite::Result<CareEvent> {
    Ok(CareEvent {
        id: row.get(0)?,
        plant_id: row.get(1)?,
        action: parse_enum::<CareAction>(2, &row.get::<_, String>(2)?)?,
        performed_at: parse_timestamp(3, &row.get::<_, String>(3)?)?,
        notes: row.get(4)?,
    })
}

fn row_to_plan(row: &Row) -> rusqlite::Result<VacationPlan> {
    Ok(VacationPlan {
        id: row.get(0)?,
        name: row.get(1)?,
        start_date: parse_date(2, &row.get::<_, String>(2)?)?,
        end_date: parse_date(3, &row.get::<_, String>(3)?)?,
        notes: row.get(4)?,
        created_at: parse_datetime(5, &row.get::<_, String>(5)?)?,
        helpers: parse_json(6, &row.get::<_, String>(6)?)?,
        tasks: parse_json(7, &row.get::<_, String>(7)?)?,
    })
}

/// Write every plant column; `?1` is always the id so the same binding
/// serves both INSERT and UPDATE ... WHERE id = ?1.
fn execute_plant(conn: &Connection, sql: &str, plant: &Plant) -> rusqlite::Result<usize> {
    conn.execute(
        sql,
        params![
            plant.id,
            plant.species_id,
            plant.room_id,
            plant.nickname,
            plant.last_watered.map(|d| d.to_rfc3339()),
            plant.last_fertilized.map(|d| d.to_rfc3339()),
            plant.last_repotted.map(|d| d.to_rfc3339()),
            plant.water_frequency_override,
            plant.fertilize_frequency_override,
            plant.notes,
            plant.health_status.as_str(),
            plant.created_at.to_rfc3339(),
        ],
    )
}

const UPDATE_PLANT: &str = "UPDATE plants SET species_id = ?2, room_id = ?3, nickname = ?4,
    last_watered = ?5, last_fertilized = ?6, last_repotted = ?7,
    water_frequency_override = ?8, fertilize_frequency_override = ?9, notes = ?10,
    health_status = ?11, created_at = ?12
    WHERE id = ?1";

/// The plant column a care action stamps, if it has a cadence.
fn last_performed_column(action: CareAction) -> Option<&'static str> {
    match action {
        CareAction::Water => Some("last_watered"),
        CareAction::Fertilize => Some("last_fertilized"),
        CareAction::Repot => Some("last_repotted"),
        CareAction::Prune | CareAction::Mist | CareAction::Rotate => None,
    }
}

/// SQLite database holding the whole garden.
pub struct GardenDb {
    conn: Connection,
}

impl GardenDb {
    /// Get a reference to the underlying SQLite connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Open the database at `~/.config/plantcare/plantcare.db`.
    ///
    /// Creates the database file and schema if they don't exist.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or migrated.
    pub fn open() -> Result<Self> {
        Self::open_at(&data_dir()?.join("plantcare.db"))
    }

    /// Open (or create) the database at `path`.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|source| DatabaseError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Self::init(conn)
    }

    /// Open an in-memory database.
    pub fn open_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        migrations::migrate(&conn).map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
        Ok(Self { conn })
    }

    // === Apartments ===

    pub fn insert_apartment(&self, apartment: &Apartment) -> Result<()> {
        self.conn.execute(
            "INSERT INTO apartments (id, name, address, created_at) VALUES (?1, ?2, ?3, ?4)",
            params![
                apartment.id,
                apartment.name,
                apartment.address,
                apartment.created_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    pub fn list_apartments(&self) -> Result<Vec<Apartment>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, address, created_at FROM apartments ORDER BY created_at, id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Apartment {
                id: row.get(0)?,
                name: row.get(1)?,
                address: row.get(2)?,
                created_at: parse_datetime(3, &row.get::<_, String>(3)?)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Delete an apartment with its rooms and their plants.
    ///
    /// Returns `false` if no such apartment existed.
    pub fn delete_apartment(&self, id: &str) -> Result<bool> {
        let n = self.conn.execute("DELETE FROM apartments WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }

    // === Rooms ===

    pub fn insert_room(&self, room: &Room) -> Result<()> {
        self.conn.execute(
            "INSERT INTO rooms (id, apartment_id, name, light_level, window_direction, notes)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                room.id,
                room.apartment_id,
                room.name,
                room.light_level.as_str(),
                room.window_direction.as_str(),
                room.notes,
            ],
        )?;
        Ok(())
    }

    /// Rooms, optionally limited to one apartment.
    pub fn list_rooms(&self, apartment_id: Option<&str>) -> Result<Vec<Room>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, apartment_id, name, light_level, window_direction, notes
             FROM rooms
             WHERE ?1 IS NULL OR apartment_id = ?1
             ORDER BY name, id",
        )?;
        let rows = stmt.query_map(params![apartment_id], row_to_room)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Delete a room and the plants in it.
    pub fn delete_room(&self, id: &str) -> Result<bool> {
        let n = self.conn.execute("DELETE FROM rooms WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }

    // === Plants ===

    pub fn insert_plant(&self, plant: &Plant) -> Result<()> {
        let sql = format!(
            "INSERT INTO plants ({PLANT_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)"
        );
        execute_plant(&self.conn, &sql, plant)?;
        Ok(())
    }

    pub fn get_plant(&self, id: &str) -> Result<Option<Plant>> {
        let plant = self
            .conn
            .query_row(
                &format!("SELECT {PLANT_COLUMNS} FROM plants WHERE id = ?1"),
                params![id],
                row_to_plant,
            )
            .optional()?;
        Ok(plant)
    }

    pub fn list_plants(&self) -> Result<Vec<Plant>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {PLANT_COLUMNS} FROM plants ORDER BY created_at, id"))?;
        let rows = stmt.query_map([], row_to_plant)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Replace a stored plant.
    ///
    /// # Errors
    /// Returns [`CoreError::PlantNotFound`] if the plant does not exist.
    pub fn update_plant(&self, plant: &Plant) -> Result<()> {
        if execute_plant(&self.conn, UPDATE_PLANT, plant)? == 0 {
            return Err(CoreError::PlantNotFound(plant.id.clone()));
        }
        Ok(())
    }

    /// Delete a plant and its care log.
    pub fn delete_plant(&self, id: &str) -> Result<bool> {
        let n = self.conn.execute("DELETE FROM plants WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }

    // === Care log ===

    /// Log care for a stored plant.
    ///
    /// The plant is read, the event inserted and the matching `last_*`
    /// column stamped under one write lock. Only that column is written,
    /// so edits made to other fields by another connection are kept.
    ///
    /// # Errors
    /// Returns [`CoreError::PlantNotFound`] if the plant does not exist, or
    /// [`DatabaseError::Locked`] if another connection holds the write lock.
    pub fn record_event(
        &self,
        plant_id: &str,
        action: CareAction,
        performed_at: Timestamp,
        notes: &str,
    ) -> Result<(CareEvent, Plant)> {
        self.conn.execute_batch("BEGIN IMMEDIATE TRANSACTION;")?;
        let result = self
            .record_event_locked(plant_id, action, performed_at, notes)
            .and_then(|recorded| {
                self.conn.execute_batch("COMMIT;")?;
                Ok(recorded)
            });
        match result {
            Ok(recorded) => {
                tracing::info!(plant_id, action = %action, "stored care event");
                Ok(recorded)
            }
            Err(err) => {
                if let Err(rollback) = self.conn.execute_batch("ROLLBACK;") {
                    tracing::warn!(error = %rollback, "rollback after failed care event");
                }
                Err(err)
            }
        }
    }

    fn record_event_locked(
        &self,
        plant_id: &str,
        action: CareAction,
        performed_at: Timestamp,
        notes: &str,
    ) -> Result<(CareEvent, Plant)> {
        let plant = self
            .get_plant(plant_id)?
            .ok_or_else(|| CoreError::PlantNotFound(plant_id.to_string()))?;
        let (event, updated) = care::record_event(&plant, action, performed_at, notes);

        self.conn.execute(
            "INSERT INTO care_events (id, plant_id, action, performed_at, notes)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                event.id,
                event.plant_id,
                event.action.as_str(),
                event.performed_at.to_rfc3339(),
                event.notes,
            ],
        )?;
        if let Some(column) = last_performed_column(action) {
            self.conn.execute(
                &format!("UPDATE plants SET {column} = ?2 WHERE id = ?1"),
                params![plant_id, performed_at.to_rfc3339()],
            )?;
        }
        Ok((event, updated))
    }

    /// Care events, oldest first, optionally for one plant.
    pub fn list_events(&self, plant_id: Option<&str>) -> Result<Vec<CareEvent>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, plant_id, action, performed_at, notes
             FROM care_events
             WHERE ?1 IS NULL OR plant_id = ?1",
        )?;
        let rows = stmt.query_map(params![plant_id], row_to_event)?;
        let mut events = rows.collect::<rusqlite::Result<Vec<_>>>()?;
        // Stored text carries mixed offsets, so order by instant here.
        events.sort_by(|a, b| a.performed_at.cmp(&b.performed_at).then_with(|| a.id.cmp(&b.id)));
        Ok(events)
    }

    // === Vacation plans ===

    /// Insert or replace a plan together with its helpers and tasks.
    pub fn save_plan(&self, plan: &VacationPlan) -> Result<()> {
        self.conn.execute(
            "INSERT INTO vacation_plans (id, name, start_date, end_date, notes, created_at, helpers, tasks)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                start_date = excluded.start_date,
                end_date = excluded.end_date,
                notes = excluded.notes,
                helpers = excluded.helpers,
                tasks = excluded.tasks",
            params![
                plan.id,
                plan.name,
                format_day(plan.start_date),
                format_day(plan.end_date),
                plan.notes,
                plan.created_at.to_rfc3339(),
                serde_json::to_string(&plan.helpers)?,
                serde_json::to_string(&plan.tasks)?,
            ],
        )?;
        Ok(())
    }

    pub fn get_plan(&self, id: &str) -> Result<Option<VacationPlan>> {
        let plan = self
            .conn
            .query_row(
                "SELECT id, name, start_date, end_date, notes, created_at, helpers, tasks
                 FROM vacation_plans WHERE id = ?1",
                params![id],
                row_to_plan,
            )
            .optional()?;
        Ok(plan)
    }

    /// Like [`get_plan`](Self::get_plan) but a missing plan is an error.
    pub fn require_plan(&self, id: &str) -> Result<VacationPlan> {
        self.get_plan(id)?.ok_or_else(|| CoreError::NotFound {
            kind: "Vacation plan",
            id: id.to_string(),
        })
    }

    pub fn list_plans(&self) -> Result<Vec<VacationPlan>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, start_date, end_date, notes, created_at, helpers, tasks
             FROM vacation_plans ORDER BY start_date, id",
        )?;
        let rows = stmt.query_map([], row_to_plan)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn delete_plan(&self, id: &str) -> Result<bool> {
        let n = self.conn.execute("DELETE FROM vacation_plans WHERE id = ?1", params![id])?;
        Ok(n > 0)
    }

    /// Snapshot everything into an in-memory [`Garden`].
    pub fn load_garden(&self, species: SpeciesTable) -> Result<Garden> {
        Ok(Garden::from_parts(
            species,
            self.list_apartments()?,
            self.list_rooms(None)?,
            self.list_plants()?,
            self.list_events(None)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::{parse_day, parse_timestamp};
    use crate::home::WindowDirection;
    use crate::plant::HealthStatus;
    use std::time::Duration;

    fn apartment(id: &str) -> Apartment {
        Apartment {
            id: id.to_string(),
            name: "Flat".to_string(),
            address: String::new(),
            created_at: parse_timestamp("2024-01-01T00:00:00Z").unwrap().with_timezone(&Utc),
        }
    }

    fn room(id: &str, apartment_id: &str) -> Room {
        Room {
            id: id.to_string(),
            apartment_id: apartment_id.to_string(),
            name: "Living room".to_string(),
            light_level: LightLevel::Bright,
            window_direction: WindowDirection::South,
            notes: String::new(),
        }
    }

    fn plant(id: &str, room_id: Option<&str>) -> Plant {
        let mut p = Plant::new(id, "monstera-deliciosa", parse_timestamp("2024-05-01T10:00:00Z").unwrap());
        p.room_id = room_id.map(str::to_string);
        p
    }

    #[test]
    fn plant_round_trip() {
        let db = GardenDb::open_memory().unwrap();
        let mut p = plant("p1", None);
        p.nickname = "Monty".into();
        p.water_frequency_override = Some(5);
        p.health_status = HealthStatus::Thriving;
        p.last_watered = Some(parse_timestamp("2024-05-03T08:00:00Z").unwrap());
        db.insert_plant(&p).unwrap();

        assert_eq!(db.get_plant("p1").unwrap(), Some(p.clone()));
        assert_eq!(db.get_plant("nope").unwrap(), None);

        p.notes = "moved to window".into();
        db.update_plant(&p).unwrap();
        assert_eq!(db.list_plants().unwrap(), vec![p]);
    }

    #[test]
    fn update_missing_plant_fails() {
        let db = GardenDb::open_memory().unwrap();
        let err = db.update_plant(&plant("ghost", None)).unwrap_err();
        assert!(matches!(err, CoreError::PlantNotFound(id) if id == "ghost"));
    }

    #[test]
    fn deleting_apartment_cascades_to_rooms_and_plants() {
        let db = GardenDb::open_memory().unwrap();
        db.insert_apartment(&apartment("a1")).unwrap();
        db.insert_room(&room("r1", "a1")).unwrap();
        db.insert_plant(&plant("p1", Some("r1"))).unwrap();
        db.insert_plant(&plant("p2", None)).unwrap();
        db.record_event("p1", CareAction::Water, Utc::now().fixed_offset(), "").unwrap();

        assert!(db.delete_apartment("a1").unwrap());
        assert!(db.list_rooms(None).unwrap().is_empty());
        let ids: Vec<_> = db.list_plants().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["p2"]);
        assert!(db.list_events(None).unwrap().is_empty());
        assert!(!db.delete_apartment("a1").unwrap());
    }

    #[test]
    fn plant_in_unknown_room_is_rejected() {
        let db = GardenDb::open_memory().unwrap();
        assert!(db.insert_plant(&plant("p1", Some("no-room"))).is_err());
    }

    #[test]
    fn record_event_updates_plant_in_same_transaction() {
        let db = GardenDb::open_memory().unwrap();
        db.insert_plant(&plant("p1", None)).unwrap();
        let at = parse_timestamp("2024-06-01T09:00:00Z").unwrap();
        let (event, updated) = db.record_event("p1", CareAction::Fertilize, at, "half dose").unwrap();

        assert_eq!(updated.last_fertilized, Some(at));
        assert_eq!(db.get_plant("p1").unwrap().unwrap().last_fertilized, Some(at));
        assert_eq!(db.list_events(Some("p1")).unwrap(), vec![event]);

        let err = db.record_event("nope", CareAction::Water, at, "").unwrap_err();
        assert!(matches!(err, CoreError::PlantNotFound(_)));
        assert_eq!(db.list_events(None).unwrap().len(), 1);
    }

    #[test]
    fn record_event_keeps_fields_edited_by_another_connection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.db");
        let cli = GardenDb::open_at(&path).unwrap();
        let app = GardenDb::open_at(&path).unwrap();
        cli.insert_plant(&plant("p1", None)).unwrap();

        let mut edited = app.get_plant("p1").unwrap().unwrap();
        edited.water_frequency_override = Some(3);
        edited.nickname = "Monty".into();
        app.update_plant(&edited).unwrap();

        let at = parse_timestamp("2024-06-01T09:00:00Z").unwrap();
        let (_, updated) = cli.record_event("p1", CareAction::Water, at, "").unwrap();
        assert_eq!(updated.water_frequency_override, Some(3));

        let stored = app.get_plant("p1").unwrap().unwrap();
        assert_eq!(stored.water_frequency_override, Some(3));
        assert_eq!(stored.nickname, "Monty");
        assert_eq!(stored.last_watered, Some(at));
    }

    #[test]
    fn record_event_reads_plant_under_write_lock() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.db");
        let cli = GardenDb::open_at(&path).unwrap();
        let app = GardenDb::open_at(&path).unwrap();
        cli.insert_plant(&plant("p1", None)).unwrap();
        cli.conn().busy_timeout(Duration::ZERO).unwrap();

        app.conn()
            .execute_batch(
                "BEGIN IMMEDIATE TRANSACTION;
                 UPDATE plants SET water_frequency_override = 3 WHERE id = 'p1';",
            )
            .unwrap();
        let at = parse_timestamp("2024-06-01T09:00:00Z").unwrap();
        let err = cli.record_event("p1", CareAction::Water, at, "").unwrap_err();
        assert!(matches!(err, CoreError::Database(DatabaseError::Locked)));
        app.conn().execute_batch("COMMIT;").unwrap();
        assert!(cli.list_events(None).unwrap().is_empty());

        let (_, updated) = cli.record_event("p1", CareAction::Water, at, "").unwrap();
        assert_eq!(updated.water_frequency_override, Some(3));
        assert_eq!(updated.last_watered, Some(at));
        assert_eq!(app.get_plant("p1").unwrap().unwrap(), updated);
    }

    #[test]
    fn non_cadence_event_leaves_plant_row_alone() {
        let db = GardenDb::open_memory().unwrap();
        let p = plant("p1", None);
        db.insert_plant(&p).unwrap();
        let at = parse_timestamp("2024-06-01T09:00:00Z").unwrap();
        let (event, updated) = db.record_event("p1", CareAction::Mist, at, "").unwrap();
        assert_eq!(updated, p);
        assert_eq!(db.get_plant("p1").unwrap(), Some(p));
        assert_eq!(db.list_events(Some("p1")).unwrap(), vec![event]);
    }

    #[test]
    fn stored_timestamps_keep_their_offset() {
        let db = GardenDb::open_memory().unwrap();
        db.insert_plant(&plant("p1", None)).unwrap();
        let late = parse_timestamp("2024-06-01T23:30:00-05:00").unwrap();
        db.record_event("p1", CareAction::Water, late, "").unwrap();
        let early = parse_timestamp("2024-06-02T01:00:00+09:00").unwrap();
        db.record_event("p1", CareAction::Mist, early, "").unwrap();

        let stored = db.get_plant("p1").unwrap().unwrap();
        assert_eq!(stored.last_watered.unwrap().to_rfc3339(), "2024-06-01T23:30:00-05:00");

        // 01:00+09:00 on June 2nd is 16:00 UTC on June 1st, before the watering.
        let actions: Vec<_> = db.list_events(None).unwrap().into_iter().map(|e| e.action).collect();
        assert_eq!(actions, vec![CareAction::Mist, CareAction::Water]);

        let garden = db.load_garden(SpeciesTable::builtin()).unwrap();
        let water = garden
            .reminders(parse_day("2024-06-02").unwrap())
            .into_iter()
            .find(|r| r.action == crate::plant::ScheduledCare::Water)
            .unwrap();
        assert_eq!(water.due_date, parse_day("2024-06-08").unwrap());
    }

    #[test]
    fn corrupt_timestamp_is_a_query_error() {
        let db = GardenDb::open_memory().unwrap();
        db.insert_plant(&plant("p1", None)).unwrap();
        db.conn()
            .execute("UPDATE plants SET last_watered = 'yesterday' WHERE id = 'p1'", [])
            .unwrap();
        assert!(matches!(db.get_plant("p1"), Err(CoreError::Database(_))));
    }

    #[test]
    fn plan_round_trip_and_update() {
        let db = GardenDb::open_memory().unwrap();
        let mut plan = VacationPlan::create(
            "Trip",
            parse_day("2024-07-01").unwrap(),
            parse_day("2024-07-10").unwrap(),
            "",
            parse_timestamp("2024-06-20T12:00:00Z").unwrap().with_timezone(&Utc),
            vec![],
        )
        .unwrap();
        db.save_plan(&plan).unwrap();
        plan.add_helper("Ana", "ana@example.com", Utc::now()).unwrap();
        db.save_plan(&plan).unwrap();

        let loaded = db.require_plan(&plan.id).unwrap();
        assert_eq!(loaded.helpers.len(), 1);
        assert_eq!(db.list_plans().unwrap().len(), 1);
        assert!(db.delete_plan(&plan.id).unwrap());
        assert!(matches!(db.require_plan(&plan.id), Err(CoreError::NotFound { .. })));
    }

    #[test]
    fn reopening_file_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garden.db");
        {
            let db = GardenDb::open_at(&path).unwrap();
            db.insert_plant(&plant("p1", None)).unwrap();
        }
        let db = GardenDb::open_at(&path).unwrap();
        let garden = db.load_garden(SpeciesTable::builtin()).unwrap();
        assert_eq!(garden.plants().len(), 1);
        assert_eq!(garden.plant_name("p1"), "Swiss Cheese Plant");
    }
}
