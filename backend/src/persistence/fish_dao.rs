//! # Fish Data Access
//!
//! `FishDao` is the only code that reads or writes the `FISH` table.
//!
//! ## Connection handling
//!
//! Every public method opens its own `rusqlite::Connection` from the
//! configured path, prepares one statement, runs it and returns. The
//! statement and connection are locals, so they are dropped (and the
//! database handle closed) on every exit path, including early returns
//! through `?`. Nothing is pooled or cached; each call re-reads storage.
//!
//! ## Parameters
//!
//! Caller-supplied values (ids, diet strings, record fields) are always bound
//! through `?N` placeholders. The SQL text of every statement is a constant.
//!
//! ## Not found
//!
//! A lookup by id that matches nothing returns `FishRecord::default()` (id
//! `-1`), and list lookups return an empty `Vec`. Only real database failures
//! come back as `Err(StorageError)`.

use crate::config::DatabaseConfig;
use crate::persistence::StorageError;
use common::model::fish::{FishRecord, UNSET_ID};
use log::{debug, info};
use rusqlite::{params, Connection, OptionalExtension, Row};

const SELECT_ALL: &str = "SELECT ID, COMMONNAME, LATIN, PH, KH, TEMP, FISHSIZE, SPECIESORIGIN, TANKSIZE, STOCKING, DIET FROM FISH";

const SELECT_BY_ID: &str = "SELECT ID, COMMONNAME, LATIN, PH, KH, TEMP, FISHSIZE, SPECIESORIGIN, TANKSIZE, STOCKING, DIET FROM FISH WHERE ID = ?1";

const SELECT_BY_DIET: &str = "SELECT ID, COMMONNAME, LATIN, PH, KH, TEMP, FISHSIZE, SPECIESORIGIN, TANKSIZE, STOCKING, DIET FROM FISH WHERE DIET = ?1";

const INSERT: &str = "INSERT INTO FISH (COMMONNAME, LATIN, PH, KH, TEMP, FISHSIZE, SPECIESORIGIN, TANKSIZE, STOCKING, DIET) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)";

const UPDATE: &str = "UPDATE FISH SET COMMONNAME = ?1, LATIN = ?2, PH = ?3, KH = ?4, TEMP = ?5, FISHSIZE = ?6, SPECIESORIGIN = ?7, TANKSIZE = ?8, STOCKING = ?9, DIET = ?10 WHERE ID = ?11";

const DELETE: &str = "DELETE FROM FISH WHERE ID = ?1";

#[derive(Debug, Clone)]
pub struct FishDao {
    config: DatabaseConfig,
}

impl FishDao {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    fn connect(&self) -> Result<Connection, StorageError> {
        Ok(Connection::open(&self.config.path)?)
    }

    /// Every row of the table, in whatever order SQLite returns them.
    pub fn find_all(&self) -> Result<Vec<FishRecord>, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_ALL)?;
        let rows = stmt
            .query_map([], map_fish_row)?
            .collect::<Result<Vec<_>, _>>()?;

        info!("# of records found : {}", rows.len());
        Ok(rows)
    }

    /// The row with primary key `id`, or an unset record if there is none.
    pub fn find_by_id(&self, id: i64) -> Result<FishRecord, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_BY_ID)?;
        let found = stmt
            .query_row(params![id], map_fish_row)
            .optional()?;

        info!("Found {}?: {}", id, found.is_some());
        Ok(found.unwrap_or_default())
    }

    /// Every row whose `DIET` column equals `diet` exactly.
    pub fn find_by_diet(&self, diet: &str) -> Result<Vec<FishRecord>, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(SELECT_BY_DIET)?;
        let rows = stmt
            .query_map(params![diet], map_fish_row)?
            .collect::<Result<Vec<_>, _>>()?;

        info!("# of records found : {}", rows.len());
        Ok(rows)
    }

    /// Inserts the ten descriptive fields of `record`. The generated key is
    /// written back into `record.id`, or `-1` if nothing was inserted.
    /// Returns the number of rows created, which should always be 1.
    pub fn create(&self, record: &mut FishRecord) -> Result<usize, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(INSERT)?;
        let created = stmt.execute(params![
            record.common_name,
            record.latin,
            record.ph,
            record.kh,
            record.temp,
            record.fish_size,
            record.species_origin,
            record.tank_size,
            record.stocking,
            record.diet,
        ])?;

        record.id = if created > 0 {
            conn.last_insert_rowid()
        } else {
            UNSET_ID
        };
        debug!("New record ID is {}", record.id);

        info!("# of records created : {}", created);
        Ok(created)
    }

    /// Overwrites every column except `ID` on the row matching `record.id`.
    /// Returns 0 when no row has that id.
    pub fn update(&self, record: &FishRecord) -> Result<usize, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(UPDATE)?;
        let updated = stmt.execute(params![
            record.common_name,
            record.latin,
            record.ph,
            record.kh,
            record.temp,
            record.fish_size,
            record.species_origin,
            record.tank_size,
            record.stocking,
            record.diet,
            record.id,
        ])?;

        info!("# of records updated : {}", updated);
        Ok(updated)
    }

    /// Deletes the row with primary key `id`. Returns 0 or 1.
    pub fn delete(&self, id: i64) -> Result<usize, StorageError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(DELETE)?;
        let deleted = stmt.execute(params![id])?;

        info!("# of records deleted : {}", deleted);
        Ok(deleted)
    }
}

/// Builds a record from the current row by column name. A missing column or
/// a value that is not text (NULL included) fails the whole query.
fn map_fish_row(row: &Row<'_>) -> rusqlite::Result<FishRecord> {
    Ok(FishRecord {
        id: row.get("ID")?,
        common_name: row.get("COMMONNAME")?,
        latin: row.get("LATIN")?,
        ph: row.get("PH")?,
        kh: row.get("KH")?,
        temp: row.get("TEMP")?,
        fish_size: row.get("FISHSIZE")?,
        species_origin: row.get("SPECIESORIGIN")?,
        tank_size: row.get("TANKSIZE")?,
        stocking: row.get("STOCKING")?,
        diet: row.get("DIET")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::seed::fixture_database;

    fn brown_knife() -> FishRecord {
        FishRecord::new(
            6,
            "African Brown Knife",
            "Xenomystus nigri",
            "6.0-8.0",
            "5-19 dH",
            "72-78F",
            "12 in TL",
            "Africa",
            "",
            "",
            "Carnivore",
        )
    }

    fn new_fish() -> FishRecord {
        FishRecord::new(
            UNSET_ID,
            "Sparkling Gourami",
            "Trichopsis pumila",
            "6.0-7.0",
            "5-12 dH",
            "72-82F",
            "2 in TL",
            "Asia",
            "5 gal",
            "Pair",
            "Carnivore",
        )
    }

    #[test]
    fn find_all_returns_every_fixture_row() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);
        assert_eq!(dao.find_all().unwrap().len(), 200);
    }

    #[test]
    fn find_all_on_empty_table_is_empty_vec() {
        let (_dir, config) = fixture_database();
        Connection::open(&config.path)
            .unwrap()
            .execute("DELETE FROM FISH", [])
            .unwrap();

        let dao = FishDao::new(config);
        assert!(dao.find_all().unwrap().is_empty());
    }

    #[test]
    fn find_by_id_matches_fixture_literal() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);

        let found = dao.find_by_id(6).unwrap();
        assert_eq!(found, brown_knife());
        assert_eq!(found.id, 6);
        assert_eq!(found.tank_size, "");
        assert_eq!(found.stocking, "");
    }

    #[test]
    fn find_by_missing_id_returns_unset_record() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);

        let found = dao.find_by_id(9_999).unwrap();
        assert!(found.is_unset());
        assert_eq!(found, FishRecord::default());
    }

    #[test]
    fn find_by_diet_filters_on_exact_value() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);

        let carnivores = dao.find_by_diet("Carnivore").unwrap();
        assert_eq!(carnivores.len(), 52);
        assert!(carnivores.iter().all(|f| f.diet == "Carnivore"));
        assert!(carnivores.contains(&brown_knife()));

        assert_eq!(dao.find_by_diet("Herbivore").unwrap().len(), 23);
        assert!(dao.find_by_diet("carnivore").unwrap().is_empty());
    }

    #[test]
    fn diet_is_bound_not_interpolated() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);

        assert!(dao.find_by_diet("x' OR '1'='1").unwrap().is_empty());
        assert_eq!(dao.find_all().unwrap().len(), 200);
    }

    #[test]
    fn create_then_find_round_trips() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);

        let mut fish = new_fish();
        assert_eq!(dao.create(&mut fish).unwrap(), 1);
        assert_eq!(fish.id, 201);

        let found = dao.find_by_id(fish.id).unwrap();
        assert_eq!(found, fish);
        assert_eq!(found.id, fish.id);
        assert_eq!(dao.find_all().unwrap().len(), 201);
    }

    #[test]
    fn create_stores_quotes_verbatim() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);

        let mut fish = new_fish();
        fish.common_name = "Robert'); DROP TABLE FISH;--".to_string();
        dao.create(&mut fish).unwrap();

        assert_eq!(dao.find_by_id(fish.id).unwrap().common_name, fish.common_name);
        assert_eq!(dao.find_all().unwrap().len(), 201);
    }

    #[test]
    fn update_changes_only_the_matching_row() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);
        let before = dao.find_all().unwrap();

        let mut fish = dao.find_by_id(6).unwrap();
        fish.tank_size = "75 gal".to_string();
        fish.stocking = "Single".to_string();
        assert_eq!(dao.update(&fish).unwrap(), 1);

        let after = dao.find_all().unwrap();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after.iter()) {
            assert_eq!(old.id, new.id);
            if new.id == 6 {
                assert_eq!(*new, fish);
                assert_ne!(*new, *old);
            } else {
                assert_eq!(new, old);
            }
        }
    }

    #[test]
    fn update_of_unknown_id_touches_nothing() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);

        let mut fish = new_fish();
        fish.id = 9_999;
        assert_eq!(dao.update(&fish).unwrap(), 0);
        assert!(dao.find_by_id(9_999).unwrap().is_unset());
    }

    #[test]
    fn delete_existing_then_missing() {
        let (_dir, config) = fixture_database();
        let dao = FishDao::new(config);

        assert_eq!(dao.delete(6).unwrap(), 1);
        assert!(dao.find_by_id(6).unwrap().is_unset());
        assert_eq!(dao.find_all().unwrap().len(), 199);

        assert_eq!(dao.delete(6).unwrap(), 0);
        assert_eq!(dao.delete(9_999).unwrap(), 0);
    }

    #[test]
    fn missing_table_is_a_storage_error() {
        let (_dir, config) = fixture_database();
        Connection::open(&config.path)
            .unwrap()
            .execute_batch("DROP TABLE FISH;")
            .unwrap();

        let dao = FishDao::new(config);
        assert!(matches!(dao.find_all(), Err(StorageError::Sqlite(_))));
        assert!(dao.find_by_id(6).is_err());
        assert!(dao.find_by_diet("Carnivore").is_err());
        assert!(dao.delete(6).is_err());
    }

    #[test]
    fn null_column_fails_the_whole_read() {
        let (dir, _config) = fixture_database();
        let config = DatabaseConfig {
            path: dir.path().join("loose.sqlite"),
        };
        Connection::open(&config.path)
            .unwrap()
            .execute_batch(
                "CREATE TABLE FISH (ID INTEGER PRIMARY KEY, COMMONNAME TEXT, LATIN TEXT, PH TEXT, \
                 KH TEXT, TEMP TEXT, FISHSIZE TEXT, SPECIESORIGIN TEXT, TANKSIZE TEXT, \
                 STOCKING TEXT, DIET TEXT);
                 INSERT INTO FISH (ID, COMMONNAME) VALUES (1, 'Guppy');",
            )
            .unwrap();

        let dao = FishDao::new(config);
        assert!(dao.find_all().is_err());
        assert!(dao.find_by_id(1).is_err());
    }
}
