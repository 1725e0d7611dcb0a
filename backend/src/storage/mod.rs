//! SQLite persistence for products and submitted evaluations.
//!
//! A connection is opened per operation against the configured file, so the
//! `Database` handle itself is just a path and is cheap to share across
//! workers.
//!
//! Products are read-only for clients; they enter the database through
//! [`Database::seed_from_file`], which understands the `db.json` layout used
//! by json-server (`{"products": [...], "evaluations": [...]}`).

use std::fs;
use std::path::{Path, PathBuf};

use common::model::feedback::{Experience, FeedbackRecord};
use common::model::product::Product;
use log::{info, warn};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension, Row};
use serde::Deserialize;

use crate::error::ServiceError;

const SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS products (
        id          INTEGER PRIMARY KEY,
        name        TEXT NOT NULL,
        brand       TEXT NOT NULL,
        price       TEXT NOT NULL,
        description TEXT NOT NULL,
        image       TEXT NOT NULL
    );
    CREATE TABLE IF NOT EXISTS evaluations (
        id          INTEGER PRIMARY KEY,
        product_id  INTEGER NOT NULL,
        name        TEXT NOT NULL,
        email       TEXT NOT NULL,
        feedback    TEXT NOT NULL,
        experience  TEXT NOT NULL,
        recommend   INTEGER NOT NULL
    );
";

#[derive(Deserialize)]
struct SeedFile {
    #[serde(default)]
    products: Vec<Product>,
    #[serde(default)]
    evaluations: Vec<FeedbackRecord>,
}

/// Counts of rows written by a seed run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub products: usize,
    pub evaluations: usize,
}

#[derive(Debug, Clone)]
pub struct Database {
    path: PathBuf,
}

impl Database {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn connect(&self) -> Result<Connection, ServiceError> {
        Ok(Connection::open(&self.path)?)
    }

    /// Creates the tables if they do not exist yet.
    pub fn migrate(&self) -> Result<(), ServiceError> {
        self.connect()?.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Loads a json-server `db.json`.
    ///
    /// Products are imported only while the products table is empty, so a
    /// restart never duplicates or overwrites the catalogue. Evaluations whose
    /// id already exists are skipped. A missing file is not an error.
    pub fn seed_from_file(&self, seed_path: &Path) -> Result<SeedReport, ServiceError> {
        if !seed_path.exists() {
            info!("No seed file at {}, skipping", seed_path.display());
            return Ok(SeedReport::default());
        }

        let raw = fs::read_to_string(seed_path).map_err(|e| ServiceError::Seed(e.to_string()))?;
        let seed: SeedFile =
            serde_json::from_str(&raw).map_err(|e| ServiceError::Seed(e.to_string()))?;

        let mut conn = self.connect()?;
        let tx = conn.transaction()?;
        let mut report = SeedReport::default();

        let existing: i64 = tx.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        if existing == 0 {
            for product in &seed.products {
                tx.execute(
                    "INSERT INTO products (id, name, brand, price, description, image)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                    params![
                        product.id,
                        product.name,
                        product.brand,
                        product.price,
                        product.description,
                        product.image
                    ],
                )?;
                report.products += 1;
            }
        } else {
            warn!("Products table already holds {} rows, not seeding products", existing);
        }

        for record in &seed.evaluations {
            report.evaluations += write_evaluation(&tx, "INSERT OR IGNORE", record)?;
        }

        tx.commit()?;
        Ok(report)
    }

    pub fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, brand, price, description, image FROM products ORDER BY id",
        )?;
        let products = stmt
            .query_map([], product_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(products)
    }

    pub fn get_product(&self, id: i64) -> Result<Product, ServiceError> {
        let conn = self.connect()?;
        conn.query_row(
            "SELECT id, name, brand, price, description, image FROM products WHERE id = ?1",
            params![id],
            product_from_row,
        )
        .optional()?
        .ok_or(ServiceError::NotFound(id))
    }

    pub fn insert_evaluation(&self, record: &FeedbackRecord) -> Result<(), ServiceError> {
        let conn = self.connect()?;
        match write_evaluation(&conn, "INSERT", record) {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::ConstraintViolation => {
                Err(ServiceError::Duplicate(record.id))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// All evaluations in submission order, optionally for one product only.
    pub fn list_evaluations(
        &self,
        product_id: Option<i64>,
    ) -> Result<Vec<FeedbackRecord>, ServiceError> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            "SELECT id, product_id, name, email, feedback, experience, recommend
             FROM evaluations
             WHERE ?1 IS NULL OR product_id = ?1
             ORDER BY id",
        )?;
        let records = stmt
            .query_map(params![product_id], evaluation_from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}

fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        brand: row.get(2)?,
        price: row.get(3)?,
        description: row.get(4)?,
        image: row.get(5)?,
    })
}

fn write_evaluation(conn: &Connection, verb: &str, record: &FeedbackRecord) -> rusqlite::Result<usize> {
    conn.execute(
        &format!(
            "{} INTO evaluations
             (id, product_id, name, email, feedback, experience, recommend)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            verb
        ),
        params![
            record.id as i64,
            record.product_id,
            record.name,
            record.email,
            record.feedback,
            record.experience.label(),
            record.recommend
        ],
    )
}

fn evaluation_from_row(row: &Row<'_>) -> rusqlite::Result<FeedbackRecord> {
    let id: i64 = row.get(0)?;
    let label: String = row.get(5)?;
    let experience = Experience::from_label(&label).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            5,
            rusqlite::types::Type::Text,
            format!("unknown experience `{}`", label).into(),
        )
    })?;

    Ok(FeedbackRecord {
        id: id as u64,
        product_id: row.get(1)?,
        name: row.get(2)?,
        email: row.get(3)?,
        feedback: row.get(4)?,
        experience,
        recommend: row.get(6)?,
    })
}


#[cfg(test)]
mod tests {
    use std::fs;

    use common::model::feedback::{Experience, FeedbackRecord};

    use super::testing::{empty_database, seeded_database, SEED};
    use super::SeedReport;
    use crate::error::ServiceError;

    fn record(id: u64, product_id: i64) -> FeedbackRecord {
        FeedbackRecord {
            id,
            product_id,
            name: "Carla".to_string(),
            email: "carla@example.com".to_string(),
            feedback: "Ótimo".to_string(),
            experience: Experience::Happy,
            recommend: true,
        }
    }

    #[test]
    fn seeding_twice_keeps_one_catalogue() {
        let (dir, db) = empty_database();
        let seed = dir.path().join("db.json");
        fs::write(&seed, SEED).unwrap();

        let first = db.seed_from_file(&seed).unwrap();
        let second = db.seed_from_file(&seed).unwrap();

        assert_eq!(first, SeedReport { products: 2, evaluations: 0 });
        assert_eq!(second.products, 0);
        assert_eq!(db.list_products().unwrap().len(), 2);
    }

    #[test]
    fn missing_seed_file_is_skipped() {
        let (dir, db) = empty_database();
        let report = db.seed_from_file(&dir.path().join("absent.json")).unwrap();
        assert_eq!(report, SeedReport::default());
    }

    #[test]
    fn malformed_seed_file_is_reported() {
        let (dir, db) = empty_database();
        let seed = dir.path().join("db.json");
        fs::write(&seed, "{ not json").unwrap();
        assert!(matches!(db.seed_from_file(&seed), Err(ServiceError::Seed(_))));
    }

    #[test]
    fn unknown_product_is_not_found() {
        let (_dir, db) = seeded_database();
        assert!(matches!(db.get_product(99), Err(ServiceError::NotFound(99))));
        assert_eq!(db.get_product(2).unwrap().brand, "Frio&Cia");
    }

    #[test]
    fn evaluations_round_trip_and_filter() {
        let (_dir, db) = seeded_database();
        db.insert_evaluation(&record(10, 1)).unwrap();
        db.insert_evaluation(&record(11, 2)).unwrap();

        assert_eq!(db.list_evaluations(None).unwrap().len(), 2);
        assert_eq!(db.list_evaluations(Some(2)).unwrap(), vec![record(11, 2)]);
    }

    #[test]
    fn duplicate_evaluation_id_is_rejected() {
        let (_dir, db) = seeded_database();
        db.insert_evaluation(&record(10, 1)).unwrap();
        assert!(matches!(
            db.insert_evaluation(&record(10, 1)),
            Err(ServiceError::Duplicate(10))
        ));
    }
}
