//! Typed rows for the input CSV tables and the loader that reads them.
//!
//! Only the columns the pipeline consumes are declared; any extra columns in
//! the source files are ignored during deserialization.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::pipeline::champions::Standing;
use crate::pipeline::frame::NameSource;
use crate::pipeline::join::RaceKeyed;

pub type RaceId = u32;
pub type DriverId = u32;
pub type ConstructorId = u32;

/// A row of `drivers.csv`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    pub driver_id: DriverId,
    pub forename: String,
    pub surname: String,
}

/// A row of `constructors.csv`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constructor {
    pub constructor_id: ConstructorId,
    pub name: String,
}

/// A row of `races.csv`; only the season is needed.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Race {
    pub race_id: RaceId,
    pub year: i32,
}

/// A row of `results.csv`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceResult {
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub constructor_id: ConstructorId,
    pub position_order: u32,
    pub points: f64,
}

/// A row of `qualifying.csv`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Qualifying {
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub constructor_id: ConstructorId,
    pub position: u32,
}

/// A row of `constructor_results.csv`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorResult {
    pub race_id: RaceId,
    pub constructor_id: ConstructorId,
    pub points: f64,
}

/// A row of `lap_times.csv`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LapTime {
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub lap: u32,
    pub milliseconds: u64,
}

/// A row of `driver_standings.csv`. Points are cumulative up to the race.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverStanding {
    pub race_id: RaceId,
    pub driver_id: DriverId,
    pub points: f64,
}

/// A row of `constructor_standings.csv`. Points are cumulative up to the race.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstructorStanding {
    pub race_id: RaceId,
    pub constructor_id: ConstructorId,
    pub points: f64,
}

macro_rules! race_keyed {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl RaceKeyed for $ty {
                fn race_id(&self) -> RaceId {
                    self.race_id
                }
            }
        )+
    };
}

race_keyed!(
    RaceResult,
    Qualifying,
    ConstructorResult,
    LapTime,
    DriverStanding,
    ConstructorStanding,
);

impl NameSource for Driver {
    type Id = DriverId;

    fn id(&self) -> DriverId {
        self.driver_id
    }

    fn name_parts(&self) -> Vec<&str> {
        vec![self.forename.as_str(), self.surname.as_str()]
    }
}

impl NameSource for Constructor {
    type Id = ConstructorId;

    fn id(&self) -> ConstructorId {
        self.constructor_id
    }

    fn name_parts(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Standing for DriverStanding {
    type Id = DriverId;

    fn entity_id(&self) -> DriverId {
        self.driver_id
    }

    fn points(&self) -> f64 {
        self.points
    }
}

impl Standing for ConstructorStanding {
    type Id = ConstructorId;

    fn entity_id(&self) -> ConstructorId {
        self.constructor_id
    }

    fn points(&self) -> f64 {
        self.points
    }
}

/// Deserializes every row of a headered CSV stream.
pub fn read_rows<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();

    for (index, result) in rdr.deserialize().enumerate() {
        let record: T =
            result.with_context(|| format!("schema mismatch at data row {}", index + 1))?;
        rows.push(record);
    }

    Ok(rows)
}

/// Loads a whole input table from `path`.
///
/// # Errors
///
/// Fails if the file cannot be opened, or if a required column is missing or
/// holds a value of the wrong type.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let rows: Vec<T> =
        read_rows(file).with_context(|| format!("failed to load {}", path.display()))?;

    debug!(path = %path.display(), rows = rows.len(), "Table loaded");
    Ok(rows)
}
