//! Input/output locations and the fixed file names the charts read and write.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::tables::{
    Constructor, ConstructorResult, ConstructorStanding, Driver, DriverStanding, LapTime,
    Qualifying, Race, RaceResult, load_table,
};

pub const DEFAULT_DATA_DIR: &str = "../Data";
pub const DEFAULT_OUT_DIR: &str = ".";
pub const DEFAULT_LOG_FILE: &str = "logs/f1_metrics.log";

pub const DRIVERS_CSV: &str = "drivers.csv";
pub const CONSTRUCTORS_CSV: &str = "constructors.csv";
pub const RACES_CSV: &str = "races.csv";
pub const RESULTS_CSV: &str = "results.csv";
pub const QUALIFYING_CSV: &str = "qualifying.csv";
pub const CONSTRUCTOR_RESULTS_CSV: &str = "constructor_results.csv";
pub const CONSTRUCTOR_STANDINGS_CSV: &str = "constructor_standings.csv";
pub const DRIVER_STANDINGS_CSV: &str = "driver_standings.csv";
pub const LAP_TIMES_CSV: &str = "lap_times.csv";

/// Log file location, from `LOG_FILE_PATH` or [`DEFAULT_LOG_FILE`].
pub fn log_file_path() -> String {
    std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
}

/// Directory holding the input tables. Each accessor loads one file fresh.
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, file: &str) -> PathBuf {
        self.root.join(file)
    }

    pub fn drivers(&self) -> Result<Vec<Driver>> {
        load_table(&self.path(DRIVERS_CSV))
    }

    pub fn constructors(&self) -> Result<Vec<Constructor>> {
        load_table(&self.path(CONSTRUCTORS_CSV))
    }

    pub fn races(&self) -> Result<Vec<Race>> {
        load_table(&self.path(RACES_CSV))
    }

    pub fn results(&self) -> Result<Vec<RaceResult>> {
        load_table(&self.path(RESULTS_CSV))
    }

    pub fn qualifying(&self) -> Result<Vec<Qualifying>> {
        load_table(&self.path(QUALIFYING_CSV))
    }

    pub fn constructor_results(&self) -> Result<Vec<ConstructorResult>> {
        load_table(&self.path(CONSTRUCTOR_RESULTS_CSV))
    }

    pub fn constructor_standings(&self) -> Result<Vec<ConstructorStanding>> {
        load_table(&self.path(CONSTRUCTOR_STANDINGS_CSV))
    }

    pub fn driver_standings(&self) -> Result<Vec<DriverStanding>> {
        load_table(&self.path(DRIVER_STANDINGS_CSV))
    }

    pub fn lap_times(&self) -> Result<Vec<LapTime>> {
        load_table(&self.path(LAP_TIMES_CSV))
    }
}

impl Default for DataDir {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}
