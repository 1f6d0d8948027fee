//! One builder per published chart file.
//!
//! Every chart loads exactly the input tables it reads, builds its table with
//! the [`crate::pipeline`] operations and writes one CSV file.

pub mod championships;
pub mod constructor_seasons;
pub mod driver_career;
pub mod driver_seasons;

#[cfg(test)]
mod test_rows;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::DataDir;
use crate::output::write_table;
use crate::pipeline::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Chart {
    DriverSeasons,
    ConstructorSeasons,
    DriverCareer,
    DriverChampionships,
    ConstructorChampionships,
}

impl Chart {
    pub const ALL: [Chart; 5] = [
        Chart::DriverSeasons,
        Chart::ConstructorSeasons,
        Chart::DriverCareer,
        Chart::DriverChampionships,
        Chart::ConstructorChampionships,
    ];

    pub fn output_file(self) -> &'static str {
        match self {
            Chart::DriverSeasons => "chart1.csv",
            Chart::ConstructorSeasons => "chart2.csv",
            Chart::DriverCareer => "heatmap_metrics.csv",
            Chart::DriverChampionships => "championships_radial.csv",
            Chart::ConstructorChampionships => "constructor_championships_radial.csv",
        }
    }

    /// Loads this chart's inputs from `data` and builds its table.
    pub fn build(self, data: &DataDir) -> Result<Table> {
        match self {
            Chart::DriverSeasons => driver_seasons::build(
                &data.drivers()?,
                &data.races()?,
                data.results()?,
                data.qualifying()?,
            ),
            Chart::ConstructorSeasons => constructor_seasons::build(
                &data.constructors()?,
                &data.races()?,
                data.constructor_results()?,
                data.results()?,
                data.qualifying()?,
            ),
            Chart::DriverCareer => driver_career::build(
                &data.drivers()?,
                &data.results()?,
                &data.qualifying()?,
                &data.lap_times()?,
            ),
            Chart::DriverChampionships => championships::build_drivers(
                &data.drivers()?,
                &data.races()?,
                data.driver_standings()?,
            ),
            Chart::ConstructorChampionships => championships::build_constructors(
                &data.constructors()?,
                &data.races()?,
                data.constructor_standings()?,
            ),
        }
    }
}

/// Builds `chart` and writes it into `out_dir`, returning the written path.
#[tracing::instrument(skip(data, out_dir), fields(data_dir = %data.root().display()))]
pub fn run(chart: Chart, data: &DataDir, out_dir: &Path) -> Result<PathBuf> {
    let table = chart.build(data)?;
    let path = out_dir.join(chart.output_file());

    write_table(&path, &table)?;
    debug!(rows = table.rows.len(), "Chart complete");
    Ok(path)
}
