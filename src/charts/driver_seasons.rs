use anyhow::Result;

use crate::pipeline::types::DriverSeason;
use crate::pipeline::{
    Table, aggregate_count, aggregate_sum, attach_name, join_year, merge_wide, select_and_order,
    zero_fill_int,
};
use crate::tables::{Driver, Qualifying, Race, RaceResult};

pub const COLUMNS: [&str; 6] = [
    "year",
    "driverId",
    "Driver Name",
    "Total Points",
    "Races Won",
    "Races Qualified First",
];

/// Per-season points, wins and poles for every driver that scored a result.
pub fn build(
    drivers: &[Driver],
    races: &[Race],
    results: Vec<RaceResult>,
    qualifying: Vec<Qualifying>,
) -> Result<Table> {
    let results = join_year(results, races);
    let qualifying = join_year(qualifying, races);

    let total_points = aggregate_sum(
        &results,
        |r| {
            r.year.map(|year| DriverSeason {
                driver_id: r.record.driver_id,
                year,
            })
        },
        |r| r.record.points,
        "Total Points",
    );
    let races_won = aggregate_count(
        &results,
        |r| r.record.position_order == 1,
        |r| {
            r.year.map(|year| DriverSeason {
                driver_id: r.record.driver_id,
                year,
            })
        },
        "Races Won",
    );
    let qualified_first = aggregate_count(
        &qualifying,
        |q| q.record.position == 1,
        |q| {
            q.year.map(|year| DriverSeason {
                driver_id: q.record.driver_id,
                year,
            })
        },
        "Races Qualified First",
    );

    let mut frame = merge_wide(&total_points, &[&races_won, &qualified_first])?;
    attach_name(&mut frame, drivers, |k| k.driver_id, "Driver Name")?;
    zero_fill_int(&mut frame, &["Races Won", "Races Qualified First"])?;

    select_and_order(&frame, &COLUMNS)
}
