use anyhow::Result;

use crate::pipeline::frame::Column;
use crate::pipeline::types::{ConstructorKey, DriverKey};
use crate::pipeline::{
    Cell, ChampionshipTally, Frame, Table, attach_name, champion_per_year, join_year,
    select_and_order,
};
use crate::tables::{Constructor, ConstructorStanding, Driver, DriverStanding, Race};

pub const DRIVER_COLUMNS: [&str; 2] = ["Driver Name", "Championships"];
pub const CONSTRUCTOR_COLUMNS: [&str; 2] = ["Constructor Name", "Championships"];

fn tally_frame<I, K>(tally: Vec<ChampionshipTally<I>>, key: impl Fn(I) -> K) -> Result<Frame<K>> {
    let (keys, cells): (Vec<K>, Vec<Cell>) = tally
        .into_iter()
        .map(|t| (key(t.entity_id), Cell::Int(t.championships.into())))
        .unzip();

    let mut frame = Frame::new(keys);
    frame.push_column(Column {
        name: "Championships".to_string(),
        cells,
    })?;
    Ok(frame)
}

/// Drivers' championships won, most titles first.
///
/// Champions missing from the drivers table are left out.
pub fn build_drivers(
    drivers: &[Driver],
    races: &[Race],
    standings: Vec<DriverStanding>,
) -> Result<Table> {
    let standings = join_year(standings, races);
    let tally = champion_per_year(&standings);

    let mut frame = tally_frame(tally, DriverKey)?;
    attach_name(&mut frame, drivers, |k| k.0, "Driver Name")?;
    frame.drop_nulls("Driver Name")?;

    select_and_order(&frame, &DRIVER_COLUMNS)
}

/// Constructors' championships won, most titles first.
///
/// Champions missing from the constructors table are left out.
pub fn build_constructors(
    constructors: &[Constructor],
    races: &[Race],
    standings: Vec<ConstructorStanding>,
) -> Result<Table> {
    let standings = join_year(standings, races);
    let tally = champion_per_year(&standings);

    let mut frame = tally_frame(tally, ConstructorKey)?;
    attach_name(&mut frame, constructors, |k| k.0, "Constructor Name")?;
    frame.drop_nulls("Constructor Name")?;

    select_and_order(&frame, &CONSTRUCTOR_COLUMNS)
}
