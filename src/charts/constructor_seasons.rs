use anyhow::Result;

use crate::pipeline::types::ConstructorSeason;
use crate::pipeline::{
    Table, aggregate_count, aggregate_sum, attach_name, join_year, merge_wide, select_and_order,
    zero_fill_int,
};
use crate::tables::{Constructor, ConstructorResult, Qualifying, Race, RaceResult};

pub const COLUMNS: [&str; 6] = [
    "year",
    "constructorId",
    "Constructor Name",
    "Total Points",
    "Races Won",
    "Races Qualified First",
];

/// Per-season points, wins and poles for every constructor.
///
/// Points come from the constructor results table; wins and poles are
/// counted from the driver-level results and qualifying tables.
pub fn build(
    constructors: &[Constructor],
    races: &[Race],
    constructor_results: Vec<ConstructorResult>,
    results: Vec<RaceResult>,
    qualifying: Vec<Qualifying>,
) -> Result<Table> {
    let constructor_results = join_year(constructor_results, races);
    let results = join_year(results, races);
    let qualifying = join_year(qualifying, races);

    let total_points = aggregate_sum(
        &constructor_results,
        |c| {
            c.year.map(|year| ConstructorSeason {
                constructor_id: c.record.constructor_id,
                year,
            })
        },
        |c| c.record.points,
        "Total Points",
    );
    let races_won = aggregate_count(
        &results,
        |r| r.record.position_order == 1,
        |r| {
            r.year.map(|year| ConstructorSeason {
                constructor_id: r.record.constructor_id,
                year,
            })
        },
        "Races Won",
    );
    let qualified_first = aggregate_count(
        &qualifying,
        |q| q.record.position == 1,
        |q| {
            q.year.map(|year| ConstructorSeason {
                constructor_id: q.record.constructor_id,
                year,
            })
        },
        "Races Qualified First",
    );

    let mut frame = merge_wide(&total_points, &[&races_won, &qualified_first])?;
    attach_name(
        &mut frame,
        constructors,
        |k| k.constructor_id,
        "Constructor Name",
    )?;
    zero_fill_int(&mut frame, &["Races Won", "Races Qualified First"])?;

    select_and_order(&frame, &COLUMNS)
}
