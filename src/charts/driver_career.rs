use anyhow::Result;

use crate::pipeline::types::DriverKey;
use crate::pipeline::{
    Table, aggregate_count, aggregate_mean, aggregate_sum, attach_name, merge_wide,
    select_and_order, zero_fill_int,
};
use crate::tables::{Driver, LapTime, Qualifying, RaceResult};

pub const COLUMNS: [&str; 5] = [
    "Driver Name",
    "Total Points",
    "Races Won",
    "Pole Positions",
    "Avg Lap Time",
];

/// Career totals per driver for the comparative heatmap.
///
/// No season join is needed here. `Avg Lap Time` is the mean lap duration in
/// milliseconds and stays empty for drivers without recorded laps.
pub fn build(
    drivers: &[Driver],
    results: &[RaceResult],
    qualifying: &[Qualifying],
    lap_times: &[LapTime],
) -> Result<Table> {
    let total_points = aggregate_sum(
        results,
        |r| Some(DriverKey(r.driver_id)),
        |r| r.points,
        "Total Points",
    );
    let races_won = aggregate_count(
        results,
        |r| r.position_order == 1,
        |r| Some(DriverKey(r.driver_id)),
        "Races Won",
    );
    let pole_positions = aggregate_count(
        qualifying,
        |q| q.position == 1,
        |q| Some(DriverKey(q.driver_id)),
        "Pole Positions",
    );
    let avg_lap_time = aggregate_mean(
        lap_times,
        |l| Some(DriverKey(l.driver_id)),
        |l| l.milliseconds as f64,
        "Avg Lap Time",
    );

    let mut frame = merge_wide(
        &total_points,
        &[&races_won, &pole_positions, &avg_lap_time],
    )?;
    zero_fill_int(&mut frame, &["Races Won", "Pole Positions"])?;
    attach_name(&mut frame, drivers, |k| k.0, "Driver Name")?;

    select_and_order(&frame, &COLUMNS)
}
