//! Relational building blocks for the chart pipelines.
//!
//! Fact tables are joined to their season, grouped into sparse aggregates,
//! merged into a wide [`frame::Frame`], zero-filled and named, then projected
//! into a flat [`frame::Table`] for writing.

pub mod aggregate;
pub mod champions;
pub mod frame;
pub mod join;
pub mod types;
pub mod utility;

pub use aggregate::{Aggregate, aggregate_count, aggregate_mean, aggregate_sum};
pub use champions::{
    ChampionshipTally, SeasonChampion, Standing, champion_per_year, season_champions,
};
pub use frame::{
    Cell, Frame, FrameKey, NameSource, Table, attach_name, merge_wide, select_and_order,
    zero_fill_int,
};
pub use join::{RaceKeyed, Seasonal, join_year};
