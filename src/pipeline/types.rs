//! Group keys used by the chart pipelines.
//!
//! Field order matters: derived `Ord` sorts by entity first, then season,
//! which fixes the row order of every season-level output.

use crate::pipeline::frame::{Cell, FrameKey};
use crate::tables::{ConstructorId, DriverId};

/// (driver, season) key for season-level driver views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DriverSeason {
    pub driver_id: DriverId,
    pub year: i32,
}

/// (constructor, season) key for season-level constructor views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstructorSeason {
    pub constructor_id: ConstructorId,
    pub year: i32,
}

/// Career-level driver key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DriverKey(pub DriverId);

/// Career-level constructor key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConstructorKey(pub ConstructorId);

impl FrameKey for DriverSeason {
    fn column_names() -> &'static [&'static str] {
        &["driverId", "year"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.driver_id.into()),
            Cell::Int(self.year.into()),
        ]
    }
}

impl FrameKey for ConstructorSeason {
    fn column_names() -> &'static [&'static str] {
        &["constructorId", "year"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![
            Cell::Int(self.constructor_id.into()),
            Cell::Int(self.year.into()),
        ]
    }
}

impl FrameKey for DriverKey {
    fn column_names() -> &'static [&'static str] {
        &["driverId"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::Int(self.0.into())]
    }
}

impl FrameKey for ConstructorKey {
    fn column_names() -> &'static [&'static str] {
        &["constructorId"]
    }

    fn cells(&self) -> Vec<Cell> {
        vec![Cell::Int(self.0.into())]
    }
}
