//! Row constructors shared by the chart unit tests.

use crate::tables::{
    Constructor, ConstructorResult, ConstructorStanding, Driver, Qualifying, Race, RaceResult,
};

pub fn driver(driver_id: u32, forename: &str, surname: &str) -> Driver {
    Driver {
        driver_id,
        forename: forename.to_string(),
        surname: surname.to_string(),
    }
}

pub fn constructor(constructor_id: u32, name: &str) -> Constructor {
    Constructor {
        constructor_id,
        name: name.to_string(),
    }
}

pub fn race(race_id: u32, year: i32) -> Race {
    Race { race_id, year }
}

/// A result row as (race, driver, constructor, finishing position, points).
pub fn result(
    race_id: u32,
    driver_id: u32,
    constructor_id: u32,
    position_order: u32,
    points: f64,
) -> RaceResult {
    RaceResult {
        race_id,
        driver_id,
        constructor_id,
        position_order,
        points,
    }
}

/// A pole position for `driver_id` driving for `constructor_id`.
pub fn pole(race_id: u32, driver_id: u32, constructor_id: u32) -> Qualifying {
    Qualifying {
        race_id,
        driver_id,
        constructor_id,
        position: 1,
    }
}

pub fn constructor_result(race_id: u32, constructor_id: u32, points: f64) -> ConstructorResult {
    ConstructorResult {
        race_id,
        constructor_id,
        points,
    }
}

pub fn constructor_standing(race_id: u32, constructor_id: u32, points: f64) -> ConstructorStanding {
    ConstructorStanding {
        race_id,
        constructor_id,
        points,
    }
}
