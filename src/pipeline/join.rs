use std::collections::HashMap;

use crate::tables::{Race, RaceId};

/// A fact row that references a race.
pub trait RaceKeyed {
    fn race_id(&self) -> RaceId;
}

/// A fact row with the season of its race attached.
///
/// `year` is `None` when the race identifier has no matching race.
#[derive(Debug, Clone)]
pub struct Seasonal<T> {
    pub record: T,
    pub year: Option<i32>,
}

/// Left-joins `table` to `races` on race identifier, attaching the year.
///
/// Every input row is kept, in input order. If `races` repeats an identifier,
/// the first occurrence wins.
pub fn join_year<T: RaceKeyed>(table: Vec<T>, races: &[Race]) -> Vec<Seasonal<T>> {
    let mut years: HashMap<RaceId, i32> = HashMap::with_capacity(races.len());
    for race in races {
        years.entry(race.race_id).or_insert(race.year);
    }

    table
        .into_iter()
        .map(|record| {
            let year = years.get(&record.race_id()).copied();
            Seasonal { record, year }
        })
        .collect()
}
