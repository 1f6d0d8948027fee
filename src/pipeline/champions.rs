use std::collections::HashMap;
use std::hash::Hash;

use crate::pipeline::join::Seasonal;

/// A cumulative standings row for a driver or constructor.
pub trait Standing {
    type Id: Copy + Eq + Hash;

    fn entity_id(&self) -> Self::Id;
    fn points(&self) -> f64;
}

/// The standings row that topped a season.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonChampion<I> {
    pub year: i32,
    pub entity_id: I,
    pub points: f64,
}

/// Number of seasons an entity finished on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionshipTally<I> {
    pub entity_id: I,
    pub championships: u32,
}

/// Picks the highest-points standings row for each season.
///
/// Rows are stably sorted by (year ascending, points descending) and the
/// first row of each year is kept, so equal points resolve to the earliest
/// row in input order. Rows without a season are ignored.
pub fn season_champions<S: Standing>(standings: &[Seasonal<S>]) -> Vec<SeasonChampion<S::Id>> {
    let mut rows: Vec<SeasonChampion<S::Id>> = standings
        .iter()
        .filter_map(|s| {
            s.year.map(|year| SeasonChampion {
                year,
                entity_id: s.record.entity_id(),
                points: s.record.points(),
            })
        })
        .collect();

    rows.sort_by(|a, b| a.year.cmp(&b.year).then(b.points.total_cmp(&a.points)));
    rows.dedup_by_key(|c| c.year);
    rows
}

/// Counts championships per entity, most titles first.
///
/// Entities with equal tallies keep the order of their first title.
pub fn champion_per_year<S: Standing>(standings: &[Seasonal<S>]) -> Vec<ChampionshipTally<S::Id>> {
    let mut index: HashMap<S::Id, usize> = HashMap::new();
    let mut tally: Vec<ChampionshipTally<S::Id>> = Vec::new();

    for champion in season_champions(standings) {
        match index.get(&champion.entity_id) {
            Some(&i) => tally[i].championships += 1,
            None => {
                index.insert(champion.entity_id, tally.len());
                tally.push(ChampionshipTally {
                    entity_id: champion.entity_id,
                    championships: 1,
                });
            }
        }
    }

    tally.sort_by(|a, b| b.championships.cmp(&a.championships));
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Row {
        who: &'static str,
        points: f64,
    }

    impl Standing for Row {
        type Id = &'static str;

        fn entity_id(&self) -> &'static str {
            self.who
        }

        fn points(&self) -> f64 {
            self.points
        }
    }

    fn standing(year: Option<i32>, who: &'static str, points: f64) -> Seasonal<Row> {
        Seasonal {
            record: Row { who, points },
            year,
        }
    }

    fn titles(entity_id: &'static str, championships: u32) -> ChampionshipTally<&'static str> {
        ChampionshipTally {
            entity_id,
            championships,
        }
    }

    #[test]
    fn test_one_title_each() {
        let standings = vec![
            standing(Some(2020), "Alice", 100.0),
            standing(Some(2020), "Bob", 90.0),
            standing(Some(2021), "Bob", 80.0),
        ];
        let tally = champion_per_year(&standings);

        assert_eq!(tally, vec![titles("Alice", 1), titles("Bob", 1)]);
    }

    #[test]
    fn test_season_champions_uses_max_cumulative_points() {
        let standings = vec![
            standing(Some(2021), "Carol", 10.0),
            standing(Some(2021), "Dave", 25.0),
            standing(Some(2021), "Carol", 300.0),
            standing(Some(2021), "Dave", 280.0),
            standing(Some(2020), "Dave", 150.0),
        ];
        let champions = season_champions(&standings);

        assert_eq!(champions.len(), 2);
        assert_eq!(champions[0].year, 2020);
        assert_eq!(champions[0].entity_id, "Dave");
        assert_eq!(champions[1].year, 2021);
        assert_eq!(champions[1].entity_id, "Carol");
        assert_eq!(champions[1].points, 300.0);
    }

    #[test]
    fn test_tie_keeps_first_row() {
        let standings = vec![
            standing(Some(2020), "Bob", 100.0),
            standing(Some(2020), "Alice", 100.0),
        ];
        let champions = season_champions(&standings);

        assert_eq!(champions.len(), 1);
        assert_eq!(champions[0].entity_id, "Bob");
    }

    #[test]
    fn test_tally_sorted_descending() {
        let standings = vec![
            standing(Some(2019), "Alice", 50.0),
            standing(Some(2020), "Bob", 60.0),
            standing(Some(2021), "Bob", 70.0),
            standing(Some(2022), "Bob", 80.0),
            standing(Some(2023), "Alice", 90.0),
        ];
        let tally = champion_per_year(&standings);

        assert_eq!(tally[0], titles("Bob", 3));
        assert_eq!(tally[1], titles("Alice", 2));
    }

    #[test]
    fn test_unmatched_season_is_ignored() {
        let standings = vec![
            standing(None, "Eve", 999.0),
            standing(Some(2020), "Alice", 10.0),
        ];
        let tally = champion_per_year(&standings);

        assert_eq!(tally.len(), 1);
        assert_eq!(tally[0].entity_id, "Alice");
    }

    #[test]
    fn test_empty_standings() {
        let standings: Vec<Seasonal<Row>> = vec![];
        assert!(champion_per_year(&standings).is_empty());
    }
}
