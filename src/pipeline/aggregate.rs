use std::collections::BTreeMap;

use crate::pipeline::utility::mean;

/// A named, sparse group-by result ordered by key.
///
/// Only groups that received at least one row are present. Counts are
/// flagged `integral` so they surface as integers once merged.
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate<K> {
    pub name: String,
    pub integral: bool,
    pub values: BTreeMap<K, f64>,
}

impl<K: Ord> Aggregate<K> {
    pub fn get(&self, key: &K) -> Option<f64> {
        self.values.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Groups `table` by `group_key` and sums `value` per group.
///
/// Rows whose key is `None` (e.g. an unmatched season) belong to no group.
pub fn aggregate_sum<R, K: Ord>(
    table: &[R],
    group_key: impl Fn(&R) -> Option<K>,
    value: impl Fn(&R) -> f64,
    output_name: &str,
) -> Aggregate<K> {
    let mut values = BTreeMap::new();

    for row in table {
        if let Some(key) = group_key(row) {
            *values.entry(key).or_insert(0.0) += value(row);
        }
    }

    Aggregate {
        name: output_name.to_string(),
        integral: false,
        values,
    }
}

/// Counts the rows of `table` that pass `filter`, per group.
pub fn aggregate_count<R, K: Ord>(
    table: &[R],
    filter: impl Fn(&R) -> bool,
    group_key: impl Fn(&R) -> Option<K>,
    output_name: &str,
) -> Aggregate<K> {
    let mut values = BTreeMap::new();

    for row in table {
        if !filter(row) {
            continue;
        }
        if let Some(key) = group_key(row) {
            *values.entry(key).or_insert(0.0) += 1.0;
        }
    }

    Aggregate {
        name: output_name.to_string(),
        integral: true,
        values,
    }
}

/// Averages `value` per group. Intended for continuous measures that must
/// stay null, not zero, for groups without data.
pub fn aggregate_mean<R, K: Ord>(
    table: &[R],
    group_key: impl Fn(&R) -> Option<K>,
    value: impl Fn(&R) -> f64,
    output_name: &str,
) -> Aggregate<K> {
    let mut series: BTreeMap<K, Vec<f64>> = BTreeMap::new();

    for row in table {
        if let Some(key) = group_key(row) {
            series.entry(key).or_default().push(value(row));
        }
    }

    Aggregate {
        name: output_name.to_string(),
        integral: false,
        values: series.into_iter().map(|(k, s)| (k, mean(&s))).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        driver: u32,
        year: Option<i32>,
        position: u32,
        points: f64,
    }

    fn row(driver: u32, year: Option<i32>, position: u32, points: f64) -> Row {
        Row {
            driver,
            year,
            position,
            points,
        }
    }

    fn season(r: &Row) -> Option<(u32, i32)> {
        r.year.map(|y| (r.driver, y))
    }

    #[test]
    fn test_aggregate_sum_groups_by_key() {
        let rows = vec![
            row(1, Some(2020), 1, 25.0),
            row(1, Some(2020), 2, 18.0),
            row(1, Some(2021), 3, 15.0),
            row(2, Some(2020), 1, 4.5),
        ];
        let agg = aggregate_sum(&rows, season, |r| r.points, "Total Points");

        assert_eq!(agg.name, "Total Points");
        assert!(!agg.integral);
        assert_eq!(agg.len(), 3);
        assert_eq!(agg.get(&(1, 2020)), Some(43.0));
        assert_eq!(agg.get(&(1, 2021)), Some(15.0));
        assert_eq!(agg.get(&(2, 2020)), Some(4.5));
    }

    #[test]
    fn test_aggregate_sum_skips_null_keys() {
        let rows = vec![row(1, None, 1, 25.0), row(1, Some(2020), 1, 10.0)];
        let agg = aggregate_sum(&rows, season, |r| r.points, "Total Points");

        assert_eq!(agg.len(), 1);
        assert_eq!(agg.get(&(1, 2020)), Some(10.0));
    }

    #[test]
    fn test_aggregate_count_is_sparse() {
        let rows = vec![
            row(1, Some(2020), 1, 25.0),
            row(1, Some(2020), 1, 25.0),
            row(2, Some(2020), 5, 10.0),
        ];
        let agg = aggregate_count(&rows, |r| r.position == 1, season, "Races Won");

        assert!(agg.integral);
        assert_eq!(agg.get(&(1, 2020)), Some(2.0));
        assert_eq!(agg.get(&(2, 2020)), None);
    }

    #[test]
    fn test_aggregate_count_empty_input() {
        let rows: Vec<Row> = vec![];
        let agg = aggregate_count(&rows, |_| true, season, "Races Won");
        assert!(agg.is_empty());
    }

    #[test]
    fn test_aggregate_mean() {
        let rows = vec![
            row(1, Some(2020), 0, 90_000.0),
            row(1, Some(2020), 0, 91_000.0),
            row(2, Some(2020), 0, 95_000.0),
        ];
        let agg = aggregate_mean(&rows, |r| Some(r.driver), |r| r.points, "Avg Lap Time");

        assert_eq!(agg.get(&1), Some(90_500.0));
        assert_eq!(agg.get(&2), Some(95_000.0));
        assert_eq!(agg.get(&3), None);
    }

    #[test]
    fn test_keys_are_ordered() {
        let rows = vec![
            row(3, Some(2019), 1, 1.0),
            row(1, Some(2021), 1, 1.0),
            row(1, Some(2020), 1, 1.0),
        ];
        let agg = aggregate_sum(&rows, season, |r| r.points, "Total Points");
        let keys: Vec<_> = agg.values.keys().copied().collect();

        assert_eq!(keys, vec![(1, 2020), (1, 2021), (3, 2019)]);
    }
}
