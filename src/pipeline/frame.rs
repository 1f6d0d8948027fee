//! Wide keyed frames built from aggregates, and the flat tables they are
//! projected into before serialization.

use anyhow::{Result, bail};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::pipeline::aggregate::Aggregate;

/// A single value in a frame or table.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Parses a serialized cell back into its most specific type.
    ///
    /// A value is numeric only if [`Cell`]'s `Display` would print it back
    /// unchanged, so text such as `007`, `NaN` or `inf` stays text.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Cell::Null;
        }
        if let Some(n) = raw.parse::<i64>().ok().filter(|n| n.to_string() == raw) {
            return Cell::Int(n);
        }
        let float = raw
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && format!("{v:?}") == raw);
        match float {
            Some(v) => Cell::Float(v),
            None => Cell::Text(raw.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Null => Ok(()),
            Cell::Int(n) => write!(f, "{n}"),
            // Debug keeps the trailing ".0" on whole numbers.
            Cell::Float(v) => write!(f, "{v:?}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

/// Group keys that can be projected into output columns.
pub trait FrameKey {
    fn column_names() -> &'static [&'static str];
    fn cells(&self) -> Vec<Cell>;
}

/// A display-name dimension row, e.g. a driver or constructor.
pub trait NameSource {
    type Id: Copy + Eq + Hash;

    fn id(&self) -> Self::Id;
    fn name_parts(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

/// Rows identified by key, with one cell per row in every value column.
#[derive(Debug, Clone)]
pub struct Frame<K> {
    keys: Vec<K>,
    columns: Vec<Column>,
}

impl<K> Frame<K> {
    pub fn new(keys: Vec<K>) -> Self {
        Self {
            keys,
            columns: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn push_column(&mut self, column: Column) -> Result<()> {
        if self.column(&column.name).is_some() {
            bail!("schema mismatch: duplicate column '{}'", column.name);
        }
        if column.cells.len() != self.keys.len() {
            bail!(
                "schema mismatch: column '{}' has {} cells for {} rows",
                column.name,
                column.cells.len(),
                self.keys.len()
            );
        }
        self.columns.push(column);
        Ok(())
    }

    /// Removes every row whose cell in column `name` is null.
    pub fn drop_nulls(&mut self, name: &str) -> Result<()> {
        let keep: Vec<bool> = match self.column(name) {
            Some(column) => column.cells.iter().map(|c| !c.is_null()).collect(),
            None => bail!("schema mismatch: no column '{name}'"),
        };

        retain_flagged(&mut self.keys, &keep);
        for column in self.columns.iter_mut() {
            retain_flagged(&mut column.cells, &keep);
        }
        Ok(())
    }

    fn column_mut(&mut self, name: &str) -> Result<&mut Column> {
        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(column) => Ok(column),
            None => bail!("schema mismatch: no column '{name}'"),
        }
    }
}

fn retain_flagged<T>(items: &mut Vec<T>, keep: &[bool]) {
    let mut flags = keep.iter().copied();
    items.retain(|_| flags.next().unwrap_or(false));
}

/// A flat, key-less table ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

fn aggregate_cell(value: Option<f64>, integral: bool) -> Cell {
    match value {
        None => Cell::Null,
        Some(v) if integral => Cell::Int(v as i64),
        Some(v) => Cell::Float(v),
    }
}

/// Left-joins `others` onto `base` by key.
///
/// Every base group becomes a row, in base key order; groups missing from
/// another aggregate get a null cell in that column.
pub fn merge_wide<K: Ord + Clone>(
    base: &Aggregate<K>,
    others: &[&Aggregate<K>],
) -> Result<Frame<K>> {
    let keys: Vec<K> = base.values.keys().cloned().collect();
    let mut frame = Frame::new(keys);

    for aggregate in std::iter::once(base).chain(others.iter().copied()) {
        let cells = frame
            .keys
            .iter()
            .map(|key| aggregate_cell(aggregate.get(key), aggregate.integral))
            .collect();
        frame.push_column(Column {
            name: aggregate.name.clone(),
            cells,
        })?;
    }

    Ok(frame)
}

/// Replaces nulls with 0 and truncates to integers in the named columns.
///
/// Only meant for count-like columns; continuous measures keep their nulls.
pub fn zero_fill_int<K>(frame: &mut Frame<K>, columns: &[&str]) -> Result<()> {
    for name in columns {
        let column = frame.column_mut(name)?;
        for cell in column.cells.iter_mut() {
            let filled = match &*cell {
                Cell::Null => Cell::Int(0),
                Cell::Int(n) => Cell::Int(*n),
                Cell::Float(v) => Cell::Int(*v as i64),
                Cell::Text(_) => bail!("schema mismatch: column '{name}' is not numeric"),
            };
            *cell = filled;
        }
    }
    Ok(())
}

/// Left-joins display names onto the frame as a single space-joined column.
///
/// `key` maps each frame key to the name table's identifier. Rows without a
/// matching name get a null.
pub fn attach_name<K, N: NameSource>(
    frame: &mut Frame<K>,
    name_table: &[N],
    key: impl Fn(&K) -> N::Id,
    output_name: &str,
) -> Result<()> {
    let mut names: HashMap<N::Id, String> = HashMap::with_capacity(name_table.len());
    for row in name_table {
        names
            .entry(row.id())
            .or_insert_with(|| row.name_parts().join(" "));
    }

    let cells = frame
        .keys
        .iter()
        .map(|k| match names.get(&key(k)) {
            Some(name) => Cell::Text(name.clone()),
            None => Cell::Null,
        })
        .collect();

    frame.push_column(Column {
        name: output_name.to_string(),
        cells,
    })
}

enum Source<'a> {
    Key(usize),
    Value(&'a Column),
}

/// Projects key and value columns into `column_order`.
pub fn select_and_order<K: FrameKey>(frame: &Frame<K>, column_order: &[&str]) -> Result<Table> {
    let key_names = K::column_names();

    let mut sources = Vec::with_capacity(column_order.len());
    for name in column_order {
        let source = if let Some(i) = key_names.iter().position(|k| k == name) {
            Source::Key(i)
        } else if let Some(column) = frame.column(name) {
            Source::Value(column)
        } else {
            bail!("schema mismatch: no column '{name}'");
        };
        sources.push(source);
    }

    let rows = frame
        .keys
        .iter()
        .enumerate()
        .map(|(row, key)| {
            let key_cells = key.cells();
            sources
                .iter()
                .map(|source| match source {
                    Source::Key(i) => key_cells[*i].clone(),
                    Source::Value(column) => column.cells[row].clone(),
                })
                .collect()
        })
        .collect();

    Ok(Table {
        header: column_order.iter().map(|s| s.to_string()).collect(),
        rows,
    })
}
