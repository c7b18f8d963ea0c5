//! Tabular projection of query results: an ordered set of named columns with
//! fixed-width rows, convertible into the two record-mapping orientations the
//! boundary layer serializes (index-keyed rows and column-keyed series).

use crate::types::observation::Observation;
use crate::types::results::{
    AggregateResult, MonthlyPrecipitation, StationActivity, TemperatureReading,
};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// A row-oriented table: ordered columns, ordered rows.
///
/// Every row has a value slot for every column; a missing numeric is
/// `Value::Null`, never dropped from the row. An empty result keeps its full
/// column header set with zero rows. Column order is decided by the producing
/// aggregator (see [`ToTable`]), not by the input's field order.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Table {
    /// Ordered column names.
    pub columns: Vec<String>,
    /// Ordered rows, each aligned to `columns`.
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates a table from column names and pre-aligned rows.
    pub fn new(columns: &[&str], rows: Vec<Vec<Value>>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == columns.len()));
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows. The column set is never empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Converts each row to a column-name → value mapping, addressable by
    /// row position.
    pub fn to_records(&self) -> Vec<HashMap<String, Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .cloned()
                    .zip(row.iter().cloned())
                    .collect()
            })
            .collect()
    }

    /// Converts the table to a column-name → values mapping, each value list
    /// indexed by row position.
    ///
    /// For a single-row table (a scalar aggregate result) this is directly
    /// addressable by column name.
    pub fn to_columns(&self) -> HashMap<String, Vec<Value>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let values = self.rows.iter().map(|row| row[i].clone()).collect();
                (column.clone(), values)
            })
            .collect()
    }
}

/// Conversion of a result type into its tabular shape.
///
/// Each implementation fixes the column names and their order for that
/// result, replacing the internal field names with the ones downstream
/// consumers see (the grouped sum's `group_key`/`total` become
/// `month`/`precipitation`).
pub trait ToTable {
    fn to_table(&self) -> Table;
}

impl ToTable for AggregateResult {
    fn to_table(&self) -> Table {
        Table::new(
            &["min", "avg", "max"],
            vec![vec![
                Value::from(self.min),
                Value::from(self.avg),
                Value::from(self.max),
            ]],
        )
    }
}

impl ToTable for [MonthlyPrecipitation] {
    fn to_table(&self) -> Table {
        let rows = self
            .iter()
            .map(|group| vec![Value::from(group.month.clone()), Value::from(group.total)])
            .collect();
        Table::new(&["month", "precipitation"], rows)
    }
}

impl ToTable for [StationActivity] {
    fn to_table(&self) -> Table {
        let rows = self
            .iter()
            .map(|entry| {
                vec![
                    Value::from(entry.id),
                    Value::from(entry.station.clone()),
                    Value::from(entry.count),
                ]
            })
            .collect();
        Table::new(&["id", "station", "count"], rows)
    }
}

impl ToTable for [TemperatureReading] {
    fn to_table(&self) -> Table {
        let rows = self
            .iter()
            .map(|reading| vec![Value::from(reading.date.to_string()), Value::from(reading.tobs)])
            .collect();
        Table::new(&["date", "tobs"], rows)
    }
}

impl ToTable for [Observation] {
    fn to_table(&self) -> Table {
        let rows = self
            .iter()
            .map(|obs| {
                vec![
                    Value::from(obs.id),
                    Value::from(obs.station.clone()),
                    Value::from(obs.date.to_string()),
                    Value::from(obs.prcp),
                    Value::from(obs.tobs),
                ]
            })
            .collect();
        Table::new(&["id", "station", "date", "prcp", "tobs"], rows)
    }
}
