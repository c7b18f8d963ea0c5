use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's recorded weather at one station.
///
/// Observations are read-only projections of persisted rows: the pipeline
/// filters, aggregates, and reshapes them but never creates or mutates them.
/// Either measurement may be absent for a given day.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Observation {
    /// Row identifier from the backing store.
    pub id: i64,
    /// Station code the observation was recorded at (e.g. "USC00519281").
    pub station: String,
    /// Calendar date of the observation.
    pub date: NaiveDate,
    /// Precipitation recorded that day, if any. // prcp (total inches)
    pub prcp: Option<f64>,
    /// Temperature observed that day, if any. // tobs (degrees F)
    pub tobs: Option<f64>,
}
