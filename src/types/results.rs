//! Result row types produced by the aggregators. All of them derive `Serialize`
//! so a boundary layer can hand them straight to its serializer of choice.

use chrono::NaiveDate;
use serde::Serialize;

/// Min/avg/max of observed temperature over a filtered set.
///
/// All three fields are `None` when the filtered set holds no temperature
/// values at all: "no qualifying rows" is not the same thing as a zero
/// temperature, so the empty case never fabricates a number.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Default)]
pub struct AggregateResult {
    /// Lowest observed temperature, if any row had one.
    pub min: Option<f64>,
    /// Arithmetic mean of the observed temperatures, if any row had one.
    pub avg: Option<f64>,
    /// Highest observed temperature, if any row had one.
    pub max: Option<f64>,
}

/// Total precipitation for one calendar month of the filtered window.
///
/// Months with no qualifying rows produce no entry; a day with absent
/// precipitation contributes zero to its month's total.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthlyPrecipitation {
    /// Month key in `YYYY-MM` form.
    pub month: String,
    /// Summed precipitation for that month.
    pub total: f64,
}

/// Observation count for one station, with a representative row id.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct StationActivity {
    /// Id of the first observation seen for this station.
    pub id: i64,
    /// Station code.
    pub station: String,
    /// Number of observations recorded at the station.
    pub count: u64,
}

/// One date/temperature pair of a temperature series, ordered by date.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct TemperatureReading {
    /// Calendar date of the reading.
    pub date: NaiveDate,
    /// Temperature observed that day, if any. // tobs
    pub tobs: Option<f64>,
}
