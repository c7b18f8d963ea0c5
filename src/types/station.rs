use serde::{Deserialize, Serialize};

/// A fixed weather-recording site and its geographic metadata.
///
/// Stations are immutable reference data. The pipeline never checks
/// referential integrity between observations and stations; an observation
/// whose code matches no known station simply matches no station filter.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Station {
    /// Row identifier from the backing store.
    pub id: i64,
    /// The unique station code (e.g. "USC00519281").
    pub station: String,
    /// Human-readable site name.
    pub name: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Elevation above sea level in meters.
    pub elevation: f64,
}
