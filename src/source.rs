//! The injected data source the query facade reads from. Construction and
//! lifecycle of real storage belong to the surrounding system; the core only
//! ever sees materialized rows behind this trait.

use crate::types::observation::Observation;
use crate::types::station::Station;

/// A read-only supplier of observation and station rows.
///
/// Implementations must hand back a snapshot that is stable for the duration
/// of a query call; the core never mutates what it is given, so any source
/// that is immutable for the process lifetime (or otherwise safe for
/// concurrent reads) satisfies the contract.
pub trait ObservationSource {
    /// All observation rows, in storage order.
    fn observations(&self) -> &[Observation];

    /// All station metadata rows.
    fn stations(&self) -> &[Station];
}

/// An [`ObservationSource`] backed by owned in-memory vectors.
///
/// The usual adapter for fixtures and for callers that materialize rows from
/// a file or table up front.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    observations: Vec<Observation>,
    stations: Vec<Station>,
}

impl MemorySource {
    /// Wraps already-materialized rows.
    pub fn new(observations: Vec<Observation>, stations: Vec<Station>) -> Self {
        Self {
            observations,
            stations,
        }
    }
}

impl ObservationSource for MemorySource {
    fn observations(&self) -> &[Observation] {
        &self.observations
    }

    fn stations(&self) -> &[Station] {
        &self.stations
    }
}
