//! This module provides the main entry point for querying the climate data
//! set. It composes the filter predicates, aggregators, and tabular
//! projection into the five named query operations a boundary layer calls.

use crate::aggregate::{monthly_precipitation, station_activity, temperature_series, temperature_stats};
use crate::error::ClimateQueryError;
use crate::filtering::{parse_date, FilterSpec};
use crate::source::ObservationSource;
use crate::types::observation::Observation;
use crate::types::results::{
    AggregateResult, MonthlyPrecipitation, StationActivity, TemperatureReading,
};
use crate::types::station::Station;
use log::debug;

/// The station code the original data set treats as its default scope.
///
/// Several queries are conventionally run against this single station; the
/// facade never assumes it, so callers pass it explicitly where they want
/// the conventional scope.
pub const REFERENCE_STATION: &str = "USC00519281";

/// The query facade over an injected [`ObservationSource`].
///
/// Every operation is a pure function of its parameters plus the source
/// snapshot: nothing is cached, nothing is mutated, and calling an operation
/// twice with the same parameters against an unchanged source yields
/// identical results. Date parameters are `YYYY-MM-DD` strings and are
/// validated before any rows are touched.
///
/// # Examples
///
/// ```
/// use climate_query::{ClimateQuery, MemorySource, Observation, parse_date};
///
/// let source = MemorySource::new(
///     vec![
///         Observation {
///             id: 1,
///             station: "USC00519281".to_string(),
///             date: parse_date("2016-08-23").unwrap(),
///             prcp: Some(0.0),
///             tobs: Some(77.0),
///         },
///         Observation {
///             id: 2,
///             station: "USC00519281".to_string(),
///             date: parse_date("2016-08-24").unwrap(),
///             prcp: Some(0.5),
///             tobs: Some(78.0),
///         },
///     ],
///     vec![],
/// );
/// let query = ClimateQuery::new(source);
///
/// let summary = query
///     .temperature_summary(Some("USC00519281"), "2016-08-23")
///     .unwrap();
/// assert_eq!(summary.avg, Some(77.5));
/// ```
pub struct ClimateQuery<S> {
    source: S,
}

impl<S: ObservationSource> ClimateQuery<S> {
    /// Creates a facade over the given source.
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// The station metadata rows of the underlying source.
    pub fn stations(&self) -> &[Station] {
        self.source.stations()
    }

    /// Returns the observations matching `spec`, sorted by date ascending.
    ///
    /// This is the identity projection: rows pass through unchanged, ready
    /// for tabular output or further aggregation.
    pub fn observations(&self, spec: &FilterSpec) -> Vec<Observation> {
        let all = self.source.observations();
        let mut rows: Vec<Observation> = spec.filter(all).cloned().collect();
        rows.sort_by_key(|obs| obs.date);
        debug!("filter {:?} matched {} of {} observations", spec, rows.len(), all.len());
        rows
    }

    /// Min/avg/max of observed temperature from `date_from` onward.
    ///
    /// # Arguments
    ///
    /// * `station` - Station code to scope to, or `None` for all stations.
    /// * `date_from` - Inclusive lower date bound, `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateQueryError::InvalidDate`] if `date_from` is
    /// malformed; the error is raised before any rows are read. A filter
    /// that matches no rows is not an error and yields the all-`None`
    /// aggregate.
    pub fn temperature_summary(
        &self,
        station: Option<&str>,
        date_from: &str,
    ) -> Result<AggregateResult, ClimateQueryError> {
        let spec = FilterSpec::builder()
            .maybe_station(station.map(str::to_string))
            .date_from(parse_date(date_from)?)
            .build();
        Ok(temperature_stats(spec.filter(self.source.observations())))
    }

    /// Min/avg/max of observed temperature between two dates, both inclusive.
    ///
    /// A range with `date_from > date_to` matches no rows and yields the
    /// all-`None` aggregate rather than an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateQueryError::InvalidDate`] if either date is
    /// malformed, before any rows are read.
    pub fn temperature_summary_range(
        &self,
        station: Option<&str>,
        date_from: &str,
        date_to: &str,
    ) -> Result<AggregateResult, ClimateQueryError> {
        let spec = FilterSpec::builder()
            .maybe_station(station.map(str::to_string))
            .date_from(parse_date(date_from)?)
            .date_to(parse_date(date_to)?)
            .build();
        Ok(temperature_stats(spec.filter(self.source.observations())))
    }

    /// Observation counts per station, most active first.
    ///
    /// Always global: this operation takes no filter parameters and reports
    /// activity across the whole source, matching the behavior of the data
    /// set's original reporting endpoint. Ties on count are broken by
    /// ascending station code so the order is deterministic.
    pub fn station_activity(&self) -> Vec<StationActivity> {
        let activity = station_activity(self.source.observations());
        debug!("station activity over {} stations", activity.len());
        activity
    }

    /// Monthly precipitation totals from `date_from` onward.
    ///
    /// Rows are grouped by calendar month (`YYYY-MM`), absent precipitation
    /// summed as zero, groups emitted in chronological order. Months with no
    /// qualifying rows produce no entry.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateQueryError::InvalidDate`] if `date_from` is
    /// malformed, before any rows are read.
    pub fn precipitation_monthly(
        &self,
        station: Option<&str>,
        date_from: &str,
    ) -> Result<Vec<MonthlyPrecipitation>, ClimateQueryError> {
        let spec = FilterSpec::builder()
            .maybe_station(station.map(str::to_string))
            .date_from(parse_date(date_from)?)
            .build();
        // Group over date-sorted rows so months come out chronologically.
        Ok(monthly_precipitation(&self.observations(&spec)))
    }

    /// The date/temperature series from `date_from` onward, date ascending.
    ///
    /// Days with an absent temperature stay in the series with a `None`
    /// reading; they are never dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ClimateQueryError::InvalidDate`] if `date_from` is
    /// malformed, before any rows are read.
    pub fn temperature_series(
        &self,
        station: Option<&str>,
        date_from: &str,
    ) -> Result<Vec<TemperatureReading>, ClimateQueryError> {
        let spec = FilterSpec::builder()
            .maybe_station(station.map(str::to_string))
            .date_from(parse_date(date_from)?)
            .build();
        Ok(temperature_series(spec.filter(self.source.observations())))
    }
}
