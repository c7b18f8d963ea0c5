//! Filter predicates over observations: station identity and an inclusive
//! date range, plus strict `YYYY-MM-DD` date parsing for boundary input.

use crate::error::ClimateQueryError;
use crate::types::observation::Observation;
use bon::Builder;
use chrono::NaiveDate;

/// The format every date parameter entering the pipeline must use.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Describes a query's selection: an optional station code and an optional
/// date range, both bounds inclusive when present.
///
/// An absent field passes everything, so the default spec matches every
/// observation. The predicates commute; nothing depends on the order the
/// station and date checks run in.
///
/// # Examples
///
/// ```
/// use climate_query::FilterSpec;
/// use chrono::NaiveDate;
///
/// let spec = FilterSpec::builder()
///     .station("USC00519281".to_string())
///     .date_from(NaiveDate::from_ymd_opt(2016, 8, 23).unwrap())
///     .build();
/// assert!(spec.date_to.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Builder)]
pub struct FilterSpec {
    /// Station code to match exactly, or `None` for all stations.
    pub station: Option<String>,
    /// Earliest date to include, or `None` for no lower bound.
    pub date_from: Option<NaiveDate>,
    /// Latest date to include, or `None` for no upper bound.
    pub date_to: Option<NaiveDate>,
}

impl FilterSpec {
    /// Returns whether `obs` satisfies every present predicate.
    ///
    /// A range with `date_from > date_to` matches nothing, by construction
    /// of the inclusive bounds rather than by any special case. An unknown
    /// station code is not an error; it simply matches zero rows.
    pub fn matches(&self, obs: &Observation) -> bool {
        if let Some(station) = &self.station {
            if obs.station != *station {
                return false;
            }
        }
        if let Some(from) = self.date_from {
            if obs.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if obs.date > to {
                return false;
            }
        }
        true
    }

    /// Filters a slice of observations down to the rows matching this spec.
    pub fn filter<'a>(
        &'a self,
        rows: &'a [Observation],
    ) -> impl Iterator<Item = &'a Observation> + 'a {
        rows.iter().filter(move |obs| self.matches(obs))
    }
}

/// Parses a `YYYY-MM-DD` date string.
///
/// # Errors
///
/// Returns [`ClimateQueryError::InvalidDate`] for any string not in
/// `YYYY-MM-DD` form. Malformed input is a caller error and is never
/// silently coerced to a default date.
///
/// # Examples
///
/// ```
/// use climate_query::parse_date;
///
/// assert!(parse_date("2016-08-23").is_ok());
/// assert!(parse_date("08-23-2016").is_err());
/// ```
pub fn parse_date(input: &str) -> Result<NaiveDate, ClimateQueryError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT).map_err(|source| {
        ClimateQueryError::InvalidDate {
            input: input.to_string(),
            source,
        }
    })
}
