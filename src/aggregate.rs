//! Pure aggregation functions over sequences of observations. Each one is a
//! plain function of its input rows; nothing here touches a data source.

use crate::types::observation::Observation;
use crate::types::results::{
    AggregateResult, MonthlyPrecipitation, StationActivity, TemperatureReading,
};
use std::collections::HashMap;

/// Month key format for the grouped precipitation sum.
const MONTH_FORMAT: &str = "%Y-%m";

/// Computes min/avg/max of observed temperature over `rows`.
///
/// Rows with an absent temperature contribute nothing. If no row carries a
/// temperature, every field of the result is `None` — "no qualifying rows",
/// not a zero temperature, and not an error.
pub fn temperature_stats<'a>(rows: impl IntoIterator<Item = &'a Observation>) -> AggregateResult {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut sum = 0.0;
    let mut count = 0u64;

    for tobs in rows.into_iter().filter_map(|obs| obs.tobs) {
        min = min.min(tobs);
        max = max.max(tobs);
        sum += tobs;
        count += 1;
    }

    if count == 0 {
        return AggregateResult::default();
    }
    AggregateResult {
        min: Some(min),
        avg: Some(sum / count as f64),
        max: Some(max),
    }
}

/// Sums precipitation per calendar month (`YYYY-MM`) of the observation date.
///
/// Absent precipitation counts as zero for the sum only. Months appear in
/// order of first occurrence in the input, one entry per month that has at
/// least one qualifying row; a month with no rows is simply not emitted.
/// Feeding date-sorted input therefore yields chronological groups.
pub fn monthly_precipitation<'a>(
    rows: impl IntoIterator<Item = &'a Observation>,
) -> Vec<MonthlyPrecipitation> {
    let mut groups: Vec<MonthlyPrecipitation> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for obs in rows {
        let month = obs.date.format(MONTH_FORMAT).to_string();
        let amount = obs.prcp.unwrap_or(0.0);
        match index.get(&month) {
            Some(&i) => groups[i].total += amount,
            None => {
                index.insert(month.clone(), groups.len());
                groups.push(MonthlyPrecipitation {
                    month,
                    total: amount,
                });
            }
        }
    }
    groups
}

/// Counts observations per station over the full input.
///
/// Results are sorted by count descending; stations with equal counts appear
/// in ascending code order so the output is deterministic. Each entry keeps
/// the id of the first observation seen for its station.
pub fn station_activity<'a>(rows: impl IntoIterator<Item = &'a Observation>) -> Vec<StationActivity> {
    let mut counts: HashMap<&str, (i64, u64)> = HashMap::new();
    for obs in rows {
        counts
            .entry(obs.station.as_str())
            .and_modify(|(_, count)| *count += 1)
            .or_insert((obs.id, 1));
    }

    let mut activity: Vec<StationActivity> = counts
        .into_iter()
        .map(|(station, (id, count))| StationActivity {
            id,
            station: station.to_string(),
            count,
        })
        .collect();
    activity.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.station.cmp(&b.station)));
    activity
}

/// Projects observations to date/temperature pairs, sorted by date ascending.
pub fn temperature_series<'a>(
    rows: impl IntoIterator<Item = &'a Observation>,
) -> Vec<TemperatureReading> {
    let mut series: Vec<TemperatureReading> = rows
        .into_iter()
        .map(|obs| TemperatureReading {
            date: obs.date,
            tobs: obs.tobs,
        })
        .collect();
    series.sort_by_key(|reading| reading.date);
    series
}

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use crate::filtering::parse_date;

    fn obs(id: i64, station: &str, date: &str, prcp: Option<f64>, tobs: Option<f64>) -> Observation {
        Observation {
            id,
            station: station.to_string(),
            date: parse_date(date).unwrap(),
            prcp,
            tobs,
        }
    }

    #[test]
    fn stats_over_two_days() {
        let rows = vec![
            obs(1, "USC00519281", "2016-08-23", Some(0.0), Some(77.0)),
            obs(2, "USC00519281", "2016-08-24", Some(0.5), Some(78.0)),
        ];
        let stats = temperature_stats(&rows);
        assert_eq!(stats.min, Some(77.0));
        assert_eq!(stats.avg, Some(77.5));
        assert_eq!(stats.max, Some(78.0));
    }

    #[test]
    fn stats_of_empty_set_are_all_none() {
        let rows: Vec<Observation> = Vec::new();
        assert_eq!(temperature_stats(&rows), AggregateResult::default());
    }

    #[test]
    fn stats_skip_absent_temperatures() {
        let rows = vec![
            obs(1, "A", "2016-08-23", None, None),
            obs(2, "A", "2016-08-24", None, Some(70.0)),
        ];
        let stats = temperature_stats(&rows);
        assert_eq!(stats.min, Some(70.0));
        assert_eq!(stats.avg, Some(70.0));
        assert_eq!(stats.max, Some(70.0));
    }

    #[test]
    fn stats_of_all_absent_temperatures_are_all_none() {
        let rows = vec![obs(1, "A", "2016-08-23", Some(1.0), None)];
        assert_eq!(temperature_stats(&rows), AggregateResult::default());
    }

    #[test]
    fn stats_hold_min_avg_max_ordering() {
        let rows = vec![
            obs(1, "A", "2016-08-23", None, Some(65.0)),
            obs(2, "A", "2016-08-24", None, Some(80.0)),
            obs(3, "A", "2016-08-25", None, Some(72.0)),
        ];
        let stats = temperature_stats(&rows);
        assert!(stats.min.unwrap() <= stats.avg.unwrap());
        assert!(stats.avg.unwrap() <= stats.max.unwrap());
    }

    #[test]
    fn monthly_sum_groups_by_month_in_order() {
        let rows = vec![
            obs(1, "A", "2016-08-23", Some(0.0), None),
            obs(2, "A", "2016-08-24", Some(0.5), None),
            obs(3, "A", "2016-09-01", Some(1.25), None),
            obs(4, "A", "2016-09-02", None, None),
        ];
        let groups = monthly_precipitation(&rows);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].month, "2016-08");
        assert_eq!(groups[0].total, 0.5);
        assert_eq!(groups[1].month, "2016-09");
        assert_eq!(groups[1].total, 1.25);
    }

    #[test]
    fn monthly_sum_treats_absent_precipitation_as_zero() {
        let rows = vec![
            obs(1, "A", "2016-08-23", None, None),
            obs(2, "A", "2016-08-24", None, None),
        ];
        let groups = monthly_precipitation(&rows);
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].total, 0.0);
    }

    #[test]
    fn monthly_sum_is_a_partition_of_the_window_total() {
        let rows = vec![
            obs(1, "A", "2016-08-23", Some(0.1), None),
            obs(2, "A", "2016-08-31", Some(0.2), None),
            obs(3, "A", "2016-09-15", None, None),
            obs(4, "A", "2016-10-01", Some(2.0), None),
        ];
        let window_total: f64 = rows.iter().map(|o| o.prcp.unwrap_or(0.0)).sum();
        let grouped_total: f64 = monthly_precipitation(&rows).iter().map(|g| g.total).sum();
        assert!((window_total - grouped_total).abs() < 1e-12);
    }

    #[test]
    fn monthly_sum_of_empty_input_is_empty() {
        let rows: Vec<Observation> = Vec::new();
        assert!(monthly_precipitation(&rows).is_empty());
    }

    #[test]
    fn activity_sorts_by_count_then_station() {
        let rows = vec![
            obs(1, "USC00519397", "2016-08-23", None, None),
            obs(2, "USC00519281", "2016-08-23", None, None),
            obs(3, "USC00519281", "2016-08-24", None, None),
            obs(4, "USC00513117", "2016-08-23", None, None),
        ];
        let activity = station_activity(&rows);
        assert_eq!(activity.len(), 3);
        assert_eq!(activity[0].station, "USC00519281");
        assert_eq!(activity[0].count, 2);
        // tie on count 1 resolved by ascending station code
        assert_eq!(activity[1].station, "USC00513117");
        assert_eq!(activity[2].station, "USC00519397");
    }

    #[test]
    fn activity_keeps_first_observation_id() {
        let rows = vec![
            obs(7, "A", "2016-08-23", None, None),
            obs(9, "A", "2016-08-24", None, None),
        ];
        let activity = station_activity(&rows);
        assert_eq!(activity[0].id, 7);
    }

    #[test]
    fn series_sorts_by_date() {
        let rows = vec![
            obs(1, "A", "2016-08-25", None, Some(75.0)),
            obs(2, "A", "2016-08-23", None, Some(77.0)),
            obs(3, "A", "2016-08-24", None, None),
        ];
        let series = temperature_series(&rows);
        assert_eq!(series[0].date, parse_date("2016-08-23").unwrap());
        assert_eq!(series[0].tobs, Some(77.0));
        assert_eq!(series[1].tobs, None);
        assert_eq!(series[2].tobs, Some(75.0));
    }
}
