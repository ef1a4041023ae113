//! Dashboard aggregates: defect distribution, production performance,
//! batch compliance counts, quality trends and metric trends.
//!
//! Pure logic. Callers fetch rows and pass the relevant columns in.

use std::collections::HashMap;

use chrono::{Datelike, Days, Months};
use serde::{Deserialize, Serialize};

use crate::batch::{failure_rate, passing_rate};
use crate::compliance::summarize;
use crate::defect::{defect_type_label, VALID_DEFECT_TYPES};
use crate::types::Date;

// ---------------------------------------------------------------------------
// Defect distribution
// ---------------------------------------------------------------------------

/// Number of defects of one type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DefectTypeCount {
    pub defect_type: String,
    pub label: String,
    pub count: usize,
}

/// Count defects by type, in canonical type order.
///
/// Types with no defects are omitted, as are unknown type strings.
pub fn defect_counts_by_type(types: &[&str]) -> Vec<DefectTypeCount> {
    VALID_DEFECT_TYPES
        .iter()
        .filter_map(|&known| {
            let count = types.iter().filter(|&&t| t == known).count();
            (count > 0).then(|| DefectTypeCount {
                defect_type: known.to_string(),
                label: defect_type_label(known),
                count,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Production performance
// ---------------------------------------------------------------------------

/// Passing and failure rate for one batch, as charted on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceEntry {
    pub batch_id: String,
    pub name: String,
    pub passing_rate: f64,
    pub failure_rate: f64,
}

/// Build a performance entry. A batch without a rate charts as 0% passing.
pub fn performance_entry(batch_id: &str, name: &str, passing_rate: Option<f64>) -> PerformanceEntry {
    PerformanceEntry {
        batch_id: batch_id.to_string(),
        name: name.to_string(),
        passing_rate: passing_rate.unwrap_or(0.0),
        failure_rate: failure_rate(passing_rate),
    }
}

/// Mean of the known passing rates, rounded to one decimal.
///
/// Batches without a rate are skipped. Returns `None` if no batch has one.
pub fn average_passing_rate(rates: &[Option<f64>]) -> Option<f64> {
    let known: Vec<f64> = rates.iter().flatten().copied().collect();
    if known.is_empty() {
        return None;
    }
    let mean = known.iter().sum::<f64>() / known.len() as f64;
    Some(round1(mean))
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

// ---------------------------------------------------------------------------
// Batch compliance counts
// ---------------------------------------------------------------------------

/// How many batches are ISO compliant and how many are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplianceCounts {
    pub compliant: usize,
    pub non_compliant: usize,
}

/// Classify each of `batch_ids` by the statuses recorded against it.
///
/// `rows` are `(batch_id, status)` pairs. Rows for batches not in
/// `batch_ids` are ignored and a batch without rows is compliant, so the two
/// counts always sum to `batch_ids.len()`.
pub fn batch_compliance_counts(batch_ids: &[&str], rows: &[(&str, &str)]) -> ComplianceCounts {
    let mut by_batch: HashMap<&str, Vec<&str>> = HashMap::new();
    for &(batch_id, status) in rows {
        by_batch.entry(batch_id).or_default().push(status);
    }

    let non_compliant = batch_ids
        .iter()
        .filter(|id| {
            by_batch
                .get(*id)
                .is_some_and(|statuses| !summarize(statuses).is_compliant)
        })
        .count();

    ComplianceCounts {
        compliant: batch_ids.len() - non_compliant,
        non_compliant,
    }
}

// ---------------------------------------------------------------------------
// Quality trends
// ---------------------------------------------------------------------------

/// Period charted by the quality trends view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendRange {
    Week,
    #[default]
    Month,
    Quarter,
    /// Twelve monthly buckets instead of daily ones.
    Year,
}

impl TrendRange {
    /// Number of buckets in the chart.
    pub fn buckets(self) -> u32 {
        match self {
            TrendRange::Week => 7,
            TrendRange::Month => 30,
            TrendRange::Quarter => 90,
            TrendRange::Year => 12,
        }
    }

    /// First day covered by a chart whose last bucket contains `today`.
    pub fn start(self, today: Date) -> Date {
        match self {
            TrendRange::Year => month_start(today)
                .checked_sub_months(Months::new(self.buckets() - 1))
                .unwrap_or(Date::MIN),
            _ => today
                .checked_sub_days(Days::new(u64::from(self.buckets() - 1)))
                .unwrap_or(Date::MIN),
        }
    }

    fn bucket_of(self, day: Date) -> Date {
        match self {
            TrendRange::Year => month_start(day),
            _ => day,
        }
    }

    fn label(self, bucket: Date) -> String {
        match self {
            TrendRange::Year => bucket.format("%Y-%m").to_string(),
            _ => bucket.format("%Y-%m-%d").to_string(),
        }
    }
}

fn month_start(day: Date) -> Date {
    day.with_day(1).unwrap_or(day)
}

/// One recorded measurement, reduced to what the trend chart needs.
#[derive(Debug, Clone, Copy)]
pub struct TrendSample<'a> {
    pub day: Date,
    pub batch_id: &'a str,
    pub status: &'a str,
}

/// Quality figures for one day (or month, for [`TrendRange::Year`]).
///
/// Rates are percentages rounded to one decimal and are `null` for buckets
/// without measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub start: Date,
    pub measurements: usize,
    /// Share of measurements that passed; warnings do not count.
    pub pass_rate: Option<f64>,
    pub defect_rate: Option<f64>,
    /// Share of batches measured in the bucket with no failing measurement.
    pub iso_compliance: Option<f64>,
}

/// Bucket measurements into the chart for `range` ending on `today`.
///
/// Always returns [`TrendRange::buckets`] points, oldest first. Samples
/// outside the charted period are ignored.
pub fn quality_trends(range: TrendRange, today: Date, samples: &[TrendSample<'_>]) -> Vec<TrendPoint> {
    let mut by_bucket: HashMap<Date, Vec<&TrendSample<'_>>> = HashMap::new();
    for sample in samples {
        by_bucket
            .entry(range.bucket_of(sample.day))
            .or_default()
            .push(sample);
    }

    let start = range.start(today);
    (0..range.buckets())
        .filter_map(|i| match range {
            TrendRange::Year => start.checked_add_months(Months::new(i)),
            _ => start.checked_add_days(Days::new(u64::from(i))),
        })
        .map(|bucket| {
            let in_bucket = by_bucket.get(&bucket).map(Vec::as_slice).unwrap_or_default();
            trend_point(range.label(bucket), bucket, in_bucket)
        })
        .collect()
}

fn trend_point(label: String, start: Date, samples: &[&TrendSample<'_>]) -> TrendPoint {
    let statuses: Vec<&str> = samples.iter().map(|s| s.status).collect();
    let pass_rate = passing_rate(&summarize(&statuses));

    let mut batch_ids: Vec<&str> = samples.iter().map(|s| s.batch_id).collect();
    batch_ids.sort_unstable();
    batch_ids.dedup();
    let rows: Vec<(&str, &str)> = samples.iter().map(|s| (s.batch_id, s.status)).collect();
    let counts = batch_compliance_counts(&batch_ids, &rows);
    let iso_compliance = (!batch_ids.is_empty())
        .then(|| round1(counts.compliant as f64 / batch_ids.len() as f64 * 100.0));

    TrendPoint {
        label,
        start,
        measurements: samples.len(),
        pass_rate,
        defect_rate: pass_rate.map(|p| round1(100.0 - p)),
        iso_compliance,
    }
}

// ---------------------------------------------------------------------------
// Metric trends
// ---------------------------------------------------------------------------

/// Whether a metric moved in the desired direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricTrend {
    Positive,
    Negative,
    Neutral,
}

/// A dashboard metric with its change against the previous period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityMetric {
    pub name: String,
    pub value: f64,
    pub previous_value: Option<f64>,
    pub change: Option<f64>,
    pub status: MetricTrend,
    pub unit: Option<String>,
}

/// Compute the change between `value` and `previous` and classify it.
///
/// For metrics where lower is better (defect counts, failure rates) pass
/// `higher_is_better = false`. Without a previous value the trend is neutral.
pub fn metric_trend(value: f64, previous: Option<f64>, higher_is_better: bool) -> (Option<f64>, MetricTrend) {
    let Some(previous) = previous else {
        return (None, MetricTrend::Neutral);
    };
    let change = ((value - previous) * 100.0).round() / 100.0;
    let trend = if change == 0.0 {
        MetricTrend::Neutral
    } else if (change > 0.0) == higher_is_better {
        MetricTrend::Positive
    } else {
        MetricTrend::Negative
    };
    (Some(change), trend)
}

/// Build a [`QualityMetric`] from current and previous values.
pub fn quality_metric(
    name: &str,
    value: f64,
    previous: Option<f64>,
    higher_is_better: bool,
    unit: Option<&str>,
) -> QualityMetric {
    let (change, status) = metric_trend(value, previous, higher_is_better);
    QualityMetric {
        name: name.to_string(),
        value,
        previous_value: previous,
        change,
        status,
        unit: unit.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
