//! Metrics-table construction.
//!
//! Builds a presentation-agnostic row list from the response data; the
//! terminal rendering in the parent module turns it into a drawn table.

use crate::core::types::{Trend, TrendDirection, YearMetrics};
use crate::render::format::{display_name, format_value, NOT_AVAILABLE};
use std::collections::{BTreeMap, HashMap};

/// The four fixed metric groups, in display order with fixed member order.
pub const METRIC_GROUPS: [(&str, &[&str]); 4] = [
    (
        "Income Statement",
        &["revenue", "operating_income", "net_income", "ebitda"],
    ),
    (
        "Balance Sheet",
        &[
            "total_assets",
            "total_liabilities",
            "shareholders_equity",
            "book_value_per_share",
        ],
    ),
    (
        "Cash Flow",
        &["operating_cash_flow", "capital_expenditures"],
    ),
    ("Ratios", &["roe", "roic", "interest_coverage"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendStyle {
    Positive,
    Negative,
    Warning,
}

impl TrendStyle {
    pub fn for_direction(direction: TrendDirection) -> Self {
        match direction {
            TrendDirection::Increasing => TrendStyle::Positive,
            TrendDirection::Decreasing => TrendStyle::Negative,
            _ => TrendStyle::Warning,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TrendCell {
    pub label: &'static str,
    pub style: TrendStyle,
    pub avg_growth: String,
}

#[derive(Debug, Clone)]
pub enum MetricsRow {
    /// Section header spanning the full table width.
    Group(&'static str),
    Metric {
        name: String,
        /// One formatted value per year column, in ascending year order.
        values: Vec<String>,
        trend: TrendCell,
    },
}

#[derive(Debug, Clone)]
pub struct MetricsTable {
    /// Ascending year order; lexicographic equals chronological for the
    /// fixed-width year keys.
    pub years: Vec<String>,
    pub rows: Vec<MetricsRow>,
}

pub fn build_metrics_table(
    metrics_by_year: &BTreeMap<String, YearMetrics>,
    trends: &HashMap<String, Trend>,
) -> MetricsTable {
    let years: Vec<String> = metrics_by_year.keys().cloned().collect();
    let mut rows = Vec::new();

    for (group, metrics) in METRIC_GROUPS {
        rows.push(MetricsRow::Group(group));
        for &metric in metrics {
            // Metrics with no trend entry are a deliberate display filter,
            // not an error.
            let Some(trend) = trends.get(metric) else {
                continue;
            };

            let values = years
                .iter()
                .map(|year| {
                    format_value(
                        metrics_by_year
                            .get(year)
                            .and_then(|metrics| metrics.value_of(metric)),
                    )
                })
                .collect();

            let avg_growth = match trend.avg_growth_rate {
                Some(rate) => format!("{:.2}%", rate),
                None => NOT_AVAILABLE.to_string(),
            };

            rows.push(MetricsRow::Metric {
                name: display_name(metric),
                values,
                trend: TrendCell {
                    label: trend.trend.label(),
                    style: TrendStyle::for_direction(trend.trend),
                    avg_growth,
                },
            });
        }
    }

    MetricsTable { years, rows }
}
