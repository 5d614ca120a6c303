use crate::error::AnalystError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A stock ticker symbol as the user typed it, trimmed of surrounding
/// whitespace. The server owns symbol validity; the only client-side
/// constraint is that the input is non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ticker(String);

impl Ticker {
    pub fn parse(input: &str) -> Result<Self, AnalystError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(AnalystError::EmptyTicker);
        }
        Ok(Ticker(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Ticker {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisRequest {
    pub ticker: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResponse {
    pub company_name: String,
    pub sector: String,
    /// Keyed by 4-digit year strings; BTreeMap iteration order is the
    /// required ascending column order.
    pub metrics_by_year: BTreeMap<String, YearMetrics>,
    /// Keyed by metric key (e.g. "revenue"), not by section name.
    pub trends: HashMap<String, Trend>,
    /// Rendered in server-supplied order, no re-sorting.
    pub analyses: Vec<YearAnalysis>,
}

/// One fiscal year's metrics, bucketed by financial-statement section.
/// A section absent from the payload deserializes to an empty map.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearMetrics {
    #[serde(default)]
    pub income_statement: HashMap<String, f64>,
    #[serde(default)]
    pub balance_sheet: HashMap<String, f64>,
    #[serde(default)]
    pub cash_flow: HashMap<String, f64>,
    #[serde(default)]
    pub ratios: HashMap<String, f64>,
}

impl YearMetrics {
    /// Fixed-priority first-match lookup: the sections are consulted in
    /// payload order (income statement, balance sheet, cash flow, ratios)
    /// and the first section defining the metric wins.
    pub fn value_of(&self, metric: &str) -> Option<f64> {
        [
            &self.income_statement,
            &self.balance_sheet,
            &self.cash_flow,
            &self.ratios,
        ]
        .into_iter()
        .find_map(|section| section.get(metric).copied())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Flat,
    Unknown,
}

impl From<String> for TrendDirection {
    fn from(value: String) -> Self {
        match value.as_str() {
            "increasing" => TrendDirection::Increasing,
            "decreasing" => TrendDirection::Decreasing,
            "flat" => TrendDirection::Flat,
            _ => TrendDirection::Unknown,
        }
    }
}

impl TrendDirection {
    pub fn label(&self) -> &'static str {
        match self {
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::Flat => "Flat",
            TrendDirection::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trend {
    pub trend: TrendDirection,
    pub avg_growth_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YearAnalysis {
    pub year: String,
    /// Narrative text; may carry HTML markup.
    pub analysis: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticker_parse_trims() {
        let ticker = Ticker::parse("  aapl ").unwrap();
        assert_eq!(ticker.as_str(), "aapl");
    }

    #[test]
    fn test_ticker_parse_rejects_whitespace_only() {
        assert!(matches!(Ticker::parse(""), Err(AnalystError::EmptyTicker)));
        assert!(matches!(
            Ticker::parse("   \t"),
            Err(AnalystError::EmptyTicker)
        ));
    }

    #[test]
    fn test_value_of_scans_sections_in_order() {
        let mut metrics = YearMetrics::default();
        metrics.ratios.insert("roe".to_string(), 0.15);
        metrics
            .income_statement
            .insert("roe".to_string(), 1_000_000.0);

        // income_statement wins over ratios when both define the key
        assert_eq!(metrics.value_of("roe"), Some(1_000_000.0));
        assert_eq!(metrics.value_of("revenue"), None);
    }

    #[test]
    fn test_trend_direction_from_payload_string() {
        let trend: Trend =
            serde_json::from_str(r#"{"trend": "increasing", "avg_growth_rate": 4.2}"#).unwrap();
        assert_eq!(trend.trend, TrendDirection::Increasing);
        assert_eq!(trend.avg_growth_rate, Some(4.2));

        let trend: Trend =
            serde_json::from_str(r#"{"trend": "sideways", "avg_growth_rate": null}"#).unwrap();
        assert_eq!(trend.trend, TrendDirection::Unknown);
        assert_eq!(trend.avg_growth_rate, None);
    }

    #[test]
    fn test_year_metrics_missing_sections_default_empty() {
        let metrics: YearMetrics =
            serde_json::from_str(r#"{"income_statement": {"revenue": 12.0}}"#).unwrap();
        assert_eq!(metrics.value_of("revenue"), Some(12.0));
        assert!(metrics.balance_sheet.is_empty());
    }
}
