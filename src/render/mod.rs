pub mod format;
pub mod table;
pub mod text;

use crate::core::types::{AnalysisResponse, Ticker};
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Attribute, Cell, Color, ContentArrangement, Table};
use table::{build_metrics_table, MetricsRow, MetricsTable, TrendStyle};
use text::clean_analysis_text;

/// One fully rendered analysis: header, metrics table, per-year narrative.
/// Built whole from a response and swapped in atomically; each submit
/// discards the previous report.
#[derive(Debug, Clone)]
pub struct Report {
    pub company_name: String,
    pub ticker: String,
    pub sector: String,
    pub table: MetricsTable,
    pub analyses: Vec<YearSection>,
}

#[derive(Debug, Clone)]
pub struct YearSection {
    pub year: String,
    pub text: String,
}

impl Report {
    pub fn build(ticker: &Ticker, data: &AnalysisResponse) -> Self {
        Report {
            company_name: data.company_name.clone(),
            ticker: ticker.as_str().to_string(),
            sector: data.sector.clone(),
            table: build_metrics_table(&data.metrics_by_year, &data.trends),
            analyses: data
                .analyses
                .iter()
                .map(|a| YearSection {
                    year: a.year.clone(),
                    text: clean_analysis_text(&a.analysis),
                })
                .collect(),
        }
    }

    /// Colored terminal rendering.
    pub fn to_terminal(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{} ({})\n",
            self.company_name.bold(),
            self.ticker.bold()
        ));
        out.push_str(&format!(
            "{}\n\n",
            format!("Sector: {}", self.sector).dimmed()
        ));
        out.push_str(&self.draw_table(true).to_string());
        for section in &self.analyses {
            out.push_str(&format!(
                "\n\n{}\n{}",
                format!("Analysis for {}", section.year).bold().underline(),
                section.text
            ));
        }
        out
    }

    /// Uncolored rendering, used for the clipboard.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("{} ({})\n", self.company_name, self.ticker));
        out.push_str(&format!("Sector: {}\n\n", self.sector));
        out.push_str(&self.draw_table(false).to_string());
        for section in &self.analyses {
            out.push_str(&format!(
                "\n\nAnalysis for {}\n{}",
                section.year, section.text
            ));
        }
        out
    }

    fn draw_table(&self, colored: bool) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        let mut header = vec![Cell::new("Metric")];
        header.extend(self.table.years.iter().map(Cell::new));
        header.push(Cell::new("Trend"));
        table.set_header(header);

        for row in &self.table.rows {
            match row {
                MetricsRow::Group(name) => {
                    let mut cell = Cell::new(name);
                    if colored {
                        cell = cell.add_attribute(Attribute::Bold);
                    }
                    table.add_row(vec![cell]);
                }
                MetricsRow::Metric {
                    name,
                    values,
                    trend,
                } => {
                    let mut cells = vec![Cell::new(name)];
                    cells.extend(values.iter().map(Cell::new));

                    let mut trend_cell = Cell::new(format!(
                        "{}\nAvg Growth: {}",
                        trend.label, trend.avg_growth
                    ));
                    if colored {
                        trend_cell = trend_cell.fg(match trend.style {
                            TrendStyle::Positive => Color::Green,
                            TrendStyle::Negative => Color::Red,
                            TrendStyle::Warning => Color::Yellow,
                        });
                    }
                    cells.push(trend_cell);
                    table.add_row(cells);
                }
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Trend, TrendDirection, YearAnalysis, YearMetrics};
    use std::collections::{BTreeMap, HashMap};

    fn sample_response() -> AnalysisResponse {
        let mut year = YearMetrics::default();
        year.income_statement
            .insert("revenue".to_string(), 5_000_000.0);

        let mut metrics_by_year = BTreeMap::new();
        metrics_by_year.insert("2022".to_string(), year);

        let mut trends = HashMap::new();
        trends.insert(
            "revenue".to_string(),
            Trend {
                trend: TrendDirection::Increasing,
                avg_growth_rate: Some(4.0),
            },
        );

        AnalysisResponse {
            company_name: "Acme Corp".to_string(),
            sector: "Industrials".to_string(),
            metrics_by_year,
            trends,
            analyses: vec![YearAnalysis {
                year: "2022".to_string(),
                analysis: "<p>Revenue grew <b>strongly</b>.</p>".to_string(),
            }],
        }
    }

    #[test]
    fn test_plain_text_report() {
        let ticker = Ticker::parse("ACME").unwrap();
        let report = Report::build(&ticker, &sample_response());
        let text = report.to_plain_text();

        assert!(text.starts_with("Acme Corp (ACME)\nSector: Industrials\n"));
        assert!(text.contains("Revenue"));
        assert!(text.contains("$5M"));
        assert!(text.contains("Avg Growth: 4.00%"));
        assert!(text.contains("Analysis for 2022\nRevenue grew strongly."));
    }

    #[test]
    fn test_analyses_keep_server_order() {
        let mut data = sample_response();
        data.analyses = vec![
            YearAnalysis {
                year: "2023".to_string(),
                analysis: "Later year first.".to_string(),
            },
            YearAnalysis {
                year: "2021".to_string(),
                analysis: "Earlier year second.".to_string(),
            },
        ];
        let ticker = Ticker::parse("ACME").unwrap();
        let report = Report::build(&ticker, &data);

        let years: Vec<&str> = report.analyses.iter().map(|s| s.year.as_str()).collect();
        assert_eq!(years, vec!["2023", "2021"]);
    }
}
