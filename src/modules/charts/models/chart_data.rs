use rust_decimal::Decimal;
use serde::Serialize;

/// A single plotted value
///
/// Amounts are emitted as JSON numbers so chart consumers can plot them directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartValue {
    Amount(#[serde(with = "rust_decimal::serde::float")] Decimal),
    Count(u64),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
}

/// One named series with optional style hints
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDataset {
    pub label: String,
    pub data: Vec<ChartValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
}

impl ChartDataset {
    pub fn new(label: impl Into<String>, data: Vec<ChartValue>) -> Self {
        Self {
            label: label.into(),
            data,
            background_color: None,
            border_color: None,
            border_width: None,
            fill: None,
        }
    }

    pub fn colors(mut self, background: impl Into<String>, border: impl Into<String>) -> Self {
        self.background_color = Some(background.into());
        self.border_color = Some(border.into());
        self
    }

    pub fn background(mut self, background: impl Into<String>) -> Self {
        self.background_color = Some(background.into());
        self
    }

    pub fn border_width(mut self, width: u32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn filled(mut self) -> Self {
        self.fill = Some(true);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<ChartDataset>,
    pub chart_type: ChartType,
}

/// Dimension a comparison, distribution or drill-down chart is split by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartCategory {
    Merchant,
    CardType,
    Status,
}

impl ChartCategory {
    /// Case-insensitive; `None` for anything unrecognized so each caller picks its own default
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "merchant" => Some(ChartCategory::Merchant),
            "cardtype" | "card" => Some(ChartCategory::CardType),
            "status" => Some(ChartCategory::Status),
            _ => None,
        }
    }

    /// Drill-down categories take no `card` alias; only `cardtype` filters card types
    pub fn parse_drill_down(raw: &str) -> Option<Self> {
        match raw.to_lowercase().as_str() {
            "merchant" => Some(ChartCategory::Merchant),
            "cardtype" => Some(ChartCategory::CardType),
            "status" => Some(ChartCategory::Status),
            _ => None,
        }
    }
}

/// Metric plotted by the trend line chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineMetric {
    #[default]
    Revenue,
    Volume,
    Average,
}

impl LineMetric {
    /// Unrecognized metrics plot revenue
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "volume" | "count" => LineMetric::Volume,
            "avgamount" | "average" => LineMetric::Average,
            _ => LineMetric::Revenue,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineMetric::Revenue => "Revenue",
            LineMetric::Volume => "Transaction Volume",
            LineMetric::Average => "Average Transaction Amount",
        }
    }
}
