pub mod chart_data;

pub use chart_data::{ChartCategory, ChartData, ChartDataset, ChartType, ChartValue, LineMetric};
