use rust_decimal::Decimal;

use crate::core::aggregate::{group_ordered, AggregateGroup};
use crate::core::GroupBy;
use crate::modules::charts::models::{
    ChartCategory, ChartData, ChartDataset, ChartType, ChartValue, LineMetric,
};
use crate::modules::transactions::models::TransactionRecord;

const LINE_BORDER: &str = "rgb(75, 192, 192)";
const LINE_BACKGROUND: &str = "rgba(75, 192, 192, 0.2)";

const BLUE: &str = "rgb(54, 162, 235)";
const RED: &str = "rgb(255, 99, 132)";

/// Merchants shown on the merchant comparison bar chart
pub const BAR_MERCHANT_LIMIT: usize = 10;

/// Merchants shown on the merchant distribution pie chart
pub const PIE_MERCHANT_LIMIT: usize = 5;

const PIE_PALETTE: [&str; 5] = [
    "rgba(255, 99, 132, 0.8)",
    "rgba(54, 162, 235, 0.8)",
    "rgba(255, 206, 86, 0.8)",
    "rgba(75, 192, 192, 0.8)",
    "rgba(153, 102, 255, 0.8)",
];

type Groups<'a> = Vec<AggregateGroup<'a, String>>;

fn labels(groups: &Groups<'_>) -> Vec<String> {
    groups.iter().map(|group| group.key.clone()).collect()
}

fn revenues(groups: &Groups<'_>) -> Vec<ChartValue> {
    groups
        .iter()
        .map(|group| ChartValue::Amount(group.total_amount()))
        .collect()
}

fn counts(groups: &Groups<'_>) -> Vec<ChartValue> {
    groups
        .iter()
        .map(|group| ChartValue::Count(group.count()))
        .collect()
}

fn group_by_category(records: &[TransactionRecord], category: ChartCategory) -> Groups<'_> {
    match category {
        ChartCategory::Merchant => group_ordered(records, |record| record.merchant_id.clone()),
        ChartCategory::CardType => group_ordered(records, |record| record.card_type.clone()),
        ChartCategory::Status => group_ordered(records, |record| record.status.clone()),
    }
}

/// Merchant groups by descending revenue, first-seen order among ties
fn top_merchants(records: &[TransactionRecord], limit: usize) -> Groups<'_> {
    let mut groups: Vec<(Decimal, AggregateGroup<'_, String>)> =
        group_ordered(records, |record| record.merchant_id.clone())
            .into_iter()
            .map(|group| (group.total_amount(), group))
            .collect();

    groups.sort_by(|a, b| b.0.cmp(&a.0));
    groups.truncate(limit);
    groups.into_iter().map(|(_, group)| group).collect()
}

/// Single-series trend line over period buckets
pub fn line_chart(records: &[TransactionRecord], metric: LineMetric, group_by: GroupBy) -> ChartData {
    let groups = group_ordered(records, |record| group_by.bucket_key(record.txn_date));

    let data = match metric {
        LineMetric::Revenue => revenues(&groups),
        LineMetric::Volume => counts(&groups),
        LineMetric::Average => groups
            .iter()
            .map(|group| ChartValue::Amount(group.average_amount()))
            .collect(),
    };

    ChartData {
        labels: labels(&groups),
        datasets: vec![ChartDataset::new(metric.label(), data)
            .colors(LINE_BACKGROUND, LINE_BORDER)
            .border_width(2)
            .filled()],
        chart_type: ChartType::Line,
    }
}

/// Revenue and count bars per category
///
/// Merchants are limited to the top ten by revenue. Status comparisons carry only the
/// count series.
pub fn bar_chart(records: &[TransactionRecord], compare_by: ChartCategory) -> ChartData {
    let groups = match compare_by {
        ChartCategory::Merchant => top_merchants(records, BAR_MERCHANT_LIMIT),
        other => group_by_category(records, other),
    };

    let revenue_data = match compare_by {
        ChartCategory::Status => Vec::new(),
        _ => revenues(&groups),
    };

    let mut datasets = Vec::with_capacity(2);
    if !revenue_data.is_empty() {
        datasets.push(
            ChartDataset::new("Revenue", revenue_data)
                .colors("rgba(54, 162, 235, 0.8)", BLUE)
                .border_width(1),
        );
    }
    datasets.push(
        ChartDataset::new("Transaction Count", counts(&groups))
            .colors("rgba(255, 99, 132, 0.8)", RED)
            .border_width(1),
    );

    ChartData {
        labels: labels(&groups),
        datasets,
        chart_type: ChartType::Bar,
    }
}

/// Share-of-total pie
///
/// Merchants are the top five by summed amount and plotted by amount; card types and
/// statuses are plotted by count.
pub fn pie_chart(records: &[TransactionRecord], distribute_by: ChartCategory) -> ChartData {
    let (groups, data) = match distribute_by {
        ChartCategory::Merchant => {
            let groups = top_merchants(records, PIE_MERCHANT_LIMIT);
            let data = revenues(&groups);
            (groups, data)
        }
        other => {
            let groups = group_by_category(records, other);
            let data = counts(&groups);
            (groups, data)
        }
    };

    ChartData {
        labels: labels(&groups),
        datasets: vec![
            ChartDataset::new("Distribution", data).background(format!("[{}]", PIE_PALETTE.join(", ")))
        ],
        chart_type: ChartType::Pie,
    }
}

/// Daily revenue and count lines for an already-scoped record set
pub fn drill_down_chart(records: &[TransactionRecord]) -> ChartData {
    let groups = group_ordered(records, |record| record.txn_date.format("%Y-%m-%d").to_string());

    ChartData {
        labels: labels(&groups),
        datasets: vec![
            ChartDataset::new("Revenue", revenues(&groups))
                .colors("rgba(54, 162, 235, 0.2)", BLUE)
                .border_width(2),
            ChartDataset::new("Count", counts(&groups))
                .colors("rgba(255, 99, 132, 0.2)", RED)
                .border_width(2),
        ],
        chart_type: ChartType::Line,
    }
}
