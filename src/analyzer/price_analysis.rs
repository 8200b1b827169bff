use crate::analyzer::market_indicators::MarketAnalyzer;
use crate::model::{COLUMN_LABELS, MarketTable, ParserError, PriceChange, SummaryReport};
use crate::parser::parse_market_table;
use crate::utils::{format_table, format_usd};
use serde_json::Value;

/// Computes the summary without printing anything. `None` for an empty table.
pub fn summarize(table: &MarketTable) -> Option<SummaryReport> {
    if table.records.is_empty() {
        return None;
    }
    let records = &table.records;
    Some(SummaryReport {
        top_by_market_cap: MarketAnalyzer::top_by_market_cap(records, MarketAnalyzer::TOP_COUNT),
        average_price: MarketAnalyzer::average_price(records),
        record_count: table.len(),
        highest_change: MarketAnalyzer::highest_change(records),
        lowest_change: MarketAnalyzer::lowest_change(records),
    })
}

fn render_change(change: &Option<PriceChange>) -> String {
    match change {
        Some(c) => format!(
            "{}: {} | {}: {:.2}",
            COLUMN_LABELS[0], c.name, COLUMN_LABELS[5], c.percentage
        ),
        None => "n/a".to_string(),
    }
}

pub fn render_report(report: &SummaryReport) -> String {
    let name_label = COLUMN_LABELS[0];
    let cap_label = COLUMN_LABELS[3];

    let rows: Vec<Vec<String>> = report
        .top_by_market_cap
        .iter()
        .map(|(name, cap)| vec![name.clone(), format!("{:.0}", cap)])
        .collect();

    let mut out = String::new();
    out.push_str("\n🔹 Cryptocurrency Market Analysis 🔹\n");
    out.push_str(&format!(
        "Top {} Cryptos by Market Cap:\n",
        report.top_by_market_cap.len()
    ));
    out.push_str(&format_table(&[name_label, cap_label], &rows));
    out.push('\n');
    out.push_str(&format!(
        "\nAverage Price of Top {} Cryptos: {}\n",
        report.record_count,
        report
            .average_price
            .map(|p| format!("${}", format_usd(p)))
            .unwrap_or_else(|| "n/a".to_string())
    ));
    out.push_str(&format!(
        "\nHighest 24h Change: {}\n",
        render_change(&report.highest_change)
    ));
    out.push_str(&format!(
        "\nLowest 24h Change: {}\n",
        render_change(&report.lowest_change)
    ));
    out
}

/// Projects the raw payload, prints the summary, and hands back the full table.
pub fn analyze(raw: &[Value]) -> Result<MarketTable, ParserError> {
    let table = parse_market_table(raw)?;
    if let Some(report) = summarize(&table) {
        println!("{}", render_report(&report));
    }
    Ok(table)
}
