use crate::model::{MarketRecord, PriceChange};

pub struct MarketAnalyzer;

impl MarketAnalyzer {
    pub const TOP_COUNT: usize = 5;

    /// Largest market caps first; equal caps keep source order, unknown caps are left out.
    pub fn top_by_market_cap(records: &[MarketRecord], n: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(&str, f64)> = records
            .iter()
            .filter_map(|r| r.market_cap.map(|cap| (r.name.as_str(), cap)))
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
            .into_iter()
            .take(n)
            .map(|(name, cap)| (name.to_string(), cap))
            .collect()
    }

    /// Mean over the records that have a price.
    pub fn average_price(records: &[MarketRecord]) -> Option<f64> {
        let prices: Vec<f64> = records.iter().filter_map(|r| r.current_price).collect();
        if prices.is_empty() {
            return None;
        }
        Some(prices.iter().sum::<f64>() / prices.len() as f64)
    }

    /// First occurrence wins on ties.
    pub fn highest_change(records: &[MarketRecord]) -> Option<PriceChange> {
        Self::extreme_change(records, |candidate, best| candidate > best)
    }

    /// First occurrence wins on ties.
    pub fn lowest_change(records: &[MarketRecord]) -> Option<PriceChange> {
        Self::extreme_change(records, |candidate, best| candidate < best)
    }

    fn extreme_change(
        records: &[MarketRecord],
        better: impl Fn(f64, f64) -> bool,
    ) -> Option<PriceChange> {
        let mut best: Option<(&MarketRecord, f64)> = None;
        for record in records {
            let Some(change) = record.price_change_percentage_24h else {
                continue;
            };
            match best {
                Some((_, b)) if !better(change, b) => {}
                _ => best = Some((record, change)),
            }
        }
        best.map(|(r, percentage)| PriceChange {
            name: r.name.clone(),
            percentage,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64, cap: f64, change: f64) -> MarketRecord {
        MarketRecord {
            name: name.to_string(),
            symbol: name.to_lowercase(),
            current_price: Some(price),
            market_cap: Some(cap),
            total_volume: Some(0.0),
            price_change_percentage_24h: Some(change),
        }
    }

    #[test]
    fn top_five_is_descending_prefix() {
        let caps = [100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0];
        let records: Vec<_> = caps
            .iter()
            .enumerate()
            .map(|(i, &c)| record(&format!("C{}", i), 1.0, c, 0.0))
            .collect();

        let top = MarketAnalyzer::top_by_market_cap(&records, MarketAnalyzer::TOP_COUNT);
        let names: Vec<_> = top.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["C0", "C1", "C2", "C3", "C4"]);
        assert_eq!(top[4].1, 60.0);
    }

    #[test]
    fn top_five_sorts_and_breaks_ties_by_source_order() {
        let records = vec![
            record("A", 1.0, 10.0, 0.0),
            record("B", 1.0, 70.0, 0.0),
            record("C", 1.0, 50.0, 0.0),
            record("D", 1.0, 70.0, 0.0),
            record("E", 1.0, 5.0, 0.0),
            record("F", 1.0, 50.0, 0.0),
            record("G", 1.0, 50.0, 0.0),
        ];
        let top = MarketAnalyzer::top_by_market_cap(&records, 5);
        let names: Vec<_> = top.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["B", "D", "C", "F", "G"]);
    }

    #[test]
    fn top_n_of_short_table_returns_all() {
        let records = vec![record("A", 1.0, 1.0, 0.0), record("B", 1.0, 2.0, 0.0)];
        assert_eq!(MarketAnalyzer::top_by_market_cap(&records, 5).len(), 2);
    }

    #[test]
    fn average_of_one_to_four() {
        let records: Vec<_> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&p| record("X", p, 1.0, 0.0))
            .collect();
        assert_eq!(MarketAnalyzer::average_price(&records), Some(2.5));
        assert_eq!(MarketAnalyzer::average_price(&[]), None);
    }

    #[test]
    fn extremes_of_change() {
        let records = vec![
            record("Up", 1.0, 1.0, 5.0),
            record("Down", 1.0, 1.0, -3.0),
            record("Moon", 1.0, 1.0, 10.0),
            record("Dump", 1.0, 1.0, -7.0),
        ];
        let high = MarketAnalyzer::highest_change(&records).unwrap();
        let low = MarketAnalyzer::lowest_change(&records).unwrap();
        assert_eq!(high.name, "Moon");
        assert_eq!(high.percentage, 10.0);
        assert_eq!(low.name, "Dump");
        assert_eq!(low.percentage, -7.0);
    }

    #[test]
    fn extremes_prefer_first_occurrence() {
        let records = vec![
            record("First", 1.0, 1.0, 4.0),
            record("Second", 1.0, 1.0, 4.0),
            record("Third", 1.0, 1.0, 4.0),
        ];
        assert_eq!(MarketAnalyzer::highest_change(&records).unwrap().name, "First");
        assert_eq!(MarketAnalyzer::lowest_change(&records).unwrap().name, "First");
        assert!(MarketAnalyzer::highest_change(&[]).is_none());
    }

    #[test]
    fn unknown_values_are_skipped() {
        let mut records = vec![
            record("Known", 2.0, 50.0, 1.0),
            record("NoCap", 4.0, 0.0, 9.0),
            record("NoChange", 100.0, 80.0, 0.0),
            record("Low", 6.0, 10.0, -2.0),
        ];
        records[1].market_cap = None;
        records[2].current_price = None;
        records[2].price_change_percentage_24h = None;

        let top = MarketAnalyzer::top_by_market_cap(&records, 5);
        let names: Vec<_> = top.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["NoChange", "Known", "Low"]);
        assert_eq!(MarketAnalyzer::average_price(&records), Some(4.0));
        assert_eq!(MarketAnalyzer::highest_change(&records).unwrap().name, "NoCap");
        assert_eq!(MarketAnalyzer::lowest_change(&records).unwrap().name, "Low");
    }

    #[test]
    fn all_unknown_gives_nothing() {
        let mut r = record("Ghost", 1.0, 1.0, 1.0);
        r.current_price = None;
        r.price_change_percentage_24h = None;
        let records = vec![r];
        assert_eq!(MarketAnalyzer::average_price(&records), None);
        assert!(MarketAnalyzer::highest_change(&records).is_none());
    }
}
