//! Monthly spend aggregation and plain-text report rendering.

use crate::record::{CardSource, Period, Transaction};
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use std::fmt::Write as _;

/// Sum amounts grouped by billing period and card.
pub fn totals_by_period_and_card(
    records: &[Transaction],
) -> BTreeMap<(Period, CardSource), Decimal> {
    let mut totals: BTreeMap<(Period, CardSource), Decimal> = BTreeMap::new();
    for t in records {
        *totals.entry((t.period, t.source)).or_insert(Decimal::ZERO) += t.amount;
    }
    totals
}

/// Sum amounts grouped by billing period across all cards.
pub fn totals_by_period(records: &[Transaction]) -> BTreeMap<Period, Decimal> {
    let mut totals: BTreeMap<Period, Decimal> = BTreeMap::new();
    for t in records {
        *totals.entry(t.period).or_insert(Decimal::ZERO) += t.amount;
    }
    totals
}

/// Render the two-section monthly report (per-card, then overall).
pub fn render_report(records: &[Transaction]) -> String {
    let mut out = String::new();

    out.push_str("=== Monthly spend by card ===\n");
    for ((period, source), total) in totals_by_period_and_card(records) {
        let _ = writeln!(
            out,
            "{period}  {:<8} {:>12}",
            source.as_str(),
            total.round_dp(2).to_string()
        );
    }

    out.push_str("\n=== Total spend by month ===\n");
    for (period, total) in totals_by_period(records) {
        let _ = writeln!(out, "{period}  {:>12}", total.round_dp(2).to_string());
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(month: u32, day: u32, cents: i64, source: CardSource) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2025, month, day).unwrap();
        Transaction::new(date, "mercado", Decimal::new(cents, 2), source)
    }

    #[test]
    fn test_totals_group_by_period_and_card() {
        let records = vec![
            txn(3, 5, 2350, CardSource::PicPay),
            txn(3, 9, 1000, CardSource::PicPay),
            txn(3, 12, 4590, CardSource::Nubank),
            txn(4, 1, 500, CardSource::Nubank),
        ];

        let by_card = totals_by_period_and_card(&records);
        let march = Period { year: 2025, month: 3 };
        assert_eq!(by_card[&(march, CardSource::PicPay)], Decimal::new(3350, 2));
        assert_eq!(by_card[&(march, CardSource::Nubank)], Decimal::new(4590, 2));

        let by_month = totals_by_period(&records);
        assert_eq!(by_month[&march], Decimal::new(7940, 2));
        assert_eq!(by_month[&Period { year: 2025, month: 4 }], Decimal::new(500, 2));
    }

    #[test]
    fn test_totals_are_exact_decimals() {
        // 0.10 + 0.20 must be exactly 0.30, not a float approximation.
        let records = vec![
            txn(3, 1, 10, CardSource::Nubank),
            txn(3, 2, 20, CardSource::Nubank),
        ];
        let by_month = totals_by_period(&records);
        assert_eq!(by_month[&Period { year: 2025, month: 3 }], Decimal::new(30, 2));
    }

    #[test]
    fn test_report_sections_in_chronological_order() {
        let records = vec![
            txn(4, 1, 500, CardSource::Nubank),
            txn(3, 5, 2350, CardSource::PicPay),
        ];
        let report = render_report(&records);
        assert!(report.contains("=== Monthly spend by card ==="));
        assert!(report.contains("=== Total spend by month ==="));
        let march = report.find("03/2025").unwrap();
        let april = report.find("04/2025").unwrap();
        assert!(march < april);
    }

    #[test]
    fn test_report_on_empty_input() {
        let report = render_report(&[]);
        assert!(report.contains("=== Monthly spend by card ==="));
    }
}
