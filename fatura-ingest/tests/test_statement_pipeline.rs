//! End-to-end: raw page text through both recognizers into one consolidated,
//! date-ordered sequence.

use chrono::{Datelike, NaiveDate};
use fatura_core::{CardSource, consolidate};
use fatura_ingest::{NubankPdf, PicPayPdf, scan_pages};
use rust_decimal::Decimal;

const NUBANK_PAGES: [&str; 2] = [
    "NU PAGAMENTOS S.A.\n\
     Fatura de setembro\n\
     02 SET IFOOD *RESTAURANTE R$ 45,90\n\
     15 SET MERCADOLIVRE*LOJA R$ 1.234,56\n\
     Limite disponível R$\n",
    "20 SET POSTO SHELL R$ 120,00\n\
     Total da fatura\n",
];

const PICPAY_PAGES: [&str; 2] = [
    "PicPay Cartões\n\
     Resumo - Mês de Setembro\n\
     Vencimento da fatura\n",
    "05/09 UBER *TRIP 23,50\n\
     10/09 Pagamento de Fatura 1.500,00\n\
     15/09 FARMACIA POPULAR 12,00\n",
];

fn ingest_all() -> Vec<fatura_core::Transaction> {
    let mut nubank = NubankPdf::new();
    let mut picpay = PicPayPdf::new();
    consolidate(vec![
        scan_pages(NUBANK_PAGES, &mut nubank),
        scan_pages(PICPAY_PAGES, &mut picpay),
    ])
}

#[test]
fn test_consolidated_sequence_is_date_ordered() {
    let merged = ingest_all();
    assert_eq!(merged.len(), 5);
    assert!(merged.windows(2).all(|w| w[0].date <= w[1].date));

    // Statement-payment row never survives, even though it matched the grammar.
    assert!(!merged.iter().any(|t| t.description.to_lowercase().contains("pagamento")));
}

#[test]
fn test_both_sources_are_tagged_and_period_agrees_with_date() {
    let merged = ingest_all();
    assert!(merged.iter().any(|t| t.source == CardSource::Nubank));
    assert!(merged.iter().any(|t| t.source == CardSource::PicPay));

    for t in &merged {
        assert_eq!(t.period.month, t.date.month());
        assert_eq!(t.period.year, t.date.year());
        assert!(!t.description.is_empty());
        assert_eq!(t.description, t.description.trim());
    }
}

#[test]
fn test_interleaved_dates_across_sources() {
    let merged = ingest_all();
    let first = &merged[0];
    let last = &merged[merged.len() - 1];
    assert_eq!(first.date, NaiveDate::from_ymd_opt(2025, 9, 2).unwrap());
    assert_eq!(first.source, CardSource::Nubank);
    assert_eq!(last.date, NaiveDate::from_ymd_opt(2025, 9, 20).unwrap());
    assert_eq!(last.description, "POSTO SHELL");
}

#[test]
fn test_monthly_totals_over_consolidated_records() {
    let merged = ingest_all();
    let totals = fatura_core::totals_by_period_and_card(&merged);
    let september = fatura_core::Period { year: 2025, month: 9 };

    assert_eq!(
        totals[&(september, CardSource::Nubank)],
        Decimal::new(140046, 2) // 45.90 + 1234.56 + 120.00
    );
    assert_eq!(
        totals[&(september, CardSource::PicPay)],
        Decimal::new(3550, 2) // 23.50 + 12.00, payment row excluded
    );
}
