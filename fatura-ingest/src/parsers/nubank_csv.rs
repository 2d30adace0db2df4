//! Nubank CSV export importer.
//!
//! Exports carry three leading columns: date, description, amount. Older
//! exports write day-first dates ("02/09/2025"), newer ones ISO
//! ("2025-09-02"); both are accepted. Amounts use a plain dot decimal.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use fatura_core::{CardSource, Transaction};
use rust_decimal::Decimal;

fn parse_export_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%d/%m/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}

/// Parse a Nubank CSV export file, returning all valid transactions.
/// The header row is skipped and unparseable data rows are dropped.
pub fn parse_nubank_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(path.as_ref())
        .with_context(|| format!("opening {}", path.as_ref().display()))?;
    read_rows(rdr)
}

fn read_rows<R: Read>(mut rdr: csv::Reader<R>) -> Result<Vec<Transaction>> {
    let mut txns = Vec::new();

    for result in rdr.records() {
        let record = result?;

        let date = match record.get(0).map(str::trim).and_then(parse_export_date) {
            Some(d) => d,
            None => continue,
        };

        let amount: Decimal = match record.get(2).unwrap_or("").trim().parse() {
            Ok(a) => a,
            Err(_) => continue,
        };

        let description = record.get(1).unwrap_or("").trim();
        txns.push(Transaction::new(date, description, amount, CardSource::Nubank));
    }

    Ok(txns)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_str(text: &str) -> Vec<Transaction> {
        let rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        read_rows(rdr).unwrap()
    }

    #[test]
    fn test_parses_day_first_export() {
        let txns = parse_str(
            "date,title,amount\n\
             02/09/2025,IFOOD *RESTAURANTE,45.90\n\
             15/09/2025,UBER *TRIP,23.50\n",
        );
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2025, 9, 2).unwrap());
        assert_eq!(txns[0].amount, Decimal::new(4590, 2));
        assert_eq!(txns[0].source, CardSource::Nubank);
        assert_eq!(txns[0].period.to_string(), "09/2025");
    }

    #[test]
    fn test_parses_iso_export() {
        let txns = parse_str("date,title,amount\n2025-09-02,PADARIA,8.50\n");
        assert_eq!(txns[0].date, NaiveDate::from_ymd_opt(2025, 9, 2).unwrap());
    }

    #[test]
    fn test_skips_unparseable_rows() {
        let txns = parse_str(
            "date,title,amount\n\
             not-a-date,IFOOD,45.90\n\
             02/09/2025,UBER,not-a-number\n\
             02/09/2025,PADARIA,8.50\n",
        );
        assert_eq!(txns.len(), 1);
        assert_eq!(txns[0].description, "PADARIA");
    }

    #[test]
    fn test_empty_export_yields_no_records() {
        assert!(parse_str("date,title,amount\n").is_empty());
    }
}
