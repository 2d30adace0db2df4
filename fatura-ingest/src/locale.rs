//! pt-BR normalization of statement date fragments and amounts.
//!
//! Statement text writes dates as "02 SET" or "05/03" (no year) and amounts
//! with `.` grouping thousands and `,` as the decimal separator ("1.234,56").

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Failure to normalize a locale-formatted fragment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unrecognized date fragment '{0}'")]
    DateFormat(String),
    #[error("unrecognized amount '{0}'")]
    AmountFormat(String),
}

/// Numeric month for a Portuguese 3-letter abbreviation ("SET" -> 9).
pub fn month_from_abbrev(token: &str) -> Option<u32> {
    let month = match token.to_uppercase().as_str() {
        "JAN" => 1,
        "FEV" => 2,
        "MAR" => 3,
        "ABR" => 4,
        "MAI" => 5,
        "JUN" => 6,
        "JUL" => 7,
        "AGO" => 8,
        "SET" => 9,
        "OUT" => 10,
        "NOV" => 11,
        "DEZ" => 12,
        _ => return None,
    };
    Some(month)
}

/// Numeric month for a full Portuguese month name, case-insensitive.
///
/// Accented and unaccented spellings map to the same month, since PDF text
/// extraction does not always preserve the cedilla.
pub fn month_from_name(name: &str) -> Option<u32> {
    let month = match name.to_lowercase().as_str() {
        "janeiro" => 1,
        "fevereiro" => 2,
        "março" | "marco" => 3,
        "abril" => 4,
        "maio" => 5,
        "junho" => 6,
        "julho" => 7,
        "agosto" => 8,
        "setembro" => 9,
        "outubro" => 10,
        "novembro" => 11,
        "dezembro" => 12,
        _ => return None,
    };
    Some(month)
}

/// Parse a "DD MMM" fragment like "02 SET" against an explicit year.
pub fn parse_day_month_abbrev(fragment: &str, year: i32) -> Result<NaiveDate, ParseError> {
    let err = || ParseError::DateFormat(fragment.to_string());
    let mut parts = fragment.split_whitespace();
    let day: u32 = parts.next().ok_or_else(err)?.parse().map_err(|_| err())?;
    let month = parts.next().and_then(month_from_abbrev).ok_or_else(err)?;
    if parts.next().is_some() {
        return Err(err());
    }
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)
}

/// Parse a "DD/MM" fragment like "05/03" against an explicit year.
pub fn parse_day_month(fragment: &str, year: i32) -> Result<NaiveDate, ParseError> {
    let err = || ParseError::DateFormat(fragment.to_string());
    let (day, month) = fragment.trim().split_once('/').ok_or_else(err)?;
    let day: u32 = day.parse().map_err(|_| err())?;
    let month: u32 = month.parse().map_err(|_| err())?;
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(err)
}

/// Parse an amount where `.` groups thousands and `,` marks decimals.
///
/// "1.234,56" -> 1234.56, exactly; any non-numeric residue is an error.
pub fn parse_amount(text: &str) -> Result<Decimal, ParseError> {
    let canonical = text.trim().replace('.', "").replace(',', ".");
    canonical
        .parse::<Decimal>()
        .map_err(|_| ParseError::AmountFormat(text.to_string()))
}
