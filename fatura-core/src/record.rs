//! Record types shared by every statement importer.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Card issuer that produced a statement line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CardSource {
    Nubank,
    PicPay,
}

impl CardSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardSource::Nubank => "Nubank",
            CardSource::PicPay => "PicPay",
        }
    }
}

impl fmt::Display for CardSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Billing period grouping key (`MM/YYYY`), always derived from a record's date.
///
/// Fields are ordered year-first so the derived `Ord` reads chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Period {
    pub year: i32,
    pub month: u32,
}

impl Period {
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{}", self.month, self.year)
    }
}

impl From<Period> for String {
    fn from(period: Period) -> String {
        period.to_string()
    }
}

impl TryFrom<String> for Period {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        let (month, year) = s
            .split_once('/')
            .ok_or_else(|| format!("invalid period '{s}', expected MM/YYYY"))?;
        let month: u32 = month
            .parse()
            .map_err(|_| format!("invalid period month in '{s}'"))?;
        let year: i32 = year
            .parse()
            .map_err(|_| format!("invalid period year in '{s}'"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("period month out of range in '{s}'"));
        }
        Ok(Self { year, month })
    }
}

/// Normalized output of the statement parsers (issuer-agnostic).
///
/// Records are immutable once built: downstream consumers reorder and
/// aggregate them but never rewrite fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub date: NaiveDate,
    pub description: String,
    /// Statement-currency amount; positive means spend, negative a credit/refund.
    pub amount: Decimal,
    pub source: CardSource,
    /// Grouping key, always the month/year of `date`.
    pub period: Period,
}

impl Transaction {
    /// Build a record from a fully parsed statement line.
    ///
    /// `period` is derived from `date` here and nowhere else.
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: Decimal,
        source: CardSource,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            source,
            period: Period::from_date(date),
        }
    }
}
