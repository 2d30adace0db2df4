//! PicPay credit-card statement recognizer (PDF text)
//!
//! Expected extracted-text shape: a summary header naming the billing month,
//! then strict three-column transaction rows:
//!   Resumo - Mês de Março
//!   05/03 UBER *TRIP 23,50
//!   09/03 MERCADO LIVRE 1.234,56

use fatura_core::{CardSource, Period, Transaction};
use regex::Regex;
use tracing::warn;

use crate::locale;
use crate::parsers::{DEFAULT_STATEMENT_YEAR, LineRecognizer};

/// Rows settling the previous statement balance are transfers, not spend.
const STATEMENT_PAYMENT_PHRASE: &str = "pagamento de fatura";

/// Stateful recognizer for PicPay statements.
///
/// Carries one piece of per-document state: the billing period, inferred
/// from the first summary-header line whose month name is recognized. The
/// first resolution wins; later headers never overwrite it. Rows matching
/// the full-line grammar before the header resolves fall back to the
/// configured statement year.
///
/// Unlike the compact Nubank format, a row here matches a strict anchored
/// grammar, so a date or amount that then fails to parse is a data-quality
/// problem and is surfaced via `tracing` rather than dropped silently.
pub struct PicPayPdf {
    fallback_year: i32,
    operative: Option<Period>,
    header_re: Regex,
    line_re: Regex,
}

impl PicPayPdf {
    pub fn new() -> Self {
        Self::with_year(DEFAULT_STATEMENT_YEAR)
    }

    /// Use an explicit statement year instead of [`DEFAULT_STATEMENT_YEAR`].
    pub fn with_year(year: i32) -> Self {
        Self {
            fallback_year: year,
            operative: None,
            header_re: Regex::new(r"(?i)Resumo - Mês de ([a-zç]+)").unwrap(),
            line_re: Regex::new(r"^(\d{2}/\d{2})\s+(.+?)\s+(\d{1,3}(?:\.\d{3})*,\d{2})$")
                .unwrap(),
        }
    }

    /// Billing period inferred from the document's summary header, if any
    /// line has resolved it yet.
    pub fn operative_period(&self) -> Option<Period> {
        self.operative
    }
}

impl Default for PicPayPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRecognizer for PicPayPdf {
    fn source(&self) -> CardSource {
        CardSource::PicPay
    }

    fn recognize(&mut self, line: &str) -> Option<Transaction> {
        if self.operative.is_none() {
            if let Some(caps) = self.header_re.captures(line) {
                if let Some(month) = locale::month_from_name(&caps[1]) {
                    self.operative = Some(Period {
                        year: self.fallback_year,
                        month,
                    });
                }
            }
        }

        let trimmed = line.trim();
        let caps = self.line_re.captures(trimmed)?;

        let description = caps[2].trim();
        if description.is_empty() {
            return None;
        }
        if description.to_lowercase().contains(STATEMENT_PAYMENT_PHRASE) {
            return None;
        }

        let year = self.operative.map(|p| p.year).unwrap_or(self.fallback_year);
        match (
            locale::parse_day_month(&caps[1], year),
            locale::parse_amount(&caps[3]),
        ) {
            (Ok(date), Ok(amount)) => Some(Transaction::new(
                date,
                description,
                amount,
                CardSource::PicPay,
            )),
            (Err(e), _) | (_, Err(e)) => {
                warn!(line = trimmed, error = %e, "matched statement row failed to parse");
                None
            }
        }
    }
}
