//! Nubank credit-card statement recognizer (PDF text)
//!
//! Expected extracted-text rows, one transaction per line among assorted
//! header/footer noise:
//!   02 SET IFOOD *RESTAURANTE R$ 45,90
//!   15 SET MERCADOLIVRE*LOJA R$ 1.234,56

use fatura_core::{CardSource, Transaction};
use regex::Regex;

use crate::locale;
use crate::parsers::{DEFAULT_STATEMENT_YEAR, LineRecognizer};

/// Compact single-line recognizer: `DD MMM <description> R$ <amount>`.
///
/// Stateless beyond the configured statement year, since Nubank rows never
/// print one. Sub-parse failures are swallowed: plenty of non-transaction text
/// shares the date-like prefix, so a failed fragment just means the line was
/// not a transaction after all.
pub struct NubankPdf {
    year: i32,
    line_re: Regex,
}

impl NubankPdf {
    pub fn new() -> Self {
        Self::with_year(DEFAULT_STATEMENT_YEAR)
    }

    /// Use an explicit statement year instead of [`DEFAULT_STATEMENT_YEAR`].
    pub fn with_year(year: i32) -> Self {
        Self {
            year,
            line_re: Regex::new(r"^\d{2} [A-Z]{3} .*? R\$ [\d,.]+").unwrap(),
        }
    }
}

impl Default for NubankPdf {
    fn default() -> Self {
        Self::new()
    }
}

impl LineRecognizer for NubankPdf {
    fn source(&self) -> CardSource {
        CardSource::Nubank
    }

    fn recognize(&mut self, line: &str) -> Option<Transaction> {
        if !self.line_re.is_match(line) {
            return None;
        }

        // Matched lines split at the currency marker: the first segment is a
        // fixed-width date prefix plus the description, the second the amount.
        let mut segments = line.split("R$");
        let head = segments.next()?;
        let amount_fragment = segments.next()?.trim();

        let date_fragment = head.get(..6)?.trim();
        let description = head.get(6..)?.trim();
        if description.is_empty() {
            return None;
        }

        let date = locale::parse_day_month_abbrev(date_fragment, self.year).ok()?;
        let amount = locale::parse_amount(amount_fragment).ok()?;

        Some(Transaction::new(date, description, amount, CardSource::Nubank))
    }
}
