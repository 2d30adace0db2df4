//! Issuer-specific statement parsers.
//!
//! Each vendor's line grammar lives in its own module behind the
//! [`LineRecognizer`] seam so the scanning loop in [`crate::statement`]
//! stays format-agnostic.

pub mod nubank_csv;
pub mod nubank_pdf;
pub mod picpay_pdf;

pub use nubank_csv::parse_nubank_csv;
pub use nubank_pdf::NubankPdf;
pub use picpay_pdf::PicPayPdf;

use fatura_core::{CardSource, Transaction};

/// Statement year assumed when a document never states one explicitly.
///
/// Card statements print transaction dates without a year; this default keeps
/// parity with the existing statement corpus. Recognizers accept an explicit
/// year via their `with_year` constructors.
pub const DEFAULT_STATEMENT_YEAR: i32 = 2025;

/// Format-specific grammar matcher turning one raw text line into a
/// transaction candidate.
///
/// Implementations may carry per-document parse state across calls (e.g. a
/// billing month inferred from a header line), which is why `recognize`
/// takes `&mut self`. Construct a fresh recognizer for each document so
/// state never leaks between parses.
pub trait LineRecognizer {
    /// Issuer tag stamped on every record this recognizer emits.
    fn source(&self) -> CardSource;

    /// Attempt to match one line, updating carried state as a side effect.
    ///
    /// Returns `None` for any line that is not a transaction under this
    /// format's grammar.
    fn recognize(&mut self, line: &str) -> Option<Transaction>;
}
