//! Drives a line recognizer over the ordered pages of one document.

use fatura_core::Transaction;

use crate::parsers::LineRecognizer;

/// Feed every line of every page, in document order, to `recognizer` and
/// collect the records it emits.
///
/// Recognizer state (e.g. a billing month inferred from a header) carries
/// across page boundaries within the one document. A document with no
/// matching lines yields an empty sequence, not an error.
pub fn scan_pages<R, I, S>(pages: I, recognizer: &mut R) -> Vec<Transaction>
where
    R: LineRecognizer,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for page in pages {
        for line in page.as_ref().lines() {
            if let Some(txn) = recognizer.recognize(line) {
                out.push(txn);
            }
        }
    }
    out
}
