//! fatura-ingest: statement ingestion (CSV/PDF text) and issuer-specific line recognizers.

pub mod locale;
pub mod parsers;
pub mod statement;

pub use locale::ParseError;
pub use parsers::{DEFAULT_STATEMENT_YEAR, LineRecognizer, NubankPdf, PicPayPdf, parse_nubank_csv};
pub use statement::scan_pages;
