//! fatura-core: transaction record types, consolidation, and monthly spend reporting.

pub mod consolidate;
pub mod record;
pub mod report;

pub use consolidate::consolidate;
pub use record::{CardSource, Period, Transaction};
pub use report::{render_report, totals_by_period, totals_by_period_and_card};
