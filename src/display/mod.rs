//! Display formatting for terminal output
//!
//! Renders ledger data as tables and summaries, with amounts shown in the
//! ledger's preferred currency.

pub mod budget;
pub mod report;
pub mod transaction;

pub use budget::format_budget_overview;
pub use report::{
    format_bar, format_percentage, format_spending_report, format_summary, format_trend_report,
    truncate,
};
pub use transaction::{format_signed_amount, format_transaction_details, format_transaction_table};
