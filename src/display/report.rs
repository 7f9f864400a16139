//! Report formatting utilities for terminal output
//!
//! Renders the summary, spending breakdown and monthly trend reports.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Currency, Money};
use crate::reports::{FinancialSummary, SpendingReport, TrendReport};

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

pub(crate) fn money(amount: Money, currency: Currency) -> String {
    amount.format_with_symbol(currency.symbol())
}

/// Format the headline summary
pub fn format_summary(summary: &FinancialSummary, currency: Currency) -> String {
    let mut output = String::new();
    output.push_str("Financial Summary\n");
    output.push_str(&"═".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{:20} {:>18}\n",
        "Total income:",
        money(summary.total_income, currency)
    ));
    output.push_str(&format!(
        "{:20} {:>18}\n",
        "Total expenses:",
        money(summary.total_expenses, currency)
    ));
    output.push_str(&format!(
        "{:20} {:>18}\n",
        "Total savings:",
        money(summary.total_savings, currency)
    ));
    output.push_str(&format!(
        "{:20} {:>18}\n",
        "Current balance:",
        money(summary.current_balance, currency)
    ));
    output.push_str(&format!(
        "{:20} {:>18}\n",
        "Savings rate:",
        format!("{:.1}%", summary.savings_rate)
    ));
    output.push_str(&"─".repeat(40));
    output.push('\n');
    output.push_str(&format!(
        "{} transaction(s), {} budget(s)\n",
        summary.transaction_count, summary.budget_count
    ));
    output
}

#[derive(Tabled)]
struct SpendingRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Spent")]
    total: String,
    #[tabled(rename = "Txns")]
    count: usize,
    #[tabled(rename = "Share")]
    share: String,
    #[tabled(rename = "")]
    bar: String,
}

/// Format the spending breakdown by category
pub fn format_spending_report(report: &SpendingReport, currency: Currency) -> String {
    if report.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let max = report
        .categories
        .first()
        .map(|c| c.total.as_major())
        .unwrap_or(0.0);

    let rows = report.categories.iter().map(|c| SpendingRow {
        category: truncate(&c.category, 24),
        total: money(c.total, currency),
        count: c.transaction_count,
        share: format_percentage(c.percentage),
        bar: format_bar(c.total.as_major(), max, 20),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!(
        "Spending by Category\n{}\nTotal expenses: {}\n",
        table,
        money(report.total_expenses, currency)
    )
}

#[derive(Tabled)]
struct TrendRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Income")]
    income: String,
    #[tabled(rename = "Expenses")]
    expenses: String,
    #[tabled(rename = "Savings")]
    savings: String,
}

/// Format the monthly trend
pub fn format_trend_report(report: &TrendReport, currency: Currency) -> String {
    if report.months.is_empty() {
        return "No transactions recorded.\n".to_string();
    }

    let rows = report.months.iter().map(|m| TrendRow {
        month: m.month.to_string(),
        income: money(m.income, currency),
        expenses: money(m.expenses, currency),
        savings: money(m.savings, currency),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("Monthly Trend\n{}\n", table)
}
