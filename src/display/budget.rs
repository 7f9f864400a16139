//! Budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::{format_bar, money, truncate};
use crate::models::Currency;
use crate::reports::{BudgetOverview, BudgetStatus};

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Limit")]
    limit: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Remaining")]
    remaining: String,
    #[tabled(rename = "Used")]
    used: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn status_icon(status: BudgetStatus) -> &'static str {
    match status {
        BudgetStatus::OnTrack => "✓",
        BudgetStatus::NearLimit => "!",
        BudgetStatus::OverBudget => "⚠",
    }
}

/// Format the budget overview as a table
pub fn format_budget_overview(overview: &BudgetOverview, currency: Currency) -> String {
    if overview.lines.is_empty() {
        return "No budgets set.\n".to_string();
    }

    let rows = overview.lines.iter().map(|line| BudgetRow {
        category: truncate(&line.category, 20),
        limit: money(line.limit, currency),
        spent: money(line.spent, currency),
        remaining: money(line.remaining, currency),
        used: format!(
            "{} {:>3.0}%",
            format_bar(line.percent_used.min(100.0), 100.0, 10),
            line.percent_used
        ),
        status: format!("{} {}", status_icon(line.status), line.status),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    let mut output = format!("{}\n", table);
    output.push_str(&format!(
        "Total: {} of {} spent\n",
        money(overview.total_spent, currency),
        money(overview.total_limit, currency)
    ));

    let over: Vec<&str> = overview.over_budget().map(|l| l.category.as_str()).collect();
    if !over.is_empty() {
        output.push_str(&format!("Over budget: {}\n", over.join(", ")));
    }

    output
}
