//! Report formatting for terminal output
//!
//! Renders the budget summary and the spending charts as plain text.

use crate::reports::{BudgetSummary, SpendingChart, UsageLevel};

const CHART_WIDTH: usize = 30;

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
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        "...".chars().take(max_len).collect()
    } else {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{}...", head)
    }
}

fn usage_marker(level: UsageLevel) -> &'static str {
    match level {
        UsageLevel::Comfortable => "ok",
        UsageLevel::Warning => "warning",
        UsageLevel::Critical => "critical",
    }
}

/// Format the budget summary card
pub fn format_summary(summary: &BudgetSummary, currency_symbol: &str) -> String {
    let mut output = String::new();
    output.push_str("Budget Summary\n");
    output.push_str(&separator(44));
    output.push('\n');

    output.push_str(&format!(
        "Total Expenses:   {} ({} recorded)\n",
        summary.total_spent.format_with_symbol(currency_symbol),
        summary.expense_count
    ));

    match &summary.progress {
        Some(progress) => {
            output.push_str(&format!(
                "Budget Goal:      {} ({})\n",
                progress.goal_amount.format_with_symbol(currency_symbol),
                progress.period
            ));
            output.push_str(&format!(
                "Remaining:        {}\n",
                progress.remaining_label(currency_symbol)
            ));
            output.push_str(&format!("Status:           {}\n", progress.status));
            output.push_str(&format!(
                "Usage:            {} {}% ({})\n",
                format_bar(progress.usage_percentage as f64, 100.0, 20),
                progress.usage_percentage,
                usage_marker(progress.usage_level)
            ));
            if let Some(notes) = &progress.notes {
                output.push_str(&format!("Notes:            {}\n", notes));
            }
        }
        None => {
            output.push_str("No budget goal set. Run 'budgetbuddy goal set <amount>' to add one.\n");
        }
    }

    output
}

/// Format both spending charts
pub fn format_chart(chart: &SpendingChart, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Expenses by Category\n");
    output.push_str(&separator(60));
    output.push('\n');
    if chart.by_category.is_empty() {
        output.push_str("No expense data yet.\n");
    } else {
        for slice in &chart.by_category {
            output.push_str(&format!(
                "{:16} {} {:>10} {:>6}\n",
                slice.category.name(),
                format_bar(slice.percentage, 100.0, CHART_WIDTH),
                slice.total.format_with_symbol(currency_symbol),
                format_percentage(slice.percentage)
            ));
        }
    }

    output.push('\n');
    output.push_str("Daily Expenses\n");
    output.push_str(&separator(60));
    output.push('\n');
    let max = chart.daily_max().as_decimal();
    for bar in &chart.daily {
        output.push_str(&format!(
            "{:8} {} {:>10}\n",
            bar.label,
            format_bar(bar.total.as_decimal(), max, CHART_WIDTH),
            bar.total.format_with_symbol(currency_symbol)
        ));
    }

    output
}
