//! Aggregations over the ledger
//!
//! Every function here is pure and recomputes from the expenses it is
//! given, so results always reflect the latest mutation.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{Days, NaiveDate};

use crate::models::{BudgetGoal, Expense, ExpenseCategory, Money};

/// Length of the daily spending window used by default
pub const DEFAULT_WINDOW_DAYS: u32 = 7;

/// Longest daily window accepted from settings or the command line
pub const MAX_WINDOW_DAYS: u32 = 366;

/// Whether spending is within the goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    Under,
    Over,
}

impl fmt::Display for BudgetStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Under => write!(f, "Under budget"),
            Self::Over => write!(f, "Over budget"),
        }
    }
}

/// Coarse band of the usage percentage, for colouring a progress bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UsageLevel {
    /// Below 70%
    Comfortable,
    /// 70% up to 90%
    Warning,
    /// 90% and above
    Critical,
}

/// Sum of every expense amount
pub fn total_spent(expenses: &[Expense]) -> Money {
    expenses.iter().map(|e| e.amount).sum()
}

/// Goal amount minus spending. Negative when over budget.
pub fn remaining(total: Money, goal: &BudgetGoal) -> Money {
    goal.amount - total
}

/// `Under` when nothing is overspent; exactly zero remaining counts as under
pub fn budget_status(remaining: Money) -> BudgetStatus {
    if remaining.is_negative() {
        BudgetStatus::Over
    } else {
        BudgetStatus::Under
    }
}

/// Share of the goal already spent, rounded to a whole percent in `0..=100`
///
/// Halves round up. Spending at or above the goal saturates at 100. A goal
/// of zero or less cannot be met by any spending and also reports 100.
pub fn usage_percentage(total: Money, goal_amount: Money) -> u8 {
    if !goal_amount.is_positive() {
        return 100;
    }
    if !total.is_positive() {
        return 0;
    }

    let total = total.cents() as i128;
    let goal = goal_amount.cents() as i128;
    let rounded = (total * 200 + goal) / (goal * 2);

    rounded.min(100) as u8
}

pub fn usage_level(percentage: u8) -> UsageLevel {
    match percentage {
        0..=69 => UsageLevel::Comfortable,
        70..=89 => UsageLevel::Warning,
        _ => UsageLevel::Critical,
    }
}

/// Spending per category; only categories that occur are present
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<ExpenseCategory, Money> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert_with(Money::zero) += expense.amount;
    }
    totals
}

/// Spending per day over the `window_days` days ending at `reference`
///
/// Always one entry per day, oldest first, with zero for days without
/// expenses. Expenses dated outside the window are left out.
pub fn daily_totals(
    expenses: &[Expense],
    reference: NaiveDate,
    window_days: u32,
) -> Vec<(NaiveDate, Money)> {
    let window = window_days as i64;

    let mut series: Vec<(NaiveDate, Money)> = (0..window_days)
        .rev()
        .filter_map(|back| reference.checked_sub_days(Days::new(back as u64)))
        .map(|day| (day, Money::zero()))
        .collect();

    let first_index_offset = window - series.len() as i64;

    for expense in expenses {
        let days_back = (reference - expense.date).num_days();
        if (0..window).contains(&days_back) {
            let index = window - 1 - days_back - first_index_offset;
            if let Some((_, total)) = usize::try_from(index).ok().and_then(|i| series.get_mut(i)) {
                *total += expense.amount;
            }
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GoalPeriod;

    fn day(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    fn expense(cents: i64, category: ExpenseCategory, date: NaiveDate) -> Expense {
        Expense::new(Money::from_cents(cents), category, date)
    }

    fn goal(cents: i64) -> BudgetGoal {
        BudgetGoal::new(Money::from_cents(cents), GoalPeriod::Monthly)
    }

    #[test]
    fn test_total_spent_empty() {
        assert_eq!(total_spent(&[]), Money::zero());
    }

    #[test]
    fn test_huge_stored_amounts_saturate() {
        // e.g. a ledger file edited by hand past the input cap
        let huge = i64::MAX / 2 + 1;
        let expenses = vec![
            expense(huge, ExpenseCategory::Other, day(1, 10)),
            expense(huge, ExpenseCategory::Other, day(1, 10)),
        ];
        assert_eq!(total_spent(&expenses).cents(), i64::MAX);
        assert_eq!(category_totals(&expenses)[&ExpenseCategory::Other].cents(), i64::MAX);
    }

    #[test]
    fn test_total_spent_is_order_independent() {
        let mut expenses = vec![
            expense(1250, ExpenseCategory::Food, day(1, 10)),
            expense(4000, ExpenseCategory::Rent, day(1, 10)),
            expense(333, ExpenseCategory::Other, day(2, 1)),
        ];
        let forward = total_spent(&expenses);
        expenses.reverse();

        assert_eq!(forward, Money::from_cents(5583));
        assert_eq!(total_spent(&expenses), forward);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        assert_eq!(
            remaining(Money::from_cents(15000), &goal(10000)),
            Money::from_cents(-5000)
        );
    }

    #[test]
    fn test_budget_status_boundary() {
        assert_eq!(budget_status(Money::from_cents(1)), BudgetStatus::Under);
        assert_eq!(budget_status(Money::zero()), BudgetStatus::Under);
        assert_eq!(budget_status(Money::from_cents(-1)), BudgetStatus::Over);

        let g = goal(10000);
        let at_goal = remaining(Money::from_cents(10000), &g);
        assert_eq!(budget_status(at_goal), BudgetStatus::Under);
    }

    #[test]
    fn test_usage_percentage_rounding() {
        let g = Money::from_cents(10000);
        assert_eq!(usage_percentage(Money::from_cents(5250), g), 53);
        assert_eq!(usage_percentage(Money::from_cents(5249), g), 52);
        assert_eq!(usage_percentage(Money::zero(), g), 0);
        assert_eq!(usage_percentage(Money::from_cents(1), Money::from_cents(300)), 0);
        assert_eq!(usage_percentage(Money::from_cents(1), Money::from_cents(3)), 33);
        assert_eq!(usage_percentage(Money::from_cents(2), Money::from_cents(3)), 67);
    }

    #[test]
    fn test_usage_percentage_saturates() {
        let g = Money::from_cents(10000);
        assert_eq!(usage_percentage(Money::from_cents(9999), g), 100);
        assert_eq!(usage_percentage(g, g), 100);
        assert_eq!(usage_percentage(Money::from_cents(1_000_000), g), 100);
    }

    #[test]
    fn test_usage_percentage_monotonic() {
        let g = Money::from_cents(777);
        let mut previous = 0;
        for cents in 0..1000 {
            let pct = usage_percentage(Money::from_cents(cents), g);
            assert!(pct >= previous);
            assert!(pct <= 100);
            previous = pct;
        }
        assert_eq!(previous, 100);
    }

    #[test]
    fn test_usage_percentage_zero_goal() {
        assert_eq!(usage_percentage(Money::zero(), Money::zero()), 100);
        assert_eq!(usage_percentage(Money::from_cents(50), Money::zero()), 100);
    }

    #[test]
    fn test_usage_level_bands() {
        assert_eq!(usage_level(0), UsageLevel::Comfortable);
        assert_eq!(usage_level(69), UsageLevel::Comfortable);
        assert_eq!(usage_level(70), UsageLevel::Warning);
        assert_eq!(usage_level(89), UsageLevel::Warning);
        assert_eq!(usage_level(90), UsageLevel::Critical);
        assert_eq!(usage_level(100), UsageLevel::Critical);
    }

    #[test]
    fn test_category_totals() {
        let expenses = vec![
            expense(1250, ExpenseCategory::Food, day(1, 10)),
            expense(4000, ExpenseCategory::Rent, day(1, 10)),
            expense(750, ExpenseCategory::Food, day(1, 11)),
        ];
        let totals = category_totals(&expenses);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[&ExpenseCategory::Food], Money::from_cents(2000));
        assert_eq!(totals[&ExpenseCategory::Rent], Money::from_cents(4000));
        assert!(!totals.contains_key(&ExpenseCategory::Health));

        let sum: Money = totals.values().sum();
        assert_eq!(sum, total_spent(&expenses));
    }

    #[test]
    fn test_category_totals_empty() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn test_daily_totals_window_shape() {
        let series = daily_totals(&[], day(1, 10), DEFAULT_WINDOW_DAYS);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0].0, day(1, 4));
        assert_eq!(series[6].0, day(1, 10));
        assert!(series.iter().all(|(_, total)| total.is_zero()));
    }

    #[test]
    fn test_daily_totals_buckets_and_excludes() {
        let expenses = vec![
            expense(1250, ExpenseCategory::Food, day(1, 10)),
            expense(4000, ExpenseCategory::Rent, day(1, 10)),
            expense(500, ExpenseCategory::Food, day(1, 4)),
            // Outside the window on both sides
            expense(9900, ExpenseCategory::Food, day(1, 3)),
            expense(9900, ExpenseCategory::Food, day(1, 11)),
        ];
        let series = daily_totals(&expenses, day(1, 10), 7);

        assert_eq!(series.len(), 7);
        assert_eq!(series[0], (day(1, 4), Money::from_cents(500)));
        assert_eq!(series[6], (day(1, 10), Money::from_cents(5250)));

        let sum: Money = series.iter().map(|(_, m)| *m).sum();
        assert_eq!(sum, Money::from_cents(5750));
    }

    #[test]
    fn test_daily_totals_across_month_boundary() {
        let expenses = vec![expense(100, ExpenseCategory::Food, day(2, 28))];
        let series = daily_totals(&expenses, day(3, 2), 7);

        // 2024 is a leap year
        assert_eq!(series[0].0, day(2, 25));
        assert_eq!(series[3], (day(2, 28), Money::from_cents(100)));
        assert_eq!(series[4].0, day(2, 29));
    }

    #[test]
    fn test_daily_totals_custom_window() {
        assert_eq!(daily_totals(&[], day(1, 31), 30).len(), 30);
        assert!(daily_totals(&[], day(1, 31), 0).is_empty());
    }
}
