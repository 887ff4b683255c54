//! Expense service
//!
//! Turns raw form values into validated expenses, and provides the list
//! view operations: search, category filter, newest-first ordering and
//! grouping by day.

use chrono::{Local, NaiveDate};

use crate::error::{BuddyError, BuddyResult};
use crate::models::{Expense, ExpenseCategory, ExpenseId, Money};
use crate::storage::{KeyValueStore, Ledger};

use super::Outcome;

/// Raw input for creating an expense
#[derive(Debug, Clone, Default)]
pub struct CreateExpenseInput {
    pub amount: String,
    pub category: String,
    /// `YYYY-MM-DD`; today when absent
    pub date: Option<String>,
    pub description: Option<String>,
}

/// Options for narrowing the expense list
#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    /// Case-insensitive match against description or category name
    pub search: Option<String>,
    pub category: Option<ExpenseCategory>,
    pub limit: Option<usize>,
}

impl ExpenseFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn category(mut self, category: ExpenseCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn matches(&self, expense: &Expense) -> bool {
        let matches_search = match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                expense.description.to_lowercase().contains(&term)
                    || expense.category.name().to_lowercase().contains(&term)
            }
        };
        let matches_category = self.category.map_or(true, |c| expense.category == c);
        matches_search && matches_category
    }

    /// Matching expenses, newest date first
    ///
    /// Expenses on the same day are ordered by most recently created.
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        let mut matching: Vec<Expense> =
            expenses.iter().filter(|e| self.matches(e)).cloned().collect();
        matching.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        if let Some(limit) = self.limit {
            matching.truncate(limit);
        }
        matching
    }
}

/// Group an already sorted list by date, keeping the order
pub fn group_by_date(expenses: &[Expense]) -> Vec<(NaiveDate, Vec<Expense>)> {
    let mut groups: Vec<(NaiveDate, Vec<Expense>)> = Vec::new();
    for expense in expenses {
        match groups.last_mut() {
            Some((date, items)) if *date == expense.date => items.push(expense.clone()),
            _ => groups.push((expense.date, vec![expense.clone()])),
        }
    }
    groups
}

/// Distinct categories in use, in first-seen order
pub fn categories_in_use(expenses: &[Expense]) -> Vec<ExpenseCategory> {
    let mut seen = Vec::new();
    for expense in expenses {
        if !seen.contains(&expense.category) {
            seen.push(expense.category);
        }
    }
    seen
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(s: &str) -> BuddyResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| BuddyError::Validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)))
}

/// Parse an amount that must be strictly positive and at most
/// [`Money::MAX_AMOUNT`]
pub fn parse_positive_amount(s: &str) -> BuddyResult<Money> {
    match Money::parse(s) {
        Ok(amount) if amount.is_positive() && amount <= Money::MAX_AMOUNT => Ok(amount),
        _ => Err(BuddyError::Validation("Please enter a valid amount".into())),
    }
}

impl CreateExpenseInput {
    /// Check every field and build the expense
    pub fn into_expense(self) -> BuddyResult<Expense> {
        let amount = parse_positive_amount(&self.amount)?;

        if self.category.trim().is_empty() {
            return Err(BuddyError::Validation("Please select a category".into()));
        }
        let category: ExpenseCategory = self
            .category
            .parse()
            .map_err(|e: crate::models::UnknownCategory| BuddyError::Validation(e.to_string()))?;

        let date = match self.date.as_deref().map(str::trim) {
            None => Local::now().date_naive(),
            Some("") => return Err(BuddyError::Validation("Please select a date".into())),
            Some(s) => parse_date(s)?,
        };

        let description = self.description.unwrap_or_default().trim().to_string();
        Ok(Expense::with_description(amount, category, date, description))
    }
}

/// Service for expense management
pub struct ExpenseService<'a, S: KeyValueStore> {
    ledger: &'a mut Ledger<S>,
}

impl<'a, S: KeyValueStore> ExpenseService<'a, S> {
    pub fn new(ledger: &'a mut Ledger<S>) -> Self {
        Self { ledger }
    }

    /// Validate the input and record the expense
    pub fn create(&mut self, input: CreateExpenseInput) -> BuddyResult<Outcome<Expense>> {
        let expense = input.into_expense()?;
        let save_status = self.ledger.add_expense(expense.clone())?;
        Ok(Outcome::new(expense, save_status))
    }

    /// List expenses matching `filter`, newest first
    pub fn list(&self, filter: &ExpenseFilter) -> Vec<Expense> {
        filter.apply(self.ledger.expenses())
    }

    /// Resolve a full id or a unique id prefix
    pub fn resolve(&self, identifier: &str) -> BuddyResult<ExpenseId> {
        if let Ok(id) = identifier.trim().parse::<ExpenseId>() {
            if self.ledger.expense(id).is_some() {
                return Ok(id);
            }
            return Err(BuddyError::expense_not_found(identifier));
        }

        let matches: Vec<ExpenseId> = self
            .ledger
            .expenses()
            .iter()
            .filter(|e| e.id.matches_prefix(identifier))
            .map(|e| e.id)
            .collect();

        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(BuddyError::expense_not_found(identifier)),
            _ => Err(BuddyError::Ambiguous {
                entity_type: "Expense",
                identifier: identifier.to_string(),
                matches: matches.len(),
            }),
        }
    }

    /// Delete the expense named by `identifier`
    pub fn delete(&mut self, identifier: &str) -> BuddyResult<Outcome<Expense>> {
        let id = self.resolve(identifier)?;
        let expense = self
            .ledger
            .expense(id)
            .cloned()
            .ok_or_else(|| BuddyError::expense_not_found(identifier))?;
        let save_status = self.ledger.delete_expense(id);
        Ok(Outcome::new(expense, save_status))
    }
}
