//! The finance ledger
//!
//! Owns the transaction list and the per-category budgets, and keeps each
//! budget's `spent` total in step with every add, update and delete.
//!
//! Every mutation validates its input before touching any state, so a failed
//! call leaves the ledger exactly as it was.

use std::collections::HashSet;

use tracing::{debug, warn};

use super::seed::default_state;
use super::state::LedgerState;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Budget, Currency, Money, Preferences, Theme, Transaction, TransactionId, TransactionInput,
    TransactionPatch,
};

/// In-memory collection of transactions and budgets
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FinanceLedger {
    /// Most recent insertion first
    transactions: Vec<Transaction>,
    /// Unique by category
    budgets: Vec<Budget>,
    preferences: Preferences,
}

impl FinanceLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger holding the starter dataset
    pub fn seeded() -> Self {
        let state = default_state();
        Self {
            transactions: state.transactions,
            budgets: state.budgets,
            preferences: Preferences {
                currency: state.currency,
                theme: state.theme,
            },
        }
    }

    /// Rebuild a ledger from a previously captured state
    ///
    /// Budgets' `spent` values are taken as stored, not recomputed.
    pub fn from_state(state: LedgerState) -> FintrackResult<Self> {
        let mut ids = HashSet::new();
        for txn in &state.transactions {
            txn.validate()
                .map_err(|e| FintrackError::InvalidInput(format!("Transaction {}: {}", txn.id, e)))?;
            if !ids.insert(txn.id.clone()) {
                return Err(FintrackError::InvalidInput(format!(
                    "Duplicate transaction id: {}",
                    txn.id
                )));
            }
        }

        let mut categories = HashSet::new();
        for budget in &state.budgets {
            budget
                .validate()
                .map_err(|e| FintrackError::InvalidInput(e.to_string()))?;
            if !categories.insert(budget.category.as_str()) {
                return Err(FintrackError::InvalidInput(format!(
                    "Duplicate budget for category: {}",
                    budget.category
                )));
            }
        }

        Ok(Self {
            transactions: state.transactions,
            budgets: state.budgets,
            preferences: Preferences {
                currency: state.currency,
                theme: state.theme,
            },
        })
    }

    /// Capture the full state for persistence
    pub fn to_state(&self) -> LedgerState {
        LedgerState {
            transactions: self.transactions.clone(),
            budgets: self.budgets.clone(),
            currency: self.preferences.currency,
            theme: self.preferences.theme,
        }
    }

    // --- Read access ---

    /// All transactions, most recent insertion first
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// All budgets, one per category
    pub fn budgets(&self) -> &[Budget] {
        &self.budgets
    }

    pub fn transaction(&self, id: &TransactionId) -> Option<&Transaction> {
        self.transactions.iter().find(|t| &t.id == id)
    }

    pub fn budget(&self, category: &str) -> Option<&Budget> {
        self.budgets.iter().find(|b| b.category == category)
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Sum of expense amounts currently recorded against a category
    pub fn expenses_for_category(&self, category: &str) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_expense() && t.category == category)
            .map(|t| t.amount)
            .sum()
    }

    // --- Derived totals ---

    pub fn total_income(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    pub fn total_expenses(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum()
    }

    /// Income minus expenses; negative when spending exceeds income
    pub fn total_savings(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// No separate running balance is kept, so this equals `total_savings`
    pub fn current_balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    // --- Mutations ---

    /// Record a new transaction and charge it to its category's budget
    pub fn add_transaction(&mut self, input: TransactionInput) -> FintrackResult<Transaction> {
        let input = input
            .normalized()
            .map_err(|e| FintrackError::InvalidInput(e.to_string()))?;

        if input.kind.is_expense() {
            self.ensure_charge_fits(&input.category, Money::zero(), input.amount)?;
        }

        let txn = Transaction::from_input(self.fresh_id(), input);
        self.insert(txn.clone());
        Ok(txn)
    }

    /// Record several transactions; nothing is added unless all are valid
    ///
    /// The last input ends up first in the list, as if each were added in turn.
    pub fn add_transactions(
        &mut self,
        inputs: Vec<TransactionInput>,
    ) -> FintrackResult<Vec<Transaction>> {
        let inputs = inputs
            .into_iter()
            .enumerate()
            .map(|(idx, input)| {
                input
                    .normalized()
                    .map_err(|e| FintrackError::InvalidInput(format!("Entry {}: {}", idx + 1, e)))
            })
            .collect::<FintrackResult<Vec<_>>>()?;

        let mut staged = self.clone();
        let mut added = Vec::with_capacity(inputs.len());
        for (idx, input) in inputs.into_iter().enumerate() {
            if input.kind.is_expense() {
                staged
                    .ensure_charge_fits(&input.category, Money::zero(), input.amount)
                    .map_err(|e| FintrackError::InvalidInput(format!("Entry {}: {}", idx + 1, e)))?;
            }
            let txn = Transaction::from_input(staged.fresh_id(), input);
            staged.insert(txn.clone());
            added.push(txn);
        }

        *self = staged;
        Ok(added)
    }

    /// Apply a partial update, moving spent between budgets as needed
    pub fn update_transaction(
        &mut self,
        id: &TransactionId,
        patch: TransactionPatch,
    ) -> FintrackResult<Transaction> {
        let patch = patch
            .normalized()
            .map_err(|e| FintrackError::InvalidInput(e.to_string()))?;

        let index = self
            .position(id)
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        let original = &self.transactions[index];
        let updated = original.patched(&patch);

        if updated.is_expense() {
            let released = if original.is_expense() && original.category == updated.category {
                original.amount
            } else {
                Money::zero()
            };
            self.ensure_charge_fits(&updated.category, released, updated.amount)?;
        }

        let original = &self.transactions[index];
        if original.is_expense() {
            let (category, amount) = (original.category.clone(), original.amount);
            self.release_from_budget(&category, amount);
        }
        if updated.is_expense() {
            self.charge_budget(&updated.category, updated.amount);
        }

        debug!(
            id = %id,
            category = %updated.category,
            kind = %updated.kind,
            amount = updated.amount.cents(),
            "updated transaction"
        );

        self.transactions[index] = updated.clone();
        Ok(updated)
    }

    /// Remove a transaction, releasing its amount from its budget
    pub fn delete_transaction(&mut self, id: &TransactionId) -> FintrackResult<Transaction> {
        let index = self
            .position(id)
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        let txn = self.transactions.remove(index);
        if txn.is_expense() {
            self.release_from_budget(&txn.category, txn.amount);
        }

        debug!(id = %id, category = %txn.category, "deleted transaction");
        Ok(txn)
    }

    /// Create a budget, or change the limit of an existing one
    ///
    /// A new budget starts with nothing spent, even when the category already
    /// has expenses. Use [`FinanceLedger::recalculate_budget`] to pick those up.
    pub fn set_budget(&mut self, category: &str, limit: Money) -> FintrackResult<()> {
        let category = category.trim();
        if category.is_empty() {
            return Err(FintrackError::InvalidInput(
                "Budget category is required".into(),
            ));
        }
        if limit.is_negative() {
            return Err(FintrackError::InvalidInput(format!(
                "Budget limit must not be negative (got {})",
                limit
            )));
        }
        if limit > Money::MAX {
            return Err(FintrackError::InvalidInput(format!(
                "Budget limit must not exceed {} (got {})",
                Money::MAX,
                limit
            )));
        }

        if let Some(budget) = self.budget_mut(category) {
            budget.limit = limit;
            debug!(category, limit = limit.cents(), "changed budget limit");
        } else {
            self.budgets.push(Budget::new(category, limit));
            debug!(category, limit = limit.cents(), "created budget");
        }
        Ok(())
    }

    /// Recompute a budget's spent total from the current transactions
    pub fn recalculate_budget(&mut self, category: &str) -> FintrackResult<Money> {
        let spent = self.expenses_for_category(category);
        let budget = self
            .budget_mut(category)
            .ok_or_else(|| FintrackError::budget_not_found(category))?;
        if spent > Money::MAX {
            return Err(FintrackError::InvalidInput(format!(
                "Expenses for '{}' exceed the largest amount a budget can record",
                category
            )));
        }

        if budget.spent() != spent {
            debug!(
                category,
                from = budget.spent().cents(),
                to = spent.cents(),
                "recalculated budget spent"
            );
        }
        budget.reset_spent(spent);
        Ok(spent)
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.preferences.currency = currency;
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
    }

    // --- Internals ---

    fn fresh_id(&self) -> TransactionId {
        loop {
            let id = TransactionId::new();
            if self.position(&id).is_none() {
                return id;
            }
        }
    }

    fn insert(&mut self, txn: Transaction) {
        if txn.is_expense() {
            self.charge_budget(&txn.category, txn.amount);
        }
        debug!(
            id = %txn.id,
            category = %txn.category,
            kind = %txn.kind,
            amount = txn.amount.cents(),
            "added transaction"
        );
        self.transactions.insert(0, txn);
    }

    fn position(&self, id: &TransactionId) -> Option<usize> {
        self.transactions.iter().position(|t| &t.id == id)
    }

    fn budget_mut(&mut self, category: &str) -> Option<&mut Budget> {
        self.budgets.iter_mut().find(|b| b.category == category)
    }

    /// Check that charging `amount` after releasing `released` keeps the
    /// category's spent within [`Money::MAX`]
    fn ensure_charge_fits(
        &self,
        category: &str,
        released: Money,
        amount: Money,
    ) -> FintrackResult<()> {
        let Some(budget) = self.budget(category) else {
            return Ok(());
        };
        match budget.spent().saturating_sub_floor(released).checked_add(amount) {
            Some(_) => Ok(()),
            None => Err(FintrackError::InvalidInput(format!(
                "Budget '{}' cannot record more than {} spent",
                category,
                Money::MAX
            ))),
        }
    }

    fn charge_budget(&mut self, category: &str, amount: Money) {
        if let Some(budget) = self.budget_mut(category) {
            budget.add_spent(amount);
        }
    }

    fn release_from_budget(&mut self, category: &str, amount: Money) {
        if let Some(budget) = self.budget_mut(category) {
            if budget.release_spent(amount) {
                warn!(
                    category,
                    amount = amount.cents(),
                    "released more than the budget had recorded, spent floored at zero"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(amount: i64, category: &str) -> TransactionInput {
        TransactionInput::new(
            Money::from_major_units(amount),
            category,
            TransactionKind::Expense,
            "Expense",
            date(2024, 1, 1),
        )
    }

    fn income(amount: i64, category: &str) -> TransactionInput {
        TransactionInput::new(
            Money::from_major_units(amount),
            category,
            TransactionKind::Income,
            "Income",
            date(2024, 1, 1),
        )
    }

    fn spent(ledger: &FinanceLedger, category: &str) -> Money {
        ledger.budget(category).unwrap().spent()
    }

    fn units(n: i64) -> Money {
        Money::from_major_units(n)
    }

    #[test]
    fn test_add_to_empty_ledger() {
        let mut ledger = FinanceLedger::new();
        let txn = ledger
            .add_transaction(
                TransactionInput::new(
                    units(100),
                    "Food",
                    TransactionKind::Expense,
                    "Lunch",
                    date(2024, 1, 1),
                ),
            )
            .unwrap();

        assert!(!txn.id.as_str().is_empty());
        assert_eq!(ledger.transaction(&txn.id), Some(&txn));
        assert_eq!(ledger.total_expenses(), units(100));
        assert!(ledger.budgets().is_empty());
    }

    #[test]
    fn test_add_charges_existing_budget() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", units(50)).unwrap();
        ledger.add_transaction(expense(50, "Food")).unwrap();
        ledger.add_transaction(expense(100, "Food")).unwrap();
        assert_eq!(spent(&ledger, "Food"), units(150));
    }

    #[test]
    fn test_add_reaches_limit() {
        let mut ledger = FinanceLedger::seeded();
        assert_eq!(spent(&ledger, "Food"), units(450));
        ledger.add_transaction(expense(50, "Food")).unwrap();
        assert_eq!(spent(&ledger, "Food"), units(500));
    }

    #[test]
    fn test_add_income_leaves_budget_alone() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", units(50)).unwrap();
        ledger.add_transaction(income(80, "Food")).unwrap();
        assert_eq!(spent(&ledger, "Food"), Money::zero());
    }

    #[test]
    fn test_add_is_most_recent_first() {
        let mut ledger = FinanceLedger::new();
        let first = ledger.add_transaction(expense(1, "A")).unwrap();
        let second = ledger.add_transaction(expense(2, "B")).unwrap();
        assert_eq!(ledger.transactions()[0].id, second.id);
        assert_eq!(ledger.transactions()[1].id, first.id);
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_add_without_budget_creates_none() {
        let mut ledger = FinanceLedger::new();
        ledger.add_transaction(expense(10, "Misc")).unwrap();
        assert!(ledger.budget("Misc").is_none());
    }

    #[test]
    fn test_add_rejects_invalid_input() {
        let mut ledger = FinanceLedger::seeded();
        let before = ledger.clone();

        let mut blank = expense(10, "Food");
        blank.description = "   ".into();
        let err = ledger.add_transaction(blank).unwrap_err();
        assert!(err.is_invalid_input());

        let negative = TransactionInput::new(
            Money::from_cents(-100),
            "Food",
            TransactionKind::Expense,
            "Refund",
            date(2024, 1, 1),
        );
        assert!(ledger.add_transaction(negative).unwrap_err().is_invalid_input());

        assert_eq!(ledger, before);
    }

    #[test]
    fn test_add_transactions_is_all_or_nothing() {
        let mut ledger = FinanceLedger::new();
        let mut bad = expense(5, "Food");
        bad.category = String::new();

        let err = ledger
            .add_transactions(vec![expense(1, "Food"), bad])
            .unwrap_err();
        assert!(err.to_string().contains("Entry 2"));
        assert!(ledger.transactions().is_empty());

        let added = ledger
            .add_transactions(vec![expense(1, "Food"), expense(2, "Rent")])
            .unwrap();
        assert_eq!(added.len(), 2);
        assert_eq!(ledger.transactions()[0].category, "Rent");
    }

    #[test]
    fn test_update_moves_spent_between_categories() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();
        ledger.set_budget("Travel", units(400)).unwrap();
        let t1 = ledger.add_transaction(expense(100, "Food")).unwrap();
        assert_eq!(spent(&ledger, "Food"), units(100));

        ledger
            .update_transaction(&t1.id, TransactionPatch::new().category("Travel"))
            .unwrap();

        assert_eq!(spent(&ledger, "Food"), Money::zero());
        assert_eq!(spent(&ledger, "Travel"), units(100));
    }

    #[test]
    fn test_update_amount_applies_delta() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();
        ledger.add_transaction(expense(40, "Food")).unwrap();
        let t = ledger.add_transaction(expense(100, "Food")).unwrap();

        ledger
            .update_transaction(&t.id, TransactionPatch::new().amount(units(70)))
            .unwrap();
        assert_eq!(spent(&ledger, "Food"), units(110));
    }

    #[test]
    fn test_update_kind_flip() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();
        let t = ledger.add_transaction(expense(100, "Food")).unwrap();

        ledger
            .update_transaction(&t.id, TransactionPatch::new().kind(TransactionKind::Income))
            .unwrap();
        assert_eq!(spent(&ledger, "Food"), Money::zero());
        assert_eq!(ledger.total_income(), units(100));

        ledger
            .update_transaction(&t.id, TransactionPatch::new().kind(TransactionKind::Expense))
            .unwrap();
        assert_eq!(spent(&ledger, "Food"), units(100));
    }

    #[test]
    fn test_update_description_only_keeps_spent() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();
        let t = ledger.add_transaction(expense(100, "Food")).unwrap();

        let updated = ledger
            .update_transaction(&t.id, TransactionPatch::new().description("Dinner"))
            .unwrap();
        assert_eq!(updated.description, "Dinner");
        assert_eq!(updated.id, t.id);
        assert_eq!(spent(&ledger, "Food"), units(100));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut ledger = FinanceLedger::seeded();
        let before = ledger.clone();
        let err = ledger
            .update_transaction(&TransactionId::from("missing"), TransactionPatch::new())
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_update_rejects_invalid_patch() {
        let mut ledger = FinanceLedger::seeded();
        let before = ledger.clone();
        let err = ledger
            .update_transaction(&TransactionId::from("3"), TransactionPatch::new().category(""))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_delete_releases_spent() {
        let mut ledger = FinanceLedger::seeded();
        let removed = ledger.delete_transaction(&TransactionId::from("3")).unwrap();
        assert_eq!(removed.category, "Food");
        assert_eq!(spent(&ledger, "Food"), Money::zero());
        assert!(ledger.transaction(&removed.id).is_none());
    }

    #[test]
    fn test_delete_floors_spent_at_zero() {
        let mut ledger = FinanceLedger::new();
        let t = ledger.add_transaction(expense(100, "Food")).unwrap();
        // Budget created after the expense starts at zero
        ledger.set_budget("Food", units(500)).unwrap();
        ledger.delete_transaction(&t.id).unwrap();
        assert_eq!(spent(&ledger, "Food"), Money::zero());
    }

    #[test]
    fn test_delete_unknown_id_leaves_state() {
        let mut ledger = FinanceLedger::seeded();
        let before = ledger.clone();
        let err = ledger
            .delete_transaction(&TransactionId::from("nope"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_set_budget_updates_limit_only() {
        let mut ledger = FinanceLedger::seeded();
        ledger.set_budget("Food", units(800)).unwrap();
        let food = ledger.budget("Food").unwrap();
        assert_eq!(food.limit, units(800));
        assert_eq!(food.spent(), units(450));
    }

    #[test]
    fn test_set_budget_is_idempotent() {
        let mut ledger = FinanceLedger::seeded();
        ledger.set_budget("Food", units(600)).unwrap();
        let once = ledger.clone();
        ledger.set_budget("Food", units(600)).unwrap();
        assert_eq!(ledger, once);
        assert_eq!(spent(&ledger, "Food"), units(450));
    }

    #[test]
    fn test_set_budget_on_existing_expenses_starts_at_zero() {
        let mut ledger = FinanceLedger::seeded();
        ledger.set_budget("Rent", units(1500)).unwrap();
        assert_eq!(spent(&ledger, "Rent"), Money::zero());

        assert_eq!(ledger.recalculate_budget("Rent").unwrap(), units(1200));
        assert_eq!(spent(&ledger, "Rent"), units(1200));
    }

    #[test]
    fn test_set_budget_validation() {
        let mut ledger = FinanceLedger::new();
        assert!(ledger
            .set_budget("Food", Money::from_cents(-1))
            .unwrap_err()
            .is_invalid_input());
        assert!(ledger.set_budget("  ", units(10)).unwrap_err().is_invalid_input());
        assert!(ledger.budgets().is_empty());
    }

    #[test]
    fn test_recalculate_unknown_budget() {
        let mut ledger = FinanceLedger::new();
        assert!(ledger.recalculate_budget("Food").unwrap_err().is_not_found());
    }

    fn expense_of(amount: Money, category: &str) -> TransactionInput {
        TransactionInput::new(
            amount,
            category,
            TransactionKind::Expense,
            "Expense",
            date(2024, 1, 1),
        )
    }

    #[test]
    fn test_many_largest_expenses_do_not_overflow() {
        let mut ledger = FinanceLedger::new();
        ledger.add_transaction(income(1, "Salary")).unwrap();
        for _ in 0..100 {
            ledger
                .add_transaction(expense_of(Money::MAX, "Unbudgeted"))
                .unwrap();
        }

        assert!(ledger.total_expenses() > Money::MAX);
        assert!(ledger.total_savings().is_negative());
        assert!(ledger.current_balance().is_negative());
    }

    #[test]
    fn test_charge_past_largest_spent_is_rejected() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", Money::MAX).unwrap();
        ledger.add_transaction(expense_of(Money::MAX, "Food")).unwrap();
        let before = ledger.clone();

        let err = ledger
            .add_transaction(expense_of(Money::from_cents(1), "Food"))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(ledger, before);

        let err = ledger
            .add_transactions(vec![expense(1, "Rent"), expense_of(Money::MAX, "Food")])
            .unwrap_err();
        assert!(err.to_string().contains("Entry 2"));
        assert_eq!(ledger, before);

        // Income in the same category is never charged
        ledger.add_transaction(income(5, "Food")).unwrap();
        assert_eq!(spent(&ledger, "Food"), Money::MAX);
    }

    #[test]
    fn test_update_checks_spent_before_moving() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", Money::MAX).unwrap();
        ledger.set_budget("Travel", units(10)).unwrap();
        let big = ledger.add_transaction(expense_of(Money::MAX, "Food")).unwrap();
        let small = ledger.add_transaction(expense(5, "Travel")).unwrap();

        // Replacing the amount in place releases the old one first
        ledger
            .update_transaction(&big.id, TransactionPatch::new().amount(Money::MAX))
            .unwrap();
        assert_eq!(spent(&ledger, "Food"), Money::MAX);

        let before = ledger.clone();
        let err = ledger
            .update_transaction(&small.id, TransactionPatch::new().category("Food"))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_limit_above_largest_amount_is_rejected() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", Money::MAX).unwrap();
        let err = ledger
            .set_budget("Food", Money::MAX + Money::from_cents(1))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert_eq!(ledger.budget("Food").unwrap().limit, Money::MAX);
    }

    #[test]
    fn test_recalculate_rejects_unrecordable_spent() {
        let mut ledger = FinanceLedger::new();
        ledger.add_transaction(expense_of(Money::MAX, "Food")).unwrap();
        ledger.add_transaction(expense_of(Money::MAX, "Food")).unwrap();
        ledger.set_budget("Food", units(100)).unwrap();

        assert!(ledger.recalculate_budget("Food").unwrap_err().is_invalid_input());
        assert_eq!(spent(&ledger, "Food"), Money::zero());
    }

    #[test]
    fn test_totals() {
        let mut ledger = FinanceLedger::new();
        ledger.add_transaction(income(5000, "Salary")).unwrap();
        ledger.add_transaction(expense(1500, "Rent")).unwrap();
        ledger.add_transaction(expense(500, "Food")).unwrap();

        assert_eq!(ledger.total_income(), units(5000));
        assert_eq!(ledger.total_expenses(), units(2000));
        assert_eq!(ledger.total_savings(), units(3000));
        assert_eq!(ledger.current_balance(), units(3000));
    }

    #[test]
    fn test_savings_can_be_negative() {
        let mut ledger = FinanceLedger::new();
        ledger.add_transaction(expense(20, "Food")).unwrap();
        assert_eq!(ledger.total_savings(), units(-20));
    }

    #[test]
    fn test_spent_tracks_expenses_through_mixed_operations() {
        let mut ledger = FinanceLedger::new();
        ledger.set_budget("Food", units(500)).unwrap();
        ledger.set_budget("Travel", units(500)).unwrap();

        let a = ledger.add_transaction(expense(30, "Food")).unwrap();
        let b = ledger.add_transaction(expense(45, "Travel")).unwrap();
        let c = ledger.add_transaction(income(200, "Food")).unwrap();
        ledger
            .update_transaction(
                &a.id,
                TransactionPatch::new().category("Travel").amount(units(35)),
            )
            .unwrap();
        ledger
            .update_transaction(&c.id, TransactionPatch::new().kind(TransactionKind::Expense))
            .unwrap();
        ledger.delete_transaction(&b.id).unwrap();
        ledger.add_transaction(expense(12, "Food")).unwrap();

        for category in ["Food", "Travel"] {
            assert_eq!(
                spent(&ledger, category),
                ledger.expenses_for_category(category),
                "category {}",
                category
            );
        }
    }

    #[test]
    fn test_state_round_trip() {
        let ledger = FinanceLedger::seeded();
        let restored = FinanceLedger::from_state(ledger.to_state()).unwrap();
        assert_eq!(ledger, restored);
    }

    #[test]
    fn test_from_state_rejects_duplicates() {
        let mut state = FinanceLedger::seeded().to_state();
        let dup = state.transactions[0].clone();
        state.transactions.push(dup);
        assert!(FinanceLedger::from_state(state).is_err());

        let mut state = FinanceLedger::seeded().to_state();
        state.budgets.push(Budget::new("Food", units(1)));
        assert!(FinanceLedger::from_state(state).is_err());
    }

    #[test]
    fn test_preferences() {
        let mut ledger = FinanceLedger::new();
        ledger.set_currency(Currency::Gbp);
        ledger.set_theme(Theme::Light);
        assert_eq!(ledger.preferences().currency, Currency::Gbp);
        assert_eq!(ledger.to_state().theme, Theme::Light);
    }
}
