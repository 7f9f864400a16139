//! Ledger session
//!
//! Binds one [`FinanceLedger`] to its persistence collaborator. The session
//! hydrates the ledger when it opens and hands the full state to the store
//! after every mutation. Persisting is fire-and-forget: a failed save is
//! logged and never rolls back or fails the mutation that triggered it.

use tracing::{debug, info, warn};

use crate::error::{FintrackError, FintrackResult};
use crate::ledger::FinanceLedger;
use crate::models::{
    Currency, Money, Theme, Transaction, TransactionId, TransactionInput, TransactionPatch,
};
use crate::storage::{decode_state, encode_state, KeyValueStore};

/// A ledger plus the store it is persisted to
pub struct LedgerSession<S: KeyValueStore> {
    ledger: FinanceLedger,
    store: S,
    key: String,
}

impl<S: KeyValueStore> LedgerSession<S> {
    /// Open a session, hydrating from `key` or seeding the starter dataset
    pub fn open(store: S, key: impl Into<String>) -> FintrackResult<Self> {
        let key = key.into();

        let ledger = match store.load(&key)? {
            Some(blob) => {
                let state = decode_state(&blob)?;
                let ledger = FinanceLedger::from_state(state).map_err(|e| {
                    FintrackError::Storage(format!("Stored ledger under '{}' is invalid: {}", key, e))
                })?;
                info!(
                    key = %key,
                    transactions = ledger.transactions().len(),
                    budgets = ledger.budgets().len(),
                    "hydrated ledger"
                );
                ledger
            }
            None => {
                info!(key = %key, "no stored ledger, starting from the default dataset");
                FinanceLedger::seeded()
            }
        };

        Ok(Self { ledger, store, key })
    }

    /// Wrap an existing ledger without loading anything
    pub fn with_ledger(ledger: FinanceLedger, store: S, key: impl Into<String>) -> Self {
        Self {
            ledger,
            store,
            key: key.into(),
        }
    }

    pub fn ledger(&self) -> &FinanceLedger {
        &self.ledger
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn add_transaction(&mut self, input: TransactionInput) -> FintrackResult<Transaction> {
        let txn = self.ledger.add_transaction(input)?;
        self.persist();
        Ok(txn)
    }

    /// Add a batch of transactions (all or nothing) and persist once
    pub fn import_transactions(
        &mut self,
        inputs: Vec<TransactionInput>,
    ) -> FintrackResult<Vec<Transaction>> {
        let added = self.ledger.add_transactions(inputs)?;
        self.persist();
        Ok(added)
    }

    pub fn update_transaction(
        &mut self,
        id: &TransactionId,
        patch: TransactionPatch,
    ) -> FintrackResult<Transaction> {
        let txn = self.ledger.update_transaction(id, patch)?;
        self.persist();
        Ok(txn)
    }

    pub fn delete_transaction(&mut self, id: &TransactionId) -> FintrackResult<Transaction> {
        let txn = self.ledger.delete_transaction(id)?;
        self.persist();
        Ok(txn)
    }

    pub fn set_budget(&mut self, category: &str, limit: Money) -> FintrackResult<()> {
        self.ledger.set_budget(category, limit)?;
        self.persist();
        Ok(())
    }

    pub fn recalculate_budget(&mut self, category: &str) -> FintrackResult<Money> {
        let spent = self.ledger.recalculate_budget(category)?;
        self.persist();
        Ok(spent)
    }

    pub fn set_currency(&mut self, currency: Currency) {
        self.ledger.set_currency(currency);
        self.persist();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.ledger.set_theme(theme);
        self.persist();
    }

    /// Write the current state to the store, reporting any failure
    pub fn flush(&self) -> FintrackResult<()> {
        let blob = encode_state(&self.ledger.to_state())?;
        self.store.save(&self.key, &blob)?;
        debug!(key = %self.key, bytes = blob.len(), "persisted ledger");
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.flush() {
            warn!(key = %self.key, error = %e, "failed to persist ledger");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Budget, TransactionKind};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;

    const KEY: &str = "fintrack-storage";

    struct FailingStore;

    impl KeyValueStore for FailingStore {
        fn load(&self, _key: &str) -> FintrackResult<Option<String>> {
            Ok(None)
        }

        fn save(&self, _key: &str, _blob: &str) -> FintrackResult<()> {
            Err(FintrackError::Storage("disk full".into()))
        }
    }

    fn coffee() -> TransactionInput {
        TransactionInput::new(
            Money::from_cents(450),
            "Food",
            TransactionKind::Expense,
            "Coffee",
            NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
        )
    }

    #[test]
    fn test_open_seeds_when_empty() {
        let store = MemoryStore::new();
        let session = LedgerSession::open(&store, KEY).unwrap();
        assert_eq!(session.ledger(), &FinanceLedger::seeded());
        // Opening alone does not write
        assert!(store.is_empty());
    }

    #[test]
    fn test_mutations_are_persisted() {
        let store = MemoryStore::new();
        let mut session = LedgerSession::open(&store, KEY).unwrap();
        let txn = session.add_transaction(coffee()).unwrap();
        session.set_budget("Travel", Money::from_major_units(900)).unwrap();

        let reopened = LedgerSession::open(&store, KEY).unwrap();
        assert_eq!(reopened.ledger(), session.ledger());
        assert_eq!(reopened.ledger().transactions()[0].id, txn.id);
        assert_eq!(
            reopened.ledger().budget("Food").map(Budget::spent),
            Some(Money::from_cents(45450))
        );
    }

    #[test]
    fn test_failed_mutation_does_not_persist() {
        let store = MemoryStore::new();
        let mut session = LedgerSession::open(&store, KEY).unwrap();
        let err = session
            .delete_transaction(&TransactionId::from("missing"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(store.is_empty());
    }

    #[test]
    fn test_save_failure_does_not_fail_mutation() {
        let mut session = LedgerSession::open(FailingStore, KEY).unwrap();
        let txn = session.add_transaction(coffee()).unwrap();
        assert!(session.ledger().transaction(&txn.id).is_some());
        assert!(session.flush().is_err());
    }

    fn large_expense(amount: Money, category: &str) -> TransactionInput {
        TransactionInput::new(
            amount,
            category,
            TransactionKind::Expense,
            "Property",
            NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
        )
    }

    #[test]
    fn test_largest_amounts_survive_reopen() {
        let store = MemoryStore::new();
        let mut session = LedgerSession::open(&store, KEY).unwrap();
        let nearly = Money::MAX - Money::from_cents(1);
        session.set_budget("Housing", Money::MAX).unwrap();
        session
            .add_transaction(large_expense(nearly, "Housing"))
            .unwrap();
        session
            .add_transaction(large_expense(Money::from_cents(1), "Housing"))
            .unwrap();
        let whole = session
            .add_transaction(large_expense(Money::MAX, "Unbudgeted"))
            .unwrap();

        let reopened = LedgerSession::open(&store, KEY).unwrap();
        assert_eq!(reopened.ledger(), session.ledger());
        assert_eq!(
            reopened.ledger().budget("Housing").map(Budget::spent),
            Some(Money::MAX)
        );
        assert_eq!(
            reopened.ledger().transaction(&whole.id).map(|t| t.amount),
            Some(Money::MAX)
        );
        assert_eq!(reopened.ledger().transactions()[2].amount, nearly);
    }

    #[test]
    fn test_amount_past_limit_is_rejected_and_not_persisted() {
        let store = MemoryStore::new();
        let mut session = LedgerSession::open(&store, KEY).unwrap();
        let err = session
            .add_transaction(large_expense(Money::MAX + Money::from_cents(1), "Food"))
            .unwrap_err();
        assert!(err.is_invalid_input());
        assert!(store.is_empty());
        assert_eq!(session.ledger(), &FinanceLedger::seeded());
    }

    #[test]
    fn test_open_rejects_corrupt_state() {
        let store = MemoryStore::with_entry(KEY, "{{{");
        assert!(LedgerSession::open(&store, KEY).is_err());
    }

    #[test]
    fn test_preferences_persist() {
        let store = MemoryStore::new();
        let mut session = LedgerSession::open(&store, KEY).unwrap();
        session.set_currency(Currency::Jpy);
        session.set_theme(Theme::Light);

        let reopened = LedgerSession::open(&store, KEY).unwrap();
        assert_eq!(reopened.ledger().preferences().currency, Currency::Jpy);
        assert_eq!(reopened.ledger().preferences().theme, Theme::Light);
    }

    #[test]
    fn test_import_persists_once_for_batch() {
        let store = MemoryStore::new();
        let mut session =
            LedgerSession::with_ledger(FinanceLedger::new(), &store, KEY);
        let added = session
            .import_transactions(vec![coffee(), coffee()])
            .unwrap();
        assert_eq!(added.len(), 2);

        let reopened = LedgerSession::open(&store, KEY).unwrap();
        assert_eq!(reopened.ledger().transactions().len(), 2);
    }
}
