//! Transaction model
//!
//! A transaction is a single income or expense event. Amounts are always
//! non-negative magnitudes; the direction comes from [`TransactionKind`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction brings money in or takes it out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }

    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" | "in" => Ok(Self::Income),
            "expense" | "out" => Ok(Self::Expense),
            other => Err(format!("Unknown transaction type: {}", other)),
        }
    }
}

/// A recorded income or expense event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, assigned by the ledger
    pub id: TransactionId,

    /// Non-negative magnitude
    pub amount: Money,

    /// Free-text category label
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    pub description: String,

    pub date: NaiveDate,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    /// Materialize an input under the given id
    pub fn from_input(id: TransactionId, input: TransactionInput) -> Self {
        Self {
            id,
            amount: input.amount,
            category: input.category,
            kind: input.kind,
            description: input.description,
            date: input.date,
            notes: input.notes,
        }
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    /// Return a copy with the patch applied. The id never changes.
    pub fn patched(&self, patch: &TransactionPatch) -> Self {
        let mut txn = self.clone();
        if let Some(amount) = patch.amount {
            txn.amount = amount;
        }
        if let Some(category) = &patch.category {
            txn.category = category.clone();
        }
        if let Some(kind) = patch.kind {
            txn.kind = kind;
        }
        if let Some(description) = &patch.description {
            txn.description = description.clone();
        }
        if let Some(date) = patch.date {
            txn.date = date;
        }
        if let Some(notes) = &patch.notes {
            txn.notes = notes.clone();
        }
        txn
    }

    /// Validate the stored fields
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.id.as_str().trim().is_empty() {
            return Err(TransactionValidationError::EmptyField("id"));
        }
        validate_fields(self.amount, &self.category, &self.description)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_expense() { "-" } else { "+" };
        write!(
            f,
            "{} {} [{}] {}{}",
            self.date.format("%Y-%m-%d"),
            self.description,
            self.category,
            sign,
            self.amount
        )
    }
}

/// A transaction without its id, as supplied to `add_transaction`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionInput {
    pub amount: Money,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub description: String,
    pub date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl TransactionInput {
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        kind: TransactionKind,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            category: category.into(),
            kind,
            description: description.into(),
            date,
            notes: None,
        }
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Trim text fields and check required values
    pub fn normalized(mut self) -> Result<Self, TransactionValidationError> {
        self.category = self.category.trim().to_string();
        self.description = self.description.trim().to_string();
        validate_fields(self.amount, &self.category, &self.description)?;
        Ok(self)
    }
}

impl From<Transaction> for TransactionInput {
    fn from(txn: Transaction) -> Self {
        Self {
            amount: txn.amount,
            category: txn.category,
            kind: txn.kind,
            description: txn.description,
            date: txn.date,
            notes: txn.notes,
        }
    }
}

/// A partial update to a transaction. There is deliberately no id field.
///
/// `notes` is doubly optional:
/// - `None`: leave notes unchanged
/// - `Some(None)`: clear notes
/// - `Some(Some(s))`: set notes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransactionPatch {
    pub amount: Option<Money>,
    pub category: Option<String>,
    pub kind: Option<TransactionKind>,
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
    pub notes: Option<Option<String>>,
}

impl TransactionPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn notes(mut self, notes: Option<String>) -> Self {
        self.notes = Some(notes);
        self
    }

    /// Check if the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.amount.is_none()
            && self.category.is_none()
            && self.kind.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.notes.is_none()
    }

    /// Trim text fields and check the values that are present
    pub fn normalized(mut self) -> Result<Self, TransactionValidationError> {
        if let Some(amount) = self.amount {
            validate_amount(amount)?;
        }
        if let Some(category) = self.category.as_mut() {
            *category = category.trim().to_string();
            if category.is_empty() {
                return Err(TransactionValidationError::EmptyField("category"));
            }
        }
        if let Some(description) = self.description.as_mut() {
            *description = description.trim().to_string();
            if description.is_empty() {
                return Err(TransactionValidationError::EmptyField("description"));
            }
        }
        Ok(self)
    }
}

fn validate_fields(
    amount: Money,
    category: &str,
    description: &str,
) -> Result<(), TransactionValidationError> {
    validate_amount(amount)?;
    if category.trim().is_empty() {
        return Err(TransactionValidationError::EmptyField("category"));
    }
    if description.trim().is_empty() {
        return Err(TransactionValidationError::EmptyField("description"));
    }
    Ok(())
}

fn validate_amount(amount: Money) -> Result<(), TransactionValidationError> {
    if amount.is_negative() {
        return Err(TransactionValidationError::NegativeAmount(amount));
    }
    if amount > Money::MAX {
        return Err(TransactionValidationError::AmountTooLarge(amount));
    }
    Ok(())
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyField(&'static str),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount must not exceed {} (got {})", Money::MAX, amount)
            }
            Self::EmptyField(field) => write!(f, "Transaction {} is required", field),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
