//! Transactions as sent by the finance API and as displayed in the dashboard.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time_tz::Tz;

use crate::{
    format::{format_date, format_value},
    timezone::get_local_offset_at,
};

/// The identifier the finance API assigns to a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a transaction ID from the string the finance API uses.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Whether a transaction brought money in or sent it out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money received.
    Income,
    /// Money spent.
    Outcome,
}

impl TransactionType {
    /// The lowercase name used on the wire and as a CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Outcome => "outcome",
        }
    }
}

/// The category a transaction was filed under.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The display name of the category.
    pub title: String,
}

/// A transaction exactly as the finance API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The unique ID of the transaction.
    pub id: TransactionId,
    /// A short description of the transaction.
    pub title: String,
    /// The amount of money, always expressed as a non-negative number.
    pub value: f64,
    /// Whether the money came in or went out.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// The category of the transaction.
    pub category: Category,
    /// When the transaction was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// A transaction with the strings needed to display it.
///
/// Created once per transaction with [to_display] when the dashboard data is
/// loaded, the formatted fields are never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayTransaction {
    /// The unique ID of the transaction.
    pub id: TransactionId,
    /// A short description of the transaction.
    pub title: String,
    /// The amount of money.
    pub value: f64,
    /// Whether the money came in or went out.
    pub kind: TransactionType,
    /// The category of the transaction.
    pub category: Category,
    /// When the transaction was recorded.
    pub created_at: OffsetDateTime,
    /// `value` formatted as currency.
    pub formatted_value: String,
    /// The local date of `created_at`.
    pub formatted_date: String,
}

impl DisplayTransaction {
    /// The formatted value with a leading minus for outgoing money.
    pub fn signed_value(&self) -> String {
        match self.kind {
            TransactionType::Income => self.formatted_value.clone(),
            TransactionType::Outcome => format!("- {}", self.formatted_value),
        }
    }
}

/// Convert a transaction from the finance API into one ready for display.
///
/// The date is shown in the local time of `timezone`, using the UTC offset
/// that applied when the transaction was recorded.
pub fn to_display(transaction: Transaction, timezone: &Tz) -> DisplayTransaction {
    let offset = get_local_offset_at(timezone, transaction.created_at);

    DisplayTransaction {
        formatted_value: format_value(transaction.value),
        formatted_date: format_date(transaction.created_at, offset),
        id: transaction.id,
        title: transaction.title,
        value: transaction.value,
        kind: transaction.kind,
        category: transaction.category,
        created_at: transaction.created_at,
    }
}
