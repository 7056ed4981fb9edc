//! The income, outcome and total summary shown at the top of the dashboard
//! and the rules for patching it after a transaction is deleted.

use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{format::round_to_cents, transaction::TransactionType};

/// The totals of all transactions as reported by the finance API.
///
/// The fields hold numbers as strings, the way the finance API sends them.
/// Use [parse_amount] to get a number out of a field. The fields are empty
/// before the dashboard data has been loaded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    /// The sum of all income transactions.
    #[serde(default, deserialize_with = "amount_as_string")]
    pub income: String,
    /// The sum of all outcome transactions.
    #[serde(default, deserialize_with = "amount_as_string")]
    pub outcome: String,
    /// Income minus outcome.
    #[serde(default, deserialize_with = "amount_as_string")]
    pub total: String,
}

impl Balance {
    /// Create a balance from the three totals.
    pub fn new(income: f64, outcome: f64, total: f64) -> Self {
        Self {
            income: amount_to_string(income),
            outcome: amount_to_string(outcome),
            total: amount_to_string(total),
        }
    }
}

/// Parse an amount stored in a [Balance] field.
///
/// Empty or malformed amounts count as zero.
pub fn parse_amount(amount: &str) -> f64 {
    let amount = amount.trim();

    if amount.is_empty() {
        return 0.0;
    }

    amount.parse().unwrap_or_else(|error| {
        tracing::warn!("could not parse the balance amount {amount:?}, using zero: {error}");
        0.0
    })
}

fn amount_to_string(amount: f64) -> String {
    let amount = round_to_cents(amount);

    // Avoid "-0" after subtracting a value from itself.
    if amount == 0.0 {
        "0".to_owned()
    } else {
        amount.to_string()
    }
}

/// The finance API may send amounts as JSON numbers or strings.
#[derive(Deserialize)]
#[serde(untagged)]
enum WireAmount {
    Number(serde_json::Number),
    Text(String),
}

fn amount_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let amount = Option::<WireAmount>::deserialize(deserializer)?;

    Ok(match amount {
        Some(WireAmount::Number(number)) => number.to_string(),
        Some(WireAmount::Text(text)) => text,
        None => String::new(),
    })
}

/// How the balance is patched locally after a transaction is deleted.
///
/// The balance is never recomputed from the full transaction list, only the
/// deleted transaction's type and value are used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum BalancePatchRule {
    /// Deleting an income subtracts its value from both the income and the
    /// outcome totals. Deleting an outcome leaves the balance as is.
    ///
    /// This is the behaviour users have seen so far, the outcome update is
    /// awaiting product confirmation.
    #[default]
    Observed,
    /// Deleting an income subtracts from income, deleting an outcome
    /// subtracts from outcome.
    Corrected,
}

impl BalancePatchRule {
    /// Compute the balance after deleting a transaction of `kind` worth
    /// `value`. The total is always recomputed as income minus outcome when
    /// the balance changes.
    pub fn apply(self, balance: &Balance, kind: TransactionType, value: f64) -> Balance {
        let income = parse_amount(&balance.income);
        let outcome = parse_amount(&balance.outcome);

        let (new_income, new_outcome) = match (self, kind) {
            (BalancePatchRule::Observed, TransactionType::Income) => {
                (income - value, outcome - value)
            }
            (BalancePatchRule::Observed, TransactionType::Outcome) => return balance.clone(),
            (BalancePatchRule::Corrected, TransactionType::Income) => (income - value, outcome),
            (BalancePatchRule::Corrected, TransactionType::Outcome) => (income, outcome - value),
        };

        Balance::new(new_income, new_outcome, new_income - new_outcome)
    }
}
