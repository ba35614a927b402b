//! Term fee models.
//!
//! This module contains the [`TermFee`] record: the payment and
//! publication state gating a student's result disclosure for one term.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::term::Term;

/// How a term fee was paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Paid in cash at the school office.
    Cash,
    /// Paid by bank transfer.
    BankTransfer,
    /// Paid by card.
    Card,
}

/// The fee, payment, and publish-state record for a student for one term.
///
/// Three independent gates hang off this record: `paid`, `viewable`, and
/// the PIN. All three must pass for result disclosure; none implies
/// another. `viewable` is a staff-controlled publish flag deliberately
/// decoupled from payment.
///
/// # Example
///
/// ```
/// use results_engine::models::{Term, TermFee};
/// use rust_decimal::Decimal;
///
/// let fee = TermFee {
///     term: Term::First,
///     year: 2025,
///     amount: Decimal::new(45_000, 0),
///     paid: true,
///     pin_code: "1234".to_string(),
///     viewable: true,
///     payment_date: None,
///     payment_method: None,
/// };
/// assert!(fee.pin_matches("1234"));
/// assert!(!fee.pin_matches("0000"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermFee {
    /// The term this fee applies to.
    pub term: Term,
    /// The academic year this fee applies to.
    pub year: i32,
    /// The fee amount.
    pub amount: Decimal,
    /// Whether the fee has been paid. Transitions false to true when a
    /// payment is recorded.
    pub paid: bool,
    /// The per-term secret code gating public result disclosure.
    pub pin_code: String,
    /// Staff-controlled publish flag, independent of `paid`.
    pub viewable: bool,
    /// The date the payment was recorded, if paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_date: Option<NaiveDate>,
    /// How the payment was made, if paid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
}

impl TermFee {
    /// Checks a supplied PIN against this record's code.
    ///
    /// The comparison lives here so a hardened store (hashed codes,
    /// constant-time compare) only has to change this one method.
    pub fn pin_matches(&self, supplied: &str) -> bool {
        self.pin_code == supplied
    }

    /// Checks whether this record is for the given term and year.
    pub fn is_for(&self, term: Term, year: i32) -> bool {
        self.term == term && self.year == year
    }
}
