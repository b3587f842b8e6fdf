use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Lifecycle state of a loan record.
///
/// `Repaid` is terminal. `Defaulted` exists in the persisted encoding
/// for forward compatibility, but no operation currently transitions
/// into it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LoanStatus {
    /// Requested by a borrower; awaiting a lender.
    Pending,
    /// A lender accepted the request; no repayment received yet.
    Approved,
    /// At least one partial repayment has been applied.
    Active,
    /// Fully repaid. Terminal.
    Repaid,
    /// Reserved; no operation sets this state.
    Defaulted,
}

impl LoanStatus {
    /// Returns `true` if a repayment may be applied in this state.
    pub fn accepts_repayment(&self) -> bool {
        matches!(self, Self::Approved | Self::Active)
    }
}

impl fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Approved => write!(f, "Approved"),
            Self::Active => write!(f, "Active"),
            Self::Repaid => write!(f, "Repaid"),
            Self::Defaulted => write!(f, "Defaulted"),
        }
    }
}

/// Simple-interest repayment projection over the loan term.
///
/// `interest_rate` is an annualized percentage, `duration` the term in
/// months. The result is fixed at creation and never recomputed.
pub fn scheduled_repayment(amount: f64, interest_rate: f64, duration: u32) -> f64 {
    amount * (1.0 + (interest_rate / 100.0) * f64::from(duration) / 12.0)
}

/// The persisted loan record, keyed in the world state by its loan ID.
///
/// Field names and order are the ledger wire encoding and must stay
/// compatible with existing ledger state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    /// Unique ledger key; never changes after creation.
    pub loan_id: String,
    /// Opaque borrower identifier, set at creation.
    pub borrower_id: String,
    /// Opaque lender identifier; empty until the loan is approved.
    pub lender_id: String,
    /// Principal. Immutable after creation.
    pub amount: f64,
    /// Annualized interest rate in percent. Immutable after creation.
    pub interest_rate: f64,
    /// Term in months. Immutable after creation.
    pub duration: u32,
    pub status: LoanStatus,
    /// Reserved. No operation writes it; stamping wall-clock time inside
    /// the contract would diverge across replicas.
    pub disbursement_date: String,
    /// Total owed over the term, fixed at creation.
    pub repayment_due: f64,
    /// Outstanding amount. Non-increasing, floored at zero.
    pub remaining_balance: f64,
    /// Reserved. Always `false`; no operation sets it.
    pub defaulted: bool,
}

impl Loan {
    /// Build a fresh request record in `Pending` state.
    ///
    /// `repayment_due` and `remaining_balance` both start at the
    /// simple-interest projection for the requested terms.
    pub fn request(
        loan_id: &str,
        borrower_id: &str,
        amount: f64,
        interest_rate: f64,
        duration: u32,
    ) -> Self {
        let due = scheduled_repayment(amount, interest_rate, duration);
        Self {
            loan_id: loan_id.to_string(),
            borrower_id: borrower_id.to_string(),
            lender_id: String::new(),
            amount,
            interest_rate,
            duration,
            status: LoanStatus::Pending,
            disbursement_date: String::new(),
            repayment_due: due,
            remaining_balance: due,
            defaulted: false,
        }
    }

    /// Encode to the persisted wire form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(self).map_err(|e| CodecError::Encode(e.to_string()))
    }

    /// Decode from the persisted wire form.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        serde_json::from_slice(bytes).map_err(|e| CodecError::Decode(e.to_string()))
    }
}
