use tracing::debug;

use lendchain_state::WorldState;
use lendchain_types::{Loan, LoanStatus};

use crate::error::{ContractError, ContractResult};
use crate::validation::{require_identifier, require_positive, require_positive_duration};

/// Stateless loan lifecycle engine.
///
/// Every operation takes the world state as an explicit capability and
/// performs at most one read-then-write pair on the loan's key. All
/// preconditions are checked before any write is staged, so a failed
/// operation leaves the ledger untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct LoanContract;

impl LoanContract {
    /// Create a new loan request in `Pending` state.
    ///
    /// Fails with [`ContractError::Duplicate`] if the key already holds
    /// a record, and with [`ContractError::Validation`] for a
    /// non-positive amount, rate, or duration.
    pub fn request_loan(
        &self,
        state: &dyn WorldState,
        loan_id: &str,
        borrower_id: &str,
        amount: f64,
        interest_rate: f64,
        duration: u32,
    ) -> ContractResult<()> {
        if state.get(loan_id)?.is_some() {
            return Err(ContractError::Duplicate(loan_id.to_string()));
        }
        require_identifier("borrower id", borrower_id)?;
        require_positive("loan amount", amount)?;
        require_positive("interest rate", interest_rate)?;
        require_positive_duration(duration)?;

        let loan = Loan::request(loan_id, borrower_id, amount, interest_rate, duration);
        debug!(loan_id, amount, due = loan.repayment_due, "loan requested");
        self.write_loan(state, &loan)
    }

    /// Accept a pending request on behalf of `lender_id`.
    ///
    /// Only a `Pending` loan can be approved. The disbursement date is
    /// deliberately left empty: stamping wall-clock time here would
    /// diverge across replicas.
    pub fn approve_loan(
        &self,
        state: &dyn WorldState,
        loan_id: &str,
        lender_id: &str,
    ) -> ContractResult<()> {
        let mut loan = self.read_loan(state, loan_id)?;
        if loan.status != LoanStatus::Pending {
            return Err(ContractError::InvalidState {
                loan_id: loan_id.to_string(),
                status: loan.status,
            });
        }

        loan.lender_id = lender_id.to_string();
        loan.status = LoanStatus::Approved;
        debug!(loan_id, lender_id, "loan approved");
        self.write_loan(state, &loan)
    }

    /// Apply a repayment to an `Approved` or `Active` loan.
    ///
    /// A payment that meets or exceeds the remaining balance clamps the
    /// balance to zero and finalizes the loan as `Repaid`; the excess is
    /// absorbed, not tracked or refunded. Any smaller payment leaves the
    /// loan `Active`.
    pub fn repay_loan(
        &self,
        state: &dyn WorldState,
        loan_id: &str,
        amount: f64,
    ) -> ContractResult<()> {
        require_positive("repayment amount", amount)?;

        let mut loan = self.read_loan(state, loan_id)?;
        if !loan.status.accepts_repayment() {
            return Err(ContractError::InvalidState {
                loan_id: loan_id.to_string(),
                status: loan.status,
            });
        }

        loan.remaining_balance -= amount;
        if loan.remaining_balance <= 0.0 {
            loan.remaining_balance = 0.0;
            loan.status = LoanStatus::Repaid;
        } else {
            loan.status = LoanStatus::Active;
        }

        debug!(
            loan_id,
            amount,
            balance = loan.remaining_balance,
            status = %loan.status,
            "repayment applied"
        );
        self.write_loan(state, &loan)
    }

    /// Read and decode the loan stored under `loan_id`. Pure read.
    pub fn query_loan(&self, state: &dyn WorldState, loan_id: &str) -> ContractResult<Loan> {
        self.read_loan(state, loan_id)
    }

    fn read_loan(&self, state: &dyn WorldState, loan_id: &str) -> ContractResult<Loan> {
        let bytes = state
            .get(loan_id)?
            .ok_or_else(|| ContractError::NotFound(loan_id.to_string()))?;
        Ok(Loan::from_bytes(&bytes)?)
    }

    fn write_loan(&self, state: &dyn WorldState, loan: &Loan) -> ContractResult<()> {
        state.put(&loan.loan_id, &loan.to_bytes()?)?;
        Ok(())
    }
}
