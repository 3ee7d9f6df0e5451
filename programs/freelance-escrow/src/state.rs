use anchor_lang::prelude::*;

use crate::access;
use crate::errors::{JobError, JobResult};
use crate::payment;

// ============================================================================
// CONSTANTS
// ============================================================================

/// Maximum length for a job title
pub const MAX_TITLE_LEN: usize = 64;

/// Maximum length for a job description
pub const MAX_DESCRIPTION_LEN: usize = 200;

// ============================================================================
// BOARD - Global job registry PDA
// ============================================================================

#[account]
pub struct Board {
    /// Authority who initialized the board
    pub authority: Pubkey,
    /// Sole key allowed to push prices into the feed
    pub oracle_authority: Pubkey,
    /// Number of jobs ever created; also the next job id
    pub job_count: u64,
    /// PDA bump seed
    pub bump: u8,
}

impl Board {
    /// authority (32) + oracle_authority (32) + job_count (8) + bump (1) = 73
    pub const LEN: usize = 32 + 32 + 8 + 1;
}

// ============================================================================
// PRICE FEED - SOL/USD oracle PDA, written by the oracle authority
// ============================================================================

#[account]
pub struct PriceFeed {
    /// USD per SOL, scaled by 1e8
    pub price: u64,
    /// Unix timestamp of the last push (0 = never published)
    pub updated_at: i64,
    /// PDA bump seed
    pub bump: u8,
}

impl PriceFeed {
    /// price (8) + updated_at (8) + bump (1) = 17
    pub const LEN: usize = 8 + 8 + 1;
}

// ============================================================================
// JOB - Per-job lifecycle state PDA
// ============================================================================

#[account]
pub struct Job {
    /// Sequential 0-based id, assigned once from Board.job_count
    pub id: u64,
    /// Employer who posted the job; fixed for the job's lifetime
    pub employer: Pubkey,
    /// Job title (max 64 chars)
    pub title: String,
    /// Job description (max 200 chars)
    pub description: String,
    /// Current applicant (Pubkey::default() if none)
    pub applicant: Pubkey,
    /// Approved employee (Pubkey::default() if vacant)
    pub employee: Pubkey,
    /// Negotiated pay rate in whole USD per period; 0 until set
    pub pay_rate_usd: u64,
    /// True only after the current employee acknowledged a pending
    /// rate change; consumed by the next set_pay_rate
    pub pay_accepted: bool,
    /// Unix timestamp of the approval that hired the current employee
    pub hired_at: i64,
    /// Unix timestamp of the most recent successful payment (0 = never)
    pub last_payment_at: i64,
    /// True once at least one payment has completed; gates dismissal
    pub has_been_paid: bool,
    /// Job PDA bump seed
    pub bump: u8,
}

impl Job {
    /// Borsh String layout: 4 bytes (u32 length prefix) + content bytes
    ///
    /// Fields:
    ///   id:              8
    ///   employer:        32
    ///   title:           4 + MAX_TITLE_LEN       = 68
    ///   description:     4 + MAX_DESCRIPTION_LEN = 204
    ///   applicant:       32
    ///   employee:        32
    ///   pay_rate_usd:    8
    ///   pay_accepted:    1
    ///   hired_at:        8
    ///   last_payment_at: 8
    ///   has_been_paid:   1
    ///   bump:            1
    ///   -------------------------------------------
    ///   Total:           403
    pub const LEN: usize = 8
        + 32
        + (4 + MAX_TITLE_LEN)
        + (4 + MAX_DESCRIPTION_LEN)
        + 32
        + 32
        + 8
        + 1
        + 8
        + 8
        + 1
        + 1;
}

// ============================================================================
// JOB STATE MACHINE
// ============================================================================
//
// Every transition checks all of its preconditions before touching any
// field, so a rejected call leaves the record exactly as it found it.

impl Job {
    /// Length limits for a new posting, checked before the account is
    /// touched.
    pub fn validate_posting(title: &str, description: &str) -> JobResult {
        if title.len() > MAX_TITLE_LEN {
            return Err(JobError::TitleTooLong);
        }
        if description.len() > MAX_DESCRIPTION_LEN {
            return Err(JobError::DescriptionTooLong);
        }
        Ok(())
    }

    /// An outside address applies for the job. Reapplication by a
    /// different address overwrites the single applicant slot.
    pub fn apply(&mut self, caller: Pubkey) -> JobResult {
        if access::is_employer(&caller, self) {
            return Err(JobError::EmployerCantEmployHimself);
        }
        if access::is_applicant(&caller, self) {
            return Err(JobError::AlreadyApplied);
        }

        self.applicant = caller;
        Ok(())
    }

    /// Employer promotes the current applicant to employee.
    pub fn approve(&mut self, caller: Pubkey, target: Pubkey, now: i64) -> JobResult {
        if !access::is_employer(&caller, self) {
            return Err(JobError::NotEmployer);
        }
        if !access::is_applicant(&target, self) {
            return Err(JobError::NotApplied);
        }

        self.employee = target;
        self.applicant = Pubkey::default();
        self.hired_at = now;
        Ok(())
    }

    /// Employer clears both slots, returning the job to the vacant state.
    /// Also resets the acceptance flag so it cannot carry over to a
    /// future hire.
    pub fn decline(&mut self, caller: Pubkey) -> JobResult {
        if !access::is_employer(&caller, self) {
            return Err(JobError::NotEmployer);
        }

        self.applicant = Pubkey::default();
        self.employee = Pubkey::default();
        self.pay_accepted = false;
        Ok(())
    }

    /// Current employee acknowledges a pending rate change.
    pub fn accept_pay_change(&mut self, caller: Pubkey) -> JobResult {
        if !access::is_employee(&caller, self) {
            return Err(JobError::NotEmployee);
        }

        self.pay_accepted = true;
        Ok(())
    }

    /// Employer sets a new USD rate. Requires a hired employee who has
    /// accepted the change; consumes the acceptance.
    pub fn set_pay_rate(&mut self, caller: Pubkey, amount_usd: u64) -> JobResult {
        if !access::is_employer(&caller, self) {
            return Err(JobError::NotEmployer);
        }
        if self.employee == Pubkey::default() {
            return Err(JobError::JobNotApproved);
        }
        if !self.pay_accepted {
            return Err(JobError::PayNotAccepted);
        }

        self.pay_rate_usd = amount_usd;
        self.pay_accepted = false;
        Ok(())
    }

    /// Validate and book one payment. The caller converts the rate and
    /// performs the lamport transfer *after* this returns, so a reentrant
    /// call can never observe a stale record.
    pub fn record_payment(
        &mut self,
        caller: Pubkey,
        now: i64,
        provided: u64,
        required: u64,
    ) -> JobResult {
        if !access::is_employer(&caller, self) {
            return Err(JobError::NotEmployer);
        }

        // Before the first payment the period runs from the hire.
        let since = if self.has_been_paid {
            self.last_payment_at
        } else {
            self.hired_at
        };
        if !payment::period_elapsed(since, now) {
            return Err(JobError::PayOnlyOncePerPeriod);
        }
        if !payment::value_sufficient(provided, required) {
            return Err(JobError::NotEnoughProvided);
        }

        self.last_payment_at = now;
        self.has_been_paid = true;
        Ok(())
    }

    /// Employer dismisses the employee. Only permitted once at least one
    /// payment has completed.
    pub fn dismiss(&mut self, caller: Pubkey) -> JobResult {
        if !access::is_employer(&caller, self) {
            return Err(JobError::NotEmployer);
        }
        if !self.has_been_paid {
            return Err(JobError::CantDismissBeforeFirstPayment);
        }

        self.employee = Pubkey::default();
        self.pay_accepted = false;
        Ok(())
    }
}
