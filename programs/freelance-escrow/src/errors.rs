use anchor_lang::prelude::*;

/// Outcome of a pure state-machine transition or validation. Converted
/// into an Anchor error at the instruction boundary by the
/// `#[error_code]`-generated `From` impl.
pub type JobResult = std::result::Result<(), JobError>;

#[error_code]
pub enum JobError {
    // ── Authorization errors ────────────────────────────────────────────
    #[msg("Caller is not the employer of this job")]
    NotEmployer,

    #[msg("Caller is not the employee of this job")]
    NotEmployee,

    #[msg("Signer is not the board or oracle authority")]
    Unauthorized,

    // ── Lifecycle errors ────────────────────────────────────────────────
    #[msg("An employer cannot apply to their own job")]
    EmployerCantEmployHimself,

    #[msg("This address has already applied to the job")]
    AlreadyApplied,

    #[msg("The named address is not the current applicant")]
    NotApplied,

    #[msg("Job has no approved employee")]
    JobNotApproved,

    #[msg("Employee has not accepted the pending pay change")]
    PayNotAccepted,

    #[msg("A full payment period has not elapsed since the last payment")]
    PayOnlyOncePerPeriod,

    #[msg("Provided value is below the required native amount")]
    NotEnoughProvided,

    #[msg("Employee cannot be dismissed before the first payment")]
    CantDismissBeforeFirstPayment,

    // ── Registry errors ─────────────────────────────────────────────────
    #[msg("Client job index does not match the board job count")]
    JobIndexMismatch,

    // ── Input length errors ─────────────────────────────────────────────
    #[msg("Title exceeds maximum length of 64 characters")]
    TitleTooLong,

    #[msg("Description exceeds maximum length of 200 characters")]
    DescriptionTooLong,

    // ── Oracle and arithmetic errors ────────────────────────────────────
    #[msg("Price feed reports a zero price")]
    InvalidPrice,

    #[msg("Price feed has not been updated within the freshness window")]
    StalePrice,

    #[msg("Arithmetic overflow")]
    Overflow,
}
