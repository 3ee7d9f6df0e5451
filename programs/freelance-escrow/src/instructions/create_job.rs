use anchor_lang::prelude::*;
use crate::errors::JobError;
use crate::state::{Board, Job};

/// Post a new job.
///
/// The client passes the id it expects (`board.job_count`); the PDA seed
/// binds the account to that index and the `require_eq` rejects any
/// stale or replayed index, which keeps ids monotonic with no gaps.
pub fn handler(
    ctx: Context<CreateJob>,
    job_id: u64,
    title: String,
    description: String,
) -> Result<()> {
    Job::validate_posting(&title, &description)?;

    let board = &mut ctx.accounts.board;
    require_eq!(job_id, board.job_count, JobError::JobIndexMismatch);

    let job = &mut ctx.accounts.job;
    job.id = job_id;
    job.employer = ctx.accounts.employer.key();
    job.title = title;
    job.description = description;
    job.applicant = Pubkey::default();
    job.employee = Pubkey::default();
    job.pay_rate_usd = 0;
    job.pay_accepted = false;
    job.hired_at = 0;
    job.last_payment_at = 0;
    job.has_been_paid = false;
    job.bump = ctx.bumps.job;

    board.job_count = board.job_count.checked_add(1).ok_or(JobError::Overflow)?;

    msg!(
        "Job {} posted by {}: \"{}\"",
        job.id,
        job.employer,
        job.title
    );
    Ok(())
}

#[derive(Accounts)]
#[instruction(job_id: u64)]
pub struct CreateJob<'info> {
    #[account(
        mut,
        seeds = [b"board"],
        bump = board.bump,
    )]
    pub board: Account<'info, Board>,

    #[account(
        init,
        payer = employer,
        space = 8 + Job::LEN,
        seeds = [b"job".as_ref(), &job_id.to_le_bytes()],
        bump,
    )]
    pub job: Account<'info, Job>,

    #[account(mut)]
    pub employer: Signer<'info>,

    pub system_program: Program<'info, System>,
}
