use anchor_lang::prelude::*;
use crate::errors::JobError;
use crate::state::Job;

/// Employer approves the named applicant, promoting them to employee.
/// The hire time starts the first payment period.
pub fn handler(ctx: Context<ApproveJob>, applicant: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let job = &mut ctx.accounts.job;
    job.approve(ctx.accounts.employer.key(), applicant, now)?;

    msg!("Job {}: {} hired at {}", job.id, job.employee, job.hired_at);
    Ok(())
}

#[derive(Accounts)]
pub struct ApproveJob<'info> {
    #[account(
        mut,
        seeds = [b"job", &job.id.to_le_bytes()],
        bump = job.bump,
        has_one = employer @ JobError::NotEmployer,
    )]
    pub job: Account<'info, Job>,

    pub employer: Signer<'info>,
}
