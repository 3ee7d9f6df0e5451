use anchor_lang::prelude::*;
use crate::state::Job;

/// An outside address applies for a posted job.
pub fn handler(ctx: Context<ApplyJob>) -> Result<()> {
    let job = &mut ctx.accounts.job;
    job.apply(ctx.accounts.applicant.key())?;

    msg!("Job {}: application from {}", job.id, job.applicant);
    Ok(())
}

#[derive(Accounts)]
pub struct ApplyJob<'info> {
    /// PDA seed constraint ensures this is a job account created by this
    /// program, not an arbitrary account.
    #[account(
        mut,
        seeds = [b"job", &job.id.to_le_bytes()],
        bump = job.bump,
    )]
    pub job: Account<'info, Job>,

    pub applicant: Signer<'info>,
}
