use anchor_lang::prelude::*;
use crate::errors::JobError;
use crate::state::Job;

/// Employer declines the named address, vacating both the applicant and
/// employee slots regardless of their prior values. The job stays
/// queryable and can be applied to again.
pub fn handler(ctx: Context<DeclineJob>, applicant: Pubkey) -> Result<()> {
    let job = &mut ctx.accounts.job;
    job.decline(ctx.accounts.employer.key())?;

    msg!("Job {}: {} declined, job vacant", job.id, applicant);
    Ok(())
}

#[derive(Accounts)]
pub struct DeclineJob<'info> {
    #[account(
        mut,
        seeds = [b"job", &job.id.to_le_bytes()],
        bump = job.bump,
        has_one = employer @ JobError::NotEmployer,
    )]
    pub job: Account<'info, Job>,

    pub employer: Signer<'info>,
}
