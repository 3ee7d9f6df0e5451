use anchor_lang::prelude::*;
use crate::errors::JobError;
use crate::state::Job;

/// Employer sets a new USD-denominated pay rate.
///
/// Requires a hired employee who has accepted the pending change; the
/// acceptance is consumed, so every rate change needs a fresh one.
pub fn handler(ctx: Context<SetPayRate>, amount_usd: u64) -> Result<()> {
    let job = &mut ctx.accounts.job;
    job.set_pay_rate(ctx.accounts.employer.key(), amount_usd)?;

    msg!("Job {}: pay rate set to {} USD", job.id, job.pay_rate_usd);
    Ok(())
}

#[derive(Accounts)]
pub struct SetPayRate<'info> {
    #[account(
        mut,
        seeds = [b"job", &job.id.to_le_bytes()],
        bump = job.bump,
        has_one = employer @ JobError::NotEmployer,
    )]
    pub job: Account<'info, Job>,

    pub employer: Signer<'info>,
}
