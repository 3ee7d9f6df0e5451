use anchor_lang::prelude::*;
use crate::errors::JobError;
use crate::state::Job;

/// Employer dismisses the employee after at least one completed payment.
/// The job returns to the vacant state and stays on the board.
pub fn handler(ctx: Context<DismissEmployee>) -> Result<()> {
    let job = &mut ctx.accounts.job;
    let dismissed = job.employee;
    job.dismiss(ctx.accounts.employer.key())?;

    msg!("Job {}: {} dismissed", job.id, dismissed);
    Ok(())
}

#[derive(Accounts)]
pub struct DismissEmployee<'info> {
    #[account(
        mut,
        seeds = [b"job", &job.id.to_le_bytes()],
        bump = job.bump,
        has_one = employer @ JobError::NotEmployer,
    )]
    pub job: Account<'info, Job>,

    pub employer: Signer<'info>,
}
