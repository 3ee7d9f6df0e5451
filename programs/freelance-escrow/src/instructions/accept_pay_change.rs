use anchor_lang::prelude::*;
use crate::errors::JobError;
use crate::state::Job;

/// Current employee acknowledges a pending pay change, arming the
/// employer's next `set_pay_rate`.
pub fn handler(ctx: Context<AcceptPayChange>) -> Result<()> {
    let job = &mut ctx.accounts.job;
    job.accept_pay_change(ctx.accounts.employee.key())?;

    msg!("Job {}: pay change accepted by {}", job.id, job.employee);
    Ok(())
}

#[derive(Accounts)]
pub struct AcceptPayChange<'info> {
    #[account(
        mut,
        seeds = [b"job", &job.id.to_le_bytes()],
        bump = job.bump,
        has_one = employee @ JobError::NotEmployee,
    )]
    pub job: Account<'info, Job>,

    pub employee: Signer<'info>,
}
