use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};
use crate::errors::JobError;
use crate::payment;
use crate::state::{Job, PriceFeed};

/// Employer pays the employee one period's paycheck in lamports, priced
/// at the feed's current SOL/USD rate.
///
/// `value_provided` is the amount the employer commits; only the
/// converted requirement is transferred, any excess stays put. The job
/// record is updated *before* the lamports move, so a reentrant call
/// into `pay_employee` or `dismiss_employee` observes the booked payment
/// and cannot double-spend the period.
pub fn handler(ctx: Context<PayEmployee>, value_provided: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    // Fresh rate every call; no caching.
    let feed = &ctx.accounts.price_feed;
    require!(feed.price > 0, JobError::InvalidPrice);
    require!(
        payment::price_fresh(feed.updated_at, now),
        JobError::StalePrice
    );

    let job = &mut ctx.accounts.job;
    require!(job.employee != Pubkey::default(), JobError::JobNotApproved);

    let required = payment::required_lamports(job.pay_rate_usd, feed.price)?;

    // Check-then-effect-then-transfer, in that order.
    job.record_payment(ctx.accounts.employer.key(), now, value_provided, required)?;

    if required > 0 {
        let cpi_ctx = CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.employer.to_account_info(),
                to: ctx.accounts.employee.to_account_info(),
            },
        );
        system_program::transfer(cpi_ctx, required)?;
    }

    msg!(
        "Job {}: paid {} lamports ({} USD) to {}",
        job.id,
        required,
        job.pay_rate_usd,
        job.employee
    );
    Ok(())
}

#[derive(Accounts)]
pub struct PayEmployee<'info> {
    #[account(
        mut,
        seeds = [b"job", &job.id.to_le_bytes()],
        bump = job.bump,
        has_one = employer @ JobError::NotEmployer,
        has_one = employee @ JobError::JobNotApproved,
    )]
    pub job: Account<'info, Job>,

    #[account(
        seeds = [b"price"],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,

    #[account(mut)]
    pub employer: Signer<'info>,

    /// CHECK: constrained to job.employee above; only receives lamports.
    #[account(mut)]
    pub employee: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}
