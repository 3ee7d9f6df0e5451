use anchor_lang::prelude::*;

pub mod access;
pub mod errors;
pub mod instructions;
pub mod payment;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod freelance_escrow {
    use super::*;

    /// Initialize the job board and price feed.
    /// Must be called once after deployment before any jobs can be posted.
    pub fn initialize(ctx: Context<Initialize>, oracle_authority: Pubkey) -> Result<()> {
        instructions::initialize::handler(ctx, oracle_authority)
    }

    /// Update board configuration (authority-only).
    pub fn update_board(
        ctx: Context<UpdateBoard>,
        new_oracle_authority: Option<Pubkey>,
        new_authority: Option<Pubkey>,
    ) -> Result<()> {
        instructions::update_board::handler(ctx, new_oracle_authority, new_authority)
    }

    /// Oracle authority publishes a fresh SOL/USD price (1e8 scale).
    pub fn push_price(ctx: Context<PushPrice>, price: u64) -> Result<()> {
        instructions::push_price::handler(ctx, price)
    }

    /// Post a new job at the next sequential id.
    pub fn create_job(
        ctx: Context<CreateJob>,
        job_id: u64,
        title: String,
        description: String,
    ) -> Result<()> {
        instructions::create_job::handler(ctx, job_id, title, description)
    }

    /// Apply for a job.
    pub fn apply_job(ctx: Context<ApplyJob>) -> Result<()> {
        instructions::apply_job::handler(ctx)
    }

    /// Employer approves the named applicant.
    pub fn approve_job(ctx: Context<ApproveJob>, applicant: Pubkey) -> Result<()> {
        instructions::approve_job::handler(ctx, applicant)
    }

    /// Employer declines the named address, vacating the job.
    pub fn decline_job(ctx: Context<DeclineJob>, applicant: Pubkey) -> Result<()> {
        instructions::decline_job::handler(ctx, applicant)
    }

    /// Employee acknowledges a pending pay change.
    pub fn accept_pay_change(ctx: Context<AcceptPayChange>) -> Result<()> {
        instructions::accept_pay_change::handler(ctx)
    }

    /// Employer sets the USD pay rate after the employee's acceptance.
    pub fn set_pay_rate(ctx: Context<SetPayRate>, amount_usd: u64) -> Result<()> {
        instructions::set_pay_rate::handler(ctx, amount_usd)
    }

    /// Employer pays one period's paycheck in lamports at the feed rate.
    pub fn pay_employee(ctx: Context<PayEmployee>, value_provided: u64) -> Result<()> {
        instructions::pay_employee::handler(ctx, value_provided)
    }

    /// Employer dismisses the employee once at least one payment has
    /// completed.
    pub fn dismiss_employee(ctx: Context<DismissEmployee>) -> Result<()> {
        instructions::dismiss_employee::handler(ctx)
    }
}
