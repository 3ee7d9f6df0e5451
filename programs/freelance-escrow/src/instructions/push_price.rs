use anchor_lang::prelude::*;
use crate::errors::JobError;
use crate::state::{Board, PriceFeed};

/// Oracle authority publishes a fresh SOL/USD price (scaled by 1e8).
///
/// `pay_employee` reads the feed at call time and rejects a price older
/// than the freshness window, so stale rates never settle a paycheck.
pub fn handler(ctx: Context<PushPrice>, price: u64) -> Result<()> {
    require!(price > 0, JobError::InvalidPrice);

    let feed = &mut ctx.accounts.price_feed;
    feed.price = price;
    feed.updated_at = Clock::get()?.unix_timestamp;

    msg!("Price pushed: {} (1e8 USD/SOL) at {}", feed.price, feed.updated_at);
    Ok(())
}

#[derive(Accounts)]
pub struct PushPrice<'info> {
    #[account(
        seeds = [b"board"],
        bump = board.bump,
        has_one = oracle_authority @ JobError::Unauthorized,
    )]
    pub board: Account<'info, Board>,

    #[account(
        mut,
        seeds = [b"price"],
        bump = price_feed.bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,

    pub oracle_authority: Signer<'info>,
}
