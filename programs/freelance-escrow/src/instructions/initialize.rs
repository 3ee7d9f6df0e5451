use anchor_lang::prelude::*;
use crate::state::{Board, PriceFeed};

/// Initialize the job board and its price feed.
/// Called once after deployment, before any jobs can be posted.
pub fn handler(ctx: Context<Initialize>, oracle_authority: Pubkey) -> Result<()> {
    let board = &mut ctx.accounts.board;
    board.authority = ctx.accounts.authority.key();
    board.oracle_authority = oracle_authority;
    board.job_count = 0;
    board.bump = ctx.bumps.board;

    // The feed starts unpublished; payments are rejected as stale until
    // the oracle authority pushes a first price.
    let feed = &mut ctx.accounts.price_feed;
    feed.price = 0;
    feed.updated_at = 0;
    feed.bump = ctx.bumps.price_feed;

    msg!(
        "Board initialized: authority={}, oracle={}",
        board.authority,
        board.oracle_authority
    );
    Ok(())
}

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(
        init,
        payer = authority,
        space = 8 + Board::LEN,
        seeds = [b"board"],
        bump,
    )]
    pub board: Account<'info, Board>,

    #[account(
        init,
        payer = authority,
        space = 8 + PriceFeed::LEN,
        seeds = [b"price"],
        bump,
    )]
    pub price_feed: Account<'info, PriceFeed>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}
