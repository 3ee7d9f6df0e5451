use anchor_lang::prelude::*;
use crate::errors::JobError;
use crate::state::Board;

/// Update board configuration (authority-only).
/// Allows rotating the oracle authority or transferring the board itself.
pub fn handler(
    ctx: Context<UpdateBoard>,
    new_oracle_authority: Option<Pubkey>,
    new_authority: Option<Pubkey>,
) -> Result<()> {
    let board = &mut ctx.accounts.board;

    if let Some(oracle) = new_oracle_authority {
        msg!("Oracle authority updated: {} -> {}", board.oracle_authority, oracle);
        board.oracle_authority = oracle;
    }

    if let Some(authority) = new_authority {
        msg!("Board authority transferred: {} -> {}", board.authority, authority);
        board.authority = authority;
    }

    Ok(())
}

#[derive(Accounts)]
pub struct UpdateBoard<'info> {
    #[account(
        mut,
        seeds = [b"board"],
        bump = board.bump,
        has_one = authority @ JobError::Unauthorized,
    )]
    pub board: Account<'info, Board>,

    pub authority: Signer<'info>,
}
