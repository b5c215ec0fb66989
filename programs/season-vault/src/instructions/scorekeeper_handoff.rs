use anchor_lang::prelude::*;

use crate::{constants::*, engine, state::SeasonState};

#[derive(Accounts)]
pub struct ProposeScorekeeper<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [SEASON_SEED, season_state.season_id.to_le_bytes().as_ref()],
        bump = season_state.bump
    )]
    pub season_state: Account<'info, SeasonState>,
}

#[derive(Accounts)]
pub struct AcceptScorekeeper<'info> {
    pub candidate: Signer<'info>,

    #[account(
        mut,
        seeds = [SEASON_SEED, season_state.season_id.to_le_bytes().as_ref()],
        bump = season_state.bump
    )]
    pub season_state: Account<'info, SeasonState>,
}

pub fn propose_scorekeeper(ctx: Context<ProposeScorekeeper>, candidate: Pubkey) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    let event = engine::propose_scorekeeper(
        &mut ctx.accounts.season_state,
        ctx.accounts.owner.key(),
        candidate,
        now,
    )?;
    emit!(event);

    Ok(())
}

pub fn accept_scorekeeper(ctx: Context<AcceptScorekeeper>) -> Result<()> {
    let event = engine::accept_scorekeeper(&mut ctx.accounts.season_state, ctx.accounts.candidate.key())?;
    msg!("scorekeeper {} -> {}", event.previous, event.new);
    emit!(event);

    Ok(())
}
