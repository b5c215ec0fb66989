use anchor_lang::prelude::*;

use crate::{
    constants::*,
    engine,
    state::{DepositorPosition, SeasonState},
};

#[derive(Accounts)]
#[instruction(depositor: Pubkey, delta: u64)]
pub struct AwardPoints<'info> {
    #[account(mut)]
    pub scorekeeper: Signer<'info>,

    #[account(
        mut,
        seeds = [SEASON_SEED, season_state.season_id.to_le_bytes().as_ref()],
        bump = season_state.bump
    )]
    pub season_state: Box<Account<'info, SeasonState>>,

    #[account(
        init_if_needed,
        payer = scorekeeper,
        space = DepositorPosition::LEN,
        seeds = [POSITION_SEED, season_state.key().as_ref(), depositor.as_ref()],
        bump
    )]
    pub depositor_position: Box<Account<'info, DepositorPosition>>,

    pub system_program: Program<'info, System>,
}

pub fn award_points(ctx: Context<AwardPoints>, depositor: Pubkey, delta: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let season_key = ctx.accounts.season_state.key();

    let position = &mut ctx.accounts.depositor_position;
    if position.season == Pubkey::default() {
        position.season = season_key;
        position.bump = ctx.bumps.depositor_position;
    }

    let event = engine::award_points(
        &mut ctx.accounts.season_state,
        &mut ctx.accounts.depositor_position,
        ctx.accounts.scorekeeper.key(),
        depositor,
        delta,
        now,
    )?;
    emit!(event);

    Ok(())
}
