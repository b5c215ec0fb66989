use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    constants::*,
    engine,
    errors::SeasonVaultError,
    stake_pool_integration::StakePoolReserve,
    state::SeasonState,
};

#[derive(Accounts)]
pub struct Finalize<'info> {
    /// Anyone may crank finalization once the season has ended
    pub cranker: Signer<'info>,

    #[account(
        mut,
        seeds = [SEASON_SEED, season_state.season_id.to_le_bytes().as_ref()],
        bump = season_state.bump
    )]
    pub season_state: Box<Account<'info, SeasonState>>,

    /// CHECK: address pinned to the season configuration
    #[account(address = season_state.reserve @ SeasonVaultError::InvalidReserveAccount)]
    pub stake_pool: UncheckedAccount<'info>,

    #[account(address = season_state.vault_receipt_account @ SeasonVaultError::InvalidReserveAccount)]
    pub vault_receipt_account: Box<Account<'info, TokenAccount>>,
}

pub fn finalize(ctx: Context<Finalize>) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = ctx.accounts;

    let reserve = StakePoolReserve::new(&accounts.stake_pool, &mut accounts.vault_receipt_account);
    let event = engine::finalize(&mut accounts.season_state, now, &reserve)?;
    emit!(event);

    Ok(())
}
