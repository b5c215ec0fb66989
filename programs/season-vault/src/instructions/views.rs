use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    engine::{self, WithdrawPreview},
    errors::SeasonVaultError,
    reserve::ExchangeRate,
    stake_pool_integration::read_stake_pool,
    state::{DepositorPosition, Phase, SeasonState},
};

#[derive(Accounts)]
pub struct PreviewWithdraw<'info> {
    pub season_state: Box<Account<'info, SeasonState>>,

    #[account(constraint = depositor_position.season == season_state.key() @ SeasonVaultError::InvalidPosition)]
    pub depositor_position: Box<Account<'info, DepositorPosition>>,
}

#[derive(Accounts)]
pub struct SeasonQuery<'info> {
    pub season_state: Box<Account<'info, SeasonState>>,
}

#[derive(Accounts)]
pub struct VaultQuery<'info> {
    pub season_state: Box<Account<'info, SeasonState>>,

    /// CHECK: address pinned to the season configuration
    #[account(address = season_state.reserve @ SeasonVaultError::InvalidReserveAccount)]
    pub stake_pool: UncheckedAccount<'info>,

    #[account(address = season_state.vault_receipt_account @ SeasonVaultError::InvalidReserveAccount)]
    pub vault_receipt_account: Box<Account<'info, TokenAccount>>,
}

pub fn preview_withdraw(ctx: Context<PreviewWithdraw>) -> Result<WithdrawPreview> {
    engine::preview_withdraw(&ctx.accounts.season_state, &ctx.accounts.depositor_position)
}

pub fn season_phase(ctx: Context<SeasonQuery>) -> Result<Phase> {
    let now = Clock::get()?.unix_timestamp;
    Ok(ctx.accounts.season_state.phase(now))
}

/// Actual token balance, including units that arrived outside `deposit`.
pub fn vault_receipt_balance(ctx: Context<VaultQuery>) -> Result<u64> {
    Ok(ctx.accounts.vault_receipt_account.amount)
}

pub fn vault_value(ctx: Context<VaultQuery>) -> Result<u64> {
    let rate = read_stake_pool(&ctx.accounts.stake_pool)?.exchange_rate();
    rate.units_to_value(ctx.accounts.vault_receipt_account.amount)
}

pub fn exchange_rate(ctx: Context<VaultQuery>) -> Result<ExchangeRate> {
    Ok(read_stake_pool(&ctx.accounts.stake_pool)?.exchange_rate())
}
