use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{
    constants::*,
    engine,
    errors::SeasonVaultError,
    stake_pool_integration::{DepositRoute, StakePoolReserve},
    state::{DepositorPosition, SeasonState},
};

#[derive(Accounts)]
pub struct Deposit<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [SEASON_SEED, season_state.season_id.to_le_bytes().as_ref()],
        bump = season_state.bump
    )]
    pub season_state: Box<Account<'info, SeasonState>>,

    #[account(
        init_if_needed,
        payer = depositor,
        space = DepositorPosition::LEN,
        seeds = [POSITION_SEED, season_state.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub depositor_position: Box<Account<'info, DepositorPosition>>,

    #[account(
        mut,
        address = season_state.vault_receipt_account @ SeasonVaultError::InvalidReserveAccount
    )]
    pub vault_receipt_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: address pinned to the season configuration
    #[account(
        mut,
        address = season_state.reserve @ SeasonVaultError::InvalidReserveAccount
    )]
    pub stake_pool: UncheckedAccount<'info>,

    /// CHECK: address pinned to the season configuration
    #[account(address = season_state.reserve_program @ SeasonVaultError::InvalidReserveAccount)]
    pub stake_pool_program: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
    // Remaining accounts are the stake-pool DepositSol accounts, in pool order
}

pub fn deposit<'info>(ctx: Context<'_, '_, 'info, 'info, Deposit<'info>>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let accounts = ctx.accounts;
    let depositor = accounts.depositor.key();
    let season_key = accounts.season_state.key();

    let position = &mut accounts.depositor_position;
    if position.season == Pubkey::default() {
        position.season = season_key;
        position.bump = ctx.bumps.depositor_position;
    }

    let mut reserve = StakePoolReserve::new(&accounts.stake_pool, &mut accounts.vault_receipt_account)
        .with_deposit_route(DepositRoute {
            stake_pool_program: &accounts.stake_pool_program,
            accounts: ctx.remaining_accounts,
            depositor,
        });

    let event = engine::deposit(
        &mut accounts.season_state,
        &mut accounts.depositor_position,
        depositor,
        amount,
        now,
        &mut reserve,
    )?;
    emit!(event);

    Ok(())
}
