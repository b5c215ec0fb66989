use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::*,
    engine,
    errors::SeasonVaultError,
    stake_pool_integration::{RedeemRoute, StakePoolReserve},
    state::{DepositorPosition, SeasonState},
};

#[derive(Accounts)]
pub struct Withdraw<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
        seeds = [SEASON_SEED, season_state.season_id.to_le_bytes().as_ref()],
        bump = season_state.bump
    )]
    pub season_state: Box<Account<'info, SeasonState>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, season_state.key().as_ref(), depositor.key().as_ref()],
        bump = depositor_position.bump,
        constraint = depositor_position.season == season_state.key() @ SeasonVaultError::InvalidPosition
    )]
    pub depositor_position: Box<Account<'info, DepositorPosition>>,

    /// CHECK: PDA signer for the vault token transfer
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, season_state.key().as_ref()],
        bump = season_state.vault_authority_bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = season_state.vault_receipt_account @ SeasonVaultError::InvalidReserveAccount
    )]
    pub vault_receipt_account: Box<Account<'info, TokenAccount>>,

    #[account(address = season_state.receipt_mint @ SeasonVaultError::InvalidReserveAccount)]
    pub receipt_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = receipt_mint,
        associated_token::authority = depositor
    )]
    pub depositor_receipt_account: Box<Account<'info, TokenAccount>>,

    /// CHECK: address pinned to the season configuration
    #[account(address = season_state.reserve @ SeasonVaultError::InvalidReserveAccount)]
    pub stake_pool: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
    let accounts = ctx.accounts;
    let depositor = accounts.depositor.key();

    let recipient_info = accounts.depositor_receipt_account.to_account_info();
    let token_program_info = accounts.token_program.to_account_info();

    let season_key = accounts.season_state.key();
    let vault_authority_bump = accounts.season_state.vault_authority_bump;

    let mut reserve = StakePoolReserve::new(&accounts.stake_pool, &mut accounts.vault_receipt_account)
        .with_redeem_route(RedeemRoute {
            token_program: &token_program_info,
            vault_authority: &accounts.vault_authority,
            recipient_account: &recipient_info,
            recipient: depositor,
            season: season_key,
            vault_authority_bump,
        });

    let event = engine::withdraw(
        &mut accounts.season_state,
        &mut accounts.depositor_position,
        depositor,
        &mut reserve,
    )?;
    emit!(event);

    Ok(())
}
