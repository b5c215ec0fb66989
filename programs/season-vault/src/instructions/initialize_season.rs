use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{
    constants::*,
    engine::{self, SeasonParams},
    errors::SeasonVaultError,
    stake_pool_integration::read_stake_pool,
    state::SeasonState,
};

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeSeasonArgs {
    pub season_id: u64,
    pub deposit_start: i64,
    pub deposit_end: i64,
    pub season_end: i64,
    pub scorekeeper: Pubkey,
}

#[derive(Accounts)]
#[instruction(args: InitializeSeasonArgs)]
pub struct InitializeSeason<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    #[account(
        init,
        payer = owner,
        space = SeasonState::LEN,
        seeds = [SEASON_SEED, args.season_id.to_le_bytes().as_ref()],
        bump
    )]
    pub season_state: Box<Account<'info, SeasonState>>,

    /// PDA that owns the vault's receipt units
    /// CHECK: derived and used as token authority only
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, season_state.key().as_ref()],
        bump
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        init,
        payer = owner,
        associated_token::mint = receipt_mint,
        associated_token::authority = vault_authority,
    )]
    pub vault_receipt_account: Box<Account<'info, TokenAccount>>,

    /// Stake pool acting as the yield reserve
    /// CHECK: owner checked here, layout and mint checked in the handler
    #[account(owner = stake_pool_program.key() @ SeasonVaultError::InvalidReserveAccount)]
    pub stake_pool: UncheckedAccount<'info>,

    /// CHECK: must be an executable program; recorded for later CPIs
    #[account(executable)]
    pub stake_pool_program: UncheckedAccount<'info>,

    /// Pool token mint of the stake pool
    pub receipt_mint: Box<Account<'info, Mint>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

pub fn initialize_season(ctx: Context<InitializeSeason>, args: InitializeSeasonArgs) -> Result<()> {
    let pool = read_stake_pool(&ctx.accounts.stake_pool)?;
    require_keys_eq!(
        pool.pool_mint,
        ctx.accounts.receipt_mint.key(),
        SeasonVaultError::InvalidReserveAccount
    );
    // Payouts move pool tokens with the classic token program
    require_keys_eq!(
        pool.token_program_id,
        spl_token::ID,
        SeasonVaultError::InvalidReserveAccount
    );

    let params = SeasonParams {
        season_id: args.season_id,
        owner: ctx.accounts.owner.key(),
        scorekeeper: args.scorekeeper,
        deposit_start: args.deposit_start,
        deposit_end: args.deposit_end,
        season_end: args.season_end,
        reserve: ctx.accounts.stake_pool.key(),
        reserve_program: ctx.accounts.stake_pool_program.key(),
        receipt_mint: ctx.accounts.receipt_mint.key(),
        vault_receipt_account: ctx.accounts.vault_receipt_account.key(),
        bump: ctx.bumps.season_state,
        vault_authority_bump: ctx.bumps.vault_authority,
    };

    let event = engine::initialize_season(&mut ctx.accounts.season_state, params)?;
    emit!(event);

    Ok(())
}
