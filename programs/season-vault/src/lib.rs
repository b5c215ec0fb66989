use anchor_lang::prelude::*;

pub mod constants;
pub mod engine;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod reserve;
pub mod stake_pool_integration;
pub mod state;

use engine::WithdrawPreview;
use errors::SeasonVaultError;
use instructions::*;
use reserve::ExchangeRate;
use state::Phase;

declare_id!("Fg6PaFpoGXkYsidMpWxTWqkZ7FEfcYkgP6R1q4x5u8kQ");

#[program]
pub mod season_vault {
    use super::*;

    /// Open a season: fix its window, reserve and scorekeeper
    pub fn initialize_season(ctx: Context<InitializeSeason>, args: InitializeSeasonArgs) -> Result<()> {
        instructions::initialize_season(ctx, args)
    }

    /// Deposit SOL into the stake pool on behalf of the signer
    pub fn deposit<'info>(ctx: Context<'_, '_, 'info, 'info, Deposit<'info>>, amount: u64) -> Result<()> {
        instructions::deposit(ctx, amount)
    }

    /// Add points to a depositor (scorekeeper only, until season end)
    pub fn award_points(ctx: Context<AwardPoints>, depositor: Pubkey, delta: u64) -> Result<()> {
        instructions::award_points(ctx, depositor, delta)
    }

    /// Nominate the next scorekeeper (owner only, until season end)
    pub fn propose_scorekeeper(ctx: Context<ProposeScorekeeper>, candidate: Pubkey) -> Result<()> {
        instructions::propose_scorekeeper(ctx, candidate)
    }

    /// Take over as scorekeeper (pending candidate only)
    pub fn accept_scorekeeper(ctx: Context<AcceptScorekeeper>) -> Result<()> {
        instructions::accept_scorekeeper(ctx)
    }

    /// Snapshot the reserve valuation and unlock withdrawals (once, after season end)
    pub fn finalize(ctx: Context<Finalize>) -> Result<()> {
        instructions::finalize(ctx)
    }

    /// Pay principal plus points-weighted yield to the signer, once
    pub fn withdraw(ctx: Context<Withdraw>) -> Result<()> {
        instructions::withdraw(ctx)
    }

    /// Payout the position would receive now, via return data
    pub fn preview_withdraw(ctx: Context<PreviewWithdraw>) -> Result<WithdrawPreview> {
        instructions::preview_withdraw(ctx)
    }

    /// Current lifecycle phase
    pub fn season_phase(ctx: Context<SeasonQuery>) -> Result<Phase> {
        instructions::season_phase(ctx)
    }

    /// Pool tokens actually held by the vault account
    pub fn vault_receipt_balance(ctx: Context<VaultQuery>) -> Result<u64> {
        instructions::vault_receipt_balance(ctx)
    }

    /// Live lamport value of the vault's pool tokens
    pub fn vault_value(ctx: Context<VaultQuery>) -> Result<u64> {
        instructions::vault_value(ctx)
    }

    /// Current stake-pool lamports per pool token
    pub fn exchange_rate(ctx: Context<VaultQuery>) -> Result<ExchangeRate> {
        instructions::exchange_rate(ctx)
    }

    /// Value can only enter through `deposit`; anything else is refused
    pub fn fallback<'info>(
        _program_id: &Pubkey,
        _accounts: &'info [AccountInfo<'info>],
        _data: &[u8],
    ) -> Result<()> {
        err!(SeasonVaultError::UnsolicitedTransfer)
    }
}
