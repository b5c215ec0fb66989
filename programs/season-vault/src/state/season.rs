use anchor_lang::prelude::*;

use crate::errors::SeasonVaultError;

/// Deposit and scoring schedule, fixed at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeasonWindow {
    pub deposit_start: i64,
    pub deposit_end: i64,
    pub season_end: i64,
}

impl SeasonWindow {
    pub const LEN: usize = 8 * 3;

    pub fn new(deposit_start: i64, deposit_end: i64, season_end: i64) -> Result<Self> {
        if !(deposit_start < deposit_end && deposit_end < season_end) {
            msg!(
                "invalid season window: start={} deposit_end={} season_end={}",
                deposit_start,
                deposit_end,
                season_end
            );
            return err!(SeasonVaultError::InvalidWindow);
        }

        Ok(Self {
            deposit_start,
            deposit_end,
            season_end,
        })
    }

    pub fn accepts_deposits(&self, now: i64) -> bool {
        now >= self.deposit_start && now < self.deposit_end
    }

    pub fn is_active(&self, now: i64) -> bool {
        now < self.season_end
    }
}

/// Lifecycle phase, derived from the clock and the finalized flag. Never stored.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    PreStart,
    DepositOpen,
    DepositClosed,
    AwaitingFinalization,
    Finalized,
}

pub fn phase(now: i64, finalized: bool, window: &SeasonWindow) -> Phase {
    if finalized {
        Phase::Finalized
    } else if now < window.deposit_start {
        Phase::PreStart
    } else if now < window.deposit_end {
        Phase::DepositOpen
    } else if now < window.season_end {
        Phase::DepositClosed
    } else {
        Phase::AwaitingFinalization
    }
}

/// Valuation frozen by `finalize`. All payout math reads from here.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FinalizationSnapshot {
    /// Reserve valuation of the vault's receipt units at finalization
    pub reserve_value: u64,

    /// max(0, reserve_value - total_principal)
    pub total_yield: u64,

    /// Receipt units held by the vault at finalization
    pub receipt_units: u64,

    /// Yield nobody can claim because no points were awarded
    pub stranded_yield: u64,

    pub finalized_at: i64,
}

impl FinalizationSnapshot {
    pub const LEN: usize = 8 * 5;
}

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct SeasonState {
    /// Season identifier used in the PDA seeds
    pub season_id: u64,

    /// Owner allowed to propose a new scorekeeper
    pub owner: Pubkey,

    /// Identity allowed to award points
    pub scorekeeper: Pubkey,

    /// Candidate awaiting `accept_scorekeeper`
    pub pending_scorekeeper: Option<Pubkey>,

    pub window: SeasonWindow,

    /// Stake pool account acting as the yield reserve
    pub reserve: Pubkey,

    /// Program owning the stake pool
    pub reserve_program: Pubkey,

    /// Receipt (pool token) mint
    pub receipt_mint: Pubkey,

    /// Vault token account holding the receipt units
    pub vault_receipt_account: Pubkey,

    pub total_principal: u64,

    pub total_points: u64,

    /// Receipt units recorded through `deposit`, minus units paid out
    pub total_receipt_units: u64,

    /// Sum of all payouts made so far
    pub total_paid_out: u64,

    /// Written exactly once by `finalize`
    pub snapshot: Option<FinalizationSnapshot>,

    pub bump: u8,

    pub vault_authority_bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 32],
}

impl SeasonState {
    pub const LEN: usize = 8 + // discriminator
        8 + // season_id
        32 + // owner
        32 + // scorekeeper
        1 + 32 + // Option<pending_scorekeeper>
        SeasonWindow::LEN + // window
        32 + // reserve
        32 + // reserve_program
        32 + // receipt_mint
        32 + // vault_receipt_account
        8 + // total_principal
        8 + // total_points
        8 + // total_receipt_units
        8 + // total_paid_out
        1 + FinalizationSnapshot::LEN + // Option<snapshot>
        1 + // bump
        1 + // vault_authority_bump
        32; // _reserved

    pub fn is_finalized(&self) -> bool {
        self.snapshot.is_some()
    }

    pub fn phase(&self, now: i64) -> Phase {
        phase(now, self.is_finalized(), &self.window)
    }
}
