use anchor_lang::prelude::*;

use crate::errors::SeasonVaultError;

#[account]
#[derive(Default, Debug, PartialEq, Eq)]
pub struct DepositorPosition {
    /// Associated season
    pub season: Pubkey,

    /// Depositor wallet; default until the position is first used
    pub depositor: Pubkey,

    /// Lamports deposited, only ever increases
    pub principal: u64,

    /// Competition score, written by the scorekeeper
    pub points: u64,

    /// Receipt units minted for this depositor's deposits
    pub receipt_units: u64,

    /// Set once the payout has been made
    pub withdrawn: bool,

    /// Bump seed for PDA derivation
    pub bump: u8,

    /// Reserved space for future upgrades
    pub _reserved: [u8; 16],
}

impl DepositorPosition {
    pub const LEN: usize = 8 + // discriminator
        32 + // season
        32 + // depositor
        8 + // principal
        8 + // points
        8 + // receipt_units
        1 + // withdrawn
        1 + // bump
        16; // _reserved

    /// Binds a freshly created position to `depositor`, or checks an existing binding.
    pub fn bind(&mut self, depositor: Pubkey) -> Result<()> {
        if self.depositor == Pubkey::default() {
            self.depositor = depositor;
            return Ok(());
        }

        require_keys_eq!(self.depositor, depositor, SeasonVaultError::InvalidPosition);
        Ok(())
    }
}
