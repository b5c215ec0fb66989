use anchor_lang::prelude::*;

use crate::errors::SeasonVaultError;

/// Reserve-wide conversion ratio between value (lamports) and receipt units.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExchangeRate {
    /// Total value managed by the reserve
    pub total_value: u64,
    /// Receipt units outstanding against that value
    pub total_units: u64,
}

impl ExchangeRate {
    pub fn new(total_value: u64, total_units: u64) -> Self {
        Self {
            total_value,
            total_units,
        }
    }

    /// Value of `units`, rounded down.
    pub fn units_to_value(&self, units: u64) -> Result<u64> {
        require!(self.total_units > 0, SeasonVaultError::InvalidExchangeRate);
        mul_div_floor(units, self.total_value, self.total_units)
    }

    /// Receipt units worth `value`, rounded down so the vault never overpays.
    pub fn value_to_units(&self, value: u64) -> Result<u64> {
        require!(self.total_value > 0, SeasonVaultError::InvalidExchangeRate);
        mul_div_floor(value, self.total_units, self.total_value)
    }
}

/// floor(a * b / c) in u128, failing if the result does not fit a u64.
pub fn mul_div_floor(a: u64, b: u64, c: u64) -> Result<u64> {
    require!(c > 0, SeasonVaultError::Overflow);
    let q = (a as u128)
        .checked_mul(b as u128)
        .ok_or(SeasonVaultError::Overflow)?
        / (c as u128);
    u64::try_from(q).map_err(|_| error!(SeasonVaultError::Overflow))
}

/// Yield-bearing reserve the vault parks deposits in.
///
/// The engine depends only on this surface so it can run against the SPL
/// stake-pool adapter on chain and an in-memory reserve in tests.
pub trait YieldReserve {
    /// Moves `amount` into the reserve and returns the receipt units minted to the vault.
    fn deposit(&mut self, amount: u64) -> Result<u64>;

    /// Current value of `units`.
    fn valuation(&self, units: u64) -> Result<u64> {
        self.exchange_rate()?.units_to_value(units)
    }

    /// Transfers `units` from the vault to `recipient`, returning the units moved.
    fn redeem(&mut self, units: u64, recipient: &Pubkey) -> Result<u64>;

    fn exchange_rate(&self) -> Result<ExchangeRate>;
}
