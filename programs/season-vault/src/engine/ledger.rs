use anchor_lang::prelude::*;

use crate::{
    errors::SeasonVaultError,
    events::{Deposited, PointsAwarded},
    reserve::YieldReserve,
    state::{DepositorPosition, SeasonState},
};

/// Principal ledger entry point. Forwards `amount` to the reserve and books it.
pub fn deposit<R: YieldReserve>(
    season: &mut SeasonState,
    position: &mut DepositorPosition,
    depositor: Pubkey,
    amount: u64,
    now: i64,
    reserve: &mut R,
) -> Result<Deposited> {
    require!(!season.is_finalized(), SeasonVaultError::WindowClosed);
    require_gte!(now, season.window.deposit_start, SeasonVaultError::WindowClosed);
    require_gt!(season.window.deposit_end, now, SeasonVaultError::WindowClosed);
    require!(amount > 0, SeasonVaultError::ZeroAmount);
    require_keys_neq!(depositor, Pubkey::default(), SeasonVaultError::ZeroAddress);
    if position.depositor != Pubkey::default() {
        require_keys_eq!(position.depositor, depositor, SeasonVaultError::InvalidPosition);
    }

    let new_principal = position
        .principal
        .checked_add(amount)
        .ok_or(SeasonVaultError::Overflow)?;
    let new_total_principal = season
        .total_principal
        .checked_add(amount)
        .ok_or(SeasonVaultError::Overflow)?;

    let receipt_units = reserve.deposit(amount)?;
    require!(receipt_units > 0, SeasonVaultError::ReserveDepositFailed);

    let new_position_units = position
        .receipt_units
        .checked_add(receipt_units)
        .ok_or(SeasonVaultError::Overflow)?;
    let new_total_units = season
        .total_receipt_units
        .checked_add(receipt_units)
        .ok_or(SeasonVaultError::Overflow)?;

    position.bind(depositor)?;
    position.principal = new_principal;
    position.receipt_units = new_position_units;
    season.total_principal = new_total_principal;
    season.total_receipt_units = new_total_units;

    Ok(Deposited {
        depositor,
        amount,
        receipt_units,
        new_principal,
        new_total_principal,
    })
}

/// Points ledger entry point, scorekeeper only, while the season is active.
pub fn award_points(
    season: &mut SeasonState,
    position: &mut DepositorPosition,
    caller: Pubkey,
    depositor: Pubkey,
    delta: u64,
    now: i64,
) -> Result<PointsAwarded> {
    require_keys_eq!(caller, season.scorekeeper, SeasonVaultError::Unauthorized);
    require_keys_neq!(depositor, Pubkey::default(), SeasonVaultError::ZeroAddress);
    require!(!season.is_finalized(), SeasonVaultError::SeasonOver);
    require_gt!(season.window.season_end, now, SeasonVaultError::SeasonOver);
    if position.depositor != Pubkey::default() {
        require_keys_eq!(position.depositor, depositor, SeasonVaultError::InvalidPosition);
    }

    let new_points = position
        .points
        .checked_add(delta)
        .ok_or(SeasonVaultError::Overflow)?;
    let new_total_points = season
        .total_points
        .checked_add(delta)
        .ok_or(SeasonVaultError::Overflow)?;

    position.bind(depositor)?;
    position.points = new_points;
    season.total_points = new_total_points;

    Ok(PointsAwarded {
        depositor,
        delta,
        new_points,
        new_total_points,
    })
}
