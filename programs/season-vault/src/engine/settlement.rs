use anchor_lang::prelude::*;

use crate::{
    errors::SeasonVaultError,
    events::SeasonFinalized,
    reserve::{mul_div_floor, YieldReserve},
    state::{DepositorPosition, FinalizationSnapshot, SeasonState},
};

/// Principal plus points-weighted yield owed to one depositor.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WithdrawPreview {
    pub principal: u64,
    pub yield_share: u64,
    pub payout: u64,
}

/// Freezes the reserve valuation and unlocks withdrawals. Runs once.
pub fn finalize<R: YieldReserve>(season: &mut SeasonState, now: i64, reserve: &R) -> Result<SeasonFinalized> {
    require_gte!(now, season.window.season_end, SeasonVaultError::TooEarly);
    require!(!season.is_finalized(), SeasonVaultError::AlreadyFinalized);

    let receipt_units = season.total_receipt_units;
    let reserve_value = reserve.valuation(receipt_units)?;
    let total_yield = reserve_value.saturating_sub(season.total_principal);
    let stranded_yield = if season.total_points == 0 { total_yield } else { 0 };

    season.snapshot = Some(FinalizationSnapshot {
        reserve_value,
        total_yield,
        receipt_units,
        stranded_yield,
        finalized_at: now,
    });

    msg!(
        "season {} finalized: value={} principal={} yield={} points={}",
        season.season_id,
        reserve_value,
        season.total_principal,
        total_yield,
        season.total_points
    );

    Ok(SeasonFinalized {
        reserve_value,
        total_yield,
        total_principal: season.total_principal,
        total_points: season.total_points,
        stranded_yield,
        receipt_units,
        finalized_at: now,
    })
}

/// Payout for `principal`/`points` against a frozen snapshot.
///
/// The yield share is floored, so the sum over all depositors never exceeds
/// `total_yield`; the remainder stays in the vault.
pub fn quote_payout(
    snapshot: &FinalizationSnapshot,
    total_points: u64,
    principal: u64,
    points: u64,
) -> Result<WithdrawPreview> {
    let yield_share = if total_points == 0 {
        0
    } else {
        mul_div_floor(snapshot.total_yield, points, total_points)?
    };
    let payout = principal
        .checked_add(yield_share)
        .ok_or(SeasonVaultError::Overflow)?;

    Ok(WithdrawPreview {
        principal,
        yield_share,
        payout,
    })
}

/// Read-only counterpart of `withdraw`; zero when nothing is claimable.
pub fn preview_withdraw(season: &SeasonState, position: &DepositorPosition) -> Result<WithdrawPreview> {
    let snapshot = match &season.snapshot {
        Some(snapshot) if !position.withdrawn && position.principal > 0 => snapshot,
        _ => return Ok(WithdrawPreview::default()),
    };

    quote_payout(snapshot, season.total_points, position.principal, position.points)
}
