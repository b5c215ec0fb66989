use anchor_lang::prelude::*;

use crate::{
    engine::settlement::quote_payout,
    errors::SeasonVaultError,
    events::Withdrawn,
    reserve::YieldReserve,
    state::{DepositorPosition, SeasonState},
};

/// Pays principal plus yield share to `depositor`, at most once.
///
/// Ledger state is committed before the reserve transfer. The payout is
/// converted to receipt units at the reserve's current rate, not the rate
/// frozen at finalization.
pub fn withdraw<R: YieldReserve>(
    season: &mut SeasonState,
    position: &mut DepositorPosition,
    depositor: Pubkey,
    reserve: &mut R,
) -> Result<Withdrawn> {
    let snapshot = season.snapshot.ok_or(SeasonVaultError::NotFinalized)?;
    require_keys_eq!(position.depositor, depositor, SeasonVaultError::InvalidPosition);
    require!(!position.withdrawn, SeasonVaultError::AlreadyWithdrawn);
    require!(position.principal > 0, SeasonVaultError::NoPrincipal);

    let quote = quote_payout(&snapshot, season.total_points, position.principal, position.points)?;

    let rate = reserve.exchange_rate()?;
    let payout_units = rate.value_to_units(quote.payout)?;
    require!(payout_units > 0, SeasonVaultError::ZeroPayout);
    let delivered_value = rate.units_to_value(payout_units)?;
    require_gte!(
        season.total_receipt_units,
        payout_units,
        SeasonVaultError::InsufficientReserve
    );
    let new_total_paid_out = season
        .total_paid_out
        .checked_add(quote.payout)
        .ok_or(SeasonVaultError::Overflow)?;

    let prior_units = season.total_receipt_units;
    let prior_paid_out = season.total_paid_out;
    position.withdrawn = true;
    season.total_receipt_units = prior_units - payout_units;
    season.total_paid_out = new_total_paid_out;

    if let Err(e) = reserve.redeem(payout_units, &depositor) {
        // A failed transfer must leave the ledgers untouched.
        position.withdrawn = false;
        season.total_receipt_units = prior_units;
        season.total_paid_out = prior_paid_out;
        return Err(e);
    }

    Ok(Withdrawn {
        depositor,
        principal: quote.principal,
        yield_share: quote.yield_share,
        payout: quote.payout,
        payout_units,
        delivered_value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::{open_season, FixedReserve};
    use crate::state::FinalizationSnapshot;

    fn settled(total_yield: u64, total_points: u64, units: u64) -> SeasonState {
        let mut season = open_season();
        season.total_points = total_points;
        season.total_receipt_units = units;
        season.snapshot = Some(FinalizationSnapshot {
            total_yield,
            ..Default::default()
        });
        season
    }

    fn position(depositor: Pubkey, principal: u64, points: u64) -> DepositorPosition {
        DepositorPosition {
            depositor,
            principal,
            points,
            ..Default::default()
        }
    }

    #[test]
    fn test_withdraw_requires_finalization() {
        let mut season = open_season();
        let alice = Pubkey::new_unique();
        let mut pos = position(alice, 100, 0);

        let err = withdraw(&mut season, &mut pos, alice, &mut FixedReserve::default()).unwrap_err();
        assert_eq!(err, SeasonVaultError::NotFinalized.into());
    }

    #[test]
    fn test_withdraw_single_claim() {
        let mut season = settled(100, 40, 400);
        let alice = Pubkey::new_unique();
        let mut pos = position(alice, 100, 10);
        let mut reserve = FixedReserve::with_rate(500, 400);

        let event = withdraw(&mut season, &mut pos, alice, &mut reserve).unwrap();
        assert_eq!(event.payout, 125);
        assert_eq!(event.payout_units, 100);
        assert_eq!(event.delivered_value, 125);
        assert!(pos.withdrawn);
        assert_eq!(reserve.redeemed, 100);

        let err = withdraw(&mut season, &mut pos, alice, &mut reserve).unwrap_err();
        assert_eq!(err, SeasonVaultError::AlreadyWithdrawn.into());
        assert_eq!(reserve.redeemed, 100);
        assert_eq!(season.total_receipt_units, 300);
    }

    #[test]
    fn test_withdraw_rejects_points_only_position() {
        let mut season = settled(100, 40, 400);
        let carol = Pubkey::new_unique();
        let mut pos = position(carol, 0, 40);

        let err = withdraw(&mut season, &mut pos, carol, &mut FixedReserve::with_rate(500, 400)).unwrap_err();
        assert_eq!(err, SeasonVaultError::NoPrincipal.into());
    }

    #[test]
    fn test_insufficient_reserve_leaves_state_intact() {
        let mut season = settled(0, 0, 50);
        let alice = Pubkey::new_unique();
        let mut pos = position(alice, 100, 0);
        let before = season.clone();

        let err = withdraw(&mut season, &mut pos, alice, &mut FixedReserve::with_rate(1, 1)).unwrap_err();
        assert_eq!(err, SeasonVaultError::InsufficientReserve.into());
        assert!(!pos.withdrawn);
        assert_eq!(season, before);
    }

    #[test]
    fn test_failed_redeem_rolls_back() {
        let mut season = settled(0, 0, 400);
        let alice = Pubkey::new_unique();
        let mut pos = position(alice, 100, 0);
        let mut reserve = FixedReserve::with_rate(1, 1);
        reserve.fail_redeem = true;
        let before = season.clone();

        assert!(withdraw(&mut season, &mut pos, alice, &mut reserve).is_err());
        assert!(!pos.withdrawn);
        assert_eq!(season, before);

        reserve.fail_redeem = false;
        withdraw(&mut season, &mut pos, alice, &mut reserve).unwrap();
        assert!(pos.withdrawn);
    }

    #[test]
    fn test_withdraw_rejects_foreign_position() {
        let mut season = settled(0, 0, 400);
        let mut pos = position(Pubkey::new_unique(), 100, 0);

        let err = withdraw(&mut season, &mut pos, Pubkey::new_unique(), &mut FixedReserve::with_rate(1, 1))
            .unwrap_err();
        assert_eq!(err, SeasonVaultError::InvalidPosition.into());
    }

    #[test]
    fn test_payout_units_round_down_at_live_rate() {
        let mut season = settled(51, 1, 5_000);
        let alice = Pubkey::new_unique();
        let mut pos = position(alice, 1_000, 1);

        let event = withdraw(&mut season, &mut pos, alice, &mut FixedReserve::with_rate(2_103, 2_000)).unwrap();
        assert_eq!(event.payout, 1_051);
        assert_eq!(event.payout_units, 999);
        assert_eq!(event.delivered_value, 1_050);
        assert_eq!(season.total_receipt_units, 4_001);
    }

    #[test]
    fn test_payout_worth_less_than_one_unit_is_refused() {
        let mut season = settled(0, 0, 400);
        let alice = Pubkey::new_unique();
        let mut pos = position(alice, 1, 0);
        let mut reserve = FixedReserve::with_rate(1_000, 1);
        let before = season.clone();

        let err = withdraw(&mut season, &mut pos, alice, &mut reserve).unwrap_err();
        assert_eq!(err, SeasonVaultError::ZeroPayout.into());
        assert!(!pos.withdrawn);
        assert_eq!(season, before);
        assert_eq!(reserve.redeemed, 0);
    }
}
