#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use season_vault::{
    engine::{self, SeasonParams},
    errors::SeasonVaultError,
    reserve::{mul_div_floor, ExchangeRate, YieldReserve},
    state::{DepositorPosition, SeasonState},
};

/// Deterministic in-memory reserve. The vault is the only depositor, so
/// `vault_units` starts equal to `total_units`.
#[derive(Debug, Default)]
pub struct InMemoryReserve {
    pub total_value: u64,
    pub total_units: u64,
    pub vault_units: u64,
    pub balances: HashMap<Pubkey, u64>,
}

impl InMemoryReserve {
    /// Sets the value backing all outstanding units (yield accrual or loss).
    pub fn reprice(&mut self, total_value: u64) {
        self.total_value = total_value;
    }

    pub fn vault_value(&self) -> u64 {
        self.valuation(self.vault_units).unwrap()
    }

    pub fn units_of(&self, holder: &Pubkey) -> u64 {
        self.balances.get(holder).copied().unwrap_or(0)
    }
}

impl YieldReserve for InMemoryReserve {
    fn deposit(&mut self, amount: u64) -> Result<u64> {
        let units = if self.total_units == 0 {
            amount
        } else {
            mul_div_floor(amount, self.total_units, self.total_value)?
        };
        self.total_value += amount;
        self.total_units += units;
        self.vault_units += units;
        Ok(units)
    }

    fn redeem(&mut self, units: u64, recipient: &Pubkey) -> Result<u64> {
        require_gte!(self.vault_units, units, SeasonVaultError::InsufficientReserve);
        self.vault_units -= units;
        *self.balances.entry(*recipient).or_default() += units;
        Ok(units)
    }

    fn exchange_rate(&self) -> Result<ExchangeRate> {
        Ok(ExchangeRate::new(self.total_value, self.total_units))
    }
}

/// One season plus its positions and reserve, driven through the engine.
pub struct Harness {
    pub season: SeasonState,
    pub positions: HashMap<Pubkey, DepositorPosition>,
    pub reserve: InMemoryReserve,
    pub owner: Pubkey,
    pub scorekeeper: Pubkey,
}

impl Harness {
    pub fn new(deposit_start: i64, deposit_end: i64, season_end: i64) -> Self {
        let owner = Pubkey::new_unique();
        let scorekeeper = Pubkey::new_unique();
        let mut season = SeasonState::default();
        engine::initialize_season(
            &mut season,
            SeasonParams {
                season_id: 7,
                owner,
                scorekeeper,
                deposit_start,
                deposit_end,
                season_end,
                reserve: Pubkey::new_unique(),
                reserve_program: Pubkey::new_unique(),
                receipt_mint: Pubkey::new_unique(),
                vault_receipt_account: Pubkey::new_unique(),
                bump: 255,
                vault_authority_bump: 255,
            },
        )
        .unwrap();

        Self {
            season,
            positions: HashMap::new(),
            reserve: InMemoryReserve::default(),
            owner,
            scorekeeper,
        }
    }

    /// Window (100, 200, 1000) used throughout the settlement scenarios.
    pub fn standard() -> Self {
        Self::new(100, 200, 1000)
    }

    pub fn deposit(&mut self, depositor: Pubkey, amount: u64, now: i64) -> Result<()> {
        let position = self.positions.entry(depositor).or_default();
        engine::deposit(&mut self.season, position, depositor, amount, now, &mut self.reserve)?;
        Ok(())
    }

    pub fn award(&mut self, caller: Pubkey, depositor: Pubkey, delta: u64, now: i64) -> Result<()> {
        let position = self.positions.entry(depositor).or_default();
        engine::award_points(&mut self.season, position, caller, depositor, delta, now)?;
        Ok(())
    }

    pub fn finalize(&mut self, now: i64) -> Result<()> {
        engine::finalize(&mut self.season, now, &self.reserve)?;
        Ok(())
    }

    pub fn withdraw(&mut self, depositor: Pubkey) -> Result<engine::WithdrawPreview> {
        let position = self.positions.entry(depositor).or_default();
        let event = engine::withdraw(&mut self.season, position, depositor, &mut self.reserve)?;
        Ok(engine::WithdrawPreview {
            principal: event.principal,
            yield_share: event.yield_share,
            payout: event.payout,
        })
    }

    pub fn preview(&self, depositor: &Pubkey) -> engine::WithdrawPreview {
        let position = self.positions.get(depositor).cloned().unwrap_or_default();
        engine::preview_withdraw(&self.season, &position).unwrap()
    }

    /// Conservation: aggregates equal the per-position sums.
    pub fn assert_conserved(&self) {
        let principal: u64 = self.positions.values().map(|p| p.principal).sum();
        let points: u64 = self.positions.values().map(|p| p.points).sum();
        assert_eq!(principal, self.season.total_principal);
        assert_eq!(points, self.season.total_points);
    }
}
