use anchor_lang::prelude::*;

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct SeasonInitialized {
    pub season_id: u64,
    pub owner: Pubkey,
    pub scorekeeper: Pubkey,
    pub deposit_start: i64,
    pub deposit_end: i64,
    pub season_end: i64,
    pub reserve: Pubkey,
    pub receipt_mint: Pubkey,
    pub vault_receipt_account: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct Deposited {
    pub depositor: Pubkey,
    pub amount: u64,
    pub receipt_units: u64,
    pub new_principal: u64,
    pub new_total_principal: u64,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct PointsAwarded {
    pub depositor: Pubkey,
    pub delta: u64,
    pub new_points: u64,
    pub new_total_points: u64,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct ScorekeeperProposed {
    pub current: Pubkey,
    pub candidate: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct ScorekeeperAccepted {
    pub previous: Pubkey,
    pub new: Pubkey,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
pub struct SeasonFinalized {
    pub reserve_value: u64,
    pub total_yield: u64,
    pub total_principal: u64,
    pub total_points: u64,
    pub stranded_yield: u64,
    pub receipt_units: u64,
    pub finalized_at: i64,
}

#[event]
#[derive(Debug, PartialEq, Eq)]
/// `payout` is the amount owed; `payout_units` are rounded down at the live
/// rate, so `delivered_value` can sit slightly below it.
pub struct Withdrawn {
    pub depositor: Pubkey,
    pub principal: u64,
    pub yield_share: u64,
    pub payout: u64,
    pub payout_units: u64,
    pub delivered_value: u64,
}
