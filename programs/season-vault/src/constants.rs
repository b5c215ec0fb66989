/// PDA seeds
pub const SEASON_SEED: &[u8] = b"season_state";
/// Seeds: [VAULT_AUTHORITY_SEED, season_state]
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
/// Seeds: [POSITION_SEED, season_state, depositor]
pub const POSITION_SEED: &[u8] = b"user_position";

/// SPL stake-pool `DepositSol` instruction tag
pub const STAKE_POOL_DEPOSIT_SOL_TAG: u8 = 14;

/// Account index layout expected by `DepositSol`
pub const DEPOSIT_SOL_STAKE_POOL_INDEX: usize = 0;
pub const DEPOSIT_SOL_LAMPORTS_FROM_INDEX: usize = 3;
pub const DEPOSIT_SOL_POOL_TOKENS_TO_INDEX: usize = 4;
pub const DEPOSIT_SOL_MIN_ACCOUNTS: usize = 10;

/// `AccountType::StakePool` discriminant in the stake-pool header
pub const STAKE_POOL_ACCOUNT_TYPE: u8 = 1;
