use anchor_lang::prelude::*;

#[error_code]
pub enum SeasonVaultError {
    #[msg("Season window must satisfy deposit_start < deposit_end < season_end")]
    InvalidWindow,

    #[msg("Address must not be the default pubkey")]
    ZeroAddress,

    #[msg("Amount must be greater than zero")]
    ZeroAmount,

    #[msg("Deposit window is closed")]
    WindowClosed,

    #[msg("Season is over")]
    SeasonOver,

    #[msg("Season has not ended yet")]
    TooEarly,

    #[msg("Season already finalized")]
    AlreadyFinalized,

    #[msg("Season not finalized")]
    NotFinalized,

    #[msg("Caller is not authorized for this operation")]
    Unauthorized,

    #[msg("Math overflow")]
    Overflow,

    #[msg("Depositor already withdrew")]
    AlreadyWithdrawn,

    #[msg("Depositor has no principal")]
    NoPrincipal,

    #[msg("Vault does not hold enough receipt units for this payout")]
    InsufficientReserve,

    #[msg("Position does not belong to this depositor or season")]
    InvalidPosition,

    #[msg("Reserve exchange rate is degenerate")]
    InvalidExchangeRate,

    #[msg("Payout converts to zero receipt units")]
    ZeroPayout,

    #[msg("Reserve account does not match the season configuration")]
    InvalidReserveAccount,

    #[msg("Reserve deposit did not mint receipt units to the vault")]
    ReserveDepositFailed,

    #[msg("Reserve adapter was not wired for this operation")]
    ReserveOperationUnavailable,

    #[msg("Value may only enter the vault through deposit")]
    UnsolicitedTransfer,
}
