use anchor_lang::prelude::*;

use crate::{
    errors::SeasonVaultError,
    events::SeasonInitialized,
    state::{SeasonState, SeasonWindow},
};

/// Everything `initialize_season` needs to open a season.
#[derive(Clone, Debug)]
pub struct SeasonParams {
    pub season_id: u64,
    pub owner: Pubkey,
    pub scorekeeper: Pubkey,
    pub deposit_start: i64,
    pub deposit_end: i64,
    pub season_end: i64,
    pub reserve: Pubkey,
    pub reserve_program: Pubkey,
    pub receipt_mint: Pubkey,
    pub vault_receipt_account: Pubkey,
    pub bump: u8,
    pub vault_authority_bump: u8,
}

pub fn initialize_season(season: &mut SeasonState, params: SeasonParams) -> Result<SeasonInitialized> {
    let window = SeasonWindow::new(params.deposit_start, params.deposit_end, params.season_end)?;

    for key in [params.reserve, params.receipt_mint, params.scorekeeper] {
        require_keys_neq!(key, Pubkey::default(), SeasonVaultError::ZeroAddress);
    }

    *season = SeasonState {
        season_id: params.season_id,
        owner: params.owner,
        scorekeeper: params.scorekeeper,
        pending_scorekeeper: None,
        window,
        reserve: params.reserve,
        reserve_program: params.reserve_program,
        receipt_mint: params.receipt_mint,
        vault_receipt_account: params.vault_receipt_account,
        total_principal: 0,
        total_points: 0,
        total_receipt_units: 0,
        total_paid_out: 0,
        snapshot: None,
        bump: params.bump,
        vault_authority_bump: params.vault_authority_bump,
        _reserved: [0u8; 32],
    };

    Ok(SeasonInitialized {
        season_id: season.season_id,
        owner: season.owner,
        scorekeeper: season.scorekeeper,
        deposit_start: window.deposit_start,
        deposit_end: window.deposit_end,
        season_end: window.season_end,
        reserve: season.reserve,
        receipt_mint: season.receipt_mint,
        vault_receipt_account: season.vault_receipt_account,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::testing::params;

    #[test]
    fn test_initialize_records_configuration() {
        let p = params();
        let mut season = SeasonState::default();

        let event = initialize_season(&mut season, p.clone()).unwrap();

        assert_eq!(season.window, SeasonWindow::new(100, 200, 1000).unwrap());
        assert_eq!(season.scorekeeper, p.scorekeeper);
        assert_eq!(season.pending_scorekeeper, None);
        assert!(!season.is_finalized());
        assert_eq!(event.reserve, p.reserve);
        assert_eq!(event.season_end, 1000);
    }

    #[test]
    fn test_initialize_rejects_missing_identities() {
        let cases: [fn(&mut SeasonParams); 3] = [
            |p| p.reserve = Pubkey::default(),
            |p| p.receipt_mint = Pubkey::default(),
            |p| p.scorekeeper = Pubkey::default(),
        ];

        for mutate in cases {
            let mut p = params();
            mutate(&mut p);
            let mut season = SeasonState::default();
            let err = initialize_season(&mut season, p).unwrap_err();
            assert_eq!(err, SeasonVaultError::ZeroAddress.into());
            assert_eq!(season, SeasonState::default());
        }
    }

    #[test]
    fn test_initialize_rejects_bad_window() {
        let mut p = params();
        p.deposit_end = p.season_end;
        let err = initialize_season(&mut SeasonState::default(), p).unwrap_err();
        assert_eq!(err, SeasonVaultError::InvalidWindow.into());
    }
}
