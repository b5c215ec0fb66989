use anchor_lang::prelude::*;

use crate::{
    errors::SeasonVaultError,
    events::{ScorekeeperAccepted, ScorekeeperProposed},
    state::SeasonState,
};

/// First half of the scorekeeper handoff. A later proposal replaces an earlier one.
pub fn propose_scorekeeper(
    season: &mut SeasonState,
    caller: Pubkey,
    candidate: Pubkey,
    now: i64,
) -> Result<ScorekeeperProposed> {
    require_keys_eq!(caller, season.owner, SeasonVaultError::Unauthorized);
    require!(!season.is_finalized(), SeasonVaultError::SeasonOver);
    require_gt!(season.window.season_end, now, SeasonVaultError::SeasonOver);
    require_keys_neq!(candidate, Pubkey::default(), SeasonVaultError::ZeroAddress);

    season.pending_scorekeeper = Some(candidate);

    Ok(ScorekeeperProposed {
        current: season.scorekeeper,
        candidate,
    })
}

/// Second half: only the pending candidate can complete the transfer.
pub fn accept_scorekeeper(season: &mut SeasonState, caller: Pubkey) -> Result<ScorekeeperAccepted> {
    match season.pending_scorekeeper {
        Some(pending) if pending == caller => {}
        _ => return err!(SeasonVaultError::Unauthorized),
    }

    let previous = std::mem::replace(&mut season.scorekeeper, caller);
    season.pending_scorekeeper = None;

    Ok(ScorekeeperAccepted {
        previous,
        new: caller,
    })
}
