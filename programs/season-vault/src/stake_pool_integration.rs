use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};
use bytemuck::{Pod, Zeroable};
use solana_program::{
    instruction::{AccountMeta, Instruction},
    program::invoke,
};

use crate::{
    constants::*,
    errors::SeasonVaultError,
    reserve::{ExchangeRate, YieldReserve},
};

/// Leading fields of an SPL stake-pool `StakePool` account (Borsh, no padding).
#[repr(C, packed)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct StakePoolHeader {
    pub account_type: u8,
    pub manager: Pubkey,
    pub staker: Pubkey,
    pub stake_deposit_authority: Pubkey,
    pub stake_withdraw_bump_seed: u8,
    pub validator_list: Pubkey,
    pub reserve_stake: Pubkey,
    pub pool_mint: Pubkey,
    pub manager_fee_account: Pubkey,
    pub token_program_id: Pubkey,
    pub total_lamports: u64,
    pub pool_token_supply: u64,
    pub last_update_epoch: u64,
}

impl StakePoolHeader {
    pub const LEN: usize = std::mem::size_of::<StakePoolHeader>();

    pub fn exchange_rate(&self) -> ExchangeRate {
        ExchangeRate::new(self.total_lamports, self.pool_token_supply)
    }
}

pub fn parse_stake_pool(data: &[u8]) -> Result<StakePoolHeader> {
    require!(
        data.len() >= StakePoolHeader::LEN,
        SeasonVaultError::InvalidReserveAccount
    );

    let header = *bytemuck::try_from_bytes::<StakePoolHeader>(&data[..StakePoolHeader::LEN])
        .map_err(|_| SeasonVaultError::InvalidReserveAccount)?;
    require!(
        header.account_type == STAKE_POOL_ACCOUNT_TYPE,
        SeasonVaultError::InvalidReserveAccount
    );

    Ok(header)
}

pub fn read_stake_pool(account: &AccountInfo) -> Result<StakePoolHeader> {
    let data = account.try_borrow_data()?;
    parse_stake_pool(&data)
}

/// Accounts for the stake-pool `DepositSol` CPI, in the pool's expected order.
pub struct DepositRoute<'a, 'info> {
    pub stake_pool_program: &'a AccountInfo<'info>,
    pub accounts: &'a [AccountInfo<'info>],
    pub depositor: Pubkey,
}

/// Accounts for paying receipt units out of the vault.
pub struct RedeemRoute<'a, 'info> {
    pub token_program: &'a AccountInfo<'info>,
    pub vault_authority: &'a AccountInfo<'info>,
    pub recipient_account: &'a AccountInfo<'info>,
    pub recipient: Pubkey,
    pub season: Pubkey,
    pub vault_authority_bump: u8,
}

/// `YieldReserve` backed by an SPL stake pool; receipt units are pool tokens.
pub struct StakePoolReserve<'a, 'info> {
    stake_pool: &'a AccountInfo<'info>,
    vault_receipt_account: &'a mut Account<'info, TokenAccount>,
    deposit_route: Option<DepositRoute<'a, 'info>>,
    redeem_route: Option<RedeemRoute<'a, 'info>>,
}

impl<'a, 'info> StakePoolReserve<'a, 'info> {
    /// Read-only reserve: valuation and exchange rate only.
    pub fn new(
        stake_pool: &'a AccountInfo<'info>,
        vault_receipt_account: &'a mut Account<'info, TokenAccount>,
    ) -> Self {
        Self {
            stake_pool,
            vault_receipt_account,
            deposit_route: None,
            redeem_route: None,
        }
    }

    pub fn with_deposit_route(mut self, route: DepositRoute<'a, 'info>) -> Self {
        self.deposit_route = Some(route);
        self
    }

    pub fn with_redeem_route(mut self, route: RedeemRoute<'a, 'info>) -> Self {
        self.redeem_route = Some(route);
        self
    }

    pub fn vault_balance(&self) -> u64 {
        self.vault_receipt_account.amount
    }
}

impl<'a, 'info> YieldReserve for StakePoolReserve<'a, 'info> {
    fn deposit(&mut self, amount: u64) -> Result<u64> {
        let route = self
            .deposit_route
            .as_ref()
            .ok_or(SeasonVaultError::ReserveOperationUnavailable)?;

        require!(
            route.accounts.len() >= DEPOSIT_SOL_MIN_ACCOUNTS,
            SeasonVaultError::InvalidReserveAccount
        );
        require_keys_eq!(
            route.accounts[DEPOSIT_SOL_STAKE_POOL_INDEX].key(),
            self.stake_pool.key(),
            SeasonVaultError::InvalidReserveAccount
        );
        require_keys_eq!(
            route.accounts[DEPOSIT_SOL_POOL_TOKENS_TO_INDEX].key(),
            self.vault_receipt_account.key(),
            SeasonVaultError::InvalidReserveAccount
        );
        require_keys_eq!(
            route.accounts[DEPOSIT_SOL_LAMPORTS_FROM_INDEX].key(),
            route.depositor,
            SeasonVaultError::InvalidReserveAccount
        );

        let before = self.vault_balance();

        let mut data = Vec::with_capacity(9);
        data.push(STAKE_POOL_DEPOSIT_SOL_TAG);
        data.extend_from_slice(&amount.to_le_bytes());

        let accounts = route
            .accounts
            .iter()
            .map(|acc| AccountMeta {
                pubkey: acc.key(),
                is_signer: acc.is_signer,
                is_writable: acc.is_writable,
            })
            .collect();

        let instruction = Instruction {
            program_id: route.stake_pool_program.key(),
            accounts,
            data,
        };

        let mut infos = route.accounts.to_vec();
        infos.push(route.stake_pool_program.clone());
        invoke(&instruction, &infos)?;

        self.vault_receipt_account.reload()?;
        let minted = self
            .vault_balance()
            .checked_sub(before)
            .ok_or(SeasonVaultError::ReserveDepositFailed)?;
        Ok(minted)
    }

    fn redeem(&mut self, units: u64, recipient: &Pubkey) -> Result<u64> {
        let route = self
            .redeem_route
            .as_ref()
            .ok_or(SeasonVaultError::ReserveOperationUnavailable)?;
        require_keys_eq!(*recipient, route.recipient, SeasonVaultError::InvalidPosition);

        let signer_seeds: &[&[u8]] = &[
            VAULT_AUTHORITY_SEED,
            route.season.as_ref(),
            &[route.vault_authority_bump],
        ];

        token::transfer(
            CpiContext::new_with_signer(
                route.token_program.clone(),
                Transfer {
                    from: self.vault_receipt_account.to_account_info(),
                    to: route.recipient_account.clone(),
                    authority: route.vault_authority.clone(),
                },
                &[signer_seeds],
            ),
            units,
        )?;

        Ok(units)
    }

    fn exchange_rate(&self) -> Result<ExchangeRate> {
        Ok(read_stake_pool(self.stake_pool)?.exchange_rate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(header: &StakePoolHeader) -> Vec<u8> {
        let mut data = bytemuck::bytes_of(header).to_vec();
        // trailing fee fields of the real account
        data.extend_from_slice(&[0u8; 64]);
        data
    }

    fn header(total_lamports: u64, pool_token_supply: u64) -> StakePoolHeader {
        let mut header = StakePoolHeader::zeroed();
        header.account_type = STAKE_POOL_ACCOUNT_TYPE;
        header.pool_mint = Pubkey::new_unique();
        header.total_lamports = total_lamports;
        header.pool_token_supply = pool_token_supply;
        header
    }

    #[test]
    fn test_header_layout_matches_stake_pool_offsets() {
        assert_eq!(StakePoolHeader::LEN, 282);

        let mut data = vec![0u8; 400];
        data[0] = STAKE_POOL_ACCOUNT_TYPE;
        data[258..266].copy_from_slice(&7_000u64.to_le_bytes());
        data[266..274].copy_from_slice(&5_000u64.to_le_bytes());

        let rate = parse_stake_pool(&data).unwrap().exchange_rate();
        assert_eq!(rate, ExchangeRate::new(7_000, 5_000));
    }

    #[test]
    fn test_parse_reads_exchange_rate() {
        let parsed = parse_stake_pool(&encode(&header(1_050, 1_000))).unwrap();
        let rate = parsed.exchange_rate();

        assert_eq!(rate, ExchangeRate::new(1_050, 1_000));
        assert_eq!(rate.units_to_value(1_000).unwrap(), 1_050);
    }

    #[test]
    fn test_parse_rejects_wrong_account_type_and_short_data() {
        let mut bad = header(1, 1);
        bad.account_type = 2;
        assert!(parse_stake_pool(&encode(&bad)).is_err());

        let short = encode(&header(1, 1));
        assert!(parse_stake_pool(&short[..100]).is_err());
    }
}
