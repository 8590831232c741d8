use solana_address::Address;
use stake_pool_interface::{
    error::StakePoolError,
    instructions::{
        DepositInstructionData,
        DepositSolDaoInstructionData,
        DepositSolInstructionData,
    },
};

use crate::{
    instruction_view::InstructionView,
    params::{
        AccountKeys,
        FromInstruction,
    },
};

/// Accounts of a `Deposit` instruction, which deposits a stake account into the pool.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DepositParams {
    pub stake_pool: Address,
    pub validator_list: Address,
    pub deposit_authority: Address,
    pub withdraw_authority: Address,
    pub deposit_stake: Address,
    pub deposit_stake_withdraw_authority: Address,
    pub validator_stake: Address,
    pub reserve_stake: Address,
    pub pool_tokens_to: Address,
    pub pool_mint: Address,
}

impl FromInstruction for DepositParams {
    type Data = DepositInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        _data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            validator_list: accounts.required(1)?,
            deposit_authority: accounts.required(2)?,
            withdraw_authority: accounts.required(3)?,
            deposit_stake: accounts.required(4)?,
            deposit_stake_withdraw_authority: accounts.required(5)?,
            validator_stake: accounts.required(6)?,
            reserve_stake: accounts.required(7)?,
            pool_tokens_to: accounts.required(8)?,
            pool_mint: accounts.required(9)?,
        })
    }
}

/// Accounts of a `DepositSol` instruction and the lamports it deposits.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DepositSolParams {
    pub stake_pool: Address,
    pub deposit_authority: Address,
    pub withdraw_authority: Address,
    pub reserve_stake: Address,
    pub lamports_from: Address,
    pub pool_tokens_to: Address,
    pub manager_fee_account: Address,
    pub referrer_pool_tokens_account: Address,
    pub pool_mint: Address,
    pub lamports: i64,
}

impl FromInstruction for DepositSolParams {
    type Data = DepositSolInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            deposit_authority: accounts.required(1)?,
            withdraw_authority: accounts.required(2)?,
            reserve_stake: accounts.required(3)?,
            lamports_from: accounts.required(4)?,
            pool_tokens_to: accounts.required(5)?,
            manager_fee_account: accounts.required(6)?,
            referrer_pool_tokens_account: accounts.required(7)?,
            pool_mint: accounts.required(8)?,
            lamports: data.lamports,
        })
    }
}

/// Accounts of a `DepositSolDao` instruction.
///
/// Positions 9 and 10 hold the System program and the token program and aren't surfaced. The SOL
/// deposit authority at position 14 is only present on pools that set one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DepositSolDaoParams {
    pub stake_pool: Address,
    pub withdraw_authority: Address,
    pub reserve_stake: Address,
    pub lamports_from: Address,
    pub pool_tokens_to: Address,
    pub dao_community_token_receiver: Address,
    pub manager_fee_account: Address,
    pub referrer_pool_tokens_account: Address,
    pub pool_mint: Address,
    pub community_token_staking_rewards: Address,
    pub owner_wallet: Address,
    pub community_token: Address,
    pub deposit_authority: Option<Address>,
    pub lamports: i64,
}

impl FromInstruction for DepositSolDaoParams {
    type Data = DepositSolDaoInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            withdraw_authority: accounts.required(1)?,
            reserve_stake: accounts.required(2)?,
            lamports_from: accounts.required(3)?,
            pool_tokens_to: accounts.required(4)?,
            dao_community_token_receiver: accounts.required(5)?,
            manager_fee_account: accounts.required(6)?,
            referrer_pool_tokens_account: accounts.required(7)?,
            pool_mint: accounts.required(8)?,
            community_token_staking_rewards: accounts.required(11)?,
            owner_wallet: accounts.required(12)?,
            community_token: accounts.required(13)?,
            deposit_authority: accounts.optional(14),
            lamports: data.lamports,
        })
    }
}
