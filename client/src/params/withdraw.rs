use solana_address::Address;
use stake_pool_interface::{
    error::StakePoolError,
    instructions::{
        WithdrawSolInstructionData,
        WithdrawSolWithDaoInstructionData,
        WithdrawStakeInstructionData,
        WithdrawStakeWithDaoInstructionData,
    },
};

use crate::{
    instruction_view::InstructionView,
    params::{
        AccountKeys,
        FromInstruction,
    },
};

/// Accounts of a `WithdrawStake` instruction and the amount of pool tokens it burns.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WithdrawStakeParams {
    pub stake_pool: Address,
    pub validator_list: Address,
    pub withdraw_authority: Address,
    pub stake_to_split: Address,
    pub stake_to_receive: Address,
    pub user_stake_authority: Address,
    pub user_transfer_authority: Address,
    pub user_pool_token_account: Address,
    pub manager_fee_account: Address,
    pub pool_mint: Address,
    pub pool_tokens: i64,
}

impl FromInstruction for WithdrawStakeParams {
    type Data = WithdrawStakeInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            validator_list: accounts.required(1)?,
            withdraw_authority: accounts.required(2)?,
            stake_to_split: accounts.required(3)?,
            stake_to_receive: accounts.required(4)?,
            user_stake_authority: accounts.required(5)?,
            user_transfer_authority: accounts.required(6)?,
            user_pool_token_account: accounts.required(7)?,
            manager_fee_account: accounts.required(8)?,
            pool_mint: accounts.required(9)?,
            pool_tokens: data.pool_tokens,
        })
    }
}

/// Accounts of a `WithdrawStakeWithDao` instruction.
///
/// The first ten positions match [`WithdrawStakeParams`]; positions 10 through 12 are sysvars and
/// programs and aren't surfaced.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WithdrawStakeWithDaoParams {
    pub stake_pool: Address,
    pub validator_list: Address,
    pub withdraw_authority: Address,
    pub stake_to_split: Address,
    pub stake_to_receive: Address,
    pub user_stake_authority: Address,
    pub user_transfer_authority: Address,
    pub user_pool_token_account: Address,
    pub manager_fee_account: Address,
    pub pool_mint: Address,
    pub dao_community_token_receiver: Address,
    pub community_token_staking_rewards: Address,
    pub owner_wallet: Address,
    pub community_token: Address,
    pub pool_tokens: i64,
}

impl FromInstruction for WithdrawStakeWithDaoParams {
    type Data = WithdrawStakeWithDaoInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            validator_list: accounts.required(1)?,
            withdraw_authority: accounts.required(2)?,
            stake_to_split: accounts.required(3)?,
            stake_to_receive: accounts.required(4)?,
            user_stake_authority: accounts.required(5)?,
            user_transfer_authority: accounts.required(6)?,
            user_pool_token_account: accounts.required(7)?,
            manager_fee_account: accounts.required(8)?,
            pool_mint: accounts.required(9)?,
            dao_community_token_receiver: accounts.required(13)?,
            community_token_staking_rewards: accounts.required(14)?,
            owner_wallet: accounts.required(15)?,
            community_token: accounts.required(16)?,
            pool_tokens: data.pool_tokens,
        })
    }
}

/// Accounts of a `WithdrawSol` instruction.
///
/// The SOL withdraw authority at position 12 is only present on pools that set one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WithdrawSolParams {
    pub stake_pool: Address,
    pub withdraw_authority: Address,
    pub user_transfer_authority: Address,
    pub pool_tokens_from: Address,
    pub reserve_stake: Address,
    pub lamports_to: Address,
    pub manager_fee_account: Address,
    pub pool_mint: Address,
    pub sol_withdraw_authority: Option<Address>,
    pub pool_tokens: i64,
}

impl FromInstruction for WithdrawSolParams {
    type Data = WithdrawSolInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            withdraw_authority: accounts.required(1)?,
            user_transfer_authority: accounts.required(2)?,
            pool_tokens_from: accounts.required(3)?,
            reserve_stake: accounts.required(4)?,
            lamports_to: accounts.required(5)?,
            manager_fee_account: accounts.required(6)?,
            pool_mint: accounts.required(7)?,
            sol_withdraw_authority: accounts.optional(12),
            pool_tokens: data.pool_tokens,
        })
    }
}

/// Accounts of a `WithdrawSolWithDao` instruction.
///
/// The SOL withdraw authority at position 16 is only present on pools that set one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct WithdrawSolWithDaoParams {
    pub stake_pool: Address,
    pub withdraw_authority: Address,
    pub user_transfer_authority: Address,
    pub pool_tokens_from: Address,
    pub dao_community_token_receiver: Address,
    pub reserve_stake: Address,
    pub lamports_to: Address,
    pub manager_fee_account: Address,
    pub pool_mint: Address,
    pub community_token_staking_rewards: Address,
    pub owner_wallet: Address,
    pub community_token: Address,
    pub sol_withdraw_authority: Option<Address>,
    pub pool_tokens: i64,
}

impl FromInstruction for WithdrawSolWithDaoParams {
    type Data = WithdrawSolWithDaoInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            withdraw_authority: accounts.required(1)?,
            user_transfer_authority: accounts.required(2)?,
            pool_tokens_from: accounts.required(3)?,
            dao_community_token_receiver: accounts.required(4)?,
            reserve_stake: accounts.required(5)?,
            lamports_to: accounts.required(6)?,
            manager_fee_account: accounts.required(7)?,
            pool_mint: accounts.required(8)?,
            community_token_staking_rewards: accounts.required(13)?,
            owner_wallet: accounts.required(14)?,
            community_token: accounts.required(15)?,
            sol_withdraw_authority: accounts.optional(16),
            pool_tokens: data.pool_tokens,
        })
    }
}
