use solana_address::Address;
use stake_pool_interface::{
    error::StakePoolError,
    instructions::CreateCommunityTokenStakingRewardsInstructionData,
};

use crate::{
    instruction_view::InstructionView,
    params::{
        AccountKeys,
        FromInstruction,
    },
};

/// Accounts of a `CreateCommunityTokenStakingRewards` instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CreateCommunityTokenStakingRewardsParams {
    pub stake_pool: Address,
    pub owner_wallet: Address,
    pub community_token_staking_rewards: Address,
    pub community_token_staking_rewards_counter: Address,
}

impl FromInstruction for CreateCommunityTokenStakingRewardsParams {
    type Data = CreateCommunityTokenStakingRewardsInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        _data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            owner_wallet: accounts.required(1)?,
            community_token_staking_rewards: accounts.required(2)?,
            community_token_staking_rewards_counter: accounts.required(3)?,
        })
    }
}
