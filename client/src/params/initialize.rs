use solana_address::Address;
use stake_pool_interface::{
    error::StakePoolError,
    instructions::InitializeInstructionData,
};

use crate::{
    instruction_view::InstructionView,
    params::{
        AccountKeys,
        FromInstruction,
    },
};

/// Accounts and fee configuration of an `Initialize` instruction.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitializeParams {
    pub stake_pool: Address,
    pub manager: Address,
    pub staker: Address,
    pub withdraw_authority: Address,
    pub validator_list: Address,
    pub reserve_stake: Address,
    pub fee_denominator: i64,
    pub fee_numerator: i64,
    pub withdrawal_fee_denominator: i64,
    pub withdrawal_fee_numerator: i64,
    pub max_validators: u32,
}

impl FromInstruction for InitializeParams {
    type Data = InitializeInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            manager: accounts.required(1)?,
            staker: accounts.required(2)?,
            withdraw_authority: accounts.required(3)?,
            validator_list: accounts.required(4)?,
            reserve_stake: accounts.required(5)?,
            fee_denominator: data.fee_denominator,
            fee_numerator: data.fee_numerator,
            withdrawal_fee_denominator: data.withdrawal_fee_denominator,
            withdrawal_fee_numerator: data.withdrawal_fee_numerator,
            max_validators: data.max_validators,
        })
    }
}
