use solana_address::Address;
use stake_pool_interface::{
    error::StakePoolError,
    instructions::{
        FundingType,
        SetFundingAuthorityInstructionData,
    },
};

use crate::{
    instruction_view::InstructionView,
    params::{
        AccountKeys,
        FromInstruction,
    },
};

/// Accounts of a `SetFundingAuthority` instruction.
///
/// A missing `new_authority` clears the funding authority for `funding_type`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SetFundingAuthorityParams {
    pub stake_pool: Address,
    pub manager: Address,
    pub new_authority: Option<Address>,
    pub funding_type: FundingType,
}

impl FromInstruction for SetFundingAuthorityParams {
    type Data = SetFundingAuthorityInstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError> {
        Ok(Self {
            stake_pool: accounts.required(0)?,
            manager: accounts.required(1)?,
            new_authority: accounts.optional(2),
            funding_type: data.funding_type,
        })
    }
}
