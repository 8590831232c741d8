//! Instructions whose data is only the opcode byte.

use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    error::StakePoolError,
    instructions::{
        shapes,
        InstructionTag,
    },
    pack::{
        InstructionData,
        Pack,
    },
};

pub const NO_ARGS_LEN: usize = 1;

macro_rules! no_args_instruction_data {
    ($(#[$meta:meta])* $name:ident, $tag:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
        pub struct $name;

        unsafe impl Pack<NO_ARGS_LEN> for $name {
            fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; NO_ARGS_LEN]) {
                dst[0].write(InstructionTag::$tag as u8);
            }
        }

        impl InstructionData for $name {
            const TAG: InstructionTag = InstructionTag::$tag;

            #[inline(always)]
            fn read_fields(_data: &[u8]) -> Result<Self, StakePoolError> {
                Ok(Self)
            }
        }
    };
}

no_args_instruction_data!(
    /// Deposits a stake account into the pool in exchange for pool tokens.
    ///
    /// ### Accounts
    ///  0. `[WRITE]` Stake pool
    ///  1. `[WRITE]` Validator stake list storage account
    ///  2. `[READ]` Stake pool deposit authority
    ///  3. `[READ]` Stake pool withdraw authority
    ///  4. `[WRITE]` Stake account to join the pool
    ///  5. `[SIGNER]` Withdraw authority of the deposited stake account
    ///  6. `[WRITE]` Validator stake account for the stake account to be merged with
    ///  7. `[WRITE]` Reserve stake account
    ///  8. `[WRITE]` User account to receive pool tokens
    ///  9. `[WRITE]` Pool token mint account
    DepositInstructionData,
    Deposit
);

no_args_instruction_data!(
    /// Creates the accounts that store the DAO community token distribution strategy.
    ///
    /// ### Accounts
    ///  0. `[READ]` Stake pool
    ///  1. `[SIGNER]` Owner wallet
    ///  2. `[WRITE]` Community token staking rewards account
    ///  3. `[WRITE]` Community token staking rewards counter account
    ///  4. `[READ]` Rent sysvar
    ///  5. `[READ]` System program
    CreateCommunityTokenStakingRewardsInstructionData,
    CreateCommunityTokenStakingRewards
);

const_assert_eq!(NO_ARGS_LEN, shapes::DEPOSIT.span());
const_assert_eq!(NO_ARGS_LEN, shapes::CREATE_COMMUNITY_TOKEN_STAKING_REWARDS.span());
