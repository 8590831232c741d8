//! Typed parameters recovered from stake pool instructions.
//!
//! Each instruction kind has a params struct that pairs the values in its data buffer with the
//! account keys found at fixed positions in its account list. Positions documented as optional
//! are only read when the instruction carries them.

use solana_address::Address;
use stake_pool_interface::{
    error::StakePoolError,
    pack::InstructionData,
};

use crate::instruction_view::InstructionView;

pub mod community;
pub mod deposit;
pub mod initialize;
pub mod set_funding_authority;
pub mod withdraw;

pub use community::CreateCommunityTokenStakingRewardsParams;
pub use deposit::{
    DepositParams,
    DepositSolDaoParams,
    DepositSolParams,
};
pub use initialize::InitializeParams;
pub use set_funding_authority::SetFundingAuthorityParams;
pub use withdraw::{
    WithdrawSolParams,
    WithdrawSolWithDaoParams,
    WithdrawStakeParams,
    WithdrawStakeWithDaoParams,
};

/// Builds a params struct from already decoded instruction data and the instruction's accounts.
///
/// The program id and minimum account count are checked by
/// [`crate::StakePoolInstructionDecoder`] before this is called.
pub trait FromInstruction: Sized {
    type Data: InstructionData;

    fn from_parts<I: InstructionView + ?Sized>(
        data: Self::Data,
        accounts: &AccountKeys<'_, I>,
    ) -> Result<Self, StakePoolError>;
}

/// Positional access to an instruction's account keys.
pub struct AccountKeys<'a, I: ?Sized> {
    instruction: &'a I,
}

impl<'a, I: InstructionView + ?Sized> AccountKeys<'a, I> {
    pub fn new(instruction: &'a I) -> Self {
        Self { instruction }
    }

    /// The key at `index`, failing if the instruction doesn't carry that many accounts.
    pub fn required(&self, index: usize) -> Result<Address, StakePoolError> {
        self.instruction.account(index).copied().ok_or(
            StakePoolError::InsufficientAccounts {
                found: self.instruction.num_accounts(),
                expected: index + 1,
            },
        )
    }

    /// The key at `index`, or `None` if the optional account is absent.
    pub fn optional(&self, index: usize) -> Option<Address> {
        if index < self.instruction.num_accounts() {
            self.instruction.account(index).copied()
        } else {
            None
        }
    }
}
