//! Validation and extraction of stake pool instructions.
//!
//! [`StakePoolInstructionDecoder`] checks an instruction's program id and account count before
//! decoding its data and reading any account by position, so an instruction that's too short
//! never has its accounts touched.

use solana_address::Address;
use stake_pool_interface::{
    error::{
        DecodingError,
        StakePoolError,
        StakePoolResult,
    },
    instructions::InstructionTag,
    pack::InstructionData,
    program,
};

use crate::{
    debug,
    instruction_view::InstructionView,
    params::*,
};

/// A stake pool instruction decoded into the typed params of its kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StakePoolInstruction {
    Initialize(InitializeParams),
    Deposit(DepositParams),
    WithdrawStake(WithdrawStakeParams),
    DepositSol(DepositSolParams),
    SetFundingAuthority(SetFundingAuthorityParams),
    WithdrawSol(WithdrawSolParams),
    CreateCommunityTokenStakingRewards(CreateCommunityTokenStakingRewardsParams),
    DepositSolDao(DepositSolDaoParams),
    WithdrawSolWithDao(WithdrawSolWithDaoParams),
    WithdrawStakeWithDao(WithdrawStakeWithDaoParams),
}

impl StakePoolInstruction {
    pub fn tag(&self) -> InstructionTag {
        match self {
            Self::Initialize(_) => InstructionTag::Initialize,
            Self::Deposit(_) => InstructionTag::Deposit,
            Self::WithdrawStake(_) => InstructionTag::WithdrawStake,
            Self::DepositSol(_) => InstructionTag::DepositSol,
            Self::SetFundingAuthority(_) => InstructionTag::SetFundingAuthority,
            Self::WithdrawSol(_) => InstructionTag::WithdrawSol,
            Self::CreateCommunityTokenStakingRewards(_) => {
                InstructionTag::CreateCommunityTokenStakingRewards
            }
            Self::DepositSolDao(_) => InstructionTag::DepositSolDao,
            Self::WithdrawSolWithDao(_) => InstructionTag::WithdrawSolWithDao,
            Self::WithdrawStakeWithDao(_) => InstructionTag::WithdrawStakeWithDao,
        }
    }
}

/// Decodes instructions addressed to a single stake pool program.
///
/// [`Default`] targets [`program::ID`]; use [`StakePoolInstructionDecoder::new`] for a fork or a
/// locally deployed copy of the program.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StakePoolInstructionDecoder {
    program_id: Address,
}

impl Default for StakePoolInstructionDecoder {
    fn default() -> Self {
        Self::new(program::ID)
    }
}

impl StakePoolInstructionDecoder {
    pub const fn new(program_id: Address) -> Self {
        Self { program_id }
    }

    pub fn program_id(&self) -> &Address {
        &self.program_id
    }

    pub fn check_program_id<I: InstructionView + ?Sized>(&self, instruction: &I) -> StakePoolResult {
        let found = instruction.program_id();
        if found != &self.program_id {
            debug!("rejecting instruction for program {found:?}");
            return Err(StakePoolError::ProgramIdMismatch {
                expected: self.program_id,
                found: *found,
            });
        }
        Ok(())
    }

    /// Fails if `instruction` carries fewer accounts than `tag` reads by position.
    pub fn check_num_accounts<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
        tag: InstructionTag,
    ) -> StakePoolResult {
        let found = instruction.num_accounts();
        let expected = tag.min_accounts();
        if found < expected {
            debug!(
                "rejecting {} with {found} accounts, expected at least {expected}",
                tag.name()
            );
            return Err(StakePoolError::InsufficientAccounts { found, expected });
        }
        Ok(())
    }

    /// Validates `instruction` as the kind `P` is built from, then decodes its data and reads its
    /// accounts into `P`.
    pub fn extract<P, I>(&self, instruction: &I) -> StakePoolResult<P>
    where
        P: FromInstruction,
        I: InstructionView + ?Sized,
    {
        let tag = <P::Data as InstructionData>::TAG;
        self.check_program_id(instruction)?;
        self.check_num_accounts(instruction, tag)?;

        let data = P::Data::unpack(instruction.data())?;
        let params = P::from_parts(data, &AccountKeys::new(instruction))?;
        debug!(
            "extracted {} from {} accounts",
            tag.name(),
            instruction.num_accounts()
        );
        Ok(params)
    }

    pub fn decode_initialize<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<InitializeParams> {
        self.extract(instruction)
    }

    pub fn decode_deposit<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<DepositParams> {
        self.extract(instruction)
    }

    pub fn decode_withdraw_stake<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<WithdrawStakeParams> {
        self.extract(instruction)
    }

    pub fn decode_deposit_sol<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<DepositSolParams> {
        self.extract(instruction)
    }

    pub fn decode_set_funding_authority<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<SetFundingAuthorityParams> {
        self.extract(instruction)
    }

    pub fn decode_withdraw_sol<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<WithdrawSolParams> {
        self.extract(instruction)
    }

    pub fn decode_create_community_token_staking_rewards<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<CreateCommunityTokenStakingRewardsParams> {
        self.extract(instruction)
    }

    pub fn decode_deposit_sol_dao<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<DepositSolDaoParams> {
        self.extract(instruction)
    }

    pub fn decode_withdraw_sol_with_dao<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<WithdrawSolWithDaoParams> {
        self.extract(instruction)
    }

    pub fn decode_withdraw_stake_with_dao<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<WithdrawStakeWithDaoParams> {
        self.extract(instruction)
    }

    /// Decodes `instruction` as whichever kind its opcode names.
    pub fn decode<I: InstructionView + ?Sized>(
        &self,
        instruction: &I,
    ) -> StakePoolResult<StakePoolInstruction> {
        self.check_program_id(instruction)?;
        let opcode = *instruction
            .data()
            .first()
            .ok_or(DecodingError::EmptyData)?;

        Ok(match InstructionTag::try_from(opcode)? {
            InstructionTag::Initialize => {
                StakePoolInstruction::Initialize(self.extract(instruction)?)
            }
            InstructionTag::Deposit => StakePoolInstruction::Deposit(self.extract(instruction)?),
            InstructionTag::WithdrawStake => {
                StakePoolInstruction::WithdrawStake(self.extract(instruction)?)
            }
            InstructionTag::DepositSol => {
                StakePoolInstruction::DepositSol(self.extract(instruction)?)
            }
            InstructionTag::SetFundingAuthority => {
                StakePoolInstruction::SetFundingAuthority(self.extract(instruction)?)
            }
            InstructionTag::WithdrawSol => {
                StakePoolInstruction::WithdrawSol(self.extract(instruction)?)
            }
            InstructionTag::CreateCommunityTokenStakingRewards => {
                StakePoolInstruction::CreateCommunityTokenStakingRewards(self.extract(instruction)?)
            }
            InstructionTag::DepositSolDao => {
                StakePoolInstruction::DepositSolDao(self.extract(instruction)?)
            }
            InstructionTag::WithdrawSolWithDao => {
                StakePoolInstruction::WithdrawSolWithDao(self.extract(instruction)?)
            }
            InstructionTag::WithdrawStakeWithDao => {
                StakePoolInstruction::WithdrawStakeWithDao(self.extract(instruction)?)
            }
        })
    }

    /// Decodes every instruction in `instructions` addressed to this decoder's program, skipping
    /// instructions for other programs.
    pub fn decode_matching<'a, I>(
        &'a self,
        instructions: impl IntoIterator<Item = &'a I> + 'a,
    ) -> impl Iterator<Item = StakePoolResult<StakePoolInstruction>> + 'a
    where
        I: InstructionView + 'a,
    {
        instructions
            .into_iter()
            .filter(|instruction| instruction.program_id() == &self.program_id)
            .map(|instruction| self.decode(instruction))
    }
}
