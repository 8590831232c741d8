//! The instruction registry: one [`InstructionTag`] per instruction kind, each bound to an opcode,
//! a field [`Shape`] and the minimum number of accounts the kind reads positionally.

use crate::{
    error::DecodingError,
    layout::Shape,
};

pub mod amount;
pub mod initialize;
pub mod no_args;
pub mod set_funding_authority;

pub use amount::*;
pub use initialize::InitializeInstructionData;
pub use no_args::*;
pub use set_funding_authority::{
    FundingType,
    SetFundingAuthorityInstructionData,
};

#[repr(u8)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, strum_macros::IntoStaticStr)]
#[cfg_attr(test, derive(strum_macros::FromRepr, strum_macros::EnumIter))]
pub enum InstructionTag {
    Initialize = 0,
    Deposit = 9,
    WithdrawStake = 10,
    DepositSol = 14,
    SetFundingAuthority = 15,
    WithdrawSol = 16,
    CreateCommunityTokenStakingRewards = 21,
    DepositSolDao = 22,
    WithdrawSolWithDao = 23,
    WithdrawStakeWithDao = 24,
}

impl InstructionTag {
    pub const ALL: [InstructionTag; 10] = [
        InstructionTag::Initialize,
        InstructionTag::Deposit,
        InstructionTag::WithdrawStake,
        InstructionTag::DepositSol,
        InstructionTag::SetFundingAuthority,
        InstructionTag::WithdrawSol,
        InstructionTag::CreateCommunityTokenStakingRewards,
        InstructionTag::DepositSolDao,
        InstructionTag::WithdrawSolWithDao,
        InstructionTag::WithdrawStakeWithDao,
    ];

    #[inline(always)]
    pub const fn opcode(self) -> u8 {
        self as u8
    }

    pub const fn shape(self) -> &'static Shape {
        match self {
            InstructionTag::Initialize => &shapes::INITIALIZE,
            InstructionTag::Deposit => &shapes::DEPOSIT,
            InstructionTag::WithdrawStake => &shapes::WITHDRAW_STAKE,
            InstructionTag::DepositSol => &shapes::DEPOSIT_SOL,
            InstructionTag::SetFundingAuthority => &shapes::SET_FUNDING_AUTHORITY,
            InstructionTag::WithdrawSol => &shapes::WITHDRAW_SOL,
            InstructionTag::CreateCommunityTokenStakingRewards => {
                &shapes::CREATE_COMMUNITY_TOKEN_STAKING_REWARDS
            }
            InstructionTag::DepositSolDao => &shapes::DEPOSIT_SOL_DAO,
            InstructionTag::WithdrawSolWithDao => &shapes::WITHDRAW_SOL_WITH_DAO,
            InstructionTag::WithdrawStakeWithDao => &shapes::WITHDRAW_STAKE_WITH_DAO,
        }
    }

    /// The number of accounts an instruction of this kind must carry before any of them are read
    /// by position. Optional trailing accounts aren't counted.
    pub const fn min_accounts(self) -> usize {
        match self {
            InstructionTag::Initialize => 6,
            InstructionTag::Deposit => 10,
            InstructionTag::WithdrawStake => 10,
            InstructionTag::DepositSol => 9,
            InstructionTag::SetFundingAuthority => 2,
            InstructionTag::WithdrawSol => 8,
            InstructionTag::CreateCommunityTokenStakingRewards => 4,
            InstructionTag::DepositSolDao => 14,
            InstructionTag::WithdrawSolWithDao => 16,
            InstructionTag::WithdrawStakeWithDao => 17,
        }
    }

    #[inline(always)]
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl TryFrom<u8> for InstructionTag {
    type Error = DecodingError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(InstructionTag::Initialize),
            9 => Ok(InstructionTag::Deposit),
            10 => Ok(InstructionTag::WithdrawStake),
            14 => Ok(InstructionTag::DepositSol),
            15 => Ok(InstructionTag::SetFundingAuthority),
            16 => Ok(InstructionTag::WithdrawSol),
            21 => Ok(InstructionTag::CreateCommunityTokenStakingRewards),
            22 => Ok(InstructionTag::DepositSolDao),
            23 => Ok(InstructionTag::WithdrawSolWithDao),
            24 => Ok(InstructionTag::WithdrawStakeWithDao),
            _ => Err(DecodingError::InvalidInstructionTag(value)),
        }
    }
}

/// The field layout of every instruction kind. Field order is the wire order.
pub mod shapes {
    use crate::layout::{
        FieldSpec,
        Shape,
    };

    pub const INITIALIZE: Shape = Shape::new(
        0,
        &[
            FieldSpec::ns64("fee_denominator"),
            FieldSpec::ns64("fee_numerator"),
            FieldSpec::ns64("withdrawal_fee_denominator"),
            FieldSpec::ns64("withdrawal_fee_numerator"),
            FieldSpec::u32("max_validators"),
        ],
    );

    pub const DEPOSIT: Shape = Shape::new(9, &[]);

    pub const WITHDRAW_STAKE: Shape = Shape::new(10, &[FieldSpec::ns64("pool_tokens")]);

    pub const DEPOSIT_SOL: Shape = Shape::new(14, &[FieldSpec::ns64("lamports")]);

    pub const SET_FUNDING_AUTHORITY: Shape = Shape::new(15, &[FieldSpec::u32("funding_type")]);

    pub const WITHDRAW_SOL: Shape = Shape::new(16, &[FieldSpec::ns64("pool_tokens")]);

    pub const CREATE_COMMUNITY_TOKEN_STAKING_REWARDS: Shape = Shape::new(21, &[]);

    pub const DEPOSIT_SOL_DAO: Shape = Shape::new(22, &[FieldSpec::ns64("lamports")]);

    pub const WITHDRAW_SOL_WITH_DAO: Shape = Shape::new(23, &[FieldSpec::ns64("pool_tokens")]);

    pub const WITHDRAW_STAKE_WITH_DAO: Shape = Shape::new(24, &[FieldSpec::ns64("pool_tokens")]);
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::InstructionTag;
    use crate::error::DecodingError;

    #[test]
    fn test_instruction_tag_try_from_u8_happy_path() {
        for variant in InstructionTag::iter() {
            let variant_u8 = variant as u8;
            assert_eq!(
                InstructionTag::from_repr(variant_u8).unwrap(),
                InstructionTag::try_from(variant_u8).unwrap(),
            );
            assert_eq!(InstructionTag::try_from(variant_u8).unwrap(), variant);
        }
    }

    #[test]
    fn test_instruction_tag_try_from_u8_exhaustive() {
        let valids = InstructionTag::iter()
            .map(|v| v as u8)
            .collect::<HashSet<_>>();

        for v in 0..=u8::MAX {
            if valids.contains(&v) {
                assert_eq!(InstructionTag::try_from(v).unwrap() as u8, v);
            } else {
                assert!(InstructionTag::from_repr(v).is_none());
                assert_eq!(
                    InstructionTag::try_from(v),
                    Err(DecodingError::InvalidInstructionTag(v))
                );
            }
        }
    }

    #[test]
    fn registry_is_complete_with_unique_opcodes() {
        let expected: HashSet<u8> = [0, 9, 10, 14, 15, 16, 21, 22, 23, 24].into_iter().collect();
        let opcodes = InstructionTag::ALL
            .iter()
            .map(|tag| tag.shape().opcode)
            .collect::<HashSet<_>>();

        assert_eq!(InstructionTag::iter().count(), InstructionTag::ALL.len());
        assert_eq!(opcodes, expected);
        for tag in InstructionTag::iter() {
            assert_eq!(tag.shape().opcode, tag.opcode());
        }
    }

    #[test]
    fn shape_spans() {
        assert_eq!(InstructionTag::Initialize.shape().span(), 37);
        assert_eq!(InstructionTag::Deposit.shape().span(), 1);
        assert_eq!(InstructionTag::SetFundingAuthority.shape().span(), 5);
        assert_eq!(
            InstructionTag::CreateCommunityTokenStakingRewards
                .shape()
                .span(),
            1
        );
        for tag in [
            InstructionTag::DepositSol,
            InstructionTag::DepositSolDao,
            InstructionTag::WithdrawStake,
            InstructionTag::WithdrawStakeWithDao,
            InstructionTag::WithdrawSol,
            InstructionTag::WithdrawSolWithDao,
        ] {
            assert_eq!(tag.shape().span(), 9, "{}", tag.name());
        }
    }

    #[test]
    fn names() {
        assert_eq!(InstructionTag::DepositSolDao.name(), "DepositSolDao");
        assert_eq!(
            InstructionTag::CreateCommunityTokenStakingRewards.name(),
            "CreateCommunityTokenStakingRewards"
        );
    }
}
