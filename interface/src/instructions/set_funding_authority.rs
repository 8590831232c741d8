use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    error::{
        DecodingError,
        StakePoolError,
    },
    instructions::{
        shapes,
        InstructionTag,
    },
    pack::{
        read_array,
        write_bytes,
        InstructionData,
        Pack,
    },
};

/// Which deposit authority a [`SetFundingAuthorityInstructionData`] updates.
#[repr(u32)]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FundingType {
    /// The stake deposit authority.
    StakeDeposit = 0,
    /// The SOL deposit authority.
    SolDeposit = 1,
}

impl TryFrom<u32> for FundingType {
    type Error = DecodingError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FundingType::StakeDeposit),
            1 => Ok(FundingType::SolDeposit),
            _ => Err(DecodingError::InvalidFundingType(value)),
        }
    }
}

/// (Manager only) Updates one of the pool's funding authorities.
///
/// ### Accounts
///  0. `[WRITE]` Stake pool
///  1. `[SIGNER]` Manager
///  2. `[READ]` (Optional) New authority. Omitting it removes the authority.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SetFundingAuthorityInstructionData {
    pub funding_type: FundingType,
}

pub const SET_FUNDING_AUTHORITY_LEN: usize = 5;

const_assert_eq!(
    SET_FUNDING_AUTHORITY_LEN,
    shapes::SET_FUNDING_AUTHORITY.span()
);

impl SetFundingAuthorityInstructionData {
    #[inline(always)]
    pub const fn new(funding_type: FundingType) -> Self {
        Self { funding_type }
    }
}

unsafe impl Pack<SET_FUNDING_AUTHORITY_LEN> for SetFundingAuthorityInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; SET_FUNDING_AUTHORITY_LEN]) {
        dst[0].write(InstructionTag::SetFundingAuthority as u8);
        write_bytes(&mut dst[1..5], &(self.funding_type as u32).to_le_bytes());
    }
}

impl InstructionData for SetFundingAuthorityInstructionData {
    const TAG: InstructionTag = InstructionTag::SetFundingAuthority;

    fn read_fields(data: &[u8]) -> Result<Self, StakePoolError> {
        let funding_type = u32::from_le_bytes(read_array(data, 0)?);
        Ok(Self {
            funding_type: FundingType::try_from(funding_type)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_funding_types() {
        assert_eq!(
            SetFundingAuthorityInstructionData::new(FundingType::StakeDeposit).pack(),
            [15, 0, 0, 0, 0]
        );
        assert_eq!(
            SetFundingAuthorityInstructionData::new(FundingType::SolDeposit).pack(),
            [15, 1, 0, 0, 0]
        );
    }

    #[test]
    fn unknown_funding_type_is_a_decoding_error() {
        assert_eq!(
            SetFundingAuthorityInstructionData::unpack(&[15, 2, 0, 0, 0]),
            Err(DecodingError::InvalidFundingType(2).into())
        );
        assert_eq!(
            SetFundingAuthorityInstructionData::unpack(&[15, 1, 0, 0, 0]),
            Ok(SetFundingAuthorityInstructionData::new(
                FundingType::SolDeposit
            ))
        );
    }
}
