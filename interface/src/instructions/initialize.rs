use core::mem::MaybeUninit;

use static_assertions::const_assert_eq;

use crate::{
    error::StakePoolError,
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

/// Initializes a new stake pool.
///
/// ### Accounts
///  0. `[WRITE]` New stake pool to create
///  1. `[SIGNER]` Manager
///  2. `[READ]` Staker
///  3. `[READ]` Stake pool withdraw authority
///  4. `[WRITE]` Uninitialized validator stake list storage account
///  5. `[READ]` Reserve stake account
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct InitializeInstructionData {
    /// Denominator of the epoch fee fraction.
    pub fee_denominator: i64,
    /// Numerator of the epoch fee fraction.
    pub fee_numerator: i64,
    /// Denominator of the withdrawal fee fraction.
    pub withdrawal_fee_denominator: i64,
    /// Numerator of the withdrawal fee fraction.
    pub withdrawal_fee_numerator: i64,
    /// Maximum number of validators the pool's validator list can hold.
    pub max_validators: u32,
}

impl InitializeInstructionData {
    #[inline(always)]
    pub const fn new(
        fee_denominator: i64,
        fee_numerator: i64,
        withdrawal_fee_denominator: i64,
        withdrawal_fee_numerator: i64,
        max_validators: u32,
    ) -> Self {
        Self {
            fee_denominator,
            fee_numerator,
            withdrawal_fee_denominator,
            withdrawal_fee_numerator,
            max_validators,
        }
    }
}

pub const INITIALIZE_LEN: usize = 37;

const_assert_eq!(INITIALIZE_LEN, shapes::INITIALIZE.span());

unsafe impl Pack<INITIALIZE_LEN> for InitializeInstructionData {
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; INITIALIZE_LEN]) {
        // Instruction data layout:
        //   - [0]: the instruction tag, 1 byte
        //   - [1..9]: fee denominator, i64
        //   - [9..17]: fee numerator, i64
        //   - [17..25]: withdrawal fee denominator, i64
        //   - [25..33]: withdrawal fee numerator, i64
        //   - [33..37]: max validators, u32
        dst[0].write(InstructionTag::Initialize as u8);
        write_bytes(&mut dst[1..9], &self.fee_denominator.to_le_bytes());
        write_bytes(&mut dst[9..17], &self.fee_numerator.to_le_bytes());
        write_bytes(&mut dst[17..25], &self.withdrawal_fee_denominator.to_le_bytes());
        write_bytes(&mut dst[25..33], &self.withdrawal_fee_numerator.to_le_bytes());
        write_bytes(&mut dst[33..37], &self.max_validators.to_le_bytes());
    }
}

impl InstructionData for InitializeInstructionData {
    const TAG: InstructionTag = InstructionTag::Initialize;

    fn read_fields(data: &[u8]) -> Result<Self, StakePoolError> {
        Ok(Self {
            fee_denominator: i64::from_le_bytes(read_array(data, 0)?),
            fee_numerator: i64::from_le_bytes(read_array(data, 8)?),
            withdrawal_fee_denominator: i64::from_le_bytes(read_array(data, 16)?),
            withdrawal_fee_numerator: i64::from_le_bytes(read_array(data, 24)?),
            max_validators: u32::from_le_bytes(read_array(data, 32)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_packs_fields_in_declared_order() {
        let data = InitializeInstructionData::new(100, 3, 1000, 5, 2950);
        assert_eq!(data.fee_denominator, 100);
        assert_eq!(data.max_validators, 2950);

        let packed = data.pack();
        assert_eq!(packed[0], 0);
        assert_eq!(packed[1..9], 100i64.to_le_bytes());
        assert_eq!(packed[9..17], 3i64.to_le_bytes());
        assert_eq!(packed[17..25], 1000i64.to_le_bytes());
        assert_eq!(packed[25..33], 5i64.to_le_bytes());
        assert_eq!(packed[33..37], 2950u32.to_le_bytes());
        assert_eq!(InitializeInstructionData::unpack(&packed), Ok(data));
    }
}
