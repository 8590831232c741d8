use solana_address::Address;
use solana_program_error::ProgramError;

/// Why a set of field values couldn't be encoded into an instruction layout.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum EncodingError {
    #[error("missing value for field `{0}`")]
    MissingField(&'static str),
    #[error("field `{0}` is not part of the instruction layout")]
    UnknownField(&'static str),
    #[error("value {value} doesn't fit in field `{field}`")]
    OutOfRange { field: &'static str, value: i128 },
}

/// Why a byte buffer couldn't be parsed as instruction data.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum DecodingError {
    #[error("instruction data is empty")]
    EmptyData,
    #[error("expected {expected} bytes of instruction data, found {found}")]
    InvalidLength { expected: usize, found: usize },
    #[error("unknown instruction opcode {0}")]
    InvalidInstructionTag(u8),
    #[error("unknown funding type {0}")]
    InvalidFundingType(u32),
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum StakePoolError {
    #[error("invalid field values; {0}")]
    Encoding(#[from] EncodingError),
    #[error("invalid instruction; {0}")]
    Decoding(#[from] DecodingError),
    #[error("invalid instruction; instruction index mismatch {found} != {expected}")]
    OpcodeMismatch { expected: u8, found: u8 },
    #[error("invalid instruction; program id {found:?} is not {expected:?}")]
    ProgramIdMismatch { expected: Address, found: Address },
    #[error("invalid instruction; found {found} keys, expected at least {expected}")]
    InsufficientAccounts { found: usize, expected: usize },
}

impl From<StakePoolError> for ProgramError {
    #[inline(always)]
    fn from(e: StakePoolError) -> Self {
        match e {
            StakePoolError::Encoding(_) => ProgramError::InvalidArgument,
            StakePoolError::Decoding(_) | StakePoolError::OpcodeMismatch { .. } => {
                ProgramError::InvalidInstructionData
            }
            StakePoolError::ProgramIdMismatch { .. } => ProgramError::IncorrectProgramId,
            StakePoolError::InsufficientAccounts { .. } => ProgramError::NotEnoughAccountKeys,
        }
    }
}

pub type StakePoolResult<T = ()> = Result<T, StakePoolError>;

#[cfg(test)]
mod tests {
    use solana_address::Address;
    use solana_program_error::ProgramError;

    use super::*;

    #[test]
    fn program_error_mapping() {
        let cases: [(StakePoolError, ProgramError); 5] = [
            (
                EncodingError::MissingField("lamports").into(),
                ProgramError::InvalidArgument,
            ),
            (
                DecodingError::EmptyData.into(),
                ProgramError::InvalidInstructionData,
            ),
            (
                StakePoolError::OpcodeMismatch {
                    expected: 10,
                    found: 24,
                },
                ProgramError::InvalidInstructionData,
            ),
            (
                StakePoolError::ProgramIdMismatch {
                    expected: Address::new_from_array([1; 32]),
                    found: Address::new_from_array([2; 32]),
                },
                ProgramError::IncorrectProgramId,
            ),
            (
                StakePoolError::InsufficientAccounts {
                    found: 1,
                    expected: 2,
                },
                ProgramError::NotEnoughAccountKeys,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(ProgramError::from(error), expected);
        }
    }
}
