//! Instructions whose only argument is a single native `i64` amount.

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

/// The opcode byte followed by one `i64`.
pub const AMOUNT_LEN: usize = 9;

macro_rules! amount_instruction_data {
    ($(#[$meta:meta])* $name:ident, $tag:ident, $field:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, PartialEq)]
        pub struct $name {
            pub $field: i64,
        }

        impl $name {
            #[inline(always)]
            pub const fn new($field: i64) -> Self {
                Self { $field }
            }
        }

        unsafe impl Pack<AMOUNT_LEN> for $name {
            fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; AMOUNT_LEN]) {
                dst[0].write(InstructionTag::$tag as u8);
                write_bytes(&mut dst[1..9], &self.$field.to_le_bytes());
            }
        }

        impl InstructionData for $name {
            const TAG: InstructionTag = InstructionTag::$tag;

            fn read_fields(data: &[u8]) -> Result<Self, StakePoolError> {
                Ok(Self {
                    $field: i64::from_le_bytes(read_array(data, 0)?),
                })
            }
        }
    };
}

amount_instruction_data!(
    /// Deposits SOL directly into the pool's reserve account in exchange for pool tokens.
    ///
    /// ### Accounts
    ///  0. `[WRITE]` Stake pool
    ///  1. `[SIGNER]` Stake pool SOL deposit authority
    ///  2. `[READ]` Stake pool withdraw authority
    ///  3. `[WRITE]` Reserve stake account, to deposit SOL
    ///  4. `[WRITE, SIGNER]` Account providing the lamports to be deposited into the pool
    ///  5. `[WRITE]` User account to receive pool tokens
    ///  6. `[WRITE]` Account to receive fee tokens
    ///  7. `[WRITE]` Account to receive a portion of fee as referral fees
    ///  8. `[WRITE]` Pool token mint account
    DepositSolInstructionData,
    DepositSol,
    lamports
);

amount_instruction_data!(
    /// Deposits SOL into the pool's reserve account while crediting the depositor's DAO community
    /// token staking rewards.
    ///
    /// ### Accounts
    ///  0. `[WRITE]` Stake pool
    ///  1. `[READ]` Stake pool withdraw authority
    ///  2. `[WRITE]` Reserve stake account, to deposit SOL
    ///  3. `[WRITE, SIGNER]` Account providing the lamports to be deposited into the pool
    ///  4. `[WRITE]` User account to receive pool tokens
    ///  5. `[READ]` User account holding the DAO's community tokens
    ///  6. `[WRITE]` Account to receive fee tokens
    ///  7. `[WRITE]` Account to receive a portion of fee as referral fees
    ///  8. `[WRITE]` Pool token mint account
    ///  9. `[READ]` System program
    /// 10. `[READ]` Token program
    /// 11. `[WRITE]` Community token staking rewards account
    /// 12. `[SIGNER]` Owner wallet
    /// 13. `[READ]` Community token account
    /// 14. `[SIGNER]` (Optional) Stake pool SOL deposit authority
    DepositSolDaoInstructionData,
    DepositSolDao,
    lamports
);

amount_instruction_data!(
    /// Withdraws stake from the pool at the current ratio by burning pool tokens.
    ///
    /// ### Accounts
    ///  0. `[WRITE]` Stake pool
    ///  1. `[WRITE]` Validator stake list storage account
    ///  2. `[READ]` Stake pool withdraw authority
    ///  3. `[WRITE]` Validator or reserve stake account to split
    ///  4. `[WRITE]` Uninitialized stake account to receive the withdrawal
    ///  5. `[READ]` User account to set as the new withdraw authority
    ///  6. `[SIGNER]` User transfer authority, for the pool token account
    ///  7. `[WRITE]` User account with pool tokens to burn from
    ///  8. `[WRITE]` Account to receive pool fee tokens
    ///  9. `[WRITE]` Pool token mint account
    /// 10. `[READ]` Clock sysvar
    /// 11. `[READ]` Pool token program
    /// 12. `[READ]` Stake program
    WithdrawStakeInstructionData,
    WithdrawStake,
    pool_tokens
);

amount_instruction_data!(
    /// [`WithdrawStakeInstructionData`] with the DAO community token strategy applied.
    ///
    /// ### Accounts
    ///  0..=12. Same as [`WithdrawStakeInstructionData`]
    /// 13. `[READ]` User account holding the DAO's community tokens
    /// 14. `[WRITE]` Community token staking rewards account
    /// 15. `[SIGNER]` Owner wallet
    /// 16. `[READ]` Community token account
    WithdrawStakeWithDaoInstructionData,
    WithdrawStakeWithDao,
    pool_tokens
);

amount_instruction_data!(
    /// Withdraws SOL directly from the pool's reserve account. Fails if the reserve doesn't have
    /// enough SOL.
    ///
    /// ### Accounts
    ///  0. `[WRITE]` Stake pool
    ///  1. `[READ]` Stake pool withdraw authority
    ///  2. `[SIGNER]` User transfer authority, for the pool token account
    ///  3. `[WRITE]` User account to burn pool tokens from
    ///  4. `[WRITE]` Reserve stake account, to withdraw SOL
    ///  5. `[WRITE]` Account receiving the lamports from the reserve, must be a system account
    ///  6. `[WRITE]` Account to receive pool fee tokens
    ///  7. `[WRITE]` Pool token mint account
    ///  8. `[READ]` Clock sysvar
    ///  9. `[READ]` Stake history sysvar
    /// 10. `[READ]` Stake program
    /// 11. `[READ]` Token program
    /// 12. `[SIGNER]` (Optional) Stake pool SOL withdraw authority
    WithdrawSolInstructionData,
    WithdrawSol,
    pool_tokens
);

amount_instruction_data!(
    /// [`WithdrawSolInstructionData`] with the DAO community token strategy applied.
    ///
    /// ### Accounts
    ///  0. `[WRITE]` Stake pool
    ///  1. `[READ]` Stake pool withdraw authority
    ///  2. `[SIGNER]` User transfer authority, for the pool token account
    ///  3. `[WRITE]` User account to burn pool tokens from
    ///  4. `[READ]` User account holding the DAO's community tokens
    ///  5. `[WRITE]` Reserve stake account, to withdraw SOL
    ///  6. `[WRITE]` Account receiving the lamports from the reserve, must be a system account
    ///  7. `[WRITE]` Account to receive pool fee tokens
    ///  8. `[WRITE]` Pool token mint account
    ///  9. `[READ]` Clock sysvar
    /// 10. `[READ]` Stake history sysvar
    /// 11. `[READ]` Stake program
    /// 12. `[READ]` Token program
    /// 13. `[WRITE]` Community token staking rewards account
    /// 14. `[SIGNER]` Owner wallet
    /// 15. `[READ]` Community token account
    /// 16. `[SIGNER]` (Optional) Stake pool SOL withdraw authority
    WithdrawSolWithDaoInstructionData,
    WithdrawSolWithDao,
    pool_tokens
);

const_assert_eq!(AMOUNT_LEN, shapes::DEPOSIT_SOL.span());
const_assert_eq!(AMOUNT_LEN, shapes::DEPOSIT_SOL_DAO.span());
const_assert_eq!(AMOUNT_LEN, shapes::WITHDRAW_STAKE.span());
const_assert_eq!(AMOUNT_LEN, shapes::WITHDRAW_STAKE_WITH_DAO.span());
const_assert_eq!(AMOUNT_LEN, shapes::WITHDRAW_SOL.span());
const_assert_eq!(AMOUNT_LEN, shapes::WITHDRAW_SOL_WITH_DAO.span());

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DecodingError;

    #[test]
    fn deposit_sol_packs_opcode_then_lamports() {
        let data = DepositSolInstructionData::new(1_000_000).pack();
        assert_eq!(data, [14, 0x40, 0x42, 0x0f, 0, 0, 0, 0, 0]);
    }

    #[test]
    fn pool_tokens_are_signed() {
        let data = WithdrawSolInstructionData::new(-1).pack();
        assert_eq!(data, [16, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(
            WithdrawSolInstructionData::unpack(&data),
            Ok(WithdrawSolInstructionData::new(-1))
        );
    }

    #[test]
    fn same_layout_different_opcode() {
        let deposit_sol = DepositSolInstructionData::new(42).pack();
        let deposit_sol_dao = DepositSolDaoInstructionData::new(42).pack();
        assert_eq!(deposit_sol[1..], deposit_sol_dao[1..]);
        assert_eq!(deposit_sol_dao[0], 22);

        assert_eq!(
            DepositSolInstructionData::unpack(&deposit_sol_dao),
            Err(StakePoolError::OpcodeMismatch {
                expected: 14,
                found: 22
            })
        );
    }

    #[test]
    fn truncated_amount_is_rejected() {
        let data = WithdrawStakeInstructionData::new(5).pack();
        assert_eq!(
            WithdrawStakeInstructionData::unpack(&data[..8]),
            Err(DecodingError::InvalidLength {
                expected: 9,
                found: 8
            }
            .into())
        );
    }
}
