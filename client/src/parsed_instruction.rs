//! Owned instructions resolved out of a compiled transaction message.

use solana_address::Address;
use solana_instruction::Instruction;
use solana_sdk::message::compiled_instruction::CompiledInstruction;

/// An instruction with its program id and account indices resolved against the message's account
/// keys.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParsedInstruction {
    pub program_id: Address,
    pub accounts: Vec<Address>,
    pub data: Vec<u8>,
}

impl ParsedInstruction {
    /// Resolves `instruction` against `account_keys`, the message's static keys followed by any
    /// loaded addresses.
    ///
    /// Returns `None` if the program id index or any account index is out of bounds.
    pub fn from_compiled_instruction(
        instruction: &CompiledInstruction,
        account_keys: &[Address],
    ) -> Option<Self> {
        Some(Self {
            program_id: *account_keys.get(instruction.program_id_index as usize)?,
            accounts: instruction
                .accounts
                .iter()
                .map(|i| account_keys.get(*i as usize).copied())
                .collect::<Option<Vec<_>>>()?,
            data: instruction.data.clone(),
        })
    }
}

impl From<Instruction> for ParsedInstruction {
    fn from(instruction: Instruction) -> Self {
        Self {
            program_id: instruction.program_id,
            accounts: instruction
                .accounts
                .into_iter()
                .map(|meta| meta.pubkey)
                .collect(),
            data: instruction.data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_indices_against_account_keys() {
        let keys = (0..4u8)
            .map(|i| Address::new_from_array([i; 32]))
            .collect::<Vec<_>>();
        let compiled = CompiledInstruction {
            program_id_index: 3,
            accounts: vec![2, 0, 1],
            data: vec![9],
        };

        let parsed = ParsedInstruction::from_compiled_instruction(&compiled, &keys).unwrap();
        assert_eq!(parsed.program_id, keys[3]);
        assert_eq!(parsed.accounts, vec![keys[2], keys[0], keys[1]]);
        assert_eq!(parsed.data, vec![9]);
    }

    #[test]
    fn out_of_bounds_indices() {
        let keys = [Address::new_from_array([1; 32])];
        let bad_program = CompiledInstruction {
            program_id_index: 1,
            accounts: vec![],
            data: vec![],
        };
        let bad_account = CompiledInstruction {
            program_id_index: 0,
            accounts: vec![0, 5],
            data: vec![],
        };

        assert!(ParsedInstruction::from_compiled_instruction(&bad_program, &keys).is_none());
        assert!(ParsedInstruction::from_compiled_instruction(&bad_account, &keys).is_none());
    }
}
