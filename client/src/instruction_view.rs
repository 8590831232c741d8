//! A read-only view over a received instruction: its program id, its ordered account keys and its
//! data bytes.

use solana_address::Address;
use solana_instruction::Instruction;

use crate::parsed_instruction::ParsedInstruction;

pub trait InstructionView {
    fn program_id(&self) -> &Address;

    fn num_accounts(&self) -> usize;

    /// The account key at `index`, or `None` if the instruction carries fewer accounts.
    fn account(&self, index: usize) -> Option<&Address>;

    fn data(&self) -> &[u8];
}

impl InstructionView for Instruction {
    #[inline(always)]
    fn program_id(&self) -> &Address {
        &self.program_id
    }

    #[inline(always)]
    fn num_accounts(&self) -> usize {
        self.accounts.len()
    }

    #[inline(always)]
    fn account(&self, index: usize) -> Option<&Address> {
        self.accounts.get(index).map(|meta| &meta.pubkey)
    }

    #[inline(always)]
    fn data(&self) -> &[u8] {
        &self.data
    }
}

impl InstructionView for ParsedInstruction {
    #[inline(always)]
    fn program_id(&self) -> &Address {
        &self.program_id
    }

    #[inline(always)]
    fn num_accounts(&self) -> usize {
        self.accounts.len()
    }

    #[inline(always)]
    fn account(&self, index: usize) -> Option<&Address> {
        self.accounts.get(index)
    }

    #[inline(always)]
    fn data(&self) -> &[u8] {
        &self.data
    }
}

impl<T: InstructionView + ?Sized> InstructionView for &T {
    #[inline(always)]
    fn program_id(&self) -> &Address {
        (**self).program_id()
    }

    #[inline(always)]
    fn num_accounts(&self) -> usize {
        (**self).num_accounts()
    }

    #[inline(always)]
    fn account(&self, index: usize) -> Option<&Address> {
        (**self).account(index)
    }

    #[inline(always)]
    fn data(&self) -> &[u8] {
        (**self).data()
    }
}
