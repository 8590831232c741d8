//! Wire layouts for the stake pool program's instructions.
//!
//! The registry in [`instructions`] is the single source of truth for every opcode and field
//! layout. [`codec`] encodes and decodes against those layouts generically, while each
//! instruction kind also has a fixed-layout data struct that packs to the exact same bytes.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod codec;
pub mod error;
pub mod instructions;
pub mod layout;
pub mod pack;

pub mod program {
    use solana_address::Address;

    /// The stake pool program that executes the instructions described in this crate.
    pub const ID: Address = Address::from_str_const("SPoo1Ku8WFXoNDMHPsrGSTSG1Y47rzgn41SLUNakuHy");

    #[inline(always)]
    pub fn check_id(id: &Address) -> bool {
        id == &ID
    }
}

#[cfg(test)]
mod tests {
    use solana_address::Address;

    use super::program;

    #[test]
    fn check_id() {
        assert!(program::check_id(&program::ID));
        assert!(!program::check_id(&Address::new_from_array([0; 32])));
    }
}
