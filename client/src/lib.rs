//! Client-side decoding of stake pool instructions.
//!
//! Includes the [`InstructionView`] abstraction over received instructions, typed parameter
//! extraction for every instruction kind, and opcode dispatch through
//! [`StakePoolInstructionDecoder`].

pub mod debug;
pub mod decoder;
pub mod instruction_view;
pub mod params;
pub mod parsed_instruction;

pub use decoder::{
    StakePoolInstruction,
    StakePoolInstructionDecoder,
};
pub use instruction_view::InstructionView;
pub use parsed_instruction::ParsedInstruction;
