use core::mem::MaybeUninit;

use crate::{
    error::{
        DecodingError,
        StakePoolError,
    },
    instructions::InstructionTag,
    layout::Shape,
};

pub const UNINIT_BYTE: MaybeUninit<u8> = MaybeUninit::uninit();

/// Packs a fixed-layout instruction data struct into its full wire representation, including the
/// leading opcode byte.
///
/// # Safety
///
/// Implementor must guarantee `pack_into_slice` writes all `LEN` bytes.
pub unsafe trait Pack<const LEN: usize>: Sized {
    /// Pack into a buffer of size LEN without zero initializing the buffer, then return the buffer.
    fn pack(&self) -> [u8; LEN] {
        let mut dst = [UNINIT_BYTE; LEN];
        self.pack_into_slice(&mut dst);

        // Safety: All LEN bytes were initialized in `pack_into_slice`.
        unsafe { *(dst.as_ptr() as *const [u8; LEN]) }
    }

    #[doc(hidden)]
    /// Pack into a destination slice of maybe uninitialized bytes of LEN length.
    fn pack_into_slice(&self, dst: &mut [MaybeUninit<u8>; LEN]);
}

/// A fixed-layout instruction data struct bound to one registry entry.
pub trait InstructionData: Sized {
    const TAG: InstructionTag;

    /// The registry shape this struct packs to and unpacks from.
    #[inline(always)]
    fn shape() -> &'static Shape {
        Self::TAG.shape()
    }

    /// Reads `Self` from the field bytes that follow the opcode. `data` has already been checked
    /// against [`InstructionData::shape`].
    fn read_fields(data: &[u8]) -> Result<Self, StakePoolError>;

    /// Validates the opcode and length of `data`, then reads `Self` from it.
    fn unpack(data: &[u8]) -> Result<Self, StakePoolError> {
        check_instruction_data(Self::shape(), data)?;
        Self::read_fields(&data[1..])
    }
}

/// Checks that `data` is instruction data for `shape`.
///
/// The opcode is checked before the length, so a buffer for a different instruction kind always
/// reports [`StakePoolError::OpcodeMismatch`] rather than a length error.
pub fn check_instruction_data(shape: &Shape, data: &[u8]) -> Result<(), StakePoolError> {
    let [opcode, ..] = data else {
        return Err(DecodingError::EmptyData.into());
    };

    if *opcode != shape.opcode {
        return Err(StakePoolError::OpcodeMismatch {
            expected: shape.opcode,
            found: *opcode,
        });
    }

    if data.len() != shape.span() {
        return Err(DecodingError::InvalidLength {
            expected: shape.span(),
            found: data.len(),
        }
        .into());
    }

    Ok(())
}

/// Copies `N` bytes starting at `offset` out of `src`.
#[inline(always)]
pub fn read_array<const N: usize>(src: &[u8], offset: usize) -> Result<[u8; N], DecodingError> {
    src.get(offset..offset + N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(DecodingError::InvalidLength {
            expected: offset + N,
            found: src.len(),
        })
}

/// Writes bytes from a source slice into an uninitialized destination buffer.
///
/// This is a safe alternative to `ptr::copy_nonoverlapping` for writing to `MaybeUninit`
/// slices. The compiler should optimize this loop into a memcpy in release builds.
///
/// Caller must ensure that `src.len()` equals `dst.len()`. A partially written `dst` will cause UB
/// if it's later read back as an initialized array.
///
/// From pinocchio's `[no_std]` library:
/// <https://github.com/anza-xyz/pinocchio/blob/3044aaf5ea7eac01adc754d4bdf93c21c6e54d42/programs/token/src/lib.rs#L13>
#[inline(always)]
pub fn write_bytes(dst: &mut [MaybeUninit<u8>], src: &[u8]) {
    debug_assert_eq!(
        src.len(),
        dst.len(),
        "tried to `write_bytes` with mismatched src/dst lengths"
    );
    for (d, s) in dst.iter_mut().zip(src.iter()) {
        d.write(*s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instructions::shapes;

    #[test]
    fn empty_data_is_a_decoding_error() {
        assert_eq!(
            check_instruction_data(&shapes::DEPOSIT, &[]),
            Err(DecodingError::EmptyData.into())
        );
    }

    #[test]
    fn opcode_is_checked_before_length() {
        // A 1 byte `Deposit` buffer checked against the 37 byte `Initialize` shape.
        assert_eq!(
            check_instruction_data(&shapes::INITIALIZE, &[9]),
            Err(StakePoolError::OpcodeMismatch {
                expected: 0,
                found: 9
            })
        );
    }

    #[test]
    fn trailing_bytes_are_rejected() {
        assert_eq!(
            check_instruction_data(&shapes::DEPOSIT, &[9, 0]),
            Err(DecodingError::InvalidLength {
                expected: 1,
                found: 2
            }
            .into())
        );
    }

    #[test]
    fn read_array_bounds() {
        let src = [1u8, 2, 3, 4, 5];
        assert_eq!(read_array::<4>(&src, 1), Ok([2, 3, 4, 5]));
        assert_eq!(
            read_array::<4>(&src, 2),
            Err(DecodingError::InvalidLength {
                expected: 6,
                found: 5
            })
        );
    }
}
