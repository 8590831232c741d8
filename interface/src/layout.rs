//! Fixed-width layout primitives.
//!
//! A [`Shape`] is the opcode byte followed by a list of [`FieldSpec`]s packed back to back with no
//! padding. Every scalar is fixed width, so a shape's span is known at compile time.

use crate::error::EncodingError;

/// The scalar encodings used by the stake pool program. All multi-byte scalars are little-endian.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ScalarKind {
    /// Unsigned byte.
    U8,
    /// Unsigned 32-bit little-endian integer.
    U32,
    /// Signed 64-bit little-endian integer, the program's "native" integer.
    Ns64,
}

impl ScalarKind {
    #[inline(always)]
    pub const fn width(&self) -> usize {
        match self {
            ScalarKind::U8 => 1,
            ScalarKind::U32 => 4,
            ScalarKind::Ns64 => 8,
        }
    }

    pub const fn min(&self) -> i128 {
        match self {
            ScalarKind::U8 | ScalarKind::U32 => 0,
            ScalarKind::Ns64 => i64::MIN as i128,
        }
    }

    pub const fn max(&self) -> i128 {
        match self {
            ScalarKind::U8 => u8::MAX as i128,
            ScalarKind::U32 => u32::MAX as i128,
            ScalarKind::Ns64 => i64::MAX as i128,
        }
    }

    /// Writes `value` as little-endian bytes into `dst`, which must be exactly [`Self::width`]
    /// bytes long. The caller is responsible for range checking `value` first.
    fn write_le(&self, value: i128, dst: &mut [u8]) {
        match self {
            ScalarKind::U8 => dst.copy_from_slice(&(value as u8).to_le_bytes()),
            ScalarKind::U32 => dst.copy_from_slice(&(value as u32).to_le_bytes()),
            ScalarKind::Ns64 => dst.copy_from_slice(&(value as i64).to_le_bytes()),
        }
    }

    /// Reads a little-endian scalar from `src`, which must be exactly [`Self::width`] bytes long.
    fn read_le(&self, src: &[u8]) -> i128 {
        match self {
            ScalarKind::U8 => src[0] as i128,
            ScalarKind::U32 => {
                let mut bytes = [0u8; 4];
                bytes.copy_from_slice(src);
                u32::from_le_bytes(bytes) as i128
            }
            ScalarKind::Ns64 => {
                let mut bytes = [0u8; 8];
                bytes.copy_from_slice(src);
                i64::from_le_bytes(bytes) as i128
            }
        }
    }
}

/// A named scalar in an instruction layout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: ScalarKind,
}

impl FieldSpec {
    pub const fn u8(name: &'static str) -> Self {
        Self {
            name,
            kind: ScalarKind::U8,
        }
    }

    pub const fn u32(name: &'static str) -> Self {
        Self {
            name,
            kind: ScalarKind::U32,
        }
    }

    pub const fn ns64(name: &'static str) -> Self {
        Self {
            name,
            kind: ScalarKind::Ns64,
        }
    }

    #[inline(always)]
    pub const fn width(&self) -> usize {
        self.kind.width()
    }

    /// Checks that `value` is representable by this field's scalar kind.
    pub fn check_range(&self, value: i128) -> Result<(), EncodingError> {
        if value < self.kind.min() || value > self.kind.max() {
            return Err(EncodingError::OutOfRange {
                field: self.name,
                value,
            });
        }
        Ok(())
    }

    pub(crate) fn write(&self, value: i128, dst: &mut [u8]) -> Result<(), EncodingError> {
        self.check_range(value)?;
        self.kind.write_le(value, dst);
        Ok(())
    }

    pub(crate) fn read(&self, src: &[u8]) -> i128 {
        self.kind.read_le(src)
    }
}

/// The opcode and ordered field layout of one instruction kind.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Shape {
    pub opcode: u8,
    pub fields: &'static [FieldSpec],
}

impl Shape {
    /// Concatenates `fields` in declared order after the leading opcode byte.
    pub const fn new(opcode: u8, fields: &'static [FieldSpec]) -> Self {
        Self { opcode, fields }
    }

    /// The total encoded length: one opcode byte plus every field's width.
    pub const fn span(&self) -> usize {
        let mut span = 1;
        let mut i = 0;
        while i < self.fields.len() {
            span += self.fields[i].width();
            i += 1;
        }
        span
    }

    /// Returns each field alongside its byte offset in the encoded buffer.
    pub fn offsets(&self) -> impl Iterator<Item = (usize, &'static FieldSpec)> {
        self.fields.iter().scan(1, |offset, field| {
            let start = *offset;
            *offset += field.width();
            Some((start, field))
        })
    }

    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldSpec] = &[
        FieldSpec::u8("a"),
        FieldSpec::ns64("b"),
        FieldSpec::u32("c"),
    ];

    #[test]
    fn span_sums_widths_after_opcode() {
        assert_eq!(Shape::new(7, FIELDS).span(), 1 + 1 + 8 + 4);
        assert_eq!(Shape::new(7, &[]).span(), 1);
    }

    #[test]
    fn offsets_follow_declared_order() {
        let offsets = Shape::new(7, FIELDS)
            .offsets()
            .map(|(offset, field)| (offset, field.name))
            .collect::<alloc::vec::Vec<_>>();
        assert_eq!(offsets, [(1, "a"), (2, "b"), (10, "c")]);
    }

    #[test]
    fn range_checks_respect_signedness() {
        let unsigned = FieldSpec::u32("max_validators");
        assert!(unsigned.check_range(0).is_ok());
        assert!(unsigned.check_range(u32::MAX as i128).is_ok());
        assert_eq!(
            unsigned.check_range(-1),
            Err(EncodingError::OutOfRange {
                field: "max_validators",
                value: -1
            })
        );
        assert!(unsigned.check_range(u32::MAX as i128 + 1).is_err());

        let signed = FieldSpec::ns64("lamports");
        assert!(signed.check_range(i64::MIN as i128).is_ok());
        assert!(signed.check_range(i64::MAX as i128).is_ok());
        assert!(signed.check_range(i64::MAX as i128 + 1).is_err());
        assert!(signed.check_range(i64::MIN as i128 - 1).is_err());
    }

    #[test]
    fn negative_native_integers_are_twos_complement() {
        let field = FieldSpec::ns64("pool_tokens");
        let mut dst = [0u8; 8];
        field.write(-2, &mut dst).unwrap();
        assert_eq!(dst, [0xfe, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
        assert_eq!(field.read(&dst), -2);
    }
}
