//! Shape-driven encoding and decoding.
//!
//! [`encode`] and [`decode`] work from a registry [`Shape`] and a name-keyed set of field values,
//! so they cover every instruction kind without a dedicated struct. They produce the exact same
//! bytes as the fixed-layout data structs in [`crate::instructions`].

use alloc::{
    collections::BTreeMap,
    vec,
    vec::Vec,
};

use crate::{
    error::{
        EncodingError,
        StakePoolError,
    },
    layout::Shape,
    pack::check_instruction_data,
};

/// Field values keyed by field name.
///
/// Values are held as `i128` so that every scalar kind in a layout, signed or unsigned, fits
/// without loss; range checking against the field's width happens at encode time.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FieldValues(BTreeMap<&'static str, i128>);

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &'static str, value: impl Into<i128>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: &'static str, value: impl Into<i128>) -> Option<i128> {
        self.0.insert(name, value.into())
    }

    pub fn get(&self, name: &str) -> Option<i128> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, i128)> + '_ {
        self.0.iter().map(|(name, value)| (*name, *value))
    }
}

impl<const N: usize> From<[(&'static str, i128); N]> for FieldValues {
    fn from(values: [(&'static str, i128); N]) -> Self {
        Self(values.into_iter().collect())
    }
}

/// The result of [`decode`]: the parsed opcode and one value per declared field.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DecodedFields {
    pub opcode: u8,
    pub fields: FieldValues,
}

/// Encodes `values` against `shape`, injecting the shape's opcode as the first byte.
///
/// `values` must hold exactly the shape's declared fields, each within its scalar range.
pub fn encode(shape: &Shape, values: &FieldValues) -> Result<Vec<u8>, StakePoolError> {
    if let Some((unknown, _)) = values.iter().find(|(name, _)| shape.field(name).is_none()) {
        return Err(EncodingError::UnknownField(unknown).into());
    }

    let mut data = vec![0u8; shape.span()];
    data[0] = shape.opcode;

    for (offset, field) in shape.offsets() {
        let value = values
            .get(field.name)
            .ok_or(EncodingError::MissingField(field.name))?;
        field.write(value, &mut data[offset..offset + field.width()])?;
    }

    Ok(data)
}

/// Decodes `data` against `shape`.
///
/// Fails with [`StakePoolError::OpcodeMismatch`] when `data` carries another instruction's opcode,
/// and with [`StakePoolError::Decoding`] when it's empty or isn't exactly the shape's span.
/// Buffers longer than the span are rejected rather than having their trailing bytes ignored.
pub fn decode(shape: &Shape, data: &[u8]) -> Result<DecodedFields, StakePoolError> {
    check_instruction_data(shape, data)?;

    let fields = shape
        .offsets()
        .map(|(offset, field)| (field.name, field.read(&data[offset..offset + field.width()])))
        .collect::<BTreeMap<_, _>>();

    Ok(DecodedFields {
        opcode: data[0],
        fields: FieldValues(fields),
    })
}
