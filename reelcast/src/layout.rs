//! Schema-driven payload codec. The on-chain program reads a fixed-order
//! record (tag byte, length-prefixed strings, raw numeric fields); instead of
//! manual offset arithmetic, the layout is declared once as an ordered field
//! list and encoding/decoding walk that declaration.

use thiserror::Error;

/// Size of the scratch buffer the original client allocated for a payload.
/// Anything larger is rejected up front rather than silently truncated.
pub const MAX_PAYLOAD_LEN: usize = 1000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout declares {expected} fields but {actual} values were given")]
    FieldCountMismatch { expected: usize, actual: usize },
    #[error("value for field `{0}` does not match its declared kind")]
    KindMismatch(&'static str),
    #[error("encoded payload would be {size} bytes, past the {max} byte bound")]
    PayloadTooLarge { size: usize, max: usize },
    #[error("payload ended before field `{0}` was fully read")]
    UnexpectedEnd(&'static str),
    #[error("payload carries {0} trailing bytes past the declared layout")]
    TrailingBytes(usize),
    #[error("field `{0}` is not valid UTF-8")]
    InvalidUtf8(&'static str),
}

/// Wire shape of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// One raw byte.
    U8,
    /// 4-byte little-endian length prefix followed by UTF-8 bytes.
    Str,
}

#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub name: &'static str,
    pub kind: FieldKind,
}

/// A typed value paired with a field slot at encode time, and produced back
/// at decode time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    U8(u8),
    Str(String),
}

impl Value {
    fn kind(&self) -> FieldKind {
        match self {
            Value::U8(_) => FieldKind::U8,
            Value::Str(_) => FieldKind::Str,
        }
    }

    pub fn as_u8(&self) -> Option<u8> {
        match self {
            Value::U8(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// An ordered field schema. Field write order is the layout; reordering the
/// declaration changes the wire format.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    fields: &'static [Field],
}

impl Layout {
    pub const fn new(fields: &'static [Field]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &'static [Field] {
        self.fields
    }

    /// Exact number of bytes `values` will occupy on the wire. Also performs
    /// the arity/kind checks so callers can validate without encoding.
    pub fn span(&self, values: &[Value]) -> Result<usize, LayoutError> {
        if values.len() != self.fields.len() {
            return Err(LayoutError::FieldCountMismatch { expected: self.fields.len(), actual: values.len() });
        }
        let mut size = 0usize;
        for (field, value) in self.fields.iter().zip(values) {
            if field.kind != value.kind() {
                return Err(LayoutError::KindMismatch(field.name));
            }
            size += match value {
                Value::U8(_) => 1,
                Value::Str(s) => 4 + s.len(),
            };
        }
        Ok(size)
    }

    /// Serialize `values` in declaration order. Fails before writing anything
    /// when the payload would overflow the working buffer bound.
    pub fn encode(&self, values: &[Value]) -> Result<Vec<u8>, LayoutError> {
        let size = self.span(values)?;
        if size > MAX_PAYLOAD_LEN {
            return Err(LayoutError::PayloadTooLarge { size, max: MAX_PAYLOAD_LEN });
        }
        let mut buf = Vec::with_capacity(size);
        for value in values {
            match value {
                Value::U8(v) => buf.push(*v),
                Value::Str(s) => {
                    buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
                    buf.extend_from_slice(s.as_bytes());
                }
            }
        }
        Ok(buf)
    }

    /// Strict inverse of [`Layout::encode`]: truncated input and trailing
    /// bytes are both errors.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<Value>, LayoutError> {
        let mut values = Vec::with_capacity(self.fields.len());
        let mut cursor = 0usize;
        for field in self.fields {
            match field.kind {
                FieldKind::U8 => {
                    let byte = *bytes.get(cursor).ok_or(LayoutError::UnexpectedEnd(field.name))?;
                    cursor += 1;
                    values.push(Value::U8(byte));
                }
                FieldKind::Str => {
                    let prefix = bytes.get(cursor..cursor + 4).ok_or(LayoutError::UnexpectedEnd(field.name))?;
                    let len = u32::from_le_bytes([prefix[0], prefix[1], prefix[2], prefix[3]]) as usize;
                    cursor += 4;
                    let raw = bytes.get(cursor..cursor + len).ok_or(LayoutError::UnexpectedEnd(field.name))?;
                    cursor += len;
                    let text = std::str::from_utf8(raw).map_err(|_| LayoutError::InvalidUtf8(field.name))?;
                    values.push(Value::Str(text.to_string()));
                }
            }
        }
        if cursor != bytes.len() {
            return Err(LayoutError::TrailingBytes(bytes.len() - cursor));
        }
        Ok(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static TEST_FIELDS: [Field; 3] = [
        Field { name: "tag", kind: FieldKind::U8 },
        Field { name: "label", kind: FieldKind::Str },
        Field { name: "score", kind: FieldKind::U8 },
    ];

    fn test_layout() -> Layout {
        Layout::new(&TEST_FIELDS)
    }

    #[test]
    fn encode_decode_round_trip() {
        let values = vec![Value::U8(7), Value::Str("blade runner".to_string()), Value::U8(5)];
        let bytes = test_layout().encode(&values).unwrap();
        assert_eq!(bytes.len(), 1 + 4 + 12 + 1);
        assert_eq!(test_layout().decode(&bytes).unwrap(), values);
    }

    #[test]
    fn encoding_is_deterministic() {
        let values = vec![Value::U8(1), Value::Str("same".to_string()), Value::U8(2)];
        assert_eq!(test_layout().encode(&values).unwrap(), test_layout().encode(&values).unwrap());
    }

    #[test]
    fn string_fields_are_length_prefixed_little_endian() {
        let values = vec![Value::U8(0), Value::Str("ab".to_string()), Value::U8(3)];
        let bytes = test_layout().encode(&values).unwrap();
        assert_eq!(bytes, vec![0, 2, 0, 0, 0, b'a', b'b', 3]);
    }

    #[test]
    fn oversized_payload_is_a_hard_error() {
        let values = vec![Value::U8(0), Value::Str("x".repeat(MAX_PAYLOAD_LEN)), Value::U8(0)];
        let err = test_layout().encode(&values).unwrap_err();
        assert!(matches!(err, LayoutError::PayloadTooLarge { .. }));
    }

    #[test]
    fn arity_and_kind_mismatches_are_rejected() {
        let too_few = vec![Value::U8(0)];
        assert!(matches!(test_layout().encode(&too_few).unwrap_err(), LayoutError::FieldCountMismatch { .. }));

        let wrong_kind = vec![Value::Str("tag?".to_string()), Value::Str("t".to_string()), Value::U8(0)];
        assert_eq!(test_layout().encode(&wrong_kind).unwrap_err(), LayoutError::KindMismatch("tag"));
    }

    #[test]
    fn truncated_and_padded_payloads_are_rejected() {
        let values = vec![Value::U8(7), Value::Str("dune".to_string()), Value::U8(5)];
        let bytes = test_layout().encode(&values).unwrap();

        assert!(matches!(test_layout().decode(&bytes[..bytes.len() - 1]).unwrap_err(), LayoutError::UnexpectedEnd(_)));

        let mut padded = bytes.clone();
        padded.push(0);
        assert_eq!(test_layout().decode(&padded).unwrap_err(), LayoutError::TrailingBytes(1));
    }
}
