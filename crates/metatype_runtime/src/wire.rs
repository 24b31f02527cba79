//! Fixed-width byte encoding for `f32` component lists.
//!
//! Components are written field by field as little-endian IEEE-754 `f32`, in declaration order. On little-endian
//! hosts this is byte-identical to the in-memory layout of the `#[repr(C)]` types in [`crate::linalg`], but unlike a
//! raw memory copy it decodes to the same value on every host.

use crate::errors::ConversionError;

/// Encoded width of one component.
pub const F32_WIDTH: usize = std::mem::size_of::<f32>();

/// Encoded size of `count` components.
pub const fn encoded_len(count: usize) -> usize {
    count * F32_WIDTH
}

/// Encode components into a new buffer of exactly [`encoded_len`]`(values.len())` bytes.
pub fn encode_f32s(values: &[f32]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_len(values.len()));
    for value in values {
        buf.extend_from_slice(&value.to_le_bytes());
    }
    buf
}

/// Decode `N` components from the front of `buf`.
///
/// ## Errors
/// - [`ConversionError::BufferTooShort`] if `buf` holds fewer than [`encoded_len`]`(N)` bytes.
///
/// ## Notes
/// - Trailing bytes beyond the fixed size are ignored.
pub fn decode_f32s<const N: usize>(buf: &[u8], type_name: &'static str) -> Result<[f32; N], ConversionError> {
    let expected = encoded_len(N);
    if buf.len() < expected {
        return Err(ConversionError::BufferTooShort {
            type_name,
            expected,
            actual: buf.len(),
        });
    }

    let mut out = [0.0f32; N];
    for (slot, chunk) in out.iter_mut().zip(buf.chunks_exact(F32_WIDTH)) {
        let mut bytes = [0u8; F32_WIDTH];
        bytes.copy_from_slice(chunk);
        *slot = f32::from_le_bytes(bytes);
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn encodes_little_endian() {
        assert_eq!(encode_f32s(&[1.0]), vec![0x00, 0x00, 0x80, 0x3f]);
        assert_eq!(encode_f32s(&[1.0, -2.0]).len(), encoded_len(2));
    }

    #[test]
    fn decode_preserves_bits() {
        let values = [0.1f32, -0.0, f32::MAX, f32::MIN_POSITIVE];
        let decoded = decode_f32s::<4>(&encode_f32s(&values), "T").unwrap();
        for (a, b) in values.iter().zip(decoded.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn decode_rejects_short_buffer() {
        assert_eq!(
            decode_f32s::<2>(&[0u8; 7], "Pair"),
            Err(ConversionError::BufferTooShort {
                type_name: "Pair",
                expected: 8,
                actual: 7
            })
        );
    }

    #[test]
    fn decode_ignores_trailing_bytes() {
        let mut buf = encode_f32s(&[3.0, 4.0]);
        buf.extend_from_slice(&[0xff; 3]);
        assert_eq!(decode_f32s::<2>(&buf, "Pair").unwrap(), [3.0, 4.0]);
    }
}
