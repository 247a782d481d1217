//! Bounds-checked byte view
//!
//! Provides [`ByteView`], the single abstraction every other component uses
//! to read raw bytes. Reads are stateless: every call takes an explicit
//! offset and a declared endianness, and any read that would run past the
//! end of the region fails with `OutOfBounds`.

use std::borrow::Cow;

use crate::error::{Result, WaveScanError};

// ============================================================================
// Endianness
// ============================================================================

/// Byte order declared per read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Little,
    Big,
}

// ============================================================================
// Input capability check
// ============================================================================

/// Capability trait for values that can back a [`ByteView`].
///
/// This is the one place the "does this input expose a contiguous byte
/// region" question is answered; call sites never inspect input shapes
/// themselves. Implementors with non-contiguous or otherwise unreadable
/// storage return `None`, which [`ByteView::wrap`] reports as
/// `UnsupportedInput`.
pub trait ByteSource {
    /// The contiguous byte region backing this value, if there is one.
    fn byte_region(&self) -> Option<&[u8]>;
}

impl ByteSource for [u8] {
    fn byte_region(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl<const N: usize> ByteSource for [u8; N] {
    fn byte_region(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for Vec<u8> {
    fn byte_region(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for Cow<'_, [u8]> {
    fn byte_region(&self) -> Option<&[u8]> {
        Some(self)
    }
}

impl ByteSource for ByteView<'_> {
    fn byte_region(&self) -> Option<&[u8]> {
        Some(self.bytes)
    }
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    fn byte_region(&self) -> Option<&[u8]> {
        (**self).byte_region()
    }
}

// ============================================================================
// ByteView
// ============================================================================

/// Read-only, bounds-checked view over a contiguous byte region.
///
/// A `ByteView` borrows its backing storage and is `Copy`; it holds no
/// cursor and no mutable state, so views can be shared freely across
/// threads and call sites.
#[derive(Debug, Clone, Copy)]
pub struct ByteView<'a> {
    bytes: &'a [u8],
}

impl<'a> ByteView<'a> {
    /// Wrap any byte-bearing value in a view.
    ///
    /// # Errors
    /// * `UnsupportedInput` - If the value exposes no contiguous byte region
    pub fn wrap<S: ByteSource + ?Sized>(source: &'a S) -> Result<Self> {
        source
            .byte_region()
            .map(|bytes| ByteView { bytes })
            .ok_or(WaveScanError::UnsupportedInput)
    }

    /// Total length of the viewed region in bytes
    #[inline]
    pub fn byte_length(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the viewed region is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Fetch `width` bytes starting at `offset`, verifying bounds.
    #[inline]
    fn bytes_at(&self, offset: usize, width: usize) -> Result<&'a [u8]> {
        let end = offset
            .checked_add(width)
            .filter(|&end| end <= self.bytes.len())
            .ok_or(WaveScanError::OutOfBounds {
                offset,
                width,
                length: self.bytes.len(),
            })?;
        Ok(&self.bytes[offset..end])
    }

    /// Narrow the view to `length` bytes starting at `offset`.
    ///
    /// # Errors
    /// * `OutOfBounds` - If the requested range exceeds the viewed region
    pub fn subview(&self, offset: usize, length: usize) -> Result<ByteView<'a>> {
        Ok(ByteView {
            bytes: self.bytes_at(offset, length)?,
        })
    }

    /// Read an unsigned 8-bit integer
    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        Ok(self.bytes_at(offset, 1)?[0])
    }

    /// Read a signed 8-bit integer
    pub fn read_i8(&self, offset: usize) -> Result<i8> {
        Ok(self.read_u8(offset)? as i8)
    }

    /// Read an unsigned 16-bit integer
    pub fn read_u16(&self, offset: usize, endian: Endian) -> Result<u16> {
        let b = self.bytes_at(offset, 2)?;
        let raw = [b[0], b[1]];
        Ok(match endian {
            Endian::Little => u16::from_le_bytes(raw),
            Endian::Big => u16::from_be_bytes(raw),
        })
    }

    /// Read a signed 16-bit integer
    pub fn read_i16(&self, offset: usize, endian: Endian) -> Result<i16> {
        Ok(self.read_u16(offset, endian)? as i16)
    }

    /// Read an unsigned 24-bit integer into the low bits of a `u32`
    pub fn read_u24(&self, offset: usize, endian: Endian) -> Result<u32> {
        let b = self.bytes_at(offset, 3)?;
        Ok(match endian {
            Endian::Little => u32::from(b[0]) | u32::from(b[1]) << 8 | u32::from(b[2]) << 16,
            Endian::Big => u32::from(b[2]) | u32::from(b[1]) << 8 | u32::from(b[0]) << 16,
        })
    }

    /// Read a signed 24-bit integer, sign-extended from bit 23 into an `i32`.
    ///
    /// There is no native 24-bit integer type; the three payload bytes are
    /// assembled and the top byte replicated from the sign bit.
    pub fn read_i24(&self, offset: usize, endian: Endian) -> Result<i32> {
        let raw = self.read_u24(offset, endian)?;
        // Shift the 24-bit value to the top of the word, then arithmetic
        // shift back down to replicate the sign bit.
        Ok(((raw << 8) as i32) >> 8)
    }

    /// Read an unsigned 32-bit integer
    pub fn read_u32(&self, offset: usize, endian: Endian) -> Result<u32> {
        let b = self.bytes_at(offset, 4)?;
        let raw = [b[0], b[1], b[2], b[3]];
        Ok(match endian {
            Endian::Little => u32::from_le_bytes(raw),
            Endian::Big => u32::from_be_bytes(raw),
        })
    }

    /// Read a signed 32-bit integer
    pub fn read_i32(&self, offset: usize, endian: Endian) -> Result<i32> {
        Ok(self.read_u32(offset, endian)? as i32)
    }

    /// Read an IEEE-754 single-precision float
    pub fn read_f32(&self, offset: usize, endian: Endian) -> Result<f32> {
        Ok(f32::from_bits(self.read_u32(offset, endian)?))
    }

    /// Read an IEEE-754 double-precision float
    pub fn read_f64(&self, offset: usize, endian: Endian) -> Result<f64> {
        let b = self.bytes_at(offset, 8)?;
        let raw = [b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]];
        Ok(f64::from_bits(match endian {
            Endian::Little => u64::from_le_bytes(raw),
            Endian::Big => u64::from_be_bytes(raw),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_slice_and_vec() {
        let vec = vec![1u8, 2, 3, 4];
        let view = ByteView::wrap(&vec).unwrap();
        assert_eq!(view.byte_length(), 4);

        let slice: &[u8] = &vec;
        let view = ByteView::wrap(slice).unwrap();
        assert_eq!(view.read_u8(0).unwrap(), 1);

        let array = [9u8; 3];
        let view = ByteView::wrap(&array).unwrap();
        assert_eq!(view.byte_length(), 3);
    }

    #[test]
    fn test_wrap_existing_view() {
        let data = [1u8, 2, 3];
        let first = ByteView::wrap(&data[..]).unwrap();
        let second = ByteView::wrap(&first).unwrap();
        assert_eq!(second.byte_length(), 3);
        assert_eq!(second.read_u8(2).unwrap(), 3);
    }

    #[test]
    fn test_unsupported_input() {
        struct Opaque;
        impl ByteSource for Opaque {
            fn byte_region(&self) -> Option<&[u8]> {
                None
            }
        }

        let err = ByteView::wrap(&Opaque).unwrap_err();
        assert_eq!(err.error_code(), "UNSUPPORTED_INPUT");
    }

    #[test]
    fn test_read_u16_endianness() {
        let data = [0x34u8, 0x12];
        let view = ByteView::wrap(&data).unwrap();
        assert_eq!(view.read_u16(0, Endian::Little).unwrap(), 0x1234);
        assert_eq!(view.read_u16(0, Endian::Big).unwrap(), 0x3412);
    }

    #[test]
    fn test_read_u32_and_i32() {
        let data = [0xFFu8, 0xFF, 0xFF, 0xFF];
        let view = ByteView::wrap(&data).unwrap();
        assert_eq!(view.read_u32(0, Endian::Little).unwrap(), u32::MAX);
        assert_eq!(view.read_i32(0, Endian::Little).unwrap(), -1);
    }

    #[test]
    fn test_read_i24_sign_extension() {
        // 0xFFFFFF is -1 once sign-extended from bit 23
        let data = [0xFFu8, 0xFF, 0xFF];
        let view = ByteView::wrap(&data).unwrap();
        assert_eq!(view.read_i24(0, Endian::Little).unwrap(), -1);

        // 0x7FFFFF is the largest positive 24-bit value
        let data = [0xFFu8, 0xFF, 0x7F];
        let view = ByteView::wrap(&data).unwrap();
        assert_eq!(view.read_i24(0, Endian::Little).unwrap(), 0x7F_FFFF);

        // 0x800000 is the most negative 24-bit value
        let data = [0x00u8, 0x00, 0x80];
        let view = ByteView::wrap(&data).unwrap();
        assert_eq!(view.read_i24(0, Endian::Little).unwrap(), -0x80_0000);
    }

    #[test]
    fn test_read_u24_big_endian() {
        let data = [0x12u8, 0x34, 0x56];
        let view = ByteView::wrap(&data).unwrap();
        assert_eq!(view.read_u24(0, Endian::Big).unwrap(), 0x123456);
        assert_eq!(view.read_u24(0, Endian::Little).unwrap(), 0x563412);
    }

    #[test]
    fn test_read_floats() {
        let bytes = 1.5f32.to_le_bytes();
        let view = ByteView::wrap(&bytes).unwrap();
        assert_eq!(view.read_f32(0, Endian::Little).unwrap(), 1.5);

        let bytes = (-0.25f64).to_be_bytes();
        let view = ByteView::wrap(&bytes).unwrap();
        assert_eq!(view.read_f64(0, Endian::Big).unwrap(), -0.25);
    }

    #[test]
    fn test_out_of_bounds_every_width() {
        let data = [0u8; 4];
        let view = ByteView::wrap(&data).unwrap();

        assert!(view.read_u8(4).is_err());
        assert!(view.read_u16(3, Endian::Little).is_err());
        assert!(view.read_u24(2, Endian::Little).is_err());
        assert!(view.read_u32(1, Endian::Little).is_err());
        assert!(view.read_f64(0, Endian::Little).is_err());

        // In-bounds reads at the same widths succeed
        assert!(view.read_u8(3).is_ok());
        assert!(view.read_u32(0, Endian::Little).is_ok());
    }

    #[test]
    fn test_subview() {
        let data = [1u8, 2, 3, 4, 5];
        let view = ByteView::wrap(&data).unwrap();

        let sub = view.subview(2, 3).unwrap();
        assert_eq!(sub.byte_length(), 3);
        assert_eq!(sub.read_u8(0).unwrap(), 3);

        assert!(view.subview(3, 3).is_err());
        assert!(view.subview(5, 0).unwrap().is_empty());
    }

    #[test]
    fn test_out_of_bounds_offset_overflow() {
        let data = [0u8; 4];
        let view = ByteView::wrap(&data).unwrap();
        let err = view.read_u32(usize::MAX, Endian::Little).unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_BOUNDS");
    }
}
