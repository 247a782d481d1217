//! Multi-encoding text extraction
//!
//! Decodes bounded byte ranges out of a [`ByteView`] into strings. WAVE
//! parsing uses this for its fixed-length tag fields, but the routine is
//! general-purpose: single-byte encodings, UTF-8, and the three UTF-16
//! flavors (fixed big/little endian and BOM-detected) are supported.
//!
//! Every decoder stops at the encoding's NUL terminator or when the byte
//! budget runs out, whichever comes first.

use std::str::FromStr;

use crate::bytes::view::{ByteView, Endian};
use crate::error::{Result, WaveScanError};

// Smallest codepoint a UTF-8 sequence of each length may encode; anything
// below is an overlong encoding.
const UTF8_MIN_CODEPOINT: [u32; 4] = [0, 0x80, 0x800, 0x10000];

/// Supported text encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// 7-bit ASCII, one byte per character
    Ascii,
    /// ISO-8859-1, one byte per character
    Latin1,
    /// Standard UTF-8, 1-4 bytes per codepoint
    Utf8,
    /// UTF-16, fixed big-endian code units
    Utf16Be,
    /// UTF-16, fixed little-endian code units
    Utf16Le,
    /// UTF-16 with a leading byte-order mark selecting the endianness
    Utf16Bom,
}

impl Encoding {
    /// Resolve an encoding from its textual name (case-insensitive).
    ///
    /// Accepts the plain and hyphenated spellings: `ascii`, `latin1`,
    /// `utf8`/`utf-8`, `utf16be`/`utf16-be`, `utf16le`/`utf16-le`,
    /// `utf16bom`/`utf16-bom`.
    ///
    /// # Errors
    /// * `UnsupportedEncoding` - If the name matches no known encoding
    pub fn from_name(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "ascii" => Ok(Encoding::Ascii),
            "latin1" => Ok(Encoding::Latin1),
            "utf8" | "utf-8" => Ok(Encoding::Utf8),
            "utf16be" | "utf16-be" => Ok(Encoding::Utf16Be),
            "utf16le" | "utf16-le" => Ok(Encoding::Utf16Le),
            "utf16bom" | "utf16-bom" => Ok(Encoding::Utf16Bom),
            _ => Err(WaveScanError::UnsupportedEncoding {
                name: name.to_string(),
            }),
        }
    }
}

impl FromStr for Encoding {
    type Err = WaveScanError;

    fn from_str(s: &str) -> Result<Self> {
        Encoding::from_name(s)
    }
}

/// Decode at most `max_bytes` bytes starting at `offset` into a string.
///
/// # Arguments
/// * `view` - The byte region to read from
/// * `offset` - Byte offset of the first byte of the text
/// * `max_bytes` - Byte budget; decoding never reads past `offset + max_bytes`
/// * `encoding` - The encoding to interpret the bytes under
///
/// # Errors
/// * `OutOfBounds` - If the text runs past the end of the view, or a
///   multi-byte sequence is cut off by the byte budget
/// * `InvalidSurrogatePair` - If UTF-16 input breaks the surrogate rules
pub fn decode_string(
    view: &ByteView,
    offset: usize,
    max_bytes: usize,
    encoding: Encoding,
) -> Result<String> {
    match encoding {
        Encoding::Ascii | Encoding::Latin1 => decode_single_byte(view, offset, max_bytes),
        Encoding::Utf8 => decode_utf8(view, offset, max_bytes),
        Encoding::Utf16Be => decode_utf16(view, offset, max_bytes, Endian::Big),
        Encoding::Utf16Le => decode_utf16(view, offset, max_bytes, Endian::Little),
        Encoding::Utf16Bom => decode_utf16_bom(view, offset, max_bytes),
    }
}

/// One byte per character; latin1's identity mapping covers ascii too.
fn decode_single_byte(view: &ByteView, offset: usize, max_bytes: usize) -> Result<String> {
    let mut result = String::with_capacity(max_bytes);

    for i in 0..max_bytes {
        let byte = view.read_u8(offset + i)?;
        if byte == 0 {
            break;
        }
        result.push(char::from(byte));
    }

    Ok(result)
}

fn decode_utf8(view: &ByteView, offset: usize, max_bytes: usize) -> Result<String> {
    let mut result = String::new();
    let end = offset.saturating_add(max_bytes);
    let mut pos = offset;

    while pos < end {
        let lead = view.read_u8(pos)?;
        if lead == 0 {
            break;
        }

        // Continuation-byte count from the lead byte's bit pattern. A lead
        // that matches none of the four patterns is malformed.
        let continuations = if lead & 0x80 == 0 {
            0
        } else if lead & 0xE0 == 0xC0 {
            1
        } else if lead & 0xF0 == 0xE0 {
            2
        } else if lead & 0xF8 == 0xF0 {
            3
        } else {
            result.push(char::REPLACEMENT_CHARACTER);
            pos += 1;
            continue;
        };

        let width = 1 + continuations;
        if pos + width > end {
            // The sequence is cut off by the byte budget; the bytes that
            // would complete it are not ours to read.
            return Err(WaveScanError::OutOfBounds {
                offset: pos,
                width,
                length: end,
            });
        }

        let mut codepoint = match continuations {
            1 => u32::from(lead & 0x1F),
            2 => u32::from(lead & 0x0F),
            3 => u32::from(lead & 0x07),
            _ => u32::from(lead),
        };

        let mut malformed = false;
        for i in 1..width {
            let byte = view.read_u8(pos + i)?;
            if byte & 0xC0 != 0x80 {
                malformed = true;
            }
            codepoint = codepoint << 6 | u32::from(byte & 0x3F);
        }
        pos += width;

        // Overlong encodings, surrogate scalars, and values past U+10FFFF
        // all collapse to the replacement character.
        let decoded = if malformed || codepoint < UTF8_MIN_CODEPOINT[continuations] {
            None
        } else {
            char::from_u32(codepoint)
        };
        result.push(decoded.unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    Ok(result)
}

fn decode_utf16(view: &ByteView, offset: usize, max_bytes: usize, endian: Endian) -> Result<String> {
    let mut result = String::new();
    let end = offset.saturating_add(max_bytes);
    let mut pos = offset;

    // A final lone byte cannot form a code unit; the budget is exhausted.
    while pos + 2 <= end {
        let unit = view.read_u16(pos, endian)?;
        pos += 2;

        if unit == 0 {
            break;
        }

        if !(0xD800..=0xDFFF).contains(&unit) {
            result.push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
            continue;
        }

        // A surrogate must be a high surrogate with a low surrogate
        // immediately after it; anything else is invalid input.
        if unit > 0xDBFF || pos + 2 > end {
            return Err(WaveScanError::InvalidSurrogatePair { offset: pos - 2 });
        }

        let low = view.read_u16(pos, endian)?;
        if !(0xDC00..=0xDFFF).contains(&low) {
            return Err(WaveScanError::InvalidSurrogatePair { offset: pos });
        }
        pos += 2;

        let codepoint =
            0x10000 + ((u32::from(unit) - 0xD800) << 10 | (u32::from(low) - 0xDC00));
        result.push(char::from_u32(codepoint).unwrap_or(char::REPLACEMENT_CHARACTER));
    }

    Ok(result)
}

/// BOM-detected UTF-16: the first unit is read big-endian; 0xFFFE flips the
/// remainder to little-endian, any other value keeps big-endian. The mark is
/// consumed either way.
fn decode_utf16_bom(view: &ByteView, offset: usize, max_bytes: usize) -> Result<String> {
    if max_bytes < 2 {
        return Ok(String::new());
    }

    let mark = view.read_u16(offset, Endian::Big)?;
    if max_bytes == 2 && mark == 0 {
        return Ok(String::new());
    }

    let endian = if mark == 0xFFFE {
        Endian::Little
    } else {
        Endian::Big
    };

    decode_utf16(view, offset + 2, max_bytes - 2, endian)
}
