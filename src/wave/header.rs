//! WAVE header parsing
//!
//! Extracts the canonical 44-byte WAVE header into a structured record.
//! All multi-byte fields are little-endian per the RIFF/WAVE layout:
//!
//! ```text
//! offset 0  "RIFF"            offset 22 channels (u16)
//! offset 4  file size (u32)   offset 24 sample rate (u32)
//! offset 8  "WAVE"            offset 28 bytes per second (u32)
//! offset 12 "fmt "            offset 32 block align (u16)
//! offset 16 fmt length (u32)  offset 34 bits per sample (u16)
//! offset 20 format type (u16) offset 40 data size (u32)
//! ```
//!
//! Beyond the three tag checks and the minimum length, no validation
//! happens here; format-type/bit-depth legality is the sample decoder's
//! concern.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::bytes::{decode_string, ByteSource, ByteView, Encoding, Endian};
use crate::error::{Result, WaveScanError};

/// Length of the canonical WAVE header in bytes
pub const HEADER_LEN: usize = 44;

// ============================================================================
// Format type
// ============================================================================

/// WAVE format code identifying the sample encoding family.
///
/// The code-to-family mapping is fixed process-wide data: codes 1 and 3 are
/// the little-endian linear PCM families this crate decodes, 6 and 7 are
/// the companding laws it recognizes but does not decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u16", from = "u16")]
pub enum FormatType {
    /// Integer PCM (code 1)
    Pcm,
    /// IEEE float PCM (code 3)
    IeeeFloat,
    /// A-law companding (code 6)
    ALaw,
    /// µ-law companding (code 7)
    MuLaw,
    /// Any other format code
    Unknown(u16),
}

impl From<u16> for FormatType {
    fn from(code: u16) -> Self {
        match code {
            0x0001 => FormatType::Pcm,
            0x0003 => FormatType::IeeeFloat,
            0x0006 => FormatType::ALaw,
            0x0007 => FormatType::MuLaw,
            other => FormatType::Unknown(other),
        }
    }
}

impl From<FormatType> for u16 {
    fn from(format: FormatType) -> Self {
        match format {
            FormatType::Pcm => 0x0001,
            FormatType::IeeeFloat => 0x0003,
            FormatType::ALaw => 0x0006,
            FormatType::MuLaw => 0x0007,
            FormatType::Unknown(code) => code,
        }
    }
}

impl FormatType {
    /// Whether this family stores raw linear PCM (integer or float), which
    /// the sample decoder reads little-endian.
    pub fn is_linear_pcm(&self) -> bool {
        matches!(self, FormatType::Pcm | FormatType::IeeeFloat)
    }

    /// The raw format code
    pub fn code(&self) -> u16 {
        u16::from(*self)
    }
}

// ============================================================================
// Header record
// ============================================================================

/// Parsed WAVE header fields.
///
/// Constructed once per [`parse_header`] call and immutable afterwards;
/// the caller owns the record outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaveHeader {
    /// RIFF chunk size (actual file size minus 8 bytes)
    pub file_size: u32,
    /// Length of the format data block
    pub format_data_length: u32,
    /// Sample encoding family
    pub format_type: FormatType,
    /// Number of interleaved channels
    pub channels: u16,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Average bytes per second of audio
    pub bytes_per_second: u32,
    /// Bytes per interleaved sample frame
    pub block_align: u16,
    /// Bits per single-channel sample
    pub bits_per_sample: u16,
    /// Byte length of the sample payload following the header
    pub data_size: u32,
}

impl WaveHeader {
    /// Duration of the audio in seconds.
    ///
    /// Computed as `data_size / bytes_per_second` with plain IEEE-754
    /// division: a zero byte rate yields `+inf` (or NaN when the data size
    /// is also zero) rather than an error, so callers can screen with
    /// `is_finite()`.
    pub fn duration(&self) -> f64 {
        f64::from(self.data_size) / f64::from(self.bytes_per_second)
    }

    /// Storage width of one single-channel sample in bytes
    pub fn bytes_per_sample(&self) -> usize {
        usize::from(self.bits_per_sample / 8)
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parse the canonical 44-byte WAVE header from the start of `input`.
///
/// # Arguments
/// * `input` - Any byte-bearing value covering at least the file's header
///
/// # Errors
/// * `UnsupportedInput` - If the input exposes no contiguous byte region
/// * `TooShort` - If fewer than 44 bytes are available
/// * `InvalidFormat` - If the RIFF/WAVE/"fmt " tags do not match; carries
///   all three observed tag values
pub fn parse_header<S: ByteSource + ?Sized>(input: &S) -> Result<WaveHeader> {
    let view = ByteView::wrap(input)?;

    let length = view.byte_length();
    if length < HEADER_LEN {
        return Err(WaveScanError::TooShort { length });
    }

    let riff = decode_string(&view, 0, 4, Encoding::Ascii)?;
    let wave = decode_string(&view, 8, 4, Encoding::Ascii)?;
    let fmt = decode_string(&view, 12, 4, Encoding::Ascii)?;

    if riff != "RIFF" || wave != "WAVE" || fmt != "fmt " {
        return Err(WaveScanError::InvalidFormat { riff, wave, fmt });
    }

    let header = WaveHeader {
        file_size: view.read_u32(4, Endian::Little)?,
        format_data_length: view.read_u32(16, Endian::Little)?,
        format_type: FormatType::from(view.read_u16(20, Endian::Little)?),
        channels: view.read_u16(22, Endian::Little)?,
        sample_rate: view.read_u32(24, Endian::Little)?,
        bytes_per_second: view.read_u32(28, Endian::Little)?,
        block_align: view.read_u16(32, Endian::Little)?,
        bits_per_sample: view.read_u16(34, Endian::Little)?,
        data_size: view.read_u32(40, Endian::Little)?,
    };

    debug!(
        "Parsed WAVE header: {:?} {} ch, {} Hz, {} bit, {} payload bytes",
        header.format_type,
        header.channels,
        header.sample_rate,
        header.bits_per_sample,
        header.data_size
    );

    Ok(header)
}
