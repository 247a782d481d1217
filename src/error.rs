//! Error handling for Wavescan
//!
//! Every failure is a deterministic function of the input bytes: there are
//! no transient errors and nothing here is worth retrying. Each variant
//! carries the diagnostic fields a caller needs to report the problem.

use thiserror::Error;

/// Result type alias for Wavescan operations
pub type Result<T> = std::result::Result<T, WaveScanError>;

/// Main error type for Wavescan operations
#[derive(Error, Debug)]
pub enum WaveScanError {
    // Buffer Errors
    #[error("Input does not expose a contiguous byte region")]
    UnsupportedInput,

    #[error("Read of {width} bytes at offset {offset} exceeds buffer length {length}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        length: usize,
    },

    // Header Errors
    #[error("Data is {length} bytes long, shorter than the 44-byte WAVE header")]
    TooShort { length: usize },

    #[error(
        "Not a WAVE header: got \"{riff}\"/\"{wave}\"/\"{fmt}\" where \
         \"RIFF\"/\"WAVE\"/\"fmt \" were expected"
    )]
    InvalidFormat {
        riff: String,
        wave: String,
        fmt: String,
    },

    // Text Decoding Errors
    #[error("Invalid UTF-16 surrogate sequence at byte offset {offset}")]
    InvalidSurrogatePair { offset: usize },

    #[error("Unsupported text encoding: {name}")]
    UnsupportedEncoding { name: String },

    // Sample Decoding Errors
    #[error(
        "Payload length {payload_len} is not a multiple of {bytes_per_sample} bytes per sample"
    )]
    MisalignedPayload {
        payload_len: usize,
        bytes_per_sample: usize,
    },

    #[error("Unsupported WAVE format type: {format_type:#06x}")]
    UnsupportedFormat { format_type: u16 },

    #[error("Unsupported bit depth: {bits}")]
    UnsupportedBitDepth { bits: u16 },

    // I/O Errors (CLI file-loading boundary only; the library itself never
    // touches the filesystem)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl WaveScanError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            WaveScanError::UnsupportedInput => "UNSUPPORTED_INPUT",
            WaveScanError::OutOfBounds { .. } => "OUT_OF_BOUNDS",
            WaveScanError::TooShort { .. } => "TOO_SHORT",
            WaveScanError::InvalidFormat { .. } => "INVALID_FORMAT",
            WaveScanError::InvalidSurrogatePair { .. } => "INVALID_SURROGATE_PAIR",
            WaveScanError::UnsupportedEncoding { .. } => "UNSUPPORTED_ENCODING",
            WaveScanError::MisalignedPayload { .. } => "MISALIGNED_PAYLOAD",
            WaveScanError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            WaveScanError::UnsupportedBitDepth { .. } => "UNSUPPORTED_BIT_DEPTH",
            WaveScanError::Io(_) => "IO_ERROR",
        }
    }
}
