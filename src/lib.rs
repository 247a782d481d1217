//! Wavescan - WAVE metadata extraction and sample decoding
//!
//! Wavescan reads WAVE-format audio out of raw byte buffers: it parses the
//! canonical 44-byte header into a structured record and normalizes the
//! PCM/float sample payload into f32 audio ready for playback or analysis.
//! The byte-level machinery underneath (a bounds-checked byte view and a
//! multi-encoding text decoder) is exposed for general use.
//!
//! # Architecture
//!
//! Data flows leaf-first through three layers:
//! - `bytes::ByteView` - bounds-checked random-access reads over any
//!   contiguous byte region
//! - `bytes::decode_string` - bounded text extraction (ascii/latin1, UTF-8,
//!   UTF-16 BE/LE/BOM); the header parser uses it for its tag fields
//! - `wave` - header parsing (`parse_header`) and payload decoding
//!   (`decode_samples`), chained by `wave::decode`
//!
//! Everything is synchronous and pure: inputs are borrowed read-only,
//! outputs are freshly allocated, and no process-wide state exists, so
//! concurrent use on independent inputs is safe by construction.

pub mod bytes;
pub mod cli;
pub mod error;
pub mod wave;

pub use bytes::{decode_string, ByteSource, ByteView, Encoding, Endian};
pub use error::{Result, WaveScanError};
pub use wave::{decode, decode_samples, parse_header, DecodedWave, FormatType, WaveHeader};
