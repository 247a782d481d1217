//! Sample payload decoding
//!
//! Converts a raw PCM or IEEE-float payload into normalized
//! single-precision samples. Integer samples are scaled by 2^(bits-1) so
//! full-scale input lands on [-1.0, 1.0); float samples pass through
//! unchanged, already normalized by convention. Channel interleaving is
//! preserved: output order is payload order.

use log::debug;

use crate::bytes::{ByteSource, ByteView, Endian};
use crate::error::{Result, WaveScanError};
use crate::wave::header::{FormatType, WaveHeader};

/// Decode a sample payload into normalized f32 samples.
///
/// # Arguments
/// * `header` - The parsed header describing the payload's encoding
/// * `payload` - The raw sample bytes immediately following the header
///
/// # Errors
/// * `UnsupportedFormat` - For A-law, µ-law, or unknown format codes
/// * `UnsupportedBitDepth` - For any bit depth outside the format's table
///   (8/16/24/32 for integer PCM, 32/64 for float)
/// * `MisalignedPayload` - If the payload length is not a whole number of
///   samples
pub fn decode_samples<S: ByteSource + ?Sized>(
    header: &WaveHeader,
    payload: &S,
) -> Result<Vec<f32>> {
    let view = ByteView::wrap(payload)?;

    if !header.format_type.is_linear_pcm() {
        return Err(WaveScanError::UnsupportedFormat {
            format_type: header.format_type.code(),
        });
    }

    // Both linear PCM families are little-endian on the wire. The depth
    // table picks the per-element reader; resolving it before the
    // alignment check means a 12-bit request reports the depth, not a
    // bogus misalignment.
    let bits = header.bits_per_sample;
    let read_sample: fn(&ByteView, usize) -> Result<f32> = match (header.format_type, bits) {
        (FormatType::IeeeFloat, 32) => |v, offset| v.read_f32(offset, Endian::Little),
        (FormatType::IeeeFloat, 64) => {
            |v, offset| Ok(v.read_f64(offset, Endian::Little)? as f32)
        }
        (FormatType::Pcm, 8) => |v, offset| Ok(f32::from(v.read_i8(offset)?) / 128.0),
        (FormatType::Pcm, 16) => {
            |v, offset| Ok(f32::from(v.read_i16(offset, Endian::Little)?) / 32768.0)
        }
        (FormatType::Pcm, 24) => {
            |v, offset| Ok(v.read_i24(offset, Endian::Little)? as f32 / 8_388_608.0)
        }
        (FormatType::Pcm, 32) => {
            |v, offset| Ok(v.read_i32(offset, Endian::Little)? as f32 / 2_147_483_648.0)
        }
        _ => return Err(WaveScanError::UnsupportedBitDepth { bits }),
    };

    let bytes_per_sample = usize::from(bits / 8);
    let payload_len = view.byte_length();
    if payload_len % bytes_per_sample != 0 {
        return Err(WaveScanError::MisalignedPayload {
            payload_len,
            bytes_per_sample,
        });
    }

    let num_samples = payload_len / bytes_per_sample;
    let mut samples = Vec::with_capacity(num_samples);
    for i in 0..num_samples {
        samples.push(read_sample(&view, i * bytes_per_sample)?);
    }

    debug!(
        "Decoded {} samples ({:?}, {} bit)",
        samples.len(),
        header.format_type,
        bits
    );

    Ok(samples)
}
