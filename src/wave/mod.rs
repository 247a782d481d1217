//! WAVE parsing and sample decoding
//!
//! [`header`] extracts the canonical 44-byte header; [`samples`] turns the
//! raw payload into normalized f32 audio. [`decode`] chains the two over a
//! whole file image.

pub mod header;
pub mod samples;

pub use header::{parse_header, FormatType, WaveHeader, HEADER_LEN};
pub use samples::decode_samples;

use crate::bytes::{ByteSource, ByteView};
use crate::error::Result;

/// A fully decoded WAVE file: its header plus normalized samples.
#[derive(Debug, Clone)]
pub struct DecodedWave {
    pub header: WaveHeader,
    pub samples: Vec<f32>,
}

impl DecodedWave {
    /// Duration of the decoded audio in seconds (see [`WaveHeader::duration`])
    pub fn duration(&self) -> f64 {
        self.header.duration()
    }
}

/// Parse the header at the start of `input` and decode the payload that
/// follows it, in one call.
///
/// The payload is the `data_size` bytes starting right after the 44-byte
/// header. A buffer shorter than the declared payload fails with
/// `OutOfBounds`: a truncated file is corrupt, not merely short.
///
/// # Errors
/// Any error from [`parse_header`] or [`decode_samples`], plus
/// `OutOfBounds` for a truncated payload.
pub fn decode<S: ByteSource + ?Sized>(input: &S) -> Result<DecodedWave> {
    let view = ByteView::wrap(input)?;
    let header = parse_header(&view)?;

    let payload = view.subview(HEADER_LEN, header.data_size as usize)?;
    let samples = decode_samples(&header, &payload)?;

    Ok(DecodedWave { header, samples })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WaveScanError;
    use crate::wave::header::tests::header_bytes;

    fn wave_file_i16(samples: &[i16]) -> Vec<u8> {
        let data_size = (samples.len() * 2) as u32;
        let mut bytes = header_bytes(1, 1, 44100, 16, data_size);
        for sample in samples {
            bytes.extend_from_slice(&sample.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_decode_whole_file() {
        let bytes = wave_file_i16(&[0, i16::MIN, i16::MAX]);
        let decoded = decode(&bytes).unwrap();

        assert_eq!(decoded.header.data_size, 6);
        assert_eq!(decoded.samples.len(), 3);
        assert_eq!(decoded.samples[0], 0.0);
        assert_eq!(decoded.samples[1], -1.0);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        // Bytes past the declared payload are not part of the audio
        let mut bytes = wave_file_i16(&[100, -100]);
        bytes.extend_from_slice(&[0xAAu8; 7]);

        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.samples.len(), 2);
    }

    #[test]
    fn test_decode_truncated_payload() {
        let mut bytes = wave_file_i16(&[1, 2, 3]);
        bytes.truncate(bytes.len() - 4);

        match decode(&bytes).unwrap_err() {
            WaveScanError::OutOfBounds { .. } => {}
            other => panic!("expected OutOfBounds, got {:?}", other),
        }
    }

    #[test]
    fn test_decoded_duration() {
        let bytes = wave_file_i16(&[0; 44100]);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(decoded.duration(), 1.0);
    }
}
