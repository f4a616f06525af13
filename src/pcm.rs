//! Float <-> 16-bit PCM sample conversion
//!
//! Samples are scaled by 32768, truncated toward zero, and clipped to the
//! i16 range. Truncation (not rounding) is deliberate and must not change:
//! downstream tooling depends on bit-exact output.

use crate::error::{Result, WavCodecError};

/// Full-scale factor for 16-bit PCM.
pub const SCALE: f64 = 32768.0;

/// Quantize a float sample to a signed 16-bit value.
///
/// Rust's saturating float-to-int cast gives exactly the semantics needed:
/// truncate toward zero, clip to [-32768, 32767].
#[inline]
pub fn quantize(sample: f64) -> i16 {
    (sample * SCALE) as i16
}

/// Encode float samples as raw little-endian 16-bit PCM bytes.
pub fn encode(samples: &[f64]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        bytes.extend_from_slice(&quantize(sample).to_le_bytes());
    }
    bytes
}

/// Decode raw little-endian 16-bit PCM bytes to float samples in [-1.0, 1.0).
///
/// Does not normalize; that is the read path's job.
pub fn decode(bytes: &[u8]) -> Result<Vec<f64>> {
    if bytes.len() % 2 != 0 {
        return Err(WavCodecError::Format(format!(
            "PCM byte buffer length {} is not a multiple of 2",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(2)
        .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f64 / SCALE)
        .collect())
}
