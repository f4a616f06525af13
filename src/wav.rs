//! WAV read/write with normalized float samples
//!
//! `read` hands back a buffer that is always DC-centered and peak-normalized.
//! `write` and `write_wavetable` produce mono 16-bit integer PCM containers
//! through hound, quantizing with [`pcm::quantize`] so on-disk bytes match
//! [`pcm::encode`] exactly.

use std::path::Path;

use crate::decode::default_decoder;
use crate::error::{Result, WavCodecError};
use crate::pcm;

/// Sample rate used when the caller has no reason to pick another.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Ordered source of waveform cycles for [`write_wavetable`].
///
/// The table's own ordering is preserved in the output file. No length
/// constraint is imposed on individual waves.
pub trait Wavetable {
    fn waves(&self) -> Box<dyn Iterator<Item = &[f64]> + '_>;
}

impl<T: AsRef<[f64]>> Wavetable for [T] {
    fn waves(&self) -> Box<dyn Iterator<Item = &[f64]> + '_> {
        Box::new(self.iter().map(|wave| wave.as_ref()))
    }
}

impl<T: AsRef<[f64]>> Wavetable for Vec<T> {
    fn waves(&self) -> Box<dyn Iterator<Item = &[f64]> + '_> {
        Box::new(self.iter().map(|wave| wave.as_ref()))
    }
}

/// Read an audio file as normalized mono float samples.
///
/// The decoded buffer is centered on zero (mean removed) and scaled so the
/// largest absolute sample is exactly 1.0. Multi-channel input is reduced to
/// channel 0 when the rich decoder is available; the fallback reader accepts
/// mono 16-bit WAV only.
///
/// Empty or constant input fails with [`WavCodecError::DegenerateInput`]
/// since there is no peak to scale by.
pub fn read<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let samples = default_decoder().decode(path)?;
    log::debug!("read {} samples from {}", samples.len(), path.display());
    normalize(samples)
}

fn normalize(mut samples: Vec<f64>) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(WavCodecError::DegenerateInput);
    }

    // center on 0
    let mean = samples.iter().sum::<f64>() / samples.len() as f64;
    for sample in &mut samples {
        *sample -= mean;
    }

    // scale to +/- 1.0
    let peak = samples.iter().fold(0.0_f64, |max, s| max.max(s.abs()));
    if peak == 0.0 {
        return Err(WavCodecError::DegenerateInput);
    }
    for sample in &mut samples {
        *sample /= peak;
    }

    Ok(samples)
}

/// Write float samples as a mono 16-bit PCM WAV file.
///
/// Samples outside [-1.0, 1.0] are clipped by the quantizer. The writer is
/// finalized on success; a failed write may leave a truncated file behind.
pub fn write<P: AsRef<Path>>(samples: &[f64], path: P, sample_rate: u32) -> Result<()> {
    let path = path.as_ref();
    let mut writer = hound::WavWriter::create(path, mono_spec(sample_rate))?;
    for &sample in samples {
        writer.write_sample(pcm::quantize(sample))?;
    }
    writer.finalize()?;
    log::debug!("wrote {} samples at {} Hz to {}", samples.len(), sample_rate, path.display());
    Ok(())
}

/// Write every wave of a wavetable into a single mono 16-bit PCM WAV file.
///
/// Waves are appended back to back in table order, with no gap or marker
/// between them; the file's data chunk is the concatenation of each wave's
/// PCM encoding. One writer is opened and finalized for the whole table.
pub fn write_wavetable<T, P>(table: &T, path: P, sample_rate: u32) -> Result<()>
where
    T: Wavetable + ?Sized,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let mut writer = hound::WavWriter::create(path, mono_spec(sample_rate))?;
    let mut wave_count = 0usize;
    for wave in table.waves() {
        for &sample in wave {
            writer.write_sample(pcm::quantize(sample))?;
        }
        wave_count += 1;
    }
    writer.finalize()?;
    log::debug!("wrote {} waves at {} Hz to {}", wave_count, sample_rate, path.display());
    Ok(())
}

fn mono_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}
