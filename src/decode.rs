//! File decode strategies for the read path
//!
//! Two decoders sit behind the [`Decoder`] trait. [`RichDecoder`] uses
//! symphonia and accepts anything its default codec registry can open,
//! taking only channel 0 of multi-channel input. [`FallbackDecoder`] uses
//! hound and accepts mono 16-bit integer WAV, nothing else. The choice is
//! made once, at compile time, by the `symphonia` cargo feature.

use std::path::Path;

use crate::error::Result;
use crate::pcm;

/// Decodes an audio file to a mono float sample buffer.
///
/// Output is plain scaled PCM; no centering or normalization happens here.
pub trait Decoder {
    fn decode(&self, path: &Path) -> Result<Vec<f64>>;
}

/// The decoder `read` uses: rich when the `symphonia` feature is enabled,
/// fallback otherwise.
pub fn default_decoder() -> &'static dyn Decoder {
    #[cfg(feature = "symphonia")]
    return &RichDecoder;
    #[cfg(not(feature = "symphonia"))]
    return &FallbackDecoder;
}

/// Minimal WAV-only reader built on hound.
pub struct FallbackDecoder;

impl Decoder for FallbackDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<f64>> {
        use crate::error::WavCodecError;

        let mut reader = hound::WavReader::open(path)?;
        let spec = reader.spec();

        if spec.channels != 1 {
            return Err(WavCodecError::UnsupportedFormat(format!(
                "only mono supported, got {} channels",
                spec.channels
            )));
        }
        if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
            return Err(WavCodecError::UnsupportedFormat(format!(
                "only 16-bit integer PCM supported, got {}-bit {:?}",
                spec.bits_per_sample, spec.sample_format
            )));
        }

        let samples = reader
            .samples::<i16>()
            .map(|sample| sample.map(|v| v as f64 / pcm::SCALE).map_err(Into::into))
            .collect::<Result<Vec<f64>>>()?;

        log::debug!(
            "fallback decode: {} samples at {} Hz from {}",
            samples.len(),
            spec.sample_rate,
            path.display()
        );
        Ok(samples)
    }
}

/// Multi-format reader built on symphonia's default probe and codec registry.
#[cfg(feature = "symphonia")]
pub struct RichDecoder;

#[cfg(feature = "symphonia")]
impl Decoder for RichDecoder {
    fn decode(&self, path: &Path) -> Result<Vec<f64>> {
        use std::fs::File;

        use symphonia::core::audio::SampleBuffer;
        use symphonia::core::codecs::{Decoder as _, DecoderOptions};
        use symphonia::core::errors::Error;
        use symphonia::core::formats::{FormatOptions, FormatReader as _};
        use symphonia::core::io::MediaSourceStream;
        use symphonia::core::meta::MetadataOptions;
        use symphonia::core::probe::Hint;

        use crate::error::WavCodecError;

        let file = File::open(path)?;
        let stream = MediaSourceStream::new(Box::new(file), Default::default());

        let mut hint = Hint::new();
        if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
            hint.with_extension(ext);
        }

        let probed = symphonia::default::get_probe().format(
            &hint,
            stream,
            &FormatOptions::default(),
            &MetadataOptions::default(),
        )?;
        let mut format = probed.format;

        let track = format
            .default_track()
            .ok_or_else(|| WavCodecError::Format("no audio track in container".to_string()))?;
        let track_id = track.id;

        let mut decoder = symphonia::default::get_codecs()
            .make(&track.codec_params, &DecoderOptions::default())?;

        let mut samples: Vec<f64> = Vec::new();
        loop {
            let packet = match format.next_packet() {
                Ok(packet) => packet,
                Err(Error::IoError(e)) if e.kind() == std::io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            };
            if packet.track_id() != track_id {
                continue;
            }

            let decoded = decoder.decode(&packet)?;
            let channels = decoded.spec().channels.count();
            let mut buffer = SampleBuffer::<f64>::new(decoded.capacity() as u64, *decoded.spec());
            buffer.copy_interleaved_ref(decoded);

            // Interleaved frames; keep channel 0 only, never a mixdown.
            samples.extend(buffer.samples().iter().step_by(channels.max(1)).copied());
        }

        log::debug!("rich decode: {} samples from {}", samples.len(), path.display());
        Ok(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::WavCodecError;
    use tempfile::TempDir;

    fn write_wav(path: &Path, spec: hound::WavSpec, frames: &[&[i16]]) {
        let mut writer = hound::WavWriter::create(path, spec).unwrap();
        for frame in frames {
            for &sample in *frame {
                writer.write_sample(sample).unwrap();
            }
        }
        writer.finalize().unwrap();
    }

    fn mono_16bit_spec(sample_rate: u32) -> hound::WavSpec {
        hound::WavSpec {
            channels: 1,
            sample_rate,
            bits_per_sample: 16,
            sample_format: hound::SampleFormat::Int,
        }
    }

    #[test]
    fn test_fallback_reads_mono_16bit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, mono_16bit_spec(44100), &[&[0, 16384, -16384, 32767]]);

        let samples = FallbackDecoder.decode(&path).unwrap();
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[1], 0.5);
        assert_eq!(samples[2], -0.5);
        assert!((samples[3] - 32767.0 / 32768.0).abs() < 1e-12);
    }

    #[test]
    fn test_fallback_rejects_stereo() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stereo.wav");
        let spec = hound::WavSpec {
            channels: 2,
            ..mono_16bit_spec(44100)
        };
        write_wav(&path, spec, &[&[100, 200], &[300, 400]]);

        let err = FallbackDecoder.decode(&path).unwrap_err();
        assert!(matches!(err, WavCodecError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_fallback_rejects_8bit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("eight.wav");
        let spec = hound::WavSpec {
            bits_per_sample: 8,
            ..mono_16bit_spec(44100)
        };
        let mut writer = hound::WavWriter::create(&path, spec).unwrap();
        writer.write_sample(10i8).unwrap();
        writer.finalize().unwrap();

        let err = FallbackDecoder.decode(&path).unwrap_err();
        assert!(matches!(err, WavCodecError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_fallback_missing_file_is_io_error() {
        let dir = TempDir::new().unwrap();
        let err = FallbackDecoder.decode(&dir.path().join("nope.wav")).unwrap_err();
        assert!(matches!(err, WavCodecError::Io(_)));
    }

    #[cfg(feature = "symphonia")]
    #[test]
    fn test_rich_takes_first_channel_of_stereo() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("stereo.wav");
        let spec = hound::WavSpec {
            channels: 2,
            ..mono_16bit_spec(44100)
        };
        // channel 0 is a ramp, channel 1 is constant noise it must ignore
        write_wav(
            &path,
            spec,
            &[&[0, 9999], &[8192, 9999], &[16384, 9999], &[32767, 9999]],
        );

        let samples = RichDecoder.decode(&path).unwrap();
        assert_eq!(samples.len(), 4);
        assert!((samples[0] - 0.0).abs() < 1e-4);
        assert!((samples[1] - 0.25).abs() < 1e-4);
        assert!((samples[2] - 0.5).abs() < 1e-4);
        assert!((samples[3] - 32767.0 / 32768.0).abs() < 1e-4);
    }

    #[cfg(feature = "symphonia")]
    #[test]
    fn test_rich_reads_mono_16bit() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mono.wav");
        write_wav(&path, mono_16bit_spec(22050), &[&[0, 16384, -16384]]);

        let samples = RichDecoder.decode(&path).unwrap();
        assert_eq!(samples.len(), 3);
        assert!((samples[1] - 0.5).abs() < 1e-4);
        assert!((samples[2] + 0.5).abs() < 1e-4);
    }
}
