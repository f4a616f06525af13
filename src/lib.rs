//! WavCodec - Normalized Float WAV I/O
//!
//! Reads mono audio as DC-centered, peak-normalized `f64` samples and writes
//! mono 16-bit PCM WAV files, including gapless serialization of wavetables.

pub mod decode;
pub mod error;
pub mod pcm;
pub mod wav;

pub use decode::{Decoder, FallbackDecoder, default_decoder};
pub use error::{Result, WavCodecError};
pub use wav::{DEFAULT_SAMPLE_RATE, Wavetable, read, write, write_wavetable};

#[cfg(feature = "symphonia")]
pub use decode::RichDecoder;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .try_init()
        .ok();
}
