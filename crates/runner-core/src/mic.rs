//! Microphone capture for voice-activity sampling (feature `microphone`).
//!
//! Opens the default input device into a bounded sample ring and exposes a
//! `Send` level tap the ECS side can poll. Capture runs continuously from
//! `open` until the handle is dropped; dropping stops and closes the stream.
//!
//! Absence of a device is not fatal to the controller: callers that get an
//! error simply skip level sampling and leave voice commands dormant.

use std::collections::VecDeque;
use std::sync::Arc;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, Stream, StreamConfig};
use parking_lot::Mutex;
use thiserror::Error;

use crate::bevy::resources::VoiceLevelSource;

/// Window over which the voice level is averaged, in mono samples.
pub const LEVEL_WINDOW: usize = 128;

/// Samples retained in the ring before old ones are discarded.
const RING_CAPACITY: usize = 4096;

type SampleRing = Arc<Mutex<VecDeque<f32>>>;

/// Errors opening the capture device.
#[derive(Debug, Error)]
pub enum MicError {
    #[error("no input device available")]
    NoDevice,
    #[error("failed to read input config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build input stream: {0}")]
    BuildStream(#[from] cpal::BuildStreamError),
    #[error("failed to start input stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
    #[error("unsupported input sample format: {0:?}")]
    UnsupportedFormat(SampleFormat),
}

/// `Send` handle reading the most recent capture window.
#[derive(Clone)]
pub struct VoiceLevelTap {
    ring: SampleRing,
}

impl VoiceLevelTap {
    /// Mean absolute amplitude over the last [`LEVEL_WINDOW`] samples.
    pub fn volume(&self) -> f32 {
        let ring = self.ring.lock();
        let window = ring.len().min(LEVEL_WINDOW);
        if window == 0 {
            return 0.0;
        }
        let sum: f32 = ring.iter().rev().take(window).map(|s| s.abs()).sum();
        sum / window as f32
    }

    /// Wraps the tap as the resource the level-sampling system reads.
    pub fn into_source(self) -> VoiceLevelSource {
        VoiceLevelSource::new(move || self.volume())
    }
}

/// A live microphone capture stream.
///
/// The cpal stream is not `Send`, so the capture handle stays on the thread
/// that opened it; hand [`VoiceLevelTap`] (or the source from
/// [`VoiceLevelTap::into_source`]) to the app instead.
pub struct MicCapture {
    ring: SampleRing,
    _stream: Stream,
}

impl MicCapture {
    /// Opens the default input device and starts streaming into the ring.
    pub fn open() -> Result<Self, MicError> {
        let host = cpal::default_host();
        let device = host.default_input_device().ok_or(MicError::NoDevice)?;
        let supported = device.default_input_config()?;
        let channels = usize::from(supported.channels()).max(1);
        let sample_format = supported.sample_format();
        let config: StreamConfig = supported.into();

        let ring: SampleRing = Arc::new(Mutex::new(VecDeque::with_capacity(RING_CAPACITY)));

        let stream = match sample_format {
            SampleFormat::F32 => build_stream::<f32>(&device, &config, channels, ring.clone(), |s| *s)?,
            SampleFormat::I16 => build_stream::<i16>(&device, &config, channels, ring.clone(), |s| {
                f32::from(*s) / f32::from(i16::MAX)
            })?,
            SampleFormat::U16 => build_stream::<u16>(&device, &config, channels, ring.clone(), |s| {
                (f32::from(*s) / f32::from(u16::MAX)) * 2.0 - 1.0
            })?,
            other => return Err(MicError::UnsupportedFormat(other)),
        };
        stream.play()?;
        tracing::info!("[mic] capture started ({channels} channel(s), {} Hz)", config.sample_rate.0);

        Ok(Self {
            ring,
            _stream: stream,
        })
    }

    /// A cloneable, `Send` handle onto the live sample ring.
    pub fn level_tap(&self) -> VoiceLevelTap {
        VoiceLevelTap {
            ring: self.ring.clone(),
        }
    }
}

/// Builds an input stream that downmixes frames to mono into the ring.
fn build_stream<T>(
    device: &cpal::Device,
    config: &StreamConfig,
    channels: usize,
    ring: SampleRing,
    convert: impl Fn(&T) -> f32 + Send + 'static,
) -> Result<Stream, cpal::BuildStreamError>
where
    T: cpal::SizedSample,
{
    device.build_input_stream(
        config,
        move |data: &[T], _| {
            let mut ring = ring.lock();
            for frame in data.chunks(channels) {
                let sum: f32 = frame.iter().map(&convert).sum();
                ring.push_back(sum / channels as f32);
            }
            let overflow = ring.len().saturating_sub(RING_CAPACITY);
            ring.drain(..overflow);
        },
        |err| tracing::warn!("[mic] input stream error: {err}"),
        None,
    )
}
