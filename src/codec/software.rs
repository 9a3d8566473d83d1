// ABOUTME: Software decoder emulating a hardware decoder's queue/dequeue contract
// ABOUTME: Decodes synchronously inside queue_input_buffer into a single output slot

use crate::audio::decode::{Decoder, G711Decoder};
use crate::audio::{AudioFormat, BufferInfo, G711Law, InputBufferPool};
use crate::codec::CodecBackend;
use crate::config::{DecoderConfig, TimestampSource};
use crate::error::Error;
use crate::sync::{Clock, MonotonicClock};
use crate::Result;

/// Index returned for the single output buffer
pub const OUTPUT_INDEX: usize = 0;

/// Observable state of a [`SoftwareDecoder`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoftwareState {
    /// No pending input and no unread output
    Idle,
    /// At least one input handle dequeued but not yet queued
    AwaitingQueue,
    /// Decoded output waiting to be dequeued
    Decoded,
}

/// In-process decoder backend
///
/// Holds at most one decoded result; queueing new input overwrites output
/// that has not been dequeued yet.
pub struct SoftwareDecoder<D: Decoder = G711Decoder> {
    decoder: D,
    config: DecoderConfig,
    inputs: InputBufferPool,
    /// Scratch for decoded samples, one per input byte
    pcm: Vec<i16>,
    output: Vec<u8>,
    output_ready: bool,
    output_pts: i64,
    clock: Box<dyn Clock>,
}

impl SoftwareDecoder<G711Decoder> {
    /// Create a G.711 software decoder for `law`
    pub fn g711(law: G711Law, config: DecoderConfig) -> Self {
        Self::with_decoder(G711Decoder::new(law), config, Box::new(MonotonicClock::new()))
    }
}

impl<D: Decoder> SoftwareDecoder<D> {
    /// Create a software decoder around any [`Decoder`] and timestamp clock
    pub fn with_decoder(decoder: D, config: DecoderConfig, clock: Box<dyn Clock>) -> Self {
        let capacity = config.input_buffer_size;
        Self {
            decoder,
            inputs: InputBufferPool::new(capacity),
            pcm: vec![0; capacity],
            output: Vec::with_capacity(capacity * 2),
            output_ready: false,
            output_pts: 0,
            clock,
            config,
        }
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Current state of the buffer protocol
    pub fn state(&self) -> SoftwareState {
        if self.output_ready {
            SoftwareState::Decoded
        } else if self.inputs.pending() > 0 {
            SoftwareState::AwaitingQueue
        } else {
            SoftwareState::Idle
        }
    }

    /// Number of input handles dequeued but not yet queued
    pub fn pending_inputs(&self) -> usize {
        self.inputs.pending()
    }
}

impl<D: Decoder> CodecBackend for SoftwareDecoder<D> {
    fn configure(&mut self, _format: Option<&AudioFormat>, _flags: u32) -> Result<()> {
        Ok(())
    }

    fn start(&mut self) -> Result<()> {
        Ok(())
    }

    fn stop(&mut self) -> Result<()> {
        Ok(())
    }

    fn release(&mut self) {}

    /// Never blocks and never asks the caller to try again.
    fn dequeue_input_buffer(&mut self, _timeout_us: i64) -> Result<Option<usize>> {
        Ok(Some(self.inputs.acquire()))
    }

    fn input_buffer(&mut self, index: usize) -> Option<&mut [u8]> {
        self.inputs.get_mut(index)
    }

    fn queue_input_buffer(
        &mut self,
        index: usize,
        offset: usize,
        size: usize,
        presentation_time_us: i64,
        _flags: u32,
    ) -> Result<()> {
        if !self.inputs.contains(index) {
            log::debug!("Ignoring unknown input buffer {}", index);
            return Ok(());
        }

        let capacity = self.inputs.capacity();
        let end = offset
            .checked_add(size)
            .filter(|&end| end <= capacity)
            .ok_or(Error::BufferRange {
                offset,
                size,
                capacity,
            })?;

        let Some(buf) = self.inputs.take(index) else {
            return Ok(());
        };

        let samples = self.decoder.decode(&buf[offset..end], &mut self.pcm);
        self.inputs.recycle(buf);

        // Little-endian interleaved 16-bit PCM
        self.output.clear();
        for sample in &self.pcm[..samples] {
            self.output.extend_from_slice(&sample.to_le_bytes());
        }
        self.output_ready = true;
        self.output_pts = presentation_time_us;

        log::trace!(
            "Decoded input buffer {}: {} bytes -> {} bytes",
            index,
            size,
            self.output.len()
        );
        Ok(())
    }

    /// Returns immediately; `timeout_us` is ignored.
    fn dequeue_output_buffer(&mut self, _timeout_us: i64) -> Result<Option<(usize, BufferInfo)>> {
        if !self.output_ready {
            return Ok(None);
        }
        self.output_ready = false;

        let presentation_time_us = match self.config.timestamp_source {
            TimestampSource::Clock => self.clock.now_micros(),
            TimestampSource::Input => self.output_pts,
        };
        let info = BufferInfo {
            offset: 0,
            size: self.output.len(),
            presentation_time_us,
            flags: 0,
        };
        Ok(Some((OUTPUT_INDEX, info)))
    }

    /// There is one output buffer, so `index` is not consulted.
    fn output_buffer(&mut self, _index: usize) -> Option<&[u8]> {
        Some(self.output.as_slice())
    }

    fn release_output_buffer(&mut self, _index: usize, _render: bool) -> Result<()> {
        Ok(())
    }

    fn output_format(&self) -> Result<AudioFormat> {
        Ok(AudioFormat::raw_pcm(
            self.config.sample_rate,
            self.config.channel_count,
            self.config.bit_depth,
        ))
    }

    fn is_software(&self) -> bool {
        true
    }
}
