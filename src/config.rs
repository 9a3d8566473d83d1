// ABOUTME: Configuration types and JSON loading
// ABOUTME: Software decoder output format, timestamp policy and RTP header length

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Fixed RTP header length (RFC 3550 section 5.1)
pub const RTP_HEADER_LEN: usize = 12;

/// Where output presentation timestamps come from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampSource {
    /// Monotonic clock sampled when the output is dequeued
    #[default]
    Clock,
    /// The `presentation_time_us` passed to `queue_input_buffer`
    Input,
}

/// Software decoder settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    pub sample_rate: u32,
    pub channel_count: u8,
    pub bit_depth: u8,
    /// Capacity of each input buffer in bytes
    pub input_buffer_size: usize,
    pub timestamp_source: TimestampSource,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            sample_rate: 8000,
            channel_count: 1,
            bit_depth: 16,
            input_buffer_size: 2048,
            timestamp_source: TimestampSource::Clock,
        }
    }
}

impl DecoderConfig {
    /// Check the settings describe a format the software decoder can produce
    pub fn validate(&self) -> Result<(), Error> {
        if self.sample_rate == 0 {
            return Err(Error::Config("sample_rate must be non-zero".to_string()));
        }
        if self.channel_count == 0 {
            return Err(Error::Config("channel_count must be non-zero".to_string()));
        }
        if self.bit_depth != 16 {
            return Err(Error::Config(format!(
                "Unsupported bit depth: {}",
                self.bit_depth
            )));
        }
        if self.input_buffer_size == 0 {
            return Err(Error::Config("input_buffer_size must be non-zero".to_string()));
        }
        Ok(())
    }
}

/// RTP payload extraction settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RtpConfig {
    /// Bytes skipped at the start of each packet; 0 passes the header through
    pub header_len: usize,
}

impl Default for RtpConfig {
    fn default() -> Self {
        Self {
            header_len: RTP_HEADER_LEN,
        }
    }
}

impl RtpConfig {
    /// Header length may not exceed the minimum packet length
    pub fn validate(&self) -> Result<(), Error> {
        if self.header_len > RTP_HEADER_LEN {
            return Err(Error::Config(format!(
                "header_len {} exceeds {}",
                self.header_len, RTP_HEADER_LEN
            )));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub decoder: DecoderConfig,
    pub rtp: RtpConfig,
}

impl PipelineConfig {
    /// Parse and validate configuration from JSON
    pub fn from_json(json: &str) -> Result<Self, Error> {
        let config: Self = serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), Error> {
        self.decoder.validate()?;
        self.rtp.validate()
    }
}
