// ABOUTME: RTP payload extractor
// ABOUTME: Drops packets too short to carry RTP and copies out everything past the header

use crate::config::{RtpConfig, RTP_HEADER_LEN};
use crate::error::Error;

/// Packets of this length or shorter carry no payload
pub const MIN_PACKET_LEN: usize = RTP_HEADER_LEN;

/// Strips a fixed-length header from RTP packets
///
/// Only the fixed header is skipped. CSRC lists, header extensions and padding
/// are expected to have been handled upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RtpPayloadExtractor {
    header_len: usize,
}

impl RtpPayloadExtractor {
    /// Create an extractor skipping `header_len` bytes (at most 12)
    pub fn new(header_len: usize) -> Result<Self, Error> {
        Self::from_config(&RtpConfig { header_len })
    }

    pub fn from_config(config: &RtpConfig) -> Result<Self, Error> {
        config.validate()?;
        Ok(Self {
            header_len: config.header_len,
        })
    }

    /// Extractor that keeps the RTP header as part of the payload
    pub fn passthrough() -> Self {
        Self { header_len: 0 }
    }

    pub fn header_len(&self) -> usize {
        self.header_len
    }

    /// Copy the payload out of the first `length` bytes of `packet`.
    ///
    /// Returns `None` if `length <= 12` or `length` runs past the end of `packet`.
    pub fn extract(&self, packet: &[u8], length: usize) -> Option<Vec<u8>> {
        if length <= MIN_PACKET_LEN {
            log::trace!("Dropping {}-byte packet: too short for RTP", length);
            return None;
        }
        let Some(frame) = packet.get(..length) else {
            log::trace!("Dropping packet: length {} exceeds buffer of {}", length, packet.len());
            return None;
        };
        Some(frame[self.header_len..].to_vec())
    }
}

impl Default for RtpPayloadExtractor {
    fn default() -> Self {
        Self {
            header_len: RTP_HEADER_LEN,
        }
    }
}
