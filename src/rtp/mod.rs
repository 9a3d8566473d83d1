// ABOUTME: RTP payload handling for mediacodec-ext
// ABOUTME: Header stripping and per-codec audio parsers that feed the decoder

/// G.711 audio parser
pub mod g711;
/// Fixed-offset RTP payload extraction
pub mod payload;

pub use g711::G711Parser;
pub use payload::RtpPayloadExtractor;

/// Turns raw transport packets into codec samples
pub trait AudioParser {
    /// Extract the audio payload from the first `length` bytes of `data`.
    ///
    /// `None` means the packet should be dropped silently.
    fn process_rtp_packet(&self, data: &[u8], length: usize) -> Option<Vec<u8>>;
}
