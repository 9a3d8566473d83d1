// ABOUTME: Audio decoder implementations
// ABOUTME: Decoder trait plus the G.711 software decoder

/// G.711 decoder implementation
pub mod g711;

pub use g711::{alaw_to_linear, decode, ulaw_to_linear, G711Decoder};

/// Decoder trait for companded audio codecs
pub trait Decoder {
    /// Decode `input` into `out`, returning the number of samples written.
    ///
    /// At most `out.len()` samples are written; extra input is ignored.
    fn decode(&self, input: &[u8], out: &mut [i16]) -> usize;
}
