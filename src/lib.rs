// ABOUTME: Main library entry point for mediacodec-ext
// ABOUTME: Exports the decoder facade, software G.711 backend and RTP payload extraction

//! # mediacodec-ext
//!
//! A decoder facade that hands out a hardware decoder when one exists for the
//! negotiated MIME type and otherwise falls back to an in-process G.711
//! (A-law / µ-law) decoder exposing the same queue/dequeue buffer protocol.
//!
//! The [`rtp`] module strips transport framing so the payload can be fed to
//! the decoder.

#![warn(missing_docs)]

/// Audio types, G.711 companding and input buffer pool
pub mod audio;
/// Decoder facade and backends
pub mod codec;
/// Configuration for the software decoder and RTP extraction
pub mod config;
/// RTP payload extraction
pub mod rtp;
/// Monotonic clock used for output timestamps
pub mod sync;

pub use audio::{AudioFormat, BufferInfo, G711Law};
pub use codec::{CodecBackend, CodecFacade, HardwareCodecFactory, NoHardware, SoftwareDecoder};
pub use config::{DecoderConfig, PipelineConfig, RtpConfig, TimestampSource};
pub use rtp::{AudioParser, G711Parser, RtpPayloadExtractor};

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, error::Error>;

/// Error types for mediacodec-ext
pub mod error {
    use thiserror::Error;

    /// Error types for codec operations
    #[derive(Error, Debug)]
    pub enum Error {
        /// Neither a hardware nor a software decoder exists for the MIME type
        #[error("decoder unavailable for MIME type: {mime}")]
        DecoderUnavailable {
            /// The MIME type that was requested
            mime: String,
        },

        /// Failure reported by a hardware decoder backend
        #[error("Hardware decoder error: {0}")]
        Hardware(String),

        /// Offset/size pair does not fit inside an input buffer
        #[error("Buffer range {offset}+{size} exceeds capacity {capacity}")]
        BufferRange {
            /// Requested start offset
            offset: usize,
            /// Requested byte count
            size: usize,
            /// Capacity of the input buffer
            capacity: usize,
        },

        /// Invalid or unparsable configuration
        #[error("Configuration error: {0}")]
        Config(String),
    }
}
