// ABOUTME: Audio types and processing for mediacodec-ext
// ABOUTME: Contains G711Law, AudioFormat, BufferInfo, codecs and the input buffer pool

/// Audio decoder implementations (G.711)
pub mod decode;
/// Audio encoder implementations (G.711)
pub mod encode;
/// Handle-indexed pool of input buffers
pub mod pool;
/// Core audio type definitions (G711Law, AudioFormat, BufferInfo)
pub mod types;

pub use pool::InputBufferPool;
pub use types::{AudioFormat, BufferInfo, G711Law};
