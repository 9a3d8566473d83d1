// ABOUTME: Decoder facade selecting a hardware or software backend at construction
// ABOUTME: Defines the CodecBackend trait every backend implements

/// In-process G.711 backend
pub mod software;

pub use software::{SoftwareDecoder, SoftwareState};

use crate::audio::types::SUPPORTED_SOFTWARE_MIME_TYPES;
use crate::audio::{AudioFormat, BufferInfo, G711Law};
use crate::config::DecoderConfig;
use crate::error::Error;
use crate::Result;

/// Asynchronous queue/dequeue decoder contract shared by all backends
///
/// `Ok(None)` from the dequeue operations means "try again later".
pub trait CodecBackend {
    /// Configure the decoder for an input format
    fn configure(&mut self, format: Option<&AudioFormat>, flags: u32) -> Result<()>;

    /// Start decoding
    fn start(&mut self) -> Result<()>;

    /// Stop decoding
    fn stop(&mut self) -> Result<()>;

    /// Free backend resources. Must be safe to call in any state.
    fn release(&mut self);

    /// Obtain an input buffer handle
    fn dequeue_input_buffer(&mut self, timeout_us: i64) -> Result<Option<usize>>;

    /// Writable storage behind an input handle
    fn input_buffer(&mut self, index: usize) -> Option<&mut [u8]>;

    /// Submit `size` bytes at `offset` of the input buffer `index` for decoding
    fn queue_input_buffer(
        &mut self,
        index: usize,
        offset: usize,
        size: usize,
        presentation_time_us: i64,
        flags: u32,
    ) -> Result<()>;

    /// Obtain a decoded output buffer index and its metadata
    fn dequeue_output_buffer(&mut self, timeout_us: i64) -> Result<Option<(usize, BufferInfo)>>;

    /// Decoded bytes behind an output index
    fn output_buffer(&mut self, index: usize) -> Option<&[u8]>;

    /// Hand an output buffer back to the backend
    fn release_output_buffer(&mut self, index: usize, render: bool) -> Result<()>;

    /// Format of the decoded output
    fn output_format(&self) -> Result<AudioFormat>;

    /// Whether this backend decodes in-process
    fn is_software(&self) -> bool {
        false
    }
}

/// Creates platform hardware decoders
pub trait HardwareCodecFactory {
    /// Create a hardware decoder for `mime`
    fn create_decoder_by_type(&self, mime: &str) -> Result<Box<dyn CodecBackend>>;
}

/// Factory for platforms without hardware decoders
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHardware;

impl HardwareCodecFactory for NoHardware {
    fn create_decoder_by_type(&self, mime: &str) -> Result<Box<dyn CodecBackend>> {
        Err(Error::Hardware(format!("No hardware decoder for {}", mime)))
    }
}

/// Whether the software backend can decode `mime` (case-insensitive)
pub fn is_software_mime_supported(mime: &str) -> bool {
    SUPPORTED_SOFTWARE_MIME_TYPES
        .iter()
        .any(|supported| supported.eq_ignore_ascii_case(mime))
}

/// Decoder-agnostic entry point
///
/// Holds exactly one backend for its whole life and forwards every call to it.
/// The backend is released when the facade is dropped.
pub struct CodecFacade {
    backend: Box<dyn CodecBackend>,
    mime: String,
    released: bool,
}

impl CodecFacade {
    /// Create a decoder for `mime` with no hardware support and default settings
    pub fn create_decoder_by_type(mime: &str) -> Result<Self> {
        Self::create_decoder_by_type_with(&NoHardware, mime, &DecoderConfig::default())
    }

    /// Create a decoder for `mime`, preferring `hardware` and falling back to
    /// the software G.711 backend configured by `config`
    pub fn create_decoder_by_type_with(
        hardware: &dyn HardwareCodecFactory,
        mime: &str,
        config: &DecoderConfig,
    ) -> Result<Self> {
        match hardware.create_decoder_by_type(mime) {
            Ok(backend) => {
                log::debug!("Using hardware decoder for {}", mime);
                return Ok(Self::from_backend(backend, mime));
            }
            Err(e) => log::warn!("Hardware decoder creation failed for {}: {}", mime, e),
        }

        let Some(law) = G711Law::from_mime(mime) else {
            return Err(Error::DecoderUnavailable {
                mime: mime.to_string(),
            });
        };
        config.validate()?;

        log::info!("Falling back to software {:?} decoder for {}", law, mime);
        let backend = SoftwareDecoder::g711(law, config.clone());
        Ok(Self::from_backend(Box::new(backend), mime))
    }

    /// Wrap an already constructed backend
    pub fn from_backend(backend: Box<dyn CodecBackend>, mime: &str) -> Self {
        Self {
            backend,
            mime: mime.to_string(),
            released: false,
        }
    }

    /// MIME type this decoder was created for
    pub fn mime(&self) -> &str {
        &self.mime
    }

    /// Whether decoding happens in-process (diagnostics only)
    pub fn is_software(&self) -> bool {
        self.backend.is_software()
    }

    /// Configure the active backend
    pub fn configure(&mut self, format: Option<&AudioFormat>, flags: u32) -> Result<()> {
        self.backend.configure(format, flags)
    }

    /// Start the active backend
    pub fn start(&mut self) -> Result<()> {
        self.backend.start()
    }

    /// Stop the active backend
    pub fn stop(&mut self) -> Result<()> {
        self.backend.stop()
    }

    /// Release the backend. Later calls are no-ops.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            self.backend.release();
        }
    }

    /// Obtain an input handle; `Ok(None)` means try again later
    pub fn dequeue_input_buffer(&mut self, timeout_us: i64) -> Result<Option<usize>> {
        self.backend.dequeue_input_buffer(timeout_us)
    }

    /// Writable storage behind an input handle
    pub fn input_buffer(&mut self, index: usize) -> Option<&mut [u8]> {
        self.backend.input_buffer(index)
    }

    /// Submit filled input for decoding
    pub fn queue_input_buffer(
        &mut self,
        index: usize,
        offset: usize,
        size: usize,
        presentation_time_us: i64,
        flags: u32,
    ) -> Result<()> {
        self.backend
            .queue_input_buffer(index, offset, size, presentation_time_us, flags)
    }

    /// Obtain decoded output; `Ok(None)` means try again later
    pub fn dequeue_output_buffer(&mut self, timeout_us: i64) -> Result<Option<(usize, BufferInfo)>> {
        self.backend.dequeue_output_buffer(timeout_us)
    }

    /// Decoded bytes behind an output index
    pub fn output_buffer(&mut self, index: usize) -> Option<&[u8]> {
        self.backend.output_buffer(index)
    }

    /// Hand an output buffer back to the backend
    pub fn release_output_buffer(&mut self, index: usize, render: bool) -> Result<()> {
        self.backend.release_output_buffer(index, render)
    }

    /// Format of the decoded output
    pub fn output_format(&self) -> Result<AudioFormat> {
        self.backend.output_format()
    }
}

impl Drop for CodecFacade {
    fn drop(&mut self) {
        self.release();
    }
}
