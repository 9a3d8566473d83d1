// ABOUTME: Core audio type definitions
// ABOUTME: G711Law, AudioFormat descriptor and BufferInfo for dequeued output

/// MIME type reported for decoded PCM output
pub const MIME_AUDIO_RAW: &str = "audio/raw";
/// MIME type for G.711 A-law
pub const MIME_G711_ALAW: &str = "audio/g711-alaw";
/// MIME type for G.711 µ-law
pub const MIME_G711_MLAW: &str = "audio/g711-mlaw";

/// MIME types the software decoder can handle (matched case-insensitively)
pub const SUPPORTED_SOFTWARE_MIME_TYPES: [&str; 2] = [MIME_G711_ALAW, MIME_G711_MLAW];

/// G.711 companding law
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum G711Law {
    /// A-law (PCMA)
    Alaw,
    /// µ-law (PCMU)
    Mlaw,
}

impl G711Law {
    /// Map a supported software MIME type to its law.
    pub fn from_mime(mime: &str) -> Option<Self> {
        if mime.eq_ignore_ascii_case(MIME_G711_ALAW) {
            Some(Self::Alaw)
        } else if mime.eq_ignore_ascii_case(MIME_G711_MLAW) {
            Some(Self::Mlaw)
        } else {
            None
        }
    }

    /// Map an RTP/SDP encoding name to a law.
    ///
    /// Unknown names fall back to A-law.
    pub fn from_encoding_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "pcmu" | "ulaw" | "mulaw" => Self::Mlaw,
            _ => Self::Alaw,
        }
    }

    /// MIME type for this law
    pub fn mime(self) -> &'static str {
        match self {
            Self::Alaw => MIME_G711_ALAW,
            Self::Mlaw => MIME_G711_MLAW,
        }
    }
}

/// Output format descriptor, mirroring what a hardware decoder reports
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AudioFormat {
    pub mime: String,
    pub sample_rate: u32,
    pub channels: u8,
    pub bit_depth: u8,
}

impl AudioFormat {
    /// Raw PCM descriptor
    pub fn raw_pcm(sample_rate: u32, channels: u8, bit_depth: u8) -> Self {
        Self {
            mime: MIME_AUDIO_RAW.to_string(),
            sample_rate,
            channels,
            bit_depth,
        }
    }
}

/// Metadata for a dequeued output buffer
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BufferInfo {
    /// Start of valid data within the output buffer (always 0 for software decode)
    pub offset: usize,
    /// Bytes of valid PCM
    pub size: usize,
    /// Presentation timestamp in microseconds
    pub presentation_time_us: i64,
    /// Buffer flags as reported by the backend
    pub flags: u32,
}
