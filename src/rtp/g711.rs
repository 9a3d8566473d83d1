// ABOUTME: G.711 audio parser
// ABOUTME: Binds an encoding name to a G.711 law and extracts payload bytes from RTP

use crate::audio::G711Law;
use crate::rtp::{AudioParser, RtpPayloadExtractor};

/// Parser for PCMA / PCMU RTP streams
#[derive(Debug, Clone, Copy)]
pub struct G711Parser {
    law: G711Law,
    extractor: RtpPayloadExtractor,
}

impl G711Parser {
    /// Create a parser from an SDP encoding name such as `PCMU` or `PCMA`
    pub fn new(encoding_name: &str) -> Self {
        Self::with_extractor(
            G711Law::from_encoding_name(encoding_name),
            RtpPayloadExtractor::default(),
        )
    }

    pub fn with_extractor(law: G711Law, extractor: RtpPayloadExtractor) -> Self {
        Self { law, extractor }
    }

    pub fn law(&self) -> G711Law {
        self.law
    }

    /// MIME type to request from the decoder facade
    pub fn mime(&self) -> &'static str {
        self.law.mime()
    }
}

impl AudioParser for G711Parser {
    fn process_rtp_packet(&self, data: &[u8], length: usize) -> Option<Vec<u8>> {
        self.extractor.extract(data, length)
    }
}
