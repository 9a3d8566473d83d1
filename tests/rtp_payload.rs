use mediacodec_ext::error::Error;
use mediacodec_ext::rtp::{AudioParser, G711Parser, RtpPayloadExtractor};
use mediacodec_ext::{G711Law, RtpConfig};

/// 12-byte RTP header (V=2, PT=8) followed by `payload`
fn rtp_packet(payload: &[u8]) -> Vec<u8> {
    let mut packet = vec![0x80, 0x08, 0x00, 0x01, 0, 0, 0, 160, 0xDE, 0xAD, 0xBE, 0xEF];
    packet.extend_from_slice(payload);
    packet
}

#[test]
fn test_short_packets_produce_no_payload() {
    let packet = rtp_packet(&[0xD5; 20]);
    for offset in [0, 4, 12] {
        let extractor = RtpPayloadExtractor::new(offset).unwrap();
        for length in 0..=12 {
            assert!(extractor.extract(&packet, length).is_none(), "length {}", length);
        }
    }
}

#[test]
fn test_payload_size_is_length_minus_header() {
    let packet = rtp_packet(&[0xD5; 20]);
    for offset in [0, 4, 12] {
        let extractor = RtpPayloadExtractor::new(offset).unwrap();
        for length in 13..=packet.len() {
            let payload = extractor.extract(&packet, length).unwrap();
            assert_eq!(payload.len(), length - offset);
            assert_eq!(payload, packet[offset..length].to_vec());
        }
    }
}

#[test]
fn test_default_strips_rtp_header() {
    let extractor = RtpPayloadExtractor::default();
    assert_eq!(extractor.header_len(), 12);

    let packet = rtp_packet(&[1, 2, 3]);
    assert_eq!(extractor.extract(&packet, packet.len()).unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_passthrough_keeps_header() {
    let extractor = RtpPayloadExtractor::passthrough();
    let packet = rtp_packet(&[1, 2, 3]);

    let payload = extractor.extract(&packet, packet.len()).unwrap();
    assert_eq!(payload, packet);
}

#[test]
fn test_length_beyond_buffer_is_dropped() {
    let extractor = RtpPayloadExtractor::default();
    let packet = rtp_packet(&[1, 2, 3]);
    assert!(extractor.extract(&packet, packet.len() + 1).is_none());
}

#[test]
fn test_extract_copies_trailing_bytes_out() {
    let extractor = RtpPayloadExtractor::default();
    let mut packet = rtp_packet(&[9; 8]);
    packet.extend_from_slice(&[0xEE; 4]); // transport reuses the tail

    let payload = extractor.extract(&packet, 20).unwrap();
    packet.fill(0);
    assert_eq!(payload, vec![9; 8]);
}

#[test]
fn test_header_len_above_minimum_is_rejected() {
    assert!(matches!(RtpPayloadExtractor::new(13), Err(Error::Config(_))));
    assert!(RtpPayloadExtractor::from_config(&RtpConfig { header_len: 12 }).is_ok());
}

#[test]
fn test_parser_law_from_encoding_name() {
    assert_eq!(G711Parser::new("PCMU").law(), G711Law::Mlaw);
    assert_eq!(G711Parser::new("ulaw").law(), G711Law::Mlaw);
    assert_eq!(G711Parser::new("MuLaw").law(), G711Law::Mlaw);
    assert_eq!(G711Parser::new("pcma").law(), G711Law::Alaw);
    assert_eq!(G711Parser::new("ALAW").law(), G711Law::Alaw);
    assert_eq!(G711Parser::new("g722").law(), G711Law::Alaw);

    assert_eq!(G711Parser::new("PCMU").mime(), "audio/g711-mlaw");
    assert_eq!(G711Parser::new("PCMA").mime(), "audio/g711-alaw");
}

#[test]
fn test_parser_extracts_payload() {
    let parser = G711Parser::with_extractor(G711Law::Alaw, RtpPayloadExtractor::default());
    let packet = rtp_packet(&[0x55; 160]);

    let payload = parser.process_rtp_packet(&packet, packet.len()).unwrap();
    assert_eq!(payload.len(), 160);
    assert!(parser.process_rtp_packet(&packet, 12).is_none());
}
