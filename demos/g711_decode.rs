// ABOUTME: End-to-end G.711 decode example
// ABOUTME: Frames a raw G.711 file into RTP packets, decodes them and writes little-endian PCM

use clap::Parser;
use mediacodec_ext::rtp::{AudioParser, G711Parser, RtpPayloadExtractor};
use mediacodec_ext::{CodecFacade, NoHardware, PipelineConfig};
use std::fs;
use std::path::PathBuf;

/// Decode raw G.711 audio through the RTP extraction and decoder pipeline
#[derive(Parser, Debug)]
#[command(name = "g711_decode")]
#[command(about = "Decode a raw G.711 file to 16-bit little-endian PCM", long_about = None)]
struct Args {
    /// Raw G.711 input file
    input: PathBuf,

    /// Output file for s16le PCM
    output: PathBuf,

    /// RTP encoding name (PCMA or PCMU)
    #[arg(short, long, default_value = "PCMA")]
    encoding: String,

    /// Samples per RTP packet
    #[arg(short, long, default_value_t = 160)]
    frame: usize,

    /// Optional JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

/// Wrap `payload` in a 12-byte RTP header
fn rtp_packet(seq: u16, timestamp: u32, payload_type: u8, payload: &[u8]) -> Vec<u8> {
    let mut packet = Vec::with_capacity(12 + payload.len());
    packet.push(0x80);
    packet.push(payload_type & 0x7F);
    packet.extend_from_slice(&seq.to_be_bytes());
    packet.extend_from_slice(&timestamp.to_be_bytes());
    packet.extend_from_slice(&0x1234_5678u32.to_be_bytes());
    packet.extend_from_slice(payload);
    packet
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => PipelineConfig::from_file(path)?,
        None => PipelineConfig::default(),
    };

    let probe = G711Parser::new(&args.encoding);
    let parser = G711Parser::with_extractor(probe.law(), RtpPayloadExtractor::from_config(&config.rtp)?);
    let payload_type = match probe.law() {
        mediacodec_ext::G711Law::Mlaw => 0,
        mediacodec_ext::G711Law::Alaw => 8,
    };

    let mut codec = CodecFacade::create_decoder_by_type_with(&NoHardware, parser.mime(), &config.decoder)?;
    codec.configure(None, 0)?;
    codec.start()?;
    let format = codec.output_format()?;
    println!(
        "Decoding {} as {} ({} Hz, {} ch, {}-bit)",
        args.input.display(),
        parser.mime(),
        format.sample_rate,
        format.channels,
        format.bit_depth
    );

    let input = fs::read(&args.input)?;
    let frame = args.frame.clamp(1, config.decoder.input_buffer_size);
    let mut pcm = Vec::with_capacity(input.len() * 2);
    let mut dropped = 0usize;

    for (seq, chunk) in input.chunks(frame).enumerate() {
        let packet = rtp_packet(seq as u16, (seq * frame) as u32, payload_type, chunk);
        let Some(payload) = parser.process_rtp_packet(&packet, packet.len()) else {
            dropped += 1;
            continue;
        };

        let Some(index) = codec.dequeue_input_buffer(10_000)? else {
            dropped += 1;
            continue;
        };
        let Some(buf) = codec.input_buffer(index) else {
            dropped += 1;
            continue;
        };
        let size = payload.len().min(buf.len());
        buf[..size].copy_from_slice(&payload[..size]);
        codec.queue_input_buffer(index, 0, size, 0, 0)?;

        while let Some((out_index, info)) = codec.dequeue_output_buffer(10_000)? {
            if let Some(out) = codec.output_buffer(out_index) {
                pcm.extend_from_slice(&out[info.offset..info.offset + info.size]);
            }
            codec.release_output_buffer(out_index, false)?;
        }
    }

    codec.stop()?;
    codec.release();

    fs::write(&args.output, &pcm)?;
    println!(
        "Wrote {} bytes of PCM to {} ({} packets dropped)",
        pcm.len(),
        args.output.display(),
        dropped
    );

    Ok(())
}
