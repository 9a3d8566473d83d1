// ABOUTME: Audio encoder implementations
// ABOUTME: Compresses 16-bit linear PCM to G.711 A-law / µ-law codes

use crate::audio::decode::g711::{QUANT_MASK, SEG_SHIFT, ULAW_BIAS};
use crate::audio::G711Law;

/// Segment end points on the 13-bit A-law magnitude scale
const SEG_AEND: [i32; 8] = [0x1F, 0x3F, 0x7F, 0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF];
/// Segment end points on the 14-bit µ-law magnitude scale
const SEG_UEND: [i32; 8] = [0x3F, 0x7F, 0xFF, 0x1FF, 0x3FF, 0x7FF, 0xFFF, 0x1FFF];
const ULAW_CLIP: i32 = 8159;

/// Encoder trait for companded audio codecs
pub trait Encoder {
    /// Encode `input` into `out`, returning the number of codes written.
    fn encode(&self, input: &[i16], out: &mut [u8]) -> usize;
}

fn segment(value: i32, table: &[i32; 8]) -> usize {
    table.iter().position(|&end| value <= end).unwrap_or(table.len())
}

/// Compress one linear sample to an A-law code
pub fn linear_to_alaw(pcm: i16) -> u8 {
    let mut value = i32::from(pcm) >> 3;
    let mask: u8 = if value >= 0 {
        0xD5
    } else {
        value = -value - 1;
        0x55
    };

    let seg = segment(value, &SEG_AEND);
    if seg >= SEG_AEND.len() {
        return 0x7F ^ mask;
    }
    let mut aval = (seg as u8) << SEG_SHIFT;
    aval |= if seg < 2 {
        ((value >> 1) as u8) & QUANT_MASK
    } else {
        ((value >> seg) as u8) & QUANT_MASK
    };
    aval ^ mask
}

/// Compress one linear sample to a µ-law code
pub fn linear_to_ulaw(pcm: i16) -> u8 {
    let mut value = i32::from(pcm) >> 2;
    let mask: u8 = if value < 0 {
        value = -value;
        0x7F
    } else {
        0xFF
    };
    value = value.min(ULAW_CLIP) + (ULAW_BIAS >> 2);

    let seg = segment(value, &SEG_UEND);
    if seg >= SEG_UEND.len() {
        return 0x7F ^ mask;
    }
    let uval = ((seg as u8) << SEG_SHIFT) | (((value >> (seg + 1)) as u8) & QUANT_MASK);
    uval ^ mask
}

/// Encode `input` with `law` into `out`, returning the number of codes written.
pub fn encode(law: G711Law, input: &[i16], out: &mut [u8]) -> usize {
    let compress = match law {
        G711Law::Alaw => linear_to_alaw,
        G711Law::Mlaw => linear_to_ulaw,
    };
    let n = input.len().min(out.len());
    for (dst, &sample) in out[..n].iter_mut().zip(input) {
        *dst = compress(sample);
    }
    n
}

/// Stateless G.711 encoder bound to one law
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct G711Encoder {
    law: G711Law,
}

impl G711Encoder {
    pub fn new(law: G711Law) -> Self {
        Self { law }
    }
}

impl Encoder for G711Encoder {
    fn encode(&self, input: &[i16], out: &mut [u8]) -> usize {
        encode(self.law, input, out)
    }
}
