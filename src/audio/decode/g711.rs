// ABOUTME: G.711 decoder implementation
// ABOUTME: Expands 8-bit A-law / µ-law codes to 16-bit linear PCM per ITU-T G.711

use crate::audio::decode::Decoder;
use crate::audio::G711Law;

pub(crate) const SIGN_BIT: u8 = 0x80;
pub(crate) const QUANT_MASK: u8 = 0x0F;
pub(crate) const SEG_SHIFT: u8 = 4;
pub(crate) const SEG_MASK: u8 = 0x70;
/// Bias added to µ-law magnitudes before segment search
pub(crate) const ULAW_BIAS: i32 = 0x84;

/// Expand one A-law code to linear PCM
#[inline]
pub fn alaw_to_linear(code: u8) -> i16 {
    let a = code ^ 0x55;
    let mut t = i32::from(a & QUANT_MASK) << 4;
    let seg = (a & SEG_MASK) >> SEG_SHIFT;
    match seg {
        0 => t += 8,
        1 => t += 0x108,
        _ => t = (t + 0x108) << (seg - 1),
    }
    // Max magnitude is 32256, so the cast cannot truncate
    if a & SIGN_BIT != 0 {
        t as i16
    } else {
        (-t) as i16
    }
}

/// Expand one µ-law code to linear PCM
#[inline]
pub fn ulaw_to_linear(code: u8) -> i16 {
    let u = !code;
    let mut t = (i32::from(u & QUANT_MASK) << 3) + ULAW_BIAS;
    t <<= (u & SEG_MASK) >> SEG_SHIFT;
    if u & SIGN_BIT != 0 {
        (ULAW_BIAS - t) as i16
    } else {
        (t - ULAW_BIAS) as i16
    }
}

/// Decode `input` with `law` into `out`, returning the number of samples written.
///
/// Every byte maps independently to one sample; no state is carried between calls.
pub fn decode(law: G711Law, input: &[u8], out: &mut [i16]) -> usize {
    let expand = match law {
        G711Law::Alaw => alaw_to_linear,
        G711Law::Mlaw => ulaw_to_linear,
    };
    let n = input.len().min(out.len());
    for (dst, &code) in out[..n].iter_mut().zip(input) {
        *dst = expand(code);
    }
    n
}

/// Stateless G.711 decoder bound to one law
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct G711Decoder {
    law: G711Law,
}

impl G711Decoder {
    pub fn new(law: G711Law) -> Self {
        Self { law }
    }

    pub fn law(&self) -> G711Law {
        self.law
    }
}

impl Decoder for G711Decoder {
    fn decode(&self, input: &[u8], out: &mut [i16]) -> usize {
        decode(self.law, input, out)
    }
}
