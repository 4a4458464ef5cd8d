//! Wire codec
//!
//! Sensor register addresses and data are big-endian on the wire. Every
//! conversion between wire order and host order happens here and nowhere
//! else: the shim calls these at the bus boundary, and business logic above
//! it only ever sees host-order values.

/// Encode a 16-bit register address or value in wire order
pub fn encode_u16(value: u16) -> [u8; 2] {
    value.to_be_bytes()
}

/// Decode a 16-bit word from wire order
pub fn decode_u16(bytes: [u8; 2]) -> u16 {
    u16::from_be_bytes(bytes)
}

/// Decode a run of wire-order words into host-order words.
///
/// `bytes` must hold exactly `2 * out.len()` bytes; this is enforced by the
/// callers, which size both buffers from the same word count.
pub fn decode_words(bytes: &[u8], out: &mut [u16]) {
    debug_assert_eq!(bytes.len(), out.len() * 2);
    for (word, pair) in out.iter_mut().zip(bytes.chunks_exact(2)) {
        *word = u16::from_be_bytes([pair[0], pair[1]]);
    }
}

/// Swap a byte buffer of wire-order 32-bit words to host order in place.
///
/// Used by byte-oriented sensor contracts whose core algorithm hands over
/// whole structures as byte blocks. The length must be a multiple of 4.
pub fn swap_u32_buffer(buf: &mut [u8]) {
    debug_assert_eq!(buf.len() % 4, 0);
    for chunk in buf.chunks_exact_mut(4) {
        let value = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        chunk.copy_from_slice(&value.to_ne_bytes());
    }
}
