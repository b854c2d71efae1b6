//! Minimal zlib stream writer: stored deflate blocks plus Adler-32.

use alloc::vec::Vec;

/// Largest payload of one stored deflate block.
const MAX_BLOCK: usize = 65535;

/// Wrap raw bytes in a zlib stream of stored (uncompressed) deflate blocks.
pub(crate) fn compress_stored(data: &[u8]) -> Vec<u8> {
    // 2-byte header, 5 bytes of framing per block, 4-byte checksum
    let blocks = data.len().div_ceil(MAX_BLOCK).max(1);
    let mut out = Vec::with_capacity(2 + data.len() + 5 * blocks + 4);

    // CMF = 0x78 (deflate, 32K window); FLG chosen so CMF*256+FLG is a
    // multiple of 31 with no preset dictionary.
    out.push(0x78);
    out.push(0x01);

    let mut pos = 0;
    loop {
        let block_len = (data.len() - pos).min(MAX_BLOCK);
        let is_final = pos + block_len == data.len();
        out.push(u8::from(is_final)); // BFINAL bit, BTYPE = 00 (stored)
        let len = block_len as u16;
        out.extend_from_slice(&len.to_le_bytes());
        out.extend_from_slice(&(!len).to_le_bytes());
        out.extend_from_slice(&data[pos..pos + block_len]);
        pos += block_len;
        if is_final {
            break;
        }
    }

    out.extend_from_slice(&adler32(data).to_be_bytes());
    out
}

/// Adler-32 checksum of the uncompressed stream.
fn adler32(data: &[u8]) -> u32 {
    const MOD_ADLER: u32 = 65521;
    let mut a: u32 = 1;
    let mut b: u32 = 0;
    for &byte in data {
        a = (a + u32::from(byte)) % MOD_ADLER;
        b = (b + a) % MOD_ADLER;
    }
    (b << 16) | a
}
