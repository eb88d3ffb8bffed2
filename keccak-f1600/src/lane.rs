//! Addressing of the 1600-bit state.
//!
//! The state is held as 25 lanes of 64 bits, lane `(x, y)` living at index
//! `x + 5 * y`. Its flat byte view is little-endian per lane: byte `i` is
//! byte `i % 8` of lane `i / 8`, i.e. bits `(i % 8) * 8 .. (i % 8) * 8 + 8`.

use crate::Buffer;

/// Number of lanes in the state.
pub const LANES: usize = 25;

/// Size of the state in bytes.
pub const STATE_BYTES: usize = 200;

/// Size of one lane in bytes.
pub const LANE_BYTES: usize = 8;

/// Linear index of lane `(x, y)`. Both coordinates are taken modulo 5.
#[inline(always)]
pub const fn lane_index(x: usize, y: usize) -> usize {
    x % 5 + 5 * (y % 5)
}

/// Returns lane `(x, y)`.
#[inline(always)]
pub fn lane(a: &Buffer, x: usize, y: usize) -> u64 {
    a[lane_index(x, y)]
}

/// Returns a mutable reference to lane `(x, y)`.
#[inline(always)]
pub fn lane_mut(a: &mut Buffer, x: usize, y: usize) -> &mut u64 {
    &mut a[lane_index(x, y)]
}

/// Returns bit `z` of lane `(x, y)` as `0` or `1`. `z` is taken modulo 64.
#[inline]
pub fn get_bit(a: &Buffer, x: usize, y: usize, z: usize) -> u64 {
    (lane(a, x, y) >> (z % 64)) & 1
}

/// Returns byte `i` of the flat view.
#[inline]
pub fn byte(a: &Buffer, i: usize) -> u8 {
    debug_assert!(i < STATE_BYTES);
    (a[i / LANE_BYTES] >> ((i % LANE_BYTES) * 8)) as u8
}

/// XORs `data` into the flat view, starting at byte `offset`.
#[inline]
pub fn xor_bytes(a: &mut Buffer, offset: usize, data: &[u8]) {
    debug_assert!(offset + data.len() <= STATE_BYTES);

    if offset % LANE_BYTES == 0 {
        // Whole lanes first, then whatever is left byte by byte.
        let mut chunks = data.chunks_exact(LANE_BYTES);
        let first = offset / LANE_BYTES;
        for (s, chunk) in a[first..].iter_mut().zip(&mut chunks) {
            let mut word = [0; LANE_BYTES];
            word.copy_from_slice(chunk);
            *s ^= u64::from_le_bytes(word);
        }
        let done = data.len() - chunks.remainder().len();
        xor_unaligned(a, offset + done, chunks.remainder());
    } else {
        xor_unaligned(a, offset, data);
    }
}

#[inline]
fn xor_unaligned(a: &mut Buffer, offset: usize, data: &[u8]) {
    for (i, &b) in data.iter().enumerate() {
        let pos = offset + i;
        a[pos / LANE_BYTES] ^= u64::from(b) << ((pos % LANE_BYTES) * 8);
    }
}

/// Copies `out.len()` bytes of the flat view, starting at byte `offset`, into `out`.
#[inline]
pub fn read_bytes(a: &Buffer, offset: usize, out: &mut [u8]) {
    debug_assert!(offset + out.len() <= STATE_BYTES);
    for (i, o) in out.iter_mut().enumerate() {
        *o = byte(a, offset + i);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinates_wrap() {
        assert_eq!(lane_index(0, 0), 0);
        assert_eq!(lane_index(4, 0), 4);
        assert_eq!(lane_index(0, 1), 5);
        assert_eq!(lane_index(4, 4), 24);
        assert_eq!(lane_index(5, 0), lane_index(0, 0));
        assert_eq!(lane_index(7, 9), lane_index(2, 4));
    }

    #[test]
    fn bytes_are_little_endian_per_lane() {
        let mut a = [0u64; LANES];
        a[0] = 0x0807_0605_0403_0201;
        a[24] = 0xff00_0000_0000_0000;
        for i in 0..8 {
            assert_eq!(byte(&a, i), i as u8 + 1);
        }
        assert_eq!(byte(&a, 8), 0);
        assert_eq!(byte(&a, 199), 0xff);
        assert_eq!(byte(&a, 198), 0);
    }

    #[test]
    fn byte_bit_maps_to_lane_bit() {
        // Bit 3 of byte 13 is bit (13 % 8) * 8 + 3 = 43 of lane 1, i.e. (1, 0).
        let mut a = [0u64; LANES];
        xor_bytes(&mut a, 13, &[1 << 3]);
        assert_eq!(get_bit(&a, 1, 0, 43), 1);
        assert_eq!(a[1], 1 << 43);
        assert_eq!(a.iter().map(|l| l.count_ones()).sum::<u32>(), 1);
    }

    #[test]
    fn xor_aligned_and_unaligned_agree() {
        let data: [u8; 37] = core::array::from_fn(|i| (i * 7 + 1) as u8);

        let mut aligned = [0u64; LANES];
        xor_bytes(&mut aligned, 16, &data);
        let mut bytewise = [0u64; LANES];
        xor_unaligned(&mut bytewise, 16, &data);
        assert_eq!(aligned, bytewise);

        let mut out = [0u8; 37];
        read_bytes(&aligned, 16, &mut out);
        assert_eq!(out, data);

        xor_bytes(&mut aligned, 16, &data);
        assert_eq!(aligned, [0; LANES]);
    }

    #[test]
    fn xor_at_odd_offset() {
        let mut a = [0u64; LANES];
        xor_bytes(&mut a, 3, &[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x11]);
        let mut out = [0u8; 10];
        read_bytes(&a, 0, &mut out);
        assert_eq!(out, [0, 0, 0, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0x11, 0]);
    }

    #[test]
    fn lane_mut_writes_through() {
        let mut a = [0u64; LANES];
        *lane_mut(&mut a, 3, 2) = 42;
        assert_eq!(a[13], 42);
        assert_eq!(lane(&a, 8, 7), 42);
    }
}
