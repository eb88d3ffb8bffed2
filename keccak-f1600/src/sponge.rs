use crate::{
    lane::{read_bytes, xor_bytes, LANES, STATE_BYTES},
    permutation::keccak_f1600,
    Buffer,
};

/// Absorbs every full `r`-byte block of `inp` into `a`, permuting after each.
///
/// `r` is the rate (block size) in bytes. Returns the number of trailing bytes
/// of `inp` that did not fill a block and were left untouched; it is always
/// less than `r`.
///
/// # Panics
///
/// Panics if `r` is not in `1..200`: the rate must be non-zero and leave room
/// for a non-empty capacity.
#[inline]
pub fn absorb(a: &mut Buffer, inp: &[u8], r: usize) -> usize {
    assert!(r > 0 && r < STATE_BYTES, "rate must leave room for capacity");

    let mut blocks = inp.chunks_exact(r);
    for block in &mut blocks {
        xor_bytes(a, 0, block);
        keccak_f1600(a);
    }
    blocks.remainder().len()
}

/// Fills `out` from the first `r` bytes of `a`.
///
/// Output longer than `r` is read block by block with a permutation between
/// consecutive blocks. No permutation runs before the first byte or after the
/// last one.
///
/// # Panics
///
/// Panics if `r` is not in `1..200`: the rate must be non-zero and leave room
/// for a non-empty capacity.
#[inline]
pub fn squeeze(a: &mut Buffer, out: &mut [u8], r: usize) {
    assert!(r > 0 && r < STATE_BYTES, "rate must leave room for capacity");

    let mut blocks = out.chunks_mut(r).peekable();
    while let Some(block) = blocks.next() {
        read_bytes(a, 0, block);
        if blocks.peek().is_some() {
            keccak_f1600(a);
        }
    }
}

/// Post-padding one-shot sponge on a fresh state.
///
/// `inp` must already be padded to a non-empty multiple of `r` bytes. The
/// parameterizations in use look as follows:
///
/// ```text
/// Keccak-256   sponge(pad(inp, 0x01), out[..32], (1600-512)/8)
/// SHA3-256     sponge(pad(inp, 0x06), out[..32], (1600-512)/8)
/// SHAKE-256    sponge(pad(inp, 0x1f), out[..d],  (1600-512)/8)
/// ```
///
/// # Panics
///
/// Panics if `r` is not in `1..200`.
#[inline]
pub fn sponge(inp: &[u8], out: &mut [u8], r: usize) {
    debug_assert!(!inp.is_empty() && inp.len() % r == 0, "input is not padded");

    let mut a = [0u64; LANES];
    absorb(&mut a, inp, r);
    squeeze(&mut a, out, r);
}
