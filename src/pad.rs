//! pad10*1 padding with a domain suffix.

/// Domain suffix of the original Keccak submission, as used by Ethereum.
pub const KECCAK: u8 = 0x01;

/// Length of a message of `len` bytes once padded to `rate`-byte blocks.
///
/// At least one byte of padding is always added, so this is the smallest
/// multiple of `rate` strictly greater than `len`.
#[inline]
pub const fn padded_len(len: usize, rate: usize) -> usize {
    (len / rate + 1) * rate
}

/// Pads the final block in place.
///
/// The first `num` bytes of `block` hold the message tail. The suffix lands on
/// byte `num`, everything after is zeroed, and the last byte gets its top bit
/// set. `num` can be `block.len() - 1`, in which case both land on the same
/// byte (`0x81` for [`KECCAK`]).
#[inline]
pub fn pad_block(block: &mut [u8], num: usize, pad: u8) {
    let bsz = block.len();
    debug_assert!(num < bsz, "no room left for padding");

    block[num..].fill(0);
    block[num] = pad;
    block[bsz - 1] |= 0x80;
}

/// Returns `inp` followed by its padding, a whole number of `rate`-byte blocks.
#[cfg(feature = "std")]
pub fn pad(inp: &[u8], rate: usize, pad: u8) -> alloc::vec::Vec<u8> {
    let mut out = alloc::vec![0; padded_len(inp.len(), rate)];
    out[..inp.len()].copy_from_slice(inp);
    let tail = inp.len() % rate;
    let last = out.len() - rate;
    pad_block(&mut out[last..], tail, pad);
    out
}
