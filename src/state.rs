#![allow(non_snake_case, non_upper_case_globals)]

use crate::pad::pad_block;
use keccak_f1600::{absorb, squeeze, Buffer, LANES, STATE_BYTES};

/// Sponge state of one Keccak hash computation.
///
/// `bitlen` is the digest size in bits and fixes capacity at twice that;
/// `pad` is the domain suffix.
pub(crate) struct KeccakState<const bitlen: usize, const pad: u8> {
    A: Buffer,
}

impl<const bitlen: usize, const pad: u8> KeccakState<bitlen, pad> {
    /// Output length in bytes.
    pub(crate) const out: usize = bitlen / 8;
    /// Rate (block size) in bytes.
    pub(crate) const bsz: usize = (1600 - 2 * bitlen) / 8;

    #[inline(always)]
    pub(crate) fn new() -> Self {
        Self { A: [0; LANES] }
    }

    /// Absorbs the whole message, padding included.
    #[inline]
    pub(crate) fn absorb_all(&mut self, inp: &[u8]) {
        let bsz = Self::bsz;

        let rem = absorb(&mut self.A, inp, bsz);

        let mut last = [0u8; STATE_BYTES];
        last[..rem].copy_from_slice(&inp[inp.len() - rem..]);
        pad_block(&mut last[..bsz], rem, pad);
        absorb(&mut self.A, &last[..bsz], bsz);
    }

    #[inline]
    pub(crate) fn squeeze(mut self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), Self::out);
        squeeze(&mut self.A, out, Self::bsz);
    }

    /// Runs a full hash computation on a fresh state.
    #[inline]
    pub(crate) fn digest_into(inp: &[u8], out: &mut [u8]) {
        let mut this = Self::new();
        this.absorb_all(inp);
        this.squeeze(out);
    }
}

#[cfg(feature = "zeroize")]
impl<const bitlen: usize, const pad: u8> Drop for KeccakState<bitlen, pad> {
    fn drop(&mut self) {
        zeroize::Zeroize::zeroize(&mut self.A);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pad::KECCAK;

    type State = KeccakState<256, KECCAK>;

    #[test]
    fn parameters() {
        assert_eq!(State::out, 32);
        assert_eq!(State::bsz, 136);
        assert_eq!(KeccakState::<512, KECCAK>::bsz, 72);
    }

    #[test]
    fn empty_message_is_one_block() {
        let mut state = State::new();
        state.absorb_all(&[]);

        let mut block = [0u8; 136];
        block[0] = 0x01;
        block[135] = 0x80;
        let mut expected = [0u64; LANES];
        keccak_f1600::absorb(&mut expected, &block, 136);

        assert_eq!(state.A, expected);
    }

    #[test]
    fn aligned_message_absorbs_padding_block() {
        let msg = [7u8; 136];
        let mut state = State::new();
        state.absorb_all(&msg);

        let mut expected = [0u64; LANES];
        let mut blocks = [0u8; 272];
        blocks[..136].copy_from_slice(&msg);
        blocks[136] = 0x01;
        blocks[271] = 0x80;
        keccak_f1600::absorb(&mut expected, &blocks, 136);

        assert_eq!(state.A, expected);
    }
}
