#![doc = include_str!("../README.md")]
#![no_std]
#![warn(missing_docs, rust_2018_idioms)]
#![allow(rustdoc::broken_intra_doc_links)]

#[cfg(feature = "std")]
extern crate alloc;

#[cfg(feature = "std")]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use core::fmt;
#[cfg(feature = "std")]
use digest::{
    consts::{U136, U32},
    core_api::{AlgorithmName, BlockSizeUser},
    typenum::Unsigned,
    FixedOutput, FixedOutputReset, HashMarker, Output, OutputSizeUser, Reset, Update,
};

pub use digest::{self, Digest};
pub use keccak_f1600 as keccak_f;

mod pad;
#[cfg(feature = "std")]
pub use pad::pad;
pub use pad::{pad_block, padded_len, KECCAK};

mod state;
use state::KeccakState;

#[cfg(feature = "std")]
#[macro_use]
mod macros;

#[cfg(feature = "ffi")]
pub mod ffi;

/// Rate (block size) in bytes: 1088 bits.
pub const RATE: usize = 136;
/// Capacity in bytes: 512 bits.
pub const CAPACITY: usize = 64;
/// Digest length in bytes.
pub const OUTPUT_LEN: usize = 32;
/// Domain suffix.
pub const PAD: u8 = KECCAK;

type Keccak256State = KeccakState<256, PAD>;

/// Keccak-256 digest of `inp`.
///
/// The empty slice hashes the empty message.
#[inline]
pub fn keccak256(inp: &[u8]) -> [u8; OUTPUT_LEN] {
    let mut out = [0; OUTPUT_LEN];
    keccak256_into(inp, &mut out);
    out
}

/// Writes the Keccak-256 digest of `inp` to `out`.
#[inline]
pub fn keccak256_into(inp: &[u8], out: &mut [u8; OUTPUT_LEN]) {
    Keccak256State::digest_into(inp, out);
}

#[cfg(feature = "std")]
impl_keccak!(Keccak256, U32, U136, PAD, "Keccak-256");
