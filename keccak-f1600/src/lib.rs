#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod lane;
pub mod permutation;
mod sponge;

pub use lane::{lane_index, LANES, STATE_BYTES};
pub use permutation::{keccak_f1600, ROUNDS};
pub use sponge::{absorb, squeeze, sponge};

/// Keccak-f\[1600\] state: 25 lanes, lane `(x, y)` at index `x + 5 * y`.
pub type Buffer = [u64; LANES];
