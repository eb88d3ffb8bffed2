//! The Keccak-f\[1600\] permutation.
//!
//! Each of the 24 rounds applies θ, ρ, π, χ and ι, in that order. The step
//! mappings are exposed individually so they can be checked in isolation.

use crate::{lane::lane_index, Buffer};
use cfg_if::cfg_if;

/// Number of rounds of Keccak-f\[1600\].
pub const ROUNDS: usize = 24;

/// ι round constants.
pub const RC: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// ρ rotation offsets, indexed `[y][x]`.
pub const RHO: [[u32; 5]; 5] = [
    [0, 1, 62, 28, 27],
    [36, 44, 6, 55, 20],
    [3, 10, 43, 25, 39],
    [41, 45, 15, 21, 8],
    [18, 2, 61, 56, 14],
];

cfg_if! {
    if #[cfg(feature = "no_unroll")] {
        macro_rules! unroll5 {
            ($var:ident, $body:block) => {
                for $var in 0..5usize $body
            };
        }
    } else {
        macro_rules! unroll5 {
            ($var:ident, $body:block) => {
                { let $var: usize = 0; $body }
                { let $var: usize = 1; $body }
                { let $var: usize = 2; $body }
                { let $var: usize = 3; $body }
                { let $var: usize = 4; $body }
            };
        }
    }
}

/// θ: XORs every lane with the parities of the two neighbouring columns.
#[inline(always)]
pub fn theta(a: &mut Buffer) {
    let mut c = [0u64; 5];
    unroll5!(x, {
        c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
    });

    unroll5!(x, {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        unroll5!(y, {
            a[lane_index(x, y)] ^= d;
        });
    });
}

/// ρ: rotates each lane by its fixed offset.
#[inline(always)]
#[allow(clippy::needless_range_loop)]
pub fn rho(a: &mut Buffer) {
    unroll5!(y, {
        unroll5!(x, {
            let i = lane_index(x, y);
            a[i] = a[i].rotate_left(RHO[y][x]);
        });
    });
}

/// π: moves lane `(x, y)` to `(y, 2x + 3y)`.
#[inline(always)]
pub fn pi(a: &mut Buffer) {
    let b = *a;
    unroll5!(x, {
        unroll5!(y, {
            a[lane_index(y, 2 * x + 3 * y)] = b[lane_index(x, y)];
        });
    });
}

/// χ: the only non-linear step, applied row by row.
#[inline(always)]
pub fn chi(a: &mut Buffer) {
    unroll5!(y, {
        let mut row = [0u64; 5];
        unroll5!(x, {
            row[x] = a[lane_index(x, y)];
        });
        unroll5!(x, {
            a[lane_index(x, y)] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
        });
    });
}

/// ι: XORs the constant of round `round` into lane `(0, 0)`.
#[inline(always)]
pub fn iota(a: &mut Buffer, round: usize) {
    debug_assert!(round < ROUNDS);
    a[0] ^= RC[round];
}

/// One full round.
#[inline(always)]
pub fn round(a: &mut Buffer, round: usize) {
    theta(a);
    rho(a);
    pi(a);
    chi(a);
    iota(a, round);
}

/// Keccak-f\[1600\]: all 24 rounds, in place.
#[inline]
pub fn keccak_f1600(a: &mut Buffer) {
    for i in 0..ROUNDS {
        round(a, i);
    }
}
