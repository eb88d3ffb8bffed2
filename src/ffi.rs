//! C ABI entry point.

use crate::{keccak256_into, OUTPUT_LEN};
use core::slice;

/// Writes the Keccak-256 digest of the `len` bytes at `input` to `output`.
///
/// C signature:
///
/// ```c
/// void keccak256_hash(const uint8_t *input, size_t len, uint8_t *output);
/// ```
///
/// When `len` is zero `input` is never read, so null is accepted and hashes
/// the empty message.
///
/// # Safety
///
/// - If `len` is non-zero, `input` must be non-null and valid for reads of
///   `len` bytes. A null `input` with a non-zero `len` is undefined behavior.
/// - `output` must be non-null, valid for writes of 32 bytes, and must not
///   overlap the input.
#[no_mangle]
pub unsafe extern "C" fn keccak256_hash(input: *const u8, len: usize, output: *mut u8) {
    let inp: &[u8] = if len == 0 { &[] } else { unsafe { slice::from_raw_parts(input, len) } };
    let out = unsafe { &mut *output.cast::<[u8; OUTPUT_LEN]>() };
    keccak256_into(inp, out);
}
