#![no_main]

use keccak256::{ffi::keccak256_hash, keccak256, Digest, Keccak256};
use libfuzzer_sys::fuzz_target;
use tiny_keccak::{Hasher, Keccak};

fuzz_target!(|data: &[u8]| {
    let mut tiny = Keccak::v256();
    tiny.update(data);
    let mut tiny_output = [0u8; 32];
    tiny.finalize(&mut tiny_output);

    let oneshot_output = keccak256(data);
    assert_eq!(oneshot_output, tiny_output, "Keccak mismatch! Input: {data:x?}\ntiny_keccak output: {tiny_output:x?}, keccak256 output: {oneshot_output:x?}");

    // Split the input in two to exercise the buffered hasher.
    let mid = data.first().map_or(0, |&b| b as usize % (data.len() + 1));
    let mut hasher = Keccak256::new();
    hasher.update(&data[..mid]);
    hasher.update(&data[mid..]);
    assert_eq!(hasher.finalize()[..], tiny_output, "hasher mismatch at split {mid}");

    let mut ffi_output = [0u8; 32];
    unsafe { keccak256_hash(data.as_ptr(), data.len(), ffi_output.as_mut_ptr()) };
    assert_eq!(ffi_output, tiny_output, "ffi mismatch");
});
