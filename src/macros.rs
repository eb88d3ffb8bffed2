macro_rules! impl_keccak {
    ($name:ident, $output_size:ident, $rate:ident, $pad:expr, $alg_name:expr $(,)?) => {
        #[doc = concat!($alg_name, " hasher.")]
        ///
        /// Input is collected as it arrives and hashed in one shot on
        /// finalization; no permutation runs before then.
        #[derive(Clone, Default)]
        pub struct $name {
            buf: Vec<u8>,
        }

        impl $name {
            /// Output length.
            pub const OUT: usize = <$output_size as Unsigned>::USIZE;
            /// Block size.
            pub const BSZ: usize = <$rate as Unsigned>::USIZE;
            /// Padding byte.
            pub const PAD: u8 = $pad;

            /// Creates an empty hasher.
            #[inline]
            pub fn new() -> Self {
                Self::default()
            }

            /// Discards all input collected so far.
            #[inline]
            pub fn reset(&mut self) {
                self.wipe();
            }

            /// Appends `inp` to the message.
            #[inline]
            pub fn update(&mut self, inp: &[u8]) {
                self.buf.extend_from_slice(inp);
            }

            /// Hashes the collected message.
            #[inline]
            pub fn finalize(self) -> [u8; Self::OUT] {
                let mut out = [0; Self::OUT];
                self.finalize_into(&mut out);
                out
            }

            /// Hashes the collected message into `out`.
            #[inline]
            pub fn finalize_into(self, out: &mut [u8; Self::OUT]) {
                self.hash_into(out);
            }

            /// One-shot digest of `inp`.
            #[inline]
            pub fn digest(inp: &[u8]) -> [u8; Self::OUT] {
                let mut out = [0; Self::OUT];
                Self::digest_into(inp, &mut out);
                out
            }

            /// One-shot digest of `inp`, written to `out`.
            #[inline]
            pub fn digest_into(inp: &[u8], out: &mut [u8; Self::OUT]) {
                Self::hash(inp, out);
            }

            #[inline]
            fn hash(inp: &[u8], out: &mut [u8]) {
                KeccakState::<{ <$output_size as Unsigned>::USIZE * 8 }, { $pad }>::digest_into(
                    inp, out,
                );
            }

            #[inline]
            fn hash_into(&self, out: &mut [u8]) {
                Self::hash(&self.buf, out);
            }

            #[inline]
            fn wipe(&mut self) {
                #[cfg(feature = "zeroize")]
                zeroize::Zeroize::zeroize(&mut self.buf);
                self.buf.clear();
            }
        }

        #[cfg(feature = "zeroize")]
        impl Drop for $name {
            #[inline]
            fn drop(&mut self) {
                self.wipe();
            }
        }

        impl Reset for $name {
            #[inline]
            fn reset(&mut self) {
                self.wipe();
            }
        }

        impl AlgorithmName for $name {
            #[inline]
            fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))
            }
        }

        impl fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(concat!(stringify!($name), " { ... }"))
            }
        }

        impl HashMarker for $name {}

        impl BlockSizeUser for $name {
            type BlockSize = $rate;
        }

        impl OutputSizeUser for $name {
            type OutputSize = $output_size;
        }

        impl Update for $name {
            #[inline]
            fn update(&mut self, data: &[u8]) {
                self.buf.extend_from_slice(data);
            }
        }

        impl FixedOutput for $name {
            #[inline]
            fn finalize_into(self, out: &mut Output<Self>) {
                self.hash_into(out);
            }
        }

        impl FixedOutputReset for $name {
            #[inline]
            fn finalize_into_reset(&mut self, out: &mut Output<Self>) {
                self.hash_into(out);
                self.wipe();
            }
        }
    };
}
