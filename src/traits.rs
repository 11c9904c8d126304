//! This module defines shared traits used across the bridge.

use crate::error::BridgeError;

/// The `{compress, decompress}` capability pair implemented by every payload
/// codec. Codecs are pure and stateless: the output is a fresh buffer that
/// depends only on the input, and no reference to the input is retained past
/// the call's return.
pub trait ByteCodec {
    /// Encodes `input` into a freshly allocated buffer.
    ///
    /// Must succeed for every input, including the empty one. Incompressible
    /// input may produce output larger than the input; it must never fail.
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, BridgeError>;

    /// Decodes a buffer previously produced by `compress` on the same codec.
    ///
    /// For all byte sequences `x`: `decompress(compress(x)) == x`. Corrupt
    /// input is rejected with an error, never a panic.
    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, BridgeError>;
}
