// In: src/bridge/codec.rs

//! The swappable payload codecs behind the byte transformer.
//!
//! Each codec implements the `ByteCodec` capability pair and delegates to the
//! pure kernel of the same name. Selection happens in two places: the
//! compression side picks a codec from `BridgeConfig`, and the decompression
//! side picks one from the frame's codec tag, so a payload always decodes
//! with the codec that produced it.

use crate::config::{BridgeConfig, CodecKind, CompressionProfile};
use crate::error::BridgeError;
use crate::kernels;
use crate::traits::ByteCodec;

//==================================================================================
// 1. Codec Implementations
//==================================================================================

/// The identity codec. The guaranteed-minimum transformation.
pub struct PassthroughCodec;

impl ByteCodec for PassthroughCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, BridgeError> {
        kernels::passthrough::encode(input)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, BridgeError> {
        kernels::passthrough::decode(input)
    }
}

/// The Zstandard codec at a fixed compression level.
pub struct ZstdCodec {
    level: i32,
}

impl ZstdCodec {
    pub fn new(level: i32) -> Self {
        Self { level }
    }

    pub fn from_profile(profile: CompressionProfile) -> Self {
        Self::new(profile.zstd_level())
    }
}

impl ByteCodec for ZstdCodec {
    fn compress(&self, input: &[u8]) -> Result<Vec<u8>, BridgeError> {
        kernels::zstd::encode(input, self.level)
    }

    fn decompress(&self, input: &[u8]) -> Result<Vec<u8>, BridgeError> {
        kernels::zstd::decode(input)
    }
}

//==================================================================================
// 2. Codec Selection
//==================================================================================

/// The codec a `BridgeConfig` asks for, on the compression side.
pub fn for_config(config: &BridgeConfig) -> Box<dyn ByteCodec> {
    match config.codec {
        CodecKind::Passthrough => Box::new(PassthroughCodec),
        CodecKind::Zstd => Box::new(ZstdCodec::from_profile(config.profile)),
    }
}

/// The codec a frame tag asks for, on the decompression side. The level is
/// irrelevant when decoding, so the default profile is used.
pub fn for_kind(kind: CodecKind) -> Box<dyn ByteCodec> {
    match kind {
        CodecKind::Passthrough => Box::new(PassthroughCodec),
        CodecKind::Zstd => Box::new(ZstdCodec::from_profile(CompressionProfile::default())),
    }
}
