// In: src/bridge/format.rs

//! Defines the wire structure and constants for transformed payloads.
//! This is the single source of truth for the payload frame: a fixed header
//! identifying the frame and the codec that produced it, followed by the
//! codec's own output. The header is what makes `decompress` self-describing,
//! so the managed side never has to remember which codec a payload used.

use crate::config::CodecKind;
use crate::error::BridgeError;

//==================================================================================
// I. Frame Constants
//==================================================================================

/// The magic number identifying a bridge payload frame.
pub const FRAME_MAGIC: &[u8; 4] = b"PBRF";
/// The current version of the payload frame format.
pub const FRAME_FORMAT_VERSION: u8 = 1;
/// Total size of the fixed frame header: magic + version + codec tag.
pub const FRAME_HEADER_LEN: usize = FRAME_MAGIC.len() + 2;

//==================================================================================
// II. Frame Assembly & Parsing
//==================================================================================

/// The single-byte wire tag for a codec.
pub fn codec_tag(codec: CodecKind) -> u8 {
    match codec {
        CodecKind::Passthrough => 0,
        CodecKind::Zstd => 1,
    }
}

/// The inverse of `codec_tag`. Unknown tags are a format error, not a panic.
pub fn codec_from_tag(tag: u8) -> Result<CodecKind, BridgeError> {
    match tag {
        0 => Ok(CodecKind::Passthrough),
        1 => Ok(CodecKind::Zstd),
        other => Err(BridgeError::FrameFormatError(format!(
            "unknown codec tag {}",
            other
        ))),
    }
}

/// Wraps a codec's output in a payload frame.
pub fn encode_frame(codec: CodecKind, codec_payload: Vec<u8>) -> Vec<u8> {
    let mut frame = Vec::with_capacity(FRAME_HEADER_LEN + codec_payload.len());
    frame.extend_from_slice(FRAME_MAGIC);
    frame.push(FRAME_FORMAT_VERSION);
    frame.push(codec_tag(codec));
    frame.extend_from_slice(&codec_payload);
    frame
}

/// Validates a payload frame and splits it into its codec and codec payload.
pub fn parse_frame(bytes: &[u8]) -> Result<(CodecKind, &[u8]), BridgeError> {
    if bytes.len() < FRAME_HEADER_LEN {
        return Err(BridgeError::FrameFormatError(format!(
            "frame of {} bytes is shorter than the {}-byte header",
            bytes.len(),
            FRAME_HEADER_LEN
        )));
    }
    if &bytes[0..4] != FRAME_MAGIC {
        return Err(BridgeError::FrameFormatError(
            "bad magic number".to_string(),
        ));
    }
    if bytes[4] != FRAME_FORMAT_VERSION {
        return Err(BridgeError::FrameFormatError(format!(
            "unsupported frame version {}",
            bytes[4]
        )));
    }
    let codec = codec_from_tag(bytes[5])?;
    Ok((codec, &bytes[FRAME_HEADER_LEN..]))
}

//==================================================================================
// III. Unit Tests
//==================================================================================
