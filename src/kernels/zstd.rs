//! This module contains the pure, stateless, and performant kernels for performing
//! Zstandard compression and decompression.
//!
//! This is the real codec behind the bridge's byte transformer. It takes an
//! opaque payload from the managed side and applies a high-performance,
//! modern entropy coder to reduce its size before cross-boundary transfer.
//! This module is a safe, panic-free wrapper around the `zstd` crate.

use std::io::Write;

use crate::error::BridgeError;

//==================================================================================
// 1. Public API (Performant, Decoupled)
//==================================================================================

/// Compresses a byte slice, prepending the uncompressed length.
///
/// The 8-byte little-endian length header lets `decode` pre-allocate the
/// output buffer and verify the stream reconstructed completely.
pub fn encode(input_bytes: &[u8], level: i32) -> Result<Vec<u8>, BridgeError> {
    if input_bytes.is_empty() {
        return Ok(Vec::new());
    }

    let mut output_buf = Vec::with_capacity(input_bytes.len());

    let uncompressed_len: u64 = input_bytes.len() as u64;
    output_buf.extend_from_slice(&uncompressed_len.to_le_bytes());

    let mut encoder = zstd::stream::Encoder::new(&mut output_buf, level)
        .map_err(|e| BridgeError::ZstdError(e.to_string()))?;
    encoder
        .write_all(input_bytes)
        .map_err(|e| BridgeError::ZstdError(e.to_string()))?;

    // `finish` is essential to finalize the Zstd frame.
    encoder
        .finish()
        .map_err(|e| BridgeError::ZstdError(e.to_string()))?;

    Ok(output_buf)
}

/// Decompresses a byte slice produced by `encode`, validating the length header.
pub fn decode(input_bytes: &[u8]) -> Result<Vec<u8>, BridgeError> {
    if input_bytes.is_empty() {
        return Ok(Vec::new());
    }

    if input_bytes.len() < 8 {
        return Err(BridgeError::ZstdError(
            "Input stream too short to contain size header.".to_string(),
        ));
    }
    let len_bytes: [u8; 8] = input_bytes[0..8]
        .try_into()
        .map_err(|_| BridgeError::InternalError("size header slice mismatch".to_string()))?;
    let uncompressed_len = u64::from_le_bytes(len_bytes) as usize;

    // The actual compressed data starts *after* the header.
    let compressed_data = &input_bytes[8..];

    let mut decompressed_data = Vec::with_capacity(uncompressed_len);
    zstd::stream::copy_decode(compressed_data, &mut decompressed_data)
        .map_err(|e| BridgeError::ZstdError(e.to_string()))?;

    if decompressed_data.len() != uncompressed_len {
        return Err(BridgeError::ZstdError(format!(
            "Decompressed size does not match header. Expected {}, got {}.",
            uncompressed_len,
            decompressed_data.len()
        )));
    }

    Ok(decompressed_data)
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zstd_roundtrip_simple_text() {
        let original_bytes =
            b"hello world, this is a test of zstd compression. hello world, this is a test."
                .to_vec();

        let compressed_bytes = encode(&original_bytes, 3).unwrap();

        assert!(compressed_bytes.len() < original_bytes.len());

        let decompressed_bytes = decode(&compressed_bytes).unwrap();

        assert_eq!(original_bytes, decompressed_bytes);
    }

    #[test]
    fn test_zstd_roundtrip_highly_compressible_data() {
        let original_bytes = vec![42u8; 10_000];

        let compressed_bytes = encode(&original_bytes, 5).unwrap();

        // The compressed size will be slightly larger due to the 8-byte header.
        assert!(compressed_bytes.len() < 50);

        let decompressed_bytes = decode(&compressed_bytes).unwrap();

        assert_eq!(original_bytes, decompressed_bytes);
    }

    #[test]
    fn test_zstd_roundtrip_empty_input() {
        let compressed = encode(&[], 3).unwrap();
        assert!(compressed.is_empty());
        assert_eq!(decode(&compressed).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_zstd_decompress_invalid_data() {
        let invalid_bytes = vec![1, 2, 3, 4, 5]; // This is too short to be valid.

        let result = decode(&invalid_bytes);

        assert!(result.is_err());
        if let Err(e) = result {
            assert!(e.to_string().contains("Zstd"));
        }
    }

    #[test]
    fn test_zstd_decompress_truncated_stream() {
        let original_bytes = vec![7u8; 4_096];
        let mut compressed = encode(&original_bytes, 3).unwrap();
        compressed.truncate(compressed.len() / 2);

        assert!(decode(&compressed).is_err());
    }
}
