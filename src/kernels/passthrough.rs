//! This module contains the pure, stateless kernel for the identity transform.
//!
//! This is the guaranteed-minimum codec behind the byte transformer: a
//! byte-for-byte copy with no size reduction. It exists as a baseline for
//! measurements and as the right choice for payloads known to be
//! incompressible. It is trivially panic-free.

use crate::error::BridgeError;

/// Returns a fresh, byte-identical copy of the input.
pub fn encode(input_bytes: &[u8]) -> Result<Vec<u8>, BridgeError> {
    Ok(input_bytes.to_vec())
}

/// The inverse of `encode`. Identical by construction.
pub fn decode(input_bytes: &[u8]) -> Result<Vec<u8>, BridgeError> {
    Ok(input_bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_is_identity() {
        let original: Vec<u8> = (0..=255).collect();
        let encoded = encode(&original).unwrap();
        assert_eq!(encoded, original);
        assert_eq!(decode(&encoded).unwrap(), original);
    }

    #[test]
    fn test_passthrough_empty_input() {
        assert!(encode(&[]).unwrap().is_empty());
        assert!(decode(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_passthrough_returns_fresh_buffer() {
        let original = vec![1u8, 2, 3];
        let encoded = encode(&original).unwrap();
        assert_ne!(original.as_ptr(), encoded.as_ptr());
    }
}
