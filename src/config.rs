// In: src/config.rs

//! The single source of truth for all bridge configuration.
//!
//! This module defines the unified `BridgeConfig` struct, which is designed to
//! be created once at the application boundary (e.g., from keyword arguments
//! on the managed side) and passed down to the codec layer. Centralizing the
//! settings here keeps the FFI surface free of magic strings and lets the
//! payload codec be swapped without touching any call site.

use serde::{Deserialize, Serialize};

//==================================================================================
// I. Core Configuration Enums
//==================================================================================

/// Selects the codec applied by the byte transformer.
///
/// The frame header records which codec produced a payload, so decompression
/// never needs this setting; it only guides the compression side.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CodecKind {
    /// A byte-for-byte identity transform. Useful as a baseline and for
    /// payloads known to be incompressible.
    Passthrough,

    /// **Default:** Zstandard, a general-purpose lossless compressor.
    #[default]
    Zstd,
}

/// Defines the trade-off between compression speed and final payload size.
///
/// This is the only knob the managed host is expected to turn. It maps onto a
/// concrete Zstandard level so callers never deal in raw level numbers.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompressionProfile {
    /// Prioritizes speed over size. Uses a low Zstd level.
    Fast,

    /// A balance between speed and size. This is the recommended default.
    #[default]
    Balanced,

    /// Prioritizes the smallest possible payload at the cost of CPU time.
    HighCompression,
}

impl CompressionProfile {
    /// The Zstandard compression level this profile maps to.
    pub fn zstd_level(self) -> i32 {
        match self {
            CompressionProfile::Fast => 1,
            CompressionProfile::Balanced => 3,
            CompressionProfile::HighCompression => 19,
        }
    }
}

//==================================================================================
// II. The Unified BridgeConfig
//==================================================================================

/// The unified configuration for a single transform call.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BridgeConfig {
    /// The codec applied by the byte transformer.
    #[serde(default)]
    pub codec: CodecKind,

    /// The speed/size trade-off guiding the codec.
    #[serde(default)]
    pub profile: CompressionProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_balanced_zstd() {
        let config = BridgeConfig::default();
        assert_eq!(config.codec, CodecKind::Zstd);
        assert_eq!(config.profile, CompressionProfile::Balanced);
    }

    #[test]
    fn test_profile_levels_are_ordered() {
        assert!(
            CompressionProfile::Fast.zstd_level()
                < CompressionProfile::Balanced.zstd_level()
        );
        assert!(
            CompressionProfile::Balanced.zstd_level()
                < CompressionProfile::HighCompression.zstd_level()
        );
    }

    #[test]
    fn test_config_serde_roundtrip_snake_case() {
        let config = BridgeConfig {
            codec: CodecKind::Passthrough,
            profile: CompressionProfile::HighCompression,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"passthrough\""));
        assert!(json.contains("\"high_compression\""));

        let back: BridgeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
