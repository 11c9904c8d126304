// In: src/bridge/stateless_api.rs

//! The five bridge operations as pure, stateless free functions.
//!
//! This is the sole public Rust API of the crate; the FFI layer is a thin
//! marshalling shim over these functions. Nothing here holds state between
//! calls, retains a caller's buffer, or lets a failure escape: the only
//! fallible operation is `decompress`, which can observe corrupt frames.

use log::{info, warn};

use crate::bridge::{codec, format};
use crate::bridge::health::HealthRecord;
use crate::clock;
use crate::config::{BridgeConfig, CodecKind};
use crate::error::BridgeError;
use crate::{LOG_TARGET, VERSION_STRING};

/// Returns the constant identity string for this bridge build.
pub fn version() -> &'static str {
    info!(target: LOG_TARGET, "Native bridge version requested");
    VERSION_STRING
}

/// Returns whether every compatibility precondition holds on this host.
///
/// Absence of compatibility is communicated via `false`, never via an error.
pub fn check_compatibility() -> bool {
    info!(target: LOG_TARGET, "Checking bridge compatibility");
    super::compat::check_all()
}

/// Serializes one health record into its fixed single-line wire form.
pub fn serialize_health(
    theta: f64,
    cpu_health: f64,
    memory_health: f64,
    thermal_health: f64,
) -> String {
    HealthRecord::new(theta, cpu_health, memory_health, thermal_health).to_wire()
}

/// Transforms a payload through the configured codec, returning a
/// self-describing frame.
///
/// This operation is total: it succeeds for every input, including the empty
/// one. If the selected codec's kernel reports a failure, the payload is
/// stored through the passthrough codec instead, so the caller always gets a
/// decodable frame back rather than an error.
pub fn compress(input: &[u8], config: &BridgeConfig) -> Vec<u8> {
    match codec::for_config(config).compress(input) {
        Ok(payload) => format::encode_frame(config.codec, payload),
        Err(err) => {
            warn!(
                target: LOG_TARGET,
                "codec {:?} failed ({}); storing payload uncompressed",
                config.codec,
                err
            );
            format::encode_frame(CodecKind::Passthrough, input.to_vec())
        }
    }
}

/// The inverse of `compress`. Reads the frame header to find the codec that
/// produced the payload and applies its decompression side.
pub fn decompress(input: &[u8]) -> Result<Vec<u8>, BridgeError> {
    let (kind, payload) = format::parse_frame(input)?;
    codec::for_kind(kind).decompress(payload)
}

/// Returns the process-wide monotonic nanosecond tick.
pub fn nano_time() -> u64 {
    clock::nano_time()
}
