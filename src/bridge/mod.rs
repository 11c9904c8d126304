// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the sole public-facing API of the pulse-bridge library. It
// provides a stable, stateless surface that completely encapsulates the codec
// kernels and the clock. It is the authoritative boundary between the managed
// host and the native internals.
//
// Data Flow (Byte Transformer):
//
//   1. [FFI Shim (ffi::python)]            -> Receives a managed byte buffer
//         |
//         `-> marshals to `&[u8]`, releases the interpreter lock ->
//
//   2. [Stateless API (compress)]          -> Picks a codec from `BridgeConfig`
//         |
//         `-> a. Calls the codec kernel (`kernels::zstd` / `kernels::passthrough`)
//         |
//         `-> b. Wraps the kernel output in a self-describing frame (`format`)
//
//   3. [Stateless API (decompress)]        -> Parses the frame header
//         |
//         `-> dispatches to the codec named by the frame's tag, returns the
//             original bytes
//
// The remaining operations (`version`, `check_compatibility`,
// `serialize_health`, `nano_time`) are single calls with no internal flow;
// each delegates to its own module below.
//
// ====================================================================================
pub(crate) mod codec;
pub mod compat;
pub(crate) mod format;
pub mod health;
pub mod stateless_api;

// --- Low-Level Stateless API (for FFI and testing) ---
pub use stateless_api::{
    check_compatibility, compress, decompress, nano_time, serialize_health, version,
};
