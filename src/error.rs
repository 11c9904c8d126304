// In: src/error.rs

//! This module defines the single, unified error type for the entire bridge.
//! It uses the `thiserror` crate to provide ergonomic, context-aware error handling.
//!
//! Note that most of the bridge surface is infallible by contract: only the
//! decompression inverse can observe corrupt input, and even then the failure
//! is converted into a managed-side exception at the FFI layer rather than
//! unwinding across the boundary.

use pyo3::PyErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BridgeError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to the bridge's logic)
    // =========================================================================
    #[error("Payload frame is malformed: {0}")]
    FrameFormatError(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === Low-Level Kernel Errors
    // =========================================================================
    #[error("Zstd operation failed: {0}")]
    ZstdError(String),

    /// An error for Python FFI (Foreign Function Interface) operations.
    #[error("FFI operation failed: {0}")]
    FfiError(String), // PyErr doesn't impl Error, so we can't use #[from] here.
}

// =============================================================================
// === Manual `From` Implementations ===
// =============================================================================

impl From<PyErr> for BridgeError {
    fn from(err: PyErr) -> Self {
        BridgeError::FfiError(err.to_string())
    }
}

impl From<BridgeError> for PyErr {
    fn from(err: BridgeError) -> PyErr {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}
