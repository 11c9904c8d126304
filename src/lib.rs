//! This file is the root of the `pulse_bridge` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of the library (`bridge`, `kernels`,
//!     etc.) so the Rust compiler knows they exist.
//! 2.  Defining the `#[pymodule]` which acts as the main entry point when the
//!     compiled library is imported into the managed host.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The constant identity string returned by `get_version`. Built at compile
/// time, so it is byte-identical for the lifetime of a given build.
pub const VERSION_STRING: &str = concat!("pulse-bridge v", env!("CARGO_PKG_VERSION"));

/// The fixed component identifier tagging every diagnostic log line.
pub(crate) const LOG_TARGET: &str = "pulse_bridge";

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;
pub mod config;
pub mod kernels;

mod clock;
mod error;
mod ffi;
mod traits;

pub use error::BridgeError;
pub use traits::ByteCodec;

//==================================================================================
// 2. Python Module Definition
//==================================================================================
use pyo3::prelude::*;

/// The `pulse_bridge` Python module, containing all exposed bridge operations.
#[pymodule]
fn pulse_bridge(_py: Python, m: &PyModule) -> PyResult<()> {
    // --- The five boundary operations ---
    m.add_function(wrap_pyfunction!(ffi::get_version_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::check_compatibility_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::serialize_health_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::compress_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::nano_time_py, m)?)?;

    // --- The transformer's inverse and the diagnostics surface ---
    m.add_function(wrap_pyfunction!(ffi::decompress_py, m)?)?;
    m.add_function(wrap_pyfunction!(ffi::compatibility_report_py, m)?)?;

    // --- Expose version string as a module attribute ---
    m.add("__version__", VERSION)?;

    // --- Opt-in diagnostic logging ---
    m.add_function(wrap_pyfunction!(ffi::enable_verbose_logging_py, m)?)?;

    Ok(())
}
