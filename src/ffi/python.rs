// In: src/ffi/python.rs

use log::LevelFilter;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyDict};
use std::fs::OpenOptions;
use std::sync::Once;

use crate::bridge;
use crate::bridge::compat;
use crate::config::{BridgeConfig, CodecKind, CompressionProfile};

//==================================================================================
// I. Stateless Bridge API
//==================================================================================

/// Returns the constant bridge identity string.
#[pyfunction]
#[pyo3(name = "get_version")]
pub fn get_version_py() -> &'static str {
    bridge::version()
}

/// Returns whether the native bridge is usable by the calling managed layer.
/// Never raises: incompatibility is reported as `False`.
#[pyfunction]
#[pyo3(name = "check_compatibility")]
pub fn check_compatibility_py() -> bool {
    bridge::check_compatibility()
}

/// Returns the per-check compatibility outcomes as a `{name: bool}` dict,
/// in the checks' declaration order.
#[pyfunction]
#[pyo3(name = "compatibility_report")]
pub fn compatibility_report_py(py: Python) -> PyResult<PyObject> {
    let result_dict = PyDict::new(py);
    for (name, passed) in compat::report() {
        result_dict.set_item(name, passed)?;
    }
    Ok(result_dict.into())
}

/// Serializes one health record into its fixed single-line wire form.
#[pyfunction]
#[pyo3(name = "serialize_health")]
pub fn serialize_health_py(
    theta: f64,
    cpu_health: f64,
    memory_health: f64,
    thermal_health: f64,
) -> String {
    bridge::serialize_health(theta, cpu_health, memory_health, thermal_health)
}

/// Compresses a payload into a self-describing frame.
///
/// `data=None` is accepted and treated as an empty payload, keeping the
/// boundary crash-free for careless callers.
#[pyfunction]
#[pyo3(name = "compress", signature = (data, codec = "zstd", profile = "balanced"))]
pub fn compress_py<'py>(
    py: Python<'py>,
    data: Option<&[u8]>,
    codec: &str,
    profile: &str,
) -> PyResult<&'py PyBytes> {
    let config = parse_config(codec, profile)?;
    let input = data.unwrap_or(&[]);
    let framed = py.allow_threads(move || bridge::compress(input, &config));
    Ok(PyBytes::new(py, &framed))
}

/// Decompresses a frame produced by `compress`. Corrupt frames raise
/// `ValueError` rather than crashing the host.
#[pyfunction]
#[pyo3(name = "decompress", signature = (data))]
pub fn decompress_py<'py>(py: Python<'py>, data: Option<&[u8]>) -> PyResult<&'py PyBytes> {
    let input = data.unwrap_or(&[]);
    if input.is_empty() {
        // An absent or empty buffer is a valid zero-length payload.
        return Ok(PyBytes::new(py, &[]));
    }
    let restored = py.allow_threads(move || bridge::decompress(input))?;
    Ok(PyBytes::new(py, &restored))
}

/// Returns the process-wide monotonic nanosecond tick.
#[pyfunction]
#[pyo3(name = "nano_time")]
pub fn nano_time_py() -> u64 {
    bridge::nano_time()
}

//==================================================================================
// II. Argument Parsing
//==================================================================================

/// Parses the string arguments from the managed side into a `BridgeConfig`.
fn parse_config(codec: &str, profile: &str) -> PyResult<BridgeConfig> {
    let parsed_codec = match codec.to_lowercase().as_str() {
        "passthrough" => CodecKind::Passthrough,
        "zstd" => CodecKind::Zstd,
        _ => {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Invalid codec. Must be 'passthrough' or 'zstd'.",
            ))
        }
    };

    let parsed_profile = match profile.to_lowercase().as_str() {
        "fast" => CompressionProfile::Fast,
        "balanced" => CompressionProfile::Balanced,
        "high_compression" => CompressionProfile::HighCompression,
        _ => {
            return Err(PyErr::new::<pyo3::exceptions::PyValueError, _>(
                "Invalid profile. Must be 'fast', 'balanced', or 'high_compression'.",
            ))
        }
    };

    Ok(BridgeConfig {
        codec: parsed_codec,
        profile: parsed_profile,
    })
}

//==================================================================================
// III. Logging Initialization
//==================================================================================

static INIT_LOGGER: Once = Once::new();

/// Opt-in diagnostic logging for the managed host. Best-effort by contract:
/// a failure to open the requested log file falls back to stderr instead of
/// raising, and repeated calls are no-ops.
#[pyfunction]
#[pyo3(name = "enable_verbose_logging", signature = (log_file = None))]
pub fn enable_verbose_logging_py(log_file: Option<String>) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(&filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(err) => {
                    eprintln!(
                        "pulse-bridge: could not open log file {}: {}; logging to stderr",
                        filename, err
                    );
                }
            }
        }

        let _ = builder.try_init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_accepts_known_names() {
        let config = parse_config("ZSTD", "High_Compression").unwrap();
        assert_eq!(config.codec, CodecKind::Zstd);
        assert_eq!(config.profile, CompressionProfile::HighCompression);
    }

    #[test]
    fn test_parse_config_rejects_unknown_codec() {
        assert!(parse_config("lz4", "balanced").is_err());
        assert!(parse_config("zstd", "turbo").is_err());
    }
}
