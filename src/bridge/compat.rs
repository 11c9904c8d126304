// In: src/bridge/compat.rs

//! The compatibility predicate set behind `check_compatibility`.
//!
//! Compatibility is not a hardcoded constant: it is the logical AND of an
//! ordered sequence of named checks, each of which probes one precondition
//! the managed host relies on before invoking the rest of the bridge. Keeping
//! the checks as named entries makes each one independently runnable and
//! testable, and lets the host surface a per-check report for diagnostics.
//!
//! Every check is infallible by construction: a failed precondition yields
//! `false`, never an error or a panic.

use crate::clock;
use crate::kernels;

//==================================================================================
// 1. The Predicate Set
//==================================================================================

/// One named compatibility predicate.
pub struct CompatCheck {
    /// A stable, snake_case identifier reported to the managed side.
    pub name: &'static str,
    /// Runs the probe. Must not panic.
    pub run: fn() -> bool,
}

/// The ordered predicate sequence. Order is stable so reports are comparable
/// across calls and process runs.
pub const CHECKS: &[CompatCheck] = &[
    CompatCheck {
        name: "pointer_width_64",
        run: pointer_width_64,
    },
    CompatCheck {
        name: "little_endian",
        run: little_endian,
    },
    CompatCheck {
        name: "zstd_backend",
        run: zstd_backend,
    },
    CompatCheck {
        name: "monotonic_clock",
        run: monotonic_clock,
    },
];

/// Returns true only if every predicate in `CHECKS` passes.
pub fn check_all() -> bool {
    CHECKS.iter().all(|check| (check.run)())
}

/// Runs every predicate and pairs it with its outcome, in declaration order.
pub fn report() -> Vec<(&'static str, bool)> {
    CHECKS
        .iter()
        .map(|check| (check.name, (check.run)()))
        .collect()
}

//==================================================================================
// 2. The Individual Probes
//==================================================================================

/// Timestamps are 64-bit and buffers can exceed 4 GiB; a 32-bit host would
/// silently truncate both.
fn pointer_width_64() -> bool {
    cfg!(target_pointer_width = "64")
}

/// The payload frame and the zstd kernel's size header are little-endian on
/// the wire.
fn little_endian() -> bool {
    cfg!(target_endian = "little")
}

/// Round-trips a small probe buffer through the Zstandard kernel. This
/// exercises the linked backend rather than assuming its presence.
fn zstd_backend() -> bool {
    let probe: &[u8] = b"pulse-bridge zstd probe";
    match kernels::zstd::encode(probe, 1) {
        Ok(encoded) => matches!(kernels::zstd::decode(&encoded), Ok(decoded) if decoded == probe),
        Err(_) => false,
    }
}

/// Two consecutive clock reads must be ordered.
fn monotonic_clock() -> bool {
    let t1 = clock::nano_time();
    let t2 = clock::nano_time();
    t2 >= t1
}

//==================================================================================
// 3. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_all_is_referentially_consistent() {
        let first = check_all();
        for _ in 0..10 {
            assert_eq!(check_all(), first);
        }
    }

    #[test]
    fn test_report_covers_every_check_in_order() {
        let report = report();
        assert_eq!(report.len(), CHECKS.len());
        let names: Vec<&str> = report.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            vec![
                "pointer_width_64",
                "little_endian",
                "zstd_backend",
                "monotonic_clock"
            ]
        );
    }

    #[test]
    fn test_check_all_agrees_with_report() {
        let expected = report().iter().all(|(_, passed)| *passed);
        assert_eq!(check_all(), expected);
    }

    #[test]
    fn test_zstd_probe_passes_on_build_host() {
        // The kernel is statically linked; if this fails the build itself
        // is broken, which is exactly what the check exists to catch.
        assert!(zstd_backend());
    }

    #[test]
    fn test_clock_probe_passes() {
        assert!(monotonic_clock());
    }
}
