// In: src/clock.rs

//! A monotonic nanosecond clock for the bridge.
//!
//! The managed host uses these ticks to order telemetry events and to measure
//! intervals across the boundary, so the source must be immune to wall-clock
//! adjustments. Ticks count from a process-local anchor captured on first
//! use; they are meaningless across processes or reboots.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use once_cell::sync::Lazy;

/// The process-local epoch. Captured once, on the first call to `nano_time`.
static ANCHOR: Lazy<Instant> = Lazy::new(Instant::now);

/// The highest tick handed out so far, shared by all threads.
static LAST_TICK: AtomicU64 = AtomicU64::new(0);

/// Returns a nanosecond tick that never decreases within this process.
///
/// The raw reading comes from `Instant`, which is monotonic per the platform
/// contract. The `fetch_max` pass additionally makes the *returned* sequence
/// non-decreasing across threads: a caller can never observe a tick smaller
/// than one already returned to any other caller.
pub fn nano_time() -> u64 {
    let raw = ANCHOR.elapsed().as_nanos();
    // A u64 of nanoseconds covers ~584 years of process uptime.
    let raw = if raw > u64::MAX as u128 {
        u64::MAX
    } else {
        raw as u64
    };
    let prev = LAST_TICK.fetch_max(raw, Ordering::AcqRel);
    raw.max(prev)
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nano_time_is_non_decreasing_in_tight_loop() {
        let mut last = nano_time();
        for _ in 0..10_000 {
            let now = nano_time();
            assert!(now >= last, "tick went backwards: {} < {}", now, last);
            last = now;
        }
    }

    #[test]
    fn test_nano_time_advances_eventually() {
        let start = nano_time();
        // Spin until the clock moves; resolution coarser than one loop
        // iteration is fine, a frozen clock is not.
        let mut now = nano_time();
        for _ in 0..1_000_000 {
            now = nano_time();
            if now > start {
                break;
            }
        }
        assert!(now > start, "clock did not advance over a spin loop");
    }

    #[test]
    fn test_nano_time_is_non_decreasing_across_threads() {
        use std::thread;

        let handles: Vec<_> = (0..2)
            .map(|_| {
                thread::spawn(|| {
                    let mut ticks = Vec::with_capacity(1_000);
                    for _ in 0..1_000 {
                        ticks.push(nano_time());
                    }
                    ticks
                })
            })
            .collect();

        let mut max_seen = 0u64;
        for handle in handles {
            let ticks = handle.join().unwrap();
            assert_eq!(ticks.len(), 1_000);
            // Each thread's own view of the shared clock is non-decreasing.
            assert!(ticks.windows(2).all(|w| w[0] <= w[1]));
            max_seen = max_seen.max(*ticks.last().unwrap());
        }

        // A read taken after both threads finished dominates everything
        // they recorded.
        assert!(nano_time() >= max_seen);
    }
}
