// In: src/bridge/health.rs

//! The health telemetry record and its compact wire encoding.
//!
//! The managed side compares these lines byte-for-byte across calls, so the
//! encoding is fully pinned: fixed key order, exactly three decimal digits
//! per value, `.` as the decimal separator (Rust formatting is
//! locale-independent), no whitespace. Identical inputs always produce the
//! identical output string.

//==================================================================================
// 1. The Record
//==================================================================================

/// The fixed four-field telemetry tuple crossing the boundary.
///
/// `theta` is an opaque real number for interchange; the bridge attaches no
/// semantics to it and enforces no range on any field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthRecord {
    pub theta: f64,
    pub cpu_health: f64,
    pub memory_health: f64,
    pub thermal_health: f64,
}

impl HealthRecord {
    pub fn new(theta: f64, cpu_health: f64, memory_health: f64, thermal_health: f64) -> Self {
        Self {
            theta,
            cpu_health,
            memory_health,
            thermal_health,
        }
    }

    /// Encodes the record as a single line:
    /// `{"theta":<v>,"cpu_health":<v>,"memory_health":<v>,"thermal_health":<v>}`.
    ///
    /// Finite values render as bare fixed-point numbers with three decimals,
    /// rounded to nearest (ties to even) on the exact binary value. Non-finite
    /// values render as the quoted tokens `"nan"`, `"inf"`, `"-inf"` so the
    /// line stays parseable; they never corrupt the schema or panic.
    pub fn to_wire(&self) -> String {
        format!(
            "{{\"theta\":{},\"cpu_health\":{},\"memory_health\":{},\"thermal_health\":{}}}",
            format_metric(self.theta),
            format_metric(self.cpu_health),
            format_metric(self.memory_health),
            format_metric(self.thermal_health)
        )
    }
}

/// Formats one metric value per the wire policy above.
fn format_metric(value: f64) -> String {
    if value.is_nan() {
        "\"nan\"".to_string()
    } else if value == f64::INFINITY {
        "\"inf\"".to_string()
    } else if value == f64::NEG_INFINITY {
        "\"-inf\"".to_string()
    } else {
        format!("{:.3}", value)
    }
}

//==================================================================================
// 2. Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_golden_line() {
        let record = HealthRecord::new(0.5, 0.987654, 0.75, 0.333);
        assert_eq!(
            record.to_wire(),
            "{\"theta\":0.500,\"cpu_health\":0.988,\"memory_health\":0.750,\"thermal_health\":0.333}"
        );
    }

    #[test]
    fn test_wire_is_deterministic() {
        let record = HealthRecord::new(1.0, 0.2, 0.3, 0.4);
        assert_eq!(record.to_wire(), record.to_wire());
    }

    #[test]
    fn test_wire_parses_as_json_for_finite_inputs() {
        let record = HealthRecord::new(12.3456, -0.5, 0.0, 99.9999);
        let parsed: serde_json::Value = serde_json::from_str(&record.to_wire()).unwrap();
        assert_eq!(parsed["cpu_health"], serde_json::json!(-0.5));
        // Key order is part of the contract, not just key presence.
        assert!(record.to_wire().starts_with("{\"theta\":"));
    }

    #[test]
    fn test_rounding_of_near_tie_values() {
        // 0.1235's nearest f64 lies just below the tie, so it rounds down;
        // 0.987654 rounds up normally. Both are pinned here so a formatting
        // change can never slip through silently.
        let record = HealthRecord::new(0.1235, 0.987654, 2.6775, 1.0005);
        assert_eq!(
            record.to_wire(),
            "{\"theta\":0.123,\"cpu_health\":0.988,\"memory_health\":2.678,\"thermal_health\":1.000}"
        );
    }

    #[test]
    fn test_non_finite_values_use_sentinel_tokens() {
        let record = HealthRecord::new(
            f64::NAN,
            f64::INFINITY,
            f64::NEG_INFINITY,
            0.25,
        );
        assert_eq!(
            record.to_wire(),
            "{\"theta\":\"nan\",\"cpu_health\":\"inf\",\"memory_health\":\"-inf\",\"thermal_health\":0.250}"
        );
        // The sentinel line must still parse as JSON.
        let parsed: serde_json::Value = serde_json::from_str(&record.to_wire()).unwrap();
        assert_eq!(parsed["theta"], serde_json::json!("nan"));
    }

    #[test]
    fn test_negative_and_large_values_keep_three_decimals() {
        let record = HealthRecord::new(-1.5, 1234.56789, 0.0005, -0.0);
        assert_eq!(
            record.to_wire(),
            "{\"theta\":-1.500,\"cpu_health\":1234.568,\"memory_health\":0.001,\"thermal_health\":-0.000}"
        );
    }
}
