//! Spiral parameters and the lenient number parsing that produces them.
//!
//! Input arrives as raw text from whatever form the host shows. Nothing is
//! rejected: text that isn't a number becomes NaN (for lengths and angles) or
//! zero (for counts), and the renderer copes with whatever comes out.

use serde::{Deserialize, Serialize};

/// Numeric inputs for one spiral.
///
/// Counts are signed on purpose. A negative count is representable and simply
/// means "loop zero times".
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SpiralParams {
    /// User turn angle in degrees. The heading changes by `180 - turn` per segment.
    pub turn_angle_degrees: f64,
    /// Length of the first segment of every repeat.
    pub initial_step: f64,
    /// Added to the step after each segment.
    pub step_increment: f64,
    /// Segments drawn per repeat.
    pub segments_per_repeat: i64,
    /// Number of repeats.
    pub repeats: i64,
}

impl SpiralParams {
    pub fn new(
        turn_angle_degrees: f64,
        initial_step: f64,
        step_increment: f64,
        segments_per_repeat: i64,
        repeats: i64,
    ) -> Self {
        Self {
            turn_angle_degrees,
            initial_step,
            step_increment,
            segments_per_repeat,
            repeats,
        }
    }

    /// Convert raw form text into parameters.
    pub fn from_inputs(inputs: &SpiralInputs) -> Self {
        Self::new(
            parse_float(&inputs.angle),
            parse_float(&inputs.initial_step),
            parse_float(&inputs.step_increment),
            parse_count(&inputs.segments),
            parse_count(&inputs.repeats),
        )
    }

    /// Segment loop bound with negatives treated as zero.
    #[inline]
    pub fn segment_count(&self) -> u64 {
        self.segments_per_repeat.max(0) as u64
    }

    /// Repeat loop bound with negatives treated as zero.
    #[inline]
    pub fn repeat_count(&self) -> u64 {
        self.repeats.max(0) as u64
    }

    /// Total number of segments the walk will produce.
    pub fn total_segments(&self) -> u64 {
        self.segment_count().saturating_mul(self.repeat_count())
    }
}

impl Default for SpiralParams {
    fn default() -> Self {
        Self::from_inputs(&SpiralInputs::default())
    }
}

/// The five raw strings the host collects from its input fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpiralInputs {
    pub angle: String,
    pub initial_step: String,
    pub step_increment: String,
    pub segments: String,
    pub repeats: String,
}

impl Default for SpiralInputs {
    fn default() -> Self {
        Self {
            angle: "91".to_string(),
            initial_step: "5".to_string(),
            step_increment: "3".to_string(),
            segments: "150".to_string(),
            repeats: "1".to_string(),
        }
    }
}

/// Read the longest leading decimal number from `text`.
///
/// Leading whitespace is skipped, trailing garbage is ignored
/// (`"12.5px"` is 12.5) and text without a numeric prefix is NaN.
/// `Infinity` with an optional sign is accepted.
pub fn parse_float(text: &str) -> f64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = skip_digits(bytes, end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    // The exponent only counts if at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().unwrap_or(f64::NAN)
}

/// Read a leading base-10 integer from `text`.
///
/// `"12.9"` is 12, `"7abc"` is 7. Anything without leading digits is 0,
/// which keeps loops bounded by it from running at all. Values too large for
/// `i64` saturate.
pub fn parse_count(text: &str) -> i64 {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let (negative, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        Some(b'+') => (false, 1),
        _ => (false, 0),
    };

    let end = skip_digits(bytes, start);
    if end == start {
        return 0;
    }

    let magnitude = bytes[start..end].iter().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });

    if negative { -magnitude } else { magnitude }
}

fn skip_digits(bytes: &[u8], mut i: usize) -> usize {
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_float_plain_numbers() {
        assert_eq!(parse_float("144"), 144.0);
        assert_eq!(parse_float("  -2.5"), -2.5);
        assert_eq!(parse_float("+7"), 7.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("-3e2"), -300.0);
    }

    #[test]
    fn parse_float_ignores_trailing_text() {
        assert_eq!(parse_float("12.5px"), 12.5);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("2e+"), 2.0);
        assert_eq!(parse_float("3.0.1"), 3.0);
    }

    #[test]
    fn parse_float_infinity() {
        assert_eq!(parse_float("Infinity"), f64::INFINITY);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn parse_float_garbage_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("-").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("e5").is_nan());
    }

    #[test]
    fn parse_count_truncates_and_defaults_to_zero() {
        assert_eq!(parse_count("12"), 12);
        assert_eq!(parse_count("12.9"), 12);
        assert_eq!(parse_count(" 7abc"), 7);
        assert_eq!(parse_count("-4"), -4);
        assert_eq!(parse_count("+3"), 3);
        assert_eq!(parse_count(""), 0);
        assert_eq!(parse_count("x"), 0);
        assert_eq!(parse_count("-"), 0);
    }

    #[test]
    fn parse_count_saturates() {
        assert_eq!(parse_count("99999999999999999999999"), i64::MAX);
    }

    #[test]
    fn negative_counts_loop_zero_times() {
        let params = SpiralParams::new(90.0, 5.0, 1.0, -3, 4);
        assert_eq!(params.segment_count(), 0);
        assert_eq!(params.repeat_count(), 4);
        assert_eq!(params.total_segments(), 0);
    }

    #[test]
    fn from_inputs_passes_nan_through() {
        let inputs = SpiralInputs {
            angle: "nope".to_string(),
            initial_step: "5".to_string(),
            step_increment: "".to_string(),
            segments: "ten".to_string(),
            repeats: "2".to_string(),
        };
        let params = SpiralParams::from_inputs(&inputs);
        assert!(params.turn_angle_degrees.is_nan());
        assert_eq!(params.initial_step, 5.0);
        assert!(params.step_increment.is_nan());
        assert_eq!(params.segments_per_repeat, 0);
        assert_eq!(params.repeats, 2);
    }

    #[test]
    fn default_inputs_parse_cleanly() {
        let params = SpiralParams::default();
        assert_eq!(params, SpiralParams::new(91.0, 5.0, 3.0, 150, 1));
    }
}
