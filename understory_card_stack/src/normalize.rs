// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Min-max normalization used to derive rotation and scale from drag distance.
//!
//! ```
//! use understory_card_stack::normalize::normalize;
//!
//! // Half way across a 400px span maps to 5 degrees of a 0..10 range.
//! assert_eq!(normalize(0.0, 400.0, 200.0, 0.0, 10.0), 5.0);
//!
//! // Values outside the span are clamped first.
//! assert_eq!(normalize(0.0, 400.0, 900.0, 0.9, 1.0), 1.0);
//! ```

use core::fmt;

/// Error returned by [`try_normalize`] when the output range is empty or inverted.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RangeError {
    /// Requested start of the output range.
    pub start: f64,
    /// Requested end of the output range.
    pub end: f64,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "output range start {} is not below its end {}",
            self.start, self.end
        )
    }
}

impl core::error::Error for RangeError {}

/// Clamps `value` into `[min, max]` and rescales it linearly into `[start, end]`.
///
/// A degenerate input span (`min == max`) maps everything to `start`.
///
/// # Panics
///
/// Panics if `start >= end`. Use [`try_normalize`] when the range comes from
/// untrusted input.
#[must_use]
pub fn normalize(min: f64, max: f64, value: f64, start: f64, end: f64) -> f64 {
    assert!(
        start < end,
        "normalize: start of range ({start}) must be below its end ({end})"
    );
    rescale(min, max, value, start, end)
}

/// Like [`normalize`] with the default `[0, 1]` output range.
#[must_use]
pub fn normalize_unit(min: f64, max: f64, value: f64) -> f64 {
    rescale(min, max, value, 0.0, 1.0)
}

/// Checked variant of [`normalize`].
pub fn try_normalize(
    min: f64,
    max: f64,
    value: f64,
    start: f64,
    end: f64,
) -> Result<f64, RangeError> {
    if start < end {
        Ok(rescale(min, max, value, start, end))
    } else {
        Err(RangeError { start, end })
    }
}

fn rescale(min: f64, max: f64, value: f64, start: f64, end: f64) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return start;
    }
    let clamped = value.clamp(min, max);
    (clamped - min) / span * (end - start) + start
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_range_bounds() {
        assert_eq!(normalize(10.0, 20.0, 10.0, 2.0, 4.0), 2.0);
        assert_eq!(normalize(10.0, 20.0, 20.0, 2.0, 4.0), 4.0);
    }

    #[test]
    fn values_outside_span_are_clamped() {
        assert_eq!(normalize(0.0, 100.0, -50.0, 0.0, 10.0), 0.0);
        assert_eq!(normalize(0.0, 100.0, 150.0, 0.0, 10.0), 10.0);
    }

    #[test]
    fn monotonic_within_span() {
        let mut last = f64::NEG_INFINITY;
        for step in 0..=20 {
            let v = normalize(0.0, 400.0, f64::from(step) * 20.0, 0.9, 1.0);
            assert!(v >= last, "normalize must not decrease: {v} < {last}");
            last = v;
        }
    }

    #[test]
    fn unit_range_default() {
        assert_eq!(normalize_unit(0.0, 8.0, 2.0), 0.25);
    }

    #[test]
    fn degenerate_span_maps_to_start() {
        assert_eq!(normalize(5.0, 5.0, 5.0, 0.9, 1.0), 0.9);
    }

    #[test]
    #[should_panic(expected = "must be below its end")]
    fn inverted_range_panics() {
        let _ = normalize(0.0, 1.0, 0.5, 1.0, 0.0);
    }

    #[test]
    fn try_normalize_rejects_equal_bounds() {
        assert_eq!(
            try_normalize(0.0, 1.0, 0.5, 1.0, 1.0),
            Err(RangeError {
                start: 1.0,
                end: 1.0
            })
        );
        assert_eq!(try_normalize(0.0, 1.0, 0.5, 0.0, 2.0), Ok(1.0));
    }
}
