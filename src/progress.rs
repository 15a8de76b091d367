//! Mapping of elapsed time onto a row of equal progress segments ("ends").

use serde::{Deserialize, Serialize};

/// Smallest total the mapper will divide by.
const MIN_TOTAL_SECONDS: f64 = 1e-9;

/// Point-in-time progress derived from elapsed/total/segment count.
///
/// Never stored; recompute it whenever a fresh reading is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSnapshot {
    pub elapsed_seconds: f64,
    pub remaining_seconds: f64,
    /// `elapsed / total`, clamped to `[0, 1]`
    pub fraction: f64,
    /// `fraction * num_ends`
    pub end_units: f64,
    pub full_segments: u32,
    /// Fractional part of `end_units`, in `[0, 1)`
    pub partial_fill: f64,
    /// Segment the pointer sits over; always a real segment
    pub current_segment_index: u32,
    pub num_ends: u32,
}

/// Compute progress for `elapsed` seconds of a `total`-second run split into
/// `num_ends` segments.
///
/// Once elapsed reaches total every segment is full and the pointer stays on
/// the last one.
pub fn compute_progress(elapsed: f64, total: f64, num_ends: u32) -> ProgressSnapshot {
    let num_ends = num_ends.max(1);
    let total = total.max(MIN_TOTAL_SECONDS);
    let elapsed = if elapsed.is_finite() { elapsed.max(0.0) } else { 0.0 };

    let fraction = (elapsed / total).clamp(0.0, 1.0);
    let end_units = fraction * f64::from(num_ends);
    let whole = end_units.floor();
    let full_segments = whole as u32;
    let partial_fill = end_units - whole;

    ProgressSnapshot {
        elapsed_seconds: elapsed,
        remaining_seconds: (total - elapsed).max(0.0),
        fraction,
        end_units,
        full_segments,
        partial_fill,
        current_segment_index: full_segments.min(num_ends - 1),
        num_ends,
    }
}

impl ProgressSnapshot {
    /// Fill ratio of segment `index`: 1 before the boundary, the partial fill
    /// on it, 0 after.
    pub fn segment_fill(&self, index: u32) -> f64 {
        if index >= self.num_ends {
            return 0.0;
        }
        match index.cmp(&self.full_segments) {
            std::cmp::Ordering::Less => 1.0,
            std::cmp::Ordering::Equal => self.partial_fill,
            std::cmp::Ordering::Greater => 0.0,
        }
    }

    /// Fill ratios for every segment, left to right
    pub fn segment_fills(&self) -> Vec<f64> {
        (0..self.num_ends).map(|i| self.segment_fill(i)).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.fraction >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-3;

    #[test]
    fn boundary_lands_exactly_on_second_segment() {
        let p = compute_progress(900.0, 7200.0, 8);
        assert_eq!(p.fraction, 0.125);
        assert_eq!(p.end_units, 1.0);
        assert_eq!(p.full_segments, 1);
        assert_eq!(p.partial_fill, 0.0);
        assert_eq!(p.current_segment_index, 1);
        assert_eq!(p.segment_fills(), vec![1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn partial_fill_inside_second_segment() {
        let p = compute_progress(1000.0, 7200.0, 8);
        assert!((p.fraction - 0.1389).abs() < TOLERANCE);
        assert!((p.end_units - 1.111).abs() < TOLERANCE);
        assert_eq!(p.full_segments, 1);
        assert!((p.partial_fill - 0.111).abs() < TOLERANCE);
        assert_eq!(p.current_segment_index, 1);
        assert!((p.segment_fill(1) - p.partial_fill).abs() < f64::EPSILON);
        assert_eq!(p.segment_fill(2), 0.0);
    }

    #[test]
    fn finished_run_fills_everything_and_pins_pointer_to_last() {
        let p = compute_progress(7200.0, 7200.0, 8);
        assert_eq!(p.fraction, 1.0);
        assert_eq!(p.full_segments, 8);
        assert_eq!(p.current_segment_index, 7);
        assert_eq!(p.remaining_seconds, 0.0);
        assert!(p.is_complete());
        assert!(p.segment_fills().iter().all(|&f| f == 1.0));
        assert_eq!(p.segment_fill(8), 0.0);
    }

    #[test]
    fn overrun_behaves_like_finished_run() {
        let p = compute_progress(9000.0, 7200.0, 8);
        assert_eq!(p.fraction, 1.0);
        assert_eq!(p.current_segment_index, 7);
        assert_eq!(p.segment_fills().len(), 8);
    }

    #[test]
    fn fraction_and_pointer_stay_in_range() {
        for num_ends in [1u32, 2, 3, 7, 8, 13] {
            let total = 7200.0;
            let mut elapsed = 0.0;
            while elapsed <= total {
                let p = compute_progress(elapsed, total, num_ends);
                assert!((0.0..=1.0).contains(&p.fraction));
                assert!(p.current_segment_index < num_ends);
                assert!((0.0..1.0).contains(&p.partial_fill));
                elapsed += 37.5;
            }
        }
    }

    #[test]
    fn degenerate_inputs_are_guarded() {
        let p = compute_progress(-5.0, 0.0, 0);
        assert_eq!(p.fraction, 0.0);
        assert_eq!(p.num_ends, 1);
        assert_eq!(p.current_segment_index, 0);

        let p = compute_progress(f64::NAN, 60.0, 4);
        assert_eq!(p.fraction, 0.0);
    }

    #[test]
    fn changing_segment_count_reuses_elapsed() {
        let before = compute_progress(1800.0, 7200.0, 8);
        let after = compute_progress(1800.0, 7200.0, 4);
        assert_eq!(before.fraction, after.fraction);
        assert_eq!(before.full_segments, 2);
        assert_eq!(after.full_segments, 1);
        assert_eq!(after.segment_fills().len(), 4);
    }
}
