//! Gap repair for filter-safe series
//!
//! A gap (missing sample) must not reach the filter, but its position must
//! survive into the output. `repair` produces a dense series the filter can
//! consume plus the list of gap positions; `restore` puts the gaps back after
//! filtering. The filtered values at gap positions are discarded: the filter
//! saw the interpolated stand-in (keeping its delay line in phase for the
//! genuine samples that follow), but the emitted value stays missing.

/// Replace each gap with an interpolated stand-in.
///
/// The replacement is the mean of the immediate neighbors when both are
/// present, the one present neighbor otherwise, and 0.0 when neither is.
/// Neighbors are read from the *original* series, so consecutive gaps do not
/// chain off each other's repairs.
///
/// Returns the dense series and the ordered gap positions.
pub fn repair(series: &[Option<f64>]) -> (Vec<f64>, Vec<usize>) {
    let mut safe = Vec::with_capacity(series.len());
    let mut gaps = Vec::new();

    for (index, sample) in series.iter().enumerate() {
        match sample {
            Some(value) => safe.push(*value),
            None => {
                gaps.push(index);
                let before = if index > 0 { series[index - 1] } else { None };
                let after = series.get(index + 1).copied().flatten();
                safe.push(interpolate(before, after));
            }
        }
    }

    (safe, gaps)
}

fn interpolate(before: Option<f64>, after: Option<f64>) -> f64 {
    match (before, after) {
        (Some(b), Some(a)) => (b + a) / 2.0,
        (Some(b), None) => b,
        (None, Some(a)) => a,
        (None, None) => 0.0,
    }
}

/// Re-mark the recorded gap positions in a filtered series.
///
/// Positions not listed in `gaps` pass through untouched.
pub fn restore(filtered: Vec<f64>, gaps: &[usize]) -> Vec<Option<f64>> {
    let mut output: Vec<Option<f64>> = filtered.into_iter().map(Some).collect();
    for &index in gaps {
        output[index] = None;
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repair_interpolates_between_neighbors() {
        let (safe, gaps) = repair(&[Some(1.0), None, Some(3.0)]);

        assert_eq!(safe, vec![1.0, 2.0, 3.0]);
        assert_eq!(gaps, vec![1]);
    }

    #[test]
    fn test_repair_uses_original_neighbors_not_repaired_ones() {
        // Index 0 has no valid neighbor on either side (index 1 is itself a
        // gap in the original), so it becomes 0.0. Index 1 sees only the
        // original right neighbor 5.0; the freshly repaired 0.0 at index 0
        // must not count.
        let (safe, gaps) = repair(&[None, None, Some(5.0)]);

        assert_eq!(safe, vec![0.0, 5.0, 5.0]);
        assert_eq!(gaps, vec![0, 1]);
    }

    #[test]
    fn test_repair_single_neighbor_cases() {
        // Gap at the end: only the left neighbor applies
        let (safe, _) = repair(&[Some(4.0), None]);
        assert_eq!(safe, vec![4.0, 4.0]);

        // Gap at the start: only the right neighbor applies
        let (safe, _) = repair(&[None, Some(7.0)]);
        assert_eq!(safe, vec![7.0, 7.0]);

        // All gaps: nothing to lean on
        let (safe, gaps) = repair(&[None, None]);
        assert_eq!(safe, vec![0.0, 0.0]);
        assert_eq!(gaps, vec![0, 1]);
    }

    #[test]
    fn test_repair_is_noop_without_gaps() {
        let (safe, gaps) = repair(&[Some(1.0), Some(-2.0), Some(3.5)]);

        assert_eq!(safe, vec![1.0, -2.0, 3.5]);
        assert!(gaps.is_empty());
    }

    #[test]
    fn test_restore_reinstates_gaps_regardless_of_values() {
        let (_, gaps) = repair(&[Some(1.0), None, Some(3.0), None]);

        // Whatever the filter produced at the gap positions is discarded
        let restored = restore(vec![9.9, 8.8, 7.7, 6.6], &gaps);
        assert_eq!(restored, vec![Some(9.9), None, Some(7.7), None]);
    }
}
