//! Torben-style approximate median selection.
//!
//! Finds the lower median of a sample slice by bisecting on value rather than
//! sorting: each iteration partitions the samples around a pivot guess and
//! narrows the search interval toward whichever side still holds a majority.
//! The slice is never reordered, so each pass is O(n) with no allocation.

/// Outcome of one partition-counting pass over the samples at a pivot guess.
///
/// Captures everything the selection step needs, so the search loop never
/// depends on values left over from an earlier iteration.
#[derive(Debug, Clone, Copy)]
struct Partition {
    /// The pivot this pass counted against.
    guess: f32,
    /// Samples strictly below the pivot.
    less: usize,
    /// Samples strictly above the pivot.
    greater: usize,
    /// Samples exactly equal to the pivot.
    equal: usize,
    /// Largest sample strictly below the pivot.
    max_lt_guess: f32,
    /// Smallest sample strictly above the pivot.
    min_gt_guess: f32,
}

impl Partition {
    /// Counts `values` against the midpoint of `[min, max]`.
    fn scan(values: &[f32], min: f32, max: f32) -> Self {
        let mut part = Partition {
            guess: (min + max) / 2.0,
            less: 0,
            greater: 0,
            equal: 0,
            max_lt_guess: min,
            min_gt_guess: max,
        };

        for &v in values {
            if v < part.guess {
                part.less += 1;
                if v > part.max_lt_guess {
                    part.max_lt_guess = v;
                }
            } else if v > part.guess {
                part.greater += 1;
                if v < part.min_gt_guess {
                    part.min_gt_guess = v;
                }
            } else {
                part.equal += 1;
            }
        }

        part
    }

    /// True once neither side of the pivot holds a strict majority, which
    /// places the median at or immediately adjacent to the pivot.
    fn is_settled(&self, half: usize) -> bool {
        self.less <= half && self.greater <= half
    }

    /// Picks the median out of a settled partition.
    fn select(&self, half: usize) -> f32 {
        if self.less >= half {
            self.max_lt_guess
        } else if self.less + self.equal >= half {
            self.guess
        } else {
            self.min_gt_guess
        }
    }
}

/// Selects the lower median of `values` without sorting.
///
/// Returns the sample that would sit at index `(n + 1) / 2 - 1` of the sorted
/// slice. For even lengths this is the lower of the two central samples, not
/// their mean; the result is always one of the input samples. The pipeline
/// depends on this exact tie-break to keep hash bits reproducible.
///
/// Behavior is unspecified if `values` contains NaN or infinities.
///
/// # Arguments
/// * `values` - Sample buffer, at least one element, unmodified by the call
///
/// # Panics
/// Panics if `values` is empty.
pub fn torben_median(values: &[f32]) -> f32 {
    assert!(
        !values.is_empty(),
        "torben_median requires at least one sample"
    );

    let mut min = values[0];
    let mut max = values[0];
    for &v in &values[1..] {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }

    let half = (values.len() + 1) / 2;
    loop {
        let part = Partition::scan(values, min, max);
        if part.is_settled(half) {
            return part.select(half);
        }

        // Each narrowing step moves a bound onto an actual sample value, so
        // the interval shrinks strictly and the loop terminates.
        if part.less > part.greater {
            max = part.max_lt_guess;
        } else {
            min = part.min_gt_guess;
        }
    }
}
