//! Pairwise clash detection over sounding partials.
//!
//! The rule is a fixed threshold heuristic: two partials clash when they are
//! closer than [`ABS_CLASH_HZ`] in absolute terms, or closer than
//! [`REL_CLASH_SEMITONES`] as an interval. It is not a roughness model.

use serde::{Deserialize, Serialize};

use crate::partial::ActivePartial;
use crate::pitch::semitone_distance;
use crate::state::IsolationSelection;

/// Absolute proximity threshold (strict), Hz.
pub const ABS_CLASH_HZ: f64 = 30.0;

/// Relative proximity threshold (strict), semitones. A bit wider than a minor second.
pub const REL_CLASH_SEMITONES: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClashRecord {
    pub a: ActivePartial,
    pub b: ActivePartial,
    /// `|a.frequency - b.frequency|`
    pub abs_diff_hz: f64,
    /// `12 * log2(a.frequency / b.frequency)`, signed.
    pub rel_diff_semitones: f64,
}

impl ClashRecord {
    /// The isolation selection that auditions this clash.
    pub fn selection(&self) -> IsolationSelection {
        IsolationSelection::new(self.a.partial_ref(), self.b.partial_ref())
    }
}

/// Threshold rule on already-measured differences.
pub fn exceeds_threshold(abs_diff_hz: f64, rel_diff_semitones: f64) -> bool {
    abs_diff_hz < ABS_CLASH_HZ || rel_diff_semitones.abs() < REL_CLASH_SEMITONES
}

/// (absolute difference in Hz, signed difference in semitones)
pub fn measure(freq_a: f64, freq_b: f64) -> (f64, f64) {
    ((freq_a - freq_b).abs(), semitone_distance(freq_a, freq_b))
}

pub fn is_clash(freq_a: f64, freq_b: f64) -> bool {
    let (abs_diff, rel_diff) = measure(freq_a, freq_b);
    exceeds_threshold(abs_diff, rel_diff)
}

/// Every clashing unordered pair `(i, j)`, `i < j`, in enumeration order:
/// `i` ascending, then `j` ascending. O(n²), n is small.
pub fn analyze(partials: &[ActivePartial]) -> Vec<ClashRecord> {
    let mut clashes = Vec::new();
    for (i, a) in partials.iter().enumerate() {
        for b in &partials[i + 1..] {
            let (abs_diff_hz, rel_diff_semitones) = measure(a.frequency, b.frequency);
            if exceeds_threshold(abs_diff_hz, rel_diff_semitones) {
                clashes.push(ClashRecord {
                    a: *a,
                    b: *b,
                    abs_diff_hz,
                    rel_diff_semitones,
                });
            }
        }
    }
    clashes
}
