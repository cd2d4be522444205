// Jaccard similarity between route-slip vocabularies.
//
// The score is the number of words present in both slips divided by the
// number of words present in at least one:
//
//   |A ∩ B| / |A ∪ B|
//
// 0.0 means the slips share no vocabulary at all, 1.0 means they read as
// the same ride. Most real pairs land somewhere between.

use crate::words::WordSet;

/// Word-overlap fraction between two slips, in [0.0, 1.0].
///
/// Two empty sets score 1.0: contentless slips are treated as the same
/// ride, not as a division by zero.
pub fn jaccard(a: &WordSet, b: &WordSet) -> f64 {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;
    if union == 0 {
        return 1.0;
    }
    intersection as f64 / union as f64
}
