// The precomputed similarity table over the whole corpus.
//
// Every ordered pair of distinct slips gets an entry — N×(N−1) of them —
// so the greedy walk can look up either direction in O(1). Jaccard is
// symmetric, but both directions are stored anyway because the walk asks
// for (last placed, candidate) with the roles swapping every step. O(N²)
// comparisons is fine for the tens of slips a club prints; this table is
// not built for thousands.

use std::collections::HashMap;

use crate::similarity::jaccard::jaccard;
use crate::slips::Corpus;

/// Similarity for every ordered pair of distinct slips, keyed by corpus
/// index. A tuple key, not a joined string — slip names containing any
/// particular delimiter can never collide.
pub struct SimilarityMatrix {
    scores: HashMap<(usize, usize), f64>,
    slip_count: usize,
}

impl SimilarityMatrix {
    /// Compare every slip against every other. The table is complete and
    /// read-only from here on.
    pub fn build(corpus: &Corpus) -> Self {
        let n = corpus.len();
        let mut scores = HashMap::with_capacity(n * n.saturating_sub(1));
        for a in 0..n {
            for b in 0..n {
                if a != b {
                    scores.insert((a, b), jaccard(&corpus.slips[a].words, &corpus.slips[b].words));
                }
            }
        }
        Self {
            scores,
            slip_count: n,
        }
    }

    /// Similarity between slips `from` and `to`.
    ///
    /// Both must be distinct in-range corpus indices; the table holds every
    /// such pair by construction, so a miss is a caller bug and panics.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.scores[&(from, to)]
    }

    /// Number of slips the table was built over.
    pub fn slip_count(&self) -> usize {
        self.slip_count
    }

    /// Number of directed entries — N×(N−1) for N slips.
    pub fn entry_count(&self) -> usize {
        self.scores.len()
    }
}
