// Machine-readable form of a computed sequence, for --json output.

use serde::Serialize;

use crate::similarity::matrix::SimilarityMatrix;
use crate::slips::Corpus;
use crate::tour::Tour;

/// A finished ordering, resolved back to slip names.
#[derive(Debug, Serialize)]
pub struct OrderReport {
    /// Number of route slips ordered
    pub slip_count: usize,
    /// Sum of similarities across consecutive slips (lower is better)
    pub path_similarity_sum: f64,
    /// Slips in recommended print order
    pub sequence: Vec<Leg>,
}

/// One slip in the sequence.
#[derive(Debug, Serialize)]
pub struct Leg {
    /// File name of the route slip
    pub name: String,
    /// Similarity to the slip printed just before this one; absent on the
    /// first leg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_to_previous: Option<f64>,
}

impl OrderReport {
    pub fn new(corpus: &Corpus, tour: &Tour, matrix: &SimilarityMatrix) -> Self {
        let sequence = tour
            .sequence
            .iter()
            .enumerate()
            .map(|(pos, &slip)| Leg {
                name: corpus.slips[slip].name.clone(),
                similarity_to_previous: (pos > 0)
                    .then(|| matrix.get(tour.sequence[pos - 1], slip)),
            })
            .collect();
        Self {
            slip_count: corpus.len(),
            path_similarity_sum: tour.similarity_sum,
            sequence,
        }
    }
}
