// Greedy sequencing of the route slips.
//
// One greedy walk per starting slip: from the last slip placed, always hop
// to the unvisited slip with the LOWEST similarity, so consecutive print
// sheets read as differently as possible. The best of the N walks wins.
// N greedy walks beat one because a bad forced start can poison a single
// walk; trying them all costs only O(N³) on a table that is already built.

use std::cmp::Ordering;

use crate::similarity::matrix::SimilarityMatrix;

/// A complete visiting order over the corpus and its score.
#[derive(Debug, Clone)]
pub struct Tour {
    /// Corpus indices in visiting order; every slip appears exactly once.
    pub sequence: Vec<usize>,
    /// Sum of similarities across consecutive pairs. Lower is better.
    pub similarity_sum: f64,
}

/// Sum the similarities along consecutive pairs of `sequence`.
pub fn path_similarity_sum(sequence: &[usize], matrix: &SimilarityMatrix) -> f64 {
    sequence
        .windows(2)
        .map(|pair| matrix.get(pair[0], pair[1]))
        .sum()
}

/// Run one greedy walk beginning at `start`: repeatedly append the
/// unvisited slip least similar to the last one placed. Ties go to the
/// lowest corpus index, so reruns over the same slips give the same order.
pub fn greedy_from(start: usize, matrix: &SimilarityMatrix) -> Tour {
    let n = matrix.slip_count();
    let mut sequence = Vec::with_capacity(n);
    let mut visited = vec![false; n];
    sequence.push(start);
    visited[start] = true;

    for _ in 1..n {
        let last = sequence[sequence.len() - 1];
        let next = (0..n).filter(|&c| !visited[c]).min_by(|&x, &y| {
            matrix
                .get(last, x)
                .partial_cmp(&matrix.get(last, y))
                .unwrap_or(Ordering::Equal)
        });
        if let Some(next) = next {
            sequence.push(next);
            visited[next] = true;
        }
    }

    let similarity_sum = path_similarity_sum(&sequence, matrix);
    Tour {
        sequence,
        similarity_sum,
    }
}

/// Try a greedy walk from every starting slip and keep the best one.
///
/// Only a strictly lower sum replaces the incumbent, so among equally good
/// tours the one from the earliest starting slip wins — rerunning on the
/// same corpus always prints the same sequence. `None` only when the
/// corpus is empty.
pub fn best_tour(matrix: &SimilarityMatrix) -> Option<Tour> {
    let mut best: Option<Tour> = None;
    for start in 0..matrix.slip_count() {
        let tour = greedy_from(start, matrix);
        match &best {
            Some(incumbent) if tour.similarity_sum >= incumbent.similarity_sum => {}
            _ => best = Some(tour),
        }
    }
    best
}
