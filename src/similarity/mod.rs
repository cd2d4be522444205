// Similarity estimation — Jaccard scores and the precomputed pairwise table.

pub mod jaccard;
pub mod matrix;
