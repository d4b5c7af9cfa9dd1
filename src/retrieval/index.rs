//! Flat exhaustive vector index
//!
//! Exact scan under squared Euclidean distance, no approximation; corpora
//! are tens to low hundreds of chunks per document. The index is built once
//! per document and read-only afterwards; concurrent searches need no
//! locking.

use std::cmp::Ordering;

use crate::error::{Error, Result};

/// One search hit: the stored vector's position and its distance to the query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredHit {
    /// Index of the vector in insertion order
    pub index: usize,
    /// Squared Euclidean distance (smaller = more similar)
    pub distance: f32,
}

/// In-memory flat index over fixed-dimension vectors
#[derive(Debug, Default)]
pub struct FlatIndex {
    dimensions: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    /// Build an index over the given vectors. All vectors must share one
    /// dimension; an empty set builds an empty index that fails on search.
    pub fn build(vectors: Vec<Vec<f32>>) -> Result<Self> {
        let dimensions = vectors.first().map(|v| v.len()).unwrap_or(0);

        if let Some(position) = vectors.iter().position(|v| v.len() != dimensions) {
            return Err(Error::Internal(format!(
                "vector {} has dimension {}, expected {}",
                position,
                vectors[position].len(),
                dimensions
            )));
        }

        Ok(Self {
            dimensions,
            vectors,
        })
    }

    /// Number of stored vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector dimension (0 for an empty index)
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Return the `k` nearest vectors, ranked by ascending distance.
    ///
    /// `k` is clamped to `len()`. Ties keep insertion order (stable sort). An
    /// index holding zero vectors fails with `Error::EmptyIndex` rather than
    /// returning an empty result silently, so callers can tell "no document
    /// content" apart from "no matches".
    pub fn search(&self, query: &[f32], k: usize) -> Result<Vec<ScoredHit>> {
        if self.vectors.is_empty() {
            return Err(Error::EmptyIndex);
        }

        if query.len() != self.dimensions {
            return Err(Error::Internal(format!(
                "query dimension {} does not match index dimension {}",
                query.len(),
                self.dimensions
            )));
        }

        let mut hits: Vec<ScoredHit> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(index, vector)| ScoredHit {
                index,
                distance: squared_l2(query, vector),
            })
            .collect();

        hits.sort_by(|a, b| a.distance.partial_cmp(&b.distance).unwrap_or(Ordering::Equal));
        hits.truncate(k.min(self.vectors.len()));

        Ok(hits)
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum()
}
