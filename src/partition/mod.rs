//! Vector partitioning for grouping similar items.
//!
//! This module turns a flat set of embedding vectors into labeled clusters,
//! the step that sits between "one vector per document" and "one summary per
//! theme" in an insight pipeline.
//!
//! ## Shape of the Result
//!
//! A [`Partition`] pairs one label per input vector with one centroid per
//! cluster. Labels are positional, so the caller can zip them straight back
//! onto whatever the vectors were computed from; [`Partition::group_items`]
//! does exactly that.
//!
//! ## The Algorithm
//!
//! [`Kmeans`] runs Lloyd iteration: assign every vector to its nearest
//! centroid, move every centroid to the mean of its members, repeat.
//!
//! **Objective**: minimize within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{x ∈ C_k} ||x - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical
//! - Clusters have similar sizes
//! - The caller picks k (see [`crate::heuristic`] for a default policy)
//!
//! The run is fully seeded. Starting centroids are drawn from the input
//! without replacement, clusters that end a round with no members are
//! re-seeded from the input, and ties resolve to the lowest cluster index,
//! so a given (vectors, k, seed) triple always produces the same partition.
//!
//! ## Usage
//!
//! ```rust
//! use motif::{Kmeans, Partitioner};
//!
//! let embeddings = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let partition = Kmeans::new(2).partition(&embeddings).unwrap();
//!
//! assert_eq!(partition.labels()[0], partition.labels()[1]);
//! assert_ne!(partition.labels()[0], partition.labels()[2]);
//! assert_eq!(partition.cluster_count(), 2);
//! ```

mod kmeans;
mod traits;

pub use kmeans::Kmeans;
pub use traits::{Partition, Partitioner};
