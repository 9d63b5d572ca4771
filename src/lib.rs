//! # motif
//!
//! Seeded k-means partitioning for embedding vectors, plus the helpers an
//! insight pipeline hangs off the result: membership grouping, a
//! cluster-count heuristic, budgeted text concatenation, and partition
//! quality scores.
//!
//! The engine is deterministic end to end. Initialization and empty-cluster
//! re-seeding draw from one generator built from the configured seed, so
//! equal inputs with an equal seed always produce equal partitions.
//!
//! **Default build** is the serial engine; enable the `parallel` feature to
//! run the assignment step on rayon.
//!
//! ## Quick start
//!
//! ```rust
//! use motif::{suggest_cluster_count, Kmeans, Partitioner};
//!
//! let embeddings = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let k = suggest_cluster_count(embeddings.len(), 2, 8);
//! let partition = Kmeans::new(k).with_seed(7).partition(&embeddings).unwrap();
//!
//! assert_eq!(partition.len(), 4);
//! assert_eq!(partition.cluster_count(), 2);
//! ```

/// Error types used across `motif`.
pub mod error;
pub mod heuristic;
pub mod partition;
pub mod quality;
pub mod summarize;

pub use error::{Error, Result};
pub use heuristic::suggest_cluster_count;
pub use partition::{Kmeans, Partition, Partitioner};
pub use quality::{inertia, silhouette};
pub use summarize::{from_fn, BudgetConcat, FnSummarizer, Summarizer};
