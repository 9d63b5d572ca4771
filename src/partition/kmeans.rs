//! Seeded k-means partitioning.
//!
//! Splits a set of vectors into k groups by minimizing **within-cluster sum
//! of squares** (WCSS), the classic Lloyd iteration:
//!
//! ```text
//! WCSS = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # The Loop
//!
//! 1. **Initialize**: draw k distinct input vectors (seeded, without
//!    replacement) as the starting centroids
//! 2. **Assign**: each vector → its nearest centroid
//! 3. **Update**: each centroid → the mean of its assigned vectors; a cluster
//!    left with no members is re-seeded to a vector drawn from the full
//!    input set
//! 4. Repeat until the centroids stop moving or the iteration cap is hit
//!
//! "Stop moving" is per-coordinate approximate equality against the previous
//! round, `|new - old| <= atol + rtol * |old|`, not bit-exactness. Hitting
//! the cap is not an error: the last completed update is returned as is.
//!
//! # Determinism
//!
//! Every random draw (the initial pick and any empty-cluster re-seed) comes
//! from one generator built from the configured seed, and assignment ties
//! resolve to the lowest cluster index. Equal vectors, k, and seed give equal
//! labels and centroids, with or without the `parallel` feature.
//!
//! # Degenerate Inputs
//!
//! - Empty input partitions to an empty result rather than an error.
//! - Asking for more clusters than there are vectors clamps k to the vector
//!   count.
//! - Duplicate-heavy input can leave a cluster with no members every round;
//!   its centroid is then a re-seeded input point and the cap ends the run.
//!   Callers that care about occupancy should check
//!   [`Partition::cluster_sizes`].

use super::traits::{Partition, Partitioner};
use crate::error::{Error, Result};
use log::{debug, trace};
use ndarray::Array2;
use rand::prelude::*;
use rand::seq::index;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Seeded k-means partitioner.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Requested number of clusters.
    k: usize,
    /// Maximum refinement iterations.
    max_iter: usize,
    /// Relative convergence tolerance.
    rtol: f32,
    /// Absolute convergence tolerance.
    atol: f32,
    /// Seed for the initial pick and empty-cluster re-seeds.
    seed: u64,
}

impl Kmeans {
    /// Create a new partitioner producing at most `k` clusters.
    ///
    /// Defaults: 100 refinement iterations, tolerances `rtol = 1e-5` /
    /// `atol = 1e-8`, seed 42. The fixed default seed keeps
    /// default-configured runs reproducible across processes.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            max_iter: 100,
            rtol: 1e-5,
            atol: 1e-8,
            seed: 42,
        }
    }

    /// Set the maximum number of refinement iterations.
    ///
    /// Hitting the cap is not an error; the last completed update wins.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set the convergence tolerances.
    ///
    /// Centroids count as settled when every coordinate satisfies
    /// `|new - old| <= atol + rtol * |old|`.
    pub fn with_tolerance(mut self, rtol: f32, atol: f32) -> Self {
        self.rtol = rtol;
        self.atol = atol;
        self
    }

    /// Set the seed for the initial pick and empty-cluster re-seeds.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Draw `k` distinct input rows (without replacement) as starting
    /// centroids.
    fn init_centroids(&self, data: &Array2<f32>, k: usize, rng: &mut impl Rng) -> Array2<f32> {
        let d = data.ncols();
        let mut centroids = Array2::zeros((k, d));

        let picks = index::sample(rng, data.nrows(), k).into_vec();
        for (row, idx) in picks.into_iter().enumerate() {
            centroids.row_mut(row).assign(&data.row(idx));
        }

        centroids
    }

    /// Compute squared Euclidean distance.
    fn squared_distance(a: &ndarray::ArrayView1<'_, f32>, b: &ndarray::ArrayView1<'_, f32>) -> f32 {
        a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
    }

    /// Per-coordinate approximate equality against the previous round.
    fn all_close(&self, new: &Array2<f32>, old: &Array2<f32>) -> bool {
        new.iter()
            .zip(old.iter())
            .all(|(a, b)| (a - b).abs() <= self.atol + self.rtol * b.abs())
    }
}

impl Partitioner for Kmeans {
    fn partition(&self, vectors: &[Vec<f32>]) -> Result<Partition> {
        if self.k == 0 {
            return Err(Error::InvalidParameter {
                name: "k",
                message: "must be at least 1",
            });
        }

        if vectors.is_empty() {
            return Ok(Partition::new(Vec::new(), Vec::new()));
        }

        let n = vectors.len();
        let d = vectors[0].len();
        // A partition cannot hold more clusters than vectors.
        let k = self.k.min(n);

        // Flatten into one contiguous matrix, checking width row by row.
        let mut flat: Vec<f32> = Vec::with_capacity(n * d);
        for vector in vectors {
            if vector.len() != d {
                return Err(Error::DimensionMismatch {
                    expected: d,
                    found: vector.len(),
                });
            }
            flat.extend(vector);
        }
        let data = Array2::from_shape_vec((n, d), flat).map_err(|e| Error::Other(e.to_string()))?;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut centroids = self.init_centroids(&data, k, &mut rng);
        let mut labels = vec![0usize; n];
        let mut converged_after = None;

        for iter in 0..self.max_iter {
            // Assignment step; ties go to the lowest cluster index.
            #[cfg(feature = "parallel")]
            {
                let centroids_ref = &centroids;
                labels.par_iter_mut().enumerate().for_each(|(i, label)| {
                    let point = data.row(i);
                    let mut best_cluster = 0;
                    let mut best_dist = f32::MAX;

                    for c in 0..k {
                        let dist = Self::squared_distance(&point, &centroids_ref.row(c));
                        if dist < best_dist {
                            best_dist = dist;
                            best_cluster = c;
                        }
                    }
                    *label = best_cluster;
                });
            }

            #[cfg(not(feature = "parallel"))]
            for (i, label) in labels.iter_mut().enumerate() {
                let point = data.row(i);
                let mut best_cluster = 0;
                let mut best_dist = f32::MAX;

                for c in 0..k {
                    let dist = Self::squared_distance(&point, &centroids.row(c));
                    if dist < best_dist {
                        best_dist = dist;
                        best_cluster = c;
                    }
                }
                *label = best_cluster;
            }

            // Update step.
            let mut new_centroids = Array2::zeros((k, d));
            let mut counts = vec![0usize; k];

            for i in 0..n {
                let c = labels[i];
                for j in 0..d {
                    new_centroids[[c, j]] += data[[i, j]];
                }
                counts[c] += 1;
            }

            for c in 0..k {
                if counts[c] > 0 {
                    for j in 0..d {
                        new_centroids[[c, j]] /= counts[c] as f32;
                    }
                } else {
                    // Empty cluster: re-seed from the full input set. Repeat
                    // draws are allowed, so on duplicate-heavy input the same
                    // cluster may come up empty again next round.
                    let idx = rng.random_range(0..n);
                    new_centroids.row_mut(c).assign(&data.row(idx));
                    trace!("iteration {iter}: cluster {c} empty, re-seeded from vector {idx}");
                }
            }

            // Commit before testing, so the returned centroids are always the
            // final completed update in both exit paths.
            let settled = self.all_close(&new_centroids, &centroids);
            centroids = new_centroids;

            if settled {
                converged_after = Some(iter + 1);
                break;
            }
        }

        match converged_after {
            Some(rounds) => debug!("converged after {rounds} iterations (n={n}, k={k})"),
            None => debug!(
                "iteration cap {} reached without convergence (n={n}, k={k})",
                self.max_iter
            ),
        }

        let centroids = centroids
            .rows()
            .into_iter()
            .map(|row| row.to_vec())
            .collect();

        Ok(Partition::new(labels, centroids))
    }

    fn cluster_count(&self) -> usize {
        self.k
    }
}
