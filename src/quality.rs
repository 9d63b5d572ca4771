//! Partition quality scores.
//!
//! Two standard diagnostics over a finished partition: inertia, the objective
//! k-means drives down, and the mean silhouette coefficient, which is the
//! usual yardstick when comparing candidate k values. Silhouette computes all
//! pairwise distances, so it is O(n² · d); fine for the cohort sizes a digest
//! pipeline sees, wrong tool for millions of vectors.

use crate::error::{Error, Result};
use crate::partition::Partition;

/// Within-cluster sum of squares under the given partition.
///
/// Lower is tighter. Only comparable across partitions of the same vectors.
pub fn inertia(vectors: &[Vec<f32>], partition: &Partition) -> Result<f64> {
    check_aligned(vectors, partition)?;

    let mut total = 0.0f64;
    for (vector, &label) in vectors.iter().zip(partition.labels()) {
        total += f64::from(squared_distance(vector, &partition.centroids()[label]));
    }
    Ok(total)
}

/// Mean silhouette coefficient over all vectors, in `[-1, 1]`.
///
/// Higher means vectors sit well inside their own cluster and far from the
/// next nearest one. Members of singleton clusters score 0, and a partition
/// with fewer than two occupied clusters scores 0 overall (there is no
/// between-cluster term to measure).
pub fn silhouette(vectors: &[Vec<f32>], partition: &Partition) -> Result<f64> {
    check_aligned(vectors, partition)?;

    let n = vectors.len();
    if n == 0 {
        return Ok(0.0);
    }

    let labels = partition.labels();
    let sizes = partition.cluster_sizes();
    let k = partition.cluster_count();

    let occupied = sizes.iter().filter(|&&size| size > 0).count();
    if occupied < 2 {
        return Ok(0.0);
    }

    let mut total = 0.0f64;
    for i in 0..n {
        let own = labels[i];
        if sizes[own] <= 1 {
            continue;
        }

        // Summed distance from vector i to each cluster's members.
        let mut sums = vec![0.0f64; k];
        for j in 0..n {
            if i != j {
                sums[labels[j]] += euclidean(&vectors[i], &vectors[j]);
            }
        }

        let a = sums[own] / (sizes[own] - 1) as f64;
        let mut b = f64::INFINITY;
        for c in 0..k {
            if c != own && sizes[c] > 0 {
                b = b.min(sums[c] / sizes[c] as f64);
            }
        }

        let denom = a.max(b);
        if denom > 0.0 {
            total += (b - a) / denom;
        }
    }

    Ok(total / n as f64)
}

/// Vectors and partition must pair one to one and share one width.
fn check_aligned(vectors: &[Vec<f32>], partition: &Partition) -> Result<()> {
    if vectors.len() != partition.len() {
        return Err(Error::DimensionMismatch {
            expected: partition.len(),
            found: vectors.len(),
        });
    }

    let d = match partition.centroids().first() {
        Some(centroid) => centroid.len(),
        None => return Ok(()),
    };
    for vector in vectors {
        if vector.len() != d {
            return Err(Error::DimensionMismatch {
                expected: d,
                found: vector.len(),
            });
        }
    }
    Ok(())
}

fn squared_distance(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

fn euclidean(a: &[f32], b: &[f32]) -> f64 {
    f64::from(squared_distance(a, b)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partition::{Kmeans, Partitioner};
    use approx::assert_abs_diff_eq;

    fn two_tight_groups() -> Vec<Vec<f32>> {
        vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ]
    }

    #[test]
    fn test_inertia_of_tight_groups() {
        let data = two_tight_groups();
        let partition = Kmeans::new(2).partition(&data).unwrap();

        // Each point sits 0.05 per coordinate from its group mean.
        let value = inertia(&data, &partition).unwrap();
        assert_abs_diff_eq!(value, 0.02, epsilon = 1e-3);
    }

    #[test]
    fn test_inertia_decreases_with_better_k() {
        let data = two_tight_groups();

        let one = Kmeans::new(1).partition(&data).unwrap();
        let two = Kmeans::new(2).partition(&data).unwrap();

        let coarse = inertia(&data, &one).unwrap();
        let fine = inertia(&data, &two).unwrap();
        assert!(fine < coarse, "fine={fine} coarse={coarse}");
    }

    #[test]
    fn test_silhouette_high_for_separated_groups() {
        let data = two_tight_groups();
        let partition = Kmeans::new(2).partition(&data).unwrap();

        let score = silhouette(&data, &partition).unwrap();
        assert!(score > 0.9, "score={score}");
        assert!(score <= 1.0);
    }

    #[test]
    fn test_silhouette_zero_for_single_cluster() {
        let data = two_tight_groups();
        let partition = Kmeans::new(1).partition(&data).unwrap();

        assert_eq!(silhouette(&data, &partition).unwrap(), 0.0);
    }

    #[test]
    fn test_silhouette_counts_singletons_as_zero() {
        // Clusters {0}, {1, 2}: the singleton contributes 0 to the mean.
        let partition = Partition::new(
            vec![0, 1, 1],
            vec![vec![0.0, 0.0], vec![10.05, 10.05]],
        );
        let vectors = vec![vec![0.0, 0.0], vec![10.0, 10.0], vec![10.1, 10.1]];

        let score = silhouette(&vectors, &partition).unwrap();
        // Two near-perfect members out of three vectors.
        assert!(score > 0.6 && score < 0.7, "score={score}");
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        let partition = Kmeans::new(3).partition(&[]).unwrap();

        assert_eq!(inertia(&[], &partition).unwrap(), 0.0);
        assert_eq!(silhouette(&[], &partition).unwrap(), 0.0);
    }

    #[test]
    fn test_misaligned_lengths_rejected() {
        let data = two_tight_groups();
        let partition = Kmeans::new(2).partition(&data).unwrap();

        let err = inertia(&data[..3], &partition).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 4,
                found: 3
            }
        );
    }

    #[test]
    fn test_misaligned_width_rejected() {
        let data = two_tight_groups();
        let partition = Kmeans::new(2).partition(&data).unwrap();

        let ragged = vec![vec![0.0], vec![0.1], vec![10.0], vec![10.1]];
        let err = silhouette(&ragged, &partition).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 2,
                found: 1
            }
        );
    }
}
