//! Partitioning traits and output types.

use crate::error::{Error, Result};

/// Trait for vector partitioning algorithms.
pub trait Partitioner {
    /// Partition the vectors into labeled clusters with centroids.
    ///
    /// Labels come back one per input vector, in input order.
    fn partition(&self, vectors: &[Vec<f32>]) -> Result<Partition>;

    /// Number of clusters this partitioner is configured for.
    ///
    /// The partition actually produced may hold fewer (see
    /// [`Partition::cluster_count`]).
    fn cluster_count(&self) -> usize;
}

/// Result of one partitioning run: per-vector labels plus per-cluster
/// centroids.
///
/// Labels index into `centroids`, so a label is always in
/// `[0, cluster_count())`. A cluster may hold no members at all; its centroid
/// is then whatever the final re-seed left there.
#[derive(Debug, Clone, PartialEq)]
pub struct Partition {
    labels: Vec<usize>,
    centroids: Vec<Vec<f32>>,
}

impl Partition {
    /// Construction stays in-crate so every label provably indexes a centroid.
    pub(crate) fn new(labels: Vec<usize>, centroids: Vec<Vec<f32>>) -> Self {
        Self { labels, centroids }
    }

    /// Cluster label per input vector, in input order.
    pub fn labels(&self) -> &[usize] {
        &self.labels
    }

    /// Final centroids, one per cluster.
    pub fn centroids(&self) -> &[Vec<f32>] {
        &self.centroids
    }

    /// Number of clusters in the partition.
    ///
    /// Smaller than the requested count when the input had fewer vectors.
    pub fn cluster_count(&self) -> usize {
        self.centroids.len()
    }

    /// Number of partitioned vectors.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// True when no vectors were partitioned.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Member indices per cluster, each bucket in input order.
    ///
    /// Clusters left empty by re-seeding come back as empty buckets.
    pub fn groups(&self) -> Vec<Vec<usize>> {
        let mut groups = vec![Vec::new(); self.cluster_count()];
        for (idx, &label) in self.labels.iter().enumerate() {
            groups[label].push(idx);
        }
        groups
    }

    /// Member count per cluster.
    pub fn cluster_sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0usize; self.cluster_count()];
        for &label in &self.labels {
            sizes[label] += 1;
        }
        sizes
    }

    /// Bucket `items` by cluster, preserving input order within each bucket.
    ///
    /// `items` must align positionally with the vectors the partition was
    /// computed from.
    pub fn group_items<'a, T>(&self, items: &'a [T]) -> Result<Vec<Vec<&'a T>>> {
        if items.len() != self.labels.len() {
            return Err(Error::DimensionMismatch {
                expected: self.labels.len(),
                found: items.len(),
            });
        }

        let mut buckets = vec![Vec::new(); self.cluster_count()];
        for (item, &label) in items.iter().zip(&self.labels) {
            buckets[label].push(item);
        }
        Ok(buckets)
    }

    /// Consume the partition into `(labels, centroids)`.
    pub fn into_parts(self) -> (Vec<usize>, Vec<Vec<f32>>) {
        (self.labels, self.centroids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_partition() -> Partition {
        Partition::new(
            vec![0, 1, 0, 1, 0],
            vec![vec![0.0, 0.0], vec![5.0, 5.0], vec![9.0, 9.0]],
        )
    }

    #[test]
    fn test_groups_preserve_input_order() {
        let partition = sample_partition();
        let groups = partition.groups();

        assert_eq!(groups.len(), 3);
        assert_eq!(groups[0], vec![0, 2, 4]);
        assert_eq!(groups[1], vec![1, 3]);
        assert!(groups[2].is_empty());
    }

    #[test]
    fn test_cluster_sizes_count_empty_clusters() {
        let partition = sample_partition();
        assert_eq!(partition.cluster_sizes(), vec![3, 2, 0]);
    }

    #[test]
    fn test_group_items_buckets_by_label() {
        let partition = sample_partition();
        let items = ["a", "b", "c", "d", "e"];

        let buckets = partition.group_items(&items).unwrap();

        assert_eq!(buckets[0], vec![&"a", &"c", &"e"]);
        assert_eq!(buckets[1], vec![&"b", &"d"]);
        assert!(buckets[2].is_empty());
    }

    #[test]
    fn test_group_items_length_mismatch() {
        let partition = sample_partition();
        let items = ["a", "b"];

        let err = partition.group_items(&items).unwrap_err();
        assert_eq!(
            err,
            Error::DimensionMismatch {
                expected: 5,
                found: 2
            }
        );
    }

    #[test]
    fn test_empty_partition() {
        let partition = Partition::new(Vec::new(), Vec::new());

        assert!(partition.is_empty());
        assert_eq!(partition.len(), 0);
        assert_eq!(partition.cluster_count(), 0);
        assert!(partition.groups().is_empty());
        let no_items: [&str; 0] = [];
        assert!(partition.group_items(&no_items).unwrap().is_empty());
    }

    #[test]
    fn test_into_parts() {
        let (labels, centroids) = sample_partition().into_parts();
        assert_eq!(labels.len(), 5);
        assert_eq!(centroids.len(), 3);
    }
}
