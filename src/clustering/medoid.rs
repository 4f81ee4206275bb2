use crate::Distance;
use crate::clustering::Cluster;
use crate::error::Error;
use crate::error::Result;
use crate::geometry::Euclidean;
use crate::geometry::Measure;
use rayon::prelude::*;

/// Index (within the cluster) of the member minimizing the sum of
/// distances to all other members, i.e. the cluster's compressed
/// representative. Map it back to an original vertex with
/// [`Cluster::member`].
///
/// Per-member sums are computed in parallel, but each sum accumulates in
/// fixed member order, so the result is independent of scheduling. Ties
/// break toward the lowest index. O(M²·D) for a cluster of M members,
/// bounded by the clustering granularity chosen upstream, not the dataset.
///
/// # Errors
///
/// [`Error::EmptyCluster`] when the cluster has no members. Callers can
/// detect this case up front because
/// [`collect_groups`](crate::collect_groups) returns empty clusters
/// explicitly.
pub fn find_medoids(cluster: &Cluster) -> Result<usize> {
    if cluster.is_empty() {
        return Err(Error::EmptyCluster);
    }
    let ref metric = Euclidean;
    let sums = (0..cluster.len())
        .into_par_iter()
        .map(|i| {
            cluster
                .points()
                .iter()
                .map(|other| metric.distance(cluster.point(i), other))
                .sum::<Distance>()
        })
        .collect::<Vec<_>>();
    Ok(sums
        .iter()
        .enumerate()
        .fold((0, Distance::INFINITY), |(bi, bd), (i, &d)| {
            if d < bd { (i, d) } else { (bi, bd) }
        })
        .0)
}
