use crate::Distance;
use crate::Scalar;
use crate::Slot;
use crate::error::Error;
use crate::error::Result;
use crate::geometry::Euclidean;
use crate::geometry::Measure;
use crate::geometry::Points;
use rayon::prelude::*;

/// Assigns each point in `data` to the index of its nearest representative
/// in `clusters`.
///
/// The unit of parallel work is one point's K-way minimum search; the
/// reference set is a single shared slice that stays cache-resident while
/// every worker scans it, so scaling is bounded by N, not by re-reading K
/// representatives per point. O(N·K·D).
///
/// Ties break toward the lowest representative index, independent of
/// scheduling. Empty `data` yields an empty vector.
///
/// # Errors
///
/// - [`Error::InvalidInput`] when `clusters` is empty
/// - [`Error::ShapeMismatch`] when dimensions disagree
pub fn euclid_distance_indexed(data: &Points, clusters: &Points) -> Result<Vec<Slot>> {
    if clusters.is_empty() {
        return Err(Error::InvalidInput(
            "no cluster representatives to assign to".to_string(),
        ));
    }
    if data.dims() != clusters.dims() {
        return Err(Error::ShapeMismatch {
            left: data.dims(),
            right: clusters.dims(),
        });
    }
    log::debug!(
        "{:<32}{:<32}",
        "assigning nearest clusters",
        format!("n {} k {}", data.len(), clusters.len())
    );
    Ok(data
        .as_slice()
        .par_chunks_exact(data.dims())
        .map(|point| nearest(&Euclidean, point, clusters))
        .map(|(j, _)| j as Slot)
        .collect::<Vec<_>>())
}

/// K-way argmin over the reference set.
/// Strict less-than keeps the lowest index on ties.
fn nearest<M: Measure>(metric: &M, point: &[Scalar], reference: &Points) -> (usize, Distance) {
    reference
        .iter()
        .enumerate()
        .map(|(j, c)| (j, metric.distance(point, c)))
        .fold((0, Distance::INFINITY), |(bj, bd), (j, d)| {
            if d < bd { (j, d) } else { (bj, bd) }
        })
}
