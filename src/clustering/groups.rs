use crate::Slot;
use crate::UNMAPPED;
use crate::clustering::Cluster;
use crate::error::Error;
use crate::error::Result;
use crate::geometry::Points;

/// Reconstitutes explicit per-cluster membership from flattened per-set
/// sample data.
///
/// Each of `sample_sets` holds `sample_size` points; the aligned entry in
/// `sample_maps` names the cluster id that point belongs to, or
/// [`UNMAPPED`]. The output always holds exactly `num_clusters` clusters
/// indexed by id; a cluster nobody joined comes back explicitly empty
/// rather than omitted. Within a cluster, members keep the order they
/// appear in across `sample_sets`.
///
/// Pure and deterministic; no state survives the call.
///
/// # Errors
///
/// - [`Error::InvalidInput`] when `sample_size` or `num_clusters` is zero,
///   when set/map counts or lengths disagree, or when a non-sentinel map
///   entry falls outside [0, `num_clusters`)
/// - [`Error::ShapeMismatch`] when the sets disagree on dimension
pub fn collect_groups(
    sample_size: usize,
    num_clusters: usize,
    sample_sets: &[Points],
    sample_maps: &[Vec<Slot>],
) -> Result<Vec<Cluster>> {
    if sample_size == 0 {
        return Err(Error::InvalidInput("sample size must be positive".to_string()));
    }
    if num_clusters == 0 {
        return Err(Error::InvalidInput("cluster count must be positive".to_string()));
    }
    if sample_sets.len() != sample_maps.len() {
        return Err(Error::InvalidInput(format!(
            "{} sample sets but {} sample maps",
            sample_sets.len(),
            sample_maps.len()
        )));
    }
    let dims = sample_sets.first().map(Points::dims).unwrap_or(1);
    for (set, map) in sample_sets.iter().zip(sample_maps.iter()) {
        if set.len() != sample_size || map.len() != sample_size {
            return Err(Error::InvalidInput(format!(
                "every sample set and map must hold {} entries",
                sample_size
            )));
        }
        if set.dims() != dims {
            return Err(Error::ShapeMismatch {
                left: dims,
                right: set.dims(),
            });
        }
    }
    log::debug!(
        "{:<32}{:<32}",
        "collecting groups",
        format!("sets {} clusters {}", sample_sets.len(), num_clusters)
    );
    let mut clusters = vec![Cluster::new(dims); num_clusters];
    for (s, (set, map)) in sample_sets.iter().zip(sample_maps.iter()).enumerate() {
        for (i, &slot) in map.iter().enumerate() {
            if slot == UNMAPPED {
                continue;
            }
            let id = usize::try_from(slot)
                .ok()
                .filter(|&id| id < num_clusters)
                .ok_or_else(|| {
                    Error::InvalidInput(format!(
                        "map entry {} is not a cluster id below {}",
                        slot, num_clusters
                    ))
                })?;
            clusters[id].push((s, i), set.point(i));
        }
    }
    Ok(clusters)
}
