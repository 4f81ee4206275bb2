use crate::Distance;
use crate::Slot;
use crate::UNMAPPED;
use crate::error::Error;
use crate::error::Result;
use crate::geometry::Euclidean;
use crate::geometry::Measure;
use crate::geometry::Points;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;

/// Running bookkeeping for the merged ("degenerate") graph accumulated
/// across successive merge calls.
///
/// Each chain is one path through the sample sets, destined to become one
/// cluster. The ledger records where every chain currently ends, how many
/// vertices have been admitted in total, and how many merges have sealed.
/// It only ever grows: tails advance, counts increase, and previously
/// admitted vertices are never reassigned.
///
/// The ledger is owned by the caller and threaded through repeated
/// [`Merger::merge`] calls by mutable reference. Callers sharing one ledger
/// across threads must serialize those calls; merges against disjoint
/// ledgers are free to run concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ledger {
    /// Tail of each chain as (sample set epoch, local index within it).
    tails: Vec<(usize, usize)>,
    /// Total vertices admitted into the merged graph.
    mapped: usize,
    /// Completed merge calls against this ledger.
    merges: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chains founded so far.
    pub fn chains(&self) -> usize {
        self.tails.len()
    }

    /// Total vertices admitted into the merged graph. Monotonic.
    pub fn mapped(&self) -> usize {
        self.mapped
    }

    /// Completed merge calls. Monotonic.
    pub fn merges(&self) -> usize {
        self.merges
    }

    pub fn is_empty(&self) -> bool {
        self.tails.is_empty()
    }

    /// Current tail of `chain`, if the chain exists.
    pub fn tail(&self, chain: usize) -> Option<(usize, usize)> {
        self.tails.get(chain).copied()
    }

    /// Chains whose tail sits in the given epoch, i.e. the chains still
    /// alive after that sample set was merged in.
    pub fn survivors(&self, epoch: usize) -> impl Iterator<Item = usize> + '_ {
        self.tails
            .iter()
            .enumerate()
            .filter(move |&(_, &(e, _))| e == epoch)
            .map(|(chain, _)| chain)
    }

    /// Founds `n` chains, one per point of the first sample set.
    fn found(&mut self, n: usize) {
        self.tails = (0..n).map(|i| (0, i)).collect::<Vec<_>>();
        self.mapped = n;
    }

    /// Advances a chain's tail to a newly admitted vertex.
    fn extend(&mut self, chain: usize, epoch: usize, index: usize) {
        self.tails[chain] = (epoch, index);
        self.mapped += 1;
    }
}

/// Greedy capacity-one nearest-neighbor matcher between two sample sets.
///
/// Matching runs in two phases so the parallel part stays conflict-free:
///
/// 1. **Parallel**: compute the distance of every eligible source to every
///    destination, then sort candidates ascending by
///    (distance, source, destination). The index tie-breaks make the order
///    a total one, so results never depend on scheduling.
/// 2. **Sequential**: walk the sorted candidates and commit the globally
///    smallest remaining pair, consuming both endpoints, until candidates
///    run out.
///
/// The acceptance criterion is "candidates ran out" by default; a distance
/// [`tolerance`](Self::with_tolerance) optionally leaves far-apart points
/// unmapped instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Merger {
    tolerance: Option<Distance>,
}

impl Merger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rejects candidate pairs farther apart than `tolerance`, leaving
    /// their endpoints unmapped.
    pub fn with_tolerance(tolerance: Distance) -> Self {
        Self {
            tolerance: Some(tolerance),
        }
    }

    /// Splices `two` onto the chains ending in `one`, extending the merged
    /// graph tracked by `ledger`.
    ///
    /// `set_one_id` is the epoch of `one` within the larger running
    /// structure. On the very first merge (`set_one_id == 0` against an
    /// empty ledger) every point of `one` founds a chain and `map_one` is
    /// seeded with those chain indices; on later calls `map_one` is
    /// expected to carry the entries written into `map_two` by the
    /// previous merge. A source point is eligible only while its chain's
    /// tail is exactly that point, so a chain dropped in an earlier merge
    /// stays dropped.
    ///
    /// Effects, all in place: `map_two[j]` receives the chain index that
    /// consumed destination `j`, or [`UNMAPPED`]; the ledger's tails
    /// advance and its vertex count grows monotonically.
    ///
    /// Returns the number of chains extended, which equals the count of
    /// non-sentinel entries written into `map_two`.
    ///
    /// # Errors
    ///
    /// - [`Error::ShapeMismatch`] when the two sets disagree on dimension
    /// - [`Error::InvalidInput`] when a map length disagrees with its set,
    ///   or a `map_one` entry names no chain in the ledger
    ///
    /// Either set being empty is not an error: both maps are forced to
    /// sentinel, 0 is returned, and the ledger is left untouched.
    pub fn merge(
        &self,
        set_one_id: usize,
        one: &Points,
        two: &Points,
        map_one: &mut [Slot],
        map_two: &mut [Slot],
        ledger: &mut Ledger,
    ) -> Result<usize> {
        if one.dims() != two.dims() {
            return Err(Error::ShapeMismatch {
                left: one.dims(),
                right: two.dims(),
            });
        }
        if map_one.len() != one.len() || map_two.len() != two.len() {
            return Err(Error::InvalidInput(
                "sample map lengths must equal their sample set lengths".to_string(),
            ));
        }
        if one.is_empty() || two.is_empty() {
            map_one.fill(UNMAPPED);
            map_two.fill(UNMAPPED);
            return Ok(0);
        }
        if set_one_id == 0 && ledger.is_empty() {
            for (i, slot) in map_one.iter_mut().enumerate() {
                *slot = i as Slot;
            }
            ledger.found(one.len());
        }
        for &slot in map_one.iter() {
            if slot != UNMAPPED && !(0..ledger.chains() as Slot).contains(&slot) {
                return Err(Error::InvalidInput(format!(
                    "map entry {} names no chain in the ledger",
                    slot
                )));
            }
        }
        map_two.fill(UNMAPPED);
        let sources = map_one
            .iter()
            .enumerate()
            .filter(|&(_, &slot)| slot != UNMAPPED)
            .map(|(i, &slot)| (i, slot as usize))
            .filter(|&(i, chain)| ledger.tail(chain) == Some((set_one_id, i)))
            .collect::<Vec<_>>();
        let ref metric = Euclidean;
        let mut candidates = sources
            .par_iter()
            .flat_map_iter(|&(i, chain)| {
                two.iter()
                    .enumerate()
                    .map(move |(j, q)| (metric.distance(one.point(i), q), i, chain, j))
            })
            .filter(|(d, ..)| self.tolerance.is_none_or(|t| *d <= t))
            .collect::<Vec<_>>();
        candidates.par_sort_unstable_by(|a, b| a.partial_cmp(b).expect("finite distances"));
        let mut spent = vec![false; one.len()];
        let mut taken = vec![false; two.len()];
        let mut matched = 0;
        for (_, i, chain, j) in candidates {
            if spent[i] || taken[j] {
                continue;
            }
            spent[i] = true;
            taken[j] = true;
            map_two[j] = chain as Slot;
            ledger.extend(chain, set_one_id + 1, j);
            matched += 1;
        }
        ledger.merges += 1;
        log::debug!(
            "{:<32}{:<32}",
            "merged sample sets",
            format!("{} -> {} matched {}", set_one_id, set_one_id + 1, matched)
        );
        Ok(matched)
    }
}

/// Splices two sample sets with the default [`Merger`] (no distance
/// tolerance) and returns how many vertices were mapped.
pub fn euclid_distance_mapped(
    set_one_id: usize,
    one: &Points,
    two: &Points,
    map_one: &mut [Slot],
    map_two: &mut [Slot],
    ledger: &mut Ledger,
) -> Result<usize> {
    Merger::new().merge(set_one_id, one, two, map_one, map_two, ledger)
}
