use crate::Distance;
use crate::Scalar;

/// Distance seam shared by every operation in the engine.
///
/// All distance computations route through one `Measure` instance so the
/// whole pipeline agrees on a single metric.
pub trait Measure: Sync {
    fn distance(&self, a: &[Scalar], b: &[Scalar]) -> Distance;
}

/// Euclidean (L2) distance.
///
/// Squared deltas accumulate in [`Distance`] width before the square root,
/// which keeps the sum stable at large coordinate magnitudes even though
/// storage is [`Scalar`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl Measure for Euclidean {
    fn distance(&self, a: &[Scalar], b: &[Scalar]) -> Distance {
        debug_assert!(a.len() == b.len());
        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| x as Distance - y as Distance)
            .map(|d| d * d)
            .sum::<Distance>()
            .sqrt()
    }
}
