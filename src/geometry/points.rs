use crate::Scalar;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// An ordered, indexed collection of fixed-dimension points.
///
/// All coordinates live in one contiguous row-major arena; a point's
/// identity within its set is its row index. The engine borrows a `Points`
/// for the duration of a call and never retains it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Points {
    dims: usize,
    data: Vec<Scalar>,
}

impl Points {
    /// An empty set of `dims`-dimensional points.
    pub fn new(dims: usize) -> Self {
        assert!(dims > 0, "points must have at least one dimension");
        Self {
            dims,
            data: Vec::new(),
        }
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.data.len() / self.dims
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Dimension of every point in the set.
    pub fn dims(&self) -> usize {
        self.dims
    }

    /// Coordinates of point `i`.
    pub fn point(&self, i: usize) -> &[Scalar] {
        &self.data[i * self.dims..(i + 1) * self.dims]
    }

    /// The whole arena, row-major.
    pub fn as_slice(&self) -> &[Scalar] {
        &self.data
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Scalar]> {
        self.data.chunks_exact(self.dims)
    }

    /// Appends a point. Panics if the row width disagrees with `dims`.
    pub fn push(&mut self, point: &[Scalar]) {
        assert!(point.len() == self.dims, "row width must equal dims");
        self.data.extend_from_slice(point);
    }

    /// `n` points drawn uniformly from the unit cube.
    pub fn random<R: Rng>(n: usize, dims: usize, rng: &mut R) -> Self {
        let mut points = Self::new(dims);
        points.data = (0..n * dims).map(|_| rng.random_range(0.0..1.0)).collect();
        points
    }
}

impl From<(Vec<Scalar>, usize)> for Points {
    /// Wraps a row-major coordinate buffer. Panics if the buffer length is
    /// not a multiple of `dims`.
    fn from((data, dims): (Vec<Scalar>, usize)) -> Self {
        assert!(dims > 0, "points must have at least one dimension");
        assert!(data.len() % dims == 0, "buffer length must be N * dims");
        Self { dims, data }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn arena_indexing() {
        let mut points = Points::new(2);
        points.push(&[1.0, 2.0]);
        points.push(&[3.0, 4.0]);
        assert_eq!(points.len(), 2);
        assert_eq!(points.point(0), &[1.0, 2.0]);
        assert_eq!(points.point(1), &[3.0, 4.0]);
    }

    #[test]
    fn from_flat_buffer() {
        let points = Points::from((vec![0.0, 1.0, 5.0, 6.0], 1));
        assert_eq!(points.len(), 4);
        assert_eq!(points.dims(), 1);
        assert_eq!(points.point(2), &[5.0]);
    }

    #[test]
    fn random_fills_unit_cube() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let points = Points::random(16, 3, rng);
        assert_eq!(points.len(), 16);
        assert!(points.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    }

    #[test]
    #[should_panic]
    fn rejects_ragged_row() {
        let mut points = Points::new(3);
        points.push(&[1.0, 2.0]);
    }
}
