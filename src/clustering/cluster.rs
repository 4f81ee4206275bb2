use crate::Scalar;
use crate::geometry::Points;
use serde::Deserialize;
use serde::Serialize;

/// One reconstituted cluster: member identities in insertion order plus
/// their coordinates, row-aligned.
///
/// An identity is (sample set, local index), enough for the caller to map
/// a medoid back to the original vertex it compresses to. Empty clusters
/// are legitimate values; [`collect_groups`](crate::collect_groups) returns
/// them explicitly so consumers can index by cluster id, and
/// [`find_medoids`](crate::find_medoids) rejects them distinctly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    members: Vec<(usize, usize)>,
    points: Points,
}

impl Cluster {
    pub fn new(dims: usize) -> Self {
        Self {
            members: Vec::new(),
            points: Points::new(dims),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn dims(&self) -> usize {
        self.points.dims()
    }

    /// (sample set, local index) identity of member `i`.
    pub fn member(&self, i: usize) -> (usize, usize) {
        self.members[i]
    }

    pub fn members(&self) -> &[(usize, usize)] {
        &self.members
    }

    /// Coordinates of member `i`.
    pub fn point(&self, i: usize) -> &[Scalar] {
        self.points.point(i)
    }

    pub fn points(&self) -> &Points {
        &self.points
    }

    /// Appends a member with its coordinates.
    pub fn push(&mut self, member: (usize, usize), point: &[Scalar]) {
        self.members.push(member);
        self.points.push(point);
    }
}
