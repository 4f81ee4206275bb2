use std::fmt;

/// Failure taxonomy shared by all four operations.
///
/// Every operation validates its inputs synchronously at entry and fails
/// fast with one of these kinds rather than producing silently wrong
/// output. Partial results are never returned; retry policy belongs to the
/// calling pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed or inconsistent inputs: an empty reference set, a map
    /// whose length disagrees with its sample set, an id outside its range.
    InvalidInput(String),
    /// Dimension disagreement between two point sets expected to match.
    ShapeMismatch { left: usize, right: usize },
    /// Medoid requested on a zero-member cluster.
    EmptyCluster,
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput(what) => write!(f, "invalid input: {}", what),
            Self::ShapeMismatch { left, right } => {
                write!(f, "shape mismatch: {} vs {} dimensions", left, right)
            }
            Self::EmptyCluster => write!(f, "cluster has no members"),
        }
    }
}

impl std::error::Error for Error {}
