//! Nearest-neighbor clustering and medoid selection engine.
//!
//! This crate is the analytic core of a lossy compression pipeline for large
//! point/vertex sets (point clouds, mesh vertex streams). A calling pipeline
//! composes four stateless primitives:
//!
//! 1. [`euclid_distance_indexed`]: assign every point to its nearest
//!    cluster representative.
//! 2. [`euclid_distance_mapped`]: splice two independently drawn sample
//!    sets into one growing chain structure via greedy capacity-one
//!    nearest-neighbor matching.
//! 3. [`collect_groups`]: reconstitute explicit per-cluster membership
//!    from flattened per-set maps.
//! 4. [`find_medoids`]: pick the member of one cluster minimizing total
//!    distance to all other members, the canonical compressed
//!    representative.
//!
//! All state lives in caller-owned buffers passed by reference; the engine
//! holds nothing across calls. Outputs are deterministic regardless of how
//! parallel work is scheduled: ties break toward the lowest index, never
//! toward whichever worker finished first.

pub mod clustering;
pub mod error;
pub mod geometry;

pub use clustering::*;
pub use error::*;
pub use geometry::*;

/// Coordinate storage precision.
pub type Scalar = f32;
/// Wide accumulator for all distance arithmetic, regardless of storage precision.
pub type Distance = f64;
/// One entry of an assignment vector or sample map.
pub type Slot = i64;

/// Reserved [`Slot`] value marking "no destination".
pub const UNMAPPED: Slot = -1;
