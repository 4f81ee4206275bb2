pub mod assign;
pub use assign::*;

pub mod cluster;
pub use cluster::*;

pub mod groups;
pub use groups::*;

pub mod medoid;
pub use medoid::*;

pub mod merge;
pub use merge::*;

#[cfg(test)]
mod tests;
