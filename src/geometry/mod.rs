pub mod metric;
pub use metric::*;

pub mod points;
pub use points::*;
