mod boundary;
mod region;
mod series;

pub use boundary::{Boundary, BoundarySet};
pub use region::{AttributeTable, Region};
pub use series::TurnoutSeries;
