#![doc = "CivicScope public API"]
pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod io;
mod join;
mod pipeline;
pub mod render;
pub mod score;
pub mod types;

#[doc(inline)]
pub use config::Config;

#[doc(inline)]
pub use error::ScoreError;

#[doc(inline)]
pub use join::join;

#[doc(inline)]
pub use pipeline::run;

#[doc(inline)]
pub use score::{RegionScore, ScoreEngine, ScoreSet, ScoreWeights};

#[doc(inline)]
pub use types::{AttributeTable, Boundary, BoundarySet, Region, TurnoutSeries};
