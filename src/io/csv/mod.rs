//! CSV format reading and writing operations.

mod read;
mod write;

pub use read::{read_attribute_table, read_turnout_series};
pub(crate) use read::NAME_COLUMN;
pub use write::{write_scores, write_scores_string};
