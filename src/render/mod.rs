//! Map outputs: static choropleth, interactive web map, animated turnout map.

mod animated;
mod static_map;
mod web_map;

pub use animated::{animated_map_to_string, write_animated_map};
pub use static_map::{static_map_to_string, write_static_map};
pub use web_map::{web_map_to_string, write_web_map};
