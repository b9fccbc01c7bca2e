//! Terminal view layer: rendering contracts, markdown helpers, and the
//! portfolio section renderers.

pub mod markdown;
pub mod render;
pub mod sections;
