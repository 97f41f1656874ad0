pub mod display;
pub mod facets;
pub mod graph;
pub mod search;

pub use display::sort_for_display;
pub use facets::{companies, roles, topics};
pub use graph::build_graph;
pub use search::{search_profiles, ProfileFilter};
