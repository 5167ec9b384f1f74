//! Item list browsing: search query, rarity/sort selectors and row selection.
//!
//! Shared by the catalog and admin pages; each page keeps its own state.

mod intent;
mod reducer;
mod state;

pub use intent::BrowseIntent;
pub use reducer::BrowseReducer;
pub use state::BrowseState;
