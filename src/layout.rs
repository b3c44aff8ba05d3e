//! Layout module for tracking UI component regions
//!
//! `LayoutRegions` records where the input field and the suggestion panel
//! were last drawn, and `region_at()` resolves a screen position to the
//! component under it. Mouse handling uses this to tell clicks on the panel
//! apart from clicks anywhere else.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};
