//! Mouse hover handling
//!
//! Moving over a panel entry highlights it, so keyboard and mouse share
//! one selection.

use super::app_state::App;
use crate::layout::Region;

pub fn handle_hover(app: &mut App, region: Option<Region>) {
    if let Some(Region::SuggestionEntry(index)) = region
        && app.suggest.is_visible()
    {
        app.suggest.select(index);
    }
}
