use ratatui::layout::Rect;

/// A component a screen position can land on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    /// An entry row of the suggestion panel, by index
    SuggestionEntry(usize),
    /// The panel border and any unused rows
    SuggestionPanel,
}

/// Where components were drawn on the last frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    /// `None` while the panel is hidden
    pub suggestion_panel: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
