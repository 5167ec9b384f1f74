use crate::catalog::ListFilter;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BrowseState {
    pub filter: ListFilter,
    /// Row index into the filtered list.
    pub selected: usize,
    /// Typing edits the query while set.
    pub searching: bool,
}

impl UiState for BrowseState {}
