use crate::ui::mvi::Intent;

/// `visible` is the length of the filtered list at the time of the action.
#[derive(Debug, Clone)]
pub enum BrowseIntent {
    StartSearch,
    EndSearch,
    Input(char),
    Backspace,
    CycleRarity,
    CycleSort,
    MoveUp { visible: usize },
    MoveDown { visible: usize },
    /// Keep the selection inside a list that shrank after a re-fetch.
    Clamp { visible: usize },
}

impl Intent for BrowseIntent {}
