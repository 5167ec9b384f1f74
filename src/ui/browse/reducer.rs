use crate::ui::browse::intent::BrowseIntent;
use crate::ui::browse::state::BrowseState;
use crate::ui::mvi::Reducer;

pub struct BrowseReducer;

impl Reducer for BrowseReducer {
    type State = BrowseState;
    type Intent = BrowseIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BrowseIntent::StartSearch => state.searching = true,
            BrowseIntent::EndSearch => state.searching = false,
            BrowseIntent::Input(ch) => {
                if state.searching {
                    state.filter.query.push(ch);
                    state.selected = 0;
                }
            }
            BrowseIntent::Backspace => {
                if state.searching && state.filter.query.pop().is_some() {
                    state.selected = 0;
                }
            }
            BrowseIntent::CycleRarity => {
                state.filter.rarity = state.filter.rarity.next();
                state.selected = 0;
            }
            BrowseIntent::CycleSort => {
                state.filter.sort = state.filter.sort.next();
                state.selected = 0;
            }
            BrowseIntent::MoveUp { visible } => {
                state.selected = if visible == 0 {
                    0
                } else if state.selected == 0 {
                    visible - 1
                } else {
                    state.selected.min(visible - 1).saturating_sub(1)
                };
            }
            BrowseIntent::MoveDown { visible } => {
                state.selected = if visible == 0 || state.selected + 1 >= visible {
                    0
                } else {
                    state.selected + 1
                };
            }
            BrowseIntent::Clamp { visible } => {
                state.selected = state.selected.min(visible.saturating_sub(1));
            }
        }
        state
    }
}
