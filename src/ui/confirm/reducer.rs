use crate::ui::confirm::intent::ConfirmIntent;
use crate::ui::confirm::state::ConfirmState;
use crate::ui::mvi::Reducer;

pub struct ConfirmReducer;

impl Reducer for ConfirmReducer {
    type State = ConfirmState;
    type Intent = ConfirmIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ConfirmIntent::Ask { id, name } => ConfirmState::Confirming { id, name },
            ConfirmIntent::Accept | ConfirmIntent::Cancel => ConfirmState::Hidden,
        }
    }
}
