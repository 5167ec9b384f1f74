//! Reducer for the create/edit dialog.

use crate::catalog::{FormField, ItemForm};
use crate::ui::mvi::Reducer;

use super::intent::EditorIntent;
use super::state::EditorState;

pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::OpenCreate => EditorState::Creating {
                form: ItemForm::default(),
                focus: FormField::Name,
                pending: None,
            },

            EditorIntent::OpenEdit { item } => EditorState::Editing {
                id: item.id,
                form: ItemForm::from_item(&item),
                focus: FormField::Name,
                pending: None,
            },

            EditorIntent::Close => EditorState::Closed,

            EditorIntent::Saving { ticket } => match state {
                EditorState::Creating {
                    form,
                    focus,
                    pending: None,
                } => EditorState::Creating {
                    form,
                    focus,
                    pending: Some(ticket),
                },
                EditorState::Editing {
                    id,
                    form,
                    focus,
                    pending: None,
                } => EditorState::Editing {
                    id,
                    form,
                    focus,
                    pending: Some(ticket),
                },
                other => other,
            },

            EditorIntent::Saved { ticket } => {
                if state.pending_save() == Some(ticket) {
                    EditorState::Closed
                } else {
                    state
                }
            }

            EditorIntent::SaveFailed { ticket } => match state {
                EditorState::Creating {
                    form,
                    focus,
                    pending: Some(pending),
                } if pending == ticket => EditorState::Creating {
                    form,
                    focus,
                    pending: None,
                },
                EditorState::Editing {
                    id,
                    form,
                    focus,
                    pending: Some(pending),
                } if pending == ticket => EditorState::Editing {
                    id,
                    form,
                    focus,
                    pending: None,
                },
                other => other,
            },

            EditorIntent::FocusNext => with_form(state, |_, focus| *focus = focus.next()),

            EditorIntent::FocusPrev => with_form(state, |_, focus| *focus = focus.prev()),

            EditorIntent::Input(ch) => with_form(state, |form, focus| {
                if let Some(text) = form.text_mut(*focus) {
                    text.push(ch);
                }
            }),

            EditorIntent::Backspace => with_form(state, |form, focus| {
                if let Some(text) = form.text_mut(*focus) {
                    text.pop();
                }
            }),

            EditorIntent::CycleRarity { forward } => with_form(state, |form, focus| {
                if *focus == FormField::Rarity {
                    form.rarity = if forward {
                        form.rarity.next()
                    } else {
                        form.rarity.prev()
                    };
                }
            }),
        }
    }
}

/// Apply an edit to an open, idle dialog. Closed and saving states are left as is.
fn with_form<F>(state: EditorState, edit: F) -> EditorState
where
    F: FnOnce(&mut ItemForm, &mut FormField),
{
    match state {
        EditorState::Creating {
            mut form,
            mut focus,
            pending: None,
        } => {
            edit(&mut form, &mut focus);
            EditorState::Creating {
                form,
                focus,
                pending: None,
            }
        }
        EditorState::Editing {
            id,
            mut form,
            mut focus,
            pending: None,
        } => {
            edit(&mut form, &mut focus);
            EditorState::Editing {
                id,
                form,
                focus,
                pending: None,
            }
        }
        other => other,
    }
}
