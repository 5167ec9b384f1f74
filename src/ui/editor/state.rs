//! State for the create/edit dialog.

use crate::catalog::{FormField, ItemForm, ItemId};
use crate::ui::mvi::UiState;

/// Tags one save request so its outcome can be matched to the dialog
/// session that sent it.
pub type SaveTicket = u64;

/// The dialog as a single finite state.
///
/// The edited identifier only exists inside `Editing`, so a closed dialog
/// can never still point at an item. `pending` holds the ticket of the save
/// in flight; while it is set the form is frozen.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Closed,

    /// New item; the form started from defaults.
    Creating {
        form: ItemForm,
        focus: FormField,
        pending: Option<SaveTicket>,
    },

    /// Existing item; the form started from its fields.
    Editing {
        id: ItemId,
        form: ItemForm,
        focus: FormField,
        pending: Option<SaveTicket>,
    },
}

impl UiState for EditorState {}

impl EditorState {
    pub fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    pub fn form(&self) -> Option<&ItemForm> {
        match self {
            Self::Closed => None,
            Self::Creating { form, .. } | Self::Editing { form, .. } => Some(form),
        }
    }

    pub fn focus(&self) -> Option<FormField> {
        match self {
            Self::Closed => None,
            Self::Creating { focus, .. } | Self::Editing { focus, .. } => Some(*focus),
        }
    }

    /// Identifier being edited; `None` when creating or closed.
    pub fn editing_id(&self) -> Option<ItemId> {
        match self {
            Self::Editing { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Ticket of the save in flight for this session.
    pub fn pending_save(&self) -> Option<SaveTicket> {
        match self {
            Self::Closed => None,
            Self::Creating { pending, .. } | Self::Editing { pending, .. } => *pending,
        }
    }

    pub fn is_saving(&self) -> bool {
        self.pending_save().is_some()
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Editing { .. } => " Edit skin ",
            _ => " Add skin ",
        }
    }
}
