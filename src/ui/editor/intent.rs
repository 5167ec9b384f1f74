//! Intents for the create/edit dialog.

use crate::catalog::CatalogItem;
use crate::ui::mvi::Intent;

use super::state::SaveTicket;

#[derive(Debug, Clone)]
pub enum EditorIntent {
    /// Open with a cleared form.
    OpenCreate,

    /// Open pre-populated from an existing item.
    OpenEdit { item: CatalogItem },

    /// Cancel; in-progress edits are dropped.
    Close,

    FocusNext,
    FocusPrev,

    /// Append to the focused text field.
    Input(char),

    /// Remove the last character of the focused text field.
    Backspace,

    /// Step the rarity selector when it has focus.
    CycleRarity { forward: bool },

    /// A save was sent for the current form.
    Saving { ticket: SaveTicket },

    /// The store accepted the save tagged `ticket`.
    Saved { ticket: SaveTicket },

    /// The store rejected the save tagged `ticket`; the form unfreezes.
    SaveFailed { ticket: SaveTicket },
}

impl Intent for EditorIntent {}
