use crate::catalog::ItemId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ConfirmIntent {
    Ask { id: ItemId, name: String },
    /// User said yes; the caller sends the delete.
    Accept,
    Cancel,
}

impl Intent for ConfirmIntent {}
