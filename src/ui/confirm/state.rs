use crate::catalog::ItemId;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum ConfirmState {
    #[default]
    Hidden,
    Confirming { id: ItemId, name: String },
}

impl UiState for ConfirmState {}

impl ConfirmState {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    pub fn pending_id(&self) -> Option<ItemId> {
        match self {
            Self::Confirming { id, .. } => Some(*id),
            Self::Hidden => None,
        }
    }
}
