//! Admin create/edit dialog.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Closed / Creating / Editing
//! - `intent.rs` - Form edits and lifecycle actions
//! - `reducer.rs` - State transitions
//! - `dialog.rs` - Rendering
//!
//! Submitting is not an intent: the app validates the form, sends the
//! mutation tagged with a [`SaveTicket`], and dispatches `Saving`. Outcomes
//! only close or unfreeze the dialog when their ticket matches the session.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_editor_dialog;
pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorState, SaveTicket};
