//! Model-View-Intent (MVI) primitives for the storefront UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a dialog or list needs to render
//! - **Intent**: key presses and store results, already decoded
//! - **Reducer**: pure `(State, Intent) -> State`; network calls happen outside

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
