//! Base trait for intents in the MVI layer.

/// Marker trait for intent objects.
///
/// An intent is a user action (typing, moving focus, confirming) or a
/// store outcome the state must react to.
pub trait Intent: Send + 'static {}
