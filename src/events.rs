//! Cell highlighting messages

use bevy::prelude::*;

/// Command flipping cell highlighting on or off
///
/// Write this from a menu, a command palette or any other UI; the
/// `ToggleHighlighting` key binding writes it too.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct ToggleCellHighlighting;

/// Informational message for the user, e.g. "Cell highlighting disabled"
///
/// The host application decides how to present it (toast, status bar, ...).
#[derive(Message, Clone, Debug, PartialEq, Eq)]
pub struct CellHighlightNotice {
    pub text: String,
}
