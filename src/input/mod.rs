//! Keybindings for cell highlighting

use bevy::prelude::*;
use leafwing_input_manager::prelude::*;

use crate::events::ToggleCellHighlighting;

// Re-export leafwing types for user customization
pub use leafwing_input_manager::prelude::{ActionState, Actionlike, ButtonlikeChord, InputMap};

/// Cell highlighter action that can be triggered by keybindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect, Actionlike)]
pub enum CellHighlightAction {
    /// Turn cell highlighting on or off (Ctrl+Alt+H)
    ToggleHighlighting,
}

/// Default keybindings
pub fn default_input_map() -> InputMap<CellHighlightAction> {
    let mut input_map = InputMap::default();
    input_map.insert(
        CellHighlightAction::ToggleHighlighting,
        ButtonlikeChord::new([KeyCode::ControlLeft, KeyCode::AltLeft, KeyCode::KeyH]),
    );
    input_map
}

/// Marker component for the cell highlighter's input manager entity
#[derive(Component)]
pub struct CellHighlightInputManager;

/// Turn the toggle action into a [`ToggleCellHighlighting`] message
pub(crate) fn handle_toggle_action(
    action_query: Query<&ActionState<CellHighlightAction>, With<CellHighlightInputManager>>,
    mut toggles: MessageWriter<ToggleCellHighlighting>,
) {
    for action_state in action_query.iter() {
        if action_state.just_pressed(&CellHighlightAction::ToggleHighlighting) {
            toggles.write(ToggleCellHighlighting);
        }
    }
}

