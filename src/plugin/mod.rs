//! Bevy plugin for cell highlighting
//!
//! Editors are entities with an [`EditorDocument`] and an [`EditorCursor`];
//! [`ActiveEditor`] points at the focused one. The highlight is a sprite
//! entity tagged [`CellHighlight`], parented to its editor.

mod document;
mod host;
mod systems;

pub use document::{ActiveEditor, CellHighlight, CellHighlighter, EditorCursor, EditorDocument};

use bevy::prelude::*;
use leafwing_input_manager::prelude::{ActionState, InputManagerPlugin, InputMap};

use crate::controller::{CellHighlightController, DEFAULT_LANGUAGE};
use crate::events::{CellHighlightNotice, ToggleCellHighlighting};
use crate::input::{handle_toggle_action, CellHighlightAction, CellHighlightInputManager};
use crate::settings::{CellHighlightLayout, CellHighlightSettings};
use systems::{clear_cell_highlight_on_exit, dispatch_cell_highlight_events};

/// Cell highlighter plugin
///
/// # Example
/// ```no_run
/// use bevy::prelude::*;
/// use bevy_cell_highlighter::prelude::*;
///
/// App::new()
///     .add_plugins(DefaultPlugins)
///     .add_plugins(
///         CellHighlighterPlugin::default()
///             .with_settings(CellHighlightSettings::default().with_background_color("#264f7840"))
///             .with_input_map(default_input_map()),
///     )
///     .run();
/// ```
pub struct CellHighlighterPlugin {
    settings: CellHighlightSettings,
    layout: CellHighlightLayout,
    language: String,
    input_map: Option<InputMap<CellHighlightAction>>,
}

impl Default for CellHighlighterPlugin {
    fn default() -> Self {
        Self {
            settings: CellHighlightSettings::default(),
            layout: CellHighlightLayout::default(),
            language: DEFAULT_LANGUAGE.to_string(),
            input_map: None,
        }
    }
}

impl CellHighlighterPlugin {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom highlight settings
    pub fn with_settings(mut self, settings: CellHighlightSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_layout(mut self, layout: CellHighlightLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Highlight documents of `language` instead of Python
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Bind the toggle action to keys
    ///
    /// Without an input map the toggle is only reachable through the
    /// [`ToggleCellHighlighting`] message.
    pub fn with_input_map(mut self, input_map: InputMap<CellHighlightAction>) -> Self {
        self.input_map = Some(input_map);
        self
    }
}

/// Resource to hold the configured input map until it's spawned
#[derive(Resource)]
struct PendingInputMap(InputMap<CellHighlightAction>);

impl Plugin for CellHighlighterPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone());
        app.insert_resource(self.layout.clone());
        app.insert_resource(CellHighlighter(
            CellHighlightController::new().with_language(self.language.clone()),
        ));
        app.init_resource::<ActiveEditor>();

        app.add_message::<ToggleCellHighlighting>();
        app.add_message::<CellHighlightNotice>();

        app.add_systems(Update, dispatch_cell_highlight_events);
        app.add_systems(Last, clear_cell_highlight_on_exit);

        if let Some(input_map) = &self.input_map {
            app.insert_resource(PendingInputMap(input_map.clone()));
            app.add_plugins(InputManagerPlugin::<CellHighlightAction>::default());
            app.add_systems(Startup, spawn_input_manager);
            app.add_systems(
                Update,
                handle_toggle_action.before(dispatch_cell_highlight_events),
            );
        }
    }
}

/// Spawn the input manager entity with configured keybindings
fn spawn_input_manager(mut commands: Commands, pending: Res<PendingInputMap>) {
    commands.spawn((
        CellHighlightInputManager,
        pending.0.clone(),
        ActionState::<CellHighlightAction>::default(),
        Name::new("CellHighlightInputManager"),
    ));
}
