//! # Bevy Cell Highlighter
//!
//! Highlights the code cell around the cursor. Cells are blocks of lines
//! introduced by `#%%` / `# %%` delimiter comments, as used by notebook-style
//! Python scripts.
//!
//! ```rust,no_run
//! use bevy::prelude::*;
//! use bevy_cell_highlighter::prelude::*;
//!
//! fn main() {
//!     App::new()
//!         .add_plugins(DefaultPlugins)
//!         .add_plugins(CellHighlighterPlugin::default().with_input_map(default_input_map()))
//!         .add_systems(Startup, open_editor)
//!         .run();
//! }
//!
//! fn open_editor(mut commands: Commands, mut active: ResMut<ActiveEditor>) {
//!     let document = EditorDocument::new("python", "import numpy as np\n# %% load\ndata = np.arange(10)\n");
//!     let cursor = document.cursor_at_line(2);
//!     let editor = commands.spawn((document, cursor, Transform::default(), Visibility::default())).id();
//!     active.0 = Some(editor);
//! }
//! ```
//!
//! ## Without Bevy
//!
//! The boundary search works on any line source:
//!
//! ```rust
//! use bevy_cell_highlighter::cell::{find_cell_boundaries, CellBoundaries};
//!
//! let lines = ["x=1", "#%% cell2", "y=2", "z=3"];
//! assert_eq!(find_cell_boundaries(&lines, 2).unwrap(), CellBoundaries::new(1, 3));
//! ```
//!
//! Other editors drive [`controller::CellHighlightController`] through the
//! [`controller::HighlightHost`] trait.

pub mod cell;
pub mod controller;
pub mod error;
pub mod events;
pub mod input;
pub mod plugin;
pub mod settings;

pub mod prelude {
    //! Convenient re-exports for common usage
    pub use crate::cell::{find_cell_boundaries, is_cell_delimiter, CellBoundaries, DocumentLines};
    pub use crate::controller::{CellHighlightController, HighlightEvent, HighlightHost, HighlightState};
    pub use crate::error::{CellError, SettingsError};
    pub use crate::events::*;
    pub use crate::input::*;
    pub use crate::plugin::*;
    pub use crate::settings::*;
}
