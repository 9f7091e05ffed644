//! `HighlightHost` backed by the Bevy world

use bevy::prelude::*;

use super::document::{CellHighlight, EditorCursor, EditorDocument};
use crate::cell::CellBoundaries;
use crate::controller::HighlightHost;
use crate::settings::{parse_color_or_default, CellHighlightLayout, CellHighlightSettings};

pub(crate) type EditorQuery<'w, 's> = Query<'w, 's, (&'static EditorDocument, &'static EditorCursor)>;

/// One system run's view of the editors
///
/// Highlights are spawned and despawned through `Commands`, so they land in
/// queue order once the system finishes. Notices are collected and written
/// as messages by the caller.
pub(crate) struct WorldHost<'a, 'w, 's, 'qw, 'qs> {
    pub commands: &'a mut Commands<'w, 's>,
    pub editors: &'a EditorQuery<'qw, 'qs>,
    pub active: Option<Entity>,
    pub settings: &'a CellHighlightSettings,
    pub layout: &'a CellHighlightLayout,
    pub notices: Vec<String>,
}

impl HighlightHost for WorldHost<'_, '_, '_, '_, '_> {
    type Editor = Entity;
    type Document = EditorDocument;
    type Mark = Entity;

    fn active_editor(&self) -> Option<Entity> {
        self.active
    }

    fn language_id(&self, editor: Entity) -> Option<&str> {
        self.editors
            .get(editor)
            .ok()
            .map(|(document, _)| document.language_id.as_str())
    }

    fn document(&self, editor: Entity) -> Option<&EditorDocument> {
        self.editors.get(editor).ok().map(|(document, _)| document)
    }

    fn cursor_line(&self, editor: Entity) -> Option<usize> {
        self.editors
            .get(editor)
            .ok()
            .map(|(document, cursor)| cursor.line(&document.rope))
    }

    fn background_color(&self) -> String {
        self.settings.background_color.clone()
    }

    fn apply_mark(&mut self, editor: Entity, cell: CellBoundaries, color: &str) -> Entity {
        debug!(
            "Highlighting lines {} to {} of {:?}",
            cell.start_line, cell.end_line, editor
        );
        self.commands
            .spawn((
                CellHighlight { editor, cell },
                Sprite {
                    color: parse_color_or_default(color),
                    custom_size: Some(self.layout.size(&cell)),
                    ..default()
                },
                Transform::from_translation(self.layout.translation(&cell)),
                ChildOf(editor),
                Name::new(format!("CellHighlight_{}_{}", cell.start_line, cell.end_line)),
            ))
            .id()
    }

    fn clear_mark(&mut self, mark: Entity) {
        debug!("Clearing cell highlight {:?}", mark);
        // The highlight may already be gone along with its editor
        self.commands.entity(mark).try_despawn();
    }

    fn show_message(&mut self, text: &str) {
        info!("{}", text);
        self.notices.push(text.to_string());
    }
}
