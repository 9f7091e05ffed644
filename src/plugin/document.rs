//! Editor components the cell highlighter reads and writes

use std::borrow::Cow;

use bevy::prelude::*;
use ropey::Rope;

use crate::cell::{CellBoundaries, DocumentLines};
use crate::controller::CellHighlightController;

/// Text of an open editor
#[derive(Component, Clone, Debug)]
pub struct EditorDocument {
    /// Text buffer (efficient rope data structure)
    pub rope: Rope,

    /// Language of the document, e.g. `"python"`
    pub language_id: String,
}

impl EditorDocument {
    pub fn new(language_id: impl Into<String>, text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            language_id: language_id.into(),
        }
    }

    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
    }

    /// Cursor placed at the start of `line`, clamped to the last line
    pub fn cursor_at_line(&self, line: usize) -> EditorCursor {
        let line = line.min(self.rope.len_lines().saturating_sub(1));
        EditorCursor::new(self.rope.line_to_char(line))
    }
}

impl DocumentLines for EditorDocument {
    fn line_count(&self) -> usize {
        DocumentLines::line_count(&self.rope)
    }

    fn line(&self, index: usize) -> Cow<'_, str> {
        DocumentLines::line(&self.rope, index)
    }
}

/// Primary cursor of an editor
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EditorCursor {
    /// Cursor position (char index)
    pub cursor_pos: usize,
}

impl EditorCursor {
    pub fn new(cursor_pos: usize) -> Self {
        Self { cursor_pos }
    }

    /// Line the cursor sits on
    pub fn line(&self, rope: &Rope) -> usize {
        rope.char_to_line(self.cursor_pos.min(rope.len_chars()))
    }
}

/// Editor that currently has focus
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct ActiveEditor(pub Option<Entity>);

/// A displayed cell highlight, spawned as a child of its editor
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellHighlight {
    pub editor: Entity,
    pub cell: CellBoundaries,
}

/// The cell highlight controller; marks are highlight entities
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct CellHighlighter(pub CellHighlightController<Entity>);
