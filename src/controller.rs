//! Highlight controller
//!
//! Owns the enabled flag and the single active highlight, reacts to editor
//! events and talks to the hosting editor through [`HighlightHost`].

use std::fmt::Debug;

use bevy::log::{debug, info};

use crate::cell::{find_cell_boundaries, CellBoundaries, DocumentLines};
use crate::error::CellError;
use crate::settings::affects_configuration;

/// Language whose documents get cell highlighting by default
pub const DEFAULT_LANGUAGE: &str = "python";

/// Editor environment the controller drives
pub trait HighlightHost {
    /// Reference to one open editor
    type Editor: Copy + Debug;
    /// Line view of an editor's document
    type Document: DocumentLines + ?Sized;
    /// Handle of a displayed highlight
    type Mark;

    /// Currently focused editor, if any
    fn active_editor(&self) -> Option<Self::Editor>;

    /// Language id of the editor's document, `None` if the editor is gone
    fn language_id(&self, editor: Self::Editor) -> Option<&str>;

    fn document(&self, editor: Self::Editor) -> Option<&Self::Document>;

    /// Line the editor's primary cursor sits on
    fn cursor_line(&self, editor: Self::Editor) -> Option<usize>;

    /// Configured highlight color, read fresh on every call
    fn background_color(&self) -> String;

    /// Highlight whole lines `cell.start_line..=cell.end_line`
    fn apply_mark(&mut self, editor: Self::Editor, cell: CellBoundaries, color: &str) -> Self::Mark;

    fn clear_mark(&mut self, mark: Self::Mark);

    /// Informational message for the user
    fn show_message(&mut self, text: &str);
}

/// Events the controller reacts to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HighlightEvent<E> {
    /// Cursor or selection moved in an editor
    CursorMoved(E),
    /// Focus moved to another editor, or to none
    ActiveEditorChanged(Option<E>),
    /// A configuration section changed
    ConfigurationChanged { section: String },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HighlightState {
    #[default]
    Enabled,
    Disabled,
}

/// Cell highlight controller, generic over the host's mark handle
#[derive(Debug)]
pub struct CellHighlightController<M> {
    state: HighlightState,
    active_mark: Option<M>,
    language: String,
}

impl<M> Default for CellHighlightController<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> CellHighlightController<M> {
    pub fn new() -> Self {
        Self {
            state: HighlightState::Enabled,
            active_mark: None,
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Highlight documents of `language` instead of Python
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn state(&self) -> HighlightState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == HighlightState::Enabled
    }

    pub fn active_mark(&self) -> Option<&M> {
        self.active_mark.as_ref()
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Whether the editor holds a document of the highlighted language
    pub fn applies_to<H>(&self, host: &H, editor: H::Editor) -> bool
    where
        H: HighlightHost<Mark = M>,
    {
        host.language_id(editor) == Some(self.language.as_str())
    }

    /// Highlight the already-focused editor at startup
    pub fn activate<H>(&mut self, host: &mut H) -> Result<(), CellError>
    where
        H: HighlightHost<Mark = M>,
    {
        if !self.is_enabled() {
            return Ok(());
        }
        match host.active_editor() {
            Some(editor) => self.refresh(editor, host),
            None => Ok(()),
        }
    }

    /// Flip between enabled and disabled, returning the new state
    pub fn toggle<H>(&mut self, host: &mut H) -> Result<HighlightState, CellError>
    where
        H: HighlightHost<Mark = M>,
    {
        match self.state {
            HighlightState::Enabled => {
                self.state = HighlightState::Disabled;
                host.show_message("Cell highlighting disabled");
                self.clear(host);
            }
            HighlightState::Disabled => {
                self.state = HighlightState::Enabled;
                host.show_message("Cell highlighting enabled");
                if let Some(editor) = host.active_editor() {
                    self.refresh(editor, host)?;
                }
            }
        }
        Ok(self.state)
    }

    /// React to an editor event; ignored while disabled
    pub fn handle<H>(&mut self, event: HighlightEvent<H::Editor>, host: &mut H) -> Result<(), CellError>
    where
        H: HighlightHost<Mark = M>,
    {
        if !self.is_enabled() {
            return Ok(());
        }

        match event {
            HighlightEvent::CursorMoved(editor) | HighlightEvent::ActiveEditorChanged(Some(editor)) => {
                self.refresh(editor, host)
            }
            HighlightEvent::ActiveEditorChanged(None) => Ok(()),
            HighlightEvent::ConfigurationChanged { section } => {
                if !affects_configuration(&section) {
                    return Ok(());
                }
                match host.active_editor() {
                    Some(editor) => self.refresh(editor, host),
                    None => Ok(()),
                }
            }
        }
    }

    /// Replace the active highlight with one covering the cursor's cell
    ///
    /// Editors of other languages, or ones that have gone away, are skipped.
    pub fn refresh<H>(&mut self, editor: H::Editor, host: &mut H) -> Result<(), CellError>
    where
        H: HighlightHost<Mark = M>,
    {
        if !self.applies_to(host, editor) {
            debug!("Not highlighting {:?}: not a {} editor", editor, self.language);
            return Ok(());
        }

        self.clear(host);

        let (Some(document), Some(cursor_line)) = (host.document(editor), host.cursor_line(editor)) else {
            return Ok(());
        };
        let cell = find_cell_boundaries(document, cursor_line)?;
        debug!(
            "Cell boundaries for cursor at line {}: lines {} to {}",
            cursor_line, cell.start_line, cell.end_line
        );

        let color = host.background_color();
        self.active_mark = Some(host.apply_mark(editor, cell, &color));
        Ok(())
    }

    /// Remove the active highlight, if there is one
    pub fn clear<H>(&mut self, host: &mut H)
    where
        H: HighlightHost<Mark = M>,
    {
        if let Some(mark) = self.active_mark.take() {
            host.clear_mark(mark);
        }
    }

    /// Teardown: drop any highlight regardless of state
    pub fn deactivate<H>(&mut self, host: &mut H)
    where
        H: HighlightHost<Mark = M>,
    {
        info!("Cell highlighter shutting down");
        self.clear(host);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq, Eq)]
    enum Call {
        Apply { mark: u32, editor: usize, cell: CellBoundaries, color: String },
        Clear(u32),
        Message(String),
    }

    struct FakeEditor {
        language: &'static str,
        lines: Vec<String>,
        cursor_line: usize,
    }

    #[derive(Default)]
    struct FakeHost {
        editors: Vec<FakeEditor>,
        active: Option<usize>,
        color: String,
        next_mark: u32,
        live_marks: Vec<u32>,
        calls: Vec<Call>,
    }

    impl FakeHost {
        fn with_editor(language: &'static str, lines: &[&str], cursor_line: usize) -> Self {
            let mut host = FakeHost {
                color: "#ff000033".to_string(),
                ..Default::default()
            };
            host.open(language, lines, cursor_line);
            host.active = Some(0);
            host
        }

        fn open(&mut self, language: &'static str, lines: &[&str], cursor_line: usize) -> usize {
            self.editors.push(FakeEditor {
                language,
                lines: lines.iter().map(|line| line.to_string()).collect(),
                cursor_line,
            });
            self.editors.len() - 1
        }

        fn applied(&self) -> Vec<CellBoundaries> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Apply { cell, .. } => Some(*cell),
                    _ => None,
                })
                .collect()
        }

        fn messages(&self) -> Vec<&str> {
            self.calls
                .iter()
                .filter_map(|call| match call {
                    Call::Message(text) => Some(text.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl HighlightHost for FakeHost {
        type Editor = usize;
        type Document = Vec<String>;
        type Mark = u32;

        fn active_editor(&self) -> Option<usize> {
            self.active
        }

        fn language_id(&self, editor: usize) -> Option<&str> {
            self.editors.get(editor).map(|e| e.language)
        }

        fn document(&self, editor: usize) -> Option<&Vec<String>> {
            self.editors.get(editor).map(|e| &e.lines)
        }

        fn cursor_line(&self, editor: usize) -> Option<usize> {
            self.editors.get(editor).map(|e| e.cursor_line)
        }

        fn background_color(&self) -> String {
            self.color.clone()
        }

        fn apply_mark(&mut self, editor: usize, cell: CellBoundaries, color: &str) -> u32 {
            let mark = self.next_mark;
            self.next_mark += 1;
            self.live_marks.push(mark);
            self.calls.push(Call::Apply {
                mark,
                editor,
                cell,
                color: color.to_string(),
            });
            mark
        }

        fn clear_mark(&mut self, mark: u32) {
            self.live_marks.retain(|&m| m != mark);
            self.calls.push(Call::Clear(mark));
        }

        fn show_message(&mut self, text: &str) {
            self.calls.push(Call::Message(text.to_string()));
        }
    }

    const NOTEBOOK: [&str; 4] = ["x=1", "#%% cell2", "y=2", "z=3"];

    #[test]
    fn test_starts_enabled_without_mark() {
        let controller = CellHighlightController::<u32>::new();
        assert!(controller.is_enabled());
        assert_eq!(controller.state(), HighlightState::Enabled);
        assert!(controller.active_mark().is_none());
        assert_eq!(controller.language(), "python");
    }

    #[test]
    fn test_cursor_move_applies_mark() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();

        controller.handle(HighlightEvent::CursorMoved(0), &mut host).unwrap();

        assert_eq!(
            host.calls,
            vec![Call::Apply {
                mark: 0,
                editor: 0,
                cell: CellBoundaries::new(1, 3),
                color: "#ff000033".to_string(),
            }]
        );
        assert_eq!(controller.active_mark(), Some(&0));
    }

    #[test]
    fn test_refresh_clears_previous_mark() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();

        controller.handle(HighlightEvent::CursorMoved(0), &mut host).unwrap();
        host.editors[0].cursor_line = 0;
        controller.handle(HighlightEvent::CursorMoved(0), &mut host).unwrap();

        assert_eq!(host.calls[1], Call::Clear(0));
        assert_eq!(host.applied(), vec![CellBoundaries::new(1, 3), CellBoundaries::new(0, 0)]);
        assert_eq!(host.live_marks, vec![1]);
        assert_eq!(controller.active_mark(), Some(&1));
    }

    #[test]
    fn test_color_read_on_every_refresh() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();

        controller.handle(HighlightEvent::CursorMoved(0), &mut host).unwrap();
        host.color = "#00ff00".to_string();
        controller
            .handle(
                HighlightEvent::ConfigurationChanged {
                    section: "cellHighlighter.backgroundColor".to_string(),
                },
                &mut host,
            )
            .unwrap();

        match host.calls.last() {
            Some(Call::Apply { color, .. }) => assert_eq!(color, "#00ff00"),
            other => panic!("expected a mark, got {:?}", other),
        }
    }

    #[test]
    fn test_unrelated_configuration_ignored() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();

        controller
            .handle(
                HighlightEvent::ConfigurationChanged {
                    section: "editor.fontSize".to_string(),
                },
                &mut host,
            )
            .unwrap();

        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_other_language_ignored() {
        let mut host = FakeHost::with_editor("rust", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();

        controller.handle(HighlightEvent::CursorMoved(0), &mut host).unwrap();
        controller.handle(HighlightEvent::ActiveEditorChanged(Some(0)), &mut host).unwrap();
        controller.activate(&mut host).unwrap();

        assert!(host.calls.is_empty());
        assert!(controller.active_mark().is_none());
    }

    #[test]
    fn test_custom_language() {
        let mut host = FakeHost::with_editor("julia", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new().with_language("julia");

        controller.handle(HighlightEvent::CursorMoved(0), &mut host).unwrap();

        assert_eq!(host.applied(), vec![CellBoundaries::new(1, 3)]);
    }

    #[test]
    fn test_active_editor_change() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let other = host.open("python", &["#%% a", "#%% b", "r=3"], 0);
        let mut controller = CellHighlightController::new();

        controller.activate(&mut host).unwrap();
        host.active = Some(other);
        controller.handle(HighlightEvent::ActiveEditorChanged(Some(other)), &mut host).unwrap();

        assert_eq!(host.applied(), vec![CellBoundaries::new(1, 3), CellBoundaries::new(0, 0)]);
        assert_eq!(host.live_marks.len(), 1);

        // Losing focus entirely leaves the highlight alone
        controller.handle(HighlightEvent::ActiveEditorChanged(None), &mut host).unwrap();
        assert_eq!(host.live_marks.len(), 1);
    }

    #[test]
    fn test_toggle_off_clears_and_suppresses_events() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();
        controller.activate(&mut host).unwrap();

        let state = controller.toggle(&mut host).unwrap();

        assert_eq!(state, HighlightState::Disabled);
        assert!(host.live_marks.is_empty());
        assert!(controller.active_mark().is_none());
        assert_eq!(host.messages(), vec!["Cell highlighting disabled"]);

        let calls_before = host.calls.len();
        host.editors[0].cursor_line = 0;
        controller.handle(HighlightEvent::CursorMoved(0), &mut host).unwrap();
        controller.handle(HighlightEvent::ActiveEditorChanged(Some(0)), &mut host).unwrap();
        controller
            .handle(
                HighlightEvent::ConfigurationChanged {
                    section: "cellHighlighter".to_string(),
                },
                &mut host,
            )
            .unwrap();
        assert_eq!(host.calls.len(), calls_before);
    }

    #[test]
    fn test_toggle_on_refreshes_active_editor() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();

        controller.toggle(&mut host).unwrap();
        let state = controller.toggle(&mut host).unwrap();

        assert_eq!(state, HighlightState::Enabled);
        assert_eq!(
            host.messages(),
            vec!["Cell highlighting disabled", "Cell highlighting enabled"]
        );
        assert_eq!(host.applied(), vec![CellBoundaries::new(1, 3)]);
        assert_eq!(host.live_marks.len(), 1);
    }

    #[test]
    fn test_toggle_on_without_active_editor() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        host.active = None;
        let mut controller = CellHighlightController::new();

        controller.toggle(&mut host).unwrap();
        controller.toggle(&mut host).unwrap();

        assert!(host.applied().is_empty());
    }

    #[test]
    fn test_clear_without_mark_is_noop() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::<u32>::new();

        controller.clear(&mut host);
        controller.deactivate(&mut host);

        assert!(host.calls.is_empty());
    }

    #[test]
    fn test_deactivate_clears_mark() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();
        controller.activate(&mut host).unwrap();

        controller.deactivate(&mut host);

        assert!(host.live_marks.is_empty());
        assert!(controller.active_mark().is_none());
    }

    #[test]
    fn test_out_of_range_cursor_is_an_error() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 9);
        let mut controller = CellHighlightController::new();

        let err = controller.handle(HighlightEvent::CursorMoved(0), &mut host).unwrap_err();

        assert_eq!(
            err,
            CellError::CursorOutOfBounds {
                cursor_line: 9,
                line_count: 4,
            }
        );
        assert!(host.applied().is_empty());
    }

    #[test]
    fn test_vanished_editor_is_skipped() {
        let mut host = FakeHost::with_editor("python", &NOTEBOOK, 2);
        let mut controller = CellHighlightController::new();

        controller.handle(HighlightEvent::CursorMoved(7), &mut host).unwrap();

        assert!(host.calls.is_empty());
    }
}
