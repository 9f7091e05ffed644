//! Systems feeding editor changes into the cell highlight controller

use bevy::prelude::*;

use super::document::{ActiveEditor, CellHighlighter, EditorCursor, EditorDocument};
use super::host::{EditorQuery, WorldHost};
use crate::controller::HighlightEvent;
use crate::error::CellError;
use crate::events::{CellHighlightNotice, ToggleCellHighlighting};
use crate::settings::{CellHighlightLayout, CellHighlightSettings, SETTINGS_SECTION};

fn report(result: Result<(), CellError>) {
    if let Err(err) = result {
        warn!("Cell highlight not updated: {}", err);
    }
}

/// Derive highlight events from change detection and run them through the controller
///
/// The first run highlights the already-focused editor instead.
#[allow(clippy::too_many_arguments)]
pub(crate) fn dispatch_cell_highlight_events(
    mut commands: Commands,
    mut highlighter: ResMut<CellHighlighter>,
    mut activated: Local<bool>,
    active: Res<ActiveEditor>,
    settings: Res<CellHighlightSettings>,
    layout: Res<CellHighlightLayout>,
    editors: EditorQuery,
    moved: Query<Entity, (With<EditorDocument>, Or<(Changed<EditorCursor>, Changed<EditorDocument>)>)>,
    mut toggles: MessageReader<ToggleCellHighlighting>,
    mut notices: MessageWriter<CellHighlightNotice>,
) {
    let mut events = Vec::new();
    if *activated {
        if active.is_changed() {
            events.push(HighlightEvent::ActiveEditorChanged(active.0));
        }
        events.extend(moved.iter().map(HighlightEvent::CursorMoved));
        if settings.is_changed() || layout.is_changed() {
            events.push(HighlightEvent::ConfigurationChanged {
                section: SETTINGS_SECTION.to_string(),
            });
        }
    }

    let mut host = WorldHost {
        commands: &mut commands,
        editors: &editors,
        active: active.0,
        settings: &settings,
        layout: &layout,
        notices: Vec::new(),
    };

    if !*activated {
        *activated = true;
        report(highlighter.activate(&mut host));
    }

    for event in events {
        report(highlighter.handle(event, &mut host));
    }

    for _ in toggles.read() {
        match highlighter.toggle(&mut host) {
            Ok(state) => debug!("Cell highlighting now {:?}", state),
            Err(err) => warn!("Cell highlight not updated: {}", err),
        }
    }

    for text in host.notices {
        notices.write(CellHighlightNotice { text });
    }
}

/// Drop the highlight when the app shuts down
pub(crate) fn clear_cell_highlight_on_exit(
    mut commands: Commands,
    mut exits: MessageReader<AppExit>,
    mut highlighter: ResMut<CellHighlighter>,
    active: Res<ActiveEditor>,
    settings: Res<CellHighlightSettings>,
    layout: Res<CellHighlightLayout>,
    editors: EditorQuery,
) {
    if exits.read().count() == 0 {
        return;
    }

    let mut host = WorldHost {
        commands: &mut commands,
        editors: &editors,
        active: active.0,
        settings: &settings,
        layout: &layout,
        notices: Vec::new(),
    };
    highlighter.deactivate(&mut host);
}
