//! Basic cell highlighter example
//!
//! Arrow Up/Down move the cursor line, Ctrl+Alt+H toggles highlighting.
//! The cell around the cursor is highlighted behind the text.

use bevy::prelude::*;
use bevy_cell_highlighter::prelude::*;

const SCRIPT: &str = r#"import numpy as np
import matplotlib.pyplot as plt

# %% Load data
data = np.random.randn(1000)
print(data.mean())

# %% Plot
plt.hist(data, bins=30)
plt.show()

#%%
#%% Summary
print("done")
"#;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bevy Cell Highlighter".to_string(),
                resolution: (1400, 900).into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(
            CellHighlighterPlugin::default()
                .with_settings(CellHighlightSettings::default().with_background_color("#264f78"))
                .with_input_map(default_input_map()),
        )
        .add_systems(Startup, setup_editor)
        .add_systems(Update, (move_cursor, log_notices))
        .run();
}

fn setup_editor(
    mut commands: Commands,
    mut active: ResMut<ActiveEditor>,
    layout: Res<CellHighlightLayout>,
) {
    commands.spawn(Camera2d);

    let document = EditorDocument::new("python", SCRIPT);
    let cursor = document.cursor_at_line(4);

    let editor = commands
        .spawn((
            document,
            cursor,
            Transform::from_xyz(-650.0, 420.0, 0.0),
            Visibility::default(),
            Name::new("Editor"),
        ))
        .id();

    // One text entity per line, stacked like the highlight rows
    for (row, line) in SCRIPT.lines().enumerate() {
        let cell = CellBoundaries::new(row, row);
        let mut translation = layout.translation(&cell);
        translation.z = 1.0;
        commands.spawn((
            Text2d::new(line.to_string()),
            TextFont {
                font_size: 14.0,
                ..default()
            },
            Transform::from_translation(translation),
            ChildOf(editor),
        ));
    }

    active.0 = Some(editor);
}

fn move_cursor(
    keys: Res<ButtonInput<KeyCode>>,
    active: Res<ActiveEditor>,
    mut editors: Query<(&EditorDocument, &mut EditorCursor)>,
) {
    let Some(editor) = active.0 else {
        return;
    };
    let Ok((document, mut cursor)) = editors.get_mut(editor) else {
        return;
    };

    let line = cursor.line(&document.rope);
    if keys.just_pressed(KeyCode::ArrowDown) {
        *cursor = document.cursor_at_line(line + 1);
    } else if keys.just_pressed(KeyCode::ArrowUp) {
        *cursor = document.cursor_at_line(line.saturating_sub(1));
    }
}

fn log_notices(mut notices: MessageReader<CellHighlightNotice>) {
    for notice in notices.read() {
        info!("Notice: {}", notice.text);
    }
}
