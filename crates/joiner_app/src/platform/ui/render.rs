use joiner_core::{AppViewModel, FileRowView};

use super::preview::prepare_preview_content;

pub fn render(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::new();

    if view.files.is_empty() {
        lines.push("No files yet. Use `add <paths...>` to select text files.".to_string());
    } else {
        lines.push(format!("Files to join ({})", view.file_count));
        lines.extend(view.files.iter().map(format_file_row));
    }

    if let Some(error) = &view.error {
        lines.push(format!("Error: {error}"));
    }

    if view.is_joining {
        lines.push("Joining...".to_string());
    }

    if let Some(content) = &view.joined_content {
        lines.push(format!(
            "Joined content ({} chars) | Format: {}",
            content.chars().count(),
            view.output_format
        ));
        lines.extend(
            prepare_preview_content(content)
                .lines()
                .map(|line| format!("  | {line}")),
        );
        lines.push("Use `download` to save or `format <ext>` to change the extension.".to_string());
    }

    if let Some(path) = &view.last_saved {
        lines.push(format!("Saved {}", path.display()));
    }

    lines
}

fn format_file_row(row: &FileRowView) -> String {
    let marker = if row.is_dragged { '>' } else { ' ' };
    format!(
        "{marker} {position:>3}. {name} ({size})",
        position = row.position,
        name = row.name,
        size = row.size_label
    )
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use joiner_core::{update, AppState, DroppedFile, Effect, Msg};
    use pretty_assertions::assert_eq;

    use super::render;

    fn state_with(names: &[&str]) -> AppState {
        let batch = names
            .iter()
            .map(|n| DroppedFile::new(*n, *n, 2048))
            .collect();
        update(AppState::new(), Msg::FilesAdded(batch)).0
    }

    #[test]
    fn empty_state_shows_hint() {
        let lines = render(&AppState::new().view());
        assert_eq!(
            lines,
            vec!["No files yet. Use `add <paths...>` to select text files."]
        );
    }

    #[test]
    fn rows_show_position_name_size_and_drag_marker() {
        let (state, _) = update(state_with(&["a.md", "b.md"]), Msg::DragStarted { index: 1 });
        let lines = render(&state.view());
        assert_eq!(
            lines,
            vec![
                "Files to join (2)",
                "    1. a.md (2.0 KB)",
                ">   2. b.md (2.0 KB)",
            ]
        );
    }

    #[test]
    fn joined_content_and_saved_path_are_listed() {
        let (state, effects) = update(state_with(&["a.md", "b.md"]), Msg::JoinClicked);
        let generation = match effects.as_slice() {
            [Effect::JoinFiles { generation, .. }] => *generation,
            other => panic!("unexpected effects {other:?}"),
        };
        let (state, _) = update(
            state,
            Msg::JoinFinished {
                generation,
                result: Ok("Hello\n\nWorld".to_string()),
            },
        );
        let (state, _) = update(
            state,
            Msg::DownloadFinished {
                result: Ok(PathBuf::from("out/joined.md")),
            },
        );

        let lines = render(&state.view());
        assert_eq!(
            lines[3..].to_vec(),
            vec![
                "Joined content (12 chars) | Format: md",
                "  | Hello",
                "  | ",
                "  | World",
                "Use `download` to save or `format <ext>` to change the extension.",
                "Saved out/joined.md",
            ]
        );
    }

    #[test]
    fn error_and_progress_lines() {
        let (state, _) = update(AppState::new(), Msg::JoinClicked);
        let lines = render(&state.view());
        assert_eq!(lines[1], "Error: Please add at least one file to join.");

        let (state, _) = update(state_with(&["a.md"]), Msg::JoinClicked);
        assert!(render(&state.view()).contains(&"Joining...".to_string()));
    }
}
