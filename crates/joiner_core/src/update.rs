use crate::{AppState, Effect, Msg, OutputFormat};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::FilesAdded(dropped) => {
            state.add_files(dropped);
            Vec::new()
        }
        Msg::RemoveFile { index } => {
            state.remove_file(index);
            Vec::new()
        }
        Msg::FilesReordered(order) => {
            state.reorder_files(&order);
            Vec::new()
        }
        Msg::DragStarted { index } => {
            state.start_drag(index);
            Vec::new()
        }
        Msg::DraggedOver { index } => {
            state.drag_over(index);
            Vec::new()
        }
        Msg::DragEnded => {
            state.end_drag();
            Vec::new()
        }
        Msg::JoinClicked => match state.begin_join() {
            Some((generation, files)) => vec![Effect::JoinFiles { generation, files }],
            None => Vec::new(),
        },
        Msg::JoinFinished { generation, result } => {
            // Late results for a request the user already moved past are only
            // allowed to release the in-progress flag.
            if state.is_joining() {
                state.finish_join(generation, result);
            }
            Vec::new()
        }
        Msg::OutputFormatSelected(value) => {
            if let Some(format) = OutputFormat::choice(&value) {
                state.set_output_format(format);
            }
            Vec::new()
        }
        Msg::DownloadClicked => match state.joined_content() {
            Some(content) => vec![Effect::SaveJoined {
                content: content.to_string(),
                format: state.output_format().clone(),
            }],
            None => Vec::new(),
        },
        Msg::DownloadFinished { result } => {
            state.record_saved(result);
            Vec::new()
        }
        Msg::ClearAll => {
            state.clear_all();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
