use std::io;
use std::path::PathBuf;
use std::sync::{mpsc, Arc};
use std::thread;

use joiner_logging::{joiner_info, joiner_warn};

use crate::export::save_joined;
use crate::join::read_and_join;
use crate::reader::{FsTextSource, TextSource};
use crate::{EngineEvent, JoinFailure, RequestId};

#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Directory that receives saved joined files.
    pub output_dir: PathBuf,
}

impl EngineConfig {
    pub fn default_with_output(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }
}

enum EngineCommand {
    Join {
        request_id: RequestId,
        paths: Vec<PathBuf>,
    },
    Save {
        content: String,
        extension: String,
    },
}

/// Receives engine results. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

/// Runs file IO on a background tokio runtime. Commands go in through
/// [`EngineHandle::join`] / [`EngineHandle::save`]; results come back
/// through the [`EventSink`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig, sink: Arc<dyn EventSink>) -> io::Result<Self> {
        Self::with_source(config, Arc::new(FsTextSource), sink)
    }

    pub fn with_source(
        config: EngineConfig,
        source: Arc<dyn TextSource>,
        sink: Arc<dyn EventSink>,
    ) -> io::Result<Self> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let output_dir = Arc::new(config.output_dir);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let source = source.clone();
                let output_dir = output_dir.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    handle_command(source.as_ref(), &output_dir, command, sink.as_ref()).await;
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    /// Reads `paths` in order and joins them; answers with
    /// `EngineEvent::JoinCompleted`.
    pub fn join(&self, request_id: RequestId, paths: Vec<PathBuf>) {
        let _ = self.cmd_tx.send(EngineCommand::Join { request_id, paths });
    }

    /// Saves `content` with the given extension; answers with
    /// `EngineEvent::SaveCompleted`.
    pub fn save(&self, content: impl Into<String>, extension: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Save {
            content: content.into(),
            extension: extension.into(),
        });
    }
}

async fn handle_command(
    source: &dyn TextSource,
    output_dir: &std::path::Path,
    command: EngineCommand,
    sink: &dyn EventSink,
) {
    match command {
        EngineCommand::Join { request_id, paths } => {
            joiner_info!("Join request {} with {} files", request_id, paths.len());
            let result = read_and_join(source, &paths).await.map_err(|err| {
                joiner_warn!("Join request {} failed: {}", request_id, err);
                JoinFailure::from(err)
            });
            sink.emit(EngineEvent::JoinCompleted { request_id, result });
        }
        EngineCommand::Save { content, extension } => {
            let dir = output_dir.to_path_buf();
            let result = tokio::task::spawn_blocking(move || {
                save_joined(&dir, &content, &extension).map_err(|err| err.to_string())
            })
            .await
            .unwrap_or_else(|err| Err(err.to_string()));
            if let Err(err) = &result {
                joiner_warn!("Saving joined file failed: {}", err);
            }
            sink.emit(EngineEvent::SaveCompleted { result });
        }
    }
}
