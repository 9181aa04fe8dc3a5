use std::io;
use std::sync::{mpsc, Arc};

use joiner_core::{Effect, Msg};
use joiner_engine::{EngineConfig, EngineEvent, EngineHandle, EventSink};
use joiner_logging::{joiner_info, joiner_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, event_tx: mpsc::Sender<AppEvent>) -> io::Result<Self> {
        let engine = EngineHandle::new(config, Arc::new(MsgSink { tx: event_tx }))?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::JoinFiles { generation, files } => {
                    joiner_info!("JoinFiles generation={} files={}", generation, files.len());
                    let paths = files.into_iter().map(|file| file.path).collect();
                    self.engine.join(generation, paths);
                }
                Effect::SaveJoined { content, format } => {
                    joiner_info!("SaveJoined format={} bytes={}", format, content.len());
                    self.engine.save(content, format.as_str());
                }
            }
        }
    }
}

/// Feeds engine results back into the session as core messages.
struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::JoinCompleted { request_id, result } => Msg::JoinFinished {
            generation: request_id,
            result: match result {
                Ok(output) => Ok(output.content),
                Err(failure) => {
                    joiner_warn!("Join {} failed: {}", request_id, failure);
                    Err(failure.to_string())
                }
            },
        },
        EngineEvent::SaveCompleted { result } => Msg::DownloadFinished { result },
    }
}
