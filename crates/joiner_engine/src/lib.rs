//! Joiner engine: file intake, text decoding, ordered joining and saving.
mod decode;
mod engine;
mod export;
mod filename;
mod join;
mod persist;
mod reader;
mod surface;
mod types;

pub use decode::{decode_text, DecodeError, DecodedText};
pub use engine::{ChannelEventSink, EngineConfig, EngineHandle, EventSink};
pub use export::{save_joined, save_joined_at};
pub use filename::{joined_filename, OUTPUT_PREFIX};
pub use join::{join_texts, read_and_join, JOIN_SEPARATOR};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
pub use reader::{FsTextSource, ReadError, TextSource};
pub use surface::{
    AcceptedFile, DropSurface, SurfaceConfig, DEFAULT_ACCEPTED_EXTENSIONS, DEFAULT_MAX_FILES,
};
pub use types::{EngineEvent, JoinFailure, JoinOutput, RequestId};
