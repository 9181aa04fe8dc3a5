use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use joiner_core::{update, AppState, DroppedFile, Effect, Msg, OutputFormat, OUTPUT_FORMAT_CHOICES};
use joiner_engine::{AcceptedFile, DropSurface, EngineConfig};
use joiner_logging::{joiner_info, joiner_warn};

use super::args::Args;
use super::config::{load_config, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui::commands::{parse_command, UiCommand};
use super::ui::constants::{HELP_LINES, PROMPT};
use super::ui::render::render;

/// Everything the session loop reacts to.
pub enum AppEvent {
    /// A line typed at the prompt.
    Input(String),
    /// Standard input reached end of file.
    InputClosed,
    /// Engine result mapped to a core message.
    Msg(Msg),
}

pub fn run_app(args: Args) -> anyhow::Result<()> {
    let loaded = load_config(&args.config);
    let mut config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    args.apply_overrides(&mut config);

    logging::initialize(config.log);
    match loaded {
        Ok(Some(_)) => joiner_info!("Loaded config from {:?}", args.config),
        Ok(None) => joiner_info!("No config at {:?}; using defaults", args.config),
        Err(err) => joiner_warn!("{}; using defaults", err),
    }

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects = EffectRunner::new(
        EngineConfig::default_with_output(config.output_dir.clone()),
        event_tx.clone(),
    )
    .context("failed to start the file engine")?;
    let mut session = Session::new(DropSurface::new(config.surface_config()), effects);

    if args.files.is_empty() {
        session.render_now();
    } else {
        session.handle_command(UiCommand::Add(args.files.clone()));
    }
    spawn_input_reader(event_tx);

    let mut stdout = io::stdout();
    write_output(&mut stdout, session.take_output(), true)?;

    while let Ok(event) = event_rx.recv() {
        let flow = session.handle_event(event);
        let prompt = flow == Flow::Continue && !session.is_busy();
        write_output(&mut stdout, session.take_output(), prompt)?;
        if flow == Flow::Quit {
            break;
        }
    }

    joiner_info!("Session ended");
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if tx.send(AppEvent::Input(line)).is_err() {
                        return;
                    }
                }
                Err(err) => {
                    joiner_warn!("Failed to read standard input: {}", err);
                    break;
                }
            }
        }
        let _ = tx.send(AppEvent::InputClosed);
    });
}

fn write_output(out: &mut impl Write, lines: Vec<String>, prompt: bool) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    if prompt {
        write!(out, "{PROMPT}")?;
    }
    out.flush()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Owns the core state and turns typed commands into messages. Input that
/// arrives while a join or save is running waits until it settles.
struct Session {
    state: AppState,
    surface: DropSurface,
    effects: EffectRunner,
    saving: bool,
    deferred: VecDeque<String>,
    input_closed: bool,
    output: Vec<String>,
}

impl Session {
    fn new(surface: DropSurface, effects: EffectRunner) -> Self {
        Self {
            state: AppState::new(),
            surface,
            effects,
            saving: false,
            deferred: VecDeque::new(),
            input_closed: false,
            output: Vec::new(),
        }
    }

    fn is_busy(&self) -> bool {
        self.state.is_joining() || self.saving
    }

    fn take_output(&mut self) -> Vec<String> {
        std::mem::take(&mut self.output)
    }

    fn handle_event(&mut self, event: AppEvent) -> Flow {
        match event {
            AppEvent::Msg(msg) => {
                if matches!(msg, Msg::DownloadFinished { .. }) {
                    self.saving = false;
                }
                self.dispatch_msg(msg);
            }
            AppEvent::Input(line) => self.deferred.push_back(line),
            AppEvent::InputClosed => self.input_closed = true,
        }

        while !self.is_busy() {
            let Some(line) = self.deferred.pop_front() else {
                break;
            };
            if self.handle_line(&line) == Flow::Quit {
                return Flow::Quit;
            }
        }

        if self.input_closed && self.deferred.is_empty() && !self.is_busy() {
            Flow::Quit
        } else {
            Flow::Continue
        }
    }

    fn handle_line(&mut self, line: &str) -> Flow {
        match parse_command(line) {
            Ok(Some(command)) => self.handle_command(command),
            Ok(None) => Flow::Continue,
            Err(err) => {
                self.output.push(err.to_string());
                Flow::Continue
            }
        }
    }

    fn handle_command(&mut self, command: UiCommand) -> Flow {
        match command {
            UiCommand::Add(paths) => {
                let accepted = self.surface.accept(&paths);
                if accepted.len() < paths.len() {
                    self.output.push(format!(
                        "Accepted {} of {} files (text-like extensions, at most {} per batch).",
                        accepted.len(),
                        paths.len(),
                        self.surface.config().max_files
                    ));
                }
                let dropped = accepted.into_iter().map(to_dropped).collect();
                self.dispatch_msg(Msg::FilesAdded(dropped));
            }
            UiCommand::Remove(index) => {
                if self.check_position(index) {
                    self.dispatch_msg(Msg::RemoveFile { index });
                }
            }
            UiCommand::Order(positions) => match self.ids_for(&positions) {
                Some(order) => self.dispatch_msg(Msg::FilesReordered(order)),
                None => self.output.push(format!(
                    "`order` must list every position from 1 to {} exactly once.",
                    self.state.files().len()
                )),
            },
            UiCommand::Drag(index) => {
                if self.check_position(index) {
                    self.dispatch_msg(Msg::DragStarted { index });
                }
            }
            UiCommand::Over(index) => {
                if self.state.drag().dragged_index().is_none() {
                    self.output.push("Nothing is being dragged; use `drag <n>` first.".into());
                } else if self.check_position(index) {
                    self.dispatch_msg(Msg::DraggedOver { index });
                }
            }
            UiCommand::Drop => self.dispatch_msg(Msg::DragEnded),
            UiCommand::Move { from, to } => {
                if self.check_position(from) && self.check_position(to) {
                    self.dispatch_msg(Msg::DragStarted { index: from });
                    self.dispatch_msg(Msg::DraggedOver { index: to });
                    self.dispatch_msg(Msg::DragEnded);
                }
            }
            UiCommand::Join => self.dispatch_msg(Msg::JoinClicked),
            UiCommand::Format(value) => {
                if OutputFormat::choice(&value).is_some() {
                    self.dispatch_msg(Msg::OutputFormatSelected(value));
                } else {
                    self.output.push(format!(
                        "Unknown format `{value}`; choose one of {}.",
                        OUTPUT_FORMAT_CHOICES.join(", ")
                    ));
                }
            }
            UiCommand::Download => {
                if self.state.joined_content().is_none() {
                    self.output.push("Nothing to download yet; run `join` first.".into());
                } else {
                    self.dispatch_msg(Msg::DownloadClicked);
                }
            }
            UiCommand::Show => match self.state.joined_content() {
                Some(content) => self.output.push(content.to_string()),
                None => self.output.push("Nothing joined yet.".into()),
            },
            UiCommand::List => self.render_now(),
            UiCommand::Clear => self.dispatch_msg(Msg::ClearAll),
            UiCommand::Help => self
                .output
                .extend(HELP_LINES.iter().map(|line| line.to_string())),
            UiCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    fn check_position(&mut self, index: usize) -> bool {
        if index < self.state.files().len() {
            true
        } else {
            self.output.push(format!("No file at position {}.", index + 1));
            false
        }
    }

    /// Maps 0-based positions to file ids; `None` unless they cover every
    /// position exactly once.
    fn ids_for(&self, positions: &[usize]) -> Option<Vec<joiner_core::FileId>> {
        let ids = self.state.files().ids();
        let mut seen = vec![false; ids.len()];
        if positions.len() != ids.len() {
            return None;
        }
        positions
            .iter()
            .map(|&pos| {
                let slot = seen.get_mut(pos)?;
                if std::mem::replace(slot, true) {
                    return None;
                }
                Some(ids[pos])
            })
            .collect()
    }

    fn dispatch_msg(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        if effects
            .iter()
            .any(|effect| matches!(effect, Effect::SaveJoined { .. }))
        {
            self.saving = true;
        }
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.enqueue(effects);
        if was_dirty {
            self.render_now();
        }
    }

    fn render_now(&mut self) {
        self.output.extend(render(&self.state.view()));
    }
}

fn to_dropped(file: AcceptedFile) -> DroppedFile {
    DroppedFile::new(file.path, file.name, file.size)
}
