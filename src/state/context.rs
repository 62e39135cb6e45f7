//! The main context for the canvas editor.
//!
//! `EditorContext` owns the document, the zoom controller, the dialog state
//! and the event bus. Every mutation goes through [`EditorContext::execute`],
//! which applies one [`Command`] and emits the matching [`EditorEvent`]s, so
//! subscribers (repaint, logging) see exactly the changes that happened.
//!
//! ```rust,no_run
//! use paged_canvas::command::Command;
//! use paged_canvas::config::EditorConfig;
//! use paged_canvas::element::ElementKind;
//! use paged_canvas::state::EditorContext;
//!
//! let mut editor = EditorContext::new(EditorConfig::default());
//! editor.execute(Command::AddElement { kind: ElementKind::Circle }).ok();
//! editor.execute(Command::ZoomIn).ok();
//! ```
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::EditorState;
use crate::command::Command;
use crate::config::EditorConfig;
use crate::document::Document;
use crate::error::{EditorError, EditorResult};
use crate::event::{EditorEvent, EventBus};
use crate::page::PageId;
use crate::util::time;
use crate::zoom::ZoomController;

#[derive(Debug)]
pub struct EditorContext {
    document: Document,
    zoom: ZoomController,
    state: EditorState,
    event_bus: EventBus,
    rng: SmallRng,
    config: EditorConfig,
}

impl EditorContext {
    /// Creates a context with a clock-seeded placement RNG
    pub fn new(config: EditorConfig) -> Self {
        let seed = (time::current_time_secs() * 1000.0) as u64;
        Self::with_seed(config, seed)
    }

    /// Creates a context whose random placements are reproducible
    pub fn with_seed(config: EditorConfig, seed: u64) -> Self {
        Self {
            document: Document::new(),
            zoom: ZoomController::new(config.zoom),
            state: EditorState::Idle,
            event_bus: EventBus::new(),
            rng: SmallRng::seed_from_u64(seed),
            config,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn zoom(&self) -> &ZoomController {
        &self.zoom
    }

    pub fn scale(&self) -> f32 {
        self.zoom.scale()
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Mutable dialog state; the rename dialog edits its text field in place
    pub fn state_mut(&mut self) -> &mut EditorState {
        &mut self.state
    }

    pub fn events(&self) -> &EventBus {
        &self.event_bus
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Applies a command. On error nothing changed and no event was emitted.
    pub fn execute(&mut self, command: Command) -> EditorResult {
        match command {
            Command::AddElement { kind } => {
                let page = self.document.pages().current();
                let id = self.document.elements_mut().add(
                    kind,
                    page,
                    self.config.placement_range,
                    &mut self.rng,
                );
                self.event_bus.emit(EditorEvent::ElementAdded { id, kind, page });
            }
            Command::MoveElement { id, position } => {
                self.document.elements_mut().update_position(id, position)?;
                self.event_bus.emit(EditorEvent::ElementMoved { id, position });
            }
            Command::AddPage => {
                let id = self.document.pages_mut().add();
                self.event_bus.emit(EditorEvent::PageAdded { id });
            }
            Command::SelectPage(id) => self.select_page(id)?,
            Command::BeginRename(id) => {
                let name = self
                    .document
                    .pages()
                    .get(id)
                    .ok_or(EditorError::PageNotFound(id))?
                    .name()
                    .to_owned();
                self.state = EditorState::RenamingPage {
                    page: id,
                    input: name,
                };
                self.event_bus.emit(EditorEvent::RenameStarted { page: id });
            }
            Command::CommitRename => {
                let EditorState::RenamingPage { page, input } = &self.state else {
                    return Err(EditorError::NoRenameInProgress);
                };
                let page = *page;
                // Empty input keeps the dialog open.
                let name = self.document.pages_mut().rename(page, input)?;
                self.state = EditorState::Idle;
                self.event_bus.emit(EditorEvent::PageRenamed { id: page, name });
                self.event_bus.emit(EditorEvent::RenameClosed);
            }
            Command::CancelRename => {
                if !self.state.is_renaming() {
                    return Err(EditorError::NoRenameInProgress);
                }
                self.state = EditorState::Idle;
                self.event_bus.emit(EditorEvent::RenameClosed);
            }
            Command::DeletePage(id) => self.delete_page(id)?,
            Command::ZoomIn => {
                if self.zoom.zoom_in() {
                    self.emit_scale();
                }
            }
            Command::ZoomOut => {
                if self.zoom.zoom_out() {
                    self.emit_scale();
                }
            }
            Command::Gesture(gesture) => {
                if self.zoom.apply(gesture) {
                    self.emit_scale();
                }
            }
        }
        Ok(())
    }

    fn select_page(&mut self, id: PageId) -> EditorResult {
        if self.document.pages().current() == id {
            return Ok(());
        }
        self.document.pages_mut().select(id)?;
        self.event_bus.emit(EditorEvent::PageSelected { id });
        Ok(())
    }

    fn delete_page(&mut self, id: PageId) -> EditorResult {
        let current_before = self.document.pages().current();
        let removed_elements = self.document.delete_page(id)?;
        self.event_bus.emit(EditorEvent::PageDeleted {
            id,
            removed_elements,
        });

        if self.state.rename_target() == Some(id) {
            self.state = EditorState::Idle;
            self.event_bus.emit(EditorEvent::RenameClosed);
        }

        let current = self.document.pages().current();
        if current != current_before {
            self.event_bus.emit(EditorEvent::PageSelected { id: current });
        }
        Ok(())
    }

    fn emit_scale(&self) {
        self.event_bus.emit(EditorEvent::ScaleChanged {
            scale: self.zoom.scale(),
        });
    }
}
