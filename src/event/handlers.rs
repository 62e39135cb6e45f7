use crate::event::{EditorEvent, EventHandler};

/// Asks egui for a new frame whenever editor state changes
pub struct RepaintHandler {
    ctx: egui::Context,
}

impl RepaintHandler {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl EventHandler for RepaintHandler {
    fn handle_event(&mut self, _event: &EditorEvent) {
        self.ctx.request_repaint();
    }
}

/// Writes editor events to the `log` facade
#[derive(Debug, Default)]
pub struct LogHandler;

impl EventHandler for LogHandler {
    fn handle_event(&mut self, event: &EditorEvent) {
        match event {
            // Fires on every drag frame
            EditorEvent::ElementMoved { id, position } => {
                log::trace!("Element {id} moved to ({:.1}, {:.1})", position.x, position.y);
            }
            EditorEvent::ScaleChanged { scale } => log::trace!("Scale changed to {scale:.2}"),
            other => log::debug!("{other:?}"),
        }
    }
}
