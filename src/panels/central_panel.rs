use egui::{Color32, Frame};

use crate::command::Command;
use crate::input::CanvasInput;
use crate::renderer::CanvasRenderer;
use crate::state::EditorContext;

const CANVAS_BACKGROUND: Color32 = Color32::from_gray(0xf3);

/// Scrollable canvas holding every page.
///
/// Zoom gestures over the canvas come back as [`Command::Gesture`]; while a
/// pinch is in progress the scroll area stops scrolling.
pub fn central_panel(
    ctx: &egui::Context,
    editor: &EditorContext,
    renderer: &CanvasRenderer,
    input: &mut CanvasInput,
) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::CentralPanel::default()
        .frame(Frame::default().fill(CANVAS_BACKGROUND).inner_margin(16.0))
        .show(ctx, |ui| {
            let canvas_rect = ui.max_rect();
            commands.extend(
                input
                    .process_input(ctx, canvas_rect)
                    .into_iter()
                    .map(Command::Gesture),
            );

            let pinching = input.is_pinching() || editor.zoom().is_pinching();
            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .drag_to_scroll(false)
                .enable_scrolling(!pinching)
                .show(ui, |ui| {
                    commands.extend(renderer.show(ui, editor.document(), editor.scale()));
                });
        });

    commands
}
