use crate::command::Command;
use crate::config::EditorConfig;
use crate::event::{LogHandler, RepaintHandler};
use crate::input::CanvasInput;
use crate::panels;
use crate::renderer::CanvasRenderer;
use crate::state::EditorContext;
use crate::widgets;

/// The eframe application: panels produce commands, the editor context
/// executes them, and the event bus asks for the next repaint.
///
/// Document state is not persisted between sessions.
pub struct CanvasApp {
    editor: EditorContext,
    renderer: CanvasRenderer,
    input: CanvasInput,
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(&cc.egui_ctx, EditorConfig::from_env())
    }

    pub fn with_config(ctx: &egui::Context, config: EditorConfig) -> Self {
        let editor = EditorContext::new(config);
        editor
            .events()
            .subscribe(Box::new(RepaintHandler::new(ctx.clone())));
        editor.events().subscribe(Box::new(LogHandler));

        Self {
            editor,
            renderer: CanvasRenderer::new(config.page),
            input: CanvasInput::new(),
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    fn execute_all(&mut self, commands: Vec<Command>) {
        for command in commands {
            let name = command.name();
            if let Err(err) = self.editor.execute(command) {
                log::debug!("{name} ignored: {err}");
            }
        }
    }
}

impl eframe::App for CanvasApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top panels must be added before the central panel.
        let mut commands = panels::toolbar(ctx, self.editor.scale());
        commands.extend(panels::page_navigation(ctx, self.editor.document().pages()));
        commands.extend(panels::central_panel(
            ctx,
            &self.editor,
            &self.renderer,
            &mut self.input,
        ));
        commands.extend(widgets::rename_dialog(ctx, self.editor.state_mut()));

        self.execute_all(commands);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Some(gesture) = self.input.reset() {
            self.execute_all(vec![Command::Gesture(gesture)]);
        }
        log::info!(
            "Closing editor with {} pages and {} elements",
            self.editor.document().pages().len(),
            self.editor.document().elements().len()
        );
    }
}
