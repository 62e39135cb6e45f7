use egui::{Color32, CursorIcon, Id, Sense, Stroke, Ui, Vec2, vec2};

use crate::command::Command;
use crate::config::PageConfig;
use crate::document::Document;
use crate::page::Page;

const CURRENT_PAGE_BORDER: Stroke = Stroke {
    width: 0.5,
    color: Color32::BLUE,
};
const PAGE_BORDER: Stroke = Stroke {
    width: 1.0,
    color: Color32::from_gray(0xdd),
};
const PAGE_SHADOW: Color32 = Color32::from_rgba_premultiplied(0, 0, 0, 40);

/// Draws every page as a stacked column of scaled surfaces.
///
/// Painting and drag tracking are left to egui; the renderer only turns
/// clicks and drags into [`Command`]s for the caller to execute.
#[derive(Debug, Clone)]
pub struct CanvasRenderer {
    page: PageConfig,
}

impl CanvasRenderer {
    pub fn new(page: PageConfig) -> Self {
        Self { page }
    }

    /// Side length of a page surface at `scale`, in points
    pub fn page_side(&self, scale: f32) -> f32 {
        self.page.size * scale
    }

    pub fn show(&self, ui: &mut Ui, document: &Document, scale: f32) -> Vec<Command> {
        let mut commands = Vec::new();
        let current = document.pages().current();

        ui.spacing_mut().item_spacing = Vec2::ZERO;
        ui.vertical_centered(|ui| {
            for (index, page) in document.pages().iter().enumerate() {
                if index > 0 {
                    ui.add_space(self.page.gap * scale);
                }
                self.show_page(ui, document, page, page.id() == current, scale, &mut commands);
            }
        });

        commands
    }

    fn show_page(
        &self,
        ui: &mut Ui,
        document: &Document,
        page: &Page,
        is_current: bool,
        scale: f32,
        commands: &mut Vec<Command>,
    ) {
        let side = self.page_side(scale);
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(side), Sense::click());
        if response.clicked() {
            commands.push(Command::SelectPage(page.id()));
        }
        if !ui.is_rect_visible(rect) {
            return;
        }

        let painter = ui.painter();
        painter.rect_filled(rect.translate(vec2(0.0, 2.0)).expand(1.5), 2.0, PAGE_SHADOW);
        painter.rect_filled(rect, 0.0, page.background());

        let page_painter = ui.painter_at(rect);
        for element in document
            .elements()
            .on_page(page.id())
            .filter(|element| element.is_visible())
        {
            let bounds = element.paint(&page_painter, rect.min, scale);
            let sense = if element.is_locked() {
                Sense::click()
            } else {
                Sense::click_and_drag()
            };
            let response = ui.interact(
                bounds.intersect(rect),
                Id::new(("canvas_element", element.id())),
                sense,
            );

            // Interacting with an element also selects its page.
            if response.clicked() || response.drag_started() {
                commands.push(Command::SelectPage(page.id()));
            }
            if response.dragged() {
                let delta = response.drag_delta();
                if delta != Vec2::ZERO {
                    commands.push(Command::MoveElement {
                        id: element.id(),
                        position: element.position() + delta / scale,
                    });
                }
                ui.ctx().set_cursor_icon(CursorIcon::Grabbing);
            } else if response.hovered() && !element.is_locked() {
                ui.ctx().set_cursor_icon(CursorIcon::Grab);
            }
        }

        let border = if is_current {
            CURRENT_PAGE_BORDER
        } else {
            PAGE_BORDER
        };
        painter.rect_stroke(rect, 0.0, border);
    }
}
