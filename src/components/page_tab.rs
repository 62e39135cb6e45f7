use egui::{Color32, FontId, Response, Sense, Ui, vec2};

// Amber palette of the navigation strip
pub const STRIP_FILL: Color32 = Color32::from_rgb(180, 83, 9);
const TAB_FILL: Color32 = Color32::from_rgb(146, 64, 14);
const TAB_HOVER_FILL: Color32 = Color32::from_rgb(161, 72, 12);
const SELECTED_TEXT: Color32 = Color32::from_rgb(120, 53, 15);

/// Clickable page name in the navigation strip
pub struct PageTab<'a> {
    pub name: &'a str,
    pub selected: bool,
}

impl<'a> PageTab<'a> {
    pub fn new(name: &'a str, selected: bool) -> Self {
        Self { name, selected }
    }

    pub fn show(&self, ui: &mut Ui) -> Response {
        let text_color = if self.selected {
            SELECTED_TEXT
        } else {
            Color32::WHITE
        };
        let galley = ui
            .painter()
            .layout_no_wrap(self.name.to_owned(), FontId::proportional(14.0), text_color);
        let padding = vec2(14.0, 4.0);
        let (rect, response) =
            ui.allocate_exact_size(galley.size() + padding * 2.0, Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                Color32::WHITE
            } else if response.hovered() {
                TAB_HOVER_FILL
            } else {
                TAB_FILL
            };
            ui.painter().rect_filled(rect, 4.0, bg_color);
            ui.painter().galley(rect.min + padding, galley, text_color);
        }

        response
    }
}
