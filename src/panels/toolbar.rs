use crate::command::Command;
use crate::element::ElementKind;

const SHAPE_BUTTONS: [(&str, ElementKind); 3] = [
    ("Add Rect", ElementKind::Rectangle),
    ("Add Circle", ElementKind::Circle),
    ("Add Text", ElementKind::Text),
];

pub fn toolbar(ctx: &egui::Context, scale: f32) -> Vec<Command> {
    let mut commands = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for (label, kind) in SHAPE_BUTTONS {
                if ui.button(label).clicked() {
                    commands.push(Command::AddElement { kind });
                }
            }
            ui.separator();

            if ui.button("Zoom In").clicked() {
                commands.push(Command::ZoomIn);
            }
            if ui.button("Zoom Out").clicked() {
                commands.push(Command::ZoomOut);
            }
            ui.label(format!("{:.0}%", scale * 100.0));
            ui.separator();

            if ui.button("Add Page").clicked() {
                commands.push(Command::AddPage);
            }
        });
    });

    commands
}
