use crate::command::Command;
use crate::components::{PageTab, STRIP_FILL};
use crate::store::PageStore;

/// Strip of page tabs with rename and delete buttons
pub fn page_navigation(ctx: &egui::Context, pages: &PageStore) -> Vec<Command> {
    let mut commands = Vec::new();
    // The last page cannot be deleted, so its delete button is hidden.
    let deletable = pages.len() > 1;

    egui::TopBottomPanel::top("page_navigation")
        .frame(egui::Frame::side_top_panel(&ctx.style()).fill(STRIP_FILL))
        .show(ctx, |ui| {
            egui::ScrollArea::horizontal().show(ui, |ui| {
                ui.horizontal(|ui| {
                    for page in pages.iter() {
                        let selected = page.id() == pages.current();
                        if PageTab::new(page.name(), selected).show(ui).clicked() {
                            commands.push(Command::SelectPage(page.id()));
                        }
                        if ui.small_button("✏").on_hover_text("Rename page").clicked() {
                            commands.push(Command::BeginRename(page.id()));
                        }
                        if deletable && ui.small_button("🗑").on_hover_text("Delete page").clicked() {
                            commands.push(Command::DeletePage(page.id()));
                        }
                        ui.add_space(8.0);
                    }
                });
            });
        });

    commands
}
