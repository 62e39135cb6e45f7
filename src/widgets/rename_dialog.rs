use egui::{Id, Key, Modal, TextEdit};

use crate::command::Command;
use crate::state::EditorState;

const DIALOG_WIDTH: f32 = 280.0;

/// Shows the modal "Edit Page Name" dialog while a rename is in progress.
///
/// The backdrop swallows input meant for the canvas and panels. The text field
/// edits the state's input in place and takes keyboard focus when the dialog
/// opens. Save (or Enter) and Cancel (or Escape, or a backdrop click) come back
/// as commands.
pub fn rename_dialog(ctx: &egui::Context, state: &mut EditorState) -> Option<Command> {
    let focus_id = Id::new("rename_page_focused");
    let Some(input) = state.rename_input_mut() else {
        ctx.data_mut(|data| data.remove::<bool>(focus_id));
        return None;
    };

    let modal = Modal::new(Id::new("rename_page")).show(ctx, |ui| {
        ui.set_width(DIALOG_WIDTH);
        ui.heading("Edit Page Name");
        ui.add_space(8.0);

        let response = ui.add(TextEdit::singleline(input).desired_width(f32::INFINITY));
        // Focus once per opening; afterwards the user may move focus freely.
        let focused_once = ctx.data(|data| data.get_temp::<bool>(focus_id).unwrap_or(false));
        if !focused_once {
            if response.has_focus() {
                ctx.data_mut(|data| data.insert_temp(focus_id, true));
            } else {
                response.request_focus();
            }
        }

        let mut command = None;
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            command = Some(Command::CommitRename);
        }

        ui.add_space(8.0);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Save").clicked() {
                command = Some(Command::CommitRename);
            }
            if ui.button("Cancel").clicked() {
                command = Some(Command::CancelRename);
            }
        });
        command
    });

    if modal.inner.is_some() {
        return modal.inner;
    }
    modal.should_close().then_some(Command::CancelRename)
}
