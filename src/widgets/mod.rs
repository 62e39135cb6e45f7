mod rename_dialog;

pub use rename_dialog::rename_dialog;
