// dialogs.rs
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

/// Modal dialog surface the converter talks to. The conversion loop never
/// touches rfd directly, so tests can script the answers.
pub trait Interaction {
    fn warn(&mut self, title: &str, text: &str);
    fn error(&mut self, title: &str, text: &str);
    fn info(&mut self, title: &str, text: &str);
    fn confirm(&mut self, title: &str, text: &str) -> bool;
}

/// Native message boxes via rfd.
pub struct NativeDialogs;

impl Interaction for NativeDialogs {
    fn warn(&mut self, title: &str, text: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn error(&mut self, title: &str, text: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn info(&mut self, title: &str, text: &str) {
        MessageDialog::new()
            .set_level(MessageLevel::Info)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::Ok)
            .show();
    }

    fn confirm(&mut self, title: &str, text: &str) -> bool {
        MessageDialog::new()
            .set_level(MessageLevel::Warning)
            .set_title(title)
            .set_description(text)
            .set_buttons(MessageButtons::YesNo)
            .show()
    }
}

pub fn select_images() -> Option<Vec<PathBuf>> {
    FileDialog::new()
        .add_filter("Image files", &["png", "jpg", "jpeg", "bmp", "gif", "tiff"])
        .pick_files()
}

pub fn select_output_directory() -> Option<PathBuf> {
    FileDialog::new().pick_folder()
}
