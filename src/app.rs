// app.rs
pub mod conversion;
pub mod dialogs;
pub mod file_list;
pub mod gui;

use eframe::egui;
use eframe::App as EframeApp;
use std::collections::HashSet;

use crate::utils::ActivityLog;
use conversion::TargetFormat;
use dialogs::NativeDialogs;
use file_list::FileList;

pub struct App {
    // Application state
    pub files: FileList,
    pub selected: HashSet<usize>,
    pub output_directory: String,
    pub target_format: TargetFormat,
    pub scale_text: String,
    pub overwrite: bool,
    pub dialogs: NativeDialogs,
    pub log: ActivityLog,
}

impl Default for App {
    fn default() -> Self {
        Self {
            files: FileList::default(),
            selected: HashSet::new(),
            output_directory: String::new(),
            target_format: TargetFormat::Png,
            scale_text: String::from("100"),
            overwrite: true,
            dialogs: NativeDialogs,
            log: ActivityLog::default(),
        }
    }
}

impl EframeApp for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        gui::render(self, ctx);
    }
}
