// gui.rs
use crate::app::conversion::{self, ConversionRequest, RunOutcome, TargetFormat};
use crate::app::dialogs::{self, Interaction};
use crate::app::App;
use egui::{Color32, Frame, RichText, Rounding, Stroke};

const HEADING_COLOR: Color32 = Color32::from_rgb(224, 224, 224);
const DIM_COLOR: Color32 = Color32::from_rgb(150, 150, 150);

pub fn render(app: &mut App, ctx: &egui::Context) {
    let frame = Frame {
        fill: Color32::from_rgb(46, 46, 46),
        rounding: Rounding::same(10.0),
        stroke: Stroke::new(1.0, Color32::from_rgb(85, 85, 85)),
        inner_margin: egui::style::Margin::same(16.0),
        ..Default::default()
    };

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        ui.heading(RichText::new("Image Converter").size(24.0).color(HEADING_COLOR));
        ui.add_space(10.0);

        render_file_list(app, ui);
        ui.add_space(4.0);
        render_summary(app, ui);
        ui.add_space(8.0);
        render_list_buttons(app, ui);
        ui.add_space(12.0);
        render_conversion_form(app, ui);
        ui.add_space(12.0);

        if ui
            .add_sized([160.0, 32.0], egui::Button::new("Convert Images"))
            .clicked()
        {
            convert_clicked(app);
        }

        ui.add_space(12.0);
        render_log(app, ui);
    });
}

fn render_file_list(app: &mut App, ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        egui::ScrollArea::vertical()
            .id_source("file_list")
            .max_height(180.0)
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if app.files.is_empty() {
                    ui.label(RichText::new("No files selected").color(DIM_COLOR));
                }
                for (index, path) in app.files.paths().iter().enumerate() {
                    let is_selected = app.selected.contains(&index);
                    if ui
                        .selectable_label(is_selected, path.to_string_lossy())
                        .clicked()
                    {
                        if is_selected {
                            app.selected.remove(&index);
                        } else {
                            app.selected.insert(index);
                        }
                    }
                }
            });
    });
}

fn render_summary(app: &App, ui: &mut egui::Ui) {
    let summary = app.files.summary();
    ui.label(format!(
        "{} files selected | Total size: {:.2} MB",
        summary.count, summary.total_size_mb
    ));
}

fn render_list_buttons(app: &mut App, ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        if ui.button("Add Images").clicked() {
            if let Some(paths) = dialogs::select_images() {
                let added = app.files.add(paths);
                app.selected.clear();
                app.log.push(format!("Added {} images", added));
            }
        }
        if ui.button("Remove Selected").clicked() && !app.selected.is_empty() {
            let indices: Vec<usize> = app.selected.iter().copied().collect();
            app.files.remove(&indices);
            app.log.push(format!("Removed {} images", indices.len()));
            app.selected.clear();
        }
        if ui.button("Clear List").clicked() {
            app.files.clear();
            app.selected.clear();
            app.log.push("Cleared the file list");
        }
    });
}

fn render_conversion_form(app: &mut App, ui: &mut egui::Ui) {
    egui::ComboBox::from_label("Convert to:")
        .selected_text(app.target_format.label())
        .show_ui(ui, |ui| {
            for format in TargetFormat::all() {
                ui.selectable_value(&mut app.target_format, format, format.label());
            }
        });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Output folder:");
        ui.add(egui::TextEdit::singleline(&mut app.output_directory).desired_width(280.0));
        if ui.button("Browse").clicked() {
            if let Some(folder) = dialogs::select_output_directory() {
                app.output_directory = folder.to_string_lossy().into_owned();
            }
        }
    });

    ui.add_space(6.0);
    ui.horizontal(|ui| {
        ui.label("Resize images (%):");
        ui.add(egui::TextEdit::singleline(&mut app.scale_text).desired_width(48.0));
    });

    ui.add_space(6.0);
    ui.checkbox(&mut app.overwrite, "Overwrite existing files");
}

fn render_log(app: &App, ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_min_width(ui.available_width());
        ui.label(RichText::new("Activity Log").size(14.0).color(HEADING_COLOR));
        egui::ScrollArea::vertical()
            .id_source("activity_log")
            .max_height(140.0)
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                for line in app.log.entries() {
                    if line.contains("Failed") {
                        ui.label(RichText::new(line).color(Color32::RED));
                    } else {
                        ui.label(line);
                    }
                }
            });
    });
}

/// The whole batch runs here, on the UI thread, blocking until it resolves.
fn convert_clicked(app: &mut App) {
    let request = match ConversionRequest::from_form(
        &app.files,
        &app.output_directory,
        app.target_format,
        &app.scale_text,
        app.overwrite,
    ) {
        Ok(request) => request,
        Err(err) => {
            app.dialogs.warn(err.title(), &err.to_string());
            return;
        }
    };

    app.log.push(format!(
        "Converting {} images to {}",
        request.files.len(),
        request.format.label()
    ));

    match conversion::run(&request, &mut app.dialogs, &mut app.log) {
        RunOutcome::Completed { .. } => {
            app.dialogs
                .info("Success", "All images have been converted successfully!");
        }
        RunOutcome::Aborted { path, error } => {
            app.dialogs.error(
                "Error",
                &format!("Failed to convert {}.\n{}", path.display(), error),
            );
        }
    }
}
