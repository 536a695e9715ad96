// crates/gifcount-ui/src/modules/file_list.rs
use super::CounterModule;
use gifcount_core::commands::CounterCommand;
use gifcount_core::state::CounterState;
use crate::helpers::format::{count_label, fit_label};
use crate::theme::{DARK_TEXT_DIM, HEADER_FILL};
use egui::{Ui, RichText, Layout, Align};
use rfd::FileDialog;

pub struct FileListModule;

impl CounterModule for FileListModule {
    fn name(&self) -> &str { "GIF Files" }

    fn ui(&mut self, ui: &mut Ui, state: &CounterState, cmd: &mut Vec<CounterCommand>) {
        let busy = state.is_busy();

        ui.vertical(|ui| {
            // ── Header ──────────────────────────────────────────────────────
            egui::Frame::new()
                .fill(HEADER_FILL)
                .inner_margin(egui::Margin { left: 8, right: 8, top: 6, bottom: 6 })
                .show(ui, |ui| {
                    ui.label(RichText::new(self.name()).size(12.0).strong());
                    ui.label(
                        RichText::new("Pick GIF files or a folder to calculate the playback length.")
                            .size(11.0).color(DARK_TEXT_DIM),
                    );
                });

            ui.add_space(4.0);

            ui.horizontal(|ui| {
                if ui.add_enabled(!busy, egui::Button::new("Select files")).clicked() {
                    if let Some(paths) = FileDialog::new()
                        .set_title("Select GIF files")
                        .add_filter("GIF files", &["gif"])
                        .pick_files()
                    {
                        cmd.push(CounterCommand::SetFiles(paths));
                    }
                }
                if ui.add_enabled(!busy, egui::Button::new("Select folder")).clicked() {
                    if let Some(dir) = FileDialog::new()
                        .set_title("Select folder")
                        .pick_folder()
                    {
                        cmd.push(CounterCommand::LoadFolder(dir));
                    }
                }
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let can_clear = !busy && !state.files.is_empty();
                    if ui.add_enabled(can_clear, egui::Button::new("Clear")).clicked() {
                        cmd.push(CounterCommand::ClearFiles);
                    }
                });
            });

            ui.separator();

            if state.files.is_empty() {
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("Drop GIF files here\nor use the buttons above")
                        .size(11.0).color(DARK_TEXT_DIM));
                });
                ui.add_space(24.0);
                return;
            }

            ui.label(RichText::new(count_label(state.files.len(), "file"))
                .size(10.0).color(DARK_TEXT_DIM));

            egui::ScrollArea::vertical()
                .max_height(140.0)
                .auto_shrink([false, true])
                .show(ui, |ui| {
                    let max_px = ui.available_width() - 8.0;
                    for path in &state.files {
                        let name = path.file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        ui.label(RichText::new(fit_label(&name, max_px)).size(12.0).monospace())
                            .on_hover_text(path.display().to_string());
                    }
                });
        });
    }
}
