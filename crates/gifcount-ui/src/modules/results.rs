// crates/gifcount-ui/src/modules/results.rs
//
// Calculate button, progress line, summary and the per-file table.
// Everything shown here comes from CounterState::outcome, which is replaced
// in one step when a batch finishes, so the panel never shows half a batch.

use super::CounterModule;
use gifcount_core::commands::CounterCommand;
use gifcount_core::media_types::DurationResult;
use gifcount_core::state::{BatchOutcome, CounterState};
use crate::theme::{ACCENT, DARK_TEXT_DIM, NOTICE, SKIPPED};
use egui::{Ui, RichText};
use egui_extras::{Column, TableBuilder};

pub struct ResultsModule;

impl CounterModule for ResultsModule {
    fn name(&self) -> &str { "Playback Length" }

    fn ui(&mut self, ui: &mut Ui, state: &CounterState, cmd: &mut Vec<CounterCommand>) {
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(RichText::new("Calculate playback length").size(13.0));
            if ui.add_enabled(!state.is_busy(), button).clicked() {
                cmd.push(CounterCommand::Calculate);
            }

            if let Some(msg) = state.loading_message {
                ui.add_space(4.0);
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label(RichText::new(msg).italics().color(DARK_TEXT_DIM));
                });
            }
        });

        if let Some(notice) = &state.notice {
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new(notice).color(NOTICE));
                if ui.small_button("✕").clicked() {
                    cmd.push(CounterCommand::DismissNotice);
                }
            });
        }

        if let Some(summary) = state.summary_text() {
            ui.add_space(6.0);
            ui.label(RichText::new(summary).size(13.0).strong().color(ACCENT));
        }

        if let Some(outcome) = &state.outcome {
            if let Some(path) = &outcome.report_path {
                ui.label(
                    RichText::new(format!("Report saved to {}", path.display()))
                        .size(10.0).color(DARK_TEXT_DIM),
                );
            }
            ui.add_space(6.0);
            ui.separator();
            per_file_table(ui, outcome);
        }
    }
}

fn per_file_table(ui: &mut Ui, outcome: &BatchOutcome) {
    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder().clip(true))
        .column(Column::auto().at_least(90.0))
        .header(20.0, |mut header| {
            header.col(|ui| { ui.strong("File"); });
            header.col(|ui| { ui.strong("Length"); });
        })
        .body(|mut body| {
            for entry in &outcome.report.per_file {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        ui.label(entry.name.as_str()).on_hover_text(entry.path.display().to_string());
                    });
                    row.col(|ui| {
                        let text = RichText::new(entry.result.display()).monospace();
                        match &entry.result {
                            DurationResult::Skipped(reason) => {
                                ui.label(text.color(SKIPPED)).on_hover_text(reason.to_string());
                            }
                            DurationResult::Decoded { .. } => { ui.label(text); }
                        }
                    });
                });
            }
        });
}
