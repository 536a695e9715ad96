// src/app.rs (gifcount-ui)
use gifcount_core::commands::CounterCommand;
use gifcount_core::state::CounterState;
use gifcount_media::CountWorker;
use gifcount_media::scan::{is_gif, list_gifs};
use crate::modules::{
    CounterModule,
    file_list::FileListModule,
    results::ResultsModule,
};
use crate::theme::configure_style;
use eframe::egui;
use std::time::Duration;

// ── App ───────────────────────────────────────────────────────────────────────

pub struct GifCounterApp {
    state:        CounterState,
    worker:       CountWorker,
    file_list:    FileListModule,
    results:      ResultsModule,
    /// Commands emitted by modules each frame, processed after the UI pass
    pending_cmds: Vec<CounterCommand>,
}

impl GifCounterApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        configure_style(&cc.egui_ctx);
        // Pin to dark mode — prevents egui overwriting our theme on OS light/dark changes.
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = egui::ThemePreference::Dark;
        });

        Self {
            state:        CounterState::default(),
            worker:       CountWorker::new(),
            file_list:    FileListModule,
            results:      ResultsModule,
            pending_cmds: Vec::new(),
        }
    }

    fn process_command(&mut self, cmd: CounterCommand) {
        match cmd {
            // ── Selection ────────────────────────────────────────────────────
            CounterCommand::SetFiles(paths) => {
                self.state.set_files(paths);
            }
            CounterCommand::AddFiles(paths) => {
                self.state.add_files(paths);
            }
            CounterCommand::LoadFolder(dir) => match list_gifs(&dir) {
                Ok(paths) => {
                    tracing::info!("{} GIF(s) found in {}", paths.len(), dir.display());
                    self.state.set_files(paths);
                }
                Err(e) => {
                    tracing::warn!("folder import failed: {e:#}");
                    self.state.notice = Some(format!("{e:#}"));
                }
            },
            CounterCommand::ClearFiles => {
                self.state.clear_files();
            }

            // ── Batch ────────────────────────────────────────────────────────
            CounterCommand::Calculate => {
                if self.state.is_busy() { return; }
                let worker = &self.worker;
                if self.state.begin_batch(|paths| worker.start_batch(paths)).is_err() {
                    tracing::info!("calculate pressed with no files selected");
                }
            }
            CounterCommand::DismissNotice => {
                self.state.notice = None;
            }
        }
    }

    /// Apply a finished batch, if one has arrived. Stale results from a batch
    /// that is no longer active are dropped inside `finish_batch`.
    fn poll_worker(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.worker.rx.try_recv() {
            let id = result.batch_id();
            if self.state.finish_batch(result) {
                ctx.request_repaint();
            } else {
                tracing::debug!("ignoring result for inactive batch {id}");
            }
        }
        // The worker thread has no handle on the egui context, so keep
        // polling while a batch is out.
        if self.state.is_busy() {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }

    fn handle_drag_and_drop(&mut self, ctx: &egui::Context) {
        if self.state.is_busy() { return; }
        let files = ctx.input(|i| i.raw.dropped_files.clone());
        let gifs: Vec<_> = files.into_iter()
            .filter_map(|f| f.path)
            .filter(|p| is_gif(p))
            .collect();
        if !gifs.is_empty() {
            self.pending_cmds.push(CounterCommand::AddFiles(gifs));
        }
    }
}

// ── eframe::App ───────────────────────────────────────────────────────────────

impl eframe::App for GifCounterApp {
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.worker.shutdown();
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_drag_and_drop(ctx);
        self.poll_worker(ctx);

        egui::TopBottomPanel::top("files_panel")
            .resizable(false)
            .show(ctx, |ui| {
                self.file_list.ui(ui, &self.state, &mut self.pending_cmds);
                ui.add_space(6.0);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.results.ui(ui, &self.state, &mut self.pending_cmds);
        });

        // ── Process commands emitted by modules this frame ────────────────────
        let cmds: Vec<CounterCommand> = self.pending_cmds.drain(..).collect();
        for cmd in cmds {
            self.process_command(cmd);
        }
    }
}
