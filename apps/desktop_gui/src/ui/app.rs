//! App shell: trigger controls, file selection, and the histogram plot.

use std::path::PathBuf;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use egui_plot::{Bar, BarChart, Plot};
use shared::domain::{Dataset, FileSpec, SourceKind, TriggerCounts};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{err_label, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::histogram::{self, HistogramBins};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

fn source_title(kind: SourceKind) -> &'static str {
    match kind {
        SourceKind::Normal => "Standard normal samples",
        SourceKind::Poisson => "Poisson(2) samples",
        SourceKind::FileLoad => "Values from file",
    }
}

pub struct DesktopGuiApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    // Observed trigger counters; the worker keeps the stored counterpart.
    observed: TriggerCounts,
    pending_file: Option<FileSpec>,
    header_row: bool,

    current: Option<Dataset>,
    binned: Option<HistogramBins>,

    status: String,
    status_banner: Option<StatusBanner>,
}

impl DesktopGuiApp {
    pub fn new(cmd_tx: Sender<BackendCommand>, ui_rx: Receiver<UiEvent>) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            observed: TriggerCounts::default(),
            pending_file: None,
            header_row: true,
            current: None,
            binned: None,
            status: "Pick a source to plot".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::DatasetReady(dataset) => {
                    self.status = match dataset.kind {
                        SourceKind::Normal => {
                            format!("Generated {} standard normal samples", dataset.len())
                        }
                        SourceKind::Poisson => {
                            format!("Generated {} Poisson(2) samples", dataset.len())
                        }
                        SourceKind::FileLoad => {
                            format!("Loaded {} values from file", dataset.len())
                        }
                    };
                    self.status_banner = None;
                    self.binned = histogram::bin_values(&dataset.values);
                    self.current = Some(dataset);
                }
                UiEvent::Error(err) => {
                    self.status = format!("{} error: {}", err_label(err.category()), err.message());
                    self.status_banner = Some(StatusBanner {
                        severity: StatusBannerSeverity::Error,
                        message: self.status.clone(),
                    });
                }
            }
        }
    }

    fn sync_sources(&mut self) {
        dispatch_backend_command(
            &self.cmd_tx,
            BackendCommand::SyncSources {
                observed: self.observed,
                file: self.pending_file.clone(),
            },
            &mut self.status,
        );
    }

    fn press_normal(&mut self) {
        self.observed.bump(SourceKind::Normal);
        self.sync_sources();
    }

    fn press_poisson(&mut self) {
        self.observed.bump(SourceKind::Poisson);
        self.sync_sources();
    }

    fn choose_file(&mut self) {
        let picked = rfd::FileDialog::new()
            .add_filter("CSV / plain text", &["csv", "txt"])
            .pick_file();
        if let Some(path) = picked {
            self.note_file_selection(path);
        }
    }

    fn note_file_selection(&mut self, path: PathBuf) {
        // Presence-based signal: re-picking the path that is already the
        // pending selection is not a new upload until the selection is
        // reset.
        if self.pending_file.as_ref().map(|f| f.path.as_path()) == Some(path.as_path()) {
            self.status = "File is already the active selection; reset first to reload".to_string();
            return;
        }

        self.pending_file = Some(FileSpec {
            path,
            has_header: self.header_row,
        });
        self.observed.bump(SourceKind::FileLoad);
        self.sync_sources();
    }

    fn reset_selection(&mut self) {
        tracing::debug!("file selection reset; plot cleared");
        self.pending_file = None;
        self.current = None;
        self.binned = None;
        self.status = "Selection reset; plot cleared".to_string();
        self.status_banner = None;
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (
                    egui::Color32::from_rgb(111, 53, 53),
                    egui::Stroke::new(1.0, egui::Color32::from_rgb(175, 96, 96)),
                ),
            };

            egui::Frame::NONE
                .fill(fill)
                .stroke(stroke)
                .corner_radius(8.0)
                .inner_margin(egui::Margin::symmetric(10, 8))
                .show(ui, |ui| {
                    ui.horizontal_wrapped(|ui| {
                        ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            if ui.button("Dismiss").clicked() {
                                self.status_banner = None;
                            }
                        });
                    });
                });
            ui.add_space(6.0);
        }
    }

    fn show_controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Generate normal").clicked() {
                self.press_normal();
            }
            if ui.button("Generate Poisson").clicked() {
                self.press_poisson();
            }
            ui.separator();
            if ui.button("Choose file…").clicked() {
                self.choose_file();
            }
            ui.checkbox(&mut self.header_row, "First row is a header");
            let reset_enabled = self.pending_file.is_some() || self.current.is_some();
            if ui
                .add_enabled(reset_enabled, egui::Button::new("Reset selection"))
                .on_hover_text("Clears the plot and lets the same file re-trigger a load.")
                .clicked()
            {
                self.reset_selection();
            }
        });

        if let Some(file) = &self.pending_file {
            ui.horizontal_wrapped(|ui| {
                ui.small("Selected:");
                ui.small(egui::RichText::new(file.path.display().to_string()).weak());
                if file.has_header {
                    ui.small("(header row skipped)");
                }
            });
        }
    }

    fn show_plot(&mut self, ui: &mut egui::Ui) {
        let title = self
            .current
            .as_ref()
            .map(|dataset| source_title(dataset.kind))
            .unwrap_or("No dataset");
        ui.heading(title);

        let bars: Vec<Bar> = match &self.binned {
            Some(bins) => bins
                .centers()
                .zip(bins.counts.iter())
                .map(|(center, count)| Bar::new(center, *count as f64).width(bins.bin_width()))
                .collect(),
            None => Vec::new(),
        };

        Plot::new("histogram_plot")
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.bar_chart(BarChart::new("samples", bars));
            });
    }
}

impl eframe::App for DesktopGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.add_space(4.0);
            self.show_controls(ui);
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.small("Status:");
                ui.small(egui::RichText::new(&self.status).weak());
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.show_status_banner(ui);
            self.show_plot(ui);
        });

        // Worker replies land between frames; keep polling so they render
        // without waiting for the next input event.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
