//! Main application type
//!
//! [`DashboardApp`] owns the dataset, the parameter set and the view
//! cache. Each frame it renders the sidebar and the four view panes,
//! collects the actions they returned, and applies them. Applying a
//! parameter action recomputes exactly the views that depend on that
//! parameter, synchronously, so the next frame always renders from a
//! consistent cache.

use egui::Context;

use crate::config::AppState;
use crate::dataset::Dataset;
use crate::frontend::panes::{self, TablePaneState};
use crate::frontend::sidebar;
use crate::frontend::state::{AppAction, SharedState};
use crate::frontend::views::ViewCache;
use crate::types::Parameters;

/// The eframe application.
pub struct DashboardApp {
    dataset: Dataset,
    params: Parameters,
    views: ViewCache,
    app_state: AppState,
    table_state: TablePaneState,
    last_error: Option<String>,
}

impl DashboardApp {
    /// Create the app with a loaded dataset and restored app state.
    pub fn new(cc: &eframe::CreationContext<'_>, dataset: Dataset, app_state: AppState) -> Self {
        if app_state.ui_preferences.dark_mode {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
        } else {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
        }

        let params = Parameters::default();
        let mut views = ViewCache::default();
        views.recompute_all(&dataset, &params);

        Self {
            dataset,
            params,
            views,
            app_state,
            table_state: TablePaneState::default(),
            last_error: None,
        }
    }

    /// Apply one action, recomputing the views it affects.
    fn handle_action(&mut self, action: AppAction, ctx: &Context) {
        match action {
            AppAction::SetYear(year) => {
                self.params.year = year;
                self.params.clamp_year();
                // Every view filters on the year.
                self.views.recompute_all(&self.dataset, &self.params);
            }
            AppAction::SetCo2Measure(measure) => {
                self.params.co2_measure = measure;
                self.views.recompute_time_series(&self.dataset, &self.params);
            }
            AppAction::SetCo2Source(source) => {
                self.params.co2_source = source;
                self.views.recompute_source_bar(&self.dataset, &self.params);
            }
            AppAction::LoadDataset(path) => match Dataset::from_path(&path) {
                Ok(dataset) => {
                    self.dataset = dataset;
                    self.views.recompute_all(&self.dataset, &self.params);
                    self.app_state.add_recent_dataset(&path);
                    self.save_app_state();
                    self.last_error = None;
                }
                Err(e) => {
                    tracing::error!("Failed to load dataset {:?}: {}", path, e);
                    self.last_error = Some(format!("Failed to load dataset: {}", e));
                }
            },
            AppAction::SetDarkMode(dark) => {
                self.app_state.ui_preferences.dark_mode = dark;
                ctx.set_visuals(if dark {
                    egui::Visuals::dark()
                } else {
                    egui::Visuals::light()
                });
                self.save_app_state();
            }
            AppAction::SetShowLegend(show) => {
                self.app_state.ui_preferences.show_legend = show;
                self.save_app_state();
            }
            AppAction::ClearError => {
                self.last_error = None;
            }
        }
    }

    fn save_app_state(&self) {
        if let Err(e) = self.app_state.save() {
            tracing::warn!("Failed to save app state: {}", e);
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut actions: Vec<AppAction> = Vec::new();

        // Error banner above everything else
        if let Some(error) = self.last_error.clone() {
            egui::TopBottomPanel::top("error_banner").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.colored_label(egui::Color32::from_rgb(255, 100, 100), "⚠");
                    ui.label(error);
                    if ui.button("Dismiss").clicked() {
                        actions.push(AppAction::ClearError);
                    }
                });
            });
        }

        let mut shared = SharedState {
            dataset: &self.dataset,
            params: &self.params,
            views: &self.views,
            app_state: &mut self.app_state,
            last_error: &mut self.last_error,
        };

        egui::SidePanel::left("sidebar")
            .default_width(280.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    actions.extend(sidebar::render(&mut shared, ui));
                });
            });

        // Two rows of two views, mirroring the dashboard template layout.
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.columns(2, |cols| {
                    actions.extend(panes::time_series::render(&mut shared, &mut cols[0]));
                    actions.extend(panes::table::render(
                        &mut self.table_state,
                        &mut shared,
                        &mut cols[1],
                    ));
                });
                ui.separator();
                ui.columns(2, |cols| {
                    actions.extend(panes::scatter::render(&mut shared, &mut cols[0]));
                    actions.extend(panes::source_bar::render(&mut shared, &mut cols[1]));
                });
            });
        });

        for action in actions {
            self.handle_action(action, ctx);
        }
    }
}
