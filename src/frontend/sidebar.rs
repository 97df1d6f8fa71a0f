//! Sidebar panel — dashboard blurb, year slider, dataset controls
//!
//! The year slider is the one control shared by every view: it is the
//! inclusive bound for the time series/table and the exact year for the
//! scatter and bar chart, matching the single-slider design of the
//! dashboard.

use egui::Ui;

use crate::frontend::state::{AppAction, SharedState};
use crate::types::{YEAR_MAX, YEAR_MIN, YEAR_STEP};

const BLURB: &str = "Carbon dioxide emissions are the primary driver of global \
climate change. It's widely recognised that to avoid the worst impacts of \
climate change, the world needs to urgently reduce emissions. But how this \
responsibility is shared between regions, countries, and individuals has been \
an endless point of contention in international discussions.";

/// Render the sidebar. Returns actions for the app to handle.
pub fn render(shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.heading("CO2 Emissions and Climate Change");
    ui.add_space(4.0);
    ui.label(BLURB);

    ui.separator();
    ui.strong("Settings");

    let mut year = shared.params.year;
    let slider = egui::Slider::new(&mut year, YEAR_MIN..=YEAR_MAX)
        .step_by(YEAR_STEP as f64)
        .text("Year");
    if ui.add(slider).changed() {
        actions.push(AppAction::SetYear(year));
    }

    let mut dark_mode = shared.app_state.ui_preferences.dark_mode;
    if ui.checkbox(&mut dark_mode, "Dark mode").changed() {
        actions.push(AppAction::SetDarkMode(dark_mode));
    }

    let mut show_legend = shared.app_state.ui_preferences.show_legend;
    if ui.checkbox(&mut show_legend, "Show plot legends").changed() {
        actions.push(AppAction::SetShowLegend(show_legend));
    }

    ui.separator();
    render_dataset_controls(shared, ui, &mut actions);

    actions
}

fn render_dataset_controls(
    shared: &mut SharedState<'_>,
    ui: &mut Ui,
    actions: &mut Vec<AppAction>,
) {
    ui.strong("Dataset");

    if shared.dataset.is_empty() {
        ui.weak("No dataset loaded");
    } else {
        ui.label(format!("{} records", shared.dataset.len()));
        if let Some((min, max)) = shared.dataset.year_range() {
            ui.weak(format!("Years {}-{}", min, max));
        }
    }

    if ui.button("Open dataset…").clicked() {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV files", &["csv"])
            .pick_file()
        {
            actions.push(AppAction::LoadDataset(path));
        }
    }

    if !shared.app_state.recent_datasets.is_empty() {
        ui.add_space(4.0);
        ui.weak("Recent");
        let recents: Vec<_> = shared
            .app_state
            .recent_datasets
            .iter()
            .map(|d| (d.name.clone(), d.path.clone()))
            .collect();
        for (name, path) in recents {
            if ui.small_button(&name).clicked() {
                actions.push(AppAction::LoadDataset(path));
            }
        }
    }
}
