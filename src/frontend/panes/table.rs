//! Table pane — the time-series rows as a paginated table
//!
//! Shows exactly the rows the line plot draws, ten per page. The page
//! index is pane-local presentation state, clamped whenever the row set
//! shrinks under it.

use egui::Ui;

use crate::frontend::state::{AppAction, SharedState};
use crate::pipeline::{page_count, page_rows, PAGE_SIZE};

/// State for the table pane.
#[derive(Debug, Default)]
pub struct TablePaneState {
    /// Zero-based page index.
    pub page: usize,
}

/// Render the table pane.
pub fn render(state: &mut TablePaneState, shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    let rows = &shared.views.time_series;
    let pages = page_count(rows.len());
    state.page = state.page.min(pages - 1);

    ui.heading("CO2 emission table");
    ui.label(format!("{} rows", rows.len()));
    ui.separator();

    let measure = shared.params.co2_measure.column_name();
    egui::Grid::new("co2_table")
        .num_columns(3)
        .striped(true)
        .min_col_width(80.0)
        .show(ui, |ui| {
            ui.strong("country");
            ui.strong("year");
            ui.strong(measure);
            ui.end_row();

            for row in page_rows(rows, state.page) {
                ui.label(&row.country);
                ui.label(row.year.to_string());
                ui.label(format!("{:.3}", row.value));
                ui.end_row();
            }
        });

    ui.separator();
    render_pagination(state, pages, ui);

    Vec::new()
}

fn render_pagination(state: &mut TablePaneState, pages: usize, ui: &mut Ui) {
    ui.horizontal(|ui| {
        if ui.button("⏮").clicked() {
            state.page = 0;
        }
        if ui.button("◀").clicked() {
            state.page = state.page.saturating_sub(1);
        }
        ui.label(format!("Page {} of {}", state.page + 1, pages));
        if ui.button("▶").clicked() {
            state.page = (state.page + 1).min(pages - 1);
        }
        if ui.button("⏭").clicked() {
            state.page = pages - 1;
        }
        ui.weak(format!("{} per page", PAGE_SIZE));
    });
}
