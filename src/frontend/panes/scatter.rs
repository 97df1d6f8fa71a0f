//! Scatter pane — CO2 vs. GDP per capita across countries
//!
//! One point per country for the selected year. Continent aggregate rows
//! are excluded upstream, so every point is an actual nation. The legend
//! is suppressed: with ~200 countries it would swallow the plot.

use egui::Ui;
use egui_plot::{Plot, PlotPoints, Points};

use crate::frontend::plot::series_color;
use crate::frontend::state::{AppAction, SharedState};

/// Render the scatter pane.
pub fn render(shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    ui.heading(format!("CO2 vs GDP per capita, {}", shared.params.year));

    if shared.views.scatter.is_empty() {
        ui.weak("No country data for this year.");
    }

    Plot::new("co2_gdp_scatter")
        .height(320.0)
        .x_axis_label("GDP per capita")
        .y_axis_label("CO2")
        .show(ui, |plot_ui| {
            for (index, row) in shared.views.scatter.iter().enumerate() {
                let points = Points::new(
                    row.country.clone(),
                    PlotPoints::from(vec![[row.gdp_per_capita, row.co2]]),
                )
                .color(series_color(index))
                .radius(4.0);
                plot_ui.points(points);
            }
        });

    Vec::new()
}
