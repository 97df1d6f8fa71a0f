//! Source bar pane — total CO2 by source per continent
//!
//! One bar per continent (World excluded) for the selected year; the
//! radio row switches between the coal, oil and gas columns. Values are
//! sums, not means: the chart compares total contribution.

use egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::frontend::plot::series_color;
use crate::frontend::state::{AppAction, SharedState};

/// Render the source bar pane.
pub fn render(shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.heading(format!("CO2 source by continent, {}", shared.params.year));

    // Source radio row
    ui.horizontal(|ui| {
        let mut selected = shared.params.co2_source;
        for source in crate::types::Co2Source::ALL {
            if ui
                .selectable_value(&mut selected, source, source.display_name())
                .changed()
            {
                actions.push(AppAction::SetCo2Source(selected));
            }
        }
    });

    let rows = &shared.views.source_bar;
    if rows.is_empty() {
        ui.weak("No continent data for this year.");
    }

    let bars: Vec<Bar> = rows
        .iter()
        .enumerate()
        .map(|(index, row)| {
            Bar::new(index as f64, row.value)
                .name(&row.country)
                .width(0.6)
                .fill(series_color(index))
        })
        .collect();

    let countries: Vec<String> = rows.iter().map(|r| r.country.clone()).collect();

    Plot::new("co2_source_bar")
        .height(320.0)
        .y_axis_label(shared.params.co2_source.column_name())
        .x_axis_formatter(move |mark, _range| {
            let index = mark.value.round();
            if (mark.value - index).abs() > 0.01 || index < 0.0 {
                return String::new();
            }
            countries
                .get(index as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new("co2_source", bars));
        });

    actions
}
