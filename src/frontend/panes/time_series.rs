//! Time series pane — mean CO2 measure per continent over time
//!
//! One line per continent, covering every year up to the selected bound.
//! The measure radio row above the plot switches between total and
//! per-capita emissions.

use std::collections::HashMap;

use egui::Ui;
use egui_plot::{Line, Plot, PlotPoints};

use crate::frontend::plot::{dashboard_legend, series_color};
use crate::frontend::state::{AppAction, SharedState};
use crate::pipeline::TimeSeriesRow;

/// Render the time series pane.
pub fn render(shared: &mut SharedState<'_>, ui: &mut Ui) -> Vec<AppAction> {
    let mut actions = Vec::new();

    ui.heading("CO2 emission by continent");

    // Measure radio row
    ui.horizontal(|ui| {
        let mut selected = shared.params.co2_measure;
        for measure in crate::types::Co2Measure::ALL {
            if ui
                .selectable_value(&mut selected, measure, measure.display_name())
                .changed()
            {
                actions.push(AppAction::SetCo2Measure(selected));
            }
        }
    });

    let series = series_by_continent(&shared.views.time_series);

    let mut plot = Plot::new("co2_time_series")
        .height(320.0)
        .x_axis_label("Year")
        .y_axis_label(shared.params.co2_measure.display_name());
    if shared.app_state.ui_preferences.show_legend {
        plot = plot.legend(dashboard_legend());
    }

    plot.show(ui, |plot_ui| {
        for (index, (continent, points)) in series.into_iter().enumerate() {
            let line = Line::new(continent, PlotPoints::from(points))
                .color(series_color(index))
                .width(2.0);
            plot_ui.line(line);
        }
    });

    actions
}

/// Split the flat row sequence into one point series per continent,
/// preserving first-encounter order so colors stay stable.
fn series_by_continent(rows: &[TimeSeriesRow]) -> Vec<(String, Vec<[f64; 2]>)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<(String, Vec<[f64; 2]>)> = Vec::new();

    for row in rows {
        let slot = *index.entry(row.country.as_str()).or_insert_with(|| {
            series.push((row.country.clone(), Vec::new()));
            series.len() - 1
        });
        series[slot].1.push([row.year as f64, row.value]);
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(country: &str, year: i32, value: f64) -> TimeSeriesRow {
        TimeSeriesRow {
            country: country.to_string(),
            year,
            value,
        }
    }

    #[test]
    fn test_series_split_preserves_encounter_order() {
        let rows = vec![
            row("Asia", 1800, 1.0),
            row("Europe", 1800, 2.0),
            row("Asia", 1805, 3.0),
        ];

        let series = series_by_continent(&rows);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].0, "Asia");
        assert_eq!(series[0].1, vec![[1800.0, 1.0], [1805.0, 3.0]]);
        assert_eq!(series[1].0, "Europe");
    }
}
