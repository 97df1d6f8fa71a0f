//! World CO2 Emissions Dashboard - Main Entry Point
//!
//! Loads the OWID CO2 dataset from a CSV file and renders the
//! interactive dashboard.

use std::path::PathBuf;

use co2vis_rs::{config::AppState, dataset::Dataset, frontend::DashboardApp};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,co2vis_rs=trace")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting World CO2 Emissions Dashboard");

    // Load application state (recent datasets, preferences)
    let mut app_state = AppState::load_or_default();
    app_state.cleanup_missing_datasets();

    // Resolve the dataset path: CLI argument, then last session, then dialog
    let Some(dataset_path) = resolve_dataset_path(&app_state) else {
        tracing::error!("No dataset selected, exiting");
        std::process::exit(1);
    };

    // The dataset is loaded once; everything after this is a pure
    // projection over it.
    let dataset = match Dataset::from_path(&dataset_path) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load dataset {:?}: {}", dataset_path, e);
            std::process::exit(1);
        }
    };

    app_state.add_recent_dataset(&dataset_path);
    if let Err(e) = app_state.save() {
        tracing::warn!("Failed to save app state: {}", e);
    }

    // Configure eframe options
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([900.0, 600.0])
            .with_title("World CO2 Emissions Dashboard"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "World CO2 Emissions Dashboard",
        native_options,
        Box::new(|cc| Ok(Box::new(DashboardApp::new(cc, dataset, app_state)))),
    );

    tracing::info!("Shutting down");
    result
}

/// Pick the dataset to open at startup.
fn resolve_dataset_path(app_state: &AppState) -> Option<PathBuf> {
    if let Some(arg) = std::env::args().nth(1) {
        return Some(PathBuf::from(arg));
    }

    if let Some(last) = app_state.get_last_dataset() {
        tracing::info!("Restoring last dataset {:?}", last);
        return Some(last.to_path_buf());
    }

    rfd::FileDialog::new()
        .set_title("Select the OWID CO2 dataset")
        .add_filter("CSV files", &["csv"])
        .pick_file()
}
