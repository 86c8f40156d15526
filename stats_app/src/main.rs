//! Statistics viewer
//!
//! Opens (or creates) a stats document of key/value rows, maps the rows onto
//! pie-chart slices, and emits the chart through the recording painter. The
//! table widgets and dialogs of a desktop build are external collaborators;
//! this binary drives the same model, chart, and document flows headlessly.

use std::path::Path;
use viz_engine::foundation::logging;
use viz_engine::prelude::*;

const DEFAULT_DOCUMENT_PATH: &str = "stats.json";
const CHART_CENTER: (f32, f32) = (200.0, 200.0);
const CHART_RADIUS: f32 = 180.0;

fn demo_rows() -> StatsKeyValueModel {
    let mut model = StatsKeyValueModel::new();
    model.append("lectures", 36);
    model.append("labs", 48);
    model.append("exams", 16);
    model
}

fn run() -> Result<(), AppError> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_DOCUMENT_PATH.to_string());

    let mut document = StatsDocument::new();
    if Path::new(&path).exists() {
        document.open(&path)?;
    } else {
        log::info!("{path} not found, starting a new document");
    }

    if document.model().is_empty() {
        document.set_model(demo_rows());
    }

    let model = document.model();
    log::info!("{} row(s), value sum {}", model.len(), model.value_sum());
    for (index, slice) in pie_slices(model).iter().enumerate() {
        log::info!(
            "slice {index} \"{}\": start {:.1}°, sweep {:.1}°",
            model.key(index).unwrap_or(""),
            slice.start_angle,
            slice.sweep_angle
        );
    }

    let mut painter = DebugPainter::new();
    draw_pie(
        &mut painter,
        Vec2::new(CHART_CENTER.0, CHART_CENTER.1),
        CHART_RADIUS,
        document.model(),
    );
    log::info!("pie chart emitted {} draw command(s)", painter.commands().len());

    if !document.is_saved() {
        if document.path().is_some() {
            document.save()?;
        } else {
            document.save_as(&path)?;
        }
    }
    Ok(())
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        log::error!("stats viewer exited with error: {err}");
        std::process::exit(1);
    }
}
