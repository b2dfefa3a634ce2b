//! Hypnogram timeline rendering.
//!
//! Draws the classic step chart of stage index against time of night,
//! post-stepped so each epoch holds its stage for the full epoch duration.

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use hypnos_chain::SleepStage;

use crate::config::HypnogramConfig;
use crate::error::{RenderError, backend};

/// Renders a session trace as a step-chart hypnogram SVG.
///
/// The x axis is time in minutes from the start of the session; the y axis
/// is the stage index, labeled with stage names.
///
/// # Errors
///
/// Returns [`RenderError::EmptyTrace`] for an empty trace,
/// [`RenderError::InvalidLayout`] for a zero epoch duration or an invalid
/// chart configuration, and [`RenderError::Backend`] if drawing fails.
pub fn render_hypnogram(
    stages: &[SleepStage],
    epoch_minutes: u32,
    config: &HypnogramConfig,
    path: &Path,
) -> Result<(), RenderError> {
    if stages.is_empty() {
        return Err(RenderError::EmptyTrace);
    }
    if epoch_minutes == 0 {
        return Err(RenderError::InvalidLayout {
            reason: "epoch_minutes must be at least 1".to_string(),
        });
    }
    config.validate()?;

    let total_minutes = (stages.len() as u32 * epoch_minutes) as f64;

    let root = SVGBackend::new(path, (config.width_px(), config.height_px())).into_drawing_area();
    root.fill(&WHITE).map_err(backend)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(config.caption(), ("sans-serif", 20))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..total_minutes, -0.5..3.5f64)
        .map_err(backend)?;

    chart
        .configure_mesh()
        .x_desc("Time (minutes)")
        .y_desc("Stage")
        .y_labels(4)
        .y_label_formatter(&|y| {
            // Label only the integer positions that carry a stage.
            let idx = y.round();
            if (idx - y).abs() > 1e-6 || !(0.0..=3.0).contains(&idx) {
                return String::new();
            }
            SleepStage::ALL[idx as usize].name().to_string()
        })
        .draw()
        .map_err(backend)?;

    // Post-step outline: hold each stage for its full epoch.
    let mut points = Vec::with_capacity(stages.len() * 2);
    for (i, stage) in stages.iter().enumerate() {
        let t0 = i as f64 * epoch_minutes as f64;
        let t1 = t0 + epoch_minutes as f64;
        let y = stage.as_index() as f64;
        points.push((t0, y));
        points.push((t1, y));
    }
    chart
        .draw_series(LineSeries::new(points, &BLUE))
        .map_err(backend)?;

    root.present().map_err(backend)?;
    debug!(path = %path.display(), epochs = stages.len(), "hypnogram rendered");
    Ok(())
}
