//! Abstract-art rendering.
//!
//! One glyph per epoch on a fixed grid, colored by stage, with a small
//! uniform jitter so the grid reads as hand-placed rather than mechanical.

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;
use tracing::debug;

use hypnos_chain::SleepStage;

use crate::config::ArtConfig;
use crate::error::{RenderError, backend};
use crate::style::{Glyph, parse_hex_color, stage_style};

/// Renders a session trace as an abstract glyph-grid SVG.
///
/// The grid is `config.cols()` epochs wide; rows fill top to bottom in
/// epoch order. Jitter displacements are drawn from `rng`, so renders
/// reproduce under a fixed seed.
///
/// # Errors
///
/// Returns [`RenderError::EmptyTrace`] for an empty trace,
/// [`RenderError::InvalidLayout`] for an invalid grid configuration, and
/// [`RenderError::Backend`] if drawing fails.
pub fn render_abstract_art(
    stages: &[SleepStage],
    config: &ArtConfig,
    rng: &mut impl rand::Rng,
    path: &Path,
) -> Result<(), RenderError> {
    if stages.is_empty() {
        return Err(RenderError::EmptyTrace);
    }
    config.validate()?;

    let cols = config.cols();
    let rows = stages.len().div_ceil(cols);
    let cell = f64::from(config.cell_px());
    let width = cols as u32 * config.cell_px();
    let height = rows as u32 * config.cell_px();

    let bg = parse_hex_color(config.background())?;

    let root = SVGBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&bg).map_err(backend)?;

    // Mark radius inside a cell after padding.
    let radius = cell * (0.5 - config.pad());

    for (i, &stage) in stages.iter().enumerate() {
        let row = i / cols;
        let col = i % cols;

        let jitter = config.jitter();
        let dx = rng.random_range(-jitter..=jitter) * cell;
        let dy = rng.random_range(-jitter..=jitter) * cell;
        let cx = col as f64 * cell + cell / 2.0 + dx;
        let cy = row as f64 * cell + cell / 2.0 + dy;

        draw_glyph(&root, stage, cx, cy, radius)?;
    }

    root.present().map_err(backend)?;
    debug!(path = %path.display(), epochs = stages.len(), rows, "abstract art rendered");
    Ok(())
}

/// Draws one stage mark: filled glyph plus a thin white outline.
fn draw_glyph(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    stage: SleepStage,
    cx: f64,
    cy: f64,
    radius: f64,
) -> Result<(), RenderError> {
    let style = stage_style(stage);
    let fill = style.color.filled();
    let outline = WHITE.stroke_width(1);
    let (x, y, r) = (cx as i32, cy as i32, radius as i32);

    match style.glyph {
        Glyph::Circle => {
            area.draw(&Circle::new((x, y), r, fill)).map_err(backend)?;
            area.draw(&Circle::new((x, y), r, outline))
                .map_err(backend)?;
        }
        Glyph::Square => {
            let corners = [(x - r, y - r), (x + r, y + r)];
            area.draw(&Rectangle::new(corners, fill)).map_err(backend)?;
            area.draw(&Rectangle::new(corners, outline))
                .map_err(backend)?;
        }
        Glyph::Diamond => {
            let points = vec![(x, y - r), (x + r, y), (x, y + r), (x - r, y)];
            draw_polygon(area, points, fill, outline)?;
        }
        Glyph::Triangle => {
            // Apex up.
            let points = vec![(x, y - r), (x + r, y + r), (x - r, y + r)];
            draw_polygon(area, points, fill, outline)?;
        }
    }
    Ok(())
}

fn draw_polygon(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    points: Vec<(i32, i32)>,
    fill: ShapeStyle,
    outline: ShapeStyle,
) -> Result<(), RenderError> {
    area.draw(&Polygon::new(points.clone(), fill))
        .map_err(backend)?;
    let mut ring = points;
    ring.push(ring[0]);
    area.draw(&PathElement::new(ring, outline))
        .map_err(backend)?;
    Ok(())
}
