//! Raster rendering of the figure with plotters.
pub mod axis;
pub mod bars;
pub mod fonts;
pub mod geometry;
pub mod pie;
pub mod timeline;

use std::path::PathBuf;

use anyhow::{Context, Result};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::config::ReportConfig;
use crate::figure::{Figure, Panel, PanelKind};

/// Converts typographic points to pixels at the target resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub dpi: f64,
}

impl Scale {
    pub fn new(dpi: u32) -> Self {
        Self { dpi: dpi as f64 }
    }

    pub fn pt(&self, points: f64) -> f64 {
        points * self.dpi / 72.0
    }

    /// Whole pixels, never less than one.
    pub fn px(&self, points: f64) -> i32 {
        self.pt(points).round().max(1.0) as i32
    }

    /// Line width in pixels.
    pub fn stroke(&self, points: f64) -> u32 {
        self.px(points) as u32
    }
}

/// Where one panel landed on the canvas, in backend pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderedPanel {
    pub tag: char,
    pub origin: (i32, i32),
    pub size: (u32, u32),
}

impl RenderedPanel {
    pub fn contains(&self, (x, y): (i32, i32)) -> bool {
        let (x0, y0) = self.origin;
        x >= x0 && y >= y0 && x <= x0 + self.size.0 as i32 && y <= y0 + self.size.1 as i32
    }
}

/// Draw the whole figure onto `root`.
pub fn render_figure<DB>(
    root: &DrawingArea<DB, Shift>,
    figure: &Figure,
    scale: Scale,
) -> Result<Vec<RenderedPanel>>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let (width, _) = root.dim_in_pixel();
    let pad = scale.px(18.0);
    let title_h = scale.px(18.0 * 2.2);
    let (title_area, body) = root.split_vertically(pad + title_h);
    title_area.draw(&Text::new(
        figure.title.clone(),
        (width as i32 / 2, pad + title_h / 2),
        fonts::bold(scale.pt(18.0)).pos(Pos::new(HPos::Center, VPos::Center)),
    ))?;

    let body = body.margin(0, pad, pad, pad);
    let body_size = body.dim_in_pixel();

    let mut rendered = Vec::with_capacity(figure.panels.len());
    for panel in &figure.panels {
        let rect = figure.grid.cell_rect(panel.slot, body_size);
        let area = body.margin(
            rect.y as i32,
            body_size.1.saturating_sub(rect.y + rect.height) as i32,
            rect.x as i32,
            body_size.0.saturating_sub(rect.x + rect.width) as i32,
        );
        render_panel(&area, panel, scale)
            .with_context(|| format!("Failed to draw panel {}", panel.tag))?;
        let placed = RenderedPanel {
            tag: panel.tag,
            origin: area.get_base_pixel(),
            size: area.dim_in_pixel(),
        };
        log::debug!(
            "Panel {} drawn at {:?}, {}x{} px",
            placed.tag,
            placed.origin,
            placed.size.0,
            placed.size.1
        );
        rendered.push(placed);
    }

    Ok(rendered)
}

fn render_panel<DB>(area: &DrawingArea<DB, Shift>, panel: &Panel, scale: Scale) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (title_strip, plot) = area.split_vertically(scale.px(14.0 * 2.0));
    let (strip_w, strip_h) = title_strip.dim_in_pixel();
    let (x, hpos) = if panel.centered_title {
        ((strip_w / 2) as i32, HPos::Center)
    } else {
        (scale.px(6.0), HPos::Left)
    };
    title_strip.draw(&Text::new(
        panel.title.clone(),
        (x, (strip_h / 2) as i32),
        fonts::bold(scale.pt(14.0)).pos(Pos::new(hpos, VPos::Center)),
    ))?;

    match &panel.kind {
        PanelKind::Bars(p) => bars::draw_bars(&plot, p, scale),
        PanelKind::GroupedBars(p) => bars::draw_grouped_bars(&plot, p, scale),
        PanelKind::ThresholdBars(p) => bars::draw_threshold_bars(&plot, p, scale),
        PanelKind::Pie(p) => pie::draw_pie(&plot, p, scale),
        PanelKind::Timeline(p) => timeline::draw_timeline(&plot, p, scale),
    }
}

/// Render `figure` to the configured PNG path and return that path.
pub fn render_png(config: &ReportConfig, figure: &Figure) -> Result<PathBuf> {
    config.validate()?;
    let font_source =
        fonts::install(config.font_path.as_deref(), config.bold_font_path.as_deref())?;
    log::debug!("Using font {}", font_source);

    let size = config.pixel_size();
    log::info!(
        "Rendering {}x{} px figure at {} dpi to {}",
        size.0,
        size.1,
        config.dpi,
        config.output_file.display()
    );

    let root = BitMapBackend::new(&config.output_file, size).into_drawing_area();
    let rendered = render_figure(&root, figure, Scale::new(config.dpi))?;
    root.present()
        .with_context(|| format!("Failed to write {}", config.output_file.display()))?;

    log::info!("Drew {} panels", rendered.len());
    Ok(config.output_file.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_scale_with_dpi() {
        let scale = Scale::new(300);
        assert!((scale.pt(72.0) - 300.0).abs() < 1e-9);
        assert_eq!(scale.px(14.0), 58);
        assert_eq!(Scale::new(1).px(1.0), 1);
        assert_eq!(Scale::new(300).stroke(2.0), 8);
    }

    #[test]
    fn panel_bounds_include_their_edges() {
        let panel = RenderedPanel {
            tag: 'A',
            origin: (10, 20),
            size: (100, 50),
        };
        assert!(panel.contains((10, 20)));
        assert!(panel.contains((110, 70)));
        assert!(!panel.contains((9, 40)));
        assert!(!panel.contains((50, 71)));
    }
}
