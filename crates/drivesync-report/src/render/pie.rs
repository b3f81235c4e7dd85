//! Proportion panel drawn directly in pixel space.
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{fonts, geometry, Scale};
use crate::figure::PiePanel;

const RADIUS_FRACTION: f64 = 0.36;
const PERCENT_AT: f64 = 0.6;
const LABEL_AT: f64 = 1.1;

pub fn draw_pie<DB>(area: &DrawingArea<DB, Shift>, panel: &PiePanel, scale: Scale) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (w, h) = area.dim_in_pixel();
    let center = (w as f64 / 2.0, h as f64 / 2.0);
    let radius = RADIUS_FRACTION * w.min(h) as f64;
    let wedges = panel.wedges();

    for (wedge, (_, _, color)) in wedges.iter().zip(panel.series.iter()) {
        let outline = geometry::wedge_polygon(center, radius, wedge, 1.0);
        area.draw(&Polygon::new(outline, color.to_plotters().filled()))?;
    }

    let percent_style = fonts::bold(scale.pt(10.0))
        .color(&WHITE)
        .pos(Pos::new(HPos::Center, VPos::Center));
    let label_font = fonts::regular(scale.pt(10.0));

    for (wedge, label) in wedges.iter().zip(&panel.series.labels) {
        let origin = geometry::wedge_center(center, radius, wedge);
        let mid = wedge.mid_deg();

        area.draw(&Text::new(
            format!("{:.1}%", wedge.share * 100.0),
            geometry::polar(origin, PERCENT_AT * radius, mid),
            percent_style.clone(),
        ))?;

        // Labels on the left half hang off their anchor to the left.
        let hpos = if mid.to_radians().cos() < 0.0 {
            HPos::Right
        } else {
            HPos::Left
        };
        area.draw(&Text::new(
            label.clone(),
            geometry::polar(origin, LABEL_AT * radius, mid),
            label_font.clone().pos(Pos::new(hpos, VPos::Center)),
        ))?;
    }

    Ok(())
}
