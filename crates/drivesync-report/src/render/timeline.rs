//! The G-force timeline: signal, threshold lines, event windows and
//! annotations.
use anyhow::Result;
use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::{fonts, geometry, Scale};
use crate::figure::TimelinePanel;
use crate::signal::Annotation;

const WINDOW_ALPHA: f64 = 0.3;
const THRESHOLD_ALPHA: f64 = 0.8;
const BOX_ALPHA: f64 = 0.8;

pub fn draw_timeline<DB>(
    area: &DrawingArea<DB, Shift>,
    panel: &TimelinePanel,
    scale: Scale,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let t_min = panel.signal.time.first().copied().unwrap_or(0.0);
    let t_max = panel.signal.time.last().copied().unwrap_or(1.0).max(t_min + 1.0);

    let mut chart = ChartBuilder::on(area)
        .margin(scale.px(6.0))
        .x_label_area_size(scale.px(30.0))
        .y_label_area_size(scale.px(40.0))
        .build_cartesian_2d(t_min..t_max, 0f64..panel.value_max)?;

    chart
        .configure_mesh()
        .x_desc(panel.time_axis.as_str())
        .y_desc(panel.value_axis.as_str())
        .label_style(fonts::regular(scale.pt(10.0)))
        .axis_desc_style(fonts::bold(scale.pt(12.0)))
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(WHITE)
        .draw()?;

    let (plot_w, plot_h) = chart.plotting_area().dim_in_pixel();
    let px_per_unit = (
        plot_w as f64 / (t_max - t_min),
        plot_h as f64 / panel.value_max,
    );

    // Windows go underneath everything else. They are named only in the
    // legend.
    chart.draw_series(panel.events.iter().map(|event| {
        let (start, end) = event.window;
        Rectangle::new(
            [(start, 0.0), (end, panel.value_max)],
            event.color.to_plotters().mix(WINDOW_ALPHA).filled(),
        )
    }))?;

    let legend_w = scale.px(20.0);
    let legend_h = scale.px(5.0);

    let signal_style = panel
        .signal_color
        .to_plotters()
        .stroke_width(scale.stroke(2.0));
    chart
        .draw_series(LineSeries::new(panel.signal.points(), signal_style.clone()))?
        .label(panel.signal_label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_w, y)], signal_style.clone()));

    for threshold in &panel.thresholds {
        let style = threshold
            .color
            .to_plotters()
            .mix(THRESHOLD_ALPHA)
            .stroke_width(scale.stroke(2.0));
        let dashes = geometry::dashed_segments(
            (t_min, threshold.value),
            (t_max, threshold.value),
            scale.pt(7.4),
            scale.pt(3.2),
            px_per_unit,
        );
        chart
            .draw_series(
                dashes
                    .into_iter()
                    .map(|segment| PathElement::new(segment, style.clone())),
            )?
            .label(threshold.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_w, y)], style.clone()));
    }

    // Window legend entries come after the lines.
    for event in &panel.events {
        let fill = event.color.to_plotters().mix(WINDOW_ALPHA).filled();
        chart
            .draw_series(std::iter::empty::<Rectangle<(f64, f64)>>())?
            .label(event.label.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - legend_h), (x + legend_w, y + legend_h)], fill)
            });
    }

    for event in &panel.events {
        draw_annotation(&mut chart, &event.annotation, scale, px_per_unit)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .margin(scale.px(6.0))
        .legend_area_size(scale.px(26.0))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(fonts::regular(scale.pt(10.0)))
        .draw()?;

    Ok(())
}

/// Arrow from the text anchor to the annotated point, then the text block
/// with its baseline on the anchor.
fn draw_annotation<DB>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    annotation: &Annotation,
    scale: Scale,
    px_per_unit: (f64, f64),
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let color = annotation.color.to_plotters();
    let stroke = color.stroke_width(scale.stroke(2.0));

    chart.draw_series(std::iter::once(PathElement::new(
        vec![annotation.text_at, annotation.point],
        stroke,
    )))?;
    let head = geometry::arrow_head(
        annotation.text_at,
        annotation.point,
        scale.pt(8.0),
        px_per_unit,
    );
    chart.draw_series(std::iter::once(PathElement::new(head, stroke)))?;

    let font_px = scale.pt(10.0);
    let line_h = (font_px * 1.2).round() as i32;
    let n = annotation.lines.len() as i32;

    if let Some(fill) = annotation.boxed {
        let pad = (font_px * 0.3).round() as i32;
        let widest = annotation
            .lines
            .iter()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        let box_w = (widest as f64 * font_px * 0.62).round() as i32;
        chart.draw_series(std::iter::once(
            EmptyElement::at(annotation.text_at)
                + Rectangle::new(
                    [(-pad, -n * line_h - pad), (box_w + pad, pad)],
                    fill.to_plotters().mix(BOX_ALPHA).filled(),
                ),
        ))?;
    }

    let text_style = fonts::bold(font_px)
        .color(&color)
        .pos(Pos::new(HPos::Left, VPos::Bottom));
    chart.draw_series(annotation.lines.iter().enumerate().map(|(i, line)| {
        EmptyElement::at(annotation.text_at)
            + Text::new(
                line.clone(),
                (0, -(n - 1 - i as i32) * line_h),
                text_style.clone(),
            )
    }))?;

    Ok(())
}
