//! Vertical, grouped and horizontal bar panels.
//!
//! Categories sit at integer positions on a `CategoryAxis`, so tick labels
//! line up with bar centres.
use anyhow::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use super::axis::CategoryAxis;
use super::{fonts, geometry, Scale};
use crate::figure::{BarPanel, GroupedBarPanel, ThresholdBarPanel};

pub fn draw_bars<DB>(area: &DrawingArea<DB, Shift>, panel: &BarPanel, scale: Scale) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let n = panel.series.len();
    let labels = &panel.series.labels;
    let mut chart = ChartBuilder::on(area)
        .margin(scale.px(6.0))
        .x_label_area_size(scale.px(30.0))
        .y_label_area_size(scale.px(52.0))
        .build_cartesian_2d(
            CategoryAxis::new(n),
            0f64..panel.value_max,
        )?;

    let category = |x: &f64| geometry::category_label(labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&category)
        .y_desc(panel.value_axis.as_str())
        .label_style(fonts::regular(scale.pt(10.0)))
        .axis_desc_style(fonts::bold(scale.pt(12.0)))
        .bold_line_style(BLACK.mix(0.08))
        .light_line_style(WHITE)
        .draw()?;

    let half = panel.bar_width / 2.0;
    chart.draw_series(panel.series.iter().enumerate().map(|(i, (_, value, color))| {
        let x = i as f64;
        Rectangle::new([(x - half, 0.0), (x + half, value)], color.to_plotters().filled())
    }))?;
    let outline = BLACK.stroke_width(scale.stroke(2.0));
    chart.draw_series(panel.series.values.iter().enumerate().map(|(i, &value)| {
        let x = i as f64;
        Rectangle::new([(x - half, 0.0), (x + half, value)], outline.clone())
    }))?;

    let value_style = fonts::bold(scale.pt(11.0)).pos(Pos::new(HPos::Center, VPos::Bottom));
    chart.draw_series(panel.series.values.iter().enumerate().map(|(i, &value)| {
        Text::new(
            panel.format.format(value),
            (i as f64, value + panel.label_offset),
            value_style.clone(),
        )
    }))?;

    if let Some(note) = &panel.note {
        let font_px = scale.pt(10.0);
        let line_h = (font_px * 1.35).round() as i32;
        let pad = (font_px * 0.5).round() as i32;
        let widest = note.lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let box_w = (widest as f64 * font_px * 0.58).round() as i32 + 2 * pad;
        let box_h = line_h * note.lines.len() as i32 + 2 * pad;
        let anchor = (
            -0.5 + note.anchor.0 * n as f64,
            note.anchor.1 * panel.value_max,
        );

        chart.draw_series(std::iter::once(
            EmptyElement::at(anchor)
                + Rectangle::new(
                    [(-box_w, 0), (0, box_h)],
                    note.fill.to_plotters().mix(note.alpha).filled(),
                ),
        ))?;
        let note_style = fonts::bold(font_px);
        chart.draw_series(note.lines.iter().enumerate().map(|(i, line)| {
            EmptyElement::at(anchor)
                + Text::new(
                    line.clone(),
                    (-box_w + pad, pad + i as i32 * line_h),
                    note_style.clone(),
                )
        }))?;
    }

    Ok(())
}

pub fn draw_grouped_bars<DB>(
    area: &DrawingArea<DB, Shift>,
    panel: &GroupedBarPanel,
    scale: Scale,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let n = panel.series.len();
    let labels = &panel.series.labels;
    let mut chart = ChartBuilder::on(area)
        .margin(scale.px(6.0))
        .x_label_area_size(scale.px(30.0))
        .y_label_area_size(scale.px(52.0))
        .build_cartesian_2d(
            CategoryAxis::new(n),
            0f64..panel.value_max,
        )?;

    let category = |x: &f64| geometry::category_label(labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(n)
        .x_label_formatter(&category)
        .y_desc(panel.value_axis.as_str())
        .label_style(fonts::regular(scale.pt(10.0)))
        .axis_desc_style(fonts::bold(scale.pt(12.0)))
        .bold_line_style(BLACK.mix(0.08))
        .light_line_style(WHITE)
        .draw()?;

    let width = panel.bar_width;
    let outline = BLACK.stroke_width(scale.stroke(1.5));
    let value_style = fonts::bold(scale.pt(9.0)).pos(Pos::new(HPos::Center, VPos::Bottom));
    let legend_w = scale.px(20.0);
    let legend_h = scale.px(5.0);

    for (g, group) in panel.series.groups().into_iter().enumerate() {
        // First group left of the category centre, second to the right.
        let shift = (g as f64 - 0.5) * width;
        let color = group.color.to_plotters();
        let bar = |i: usize, value: f64| {
            let x = i as f64 + shift;
            [(x - width / 2.0, 0.0), (x + width / 2.0, value)]
        };

        chart
            .draw_series(
                group
                    .values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Rectangle::new(bar(i, v), color.filled())),
            )?
            .label(group.name.as_str())
            .legend(move |(x, y)| {
                Rectangle::new([(x, y - legend_h), (x + legend_w, y + legend_h)], color.filled())
            });
        chart.draw_series(
            group
                .values
                .iter()
                .enumerate()
                .map(|(i, &v)| Rectangle::new(bar(i, v), outline.clone())),
        )?;
        chart.draw_series(group.values.iter().enumerate().map(|(i, &v)| {
            Text::new(
                panel.format.format(v),
                (i as f64 + shift, v + panel.label_offset),
                value_style.clone(),
            )
        }))?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::MiddleRight)
        .margin(scale.px(6.0))
        .legend_area_size(scale.px(26.0))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(fonts::regular(scale.pt(11.0)))
        .draw()?;

    Ok(())
}

pub fn draw_threshold_bars<DB>(
    area: &DrawingArea<DB, Shift>,
    panel: &ThresholdBarPanel,
    scale: Scale,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let n = panel.series.len();
    let labels = &panel.series.labels;
    let mut chart = ChartBuilder::on(area)
        .margin(scale.px(6.0))
        .x_label_area_size(scale.px(30.0))
        .y_label_area_size(scale.px(90.0))
        .build_cartesian_2d(
            0f64..panel.value_max,
            CategoryAxis::new(n),
        )?;

    let category = |y: &f64| geometry::category_label(labels, *y);
    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&category)
        .x_desc(panel.value_axis.as_str())
        .label_style(fonts::regular(scale.pt(10.0)))
        .axis_desc_style(fonts::bold(scale.pt(12.0)))
        .bold_line_style(BLACK.mix(0.08))
        .light_line_style(WHITE)
        .draw()?;

    let half = panel.bar_height / 2.0;
    chart.draw_series(panel.series.iter().enumerate().map(|(i, (_, value, color))| {
        let y = i as f64;
        Rectangle::new([(0.0, y - half), (value, y + half)], color.to_plotters().filled())
    }))?;
    let outline = BLACK.stroke_width(scale.stroke(1.5));
    chart.draw_series(panel.series.values.iter().enumerate().map(|(i, &value)| {
        let y = i as f64;
        Rectangle::new([(0.0, y - half), (value, y + half)], outline.clone())
    }))?;

    let value_style = fonts::bold(scale.pt(10.0)).pos(Pos::new(HPos::Left, VPos::Center));
    chart.draw_series(panel.series.values.iter().enumerate().map(|(i, &value)| {
        Text::new(
            panel.format.format(value),
            (value + panel.label_offset, i as f64),
            value_style.clone(),
        )
    }))?;

    let (plot_w, plot_h) = chart.plotting_area().dim_in_pixel();
    let px_per_unit = (
        plot_w as f64 / panel.value_max,
        plot_h as f64 / n.max(1) as f64,
    );
    let target = panel.target.value;
    let line_style = panel
        .target
        .color
        .to_plotters()
        .mix(0.7)
        .stroke_width(scale.stroke(2.0));
    let dashes = geometry::dashed_segments(
        (target, -0.5),
        (target, n as f64 - 0.5),
        scale.pt(7.4),
        scale.pt(3.2),
        px_per_unit,
    );
    let legend_w = scale.px(20.0);
    chart
        .draw_series(
            dashes
                .into_iter()
                .map(|segment| PathElement::new(segment, line_style.clone())),
        )?
        .label(panel.target.label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + legend_w, y)], line_style.clone()));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .margin(scale.px(6.0))
        .legend_area_size(scale.px(26.0))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK.mix(0.3))
        .label_font(fonts::regular(scale.pt(10.0)))
        .draw()?;

    Ok(())
}
