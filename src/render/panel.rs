use plotters::coord::Shift;
use plotters::prelude::*;

use crate::model::strategy::Strategy;
use crate::render::labels::{LabelSide, format_height};
use crate::render::legend::draw_legend;
use crate::render::style::{ChartStyle, X_LABEL, Y_LABEL, Y_MAX};
use crate::render::{PanelSpec, RenderError, draw_err};

/// Name of the dataset whose tick sits at `x`, if `x` lands on one.
pub fn dataset_at(datasets: &[String], x: f64) -> Option<&str> {
    let idx = x.round();
    if idx < 0.0 || (x - idx).abs() > 1e-6 {
        return None;
    }
    datasets.get(idx as usize).map(String::as_str)
}

pub fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    spec: &PanelSpec<'_>,
    style: &ChartStyle,
) -> Result<(), RenderError> {
    let datasets = &spec.data.datasets;
    let n = datasets.len();

    let (_, h) = area.dim_in_pixel();
    let legend_h = if spec.show_legend {
        style.px_i32(style.legend_pt) * 3
    } else {
        0
    };
    let (chart_area, legend_area) = area.split_vertically(h as i32 - legend_h);

    // Asking for `n` labels over a span of `n` puts the key points on the
    // integers, one per dataset.
    let x_range = -0.5f64..n as f64 - 0.5;

    let x_label_area = if spec.show_xlabel {
        style.px_i32(style.tick_pt + style.axis_label_pt) * 2
    } else {
        style.px_i32(style.tick_pt)
    };

    let mut chart = ChartBuilder::on(&chart_area)
        .caption(&spec.title, style.font(style.title_pt))
        .margin(style.px_i32(style.margin_pt))
        .x_label_area_size(x_label_area)
        .y_label_area_size(style.px_i32(style.tick_pt + style.axis_label_pt) * 2)
        .build_cartesian_2d(x_range, 0f64..Y_MAX)
        .map_err(draw_err)?;

    let tick_names = |x: &f64| dataset_at(datasets, *x).unwrap_or_default().to_string();
    let no_names = |_: &f64| String::new();
    let y_ticks = |y: &f64| format!("{y:.1}");

    {
        let mut mesh = chart.configure_mesh();
        mesh.disable_mesh()
            .x_labels(n.max(1))
            .y_labels(6)
            .x_label_style(style.font(style.tick_pt))
            .y_label_style(style.font(style.tick_pt))
            .axis_desc_style(style.font(style.axis_label_pt))
            .y_desc(Y_LABEL)
            .y_label_formatter(&y_ticks);
        if spec.show_xlabel {
            mesh.x_desc(X_LABEL).x_label_formatter(&tick_names);
        } else {
            mesh.x_label_formatter(&no_names);
        }
        mesh.draw().map_err(draw_err)?;
    }

    let half = style.bar_width / 2.0;
    let label_offset = style.px_i32(style.label_offset_pt);
    let whisker = BLACK.stroke_width(style.px_i32(1.0).max(1) as u32);

    for (slot, strategy) in Strategy::ALL.iter().enumerate() {
        let series = spec.data.series_for(*strategy);
        let offset = style.bar_offset(slot);
        let fill = strategy.color().filled();

        chart
            .draw_series(series.averages.iter().enumerate().map(|(i, &avg)| {
                let center = i as f64 + offset;
                Rectangle::new([(center - half, 0.0), (center + half, avg)], fill)
            }))
            .map_err(draw_err)?;

        chart
            .draw_series(
                series
                    .averages
                    .iter()
                    .zip(series.stds.iter())
                    .enumerate()
                    .map(|(i, (&avg, &std))| {
                        ErrorBar::new_vertical(
                            i as f64 + offset,
                            avg - std,
                            avg,
                            avg + std,
                            whisker,
                            0,
                        )
                    }),
            )
            .map_err(draw_err)?;

        let side = LabelSide::for_slot(slot);
        let label_style = style.text_style(style.bar_label_pt).pos(side.anchor());
        chart
            .draw_series(series.averages.iter().enumerate().map(|(i, &avg)| {
                EmptyElement::at((i as f64 + offset, avg))
                    + Text::new(format_height(avg), side.offset(label_offset), label_style.clone())
            }))
            .map_err(draw_err)?;
    }

    if spec.show_legend {
        draw_legend(&legend_area, style)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/panel.rs"]
mod tests;
