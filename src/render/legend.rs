use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::model::strategy::Strategy;
use crate::render::style::ChartStyle;
use crate::render::{RenderError, draw_err};

/// Left edge of each legend column when `columns` entries of `column_width`
/// pixels are centred in a strip `width` pixels wide.
pub fn column_starts(width: i32, columns: usize, column_width: i32) -> Vec<i32> {
    let total = column_width * columns as i32;
    let left = (width - total) / 2;
    (0..columns)
        .map(|col| left + col as i32 * column_width)
        .collect()
}

pub fn draw_legend<DB: DrawingBackend>(
    area: &DrawingArea<DB, Shift>,
    style: &ChartStyle,
) -> Result<(), RenderError> {
    let (w, h) = area.dim_in_pixel();
    let swatch = style.px_i32(style.legend_pt);
    let column_width = swatch * 12;
    let starts = column_starts(w as i32, Strategy::ALL.len(), column_width);
    let cy = h as i32 / 2;
    let pad = swatch / 2;

    let text_style = style
        .text_style(style.legend_pt)
        .pos(Pos::new(HPos::Left, VPos::Center));

    if let (Some(&first), Some(&last)) = (starts.first(), starts.last()) {
        area.draw(&Rectangle::new(
            [
                (first - pad, cy - swatch),
                (last + column_width - pad, cy + swatch),
            ],
            BLACK.mix(0.2).stroke_width(2),
        ))
        .map_err(draw_err)?;
    }

    for (x0, strategy) in starts.iter().zip(Strategy::ALL.iter()) {
        area.draw(&Rectangle::new(
            [(*x0, cy - swatch / 2), (*x0 + swatch * 2, cy + swatch / 2)],
            strategy.color().filled(),
        ))
        .map_err(draw_err)?;
        area.draw(&Text::new(
            strategy.label(),
            (*x0 + swatch * 2 + pad, cy),
            text_style.clone(),
        ))
        .map_err(draw_err)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/render/legend.rs"]
mod tests;
